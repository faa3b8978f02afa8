//! MRP 主計算器（管線入口）

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use bom_graph::BomGraph;
use mrp_core::{PlanningConfig, ProcurementParams};

use crate::abc::AbcClassifier;
use crate::explosion::BomExploder;
use crate::linker::DemandLinker;
use crate::procurement::ProcurementCalculator;
use crate::summary::Summarizer;
use crate::MrpAnalysis;

/// MRP 計算器
pub struct MrpCalculator {
    /// BOM 圖（來自 bom-graph 建構器）
    graph: BomGraph,

    /// 規劃配置
    config: PlanningConfig,
}

impl MrpCalculator {
    /// 創建新的 MRP 計算器
    pub fn new(graph: BomGraph, config: PlanningConfig) -> Self {
        Self { graph, config }
    }

    /// 主計算入口：需求連結 → 展開 → ABC → 採購 → 彙總
    ///
    /// 所有外部資料（翻譯表、預測、庫存、採購參數）在呼叫前已完整
    /// 具體化；各階段為對該快照的確定性純函數，`as_of` 由呼叫端
    /// 傳入以保證日曆輸出可重現。
    pub fn analyze(
        &self,
        translations: &HashMap<String, String>,
        forecasts: &HashMap<String, Decimal>,
        inventory: &HashMap<String, Decimal>,
        params: &HashMap<String, ProcurementParams>,
        as_of: NaiveDate,
    ) -> mrp_core::Result<MrpAnalysis> {
        tracing::info!(
            "開始 MRP 分析：{} 個父件，{} 條邊，{} 筆預測",
            self.graph.parent_count(),
            self.graph.edge_count(),
            forecasts.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 需求連結
        tracing::debug!("Step 1: 需求連結");
        let (demands, skipped_roots) =
            DemandLinker::link(&self.graph, translations, forecasts, &self.config);

        // Step 2: BOM 展開（根物料平行展開後合併）
        tracing::debug!("Step 2: BOM 展開，{} 個根物料", demands.len());
        let outcome = BomExploder::explode(&self.graph, &demands);
        let cyclic_edges: Vec<_> = outcome.cyclic_edges.iter().cloned().collect();
        for cyclic in &cyclic_edges {
            tracing::warn!(
                "偵測到循環引用，已跳過：{} → {}（根物料 {}）",
                cyclic.parent_id,
                cyclic.component_id,
                cyclic.root_id
            );
        }
        let aggregates = BomExploder::into_sorted_aggregates(outcome);
        tracing::debug!("展開完成：{} 個子件", aggregates.len());

        // Step 3: ABC 分類
        tracing::debug!("Step 3: ABC 分類");
        let classified = AbcClassifier::classify(aggregates, &self.config);

        // Step 4: 採購計算
        tracing::debug!("Step 4: 採購計算");
        let procurement = ProcurementCalculator::calculate(
            classified,
            &self.graph,
            inventory,
            params,
            &self.config,
        );

        // Step 5: 類別彙總與訂購日曆
        tracing::debug!("Step 5: 彙總");
        let category_summary = Summarizer::by_category(&procurement.requirements);
        let order_calendar = Summarizer::order_calendar(&procurement.requirements, as_of);

        let elapsed = start_time.elapsed();
        tracing::info!(
            "MRP 分析完成：{} 個物料需求，{} 個跳過，耗時 {:?}",
            procurement.requirements.len(),
            skipped_roots.len(),
            elapsed
        );

        Ok(MrpAnalysis {
            requirements: procurement.requirements,
            skipped_roots,
            cyclic_edges,
            missing_params: procurement.missing_params,
            category_summary,
            order_calendar,
            calculation_time_ms: Some(elapsed.as_millis()),
        })
    }

    /// 取得 BOM 圖引用
    pub fn graph(&self) -> &BomGraph {
        &self.graph
    }

    /// 取得規劃配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrp_core::{ComponentEdge, OrderStatus};

    fn edge(parent: &str, component: &str, qty: i64, cost: &str) -> ComponentEdge {
        ComponentEdge::new(
            parent.to_string(),
            component.to_string(),
            Decimal::from(qty),
        )
        .with_unit_cost(cost.parse().unwrap())
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn single_root_fixture() -> (
        BomGraph,
        HashMap<String, String>,
        HashMap<String, Decimal>,
    ) {
        let mut graph = BomGraph::new();
        graph.add_edge(edge("SKU-001", "COMP-1", 2, "1.50"));
        graph.add_edge(edge("SKU-001", "COMP-2", 1, "0.25"));

        let translations =
            HashMap::from([("SKU-001".to_string(), "ASIN-1".to_string())]);
        let forecasts = HashMap::from([("ASIN-1".to_string(), Decimal::from(90))]);

        (graph, translations, forecasts)
    }

    #[test]
    fn test_full_pipeline_smoke() {
        let (graph, translations, forecasts) = single_root_fixture();
        let calculator = MrpCalculator::new(graph, PlanningConfig::default());

        let analysis = calculator
            .analyze(
                &translations,
                &forecasts,
                &HashMap::new(),
                &HashMap::new(),
                as_of(),
            )
            .unwrap();

        assert_eq!(analysis.requirements.len(), 2);
        assert!(analysis.skipped_roots.is_empty());
        assert!(analysis.cyclic_edges.is_empty());
        // 無採購參數：每個物料都有缺漏通告
        assert_eq!(analysis.missing_params.len(), 2);
        assert!(!analysis.category_summary.is_empty());
        assert!(analysis.calculation_time_ms.is_some());

        // 全無庫存 → 全部 Urgent → 日曆今天下單
        assert!(analysis
            .requirements
            .iter()
            .all(|r| r.order_status == OrderStatus::Urgent));
        assert!(analysis
            .order_calendar
            .iter()
            .all(|entry| entry.order_by_date == as_of()));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let (graph, translations, forecasts) = single_root_fixture();
        let calculator = MrpCalculator::new(graph, PlanningConfig::default());

        let run = |calc: &MrpCalculator| {
            calc.analyze(
                &translations,
                &forecasts,
                &HashMap::new(),
                &HashMap::new(),
                as_of(),
            )
            .unwrap()
        };

        let first = run(&calculator);
        let second = run(&calculator);

        // 凍結輸入下兩次執行的需求列完全一致
        assert_eq!(first.requirements, second.requirements);
    }

    #[test]
    fn test_pipeline_skips_unlinked_roots() {
        let mut graph = BomGraph::new();
        graph.add_edge(edge("SKU-001", "COMP-1", 1, "1"));
        graph.add_edge(edge("SKU-002", "COMP-2", 1, "1"));

        let translations =
            HashMap::from([("SKU-001".to_string(), "ASIN-1".to_string())]);
        let forecasts = HashMap::from([("ASIN-1".to_string(), Decimal::from(50))]);

        let calculator = MrpCalculator::new(graph, PlanningConfig::default());
        let analysis = calculator
            .analyze(
                &translations,
                &forecasts,
                &HashMap::new(),
                &HashMap::new(),
                as_of(),
            )
            .unwrap();

        // SKU-002 無翻譯 → 跳過，其子件不出現在需求中
        assert_eq!(analysis.skipped_roots.len(), 1);
        assert_eq!(analysis.skipped_roots[0].root_id, "SKU-002");
        assert!(analysis
            .requirements
            .iter()
            .all(|r| r.component_id != "COMP-2"));
    }

    #[test]
    fn test_pipeline_surfaces_cycles() {
        let mut graph = BomGraph::new();
        graph.add_edge(edge("SKU-001", "SUB-1", 1, "1"));
        graph.add_edge(edge("SUB-1", "SUB-2", 1, "1"));
        graph.add_edge(edge("SUB-2", "SUB-1", 1, "1"));

        let translations =
            HashMap::from([("SKU-001".to_string(), "ASIN-1".to_string())]);
        let forecasts = HashMap::from([("ASIN-1".to_string(), Decimal::from(100))]);

        let calculator = MrpCalculator::new(graph, PlanningConfig::default());
        let analysis = calculator
            .analyze(
                &translations,
                &forecasts,
                &HashMap::new(),
                &HashMap::new(),
                as_of(),
            )
            .unwrap();

        assert_eq!(analysis.cyclic_edges.len(), 1);
        assert_eq!(analysis.cyclic_edges[0].parent_id, "SUB-2");
        assert_eq!(analysis.cyclic_edges[0].component_id, "SUB-1");
    }
}
