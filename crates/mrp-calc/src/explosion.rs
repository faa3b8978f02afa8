//! BOM 展開：多層需求爆炸與共用件彙總

use std::collections::{BTreeSet, HashMap, HashSet};

use rayon::prelude::*;
use rust_decimal::Decimal;

use bom_graph::BomGraph;
use mrp_core::{CyclicEdge, ForecastDemand, RequirementAggregate};

/// 單次展開的累加結果（per-root，可結合/交換地合併）
#[derive(Debug, Default)]
pub struct ExplosionOutcome {
    /// 子件ID → 需求累加器
    pub aggregates: HashMap<String, RequirementAggregate>,

    /// 被循環防護跳過的邊
    pub cyclic_edges: BTreeSet<CyclicEdge>,
}

impl ExplosionOutcome {
    /// 合併另一份結果（map-reduce 合併步驟）
    pub fn merge(mut self, other: ExplosionOutcome) -> Self {
        for (component_id, aggregate) in other.aggregates {
            match self.aggregates.get_mut(&component_id) {
                Some(existing) => existing.absorb(aggregate),
                None => {
                    self.aggregates.insert(component_id, aggregate);
                }
            }
        }
        self.cyclic_edges.extend(other.cyclic_edges);
        self
    }
}

/// BOM 展開器
pub struct BomExploder;

impl BomExploder {
    /// 展開所有需求根物料，彙總各子件的毛/淨需求
    ///
    /// 根物料間彼此獨立，以 rayon 平行展開後合併；
    /// 合併僅做數量加總與根集合聯集，滿足結合律與交換律。
    pub fn explode(graph: &BomGraph, demands: &[ForecastDemand]) -> ExplosionOutcome {
        demands
            .par_iter()
            .map(|demand| Self::explode_root(graph, demand))
            .reduce(ExplosionOutcome::default, ExplosionOutcome::merge)
    }

    /// 展開單一根物料
    fn explode_root(graph: &BomGraph, demand: &ForecastDemand) -> ExplosionOutcome {
        let mut outcome = ExplosionOutcome::default();
        let mut ancestors: HashSet<String> = HashSet::new();
        ancestors.insert(demand.root_id.clone());

        Self::explode_node(
            graph,
            &demand.root_id,
            demand.quantity,
            &demand.root_id,
            &mut ancestors,
            &mut outcome,
        );

        outcome
    }

    /// 深度優先展開目前節點的用料邊
    ///
    /// 祖先鏈在遞迴前插入、返回後移除，確保兄弟分支之間
    /// 不共享循環檢查狀態；鏈沿路徑嚴格增長，保證終止。
    fn explode_node(
        graph: &BomGraph,
        node_id: &str,
        parent_qty: Decimal,
        root_id: &str,
        ancestors: &mut HashSet<String>,
        outcome: &mut ExplosionOutcome,
    ) {
        for edge in graph.children(node_id) {
            // 循環防護：子件已在當前路徑上，整條邊跳過
            if ancestors.contains(&edge.component_id) {
                outcome.cyclic_edges.insert(CyclicEdge {
                    parent_id: node_id.to_string(),
                    component_id: edge.component_id.clone(),
                    root_id: root_id.to_string(),
                });
                continue;
            }

            let gross = parent_qty * edge.quantity_per_parent;
            let net = gross * (Decimal::ONE + edge.wastage_pct / Decimal::ONE_HUNDRED);

            outcome
                .aggregates
                .entry(edge.component_id.clone())
                .or_insert_with(|| RequirementAggregate::from_edge(edge))
                .accumulate(gross, net, root_id);

            ancestors.insert(edge.component_id.clone());
            Self::explode_node(graph, &edge.component_id, net, root_id, ancestors, outcome);
            ancestors.remove(&edge.component_id);
        }
    }

    /// 取出排序後的累加器列表（依子件ID，確保逐次執行結果一致）
    pub fn into_sorted_aggregates(outcome: ExplosionOutcome) -> Vec<RequirementAggregate> {
        let mut aggregates: Vec<RequirementAggregate> =
            outcome.aggregates.into_values().collect();
        aggregates.sort_by(|a, b| a.component_id.cmp(&b.component_id));
        aggregates
    }
}
