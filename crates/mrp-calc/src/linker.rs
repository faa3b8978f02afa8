//! 需求連結：根物料 ↔ 外部預測

use std::collections::HashMap;

use rust_decimal::Decimal;

use bom_graph::BomGraph;
use mrp_core::{ForecastDemand, PlanningConfig, SkippedRoot};

/// 需求連結器
pub struct DemandLinker;

impl DemandLinker {
    /// 將外部預測量連結到 BOM 根物料
    ///
    /// 依圖的首見順序處理每個根物料：先透過翻譯表取得外部參照，
    /// 再查預測量。翻譯失敗或預測缺漏/低於門檻的根物料進入跳過
    /// 列表並排除於展開之外。
    pub fn link(
        graph: &BomGraph,
        translations: &HashMap<String, String>,
        forecasts: &HashMap<String, Decimal>,
        config: &PlanningConfig,
    ) -> (Vec<ForecastDemand>, Vec<SkippedRoot>) {
        let mut demands = Vec::new();
        let mut skipped = Vec::new();

        for root_id in graph.roots() {
            let reference = match translations.get(root_id) {
                Some(reference) => reference,
                None => {
                    tracing::debug!("根物料 {} 無外部參照，跳過", root_id);
                    skipped.push(SkippedRoot::reference_not_found(root_id.to_string()));
                    continue;
                }
            };

            match forecasts.get(reference) {
                Some(&quantity) if quantity >= config.min_forecast_qty => {
                    demands.push(ForecastDemand::new(
                        root_id.to_string(),
                        quantity,
                        reference.clone(),
                    ));
                }
                _ => {
                    tracing::debug!("根物料 {} 預測缺漏或低於門檻，跳過", root_id);
                    skipped.push(SkippedRoot::below_minimum(root_id.to_string()));
                }
            }
        }

        tracing::info!(
            "需求連結完成：{} 個根物料納入，{} 個跳過",
            demands.len(),
            skipped.len()
        );

        (demands, skipped)
    }
}
