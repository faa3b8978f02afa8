//! 彙總：類別統計與前瞻訂購日曆

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mrp_core::{ComponentRequirement, ComponentType, OrderStatus};

/// 類別彙總列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    /// 物料類別
    pub component_type: ComponentType,

    /// 物料數量
    pub item_count: usize,

    /// 淨需求合計
    pub total_net_qty: Decimal,

    /// 採購金額合計
    pub total_procurement_cost: Decimal,

    /// 平均庫存可用天數
    pub avg_days_of_stock: Decimal,

    /// Urgent 物料數
    pub urgent_count: usize,

    /// 占總採購金額的百分比
    pub cost_share_pct: Decimal,
}

/// 訂購日曆項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCalendarEntry {
    /// 物料ID
    pub component_id: String,

    /// 供應商
    pub supplier: String,

    /// 建議訂購量
    pub order_qty: Decimal,

    /// 最遲下單日
    pub order_by_date: NaiveDate,

    /// 預計到貨日（下單日 + 提前期）
    pub expected_arrival: NaiveDate,

    /// 優先分數
    pub priority_score: u8,

    /// 訂購狀態
    pub order_status: OrderStatus,
}

/// 類別與時程彙總器
pub struct Summarizer;

impl Summarizer {
    /// 依物料類別彙總需求，金額遞減排序
    pub fn by_category(requirements: &[ComponentRequirement]) -> Vec<CategorySummary> {
        let mut buckets: HashMap<ComponentType, Vec<&ComponentRequirement>> = HashMap::new();
        for req in requirements {
            buckets.entry(req.component_type).or_default().push(req);
        }

        let grand_total: Decimal = requirements.iter().map(|r| r.procurement_cost).sum();

        let mut summaries: Vec<CategorySummary> = buckets
            .into_iter()
            .map(|(component_type, rows)| {
                let item_count = rows.len();
                let total_net_qty = rows.iter().map(|r| r.net_qty).sum();
                let total_procurement_cost: Decimal =
                    rows.iter().map(|r| r.procurement_cost).sum();
                let days_sum: Decimal = rows.iter().map(|r| r.days_of_stock).sum();
                let urgent_count = rows
                    .iter()
                    .filter(|r| r.order_status == OrderStatus::Urgent)
                    .count();

                let avg_days_of_stock = days_sum / Decimal::from(item_count);
                let cost_share_pct = if grand_total.is_zero() {
                    Decimal::ZERO
                } else {
                    total_procurement_cost / grand_total * Decimal::ONE_HUNDRED
                };

                CategorySummary {
                    component_type,
                    item_count,
                    total_net_qty,
                    total_procurement_cost,
                    avg_days_of_stock,
                    urgent_count,
                    cost_share_pct,
                }
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.total_procurement_cost
                .cmp(&a.total_procurement_cost)
                .then_with(|| a.component_type.cmp(&b.component_type))
        });
        summaries
    }

    /// 建立前瞻訂購日曆
    ///
    /// 只納入建議訂購量 > 0 的物料。Urgent 物料最遲下單日為今天，
    /// 其餘為今天 + max(0, 庫存天數 − 提前期)；依下單日、
    /// 再依優先分數遞減排序。
    pub fn order_calendar(
        requirements: &[ComponentRequirement],
        as_of: NaiveDate,
    ) -> Vec<OrderCalendarEntry> {
        let mut entries: Vec<OrderCalendarEntry> = requirements
            .iter()
            .filter(|r| r.recommended_order_qty > Decimal::ZERO)
            .map(|req| {
                let order_by_date = if req.order_status == OrderStatus::Urgent {
                    as_of
                } else {
                    let slack = (req.days_of_stock - Decimal::from(req.lead_time_days))
                        .max(Decimal::ZERO);
                    as_of + Duration::days(slack.floor().to_i64().unwrap_or(0))
                };

                let expected_arrival =
                    order_by_date + Duration::days(i64::from(req.lead_time_days));

                OrderCalendarEntry {
                    component_id: req.component_id.clone(),
                    supplier: req.supplier.clone(),
                    order_qty: req.recommended_order_qty,
                    order_by_date,
                    expected_arrival,
                    priority_score: req.priority_score,
                    order_status: req.order_status,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            a.order_by_date
                .cmp(&b.order_by_date)
                .then_with(|| b.priority_score.cmp(&a.priority_score))
                .then_with(|| a.component_id.cmp(&b.component_id))
        });
        entries
    }
}
