//! ABC 分類：依累計金額占比分層

use rust_decimal::Decimal;

use mrp_core::{AbcClass, PlanningConfig, RequirementAggregate};

/// 分類後的需求彙總（依總金額遞減排序）
#[derive(Debug, Clone)]
pub struct ClassifiedAggregate {
    /// 需求累加器
    pub aggregate: RequirementAggregate,

    /// 總金額（淨需求 × 單位成本）
    pub total_value: Decimal,

    /// ABC 分類
    pub abc_class: AbcClass,
}

/// ABC 分類器
pub struct AbcClassifier;

impl AbcClassifier {
    /// 分類需求彙總
    ///
    /// 依總金額遞減做穩定排序（輸入已依子件ID排序，平手順序因此
    /// 逐次執行一致），再單趟掃過累計占比指派分類。
    /// 總金額為零（完全無成本資料）時全部判為 C 類。
    pub fn classify(
        aggregates: Vec<RequirementAggregate>,
        config: &PlanningConfig,
    ) -> Vec<ClassifiedAggregate> {
        let mut rows: Vec<(RequirementAggregate, Decimal)> = aggregates
            .into_iter()
            .map(|agg| {
                let value = agg.total_value();
                (agg, value)
            })
            .collect();

        rows.sort_by(|a, b| b.1.cmp(&a.1));

        let grand_total: Decimal = rows.iter().map(|(_, value)| *value).sum();

        if grand_total.is_zero() {
            tracing::debug!("無成本資料，全部物料判為 C 類");
            return rows
                .into_iter()
                .map(|(aggregate, total_value)| ClassifiedAggregate {
                    aggregate,
                    total_value,
                    abc_class: AbcClass::C,
                })
                .collect();
        }

        let mut cumulative = Decimal::ZERO;
        rows.into_iter()
            .map(|(aggregate, total_value)| {
                cumulative += total_value;
                let share = cumulative / grand_total;

                let abc_class = if share <= config.abc_a_threshold {
                    AbcClass::A
                } else if share <= config.abc_b_threshold {
                    AbcClass::B
                } else {
                    AbcClass::C
                };

                ClassifiedAggregate {
                    aggregate,
                    total_value,
                    abc_class,
                }
            })
            .collect()
    }
}
