//! 採購計算：再訂購點、建議訂購量與優先分數

use std::collections::HashMap;

use rust_decimal::Decimal;

use bom_graph::BomGraph;
use mrp_core::{
    AbcClass, ComponentRequirement, MissingParams, OrderStatus, PlanningConfig,
    ProcurementParams,
};

use crate::abc::ClassifiedAggregate;

/// 採購計算結果
#[derive(Debug, Clone)]
pub struct ProcurementOutcome {
    /// 最終需求列（維持分類階段的金額遞減順序）
    pub requirements: Vec<ComponentRequirement>,

    /// 採購參數缺漏通告
    pub missing_params: Vec<MissingParams>,
}

/// 採購計算器
pub struct ProcurementCalculator;

impl ProcurementCalculator {
    /// 對每個分類後的物料計算再訂購邏輯
    ///
    /// 庫存與採購參數為左連接：未命中以零值預設代入，參數不完整
    /// 進入通告列表但不阻斷計算。負庫存視為資料品質問題，夾到 0。
    pub fn calculate(
        classified: Vec<ClassifiedAggregate>,
        graph: &BomGraph,
        inventory: &HashMap<String, Decimal>,
        params: &HashMap<String, ProcurementParams>,
        config: &PlanningConfig,
    ) -> ProcurementOutcome {
        let default_params = ProcurementParams::default();
        let mut requirements = Vec::with_capacity(classified.len());
        let mut missing_params = Vec::new();

        for row in classified {
            let component_id = row.aggregate.component_id.clone();

            let component_params = params.get(&component_id).unwrap_or(&default_params);
            if let Some(advisory) = MissingParams::check(&component_id, component_params) {
                missing_params.push(advisory);
            }

            let current_inventory = inventory
                .get(&component_id)
                .copied()
                .unwrap_or(Decimal::ZERO)
                .max(Decimal::ZERO);

            requirements.push(Self::calculate_component(
                row,
                graph,
                current_inventory,
                component_params,
                config,
            ));
        }

        tracing::info!(
            "採購計算完成：{} 個物料，{} 筆參數缺漏",
            requirements.len(),
            missing_params.len()
        );

        ProcurementOutcome {
            requirements,
            missing_params,
        }
    }

    /// 單一物料的再訂購計算
    fn calculate_component(
        row: ClassifiedAggregate,
        graph: &BomGraph,
        current_inventory: Decimal,
        params: &ProcurementParams,
        config: &PlanningConfig,
    ) -> ComponentRequirement {
        let agg = row.aggregate;
        let lead_time = Decimal::from(params.lead_time_days);

        // 規劃期為零視同無日均需求，不做除法
        let daily_demand = if config.horizon_days == 0 {
            Decimal::ZERO
        } else {
            agg.net_qty / Decimal::from(config.horizon_days)
        };

        let safety_stock = config.safety_stock_pct(row.abc_class) * agg.net_qty;
        let reorder_point = daily_demand * lead_time + safety_stock;

        let days_of_stock = if daily_demand > Decimal::ZERO {
            (current_inventory / daily_demand).min(config.days_of_stock_cap)
        } else {
            config.days_of_stock_cap
        };

        let stock_coverage_ratio = if reorder_point > Decimal::ZERO {
            (current_inventory / reorder_point).min(config.coverage_cap)
        } else {
            config.coverage_cap
        };

        let shortfall = (reorder_point - current_inventory).max(Decimal::ZERO);
        let recommended_order_qty =
            Self::apply_lot_constraints(shortfall, params.moq, params.eoq);

        let procurement_cost = recommended_order_qty * agg.unit_cost;

        let order_status = if current_inventory < reorder_point {
            OrderStatus::Urgent
        } else if current_inventory < reorder_point + safety_stock {
            OrderStatus::Soon
        } else {
            OrderStatus::Ok
        };

        let priority_score = Self::priority_score(
            days_of_stock,
            lead_time,
            row.abc_class,
            stock_coverage_ratio,
        );

        let level = if graph.is_sub_assembly(&agg.component_id) {
            1
        } else {
            2
        };

        // 供應商以採購參數覆蓋 BOM 邊定義
        let supplier = params.supplier.clone().unwrap_or(agg.supplier);

        ComponentRequirement {
            component_id: agg.component_id,
            level,
            gross_qty: agg.gross_qty,
            net_qty: agg.net_qty,
            contributing_roots: agg.contributing_roots,
            component_type: agg.component_type,
            supplier,
            uom: agg.uom,
            unit_cost: agg.unit_cost,
            wastage_pct: agg.wastage_pct,
            description: agg.description,
            total_value: row.total_value,
            abc_class: row.abc_class,
            current_inventory,
            lead_time_days: params.lead_time_days,
            moq: params.moq,
            eoq: params.eoq,
            daily_demand,
            safety_stock,
            reorder_point,
            days_of_stock,
            stock_coverage_ratio,
            recommended_order_qty,
            procurement_cost,
            order_status,
            priority_score,
        }
    }

    /// 套用訂購量約束：max(缺口, MOQ, EOQ) 後向上取 MOQ 的倍數
    ///
    /// 向上取整保證不會低於缺口；量恰為一個 MOQ 時不再調整。
    fn apply_lot_constraints(shortfall: Decimal, moq: Decimal, eoq: Decimal) -> Decimal {
        let mut quantity = shortfall.max(moq).max(eoq);

        if moq > Decimal::ZERO && quantity > moq {
            let remainder = quantity % moq;
            if remainder > Decimal::ZERO {
                quantity = quantity - remainder + moq;
            }
        }

        quantity
    }

    /// 優先分數（0-100，加法累計）
    ///
    /// 庫存天數低於提前期 +50、低於 1.5 倍提前期 +30；
    /// A 類 +30、B 類 +15；覆蓋比低於 0.5 +20、低於 1.0 +10。
    fn priority_score(
        days_of_stock: Decimal,
        lead_time: Decimal,
        abc_class: AbcClass,
        coverage: Decimal,
    ) -> u8 {
        let mut score = 0u8;

        if days_of_stock < lead_time {
            score += 50;
        } else if days_of_stock < lead_time * Decimal::new(15, 1) {
            score += 30;
        }

        score += match abc_class {
            AbcClass::A => 30,
            AbcClass::B => 15,
            AbcClass::C => 0,
        };

        if coverage < Decimal::new(5, 1) {
            score += 20;
        } else if coverage < Decimal::ONE {
            score += 10;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrp_core::{ComponentEdge, RequirementAggregate};
    use rstest::rstest;

    fn classified(
        component_id: &str,
        net_qty: i64,
        unit_cost: &str,
        abc_class: AbcClass,
    ) -> ClassifiedAggregate {
        let edge = ComponentEdge::new(
            "ROOT".to_string(),
            component_id.to_string(),
            Decimal::ONE,
        )
        .with_unit_cost(unit_cost.parse().unwrap());

        let mut agg = RequirementAggregate::from_edge(&edge);
        agg.accumulate(Decimal::from(net_qty), Decimal::from(net_qty), "ROOT");
        let total_value = agg.total_value();

        ClassifiedAggregate {
            aggregate: agg,
            total_value,
            abc_class,
        }
    }

    fn run_single(
        row: ClassifiedAggregate,
        inventory_qty: Decimal,
        params: ProcurementParams,
        config: &PlanningConfig,
    ) -> ProcurementOutcome {
        let component_id = row.aggregate.component_id.clone();
        let graph = BomGraph::new();
        let inventory = HashMap::from([(component_id.clone(), inventory_qty)]);
        let params_map = HashMap::from([(component_id, params)]);
        ProcurementCalculator::calculate(vec![row], &graph, &inventory, &params_map, config)
    }

    #[test]
    fn test_urgent_rop_scenario() {
        // 規劃期 180 天、淨需求 900 → 日均 5；B 類 10% → 安全庫存 90
        // 再訂購點 = 5×10 + 90 = 140；庫存 0 < 140 → Urgent
        let config = PlanningConfig::default();
        let row = classified("C1", 900, "2", AbcClass::B);
        let params = ProcurementParams::new(10, Decimal::ZERO, Decimal::ZERO);

        let outcome = run_single(row, Decimal::ZERO, params, &config);
        let req = &outcome.requirements[0];

        assert_eq!(req.daily_demand, Decimal::from(5));
        assert_eq!(req.safety_stock, Decimal::from(90));
        assert_eq!(req.reorder_point, Decimal::from(140));
        assert_eq!(req.order_status, OrderStatus::Urgent);
        assert_eq!(req.recommended_order_qty, Decimal::from(140));
        assert_eq!(req.procurement_cost, Decimal::from(280));
    }

    #[test]
    fn test_order_status_boundaries() {
        let config = PlanningConfig::default();
        let params = ProcurementParams::new(10, Decimal::ZERO, Decimal::ZERO);

        // 再訂購點 140、安全庫存 90：140 ≤ 庫存 < 230 → Soon
        let soon = run_single(
            classified("C1", 900, "1", AbcClass::B),
            Decimal::from(150),
            params.clone(),
            &config,
        );
        assert_eq!(soon.requirements[0].order_status, OrderStatus::Soon);

        let ok = run_single(
            classified("C1", 900, "1", AbcClass::B),
            Decimal::from(230),
            params,
            &config,
        );
        assert_eq!(ok.requirements[0].order_status, OrderStatus::Ok);
    }

    #[test]
    fn test_moq_rounding_ceiling() {
        // 缺口 140，MOQ 50 → max(140,50)=140 → 向上取 50 倍數 = 150
        let config = PlanningConfig::default();
        let row = classified("C1", 900, "1", AbcClass::B);
        let params = ProcurementParams::new(10, Decimal::from(50), Decimal::ZERO);

        let outcome = run_single(row, Decimal::ZERO, params, &config);
        let req = &outcome.requirements[0];

        assert_eq!(req.recommended_order_qty, Decimal::from(150));
        // 訂購量底線：不低於缺口
        assert!(req.recommended_order_qty >= req.reorder_point - req.current_inventory);
        assert_eq!(req.recommended_order_qty % req.moq, Decimal::ZERO);
    }

    #[test]
    fn test_eoq_floor_applies() {
        // 缺口 140 < EOQ 500 → 訂 500（無 MOQ 不取倍數）
        let config = PlanningConfig::default();
        let row = classified("C1", 900, "1", AbcClass::B);
        let params = ProcurementParams::new(10, Decimal::ZERO, Decimal::from(500));

        let outcome = run_single(row, Decimal::ZERO, params, &config);
        assert_eq!(outcome.requirements[0].recommended_order_qty, Decimal::from(500));
    }

    #[test]
    fn test_zero_demand_sentinels() {
        // 淨需求 0：日均 0 → 庫存天數哨兵 999；再訂購點 0 → 覆蓋比上限 10
        let config = PlanningConfig::default();
        let row = classified("C1", 0, "1", AbcClass::C);
        let params = ProcurementParams::new(7, Decimal::ZERO, Decimal::ZERO);

        let outcome = run_single(row, Decimal::from(40), params, &config);
        let req = &outcome.requirements[0];

        assert_eq!(req.days_of_stock, Decimal::from(999));
        assert_eq!(req.stock_coverage_ratio, Decimal::from(10));
        assert_eq!(req.order_status, OrderStatus::Ok);
    }

    #[test]
    fn test_zero_horizon_treated_as_no_daily_demand() {
        // 規劃期 0 天：日均需求為 0，走哨兵路徑而非除以零
        let config = PlanningConfig::default().with_horizon_days(0);
        let row = classified("C1", 360, "1", AbcClass::C);
        let params = ProcurementParams::new(7, Decimal::ZERO, Decimal::ZERO);

        let outcome = run_single(row, Decimal::from(40), params, &config);
        let req = &outcome.requirements[0];

        assert_eq!(req.daily_demand, Decimal::ZERO);
        assert_eq!(req.days_of_stock, Decimal::from(999));
        // 再訂購點只剩安全庫存：5% × 360 = 18
        assert_eq!(req.reorder_point, Decimal::new(180, 1));
    }

    #[test]
    fn test_missing_params_advisory_does_not_block() {
        let config = PlanningConfig::default();
        let row = classified("C1", 360, "1", AbcClass::C);

        // 完全沒有採購參數：左連接未命中
        let graph = BomGraph::new();
        let outcome = ProcurementCalculator::calculate(
            vec![row],
            &graph,
            &HashMap::new(),
            &HashMap::new(),
            &config,
        );

        assert_eq!(outcome.missing_params.len(), 1);
        assert_eq!(outcome.missing_params[0].component_id, "C1");

        // 仍以零值預設完成計算
        let req = &outcome.requirements[0];
        assert_eq!(req.lead_time_days, 0);
        assert_eq!(req.safety_stock, Decimal::new(180, 1)); // 5% × 360
        assert_eq!(req.reorder_point, Decimal::new(180, 1));
    }

    #[test]
    fn test_negative_inventory_clamped() {
        let config = PlanningConfig::default();
        let row = classified("C1", 180, "1", AbcClass::C);
        let params = ProcurementParams::new(5, Decimal::ZERO, Decimal::ZERO);

        let outcome = run_single(row, Decimal::from(-25), params, &config);
        assert_eq!(outcome.requirements[0].current_inventory, Decimal::ZERO);
    }

    #[rstest]
    // 庫存天數 5 < 提前期 10（+50）、A 類（+30）、覆蓋比 < 0.5（+20）→ 100
    #[case(Decimal::from(5), AbcClass::A, Decimal::new(3, 1), 100)]
    // 天數 12 < 15 = 1.5×10（+30）、B 類（+15）、覆蓋比 0.8（+10）→ 55
    #[case(Decimal::from(12), AbcClass::B, Decimal::new(8, 1), 55)]
    // 充足：天數 100、C 類、覆蓋比 2 → 0
    #[case(Decimal::from(100), AbcClass::C, Decimal::from(2), 0)]
    fn test_priority_score(
        #[case] days_of_stock: Decimal,
        #[case] abc_class: AbcClass,
        #[case] coverage: Decimal,
        #[case] expected: u8,
    ) {
        let score = ProcurementCalculator::priority_score(
            days_of_stock,
            Decimal::from(10),
            abc_class,
            coverage,
        );
        assert_eq!(score, expected);
    }

    #[test]
    fn test_sub_assembly_level() {
        let config = PlanningConfig::default();
        let mut graph = BomGraph::new();
        graph.add_edge(ComponentEdge::new(
            "SUB-1".to_string(),
            "RAW-1".to_string(),
            Decimal::ONE,
        ));

        let rows = vec![
            classified("SUB-1", 100, "1", AbcClass::A),
            classified("RAW-1", 100, "1", AbcClass::A),
        ];

        let outcome = ProcurementCalculator::calculate(
            rows,
            &graph,
            &HashMap::new(),
            &HashMap::new(),
            &config,
        );

        let by_id: HashMap<_, _> = outcome
            .requirements
            .iter()
            .map(|r| (r.component_id.clone(), r.level))
            .collect();
        assert_eq!(by_id["SUB-1"], 1);
        assert_eq!(by_id["RAW-1"], 2);
    }

    #[test]
    fn test_supplier_override_from_params() {
        let config = PlanningConfig::default();
        let row = classified("C1", 100, "1", AbcClass::C);
        let params = ProcurementParams::new(7, Decimal::from(10), Decimal::ZERO)
            .with_supplier("Preferred Vendor".to_string());

        let outcome = run_single(row, Decimal::from(500), params, &config);
        assert_eq!(outcome.requirements[0].supplier, "Preferred Vendor");
    }
}
