//! 規劃參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::requirement::AbcClass;

/// MRP 規劃配置（引擎常數的可調預設值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 最小預測量門檻（低於此量的根物料被排除）
    pub min_forecast_qty: Decimal,

    /// 規劃期間（天）
    pub horizon_days: u32,

    /// ABC 門檻：累計占比 ≤ 此值為 A 類
    pub abc_a_threshold: Decimal,

    /// ABC 門檻：累計占比 ≤ 此值為 B 類（超過則為 C 類）
    pub abc_b_threshold: Decimal,

    /// A 類安全庫存比例
    pub safety_stock_pct_a: Decimal,

    /// B 類安全庫存比例
    pub safety_stock_pct_b: Decimal,

    /// C 類安全庫存比例
    pub safety_stock_pct_c: Decimal,

    /// 庫存可用天數哨兵上限（日均需求為零時使用）
    pub days_of_stock_cap: Decimal,

    /// 庫存覆蓋比上限
    pub coverage_cap: Decimal,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            min_forecast_qty: Decimal::from(10),
            horizon_days: 180,
            abc_a_threshold: Decimal::new(70, 2),
            abc_b_threshold: Decimal::new(90, 2),
            safety_stock_pct_a: Decimal::new(15, 2),
            safety_stock_pct_b: Decimal::new(10, 2),
            safety_stock_pct_c: Decimal::new(5, 2),
            days_of_stock_cap: Decimal::from(999),
            coverage_cap: Decimal::from(10),
        }
    }
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置最小預測量門檻
    pub fn with_min_forecast_qty(mut self, qty: Decimal) -> Self {
        self.min_forecast_qty = qty;
        self
    }

    /// 建構器模式：設置規劃期間
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// 建構器模式：設置 ABC 門檻
    pub fn with_abc_thresholds(mut self, a: Decimal, b: Decimal) -> Self {
        self.abc_a_threshold = a;
        self.abc_b_threshold = b;
        self
    }

    /// 建構器模式：設置各類安全庫存比例
    pub fn with_safety_stock_pcts(mut self, a: Decimal, b: Decimal, c: Decimal) -> Self {
        self.safety_stock_pct_a = a;
        self.safety_stock_pct_b = b;
        self.safety_stock_pct_c = c;
        self
    }

    /// 取得指定分類的安全庫存比例
    pub fn safety_stock_pct(&self, class: AbcClass) -> Decimal {
        match class {
            AbcClass::A => self.safety_stock_pct_a,
            AbcClass::B => self.safety_stock_pct_b,
            AbcClass::C => self.safety_stock_pct_c,
        }
    }
}
