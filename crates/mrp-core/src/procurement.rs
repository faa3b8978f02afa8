//! 採購參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料採購參數（供應商提供的外部快照）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcurementParams {
    /// 提前期（天）
    pub lead_time_days: u32,

    /// 最小訂購量
    pub moq: Decimal,

    /// 經濟訂購量
    pub eoq: Decimal,

    /// 供應商（可覆蓋 BOM 邊上的供應商）
    pub supplier: Option<String>,
}

impl ProcurementParams {
    /// 創建新的採購參數
    pub fn new(lead_time_days: u32, moq: Decimal, eoq: Decimal) -> Self {
        Self {
            lead_time_days,
            moq,
            eoq,
            supplier: None,
        }
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// 檢查參數是否不完整（提前期為零，或 MOQ 與 EOQ 皆為零）
    pub fn is_incomplete(&self) -> bool {
        self.lead_time_days == 0 || (self.moq.is_zero() && self.eoq.is_zero())
    }
}

/// 採購參數缺漏通告（不阻斷計算，以零值預設繼續）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingParams {
    /// 物料ID
    pub component_id: String,

    /// 缺漏的欄位名稱
    pub missing: Vec<String>,
}

impl MissingParams {
    /// 檢查參數，缺漏時產生通告
    pub fn check(component_id: &str, params: &ProcurementParams) -> Option<Self> {
        let mut missing = Vec::new();
        if params.lead_time_days == 0 {
            missing.push("lead_time_days".to_string());
        }
        if params.moq.is_zero() && params.eoq.is_zero() {
            missing.push("moq/eoq".to_string());
        }

        if missing.is_empty() {
            None
        } else {
            Some(Self {
                component_id: component_id.to_string(),
                missing,
            })
        }
    }
}
