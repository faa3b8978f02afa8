//! 需求模型（成品預測需求與跳過記錄）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 成品預測需求（規劃期間內的總量）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDemand {
    /// 需求ID
    pub id: Uuid,

    /// BOM 根物料ID
    pub root_id: String,

    /// 預測數量（規劃期間總量）
    pub quantity: Decimal,

    /// 外部來源識別碼（預測系統的 SKU/參照）
    pub external_reference: String,
}

impl ForecastDemand {
    /// 創建新的預測需求
    pub fn new(root_id: String, quantity: Decimal, external_reference: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            root_id,
            quantity,
            external_reference,
        }
    }
}

/// 被排除的根物料（需求連結階段產生，不是錯誤）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRoot {
    /// 根物料ID
    pub root_id: String,

    /// 排除原因（人類可讀）
    pub reason: String,
}

impl SkippedRoot {
    /// 找不到外部參照
    pub fn reference_not_found(root_id: String) -> Self {
        Self {
            root_id,
            reason: "reference not found".to_string(),
        }
    }

    /// 無預測或低於最小門檻
    pub fn below_minimum(root_id: String) -> Self {
        Self {
            root_id,
            reason: "no forecast or below minimum".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_forecast_demand() {
        let demand = ForecastDemand::new(
            "SKU-001".to_string(),
            Decimal::from(100),
            "AMZ-B00XYZ".to_string(),
        );

        assert_eq!(demand.root_id, "SKU-001");
        assert_eq!(demand.quantity, Decimal::from(100));
        assert_eq!(demand.external_reference, "AMZ-B00XYZ");
    }

    #[test]
    fn test_skip_reasons() {
        let missing = SkippedRoot::reference_not_found("SKU-002".to_string());
        assert_eq!(missing.reason, "reference not found");

        let low = SkippedRoot::below_minimum("SKU-003".to_string());
        assert_eq!(low.reason, "no forecast or below minimum");
    }
}
