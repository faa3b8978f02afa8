//! # MRP Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod edge;
pub mod procurement;
pub mod requirement;

// Re-export 主要類型
pub use config::PlanningConfig;
pub use demand::{ForecastDemand, SkippedRoot};
pub use edge::{ComponentEdge, ComponentType};
pub use procurement::{MissingParams, ProcurementParams};
pub use requirement::{
    AbcClass, ComponentRequirement, CyclicEdge, OrderStatus, RequirementAggregate,
};

/// MRP 錯誤類型
///
/// 唯一的致命錯誤是空輸入；其餘資料品質問題以通告列表隨結果返回。
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("BOM 輸入為空，無法計算")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, MrpError>;
