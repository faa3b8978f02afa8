//! # BOM-MRP
//!
//! 多層 BOM 展開與 MRP 分析引擎的總入口 crate。
//!
//! 管線：原始列資料 → BOM 圖 → 需求連結 → 展開 → ABC 分類 →
//! 採購計算 → 類別彙總與訂購日曆。

pub use bom_graph::{BomGraph, BomGraphBuilder, BuildReport, RawTable};
pub use mrp_calc::{MrpAnalysis, MrpCalculator};
pub use mrp_core::{
    AbcClass, ComponentEdge, ComponentRequirement, ComponentType, CyclicEdge, ForecastDemand,
    MissingParams, MrpError, OrderStatus, PlanningConfig, ProcurementParams, RequirementAggregate,
    Result, SkippedRoot,
};
