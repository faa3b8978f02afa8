//! # MRP Calculation Engine
//!
//! BOM 展開與 MRP 分析引擎：需求連結、多層展開、ABC 分類、
//! 再訂購計算與彙總

pub mod abc;
pub mod calculator;
pub mod explosion;
pub mod linker;
pub mod procurement;
pub mod summary;

// Re-export 主要類型
pub use abc::{AbcClassifier, ClassifiedAggregate};
pub use calculator::MrpCalculator;
pub use explosion::{BomExploder, ExplosionOutcome};
pub use linker::DemandLinker;
pub use procurement::{ProcurementCalculator, ProcurementOutcome};
pub use summary::{CategorySummary, OrderCalendarEntry, Summarizer};

use mrp_core::{ComponentRequirement, CyclicEdge, MissingParams, SkippedRoot};

/// MRP 分析結果
///
/// 除需求列外，所有排除與資料缺漏都以明確列表隨主結果返回，
/// 不做靜默丟棄。
#[derive(Debug, Clone)]
pub struct MrpAnalysis {
    /// 物料需求列（依總金額遞減）
    pub requirements: Vec<ComponentRequirement>,

    /// 被排除的根物料
    pub skipped_roots: Vec<SkippedRoot>,

    /// 展開期間跳過的循環邊
    pub cyclic_edges: Vec<CyclicEdge>,

    /// 採購參數缺漏通告
    pub missing_params: Vec<MissingParams>,

    /// 類別彙總
    pub category_summary: Vec<CategorySummary>,

    /// 前瞻訂購日曆
    pub order_calendar: Vec<OrderCalendarEntry>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl MrpAnalysis {
    /// 檢查是否有任何需要人工關注的通告
    pub fn has_advisories(&self) -> bool {
        !self.skipped_roots.is_empty()
            || !self.cyclic_edges.is_empty()
            || !self.missing_params.is_empty()
    }

    /// Urgent 物料數
    pub fn urgent_count(&self) -> usize {
        self.requirements
            .iter()
            .filter(|r| r.order_status == mrp_core::OrderStatus::Urgent)
            .count()
    }
}
