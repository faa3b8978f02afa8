//! # BOM Graph
//!
//! 原始列資料攝取與 BOM 鄰接結構

pub mod builder;
pub mod graph;
pub mod header;
pub mod parse;

// Re-export 主要類型
pub use builder::{BomGraphBuilder, BuildReport, RawTable};
pub use graph::BomGraph;
pub use header::{dedup_headers, resolve_columns, BomField};
pub use parse::parse_numeric;
