//! BOM 圖建構器：原始列資料 → BomGraph

use mrp_core::{ComponentEdge, ComponentType, MrpError};

use crate::graph::BomGraph;
use crate::header::{dedup_headers, resolve_columns, BomField};
use crate::parse::parse_numeric;

/// 原始表格（表頭 + 資料列，欄位順序與命名不固定）
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// 原始表頭（可能含空白或重複）
    pub headers: Vec<String>,

    /// 資料列（長度可短於表頭）
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// 從含表頭的列集合創建（第一列為表頭）
    pub fn from_rows(mut all_rows: Vec<Vec<String>>) -> Self {
        if all_rows.is_empty() {
            return Self::default();
        }
        let headers = all_rows.remove(0);
        Self {
            headers,
            rows: all_rows,
        }
    }
}

/// 建構報告：圖加上資料品質統計
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// 建構完成的 BOM 圖
    pub graph: BomGraph,

    /// 因缺少父件或子件ID而丟棄的列數
    pub rows_dropped: usize,

    /// 數值欄位解析失敗、以 0 代入的次數
    pub parse_failures: usize,
}

/// BOM 圖建構器
pub struct BomGraphBuilder;

impl BomGraphBuilder {
    /// 從原始表格建構 BOM 圖
    ///
    /// 唯一的致命錯誤是零資料列；其餘資料品質問題一律以
    /// 文件化預設值代入並計數。
    pub fn build(table: &RawTable) -> mrp_core::Result<BuildReport> {
        if table.rows.is_empty() {
            return Err(MrpError::EmptyInput);
        }

        let headers = dedup_headers(&table.headers);
        let columns = resolve_columns(&headers);
        tracing::debug!("表頭解析完成：{} 欄，{} 個正準欄位", headers.len(), columns.len());

        let cell = |row: &[String], field: BomField| -> String {
            columns
                .get(&field)
                .and_then(|&idx| row.get(idx))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let mut graph = BomGraph::new();
        let mut rows_dropped = 0usize;
        let mut parse_failures = 0usize;

        for row in &table.rows {
            let parent_id = cell(row, BomField::ParentId);
            let component_id = cell(row, BomField::ComponentId);

            // 父件或子件ID為空的列無法構成邊
            if parent_id.is_empty() || component_id.is_empty() {
                rows_dropped += 1;
                continue;
            }

            let mut parse = |field: BomField| {
                let raw = cell(row, field);
                let (value, ok) = parse_numeric(&raw);
                if !ok && !raw.is_empty() {
                    parse_failures += 1;
                    tracing::debug!("數值解析失敗，以 0 代入：{:?} = {:?}", field, raw);
                }
                value
            };

            let quantity = parse(BomField::Quantity);
            let wastage_pct = parse(BomField::Wastage);
            let unit_cost = parse(BomField::UnitCost);

            let uom = {
                let raw = cell(row, BomField::Uom);
                if raw.is_empty() {
                    ComponentEdge::default_uom().to_string()
                } else {
                    raw
                }
            };
            let supplier = {
                let raw = cell(row, BomField::Supplier);
                if raw.is_empty() {
                    ComponentEdge::default_supplier().to_string()
                } else {
                    raw
                }
            };
            let component_type = ComponentType::normalize(&cell(row, BomField::ComponentType));
            let description = cell(row, BomField::Description);

            graph.add_edge(
                ComponentEdge::new(parent_id, component_id, quantity)
                    .with_wastage_pct(wastage_pct)
                    .with_unit_cost(unit_cost)
                    .with_uom(uom)
                    .with_component_type(component_type)
                    .with_supplier(supplier)
                    .with_description(description),
            );
        }

        tracing::info!(
            "BOM 圖建構完成：{} 個父件，{} 條邊，丟棄 {} 列，{} 次解析失敗",
            graph.parent_count(),
            graph.edge_count(),
            rows_dropped,
            parse_failures
        );

        Ok(BuildReport {
            graph,
            rows_dropped,
            parse_failures,
        })
    }
}
