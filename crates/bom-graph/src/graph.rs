//! BOM 鄰接結構

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use mrp_core::ComponentEdge;

/// BOM 圖：父件ID 對應其用料邊的有序列表
///
/// 同時是子件又是父件的物料為次組件（中間層級），
/// 其餘為末端子件。父件的首見順序被保留，確保走訪順序確定。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BomGraph {
    /// 父件ID → 用料邊（輸入順序）
    edges: HashMap<String, Vec<ComponentEdge>>,

    /// 父件首見順序
    parent_order: Vec<String>,

    /// 所有出現過的子件ID
    component_ids: HashSet<String>,
}

impl BomGraph {
    /// 創建空圖
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一條 BOM 邊
    pub fn add_edge(&mut self, edge: ComponentEdge) {
        self.component_ids.insert(edge.component_id.clone());

        match self.edges.get_mut(&edge.parent_id) {
            Some(children) => children.push(edge),
            None => {
                self.parent_order.push(edge.parent_id.clone());
                self.edges.insert(edge.parent_id.clone(), vec![edge]);
            }
        }
    }

    /// 取得父件的用料邊（無則為空）
    pub fn children(&self, parent_id: &str) -> &[ComponentEdge] {
        self.edges.get(parent_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 檢查物料是否為次組件（本身是父件）
    pub fn is_sub_assembly(&self, component_id: &str) -> bool {
        self.edges.contains_key(component_id)
    }

    /// 根物料：是父件但不曾作為任何邊的子件（首見順序）
    pub fn roots(&self) -> Vec<&str> {
        self.parent_order
            .iter()
            .filter(|p| !self.component_ids.contains(p.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// 父件數量
    pub fn parent_count(&self) -> usize {
        self.edges.len()
    }

    /// 邊數量
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// 檢查圖是否為空
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
