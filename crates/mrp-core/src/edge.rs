//! BOM 邊模型（單行用料關係）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料類別（封閉集合，來源字串正規化後落入其中之一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// 原物料
    RawMaterial,
    /// 包裝材料
    Packaging,
    /// 標籤
    Labels,
    /// 其他
    Other,
    /// 未分類（來源未提供類別）
    Uncategorized,
}

impl ComponentType {
    /// 從來源字串正規化類別（大小寫不敏感的子字串比對）
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            ComponentType::Uncategorized
        } else if lowered.contains("raw") {
            ComponentType::RawMaterial
        } else if lowered.contains("pack") {
            ComponentType::Packaging
        } else if lowered.contains("label") {
            ComponentType::Labels
        } else {
            ComponentType::Other
        }
    }

    /// 顯示名稱（報表用）
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::RawMaterial => "Raw Material",
            ComponentType::Packaging => "Packaging",
            ComponentType::Labels => "Labels",
            ComponentType::Other => "Other",
            ComponentType::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BOM 邊：父件對子件的單行用料關係
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentEdge {
    /// 父件ID
    pub parent_id: String,

    /// 子件ID
    pub component_id: String,

    /// 單位父件用量
    pub quantity_per_parent: Decimal,

    /// 損耗率（百分比，0 表示無損耗）
    pub wastage_pct: Decimal,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 計量單位
    pub uom: String,

    /// 物料類別
    pub component_type: ComponentType,

    /// 供應商
    pub supplier: String,

    /// 描述
    pub description: String,
}

impl ComponentEdge {
    /// 創建新的 BOM 邊（未提供的欄位使用文件化預設值）
    pub fn new(parent_id: String, component_id: String, quantity_per_parent: Decimal) -> Self {
        Self {
            parent_id,
            component_id,
            quantity_per_parent,
            wastage_pct: Decimal::ZERO,
            unit_cost: Decimal::ZERO,
            uom: Self::default_uom().to_string(),
            component_type: ComponentType::Uncategorized,
            supplier: Self::default_supplier().to_string(),
            description: String::new(),
        }
    }

    /// 建構器模式：設置損耗率
    pub fn with_wastage_pct(mut self, wastage_pct: Decimal) -> Self {
        self.wastage_pct = wastage_pct;
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// 建構器模式：設置計量單位
    pub fn with_uom(mut self, uom: String) -> Self {
        self.uom = uom;
        self
    }

    /// 建構器模式：設置物料類別
    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = supplier;
        self
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// 預設計量單位
    pub fn default_uom() -> &'static str {
        "EA"
    }

    /// 預設供應商
    pub fn default_supplier() -> &'static str {
        "Unknown Supplier"
    }
}
