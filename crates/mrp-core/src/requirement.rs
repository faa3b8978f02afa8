//! 需求彙總模型（展開累加器與最終需求列）

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::edge::{ComponentEdge, ComponentType};

/// ABC 分類（依累計金額占比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }
}

impl std::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 訂購狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 庫存已低於再訂購點
    Urgent,
    /// 庫存低於再訂購點加安全庫存
    Soon,
    /// 庫存充足
    Ok,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Urgent => "Urgent",
            OrderStatus::Soon => "Soon",
            OrderStatus::Ok => "OK",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 展開期間偵測到並跳過的循環邊
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CyclicEdge {
    /// 邊的父件ID
    pub parent_id: String,

    /// 邊的子件ID（已在當前展開路徑上）
    pub component_id: String,

    /// 觸發展開的根物料ID
    pub root_id: String,
}

/// 需求彙總累加器（展開期間依子件ID upsert，只增不減）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementAggregate {
    /// 子件ID
    pub component_id: String,

    /// 毛需求（損耗前，跨所有路徑與根物料累加）
    pub gross_qty: Decimal,

    /// 淨需求（損耗後累加）
    pub net_qty: Decimal,

    /// 產生此需求的根物料集合（可追溯性）
    pub contributing_roots: BTreeSet<String>,

    /// 物料類別（自邊定義複製）
    pub component_type: ComponentType,

    /// 供應商
    pub supplier: String,

    /// 計量單位
    pub uom: String,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 損耗率（百分比）
    pub wastage_pct: Decimal,

    /// 描述
    pub description: String,
}

impl RequirementAggregate {
    /// 從邊定義創建新的累加器（數量歸零，靜態屬性複製）
    pub fn from_edge(edge: &ComponentEdge) -> Self {
        Self {
            component_id: edge.component_id.clone(),
            gross_qty: Decimal::ZERO,
            net_qty: Decimal::ZERO,
            contributing_roots: BTreeSet::new(),
            component_type: edge.component_type,
            supplier: edge.supplier.clone(),
            uom: edge.uom.clone(),
            unit_cost: edge.unit_cost,
            wastage_pct: edge.wastage_pct,
            description: edge.description.clone(),
        }
    }

    /// 累加一次展開貢獻
    pub fn accumulate(&mut self, gross: Decimal, net: Decimal, root_id: &str) {
        self.gross_qty += gross;
        self.net_qty += net;
        self.contributing_roots.insert(root_id.to_string());
    }

    /// 合併另一個累加器（map-reduce 合併步驟；加法與聯集滿足結合律/交換律）
    pub fn absorb(&mut self, other: RequirementAggregate) {
        self.gross_qty += other.gross_qty;
        self.net_qty += other.net_qty;
        self.contributing_roots.extend(other.contributing_roots);
    }

    /// 總金額（淨需求 × 單位成本）
    pub fn total_value(&self) -> Decimal {
        self.net_qty * self.unit_cost
    }
}

/// 最終物料需求列（不可變，管線輸出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRequirement {
    /// 子件ID
    pub component_id: String,

    /// BOM 層級（1 = 次組件，2 = 末端子件）
    pub level: u8,

    /// 毛需求
    pub gross_qty: Decimal,

    /// 淨需求（含損耗）
    pub net_qty: Decimal,

    /// 產生需求的根物料集合
    pub contributing_roots: BTreeSet<String>,

    /// 物料類別
    pub component_type: ComponentType,

    /// 供應商
    pub supplier: String,

    /// 計量單位
    pub uom: String,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 損耗率（百分比）
    pub wastage_pct: Decimal,

    /// 描述
    pub description: String,

    /// 總金額（淨需求 × 單位成本）
    pub total_value: Decimal,

    /// ABC 分類
    pub abc_class: AbcClass,

    /// 現有庫存
    pub current_inventory: Decimal,

    /// 提前期（天）
    pub lead_time_days: u32,

    /// 最小訂購量
    pub moq: Decimal,

    /// 經濟訂購量
    pub eoq: Decimal,

    /// 日均需求
    pub daily_demand: Decimal,

    /// 安全庫存
    pub safety_stock: Decimal,

    /// 再訂購點
    pub reorder_point: Decimal,

    /// 庫存可用天數（上限 999）
    pub days_of_stock: Decimal,

    /// 庫存覆蓋比（現有庫存 / 再訂購點，上限 10）
    pub stock_coverage_ratio: Decimal,

    /// 建議訂購量
    pub recommended_order_qty: Decimal,

    /// 採購金額（建議訂購量 × 單位成本）
    pub procurement_cost: Decimal,

    /// 訂購狀態
    pub order_status: OrderStatus,

    /// 優先分數（0-100）
    pub priority_score: u8,
}
