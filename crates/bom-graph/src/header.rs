//! 欄位標題處理：去重與同義詞解析

use std::collections::HashMap;

/// BOM 欄位（§資料模型的正準欄位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BomField {
    ComponentType,
    ParentId,
    ComponentId,
    Quantity,
    Wastage,
    UnitCost,
    Uom,
    Supplier,
    Description,
}

/// 正準欄位 → 候選子字串（依序比對，大小寫不敏感）
///
/// 資料驅動：新同義詞直接加進列表即可。
/// 較特定的欄位排在前面，避免「Component Type」被當成子件ID欄。
const FIELD_SYNONYMS: &[(BomField, &[&str])] = &[
    (BomField::ComponentType, &["component type", "type", "category"]),
    (
        BomField::ParentId,
        &["parent", "finished", "assembly", "product", "fg "],
    ),
    (
        BomField::ComponentId,
        &["component", "child", "material", "part", "item code"],
    ),
    (BomField::Quantity, &["qty", "quantity", "usage"]),
    (BomField::Wastage, &["wastage", "scrap", "waste"]),
    (BomField::UnitCost, &["unit cost", "cost", "price"]),
    (BomField::Uom, &["uom", "unit of measure", "unit"]),
    (BomField::Supplier, &["supplier", "vendor"]),
    (BomField::Description, &["description", "desc", "name"]),
];

/// 去重標題：空白標題補名，重複標題依出現順序加數字後綴
///
/// 第一次出現保留原名，之後的出現依序得到 `_1`、`_2`…。
pub fn dedup_headers(raw_headers: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(raw_headers.len());

    for raw in raw_headers {
        let base = {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                "unnamed".to_string()
            } else {
                trimmed.to_string()
            }
        };

        let key = base.to_lowercase();
        let count = seen.entry(key).or_insert(0);
        if *count == 0 {
            result.push(base);
        } else {
            result.push(format!("{}_{}", base, count));
        }
        *count += 1;
    }

    result
}

/// 解析正準欄位對應的欄索引
///
/// 依 FIELD_SYNONYMS 順序，為每個欄位找第一個未被占用、
/// 且標題含任一候選子字串的欄。找不到的欄位不在結果中。
pub fn resolve_columns(headers: &[String]) -> HashMap<BomField, usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let mut claimed = vec![false; headers.len()];
    let mut mapping = HashMap::new();

    for (field, candidates) in FIELD_SYNONYMS {
        'field: for candidate in *candidates {
            for (idx, header) in lowered.iter().enumerate() {
                if !claimed[idx] && header.contains(candidate) {
                    claimed[idx] = true;
                    mapping.insert(*field, idx);
                    break 'field;
                }
            }
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_plain() {
        let deduped = dedup_headers(&headers(&["Parent SKU", "Component", "Qty"]));
        assert_eq!(deduped, vec!["Parent SKU", "Component", "Qty"]);
    }

    #[test]
    fn test_dedup_duplicates_and_blanks() {
        let deduped = dedup_headers(&headers(&["Qty", "", "Qty", "qty", ""]));
        assert_eq!(deduped, vec!["Qty", "unnamed", "Qty_1", "qty_2", "unnamed_1"]);
    }

    #[test]
    fn test_resolve_standard_columns() {
        let cols = resolve_columns(&headers(&[
            "Parent SKU",
            "Component Code",
            "Qty per Unit",
            "Wastage %",
            "Unit Cost ($)",
            "UOM",
            "Component Type",
            "Supplier Name",
            "Description",
        ]));

        assert_eq!(cols[&BomField::ParentId], 0);
        assert_eq!(cols[&BomField::ComponentId], 1);
        assert_eq!(cols[&BomField::Quantity], 2);
        assert_eq!(cols[&BomField::Wastage], 3);
        assert_eq!(cols[&BomField::UnitCost], 4);
        assert_eq!(cols[&BomField::Uom], 5);
        assert_eq!(cols[&BomField::ComponentType], 6);
        assert_eq!(cols[&BomField::Supplier], 7);
        assert_eq!(cols[&BomField::Description], 8);
    }

    #[test]
    fn test_component_type_not_mistaken_for_component() {
        // 「Component Type」必須先被類別欄認領，子件ID 落在「Component」欄
        let cols = resolve_columns(&headers(&["Component Type", "Component", "Qty"]));

        assert_eq!(cols[&BomField::ComponentType], 0);
        assert_eq!(cols[&BomField::ComponentId], 1);
    }

    #[test]
    fn test_unit_cost_before_uom() {
        let cols = resolve_columns(&headers(&["Part", "Unit Cost", "Unit"]));

        assert_eq!(cols[&BomField::UnitCost], 1);
        assert_eq!(cols[&BomField::Uom], 2);
    }

    #[test]
    fn test_missing_columns_absent() {
        let cols = resolve_columns(&headers(&["Parent", "Part", "Qty"]));

        assert!(!cols.contains_key(&BomField::Supplier));
        assert!(!cols.contains_key(&BomField::Wastage));
    }
}
