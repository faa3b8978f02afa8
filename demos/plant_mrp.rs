//! 食品廠 MRP 分析完整範例
//!
//! 展示從原始 BOM 列資料到訂購日曆的完整分析流程

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;

use bom_mrp::{
    BomGraphBuilder, MrpCalculator, PlanningConfig, ProcurementParams, RawTable,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("===== Plant MRP Analysis Example =====\n");

    // 步驟 1: 原始 BOM 表（欄位命名刻意不規則，建構器自行解析）
    println!("[1] Build BOM Graph");
    let table = RawTable::from_rows(
        vec![
            vec!["Finished Product", "Component Code", "Qty per Unit", "Wastage %", "Unit Cost ($)", "Component Type", "Supplier Name"],
            vec!["SKU-GRANOLA-12", "MIX-BASE", "1", "0", "0", "", ""],
            vec!["MIX-BASE", "OATS-RAW", "0.6", "3", "$0.90", "Raw Material", "Prairie Mills"],
            vec!["MIX-BASE", "HONEY-RAW", "0.2", "5", "$3.20", "Raw Material", "Bee Farms"],
            vec!["SKU-GRANOLA-12", "POUCH-12OZ", "1", "2", "$0.35", "Packaging", "FlexPack"],
            vec!["SKU-GRANOLA-12", "LABEL-G", "1", "0", "$0.04", "Labels", "PrintCo"],
            vec!["SKU-TRAILMIX-8", "MIX-BASE", "0.8", "0", "0", "", ""],
            vec!["SKU-TRAILMIX-8", "POUCH-8OZ", "1", "2", "$0.28", "Packaging", "FlexPack"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect(),
    );

    let report = BomGraphBuilder::build(&table)?;
    println!("    Parents: {}", report.graph.parent_count());
    println!("    Edges:   {}", report.graph.edge_count());
    println!("    Dropped rows: {}\n", report.rows_dropped);

    // 步驟 2: 外部快照（翻譯表、半年預測、庫存、採購參數）
    println!("[2] Load External Snapshot");
    let translations = HashMap::from([
        ("SKU-GRANOLA-12".to_string(), "ASIN-GRAN".to_string()),
        ("SKU-TRAILMIX-8".to_string(), "ASIN-TRAIL".to_string()),
    ]);
    let forecasts = HashMap::from([
        ("ASIN-GRAN".to_string(), Decimal::from(5400)),
        ("ASIN-TRAIL".to_string(), Decimal::from(2100)),
    ]);
    let inventory = HashMap::from([
        ("OATS-RAW".to_string(), Decimal::from(1500)),
        ("HONEY-RAW".to_string(), Decimal::from(120)),
        ("POUCH-12OZ".to_string(), Decimal::from(4000)),
    ]);
    let params = HashMap::from([
        ("OATS-RAW".to_string(), ProcurementParams::new(7, Decimal::from(500), Decimal::ZERO)),
        ("HONEY-RAW".to_string(), ProcurementParams::new(14, Decimal::ZERO, Decimal::from(300))),
        ("POUCH-12OZ".to_string(), ProcurementParams::new(21, Decimal::from(2000), Decimal::ZERO)),
        ("POUCH-8OZ".to_string(), ProcurementParams::new(21, Decimal::from(2000), Decimal::ZERO)),
        ("LABEL-G".to_string(), ProcurementParams::new(10, Decimal::from(5000), Decimal::ZERO)),
    ]);
    println!("    Forecast rows: {}", forecasts.len());
    println!("    Inventory rows: {}\n", inventory.len());

    // 步驟 3: 執行分析
    println!("[3] Run MRP Analysis");
    let calculator = MrpCalculator::new(report.graph, PlanningConfig::default());
    let analysis = calculator.analyze(
        &translations,
        &forecasts,
        &inventory,
        &params,
        Utc::now().date_naive(),
    )?;
    println!(
        "    Requirements: {} ({} urgent)",
        analysis.requirements.len(),
        analysis.urgent_count()
    );
    println!("    Advisories: {}\n", analysis.has_advisories());

    // 步驟 4: 需求明細
    println!("[4] Component Requirements");
    for req in &analysis.requirements {
        println!(
            "    [{}] L{} {:<12} net {:>10} {}  value ${:>10}  status {}  score {}",
            req.abc_class,
            req.level,
            req.component_id,
            req.net_qty.round_dp(1),
            req.uom,
            req.total_value.round_dp(2),
            req.order_status,
            req.priority_score,
        );
    }

    // 步驟 5: 類別彙總
    println!("\n[5] Category Summary");
    for cat in &analysis.category_summary {
        println!(
            "    {:<14} items {:>2}  cost ${:>10}  share {:>5}%  urgent {}",
            cat.component_type.to_string(),
            cat.item_count,
            cat.total_procurement_cost.round_dp(2),
            cat.cost_share_pct.round_dp(1),
            cat.urgent_count,
        );
    }

    // 步驟 6: 訂購日曆
    println!("\n[6] Order Calendar");
    for entry in &analysis.order_calendar {
        println!(
            "    {}  order {:>8} of {:<12} from {:<15} arrives {}",
            entry.order_by_date,
            entry.order_qty.round_dp(0),
            entry.component_id,
            entry.supplier,
            entry.expected_arrival,
        );
    }

    // 完整結果亦可序列化交給報表層
    let json = serde_json::to_string_pretty(&analysis.requirements)?;
    println!("\n[7] JSON rows: {} bytes", json.len());

    Ok(())
}
