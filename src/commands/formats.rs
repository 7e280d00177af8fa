//! pimport formats コマンド
//!
//! フォーマット検出の試行順序を表示する。未知ファイルの自動判別は
//! この順でフォーマット検出器を試す。

use crate::capability::Cap;
use crate::detect::DetectionTable;
use crate::manager::Catalog;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// 検出順序を定義できるケイパビリティ
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderCapabilityArg {
    /// Format detectors
    Format,
    /// Container decrypters
    Decrypt,
}

impl OrderCapabilityArg {
    fn to_cap(self) -> Cap {
        match self {
            OrderCapabilityArg::Format => Cap::FORMAT,
            OrderCapabilityArg::Decrypt => Cap::DECRYPT,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Capability to order by
    #[arg(long, value_enum, default_value = "format")]
    pub capability: OrderCapabilityArg,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 検出順出力用の行
#[derive(Debug, Clone, Serialize)]
struct DetectionRow {
    position: usize,
    format: String,
    name: String,
    identifier: String,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let table =
        DetectionTable::build(&catalog, args.capability.to_cap()).map_err(|e| e.to_string())?;

    let rows: Vec<DetectionRow> = table
        .iter()
        .enumerate()
        .map(|(index, (frmt, pm))| DetectionRow {
            position: index + 1,
            format: frmt.to_string(),
            name: pm.name.clone(),
            identifier: pm.identifier.clone(),
        })
        .collect();

    if args.json {
        print_json(&rows)
    } else {
        print_table(&rows);
        Ok(())
    }
}

fn print_json(rows: &[DetectionRow]) -> Result<(), String> {
    serde_json::to_string_pretty(rows)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize detection order: {}", e))
}

fn print_table(rows: &[DetectionRow]) {
    if rows.is_empty() {
        println!("No detectors registered");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Format", "Manager", "Identifier"]);

    for row in rows {
        let position = row.position.to_string();
        table.add_row(vec![
            position.as_str(),
            row.format.as_str(),
            row.name.as_str(),
            row.identifier.as_str(),
        ]);
    }

    println!("{table}");
    println!("{} format(s) probed in this order", rows.len());
}
