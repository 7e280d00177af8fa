//! pimport list コマンド
//!
//! 対応パスワードマネージャの一覧を表示する。

use crate::commands::CapabilityArg;
use crate::manager::{Catalog, ManagerDescriptor};
use crate::registry::ManagerRegistry;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by format tag (e.g. csv, json, kdbx)
    #[arg(long)]
    pub format: Option<String>,

    /// Capability the managers must support
    #[arg(long, value_enum, default_value = "import")]
    pub capability: CapabilityArg,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only manager names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// 一覧出力用の行
#[derive(Debug, Clone, Serialize)]
struct ManagerRow {
    name: String,
    format: String,
    version: String,
    capabilities: Vec<&'static str>,
    identifier: String,
}

impl ManagerRow {
    fn from_descriptor(pm: &ManagerDescriptor) -> Self {
        Self {
            name: pm.name.clone(),
            format: pm.format.clone(),
            version: pm.version.clone(),
            capabilities: pm.cap.flag_names(),
            identifier: pm.identifier.clone(),
        }
    }
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let registry = ManagerRegistry::new(&catalog);
    let cap = args.capability.to_cap();

    if args.simple {
        for name in registry.names(cap) {
            println!("{name}");
        }
        return Ok(());
    }

    // --format 指定時はフォーマット絞り込み（汎用CSVは除外される）、
    // それ以外は名前順・グループ内登録順の全件
    let rows: Vec<ManagerRow> = match &args.format {
        Some(frmt) => registry
            .descriptors(cap, Some(frmt))
            .map(ManagerRow::from_descriptor)
            .collect(),
        None => registry
            .matrix(cap)
            .values()
            .flatten()
            .map(|pm| ManagerRow::from_descriptor(pm))
            .collect(),
    };

    if args.json {
        print_json(&rows)
    } else {
        print_table(&rows, registry.names(cap).len());
        Ok(())
    }
}

fn print_json(rows: &[ManagerRow]) -> Result<(), String> {
    serde_json::to_string_pretty(rows)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize managers: {}", e))
}

fn print_table(rows: &[ManagerRow], name_count: usize) {
    if rows.is_empty() {
        println!("No matching managers found");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Format", "Version", "Capabilities", "Identifier"]);

    for row in rows {
        let format = if row.format.is_empty() { "-" } else { row.format.as_str() };
        let version = if row.version.is_empty() { "-" } else { row.version.as_str() };
        let capabilities = row.capabilities.join(", ");

        table.add_row(vec![
            row.name.as_str(),
            format,
            version,
            capabilities.as_str(),
            row.identifier.as_str(),
        ]);
    }

    println!("{table}");
    println!(
        "{} {} manager(s), {} importer(s) supported",
        "✓".green(),
        name_count,
        rows.len()
    );
}
