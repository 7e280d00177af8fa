//! pimport info コマンド
//!
//! 問い合わせをディスクリプタひとつに解決し、詳細を表示する。

use crate::commands::CapabilityArg;
use crate::manager::{Catalog, ManagerDescriptor};
use crate::registry::ManagerRegistry;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Manager name or implementation identifier
    pub query: String,

    /// Format tag to disambiguate (e.g. csv, json)
    #[arg(long, default_value = "")]
    pub format: String,

    /// Version to disambiguate (e.g. 6)
    #[arg(long, default_value = "")]
    pub version: String,

    /// Capability the manager must support
    #[arg(long, value_enum, default_value = "import")]
    pub capability: CapabilityArg,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// 詳細出力用の構造体
#[derive(Debug, Clone, Serialize)]
struct ManagerDetail {
    identifier: String,
    name: String,
    format: String,
    version: String,
    capabilities: Vec<&'static str>,
}

impl ManagerDetail {
    fn from_descriptor(pm: &ManagerDescriptor) -> Self {
        Self {
            identifier: pm.identifier.clone(),
            name: pm.name.clone(),
            format: pm.format.clone(),
            version: pm.version.clone(),
            capabilities: pm.cap.flag_names(),
        }
    }
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let registry = ManagerRegistry::new(&catalog);

    let pm = registry
        .resolve(
            &args.query,
            &args.format,
            &args.version,
            args.capability.to_cap(),
        )
        .map_err(|e| e.to_string())?;
    let detail = ManagerDetail::from_descriptor(pm);

    match args.output {
        OutputFormat::Table => print_table(&detail),
        OutputFormat::Json => print_json(&detail)?,
        OutputFormat::Yaml => print_yaml(&detail)?,
    }

    Ok(())
}

fn print_table(detail: &ManagerDetail) {
    println!("Manager Information");
    println!("===================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Name", detail.name.as_str()]);
    table.add_row(vec!["Identifier", detail.identifier.as_str()]);
    table.add_row(vec![
        "Format",
        if detail.format.is_empty() { "-" } else { detail.format.as_str() },
    ]);
    table.add_row(vec![
        "Version",
        if detail.version.is_empty() { "-" } else { detail.version.as_str() },
    ]);

    let capabilities = detail.capabilities.join(", ");
    table.add_row(vec!["Capabilities", capabilities.as_str()]);

    println!("{table}");
}

fn print_json(detail: &ManagerDetail) -> Result<(), String> {
    serde_json::to_string_pretty(detail)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize manager: {}", e))
}

fn print_yaml(detail: &ManagerDetail) -> Result<(), String> {
    serde_yaml::to_string(detail)
        .map(|yaml| println!("{yaml}"))
        .map_err(|e| format!("Failed to serialize manager: {}", e))
}
