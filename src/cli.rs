use clap::{Parser, Subcommand};

use crate::commands::{formats, info, list};

#[derive(Debug, Parser)]
#[command(name = "pimport")]
#[command(about = "Password manager import CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対応パスワードマネージャの一覧表示
    List(list::Args),

    /// マネージャ詳細の表示
    Info(info::Args),

    /// フォーマット検出の試行順序を表示
    Formats(formats::Args),
}
