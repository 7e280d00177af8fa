use crate::capability::Cap;
use crate::cli::Command;
use clap::ValueEnum;

pub mod formats;
pub mod info;
pub mod list;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Info(args) => info::run(args),
        Command::Formats(args) => formats::run(args),
    }
}

/// ケイパビリティ指定（CLIオプション用）
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CapabilityArg {
    /// Can import entries
    Import,
    /// Can detect its file format
    Format,
    /// Can decrypt an encrypted container
    Decrypt,
}

impl CapabilityArg {
    /// 対応するケイパビリティフラグを取得
    pub fn to_cap(self) -> Cap {
        match self {
            CapabilityArg::Import => Cap::IMPORT,
            CapabilityArg::Format => Cap::FORMAT,
            CapabilityArg::Decrypt => Cap::DECRYPT,
        }
    }
}
