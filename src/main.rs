use clap::Parser;
use pimport::{cli, commands};

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
