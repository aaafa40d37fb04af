use clap::Parser;
use colored::Colorize;

use revlog_cli::{cli, commands};

fn main() {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::run_command(cli) {
        eprintln!("{} {err}", "revlog: error:".red().bold());
        std::process::exit(1);
    }
}
