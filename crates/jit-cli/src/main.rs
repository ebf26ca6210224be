mod commands;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

use commands::Commands;

#[derive(Parser)]
#[command(name = "jit", about = "Reference store front end for jit", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Run as if started in <path>
    #[arg(short = 'C', global = true)]
    change_dir: Option<PathBuf>,

    /// Set the path to the .git directory
    #[arg(long = "git-dir", global = true)]
    git_dir: Option<PathBuf>,
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(128),
            }
        }
    };

    if let Some(dir) = &cli.change_dir {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("fatal: cannot change to '{}': {}", dir.display(), e);
            process::exit(128);
        }
    }

    match commands::run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(128);
        }
    }
}
