use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use jit_ref::{RefStore, RefValue};

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct SymbolicRefArgs {
    /// Shorten the ref name (e.g. refs/heads/main -> main)
    #[arg(long)]
    short: bool,

    /// Do not print an error if the ref is not symbolic
    #[arg(short, long)]
    quiet: bool,

    /// Symbolic ref name (e.g. HEAD)
    name: String,

    /// Target ref to point at
    target: Option<String>,
}

pub fn run(args: &SymbolicRefArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;

    if let Some(ref target) = args.target {
        store.write_symbolic_ref(&args.name, target)?;
        return Ok(0);
    }

    match store.read_raw(&args.name)? {
        Some(RefValue::Symbolic(target)) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if args.short {
                writeln!(out, "{}", store.short_name(target.as_str()))?;
            } else {
                writeln!(out, "{}", target)?;
            }
            Ok(0)
        }
        _ => {
            if !args.quiet {
                eprintln!("fatal: ref {} is not a symbolic ref", args.name);
            }
            Ok(1)
        }
    }
}
