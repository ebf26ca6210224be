use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use jit_ref::RefStore;

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct RevParseArgs {
    /// Print the canonical ref path instead of the object id
    #[arg(long)]
    symbolic_full_name: bool,

    /// Print the short display name of the ref
    #[arg(long)]
    abbrev_ref: bool,

    /// Ref name to resolve (short or full)
    name: String,
}

pub fn run(args: &RevParseArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.symbolic_full_name || args.abbrev_ref {
        let full = store.long_name(&args.name)?;
        let full = store.current_ref(&full)?.path().to_string();
        if args.abbrev_ref {
            writeln!(out, "{}", store.short_name(&full))?;
        } else {
            writeln!(out, "{}", full)?;
        }
        return Ok(0);
    }

    match store.read_ref(&args.name)? {
        Some(oid) => {
            writeln!(out, "{}", oid)?;
            Ok(0)
        }
        None => {
            eprintln!("fatal: ambiguous argument '{}': unknown revision", args.name);
            Ok(128)
        }
    }
}
