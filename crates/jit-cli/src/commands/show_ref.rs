use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use jit_ref::{RefError, RefStore};

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct ShowRefArgs {
    /// Include HEAD in the listing
    #[arg(long)]
    head: bool,

    /// Only show branches
    #[arg(long)]
    heads: bool,

    /// Only show remote-tracking branches
    #[arg(long)]
    remotes: bool,
}

pub fn run(args: &ShowRefArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;

    let refs = match (args.heads, args.remotes) {
        (true, false) => store.list_branches()?,
        (false, true) => store.list_remotes()?,
        (true, true) => {
            let mut refs = store.list_branches()?;
            refs.extend(store.list_remotes()?);
            refs
        }
        (false, false) => store.list_all_refs()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut shown = 0;

    for r in refs.iter().filter(|r| args.head || !r.is_head()) {
        let oid = match r.read_oid(&store) {
            Ok(Some(oid)) => oid,
            Ok(None) => continue,
            Err(RefError::SymrefLoop(name)) => {
                tracing::warn!(name = %name, "skipping symbolic ref loop");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(out, "{} {}", oid, r)?;
        shown += 1;
    }

    Ok(if shown == 0 { 1 } else { 0 })
}
