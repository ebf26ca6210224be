use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::Args;
use jit_ref::{DecorateMode, Decorator, ObjectId};

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct DecorateArgs {
    /// Label style: short (default) or full
    #[arg(long, default_value = "short")]
    decorate: String,

    /// Object ids to annotate
    #[arg(required = true)]
    oids: Vec<String>,
}

pub fn run(args: &DecorateArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;
    let mode: DecorateMode = args.decorate.parse().map_err(|e: String| anyhow!(e))?;
    let decorator = Decorator::new(&store, mode)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for oid in &args.oids {
        let oid: ObjectId = oid.parse()?;
        writeln!(out, "{}{}", oid, decorator.decorate(&oid))?;
    }
    Ok(0)
}
