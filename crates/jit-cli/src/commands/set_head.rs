use anyhow::Result;
use clap::Args;
use jit_ref::ObjectId;

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct SetHeadArgs {
    /// Branch to check out; if no such branch exists HEAD is detached
    revision: String,

    /// Object id the revision resolved to
    oid: String,
}

pub fn run(args: &SetHeadArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;
    let oid: ObjectId = args.oid.parse()?;
    store.set_head(&args.revision, &oid)?;
    Ok(0)
}
