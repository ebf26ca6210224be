use anyhow::{bail, Result};
use clap::Args;
use jit_ref::ObjectId;

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct UpdateRefArgs {
    /// Delete the ref
    #[arg(short, long)]
    delete: bool,

    /// Ref to update
    name: String,

    /// New object id (or old value when deleting)
    new_value: Option<String>,

    /// Expected current object id; the update fails if the ref moved
    old_value: Option<String>,
}

pub fn run(args: &UpdateRefArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;

    let (new, old) = if args.delete {
        if args.old_value.is_some() {
            bail!("usage: jit update-ref -d <refname> [<old-oid>]");
        }
        (None, parse_oid(args.new_value.as_deref())?)
    } else {
        let Some(new) = parse_oid(args.new_value.as_deref())? else {
            bail!("usage: jit update-ref <refname> <new-oid> [<old-oid>]");
        };
        (Some(new), parse_oid(args.old_value.as_deref())?)
    };

    match old {
        Some(old) => store.compare_and_swap(&args.name, Some(&old), new.as_ref())?,
        None => store.update_ref(&args.name, new.as_ref())?,
    }
    Ok(0)
}

fn parse_oid(value: Option<&str>) -> Result<Option<ObjectId>> {
    Ok(value.map(str::parse::<ObjectId>).transpose()?)
}
