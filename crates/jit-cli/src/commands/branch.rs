use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::Args;
use jit_ref::{FilesRefStore, ObjectId, RefStore, SymRef, HEAD};

use crate::Cli;
use super::open_store;

#[derive(Args)]
pub struct BranchArgs {
    /// Delete a branch
    #[arg(short, long)]
    delete: bool,

    /// List both remote-tracking and local branches
    #[arg(short, long)]
    all: bool,

    /// List remote-tracking branches
    #[arg(short, long)]
    remotes: bool,

    /// Show the object id next to each branch
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Show current branch
    #[arg(long)]
    show_current: bool,

    /// Branch name (for create/delete)
    name: Option<String>,

    /// Start point object id (defaults to HEAD)
    start_point: Option<String>,
}

pub fn run(args: &BranchArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.show_current {
        let current = store.current_ref(HEAD)?;
        if current.is_branch() {
            writeln!(out, "{}", current.short_name(&store))?;
        }
        return Ok(0);
    }

    if args.delete {
        let name = args
            .name
            .as_deref()
            .ok_or_else(|| anyhow!("branch name required"))?;
        let oid = store.delete_branch(name)?;
        writeln!(out, "Deleted branch {} (was {}).", name, oid.short(7))?;
        return Ok(0);
    }

    if let Some(ref name) = args.name {
        return create_branch(&store, name, args.start_point.as_deref());
    }

    list_branches(&store, args, &mut out)
}

fn create_branch(store: &FilesRefStore, name: &str, start: Option<&str>) -> Result<i32> {
    let oid = match start {
        Some(spec) => match store.read_ref(spec)? {
            Some(oid) => oid,
            None => spec.parse::<ObjectId>()?,
        },
        None => store
            .read_head()?
            .ok_or_else(|| anyhow!("not a valid object name: 'HEAD'"))?,
    };

    store.create_branch(name, &oid)?;
    Ok(0)
}

fn list_branches(store: &FilesRefStore, args: &BranchArgs, out: &mut impl Write) -> Result<i32> {
    let current = store.current_ref(HEAD)?;

    let mut refs: Vec<SymRef> = Vec::new();
    if !args.remotes || args.all {
        if current.is_head() {
            if let Some(oid) = store.read_head()? {
                write_line(out, &format!("(HEAD detached at {})", oid.short(7)), true, args.verbose.then_some(&oid))?;
            }
        }
        refs.extend(store.list_branches()?);
    }
    if args.remotes || args.all {
        refs.extend(store.list_remotes()?);
    }

    for r in &refs {
        let name = if args.all && r.is_remote() {
            format!("remotes/{}", r.short_name(store))
        } else {
            r.short_name(store)
        };
        let oid = if args.verbose { r.read_oid(store)? } else { None };
        write_line(out, &name, *r == current, oid.as_ref())?;
    }

    Ok(0)
}

fn write_line(out: &mut impl Write, name: &str, is_current: bool, oid: Option<&ObjectId>) -> Result<()> {
    let marker = if is_current { '*' } else { ' ' };
    match oid {
        Some(oid) => writeln!(out, "{} {} {}", marker, name, oid.short(7))?,
        None => writeln!(out, "{} {}", marker, name)?,
    }
    Ok(())
}
