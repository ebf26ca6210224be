pub mod branch;
pub mod decorate;
pub mod init;
pub mod rev_parse;
pub mod set_head;
pub mod show_ref;
pub mod symbolic_ref;
pub mod update_ref;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Subcommand;
use jit_ref::{FilesRefStore, RefError, HEAD};
use jit_utils::LockError;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository or reinitialize an existing one
    Init(init::InitArgs),
    /// List, create, or delete branches
    Branch(branch::BranchArgs),
    /// Update the object name stored in a ref safely
    UpdateRef(update_ref::UpdateRefArgs),
    /// Read or modify symbolic refs
    SymbolicRef(symbolic_ref::SymbolicRefArgs),
    /// List references in a local repository
    ShowRef(show_ref::ShowRefArgs),
    /// Resolve a ref name to an object id
    RevParse(rev_parse::RevParseArgs),
    /// Point HEAD at a branch, or detach it at an object id
    SetHead(set_head::SetHeadArgs),
    /// Print the ref labels attached to an object id
    Decorate(decorate::DecorateArgs),
}

/// Open the ref store, respecting --git-dir override.
///
/// Without an override, walk up from the current directory looking for a
/// `.git` directory that has a `HEAD`.
pub fn open_store(cli: &Cli) -> Result<FilesRefStore> {
    if let Some(ref git_dir) = cli.git_dir {
        return Ok(FilesRefStore::new(git_dir));
    }

    let cwd = std::env::current_dir()?;
    let git_dir = discover(&cwd).ok_or_else(|| {
        anyhow!("not a jit repository (or any of the parent directories): .git")
    })?;
    tracing::debug!(git_dir = %git_dir.display(), "discovered repository");
    Ok(FilesRefStore::new(git_dir))
}

fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".git"))
        .find(|git_dir| git_dir.join(HEAD).is_file())
}

pub fn run(cli: Cli) -> Result<i32> {
    let result = match &cli.command {
        Commands::Init(args) => init::run(args, &cli),
        Commands::Branch(args) => branch::run(args, &cli),
        Commands::UpdateRef(args) => update_ref::run(args, &cli),
        Commands::SymbolicRef(args) => symbolic_ref::run(args, &cli),
        Commands::ShowRef(args) => show_ref::run(args, &cli),
        Commands::RevParse(args) => rev_parse::run(args, &cli),
        Commands::SetHead(args) => set_head::run(args, &cli),
        Commands::Decorate(args) => decorate::run(args, &cli),
    };
    result.map_err(explain_lock_contention)
}

/// Lock contention gets the same explanation git prints, since the usual
/// cause is a leftover marker from a crashed process.
fn explain_lock_contention(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<RefError>() {
        Some(RefError::Lock(LockError::AlreadyLocked { path })) => anyhow!(
            "Unable to create '{}': File exists.\n\n\
             Another jit process seems to be running in this repository.\n\
             If it still fails, a jit process may have crashed in this\n\
             repository earlier: remove the file manually to continue.",
            path.display()
        ),
        _ => err,
    }
}
