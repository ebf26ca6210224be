use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use jit_ref::{FilesRefStore, HEAD, HEADS_DIR};

use crate::Cli;

#[derive(Args)]
pub struct InitArgs {
    /// Be quiet, only report errors
    #[arg(short, long)]
    quiet: bool,

    /// Directory to create the repository in
    directory: Option<PathBuf>,
}

pub fn run(args: &InitArgs, _cli: &Cli) -> Result<i32> {
    let target = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let git_dir = target.join(".git");

    for dir in ["objects", HEADS_DIR] {
        let path = git_dir.join(dir);
        std::fs::create_dir_all(&path)
            .with_context(|| format!("cannot create directory '{}'", path.display()))?;
    }

    // An existing HEAD is kept as it is
    let store = FilesRefStore::new(&git_dir);
    let reinit = store.read_raw(HEAD)?.is_some();
    if !reinit {
        let default = store.default_ref();
        store.write_symbolic_ref(HEAD, default.path())?;
    }

    if !args.quiet {
        let git_dir = std::fs::canonicalize(&git_dir).unwrap_or(git_dir);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if reinit {
            writeln!(out, "Reinitialized existing Jit repository in {}", git_dir.display())?;
        } else {
            writeln!(out, "Initialized empty Jit repository in {}", git_dir.display())?;
        }
    }

    Ok(0)
}
