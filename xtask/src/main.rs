//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
}

/// Discover the repository root relative to the `xtask` crate.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = repo_root()?;

    match cli.command {
        CommandName::Tidy => tidy(&root),
        CommandName::Test => test(&root),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;
    cmd!(sh, "cargo fmt --all").run()?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --allow-dirty --tests"
    )
    .run()?;
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(root: &Path) -> Result<()> {
    let sh = repo_shell(root)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Create a shell rooted at the repository root.
fn repo_shell(root: &Path) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(root);
    Ok(sh)
}
