//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs, completions::CompletionsArgs, init::InitArgs, list::ListArgs, setup::SetupArgs,
};

#[derive(Parser)]
#[command(name = "lattice")]
#[command(author, version, about = "Lattice UI - component scaffolding CLI")]
#[command(
    long_about = "Copies React/Tailwind component sources into your project, \
                  workspace-aware for npm, yarn, and pnpm monorepos."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Run as if started in this directory (default: current directory)
    #[arg(long, short = 'c', global = true)]
    pub cwd: Option<PathBuf>,
}

impl GlobalOpts {
    /// Directory all detection starts from
    pub fn start_dir(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Lattice in your project
    Init(InitArgs),

    /// Add a component to your project
    Add(AddArgs),

    /// List available components
    List(ListArgs),

    /// Show Tailwind setup instructions
    Setup(SetupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
