//! Command implementations

pub mod add;
pub mod completions;
pub mod init;
pub mod list;
pub mod setup;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::detect_workspace;

/// Default action when no subcommand is given: a short overview plus what
/// we know about the surrounding workspace.
pub fn overview(global: &GlobalOpts) -> Result<()> {
    let start = global.start_dir().into_diagnostic()?;
    let workspace = detect_workspace(&start);

    println!();
    println!("{}", style("Lattice UI - component scaffolding CLI").bold());
    println!();

    if workspace.kind.is_monorepo() {
        println!(
            "{} Detected {} monorepo",
            style("◆").cyan(),
            style(workspace.kind).bold()
        );
        println!(
            "{} Workspace root: {}",
            style("◆").cyan(),
            style(workspace.root.display()).cyan()
        );
        if let Some(ref current) = workspace.current_workspace {
            println!(
                "{} Current workspace: {}",
                style("◆").cyan(),
                style(current).cyan()
            );
        }
        println!();
    }

    println!("Available commands:");
    println!(
        "  {}     Initialize Lattice in your project",
        style("lattice init").yellow()
    );
    println!(
        "  {}      Add a component to your project",
        style("lattice add").yellow()
    );
    println!(
        "  {}     List available components",
        style("lattice list").yellow()
    );
    println!(
        "  {}    Show Tailwind setup instructions",
        style("lattice setup").yellow()
    );
    println!(
        "  {}   Show all commands",
        style("lattice --help").yellow()
    );

    Ok(())
}
