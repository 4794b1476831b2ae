//! `lattice setup` - Tailwind setup guidance

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{detect_tailwind_version, detect_workspace, find_config, TailwindVersion};

#[derive(clap::Args, Debug)]
pub struct SetupArgs {}

pub fn run(_args: SetupArgs, global: &GlobalOpts) -> Result<()> {
    let start = global.start_dir().into_diagnostic()?;
    let workspace = detect_workspace(&start);

    println!();
    println!("{}", style("Lattice Setup Guide").bold());
    println!();

    let Some(version) = detect_tailwind_version(&workspace) else {
        println!("{} TailwindCSS not found in your project.", style("✗").red());
        println!();
        println!("Install TailwindCSS first:");
        println!("  # Latest (v4.x, recommended)");
        println!("  {}", style("npm install tailwindcss@^4.0.0").yellow());
        println!();
        println!("  # Or v3.x");
        println!("  {}", style("npm install tailwindcss@^3.0.0").yellow());
        println!();
        println!("Then run this command again.");
        return Ok(());
    };

    println!(
        "{} TailwindCSS v{}.x detected",
        style("✓").green(),
        version.as_str()
    );
    println!();

    if workspace.kind.is_monorepo() {
        println!(
            "{} Detected {} monorepo rooted at {}",
            style("◆").cyan(),
            style(workspace.kind).bold(),
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

    if find_config(&workspace).is_none() {
        println!("{} No lattice.json found.", style("!").yellow());
        println!("Run: {}", style("lattice init").yellow());
        println!();
        println!("This will set up the proper configuration for your project.");
        return Ok(());
    }

    match version {
        TailwindVersion::V4 => {
            println!("TailwindCSS v4.x configuration:");
            println!("  1. Add to your CSS file:");
            println!("     {}", style("@import \"tailwindcss\";").dim());
            println!();
            println!("  2. No config file needed. Customize in CSS with @theme:");
            println!("     {}", style("@theme { --color-primary: #3b82f6; }").dim());
        }
        TailwindVersion::V3 => {
            println!("TailwindCSS v3.x configuration:");
            println!("  1. Add to your CSS file:");
            println!("     {}", style("@tailwind base;").dim());
            println!("     {}", style("@tailwind components;").dim());
            println!("     {}", style("@tailwind utilities;").dim());
            println!();
            println!("  2. Point tailwind.config.js content at your sources:");
            println!(
                "     {}",
                style("content: [\"./src/**/*.{js,ts,jsx,tsx}\"]").dim()
            );
        }
    }

    println!();
    println!("Next: {}", style("lattice add spinner").yellow());
    Ok(())
}
