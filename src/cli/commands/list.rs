//! `lattice list` - list available components

use miette::Result;

use crate::registry;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only print component names, one per line
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let names = registry::names();

    if args.plain {
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    println!("Available components:\n");
    println!("{:<16} {:<16} {}", "NAME", "TYPE", "NPM DEPENDENCIES");
    println!("{}", "-".repeat(60));

    for name in names {
        let component = registry::get(&name).map_err(|e| miette::miette!("{}", e))?;
        let kind = match component.kind {
            crate::registry::ComponentKind::Ui => "components:ui",
            crate::registry::ComponentKind::Lib => "components:lib",
        };
        println!(
            "{:<16} {:<16} {}",
            component.name,
            kind,
            component.dependencies.join(", ")
        );
    }

    println!("\nUse 'lattice add <name>' to install a component");
    Ok(())
}
