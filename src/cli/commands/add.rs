//! `lattice add` - copy a component into the project
//!
//! Resolves the target directory through the alias config, installs npm
//! dependencies, pulls in registry dependencies first (`utils` for most
//! ui components), and writes the template files.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::HashSet;

use crate::cli::GlobalOpts;
use crate::core::install::install_dependencies;
use crate::core::workspace::WorkspaceInfo;
use crate::core::{detect_workspace, find_config, resolve_component_path, ComponentsConfig};
use crate::registry::{self, RegistryComponent};

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Component name to add
    pub component: String,

    /// Skip npm dependency installation
    #[arg(long)]
    pub skip_install: bool,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let start = global.start_dir().into_diagnostic()?;
    let workspace = detect_workspace(&start);

    let Some(config_path) = find_config(&workspace) else {
        return Err(miette::miette!(
            "no lattice.json found. Run 'lattice init' to set up your project."
        ));
    };
    let config = ComponentsConfig::load(&config_path).map_err(|e| miette::miette!("{}", e))?;

    let mut added = HashSet::new();
    add_component(
        &args.component,
        &config,
        &workspace,
        args.skip_install,
        &mut added,
    )?;

    println!();
    println!(
        "{} {} component has been added.",
        style("✓").green(),
        style(&args.component).bold()
    );

    if workspace.kind.is_monorepo() {
        let alias = config
            .aliases
            .ui
            .as_deref()
            .unwrap_or(config.aliases.components.as_str());
        println!();
        println!("Import it in your app:");
        println!(
            "   {}",
            style(format!(
                "import {{ {} }} from \"{}/{}\";",
                capitalize(&args.component),
                alias,
                args.component
            ))
            .dim()
        );
    }

    Ok(())
}

fn add_component(
    name: &str,
    config: &ComponentsConfig,
    workspace: &WorkspaceInfo,
    skip_install: bool,
    added: &mut HashSet<String>,
) -> Result<()> {
    if !added.insert(name.to_string()) {
        return Ok(());
    }

    let component = registry::get(name).map_err(|e| miette::miette!("{}", e))?;

    if !skip_install {
        install_dependencies(workspace, &component.dependencies);
    }

    // Registry dependencies first so `utils` exists before the files that
    // import it
    for dep in &component.registry_dependencies {
        add_component(dep, config, workspace, skip_install, added)?;
    }

    copy_files(&component, config, workspace)?;
    append_keyframes(&component, config, workspace)?;

    Ok(())
}

fn copy_files(
    component: &RegistryComponent,
    config: &ComponentsConfig,
    workspace: &WorkspaceInfo,
) -> Result<()> {
    let target_dir = resolve_component_path(
        &config.aliases,
        workspace,
        component.kind.logical_path(),
    );

    for file in &component.files {
        let contents = registry::template(&file.template).map_err(|e| miette::miette!("{}", e))?;
        let contents = if config.rsc == Some(true) {
            contents
        } else {
            strip_use_client(&contents)
        };

        let target = target_dir.join(&file.name);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).into_diagnostic()?;
        }
        std::fs::write(&target, contents).into_diagnostic()?;

        let shown = target
            .strip_prefix(&workspace.root)
            .unwrap_or(target.as_path());
        println!("{} Created {}", style("✓").green(), shown.display());
    }

    Ok(())
}

/// Add the component's keyframes to the global CSS, once, guarded by a
/// marker comment so re-adding a component stays idempotent.
fn append_keyframes(
    component: &RegistryComponent,
    config: &ComponentsConfig,
    workspace: &WorkspaceInfo,
) -> Result<()> {
    let version = config.tailwind.version.as_deref().unwrap_or("4");
    let Some(keyframes) = component.keyframes_for(version) else {
        return Ok(());
    };

    let css_path = config.css_path(workspace);
    if !css_path.exists() {
        println!(
            "{} CSS file not found at {}. Keyframes not added.",
            style("!").yellow(),
            css_path.display()
        );
        return Ok(());
    }

    let marker = format!("/* {} keyframes */", component.name);
    let contents = std::fs::read_to_string(&css_path).into_diagnostic()?;
    if contents.contains(&marker) {
        return Ok(());
    }

    let appended = format!("{}\n\n{}\n{}\n", contents, marker, keyframes.css);
    std::fs::write(&css_path, appended).into_diagnostic()?;
    println!(
        "{} Added {} animations to CSS",
        style("✓").green(),
        component.name
    );

    Ok(())
}

/// Remove a leading "use client" directive (either quote style) when the
/// consumer has RSC disabled
fn strip_use_client(contents: &str) -> String {
    let mut lines = contents.lines();
    match lines.next().map(str::trim) {
        Some("'use client'") | Some("\"use client\"") => {
            let rest: Vec<&str> = lines.collect();
            let joined = rest.join("\n");
            format!("{}\n", joined.trim_start_matches('\n'))
        }
        _ => contents.to_string(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
