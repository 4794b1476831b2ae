//! `lattice init` - set up Lattice in a project
//!
//! Runs an interactive wizard by default; meaningful CLI flags (or
//! `--defaults`) skip straight to a non-interactive setup so the command
//! stays scriptable.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::core::workspace::WorkspaceInfo;
use crate::core::{detect_workspace, ComponentsConfig, CONFIG_FILE};
use crate::registry;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Set up the monorepo preset (shared packages/ui)
    #[arg(long)]
    pub monorepo: bool,

    /// Base color for components
    #[arg(long, value_parser = ["slate", "gray", "zinc", "neutral", "stone"])]
    pub base_color: Option<String>,

    /// TailwindCSS major version
    #[arg(long, value_parser = ["3", "4"])]
    pub tailwind_version: Option<String>,

    /// Use CSS variables for theming (default)
    #[arg(long, overrides_with = "no_css_variables")]
    pub css_variables: bool,

    /// Use utility classes for theming instead of CSS variables
    #[arg(long)]
    pub no_css_variables: bool,

    /// Overwrite existing configuration and CSS
    #[arg(long)]
    pub force: bool,

    /// Accept all defaults without prompting
    #[arg(long, short = 'y')]
    pub defaults: bool,
}

/// What to do with an existing global CSS file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CssAction {
    Overwrite,
    Append,
    Skip,
}

/// Answers collected from the wizard or synthesized from flags
#[derive(Debug)]
struct InitResponses {
    typescript: bool,
    base_color: String,
    global_css: String,
    css_variables: bool,
    tailwind_version: String,
    tailwind_config: String,
    components_alias: String,
    utils_alias: String,
    rsc: bool,
    overwrite_config: bool,
    css_action: CssAction,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let start = global.start_dir().into_diagnostic()?;
    let workspace = detect_workspace(&start);

    println!();
    println!("{}", style("Welcome to Lattice!").bold());
    println!();

    // Any meaningful flag means the caller is scripting us; skip the wizard
    let scripted = args.defaults
        || args.force
        || args.monorepo
        || args.no_css_variables
        || args.base_color.is_some()
        || args.tailwind_version.is_some();

    let monorepo = args.monorepo || workspace.kind.is_monorepo();

    let responses = if scripted {
        direct_responses(&args, &workspace, monorepo)
    } else {
        interactive_responses(&workspace, monorepo)?
    };

    execute_setup(&responses, &workspace, monorepo)
}

fn direct_responses(args: &InitArgs, workspace: &WorkspaceInfo, monorepo: bool) -> InitResponses {
    let tailwind_version = args.tailwind_version.clone().unwrap_or_else(|| "4".into());
    let config_exists = workspace.root.join(CONFIG_FILE).exists();

    InitResponses {
        typescript: true,
        base_color: args.base_color.clone().unwrap_or_else(|| "neutral".into()),
        global_css: default_css_path(monorepo).to_string(),
        css_variables: !args.no_css_variables,
        tailwind_config: if tailwind_version == "3" {
            "tailwind.config.js".to_string()
        } else {
            String::new()
        },
        tailwind_version,
        components_alias: default_alias(monorepo, "components"),
        utils_alias: default_alias(monorepo, "utils"),
        rsc: true,
        overwrite_config: !config_exists || args.force,
        css_action: if args.force {
            CssAction::Overwrite
        } else {
            CssAction::Append
        },
    }
}

fn interactive_responses(workspace: &WorkspaceInfo, monorepo: bool) -> Result<InitResponses> {
    let theme = ColorfulTheme::default();

    let typescript = Confirm::with_theme(&theme)
        .with_prompt("Would you like to use TypeScript (recommended)?")
        .default(true)
        .interact()
        .into_diagnostic()?;

    let colors = ["neutral", "slate", "gray", "zinc", "stone"];
    let color_idx = Select::with_theme(&theme)
        .with_prompt("Which color would you like to use as base color?")
        .items(&colors)
        .default(0)
        .interact()
        .into_diagnostic()?;

    let global_css: String = Input::with_theme(&theme)
        .with_prompt("Where is your global CSS file?")
        .default(default_css_path(monorepo).to_string())
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Please enter a valid path")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .into_diagnostic()?;

    let css_variables = Confirm::with_theme(&theme)
        .with_prompt("Would you like to use CSS variables for colors?")
        .default(true)
        .interact()
        .into_diagnostic()?;

    let versions = ["v4.x (latest)", "v3.x"];
    let version_idx = Select::with_theme(&theme)
        .with_prompt("Which version of TailwindCSS are you using?")
        .items(&versions)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let tailwind_version = if version_idx == 1 { "3" } else { "4" };

    // Only v3 needs a config file
    let tailwind_config = if tailwind_version == "3" {
        Input::with_theme(&theme)
            .with_prompt("Where is your tailwind.config.js located?")
            .default("tailwind.config.js".to_string())
            .interact_text()
            .into_diagnostic()?
    } else {
        String::new()
    };

    let components_alias: String = Input::with_theme(&theme)
        .with_prompt("Configure the import alias for components:")
        .default(default_alias(monorepo, "components"))
        .interact_text()
        .into_diagnostic()?;

    let utils_alias: String = Input::with_theme(&theme)
        .with_prompt("Configure the import alias for utils:")
        .default(default_alias(monorepo, "utils"))
        .interact_text()
        .into_diagnostic()?;

    let rsc = Confirm::with_theme(&theme)
        .with_prompt("Are you using React Server Components?")
        .default(true)
        .interact()
        .into_diagnostic()?;

    let overwrite_config = if workspace.root.join(CONFIG_FILE).exists() {
        Confirm::with_theme(&theme)
            .with_prompt(format!(
                "{} already exists. Would you like to overwrite it?",
                CONFIG_FILE
            ))
            .default(false)
            .interact()
            .into_diagnostic()?
    } else {
        true
    };

    let css_action = if workspace.root.join(&global_css).exists() {
        let choices = [
            "Overwrite completely",
            "Append Lattice styles (requires manual integration)",
            "Skip (keep existing file)",
        ];
        let idx = Select::with_theme(&theme)
            .with_prompt(format!("{} already exists. What would you like to do?", global_css))
            .items(&choices)
            .default(1)
            .interact()
            .into_diagnostic()?;
        match idx {
            0 => CssAction::Overwrite,
            1 => CssAction::Append,
            _ => CssAction::Skip,
        }
    } else {
        CssAction::Overwrite
    };

    println!();
    println!("{}", style("Configuration summary:").bold());
    println!("   Base color:    {}", colors[color_idx]);
    println!("   Global CSS:    {}", global_css);
    println!("   CSS variables: {}", if css_variables { "yes" } else { "no" });
    println!("   TailwindCSS:   v{}.x", tailwind_version);
    println!("   TypeScript:    {}", if typescript { "yes" } else { "no" });
    println!();

    let proceed = Confirm::with_theme(&theme)
        .with_prompt(format!("Write configuration to {}. Proceed?", CONFIG_FILE))
        .default(true)
        .interact()
        .into_diagnostic()?;

    if !proceed {
        println!();
        println!("{} Setup cancelled.", style("✗").red());
        std::process::exit(0);
    }

    Ok(InitResponses {
        typescript,
        base_color: colors[color_idx].to_string(),
        global_css,
        css_variables,
        tailwind_version: tailwind_version.to_string(),
        tailwind_config,
        components_alias,
        utils_alias,
        rsc,
        overwrite_config,
        css_action,
    })
}

fn execute_setup(
    responses: &InitResponses,
    workspace: &WorkspaceInfo,
    monorepo: bool,
) -> Result<()> {
    println!();
    println!("{} Setting up Lattice...", style("◆").cyan());

    // Start from the matching preset so alias conventions stay consistent
    let mut config = if monorepo {
        ComponentsConfig::monorepo()
    } else {
        ComponentsConfig::single_project()
    };
    config.tsx = responses.typescript;
    config.rsc = Some(responses.rsc);
    config.tailwind.config = responses.tailwind_config.clone();
    config.tailwind.css = responses.global_css.clone();
    config.tailwind.base_color = Some(responses.base_color.clone());
    config.tailwind.css_variables = Some(responses.css_variables);
    config.tailwind.version = Some(responses.tailwind_version.clone());
    config.aliases.components = responses.components_alias.clone();
    config.aliases.utils = responses.utils_alias.clone();
    config.aliases.ui = Some(
        responses
            .components_alias
            .replace("/components", "/components/ui"),
    );
    config.aliases.hooks = Some(responses.components_alias.replace("/components", "/hooks"));
    config.aliases.lib = Some(responses.utils_alias.replace("/utils", ""));

    let config_path = workspace.root.join(CONFIG_FILE);
    if !config_path.exists() || responses.overwrite_config {
        config.save(&config_path).map_err(|e| miette::miette!("{}", e))?;
        println!("{} Created {}", style("✓").green(), CONFIG_FILE);
    }

    create_directory_structure(workspace, monorepo)?;

    if responses.css_action != CssAction::Skip {
        write_global_css(
            &workspace.root.join(&responses.global_css),
            &responses.tailwind_version,
            responses.css_action,
        )?;
    }

    println!();
    println!("{} Lattice setup complete!", style("✓").green());
    println!();
    println!("Next steps:");
    if responses.tailwind_version == "4" {
        println!("  1. Ensure your CSS imports: @import \"tailwindcss\"");
    } else {
        println!("  1. Configure your tailwind.config.js");
    }
    println!(
        "  2. Add your first component: {}",
        style("lattice add spinner").yellow()
    );

    Ok(())
}

fn create_directory_structure(workspace: &WorkspaceInfo, monorepo: bool) -> Result<()> {
    if monorepo {
        let ui_package = workspace.root.join("packages/ui");
        for dir in [
            "src/components",
            "src/lib",
            "src/hooks",
            "src/styles",
        ] {
            create_dir_reporting(&ui_package.join(dir), &workspace.root)?;
        }

        let package_json = ui_package.join("package.json");
        if !package_json.exists() {
            std::fs::write(&package_json, ui_package_manifest())
                .into_diagnostic()?;
            println!("{} Created packages/ui/package.json", style("✓").green());
        }
    } else {
        for dir in ["src/components/ui", "src/lib", "src/styles"] {
            create_dir_reporting(&workspace.root.join(dir), &workspace.root)?;
        }
    }
    Ok(())
}

fn create_dir_reporting(dir: &Path, root: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).into_diagnostic()?;
        let shown = dir.strip_prefix(root).unwrap_or(dir);
        println!("{} Created {}/", style("✓").green(), shown.display());
    }
    Ok(())
}

fn ui_package_manifest() -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "name": "@workspace/ui",
        "version": "0.1.0",
        "type": "module",
        "exports": {
            "./components/*": "./src/components/*.tsx",
            "./lib/*": "./src/lib/*.ts",
            "./hooks/*": "./src/hooks/*.ts",
            "./styles/*": "./src/styles/*"
        },
        "dependencies": {},
        "devDependencies": {
            "@types/react": "^18.0.0",
            "react": "^18.0.0",
            "typescript": "^5.0.0"
        }
    }))
    .expect("static manifest serializes")
}

fn write_global_css(css_path: &Path, tailwind_version: &str, action: CssAction) -> Result<()> {
    let template_name = if tailwind_version == "3" {
        "globals-v3.css"
    } else {
        "globals-v4.css"
    };
    let styles = registry::template(template_name).map_err(|e| miette::miette!("{}", e))?;

    if let Some(parent) = css_path.parent() {
        std::fs::create_dir_all(parent).into_diagnostic()?;
    }

    if !css_path.exists() || action == CssAction::Overwrite {
        std::fs::write(css_path, styles).into_diagnostic()?;
        println!("{} Wrote {}", style("✓").green(), css_path.display());
        return Ok(());
    }

    // Append mode: keep the user's file but flag that ordering matters
    let existing = std::fs::read_to_string(css_path).into_diagnostic()?;
    let appended = format!(
        "{existing}\n\n/* ========================================\n \
         * Lattice styles - MANUAL INTEGRATION NEEDED\n \
         * Move the :root and .dark variable blocks to the top of this\n \
         * file and keep the tailwind directives first, or re-run\n \
         * 'lattice init --force' to overwrite it completely.\n \
         * ======================================== */\n\n{styles}"
    );
    std::fs::write(css_path, appended).into_diagnostic()?;
    println!(
        "{} Appended Lattice styles to {}",
        style("✓").green(),
        css_path.display()
    );
    println!(
        "{} Manual integration required: check variable ordering in your CSS",
        style("!").yellow()
    );
    Ok(())
}

fn default_css_path(monorepo: bool) -> &'static str {
    if monorepo {
        "packages/ui/src/styles/globals.css"
    } else {
        "src/styles/globals.css"
    }
}

fn default_alias(monorepo: bool, kind: &str) -> String {
    match (monorepo, kind) {
        (true, "components") => "@workspace/ui/components".to_string(),
        (true, _) => "@workspace/ui/lib/utils".to_string(),
        (false, "components") => "@/components".to_string(),
        (false, _) => "@/lib/utils".to_string(),
    }
}
