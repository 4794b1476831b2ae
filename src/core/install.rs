//! npm dependency installation
//!
//! Shells out to the package manager matching the detected workspace
//! convention. Installation is fire-and-forget: a failure prints the
//! manual command instead of aborting the component copy, since the
//! files themselves are already (or about to be) in place.

use console::style;

use crate::core::workspace::WorkspaceInfo;

/// Install the given npm packages into the current project directory.
/// Returns whether the install succeeded; the caller does not need to
/// treat `false` as fatal.
pub fn install_dependencies(workspace: &WorkspaceInfo, dependencies: &[String]) -> bool {
    if dependencies.is_empty() {
        return true;
    }

    let (program, verb) = workspace.kind.install_command();
    println!(
        "{} Installing dependencies with {}...",
        style("◆").cyan(),
        style(program).bold()
    );

    let status = std::process::Command::new(program)
        .arg(verb)
        .args(dependencies)
        .current_dir(workspace.project_dir())
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("{} Dependencies installed", style("✓").green());
            true
        }
        _ => {
            println!(
                "{} Failed to install dependencies. Install them manually:",
                style("✗").red()
            );
            println!(
                "   {} {} {}",
                style(program).yellow(),
                style(verb).yellow(),
                style(dependencies.join(" ")).yellow()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::{WorkspaceInfo, WorkspaceKind};
    use std::path::PathBuf;

    #[test]
    fn test_empty_dependency_list_is_a_no_op() {
        let ws = WorkspaceInfo {
            root: PathBuf::from("/nonexistent"),
            kind: WorkspaceKind::Single,
            workspaces: vec![".".to_string()],
            current_workspace: Some(".".to_string()),
        };
        assert!(install_dependencies(&ws, &[]));
    }

    #[test]
    fn test_install_command_per_kind() {
        assert_eq!(WorkspaceKind::Pnpm.install_command(), ("pnpm", "add"));
        assert_eq!(WorkspaceKind::Yarn.install_command(), ("yarn", "add"));
        assert_eq!(WorkspaceKind::Npm.install_command(), ("npm", "install"));
        assert_eq!(WorkspaceKind::Single.install_command(), ("npm", "install"));
    }
}
