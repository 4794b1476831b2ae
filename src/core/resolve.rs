//! Alias resolution
//!
//! Maps a logical install location (`components`, `utils`, ...) through the
//! configured import aliases to an absolute filesystem directory. Resolution
//! is pure: it never touches the filesystem, never fails, and leaves
//! directory creation to the file-copy side.

use std::path::PathBuf;

use crate::core::config::Aliases;
use crate::core::workspace::WorkspaceInfo;

/// Alias prefix meaning "a sibling package under `packages/`"
pub const WORKSPACE_ALIAS_PREFIX: &str = "@workspace/";
/// Alias prefix meaning "relative to the project's own `src/`"
pub const PROJECT_ALIAS_PREFIX: &str = "@/";

/// The recognized alias categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalPath {
    Components,
    Utils,
    Ui,
    Hooks,
    Lib,
}

impl LogicalPath {
    /// Ordered alias lookups for this logical path. Only `components` and
    /// `utils` are mandatory in the config schema, so the optional names
    /// fall back along an explicit chain rather than via nested
    /// conditionals: `ui` and `hooks` land next to `components`, while
    /// `lib` lands next to `utils`.
    fn candidates(self, aliases: &Aliases) -> [Option<&str>; 2] {
        match self {
            LogicalPath::Components => [Some(aliases.components.as_str()), None],
            LogicalPath::Utils => [Some(aliases.utils.as_str()), None],
            LogicalPath::Ui => [
                aliases.ui.as_deref(),
                Some(aliases.components.as_str()),
            ],
            LogicalPath::Hooks => [
                aliases.hooks.as_deref(),
                Some(aliases.components.as_str()),
            ],
            LogicalPath::Lib => [aliases.lib.as_deref(), Some(aliases.utils.as_str())],
        }
    }
}

/// Resolve the directory a logical path points at.
///
/// Two alias conventions exist: monorepos reference a shared package by the
/// `@workspace/` scope while single projects reference their own source
/// tree with `@/`. Anything else is returned verbatim as a literal path,
/// an escape hatch for unusual setups.
pub fn resolve_component_path(
    aliases: &Aliases,
    workspace: &WorkspaceInfo,
    logical: LogicalPath,
) -> PathBuf {
    let alias = logical
        .candidates(aliases)
        .into_iter()
        .flatten()
        .next()
        .unwrap_or(aliases.components.as_str());

    if let Some(rest) = alias.strip_prefix(WORKSPACE_ALIAS_PREFIX) {
        return workspace.root.join("packages").join(rest);
    }

    if let Some(rest) = alias.strip_prefix(PROJECT_ALIAS_PREFIX) {
        return workspace.project_dir().join("src").join(rest);
    }

    PathBuf::from(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::WorkspaceKind;
    use std::path::Path;

    fn monorepo(root: &str, current: Option<&str>) -> WorkspaceInfo {
        WorkspaceInfo {
            root: PathBuf::from(root),
            kind: WorkspaceKind::Pnpm,
            workspaces: vec!["packages/*".to_string()],
            current_workspace: current.map(String::from),
        }
    }

    fn single(root: &str) -> WorkspaceInfo {
        WorkspaceInfo {
            root: PathBuf::from(root),
            kind: WorkspaceKind::Single,
            workspaces: vec![".".to_string()],
            current_workspace: Some(".".to_string()),
        }
    }

    fn aliases_single() -> Aliases {
        Aliases {
            components: "@/components".to_string(),
            utils: "@/lib/utils".to_string(),
            ui: Some("@/components/ui".to_string()),
            hooks: Some("@/hooks".to_string()),
            lib: Some("@/lib".to_string()),
        }
    }

    #[test]
    fn test_workspace_alias_lands_under_packages() {
        let aliases = Aliases {
            components: "@workspace/ui/components".to_string(),
            utils: "@workspace/ui/lib/utils".to_string(),
            ui: None,
            hooks: None,
            lib: None,
        };
        let ws = monorepo("/repo", Some("apps/web"));

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Components);
        assert_eq!(path, Path::new("/repo/packages/ui/components"));
    }

    #[test]
    fn test_project_alias_lands_under_src() {
        let ws = single("/proj");
        let path = resolve_component_path(&aliases_single(), &ws, LogicalPath::Components);
        assert_eq!(path, Path::new("/proj/src/components"));
    }

    #[test]
    fn test_project_alias_uses_current_subpackage() {
        let mut aliases = aliases_single();
        aliases.ui = None;
        let ws = monorepo("/repo", Some("apps/web"));

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Components);
        assert_eq!(path, Path::new("/repo/apps/web/src/components"));
    }

    #[test]
    fn test_missing_ui_falls_back_to_components() {
        let mut aliases = aliases_single();
        aliases.ui = None;
        let ws = single("/proj");

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Ui);
        assert_eq!(path, Path::new("/proj/src/components"));
    }

    #[test]
    fn test_missing_lib_falls_back_to_utils() {
        let mut aliases = aliases_single();
        aliases.lib = None;
        let ws = single("/proj");

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Lib);
        assert_eq!(path, Path::new("/proj/src/lib/utils"));
    }

    #[test]
    fn test_missing_hooks_falls_back_to_components() {
        let mut aliases = aliases_single();
        aliases.hooks = None;
        let ws = single("/proj");

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Hooks);
        assert_eq!(path, Path::new("/proj/src/components"));
    }

    #[test]
    fn test_unrecognized_alias_is_literal_path() {
        let aliases = Aliases {
            components: "vendor/ui".to_string(),
            utils: "vendor/lib".to_string(),
            ui: None,
            hooks: None,
            lib: None,
        };
        let ws = single("/proj");

        let path = resolve_component_path(&aliases, &ws, LogicalPath::Components);
        assert_eq!(path, Path::new("vendor/ui"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let aliases = aliases_single();
        let ws = monorepo("/repo", Some("packages/ui"));

        let a = resolve_component_path(&aliases, &ws, LogicalPath::Ui);
        let b = resolve_component_path(&aliases, &ws, LogicalPath::Ui);
        assert_eq!(a, b);
    }
}
