//! Workspace detection
//!
//! Classifies the invocation directory as a single package or one of the
//! three JavaScript monorepo conventions (npm, yarn, pnpm) by walking parent
//! directories and inspecting package manifests and workspace declaration
//! files. Detection never fails: the worst case is the single-project
//! fallback rooted at the starting directory.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which package-manager convention a workspace root follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceKind {
    /// No workspace markers found; a plain standalone project
    Single,
    /// `package.json` with a `workspaces` field, no yarn lockfile
    Npm,
    /// `package.json` with a `workspaces` field plus `yarn.lock`
    Yarn,
    /// `pnpm-workspace.yaml` present at the root
    Pnpm,
}

impl WorkspaceKind {
    pub fn is_monorepo(self) -> bool {
        self != WorkspaceKind::Single
    }

    /// Command used to install dependencies under this convention
    pub fn install_command(self) -> (&'static str, &'static str) {
        match self {
            WorkspaceKind::Pnpm => ("pnpm", "add"),
            WorkspaceKind::Yarn => ("yarn", "add"),
            WorkspaceKind::Npm | WorkspaceKind::Single => ("npm", "install"),
        }
    }
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkspaceKind::Single => "single",
            WorkspaceKind::Npm => "npm",
            WorkspaceKind::Yarn => "yarn",
            WorkspaceKind::Pnpm => "pnpm",
        };
        write!(f, "{}", s)
    }
}

/// Result of workspace detection, computed once per invocation
#[derive(Debug, Clone)]
pub struct WorkspaceInfo {
    /// Absolute path of the detected workspace root
    pub root: PathBuf,
    pub kind: WorkspaceKind,
    /// Declared sub-package path patterns, e.g. `["packages/*", "docs"]`.
    /// `["."]` for single projects.
    pub workspaces: Vec<String>,
    /// The sub-package containing the invocation directory, relative to
    /// `root`. `Some(".")` for single projects, `None` when the invocation
    /// directory matched no declared pattern.
    pub current_workspace: Option<String>,
}

impl WorkspaceInfo {
    fn single(root: PathBuf) -> Self {
        Self {
            root,
            kind: WorkspaceKind::Single,
            workspaces: vec![".".to_string()],
            current_workspace: Some(".".to_string()),
        }
    }

    /// Directory the current invocation should treat as its project root:
    /// the current sub-package when one was detected, otherwise the
    /// workspace root.
    pub fn project_dir(&self) -> PathBuf {
        match self.current_workspace.as_deref() {
            Some(sub) if sub != "." => self.root.join(sub),
            _ => self.root.clone(),
        }
    }
}

/// The subset of `package.json` that detection cares about
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    workspaces: Option<WorkspacesField>,
}

/// `workspaces` appears either as a bare array or wrapped in an object
/// with a `packages` key (the yarn "nohoist" form)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkspacesField {
    List(Vec<String>),
    Scoped { packages: Vec<String> },
}

impl WorkspacesField {
    fn into_patterns(self) -> Vec<String> {
        match self {
            WorkspacesField::List(list) => list,
            WorkspacesField::Scoped { packages } => packages,
        }
    }
}

/// The `packages:` list of `pnpm-workspace.yaml`; every other key is ignored
#[derive(Debug, Default, Deserialize)]
struct PnpmWorkspaceFile {
    #[serde(default)]
    packages: Vec<String>,
}

/// Detect the workspace containing `start_dir`.
///
/// Walks upward toward the filesystem root. At each directory with a
/// parseable `package.json`, conventions are tested in precedence order:
/// pnpm declaration file, then `workspaces` + yarn lockfile, then bare
/// `workspaces`. The ordering is a deliberate tie-break since leftover
/// lockfiles can leave several markers present at once.
///
/// A malformed manifest is treated as if no manifest existed at that
/// directory and the walk continues; failing the whole CLI over an
/// unrelated broken file elsewhere in the tree would be poor UX.
pub fn detect_workspace(start_dir: &Path) -> WorkspaceInfo {
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    let mut current = start.clone();
    loop {
        if let Some(info) = classify_root(&current, &start) {
            return info;
        }
        if !current.pop() {
            break;
        }
    }

    WorkspaceInfo::single(start)
}

/// Test a single candidate directory for a workspace convention
fn classify_root(dir: &Path, start: &Path) -> Option<WorkspaceInfo> {
    let manifest = read_manifest(dir)?;

    let has_pnpm_file = dir.join("pnpm-workspace.yaml").is_file();
    let has_yarn_lock = dir.join("yarn.lock").is_file();

    let (kind, patterns) = if has_pnpm_file {
        (WorkspaceKind::Pnpm, read_pnpm_packages(dir))
    } else if let Some(field) = manifest.workspaces {
        let kind = if has_yarn_lock {
            WorkspaceKind::Yarn
        } else {
            WorkspaceKind::Npm
        };
        (kind, field.into_patterns())
    } else {
        // Plain manifest with no workspace markers: keep walking, the
        // invocation may sit inside a sub-package of a monorepo above.
        return None;
    };

    let current_workspace = find_current_workspace(start, dir, &patterns);

    Some(WorkspaceInfo {
        root: dir.to_path_buf(),
        kind,
        workspaces: patterns,
        current_workspace,
    })
}

fn read_manifest(dir: &Path) -> Option<PackageManifest> {
    let contents = std::fs::read_to_string(dir.join("package.json")).ok()?;
    serde_json::from_str(&contents).ok()
}

fn read_pnpm_packages(root: &Path) -> Vec<String> {
    std::fs::read_to_string(root.join("pnpm-workspace.yaml"))
        .ok()
        .and_then(|contents| serde_yml::from_str::<PnpmWorkspaceFile>(&contents).ok())
        .map(|file| file.packages)
        .unwrap_or_default()
}

/// Match the invocation directory against the declared sub-package patterns.
/// First matching pattern wins; returns the concrete sub-package path
/// (`packages/*` matched from `packages/ui/src` yields `packages/ui`).
fn find_current_workspace(start: &Path, root: &Path, patterns: &[String]) -> Option<String> {
    let rel = start.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }

    patterns
        .iter()
        .find_map(|pattern| match_workspace_pattern(pattern, rel))
}

/// Simplified glob matching: literal paths match by path-prefix; a single
/// trailing `*` segment matches any one directory under its prefix. Any
/// other wildcard form (mid-path or repeated `*`) is "no match" rather
/// than an error.
fn match_workspace_pattern(pattern: &str, rel: &Path) -> Option<String> {
    if let Some(prefix) = pattern.strip_suffix('*') {
        if prefix.contains('*') {
            return None;
        }
        let prefix = prefix.trim_end_matches('/');

        let remainder = if prefix.is_empty() {
            rel
        } else {
            rel.strip_prefix(prefix).ok()?
        };
        let first = remainder.components().next()?;
        let segment = first.as_os_str().to_string_lossy();
        if prefix.is_empty() {
            return Some(segment.into_owned());
        }
        return Some(format!("{}/{}", prefix, segment));
    }

    if pattern.contains('*') {
        return None;
    }

    if rel == Path::new(pattern) || rel.strip_prefix(pattern).is_ok() {
        return Some(pattern.to_string());
    }

    None
}
