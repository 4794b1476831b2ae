//! Installed Tailwind version detection
//!
//! Reads `node_modules/tailwindcss/package.json` to find which major
//! version the consumer has installed. Only used for setup guidance, so
//! every failure collapses to `None`.

use serde::Deserialize;
use std::path::Path;

use crate::core::workspace::WorkspaceInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailwindVersion {
    V3,
    V4,
}

impl TailwindVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            TailwindVersion::V3 => "3",
            TailwindVersion::V4 => "4",
        }
    }
}

#[derive(Debug, Deserialize)]
struct TailwindManifest {
    version: String,
}

/// Look for an installed tailwindcss package, checking the current
/// sub-package's node_modules before the hoisted root install.
pub fn detect_tailwind_version(workspace: &WorkspaceInfo) -> Option<TailwindVersion> {
    let candidates = [workspace.project_dir(), workspace.root.clone()];

    candidates
        .iter()
        .find_map(|dir| read_version(&dir.join("node_modules/tailwindcss/package.json")))
}

fn read_version(manifest_path: &Path) -> Option<TailwindVersion> {
    let contents = std::fs::read_to_string(manifest_path).ok()?;
    let manifest: TailwindManifest = serde_json::from_str(&contents).ok()?;

    match manifest.version.split('.').next() {
        Some("3") => Some(TailwindVersion::V3),
        Some("4") => Some(TailwindVersion::V4),
        _ => None,
    }
}
