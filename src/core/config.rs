//! Project configuration (`lattice.json`)
//!
//! The configuration file is written once by `lattice init` and read by
//! every subsequent command. It is an immutable input for the duration of
//! one invocation; this module never mutates it after load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::workspace::WorkspaceInfo;

/// Name of the configuration file searched for in the project tree
pub const CONFIG_FILE: &str = "lattice.json";

const SCHEMA_URL: &str = "https://lattice-ui.dev/lattice.schema.json";

/// Contents of `lattice.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsConfig {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    pub style: String,

    /// Whether the consumer uses React Server Components. `false` strips
    /// `"use client"` directives from copied templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsc: Option<bool>,

    pub tsx: bool,

    pub tailwind: TailwindConfig,

    #[serde(rename = "iconLibrary", skip_serializing_if = "Option::is_none")]
    pub icon_library: Option<String>,

    pub aliases: Aliases,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Path to tailwind.config.js; empty for v4, which needs no config file
    pub config: String,

    /// Path to the global CSS file, relative to the project root
    pub css: String,

    #[serde(rename = "baseColor", skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,

    #[serde(rename = "cssVariables", skip_serializing_if = "Option::is_none")]
    pub css_variables: Option<bool>,

    /// Tailwind major version, "3" or "4"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Import aliases mapped to install locations. `components` and `utils`
/// are mandatory; the rest fall back along the chains in [`crate::core::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no {CONFIG_FILE} found. Run 'lattice init' to create one.")]
    NotFound,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ComponentsConfig {
    /// Preset for standalone projects: everything under the local `src/`
    pub fn single_project() -> Self {
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            style: "default".to_string(),
            rsc: None,
            tsx: true,
            tailwind: TailwindConfig {
                config: "tailwind.config.js".to_string(),
                css: "src/styles/globals.css".to_string(),
                base_color: Some("neutral".to_string()),
                css_variables: Some(true),
                version: None,
            },
            icon_library: None,
            aliases: Aliases {
                components: "@/components".to_string(),
                utils: "@/lib/utils".to_string(),
                ui: Some("@/components/ui".to_string()),
                hooks: Some("@/hooks".to_string()),
                lib: Some("@/lib".to_string()),
            },
        }
    }

    /// Preset for monorepos: everything routed to the shared `packages/ui`
    pub fn monorepo() -> Self {
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            style: "default".to_string(),
            rsc: None,
            tsx: true,
            tailwind: TailwindConfig {
                config: "tailwind.config.js".to_string(),
                css: "packages/ui/src/styles/globals.css".to_string(),
                base_color: Some("neutral".to_string()),
                css_variables: Some(true),
                version: None,
            },
            icon_library: None,
            aliases: Aliases {
                components: "@workspace/ui/components".to_string(),
                utils: "@workspace/ui/lib/utils".to_string(),
                ui: Some("@workspace/ui/components".to_string()),
                hooks: Some("@workspace/ui/hooks".to_string()),
                lib: Some("@workspace/ui/lib".to_string()),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute path of the global CSS file. Relative to the current
    /// sub-package in a monorepo, to the root otherwise.
    pub fn css_path(&self, workspace: &WorkspaceInfo) -> PathBuf {
        workspace.project_dir().join(&self.tailwind.css)
    }
}

/// Locate `lattice.json`: the current sub-package directory is searched
/// before the workspace root, so a sub-package can carry its own config.
pub fn find_config(workspace: &WorkspaceInfo) -> Option<PathBuf> {
    let mut search = Vec::new();
    if workspace.current_workspace.is_some() {
        search.push(workspace.project_dir().join(CONFIG_FILE));
    }
    search.push(workspace.root.join(CONFIG_FILE));

    search.into_iter().find(|p| p.exists())
}
