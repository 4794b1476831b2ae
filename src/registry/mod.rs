//! Component registry
//!
//! Metadata for every installable component ships inside the binary:
//! `registry/<name>.json` describes the component (npm dependencies,
//! registry dependencies, files, keyframes) and `templates/` holds the
//! source files that get copied into the consumer's project.

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::core::resolve::LogicalPath;

#[derive(Embed)]
#[folder = "registry/"]
struct EmbeddedRegistry;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Where a component's files belong, mapped through the alias config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "components:ui")]
    Ui,
    #[serde(rename = "components:lib")]
    Lib,
}

impl ComponentKind {
    pub fn logical_path(self) -> LogicalPath {
        match self {
            ComponentKind::Ui => LogicalPath::Ui,
            ComponentKind::Lib => LogicalPath::Lib,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(rename = "registryDependencies", default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub keyframes: Vec<Keyframes>,
    pub files: Vec<RegistryFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryFile {
    /// File name written into the target directory
    pub name: String,
    /// Embedded template path, relative to `templates/`
    pub template: String,
}

/// CSS keyframes a component needs, versioned per Tailwind major
#[derive(Debug, Clone, Deserialize)]
pub struct Keyframes {
    pub name: String,
    pub css: String,
}

impl RegistryComponent {
    /// Keyframes matching the configured Tailwind version, if any
    pub fn keyframes_for(&self, tailwind_version: &str) -> Option<&Keyframes> {
        let wanted = format!("{}-v{}", self.name, tailwind_version);
        self.keyframes.iter().find(|kf| kf.name == wanted)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("'{0}' is not an available component. Run 'lattice list' to see what is.")]
    UnknownComponent(String),

    #[error("registry entry for '{name}' is invalid: {source}")]
    InvalidEntry {
        name: String,
        source: serde_json::Error,
    },

    #[error("template file '{0}' is missing from the registry")]
    MissingTemplate(String),
}

/// Look up a component by name
pub fn get(name: &str) -> Result<RegistryComponent, RegistryError> {
    let file = EmbeddedRegistry::get(&format!("{}.json", name))
        .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))?;

    serde_json::from_slice(&file.data).map_err(|source| RegistryError::InvalidEntry {
        name: name.to_string(),
        source,
    })
}

/// Names of every shipped component, sorted
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = EmbeddedRegistry::iter()
        .filter_map(|path| path.strip_suffix(".json").map(String::from))
        .collect();
    names.sort();
    names
}

/// Contents of an embedded template file
pub fn template(path: &str) -> Result<String, RegistryError> {
    let file = EmbeddedTemplates::get(path)
        .ok_or_else(|| RegistryError::MissingTemplate(path.to_string()))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}
