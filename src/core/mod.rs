//! Core module - workspace detection, alias resolution, configuration

pub mod config;
pub mod install;
pub mod resolve;
pub mod tailwind;
pub mod workspace;

pub use config::{find_config, Aliases, ComponentsConfig, ConfigError, TailwindConfig, CONFIG_FILE};
pub use resolve::{resolve_component_path, LogicalPath};
pub use tailwind::{detect_tailwind_version, TailwindVersion};
pub use workspace::{detect_workspace, WorkspaceInfo, WorkspaceKind};
