//! Lattice UI: component scaffolding CLI
//!
//! Copies pre-written React/Tailwind component sources into a consumer's
//! project, resolving install locations through workspace detection and
//! import-alias configuration.

pub mod cli;
pub mod color;
pub mod core;
pub mod registry;
