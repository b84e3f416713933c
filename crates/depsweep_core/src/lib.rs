//! Core utilities for depsweep tools.
//!
//! This crate provides the shared model for inspecting a bundler's output,
//! including:
//! - The chunk/module graph emitted by a build
//! - Loading `package.json` manifests
//! - Extracting package names from `node_modules` dependency paths
//! - Locating the project root (nearest directory with a manifest)

mod config;
mod constants;
mod error;
mod graph;
mod manifest;
mod package_name;
mod types;

// Re-export public API
pub use config::{find_project_root, find_project_root_from};
pub use constants::{MANIFEST_FILE, NODE_MODULES};
pub use error::{DetectorError, Result};
pub use graph::load_graph;
pub use manifest::{load_manifest, manifest_path};
pub use package_name::{extract_package_name, is_scope_segment};
pub use types::{BuildGraph, Chunk, Dependencies, Module, PackageJson};
