//! Unused package detection for bundled JavaScript/TypeScript projects.
//!
//! This crate compares the dependencies declared in `package.json` with the
//! packages a bundler actually pulled out of `node_modules`, and prints an
//! uninstall suggestion for the ones nothing referenced.
//!
//! The detector plugs into a build through [`BuildHooks`]: `on_emit` walks the
//! finished chunk graph, `on_done` prints the report. All per-build data lives
//! in a [`CycleState`] that the emit hook resets.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use depsweep_unused_packages::{Config, run_unused_packages_check};
//! use std::io::{BufWriter, Write};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let cfg = Config {
//!     graph: std::path::PathBuf::from("stats.json"),
//!     context: Some(std::path::PathBuf::from("/path/to/project")),
//!     scoped_names: false,
//!     fail_on_unused: false,
//! };
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_unused_packages_check(cfg, &mut stdout).await?;
//! stdout.flush()?;
//!
//! if !result.errors.is_empty() {
//!     depsweep_unused_packages::print_errors(&mut std::io::stderr(), &result.errors)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving the hooks directly
//!
//! ```no_run
//! use depsweep_core::BuildGraph;
//! use depsweep_unused_packages::{Compilation, CycleState, UnusedPackageDetector, run_cycle};
//!
//! # async fn run(graph: BuildGraph) -> std::io::Result<()> {
//! let detector = UnusedPackageDetector::default();
//! let mut state = CycleState::new();
//! let mut compilation = Compilation::new("/path/to/project", graph);
//! run_cycle(&detector, &mut state, &mut compilation, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod detector;
mod hooks;
mod reporter;
mod state;
mod types;

// Re-export public API
pub use checker::run_unused_packages_check;
pub use config::Config;
pub use detector::{DetectorOptions, UnusedPackageDetector};
pub use hooks::{BuildHooks, Compilation, run_cycle};
pub use reporter::{format_report, print_errors, print_report};
pub use state::CycleState;
pub use types::{CheckResult, UnusedPackage};
