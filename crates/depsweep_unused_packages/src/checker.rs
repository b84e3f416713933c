use anyhow::{Context, Result};
use depsweep_core::load_graph;
use log::{debug, info};
use std::io::Write;

use crate::{
    config::Config,
    detector::UnusedPackageDetector,
    hooks::{Compilation, run_cycle},
    state::CycleState,
    types::CheckResult,
};

/// Runs one emit -> done cycle over a graph dump and writes the report to `out`.
pub async fn run_unused_packages_check(mut cfg: Config, out: &mut dyn Write) -> Result<CheckResult> {
    info!("Starting unused packages check");

    // Initialize config (resolve context directory)
    cfg.initialize()?;
    let context = cfg.context()?.clone();

    debug!("Loading build graph from {}", cfg.graph.display());
    let graph = load_graph(&cfg.graph)
        .await
        .with_context(|| format!("Cannot load build graph {}", cfg.graph.display()))?;
    let modules_analyzed = graph.module_count();

    let detector = UnusedPackageDetector::new(cfg.detector_options());
    let mut state = CycleState::new();
    let mut compilation = Compilation::new(context, graph);

    run_cycle(&detector, &mut state, &mut compilation, out)
        .await
        .context("Failed to write unused packages report")?;

    let unused = state.unused_packages();
    info!("Unused packages check complete. Found {} unused packages", unused.len());

    Ok(CheckResult {
        unused,
        declared: state.manifest().len(),
        referenced: state.referenced().len(),
        modules_analyzed,
        errors: compilation.errors,
    })
}
