use async_trait::async_trait;
use depsweep_core::{BuildGraph, DetectorError};
use log::debug;
use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::state::CycleState;

/// One build as seen by the hooks: where it ran, what it produced, and the
/// errors collected along the way.
#[derive(Debug, Default)]
pub struct Compilation {
    pub context: PathBuf,
    pub graph: BuildGraph,
    pub errors: Vec<DetectorError>,
}

impl Compilation {
    pub fn new(context: impl Into<PathBuf>, graph: BuildGraph) -> Self {
        Self { context: context.into(), graph, errors: Vec::new() }
    }
}

/// Lifecycle hooks a build orchestrator invokes once per cycle, emit before done.
#[async_trait]
pub trait BuildHooks: Send + Sync {
    /// Runs when the chunk graph is final. Failures are pushed onto
    /// `compilation.errors` instead of being returned.
    async fn on_emit(&self, state: &mut CycleState, compilation: &mut Compilation);

    /// Runs when the build has finished.
    fn on_done(&self, state: &CycleState, out: &mut dyn Write) -> io::Result<()>;
}

/// Drives one emit -> done cycle.
pub async fn run_cycle<H>(
    hooks: &H,
    state: &mut CycleState,
    compilation: &mut Compilation,
    out: &mut dyn Write,
) -> io::Result<()>
where
    H: BuildHooks + ?Sized,
{
    debug!("Emit phase for context {}", compilation.context.display());
    hooks.on_emit(state, compilation).await;
    debug!("Done phase ({} errors recorded)", compilation.errors.len());
    hooks.on_done(state, out)
}
