use depsweep_core::Dependencies;
use indexmap::IndexSet;
use log::trace;
use std::collections::HashSet;

use crate::types::UnusedPackage;

/// Everything one build cycle knows about package usage.
///
/// The emit hook resets and fills it; the done hook only reads it. Nothing
/// survives into the next cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    referenced: HashSet<String>,
    unreferenced: IndexSet<String>,
    manifest: Dependencies,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        trace!("Resetting cycle state");
        self.referenced.clear();
        self.unreferenced.clear();
        self.manifest.clear();
    }

    pub fn referenced(&self) -> &HashSet<String> {
        &self.referenced
    }

    /// Unreferenced names in manifest declaration order
    pub fn unreferenced(&self) -> &IndexSet<String> {
        &self.unreferenced
    }

    pub fn manifest(&self) -> &Dependencies {
        &self.manifest
    }

    pub fn is_empty(&self) -> bool {
        self.referenced.is_empty() && self.unreferenced.is_empty() && self.manifest.is_empty()
    }

    pub(crate) fn set_manifest(&mut self, dependencies: Dependencies) {
        self.manifest = dependencies;
    }

    pub(crate) fn add_referenced(&mut self, name: String) {
        self.referenced.insert(name);
    }

    /// Recomputes the unreferenced set as `keys(manifest) \ referenced`.
    pub(crate) fn select_unreferenced(&mut self) {
        self.unreferenced = self
            .manifest
            .keys()
            .filter(|name| !self.referenced.contains(*name))
            .cloned()
            .collect();
    }

    /// Unreferenced packages paired with their declared version.
    pub fn unused_packages(&self) -> Vec<UnusedPackage> {
        self.unreferenced
            .iter()
            .map(|name| UnusedPackage {
                name: name.clone(),
                version: self.manifest.get(name).cloned().unwrap_or_default(),
            })
            .collect()
    }
}
