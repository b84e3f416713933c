use log::debug;
use std::path::Path;

use crate::{
    error::{DetectorError, Result},
    types::BuildGraph,
};

/// Loads a build graph dumped by the bundler as JSON.
pub async fn load_graph(path: &Path) -> Result<BuildGraph> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DetectorError::GraphUnreadable { path: path.to_path_buf(), source })?;

    let graph: BuildGraph = serde_json::from_str(&content)
        .map_err(|source| DetectorError::GraphMalformed { path: path.to_path_buf(), source })?;

    debug!(
        "Loaded build graph with {} chunks and {} modules from {}",
        graph.chunks.len(),
        graph.module_count(),
        path.display()
    );
    Ok(graph)
}
