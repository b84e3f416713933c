use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::{
    constants::MANIFEST_FILE,
    error::{DetectorError, Result},
    types::PackageJson,
};

/// Path of the manifest for a build context directory.
pub fn manifest_path(context: &Path) -> PathBuf {
    context.join(MANIFEST_FILE)
}

/// Reads and parses a `package.json`.
///
/// The read is the only await point of an emit phase. A missing or unreadable
/// file maps to [`DetectorError::ManifestUnreadable`], bad JSON to
/// [`DetectorError::ManifestMalformed`].
pub async fn load_manifest(path: &Path) -> Result<PackageJson> {
    trace!("Reading manifest: {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DetectorError::ManifestUnreadable { path: path.to_path_buf(), source })?;

    let mut pkg: PackageJson = serde_json::from_str(&content)
        .map_err(|source| DetectorError::ManifestMalformed { path: path.to_path_buf(), source })?;
    pkg.path = path.to_path_buf();

    debug!("Loaded {} declared dependencies from {}", pkg.dependencies.len(), path.display());
    Ok(pkg)
}
