use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetectorError>;

/// Errors raised while loading the inputs of a build cycle.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// The manifest could not be read (missing file, permissions, invalid UTF-8)
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest was read but is not valid JSON of the expected shape
    #[error("Invalid manifest {}: {source}", path.display())]
    ManifestMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read build graph {}: {source}", path.display())]
    GraphUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build graph {}: {source}", path.display())]
    GraphMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not find a {manifest} in {} or any parent folder", start.display())]
    ProjectRootNotFound { start: PathBuf, manifest: &'static str },
}

impl DetectorError {
    /// True for failures that belong to the manifest of a build cycle.
    pub fn is_manifest_error(&self) -> bool {
        matches!(self, Self::ManifestUnreadable { .. } | Self::ManifestMalformed { .. })
    }
}
