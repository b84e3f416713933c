use log::{debug, trace};
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    constants::MANIFEST_FILE,
    error::{DetectorError, Result},
};

/// Finds the build context for the current directory: the nearest ancestor
/// holding a `package.json`.
pub fn find_project_root() -> Result<PathBuf> {
    let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root_from(&current_dir)
}

pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    debug!("Searching for project root from: {:?}", start);
    let mut current_dir = start.to_path_buf();

    loop {
        let manifest = current_dir.join(MANIFEST_FILE);
        trace!("Checking for {} at: {:?}", MANIFEST_FILE, manifest);
        if manifest.is_file() {
            debug!("Found project root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        // Try to move up to parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find {} in any parent folder", MANIFEST_FILE);
                return Err(DetectorError::ProjectRootNotFound {
                    start: start.to_path_buf(),
                    manifest: MANIFEST_FILE,
                });
            }
        }
    }
}
