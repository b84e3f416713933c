use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use crate::detector::DetectorOptions;

#[derive(Debug, Clone, Parser)]
#[command(name = "unused-packages")]
#[command(about = "Report package.json dependencies that no bundled module uses")]
pub struct Config {
    /// JSON dump of the bundler's chunk/module graph
    #[arg(long)]
    pub graph: PathBuf,

    /// Build context directory holding package.json (defaults to the nearest ancestor with one)
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Report scoped packages as @scope/name instead of the scope alone
    #[arg(long)]
    pub scoped_names: bool,

    /// Exit with a non-zero status when unused packages are found
    #[arg(long)]
    pub fail_on_unused: bool,
}

impl Config {
    /// Initialize the config by resolving the build context directory
    pub fn initialize(&mut self) -> Result<()> {
        let context = if let Some(c) = self.context.take() {
            debug!("Using provided context directory: {:?}", c);
            c.canonicalize().unwrap_or(c)
        } else {
            debug!("No context provided, searching for nearest package.json");
            depsweep_core::find_project_root()?
        };
        info!("Using context directory: {}", context.display());

        self.context = Some(context);
        Ok(())
    }

    /// Get the context directory, returning an error if not initialized
    pub fn context(&self) -> Result<&PathBuf> {
        self.context
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn detector_options(&self) -> DetectorOptions {
        DetectorOptions { scoped_names: self.scoped_names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_flags() {
        let cfg = Config::try_parse_from([
            "unused-packages",
            "--graph",
            "stats.json",
            "--context",
            "/proj",
            "--scoped-names",
        ])
        .unwrap();
        assert_eq!(cfg.graph, PathBuf::from("stats.json"));
        assert_eq!(cfg.context, Some(PathBuf::from("/proj")));
        assert!(cfg.detector_options().scoped_names);
        assert!(!cfg.fail_on_unused);
    }

    #[test]
    fn test_graph_is_required() {
        assert!(Config::try_parse_from(["unused-packages"]).is_err());
    }

    #[test]
    fn test_context_requires_initialize() {
        let mut cfg = Config::try_parse_from(["unused-packages", "--graph", "g.json"]).unwrap();
        cfg.context = None;
        assert!(cfg.context().is_err());

        let temp_dir = TempDir::new().unwrap();
        cfg.context = Some(temp_dir.path().to_path_buf());
        cfg.initialize().unwrap();
        assert_eq!(cfg.context().unwrap(), &temp_dir.path().canonicalize().unwrap());
    }
}
