use async_trait::async_trait;
use depsweep_core::{
    BuildGraph, NODE_MODULES, extract_package_name, is_scope_segment, load_manifest,
    manifest_path,
};
use log::{debug, trace, warn};
use std::{
    collections::HashSet,
    io::{self, Write},
    path::Path,
};

use crate::{
    hooks::{BuildHooks, Compilation},
    reporter::print_report,
    state::CycleState,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DetectorOptions {
    /// Report `@scope/name` instead of truncating scoped packages to `@scope`
    pub scoped_names: bool,
}

/// Flags dependencies declared in `package.json` that no bundled module
/// pulls in from `node_modules`.
#[derive(Debug, Clone, Default)]
pub struct UnusedPackageDetector {
    options: DetectorOptions,
}

impl UnusedPackageDetector {
    pub fn new(options: DetectorOptions) -> Self {
        Self { options }
    }

    /// Resets `state`, loads the manifest and computes the unreferenced set.
    ///
    /// On a manifest failure the state is left empty and the error returned.
    pub async fn emit(
        &self,
        state: &mut CycleState,
        graph: &BuildGraph,
        manifest_path: &Path,
    ) -> depsweep_core::Result<()> {
        state.reset();

        let pkg = load_manifest(manifest_path).await?;
        state.set_manifest(pkg.dependencies);

        self.collect_referenced(state, graph);
        state.select_unreferenced();

        debug!(
            "{} declared, {} referenced, {} unreferenced",
            state.manifest().len(),
            state.referenced().len(),
            state.unreferenced().len()
        );
        Ok(())
    }

    fn collect_referenced(&self, state: &mut CycleState, graph: &BuildGraph) {
        let mut flagged_scopes = HashSet::new();

        for dep in graph.file_dependencies() {
            if !dep.contains(NODE_MODULES) {
                continue;
            }
            let Some(name) = extract_package_name(dep, self.options.scoped_names) else {
                trace!("No package name in {}", dep);
                continue;
            };

            if !self.options.scoped_names
                && is_scope_segment(&name)
                && flagged_scopes.insert(name.clone())
            {
                warn!(
                    "Scoped package under '{}' reported by scope only ({}); pass --scoped-names for full names",
                    name, dep
                );
            }
            state.add_referenced(name);
        }
    }

    /// Prints the report when anything is unreferenced.
    pub fn done<W: Write + ?Sized>(&self, state: &CycleState, out: &mut W) -> io::Result<()> {
        if state.unreferenced().is_empty() {
            debug!("No unused packages");
            return Ok(());
        }
        print_report(out, &state.unused_packages())
    }
}

#[async_trait]
impl BuildHooks for UnusedPackageDetector {
    async fn on_emit(&self, state: &mut CycleState, compilation: &mut Compilation) {
        let path = manifest_path(&compilation.context);
        if let Err(e) = self.emit(state, &compilation.graph, &path).await {
            warn!("Unused package check skipped: {}", e);
            compilation.errors.push(e);
        }
    }

    fn on_done(&self, state: &CycleState, out: &mut dyn Write) -> io::Result<()> {
        self.done(state, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::run_cycle;
    use depsweep_core::{Chunk, DetectorError, MANIFEST_FILE, Module};
    use std::fs;
    use tempfile::TempDir;

    fn graph_of(paths: &[&str]) -> BuildGraph {
        BuildGraph {
            chunks: vec![Chunk {
                name: Some("main".to_string()),
                modules: vec![Module::with_dependencies(paths.iter().copied()), Module::default()],
            }],
        }
    }

    fn write_manifest(dir: &Path, content: &str) {
        fs::write(dir.join(MANIFEST_FILE), content).unwrap();
    }

    fn names(state: &CycleState) -> Vec<&str> {
        state.unreferenced().iter().map(String::as_str).collect()
    }

    #[tokio::test]
    async fn test_emit_finds_unreferenced() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{ "dependencies": { "lodash": "^4.0.0", "react": "^17.0.0" } }"#,
        );

        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let graph = graph_of(&["/proj/node_modules/react/index.js", "/proj/src/app.js"]);
        detector.emit(&mut state, &graph, &manifest_path(temp_dir.path())).await.unwrap();

        assert_eq!(names(&state), vec!["lodash"]);
        assert!(state.referenced().contains("react"));
        assert_eq!(state.referenced().len(), 1);
    }

    #[tokio::test]
    async fn test_emit_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{ "dependencies": { "a": "1", "b": "2", "c": "3" } }"#,
        );

        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let graph = graph_of(&["/p/node_modules/b/index.js"]);
        let path = manifest_path(temp_dir.path());

        detector.emit(&mut state, &graph, &path).await.unwrap();
        let first = state.clone();
        detector.emit(&mut state, &graph, &path).await.unwrap();

        assert_eq!(first.unreferenced(), state.unreferenced());
        assert_eq!(first.referenced(), state.referenced());
        assert_eq!(names(&state), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_emit_resets_previous_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let path = manifest_path(temp_dir.path());
        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();

        write_manifest(temp_dir.path(), r#"{ "dependencies": { "a": "1" } }"#);
        detector.emit(&mut state, &graph_of(&["/p/node_modules/x/i.js"]), &path).await.unwrap();
        assert_eq!(names(&state), vec!["a"]);

        write_manifest(temp_dir.path(), r#"{ "dependencies": { "b": "1" } }"#);
        detector.emit(&mut state, &graph_of(&[]), &path).await.unwrap();
        assert_eq!(names(&state), vec!["b"]);
        assert!(state.referenced().is_empty());
        assert!(!state.manifest().contains_key("a"));
    }

    #[tokio::test]
    async fn test_emit_scoped_packages() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{ "dependencies": { "@babel/runtime": "^7.0.0" } }"#,
        );
        let graph = graph_of(&["/p/node_modules/@babel/runtime/helpers/index.js"]);
        let path = manifest_path(temp_dir.path());

        // Default extraction only sees the scope, so the package stays unreferenced
        let mut state = CycleState::new();
        UnusedPackageDetector::default().emit(&mut state, &graph, &path).await.unwrap();
        assert!(state.referenced().contains("@babel"));
        assert_eq!(names(&state), vec!["@babel/runtime"]);

        let detector = UnusedPackageDetector::new(DetectorOptions { scoped_names: true });
        detector.emit(&mut state, &graph, &path).await.unwrap();
        assert!(state.referenced().contains("@babel/runtime"));
        assert!(state.unreferenced().is_empty());
    }

    #[tokio::test]
    async fn test_emit_missing_manifest_leaves_state_empty() {
        let temp_dir = TempDir::new().unwrap();
        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let graph = graph_of(&["/p/node_modules/react/index.js"]);

        let err = detector
            .emit(&mut state, &graph, &manifest_path(temp_dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, DetectorError::ManifestUnreadable { .. }));
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_cycle_reports_unused() {
        colored::control::set_override(false);
        let temp_dir = TempDir::new().unwrap();
        write_manifest(
            temp_dir.path(),
            r#"{ "dependencies": { "lodash": "^4.0.0", "react": "^17.0.0" } }"#,
        );

        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let mut compilation =
            Compilation::new(temp_dir.path(), graph_of(&["/proj/node_modules/react/index.js"]));
        let mut out = Vec::new();
        run_cycle(&detector, &mut state, &mut compilation, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(compilation.errors.is_empty());
        assert!(text.contains("lodash: ^4.0.0"));
        assert!(text.contains("npm uninstall lodash\n"));
        assert!(text.contains("yarn remove lodash\n"));
        assert!(!text.contains("react"));
    }

    #[tokio::test]
    async fn test_cycle_zero_dependencies_prints_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), r#"{ "name": "app", "dependencies": {} }"#);

        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let mut compilation = Compilation::new(
            temp_dir.path(),
            graph_of(&["/p/node_modules/react/index.js", "/p/node_modules/lodash/index.js"]),
        );
        let mut out = Vec::new();
        run_cycle(&detector, &mut state, &mut compilation, &mut out).await.unwrap();

        assert!(state.unreferenced().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_cycle_missing_manifest_records_error() {
        let temp_dir = TempDir::new().unwrap();
        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();
        let mut compilation =
            Compilation::new(temp_dir.path(), graph_of(&["/p/node_modules/react/index.js"]));
        let mut out = Vec::new();
        run_cycle(&detector, &mut state, &mut compilation, &mut out).await.unwrap();

        assert_eq!(compilation.errors.len(), 1);
        assert!(matches!(compilation.errors[0], DetectorError::ManifestUnreadable { .. }));
        assert!(state.manifest().is_empty());
        assert!(state.unreferenced().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_cycle_malformed_manifest_does_not_affect_next_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let detector = UnusedPackageDetector::default();
        let mut state = CycleState::new();

        write_manifest(temp_dir.path(), "{ broken");
        let mut compilation = Compilation::new(temp_dir.path(), BuildGraph::default());
        run_cycle(&detector, &mut state, &mut compilation, &mut std::io::sink()).await.unwrap();
        assert!(matches!(compilation.errors[0], DetectorError::ManifestMalformed { .. }));

        write_manifest(temp_dir.path(), r#"{ "dependencies": { "a": "1" } }"#);
        let mut compilation = Compilation::new(temp_dir.path(), BuildGraph::default());
        run_cycle(&detector, &mut state, &mut compilation, &mut std::io::sink()).await.unwrap();
        assert!(compilation.errors.is_empty());
        assert_eq!(names(&state), vec!["a"]);
    }
}
