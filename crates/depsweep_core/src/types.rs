use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Declared dependencies, name -> version specifier, in declaration order.
pub type Dependencies = IndexMap<String, String>;

/// The parts of a `package.json` the detector cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Production dependencies; an absent field is treated as empty
    #[serde(default)]
    pub dependencies: Dependencies,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: PathBuf,
}

/// Chunk/module graph of one finished build, as handed over by the bundler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildGraph {
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default)]
    pub identifier: Option<String>,
    /// File-system paths this module depends on, when the bundler tracks them
    #[serde(default)]
    pub file_dependencies: Option<Vec<String>>,
}

impl BuildGraph {
    /// Iterates every file-dependency path, chunk by chunk, module by module.
    pub fn file_dependencies(&self) -> impl Iterator<Item = &str> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.modules.iter())
            .filter_map(|module| module.file_dependencies.as_deref())
            .flatten()
            .map(String::as_str)
    }

    pub fn module_count(&self) -> usize {
        self.chunks.iter().map(|c| c.modules.len()).sum()
    }
}

impl Module {
    pub fn with_dependencies<I, S>(deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { identifier: None, file_dependencies: Some(deps.into_iter().map(Into::into).collect()) }
    }
}
