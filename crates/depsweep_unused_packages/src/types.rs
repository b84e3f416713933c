use depsweep_core::DetectorError;

/// A declared dependency that no module of the build referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedPackage {
    pub name: String,
    /// Version specifier as declared in the manifest
    pub version: String,
}

#[derive(Debug)]
pub struct CheckResult {
    pub unused: Vec<UnusedPackage>,
    pub declared: usize,
    pub referenced: usize,
    pub modules_analyzed: usize,
    /// Errors recorded on the build cycle (manifest failures)
    pub errors: Vec<DetectorError>,
}
