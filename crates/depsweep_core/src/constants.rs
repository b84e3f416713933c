/// Manifest file name looked up in the build context directory
pub const MANIFEST_FILE: &str = "package.json";

/// Directory segment that marks an installed package inside a dependency path
pub const NODE_MODULES: &str = "node_modules";
