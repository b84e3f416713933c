use log::trace;

use crate::constants::NODE_MODULES;

/// Extracts the installed package name from a dependency path.
///
/// The name is the segment right after the last `node_modules` directory, so
/// nested installs (`.pnpm/.../node_modules/react/...`) resolve to the
/// innermost package. Paths without a `node_modules` segment yield `None`.
///
/// Scoped packages are only expanded to `@scope/name` when `scoped` is set;
/// otherwise the scope segment alone is returned.
pub fn extract_package_name(path: &str, scoped: bool) -> Option<String> {
    let normalized = path.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').collect();

    let idx = segments.iter().rposition(|s| *s == NODE_MODULES)?;
    let name = segments.get(idx + 1).copied().filter(|s| !s.is_empty())?;

    if scoped
        && is_scope_segment(name)
        && let Some(rest) = segments.get(idx + 2).copied().filter(|s| !s.is_empty())
    {
        trace!("Extracted scoped package '{}/{}' from {}", name, rest, path);
        return Some(format!("{name}/{rest}"));
    }

    trace!("Extracted package '{}' from {}", name, path);
    Some(name.to_string())
}

/// True when a path segment is an npm scope such as `@babel`.
pub fn is_scope_segment(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with('@')
}
