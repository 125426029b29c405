use std::path::PathBuf;

use crate::paths::PathExpander;
use crate::registry::{lookup, TemplateEntry};

/// Find the deployment directory for `key` by scanning its candidate patterns.
///
/// Patterns are tried in registry order and the first existing path that the
/// entry's validator accepts wins. Returns `None` for unknown keys or when no
/// candidate matches.
pub fn detect_target_path(
    registry: &[TemplateEntry],
    key: &str,
    expander: &PathExpander,
) -> Option<PathBuf> {
    let entry = lookup(registry, key)?;

    for pattern in entry.patterns {
        let path = expander.expand(pattern);

        if !path.exists() {
            tracing::debug!("{key}: {} does not exist", path.display());
            continue;
        }

        if entry.accepts(&path) {
            tracing::debug!("{key}: matched {}", path.display());
            return Some(path);
        }

        tracing::debug!("{key}: {} rejected by validator", path.display());
    }

    None
}
