use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DeployError, Result};

/// File name of a template, both in the templates directory and at the target.
pub const TEMPLATE_FILE: &str = "CLAUDE.md";

/// Template key to the path of its `CLAUDE.md`, ordered by key.
pub type DiscoveredTemplates = BTreeMap<String, PathBuf>;

/// Collect `<templates_dir>/<key>/CLAUDE.md` for every immediate subdirectory.
///
/// Keys without a registry entry are kept; they can only be deployed by
/// entering a path manually.
pub fn find_templates(templates_dir: &Path) -> Result<DiscoveredTemplates> {
    // WalkDir swallows a missing root into its first entry, so probe it first.
    std::fs::read_dir(templates_dir).map_err(|e| DeployError::TemplatesDirUnreadable {
        path: templates_dir.to_path_buf(),
        source: e,
    })?;

    let mut templates = DiscoveredTemplates::new();

    for entry in WalkDir::new(templates_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }

        let template = dir.join(TEMPLATE_FILE);
        if !template.is_file() {
            tracing::debug!("{} has no {TEMPLATE_FILE}", dir.display());
            continue;
        }

        let key = entry.file_name().to_string_lossy().into_owned();
        templates.insert(key, template);
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_only_dirs_with_template_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("A")).unwrap();
        fs::write(dir.path().join("A/CLAUDE.md"), "# A").unwrap();
        fs::create_dir_all(dir.path().join("B")).unwrap();

        let templates = find_templates(dir.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates["A"], dir.path().join("A/CLAUDE.md"));
    }

    #[test]
    fn test_ignores_top_level_files_and_nested_templates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "root").unwrap();
        fs::create_dir_all(dir.path().join("outer/inner")).unwrap();
        fs::write(dir.path().join("outer/inner/CLAUDE.md"), "nested").unwrap();

        let templates = find_templates(dir.path()).unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn test_template_name_that_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hf-models/CLAUDE.md")).unwrap();

        assert!(find_templates(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_unregistered_keys_are_kept_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for key in ["zeta", "hf-spaces", "custom"] {
            fs::create_dir_all(dir.path().join(key)).unwrap();
            fs::write(dir.path().join(key).join("CLAUDE.md"), key).unwrap();
        }

        let templates = find_templates(dir.path()).unwrap();
        let keys: Vec<_> = templates.keys().map(String::as_str).collect();
        assert_eq!(keys, ["custom", "hf-spaces", "zeta"]);
    }

    #[test]
    fn test_missing_templates_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_templates(&dir.path().join("missing"));
        assert!(matches!(
            result,
            Err(DeployError::TemplatesDirUnreadable { .. })
        ));
    }
}
