pub mod validator;

use std::path::Path;

pub use validator::{has_git_repositories, has_visibility_dirs};

/// Refines a candidate directory that exists. An `Err` counts as a rejection.
pub type Validator = fn(&Path) -> std::io::Result<bool>;

/// How to locate the deployment directory for one template key.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub key: &'static str,
    /// Tried in order; the first acceptable match wins.
    pub patterns: &'static [&'static str],
    pub description: &'static str,
    pub validator: Option<Validator>,
}

impl TemplateEntry {
    /// Whether `path` is acceptable as a target. Only called for existing paths.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(validator) = self.validator else {
            return true;
        };

        match validator(path) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::debug!(
                    "validator for '{}' failed on {}: {e}",
                    self.key,
                    path.display()
                );
                false
            }
        }
    }
}

/// Built-in template keys and their candidate locations.
pub static REGISTRY: &[TemplateEntry] = &[
    TemplateEntry {
        key: "hf-spaces",
        patterns: &[
            "~/repos/hugging-face/spaces",
            "~/repos/huggingface/spaces",
            "~/huggingface/spaces",
        ],
        description: "Hugging Face Spaces directory",
        validator: Some(has_visibility_dirs),
    },
    TemplateEntry {
        key: "hf-datasets",
        patterns: &[
            "~/repos/hugging-face/datasets",
            "~/repos/huggingface/datasets",
            "~/huggingface/datasets",
        ],
        description: "Hugging Face Datasets directory",
        validator: Some(has_visibility_dirs),
    },
    TemplateEntry {
        key: "hf-models",
        patterns: &[
            "~/repos/hugging-face/models",
            "~/repos/huggingface/models",
            "~/huggingface/models",
        ],
        description: "Hugging Face Models directory",
        validator: None,
    },
    TemplateEntry {
        key: "for-gh-repo-base",
        patterns: &["~/repos/github", "~/github", "~/repos/gh"],
        description: "GitHub repositories base directory",
        validator: Some(has_git_repositories),
    },
    TemplateEntry {
        key: "for-gh-docs-base",
        patterns: &[
            "~/repos/docs",
            "~/repos/documentation",
            "~/docs",
            "~/repos/github/docs",
        ],
        description: "GitHub documentation repositories directory",
        validator: None,
    },
    TemplateEntry {
        key: "for-gh-websites-base",
        patterns: &[
            "~/repos/websites",
            "~/repos/web",
            "~/websites",
            "~/repos/github/websites",
        ],
        description: "GitHub websites repositories directory",
        validator: None,
    },
    TemplateEntry {
        key: "for-gh-forks-base",
        patterns: &["~/repos/forks", "~/forks", "~/repos/github/forks"],
        description: "GitHub forked repositories directory",
        validator: None,
    },
    TemplateEntry {
        key: "for-cloned-projects.base",
        patterns: &["~/repos/cloned", "~/cloned-repos", "~/repos/github/cloned"],
        description: "Cloned third-party projects directory",
        validator: None,
    },
];

pub fn lookup<'a>(registry: &'a [TemplateEntry], key: &str) -> Option<&'a TemplateEntry> {
    registry.iter().find(|entry| entry.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_keys_are_unique() {
        let keys: HashSet<_> = REGISTRY.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), REGISTRY.len());
    }

    #[test]
    fn test_every_entry_has_patterns() {
        for entry in REGISTRY {
            assert!(!entry.patterns.is_empty(), "{} has no patterns", entry.key);
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        let entry = lookup(REGISTRY, "hf-spaces").unwrap();
        assert_eq!(entry.patterns[0], "~/repos/hugging-face/spaces");
        assert!(entry.validator.is_some());
        assert!(lookup(REGISTRY, "hf-models").unwrap().validator.is_none());
        assert!(lookup(REGISTRY, "unknown").is_none());
    }

    #[test]
    fn test_accepts_treats_validator_error_as_rejection() {
        fn broken(_: &Path) -> std::io::Result<bool> {
            Err(std::io::Error::other("boom"))
        }
        let entry = TemplateEntry {
            key: "broken",
            patterns: &["~/x"],
            description: "broken",
            validator: Some(broken),
        };
        assert!(!entry.accepts(Path::new("/")));
    }

    #[test]
    fn test_accepts_without_validator() {
        let entry = lookup(REGISTRY, "hf-models").unwrap();
        assert!(entry.accepts(Path::new("/anything")));
    }
}
