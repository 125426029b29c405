use std::path::{is_separator, Component, Path, PathBuf};

/// Expands candidate patterns and operator input into absolute paths.
///
/// Expansion is purely lexical: `$VAR`/`${VAR}` from the environment, a
/// leading `~`, then absolutization against the current directory and
/// removal of `.`/`..` components. The filesystem is never consulted, so
/// paths that do not exist expand just as well as ones that do.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn from_env() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Use `home` for `~` instead of the user's real home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn expand(&self, raw: &str) -> PathBuf {
        let with_vars = expand_vars(raw);
        let path = self.expand_home(&with_vars);

        let absolute = if path.is_absolute() {
            path
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(e) => {
                    tracing::warn!("cannot determine current directory: {e}");
                    path
                }
            }
        };

        normalize(&absolute)
    }

    fn expand_home(&self, s: &str) -> PathBuf {
        match (&self.home, s.strip_prefix('~')) {
            (Some(home), Some("")) => home.clone(),
            (Some(home), Some(rest)) if rest.starts_with(is_separator) => {
                home.join(rest.trim_start_matches(is_separator))
            }
            _ => PathBuf::from(s),
        }
    }
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Replace `$NAME` and `${NAME}` with environment values.
///
/// Unset variables and malformed references are kept verbatim.
fn expand_vars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !is_name_char(c))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        let value = if is_valid_name(name) {
            std::env::var(name).ok()
        } else {
            None
        };

        match value {
            Some(value) => {
                out.push_str(&value);
                rest = &after[consumed..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
