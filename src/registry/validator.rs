use std::path::Path;

/// More than this many git checkouts directly inside a directory marks it as a repos base.
const MIN_GIT_CHILDREN: usize = 5;

/// Hugging Face layout: a `public` or `private` subdirectory.
pub fn has_visibility_dirs(path: &Path) -> std::io::Result<bool> {
    Ok(path.join("public").is_dir() || path.join("private").is_dir())
}

/// A git checkout itself, or a directory holding several of them.
///
/// Hidden children count like any other.
pub fn has_git_repositories(path: &Path) -> std::io::Result<bool> {
    if path.join(".git").exists() {
        return Ok(true);
    }

    let mut checkouts = 0;
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.path().join(".git").exists() {
            checkouts += 1;
            if checkouts > MIN_GIT_CHILDREN {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
