//! Protected path list and textual path joining.
//!
//! Matching is exact string equality. Paths are never canonicalized, so
//! `a/./b`, `a/b/`, symlinks, and case variants of a protected entry do not
//! match it. This is a known gap; closing it changes what the guard enforces.

/// Protected files, relative to the project directory.
pub const PROTECTED_RELATIVE: [&str; 6] = [
    "scripts/run-tests.sh",
    "scripts/stop-hook.sh",
    "scripts/pre-commit-tests.sh",
    "scripts/git-command-filter.sh",
    ".claude/settings.json",
    "scripts/protect-files-edit.py",
];

/// Protected paths resolved against one base directory.
#[derive(Debug, Clone)]
pub struct ProtectedSet {
    paths: Vec<String>,
}

impl ProtectedSet {
    pub fn resolve(base_dir: &str) -> Self {
        let paths = PROTECTED_RELATIVE
            .iter()
            .map(|rel| join(base_dir, rel))
            .collect();
        Self { paths }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

/// Textual join: no separator is added after an empty base or one that
/// already ends in `/`.
pub fn join(base: &str, rel: &str) -> String {
    if base.is_empty() {
        return rel.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
