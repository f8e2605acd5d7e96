//! Directory scanning with glob-style file name patterns.

use std::fmt;
use std::path::PathBuf;

use ignore::WalkBuilder;
use regex::Regex;

use crate::store::FileStore;

/// A file name pattern that did not compile.
#[derive(Debug)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad file pattern `{}`: {}", self.pattern, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Anchored regex for a glob: `*` matches any run, `?` any single character,
/// everything else literally.
fn glob_to_regex(glob: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::from("^");
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(&ch.to_string())),
        }
    }
    pattern.push('$');
    Regex::new(&pattern)
}

/// Recursive walk below a root, keeping files whose names match any of the
/// registered patterns. With no patterns registered, every file matches.
///
/// The walk honors ignore files the way source tooling usually does, so
/// build output listed in a `.gitignore` stays out of the analysis set.
pub struct FileScanner {
    root: PathBuf,
    patterns: Vec<Regex>,
}

impl FileScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileScanner {
            root: root.into(),
            patterns: Vec::new(),
        }
    }

    pub fn add_pattern(&mut self, glob: &str) -> Result<(), PatternError> {
        let regex = glob_to_regex(glob).map_err(|source| PatternError {
            pattern: glob.to_string(),
            source,
        })?;
        self.patterns.push(regex);
        Ok(())
    }

    fn accepts(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Walk the root and collect matching files. Unreadable directory
    /// entries are skipped, not fatal.
    pub fn scan(&self) -> FileStore {
        let mut store = FileStore::new();
        for entry in WalkBuilder::new(&self.root).build().flatten() {
            if !entry.file_type().map_or(false, |t| t.is_file()) {
                continue;
            }
            let matched = entry
                .file_name()
                .to_str()
                .map_or(false, |name| self.accepts(name));
            if matched {
                store.save(entry.into_path());
            }
        }
        store.sort();
        store
    }
}
