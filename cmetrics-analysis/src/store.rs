//! The collected set of files selected for analysis.

use std::path::{Path, PathBuf};

/// Paths accepted by a scan, in sorted order.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    files: Vec<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        FileStore::default()
    }

    pub fn save(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    pub(crate) fn sort(&mut self) {
        self.files.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_paths_come_back_in_order() {
        let mut store = FileStore::new();
        store.save("b.cpp");
        store.save("a.cpp");
        store.sort();
        let names: Vec<&Path> = store.iter().collect();
        assert_eq!(names, vec![Path::new("a.cpp"), Path::new("b.cpp")]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
