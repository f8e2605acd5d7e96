//! Runs the analyzer over a file set and collects per-file outcomes.

use std::path::{Path, PathBuf};

use serde::Serialize;

use cmetrics_parser::{AnalyzerBuilder, FileAnalysis};

use crate::store::FileStore;

/// What happened to one file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileResult {
    Analyzed(FileAnalysis),
    /// The file could not be opened for reading.
    OpenFailed,
    /// Analysis started but the stream contained unclassifiable input.
    Failed(String),
}

#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: FileResult,
}

impl FileOutcome {
    pub fn analysis(&self) -> Option<&FileAnalysis> {
        match &self.result {
            FileResult::Analyzed(analysis) => Some(analysis),
            _ => None,
        }
    }
}

/// Batch driver: one analyzer run per file, outcomes in store order. A file
/// that fails to open or lex never aborts the batch.
#[derive(Debug, Clone, Default)]
pub struct MetricsExecutive {
    return_comments: bool,
    quiet: bool,
}

impl MetricsExecutive {
    pub fn new() -> Self {
        MetricsExecutive::default()
    }

    pub fn return_comments(mut self, yes: bool) -> Self {
        self.return_comments = yes;
        self
    }

    pub fn quiet(mut self, yes: bool) -> Self {
        self.quiet = yes;
        self
    }

    pub fn analyze_file(&self, path: &Path) -> FileOutcome {
        let mut analyzer = AnalyzerBuilder::new()
            .return_comments(self.return_comments)
            .quiet(self.quiet)
            .build();
        if !analyzer.attach_file(path) {
            return FileOutcome {
                path: path.to_path_buf(),
                result: FileResult::OpenFailed,
            };
        }
        let result = match analyzer.run() {
            Ok(()) => FileResult::Analyzed(analyzer.finish()),
            Err(err) => FileResult::Failed(err.to_string()),
        };
        FileOutcome {
            path: path.to_path_buf(),
            result,
        }
    }

    pub fn analyze_store(&self, store: &FileStore) -> Vec<FileOutcome> {
        store.iter().map(|path| self.analyze_file(path)).collect()
    }
}
