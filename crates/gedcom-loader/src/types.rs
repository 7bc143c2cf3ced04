//! Loader-specific types: errors, configuration and statistics.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Fatal errors. Nothing is loaded when one of these is returned.
#[derive(Error, Debug)]
pub enum GedcomError {
    /// I/O error reading the GEDCOM file.
    #[error("IO error reading GEDCOM file: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Problems were found and the loader runs in strict mode.
    #[error("Rejected in strict mode: {} problem(s) found", .diagnostics.len())]
    Rejected {
        /// Every problem found while loading.
        diagnostics: Vec<Diagnostic>,
    },
}

/// Result type for GEDCOM operations.
pub type GedcomResult<T> = Result<T, GedcomError>;

/// Configuration for loading a GEDCOM file.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Fail with [`GedcomError::Rejected`] if any problem is found.
    pub strict: bool,
    /// Report links that are not mirrored by the linked record.
    pub check_back_links: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            check_back_links: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a config that rejects any file with problems.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Statistics from loading a GEDCOM file.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Non-blank lines read.
    pub total_lines: usize,
    /// Lines that matched no pattern.
    pub unrecognized_lines: usize,
    /// Individual records kept.
    pub individuals: usize,
    /// Family records kept.
    pub families: usize,
    /// Problems reported (non-fatal).
    pub diagnostic_count: usize,
    /// Time taken to load in milliseconds.
    pub parse_time_ms: u64,
}

impl ParseStats {
    /// Returns the percentage of lines that matched a pattern.
    pub fn recognition_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            let recognized = self.total_lines - self.unrecognized_lines;
            (recognized as f64 / self.total_lines as f64) * 100.0
        }
    }
}
