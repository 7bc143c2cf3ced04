//! GEDCOM file reading and the load pipeline.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::assembler::assemble;
use crate::classifier::classify_all;
use crate::diagnostic::Diagnostic;
use crate::resolver::Resolver;
use crate::store::Genealogy;
use crate::types::{GedcomError, GedcomResult, LoaderConfig, ParseStats};

/// Everything produced by loading one file.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Resolved records.
    pub genealogy: Genealogy,
    /// Every problem found, assembly problems first, in file order.
    pub diagnostics: Vec<Diagnostic>,
    /// Load statistics.
    pub stats: ParseStats,
}

/// Reads a GEDCOM file into memory.
///
/// # Errors
/// Returns [`GedcomError::FileNotFound`] if the path does not exist, and
/// [`GedcomError::Io`] if it cannot be read as UTF-8 text.
pub fn read_source<P: AsRef<Path>>(path: P) -> GedcomResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GedcomError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path)?;
    tracing::debug!(
        path = %path.display(),
        size = %format_bytes(text.len()),
        "read GEDCOM source"
    );
    Ok(text)
}

/// Loads a GEDCOM file.
///
/// # Example
///
/// ```ignore
/// use gedcom_loader::{load_path, LoaderConfig};
///
/// let outcome = load_path("family.ged", &LoaderConfig::default())?;
/// for problem in &outcome.diagnostics {
///     eprintln!("{problem}");
/// }
/// ```
pub fn load_path<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> GedcomResult<LoadOutcome> {
    let text = read_source(path)?;
    load_str(&text, config)
}

/// Loads GEDCOM text: classify, assemble, resolve.
///
/// # Errors
/// In strict mode, returns [`GedcomError::Rejected`] if any problem was
/// found.
pub fn load_str(text: &str, config: &LoaderConfig) -> GedcomResult<LoadOutcome> {
    let started = Instant::now();

    let lines = classify_all(text);
    let total_lines = lines.len();
    let unrecognized_lines = lines.iter().filter(|l| l.line.is_unrecognized()).count();
    tracing::debug!(total_lines, unrecognized_lines, "classified lines");

    let assembly = assemble(lines);
    tracing::debug!(
        individuals = assembly.individuals.len(),
        families = assembly.families.len(),
        problems = assembly.diagnostics.len(),
        "assembled records"
    );

    let mut resolution = Resolver::new(config).resolve(assembly.individuals, assembly.families);
    let mut diagnostics = assembly.diagnostics;
    diagnostics.append(&mut resolution.diagnostics);

    if config.strict && !diagnostics.is_empty() {
        return Err(GedcomError::Rejected { diagnostics });
    }

    let genealogy = Genealogy::from_resolution(resolution);
    let stats = ParseStats {
        total_lines,
        unrecognized_lines,
        individuals: genealogy.individual_count(),
        families: genealogy.family_count(),
        diagnostic_count: diagnostics.len(),
        parse_time_ms: started.elapsed().as_millis() as u64,
    };

    Ok(LoadOutcome {
        genealogy,
        diagnostics,
        stats,
    })
}

/// Formats a byte count as a human-readable string.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
