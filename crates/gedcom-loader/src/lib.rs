//! # gedcom-loader
//!
//! Parser and reference resolver for GEDCOM genealogy files.
//!
//! Loading runs in three passes over a file held in memory:
//!
//! 1. [`classify`] each line against the four structural line patterns,
//! 2. [`assemble`] the classified lines into individual and family records,
//! 3. [`resolve`] the links between them into a read-only [`Genealogy`].
//!
//! Malformed input never aborts a load. Each problem becomes a
//! [`Diagnostic`] and all of them are returned together with the records.
//!
//! ## Usage
//!
//! ```rust
//! use gedcom_loader::{load_str, LoaderConfig};
//! use gedcom_types::FamilyId;
//!
//! let text = "\
//! 0 I1 INDI
//! 1 NAME Jane /Doe/
//! 1 FAMS F1
//! 0 F1 FAM
//! 1 WIFE I1
//! 1 CHIL I2
//! ";
//!
//! let outcome = load_str(text, &LoaderConfig::default())?;
//! assert_eq!(outcome.genealogy.individual_count(), 1);
//! // I2 does not exist, so the CHIL link was dropped and reported.
//! assert!(outcome.genealogy.children_of(&FamilyId::new("F1")).is_empty());
//! assert_eq!(outcome.diagnostics.len(), 1);
//! # Ok::<(), gedcom_loader::GedcomError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: classifies lines on the rayon thread pool. Assembly and
//!   resolution stay sequential.

#![warn(missing_docs)]

mod assembler;
mod classifier;
mod diagnostic;
mod loader;
mod resolver;
mod store;
mod summary;
mod types;

pub use assembler::{assemble, Assembly};
pub use classifier::{classify, classify_all, NumberedLine};
pub use diagnostic::{Diagnostic, LinkRole, RecordKind};
pub use loader::{format_bytes, load_path, load_str, read_source, LoadOutcome};
pub use resolver::{resolve, Resolution, Resolver};
pub use store::Genealogy;
pub use summary::{FamilyRow, IndividualRow, NOT_AVAILABLE};
pub use types::{GedcomError, GedcomResult, LoaderConfig, ParseStats};

// Re-export gedcom-types for convenience
pub use gedcom_types;
