//! Non-fatal problems found while loading.
//!
//! Every diagnostic is recovered from locally: the offending line is
//! skipped or the offending link dropped, and loading carries on. They are
//! collected and handed back together once the whole file is processed.

use std::fmt;

use gedcom_types::Tag;
use thiserror::Error;

/// The two kinds of top-level record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `INDI`
    Individual,
    /// `FAM`
    Family,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Individual => "individual",
            Self::Family => "family",
        })
    }
}

/// A cross-reference between records, named after the tag that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRole {
    /// Individual to the family it is a child in.
    Famc,
    /// Individual to a family it is a spouse in.
    Fams,
    /// Family to its husband.
    Husb,
    /// Family to its wife.
    Wife,
    /// Family to one of its children.
    Chil,
}

impl LinkRole {
    /// Returns the kind of record the link must point at.
    pub fn target_kind(self) -> RecordKind {
        match self {
            Self::Famc | Self::Fams => RecordKind::Family,
            Self::Husb | Self::Wife | Self::Chil => RecordKind::Individual,
        }
    }

    /// Returns the declaring tag.
    pub fn tag(self) -> Tag {
        match self {
            Self::Famc => Tag::Famc,
            Self::Fams => Tag::Fams,
            Self::Husb => Tag::Husb,
            Self::Wife => Tag::Wife,
            Self::Chil => Tag::Chil,
        }
    }
}

impl fmt::Display for LinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().as_str())
    }
}

/// A recoverable problem in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line matched none of the structural patterns.
    #[error("line {line}: unrecognized line '{raw}'")]
    UnrecognizedLine {
        /// 1-based line number.
        line: usize,
        /// The line text.
        raw: String,
    },

    /// An attribute line with no enclosing record.
    #[error("line {line}: {tag} line has no enclosing record")]
    OrphanedAttribute {
        /// 1-based line number.
        line: usize,
        /// The attribute tag.
        tag: Tag,
    },

    /// A `DATE` line with no open BIRT/DEAT/MARR/DIV event to attach to.
    #[error("line {line}: DATE '{date}' has no preceding BIRT, DEAT, MARR or DIV")]
    MissingAttributeContext {
        /// 1-based line number.
        line: usize,
        /// The date text that was discarded.
        date: String,
    },

    /// A tag that does not apply to the kind of record it appears in.
    #[error("line {line}: {tag} does not belong in {kind} {id}")]
    MisplacedTag {
        /// 1-based line number.
        line: usize,
        /// The offending tag.
        tag: Tag,
        /// Kind of the enclosing record.
        kind: RecordKind,
        /// Identifier of the enclosing record.
        id: String,
    },

    /// A second record of the same kind reuses an identifier. The first
    /// record is kept and the later one discarded.
    #[error("line {line}: duplicate {kind} {id}, keeping the first")]
    DuplicateIdentifier {
        /// 1-based line number of the discarded record.
        line: usize,
        /// Kind of both records.
        kind: RecordKind,
        /// The shared identifier.
        id: String,
    },

    /// A link whose target does not exist. The link is dropped.
    #[error("{owner} {role} {target}: no such {}", .role.target_kind())]
    DanglingReference {
        /// Identifier of the record declaring the link.
        owner: String,
        /// The declaring tag.
        role: LinkRole,
        /// The missing identifier.
        target: String,
    },

    /// A link the target record does not mirror. The link is kept.
    #[error("{owner} {role} {target}: {target} does not link back to {owner}")]
    MissingBackLink {
        /// Identifier of the record declaring the link.
        owner: String,
        /// The declaring tag.
        role: LinkRole,
        /// Identifier of the record that lacks the reverse link.
        target: String,
    },
}

impl Diagnostic {
    /// Returns the 1-based source line, for problems tied to a single line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedLine { line, .. }
            | Self::OrphanedAttribute { line, .. }
            | Self::MissingAttributeContext { line, .. }
            | Self::MisplacedTag { line, .. }
            | Self::DuplicateIdentifier { line, .. } => Some(*line),
            Self::DanglingReference { .. } | Self::MissingBackLink { .. } => None,
        }
    }

    /// Returns true for problems found while resolving links.
    pub fn is_reference_problem(&self) -> bool {
        matches!(
            self,
            Self::DanglingReference { .. } | Self::MissingBackLink { .. }
        )
    }
}
