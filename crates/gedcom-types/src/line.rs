//! Classified GEDCOM lines.
//!
//! This module provides the `ClassifiedLine` type produced by the line
//! classifier: one variant per structural pattern, so each variant carries
//! exactly the fields its pattern guarantees.

use crate::{FamilyId, IndividualId, LinePattern, Tag};

/// The start of a top-level record (`0 <id> INDI` or `0 <id> FAM`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordStart {
    /// `0 <id> INDI`
    Individual(IndividualId),
    /// `0 <id> FAM`
    Family(FamilyId),
}

impl RecordStart {
    /// Returns the record tag (`INDI` or `FAM`).
    pub fn tag(&self) -> Tag {
        match self {
            Self::Individual(_) => Tag::Indi,
            Self::Family(_) => Tag::Fam,
        }
    }

    /// Returns the identifier text.
    pub fn id(&self) -> &str {
        match self {
            Self::Individual(id) => id.as_str(),
            Self::Family(id) => id.as_str(),
        }
    }
}

/// A single input line after classification.
///
/// # Examples
///
/// ```
/// use gedcom_types::{ClassifiedLine, LinePattern, Tag};
///
/// let line = ClassifiedLine::Argument {
///     level: 1,
///     tag: Tag::Name,
///     argument: "John /Smith/".to_string(),
/// };
///
/// assert_eq!(line.pattern(), LinePattern::Argument);
/// assert_eq!(line.level(), Some(1));
/// assert_eq!(line.argument(), Some("John /Smith/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassifiedLine {
    /// Attribute or reference line carrying a value.
    Argument {
        /// Nesting level (0..=2).
        level: u8,
        /// Line tag.
        tag: Tag,
        /// Everything after the tag.
        argument: String,
    },
    /// Structural marker whose value, if any, follows on a `DATE` line.
    NoArgument {
        /// Nesting level (0..=1).
        level: u8,
        /// Line tag.
        tag: Tag,
    },
    /// Start of an individual or family record.
    Record(RecordStart),
    /// File-level marker (`HEAD`, `TRLR`, `NOTE`) with optional ignored text.
    Marker {
        /// Line tag.
        tag: Tag,
        /// Trailing text, if any.
        text: Option<String>,
    },
    /// A line that matched no pattern.
    Unrecognized {
        /// The line as read, trailing whitespace removed.
        raw: String,
    },
}

impl ClassifiedLine {
    /// Returns the pattern this line matched.
    pub fn pattern(&self) -> LinePattern {
        match self {
            Self::Argument { .. } => LinePattern::Argument,
            Self::NoArgument { .. } => LinePattern::NoArgument,
            Self::Record(_) => LinePattern::Zero1,
            Self::Marker { .. } => LinePattern::Zero2,
            Self::Unrecognized { .. } => LinePattern::None,
        }
    }

    /// Returns the nesting level, or `None` for unrecognized lines.
    pub fn level(&self) -> Option<u8> {
        match self {
            Self::Argument { level, .. } | Self::NoArgument { level, .. } => Some(*level),
            Self::Record(_) | Self::Marker { .. } => Some(0),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Returns the tag, or `None` for unrecognized lines.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Self::Argument { tag, .. }
            | Self::NoArgument { tag, .. }
            | Self::Marker { tag, .. } => Some(*tag),
            Self::Record(start) => Some(start.tag()),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Returns the argument.
    ///
    /// For record starts this is the identifier; markers and structural
    /// lines have none.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::Argument { argument, .. } => Some(argument),
            Self::Record(start) => Some(start.id()),
            _ => None,
        }
    }

    /// Returns true if this line matched none of the patterns.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_start_accessors() {
        let line = ClassifiedLine::Record(RecordStart::Family(FamilyId::new("F1")));
        assert_eq!(line.pattern(), LinePattern::Zero1);
        assert_eq!(line.level(), Some(0));
        assert_eq!(line.tag(), Some(Tag::Fam));
        assert_eq!(line.argument(), Some("F1"));
    }

    #[test]
    fn test_marker_has_no_argument() {
        let line = ClassifiedLine::Marker {
            tag: Tag::Note,
            text: Some("ignored".to_string()),
        };
        assert_eq!(line.pattern(), LinePattern::Zero2);
        assert_eq!(line.argument(), None);
    }

    #[test]
    fn test_unrecognized() {
        let line = ClassifiedLine::Unrecognized {
            raw: "7 GARBAGE here".to_string(),
        };
        assert!(line.is_unrecognized());
        assert_eq!(line.pattern(), LinePattern::None);
        assert_eq!(line.level(), None);
        assert_eq!(line.tag(), None);
    }
}
