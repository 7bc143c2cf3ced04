//! # gedcom-types
//!
//! Type definitions for GEDCOM genealogy records.
//!
//! This crate provides Rust type definitions for the records a GEDCOM file
//! describes (individuals and families), the identifiers linking them, and
//! the classified form of a single input line.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!
//! ## Usage
//!
//! ```rust
//! use gedcom_types::{Family, FamilyId, Individual, IndividualId, MaritalStatus};
//!
//! let mut family = Family::new(FamilyId::new("F1"));
//! family.husband = Some(IndividualId::new("I1"));
//! family.children.push(IndividualId::new("I3"));
//!
//! let mut child = Individual::new(IndividualId::new("I3"));
//! child.child_of.push(family.id.clone());
//!
//! assert!(child.is_child_in(&family.id));
//! assert_eq!(family.status(), MaritalStatus::Unknown);
//! ```

#![warn(missing_docs)]

mod date;
mod enums;
mod family;
mod id;
mod individual;
mod line;

// Re-export all public types at crate root
pub use date::GedcomDate;
pub use enums::{LinePattern, MaritalStatus, Sex, Tag};
pub use family::Family;
pub use id::{FamilyId, IndividualId};
pub use individual::Individual;
pub use line::{ClassifiedLine, RecordStart};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _id = IndividualId::new("I1");
        let _fam = FamilyId::new("F1");
        let _tag = Tag::Indi;
        let _pattern = LinePattern::Zero1;
        let _status = MaritalStatus::Unknown;
        let _sex = Sex::Female;
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut individual = Individual::new(IndividualId::new("I1"));
        individual.name = Some("Jane /Doe/".to_string());
        individual.sex = Some(Sex::Female);
        individual.birth = Some(GedcomDate::parse("1 JAN 1990"));
        individual.spouse_of.push(FamilyId::new("F1"));

        let json = serde_json::to_string(&individual).unwrap();
        let parsed: Individual = serde_json::from_str(&json).unwrap();
        assert_eq!(individual, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&FamilyId::new("F7")).unwrap();
        assert_eq!(json, "\"F7\"");
    }
}
