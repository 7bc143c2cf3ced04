//! GEDCOM Individual type.
//!
//! This module provides the `Individual` struct representing an `INDI`
//! record and the fields derived from it for presentation.

use chrono::NaiveDate;

use crate::{FamilyId, GedcomDate, IndividualId, Sex};

/// An individual from a `0 <id> INDI` record.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gedcom_types::{GedcomDate, Individual, IndividualId};
///
/// let mut jane = Individual::new(IndividualId::new("I1"));
/// jane.name = Some("Jane /Doe/".to_string());
/// jane.birth = Some(GedcomDate::parse("1 JAN 1990"));
///
/// let today = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
/// assert_eq!(jane.age_on(today), Some(30));
/// assert!(jane.is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Record identifier.
    pub id: IndividualId,
    /// Name as written, surname between slashes.
    pub name: Option<String>,
    /// Recorded sex.
    pub sex: Option<Sex>,
    /// Birth date.
    pub birth: Option<GedcomDate>,
    /// Death date.
    pub death: Option<GedcomDate>,
    /// A `DEAT` event is recorded, with or without a date.
    #[cfg_attr(feature = "serde", serde(default))]
    pub died: bool,
    /// Families in which this individual is a child (`FAMC`).
    pub child_of: Vec<FamilyId>,
    /// Families in which this individual is a spouse (`FAMS`).
    pub spouse_of: Vec<FamilyId>,
}

impl Individual {
    /// Creates an empty record.
    pub fn new(id: IndividualId) -> Self {
        Self {
            id,
            name: None,
            sex: None,
            birth: None,
            death: None,
            died: false,
            child_of: Vec::new(),
            spouse_of: Vec::new(),
        }
    }

    /// Returns the age in completed years on `date`, or at death if that
    /// came first.
    ///
    /// Returns `None` when the birth date is missing or unreadable, or lies
    /// after the end date.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let born = self.birth.as_ref()?.value()?;
        let end = match self.death.as_ref().and_then(GedcomDate::value) {
            Some(died) if died < date => died,
            _ => date,
        };
        end.years_since(born)
    }

    /// Returns true if no death is recorded.
    pub fn is_alive(&self) -> bool {
        !self.died && self.death.is_none()
    }

    /// Returns true if this individual lists `family` in its `FAMC` links.
    pub fn is_child_in(&self, family: &FamilyId) -> bool {
        self.child_of.contains(family)
    }

    /// Returns true if this individual lists `family` in its `FAMS` links.
    pub fn is_spouse_in(&self, family: &FamilyId) -> bool {
        self.spouse_of.contains(family)
    }
}
