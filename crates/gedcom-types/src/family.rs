//! GEDCOM Family type.

use crate::{FamilyId, GedcomDate, IndividualId, MaritalStatus};

/// A family from a `0 <id> FAM` record.
///
/// Children keep file order, which is usually birth order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Family {
    /// Record identifier.
    pub id: FamilyId,
    /// Marriage date.
    pub marriage: Option<GedcomDate>,
    /// Divorce date.
    pub divorce: Option<GedcomDate>,
    /// A `MARR` event is recorded, with or without a date.
    #[cfg_attr(feature = "serde", serde(default))]
    pub married: bool,
    /// A `DIV` event is recorded, with or without a date.
    #[cfg_attr(feature = "serde", serde(default))]
    pub divorced: bool,
    /// Husband (`HUSB`).
    pub husband: Option<IndividualId>,
    /// Wife (`WIFE`).
    pub wife: Option<IndividualId>,
    /// Children (`CHIL`) in file order.
    pub children: Vec<IndividualId>,
}

impl Family {
    /// Creates an empty record.
    pub fn new(id: FamilyId) -> Self {
        Self {
            id,
            marriage: None,
            divorce: None,
            married: false,
            divorced: false,
            husband: None,
            wife: None,
            children: Vec::new(),
        }
    }

    /// Returns the marital status implied by the recorded events.
    pub fn status(&self) -> MaritalStatus {
        if self.divorced || self.divorce.is_some() {
            MaritalStatus::Divorced
        } else if self.married || self.marriage.is_some() {
            MaritalStatus::Married
        } else {
            MaritalStatus::Unknown
        }
    }

    /// Returns the husband and wife, whichever are present.
    pub fn spouses(&self) -> impl Iterator<Item = &IndividualId> {
        self.husband.iter().chain(self.wife.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let mut family = Family::new(FamilyId::new("F1"));
        assert_eq!(family.status(), MaritalStatus::Unknown);

        family.marriage = Some(GedcomDate::parse("1 JUN 1970"));
        assert_eq!(family.status(), MaritalStatus::Married);

        family.divorce = Some(GedcomDate::parse("1 JUN 1980"));
        assert_eq!(family.status(), MaritalStatus::Divorced);
    }

    #[test]
    fn test_status_from_undated_events() {
        let mut family = Family {
            married: true,
            ..Family::new(FamilyId::new("F1"))
        };
        assert_eq!(family.status(), MaritalStatus::Married);

        family.marriage = Some(GedcomDate::parse("1 JAN 1990"));
        family.divorced = true;
        assert_eq!(family.status(), MaritalStatus::Divorced);
    }

    #[test]
    fn test_spouses() {
        let family = Family {
            wife: Some(IndividualId::new("I2")),
            ..Family::new(FamilyId::new("F1"))
        };
        let spouses: Vec<&IndividualId> = family.spouses().collect();
        assert_eq!(spouses, vec![&IndividualId::new("I2")]);
    }
}
