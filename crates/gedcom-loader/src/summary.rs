//! Display rows for the individual and family tables.
//!
//! Every field is filled in: absent values become [`NOT_AVAILABLE`], link
//! sets are written as `{F1, F2}`.

use std::fmt::Display;

use chrono::NaiveDate;
use gedcom_types::{Family, GedcomDate, Individual, IndividualId};
use serde::Serialize;

use crate::store::Genealogy;

/// Placeholder for a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the individuals table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualRow {
    /// Identifier.
    pub id: String,
    /// Name as written.
    pub name: String,
    /// Sex code.
    pub gender: String,
    /// Birth date as written.
    pub birthday: String,
    /// Age in completed years.
    pub age: String,
    /// No death recorded.
    pub alive: bool,
    /// Death date as written.
    pub death: String,
    /// Families this individual is a child in.
    pub child: String,
    /// Families this individual is a spouse in.
    pub spouse: String,
}

impl IndividualRow {
    /// Column headers, in field order.
    pub const HEADERS: [&'static str; 9] = [
        "ID", "Name", "Gender", "Birthday", "Age", "Alive", "Death", "Child", "Spouse",
    ];

    /// Builds the row for one individual; ages are taken on `today`.
    pub fn new(individual: &Individual, today: NaiveDate) -> Self {
        Self {
            id: individual.id.to_string(),
            name: or_na(individual.name.as_deref()),
            gender: or_na(individual.sex.as_ref()),
            birthday: or_na(individual.birth.as_ref().map(GedcomDate::as_str)),
            age: or_na(individual.age_on(today)),
            alive: individual.is_alive(),
            death: or_na(individual.death.as_ref().map(GedcomDate::as_str)),
            child: id_set(&individual.child_of),
            spouse: id_set(&individual.spouse_of),
        }
    }

    /// Returns the row as display cells, in header order.
    pub fn cells(&self) -> [String; 9] {
        [
            self.id.clone(),
            self.name.clone(),
            self.gender.clone(),
            self.birthday.clone(),
            self.age.clone(),
            if self.alive { "True" } else { "False" }.to_string(),
            self.death.clone(),
            self.child.clone(),
            self.spouse.clone(),
        ]
    }
}

/// One row of the families table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyRow {
    /// Identifier.
    pub id: String,
    /// Marriage date as written.
    pub married: String,
    /// Divorce date as written.
    pub divorced: String,
    /// Husband identifier.
    pub husband_id: String,
    /// Husband name.
    pub husband_name: String,
    /// Wife identifier.
    pub wife_id: String,
    /// Wife name.
    pub wife_name: String,
    /// Children, in file order.
    pub child: String,
}

impl FamilyRow {
    /// Column headers, in field order.
    pub const HEADERS: [&'static str; 8] = [
        "ID",
        "Married",
        "Divorced",
        "Husband ID",
        "Husband Name",
        "Wife ID",
        "Wife Name",
        "Child",
    ];

    /// Builds the row for one family, looking spouse names up in `genealogy`.
    pub fn new(family: &Family, genealogy: &Genealogy) -> Self {
        let name = |id: Option<&IndividualId>| family_member_name(genealogy, id);
        Self {
            id: family.id.to_string(),
            married: or_na(family.marriage.as_ref().map(GedcomDate::as_str)),
            divorced: or_na(family.divorce.as_ref().map(GedcomDate::as_str)),
            husband_id: or_na(family.husband.as_ref()),
            husband_name: name(family.husband.as_ref()),
            wife_id: or_na(family.wife.as_ref()),
            wife_name: name(family.wife.as_ref()),
            child: id_set(&family.children),
        }
    }

    /// Returns the row as display cells, in header order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.married.clone(),
            self.divorced.clone(),
            self.husband_id.clone(),
            self.husband_name.clone(),
            self.wife_id.clone(),
            self.wife_name.clone(),
            self.child.clone(),
        ]
    }
}

impl Genealogy {
    /// Returns one row per individual, sorted by identifier.
    pub fn individual_rows(&self, today: NaiveDate) -> Vec<IndividualRow> {
        self.individuals_sorted()
            .into_iter()
            .map(|individual| IndividualRow::new(individual, today))
            .collect()
    }

    /// Returns one row per family, sorted by identifier.
    pub fn family_rows(&self) -> Vec<FamilyRow> {
        self.families_sorted()
            .into_iter()
            .map(|family| FamilyRow::new(family, self))
            .collect()
    }
}

fn family_member_name(genealogy: &Genealogy, id: Option<&IndividualId>) -> String {
    or_na(id.and_then(|id| genealogy.name_of(id)))
}

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn id_set<T: Display>(ids: &[T]) -> String {
    if ids.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
    format!("{{{}}}", joined.join(", "))
}
