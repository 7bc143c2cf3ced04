//! In-memory genealogy store.
//!
//! Holds resolved individuals and families indexed by identifier. The store
//! is built once from a [`Resolution`] and is read-only afterwards.

use std::collections::HashMap;

use gedcom_types::{Family, FamilyId, Individual, IndividualId};

use crate::resolver::Resolution;

/// Resolved records indexed by identifier.
///
/// # Example
///
/// ```
/// use gedcom_loader::{load_str, LoaderConfig};
/// use gedcom_types::IndividualId;
///
/// let outcome = load_str("0 I1 INDI\n1 NAME Jane /Doe/\n", &LoaderConfig::default())?;
/// let jane = outcome.genealogy.get_individual(&IndividualId::new("I1")).unwrap();
/// assert_eq!(jane.name.as_deref(), Some("Jane /Doe/"));
/// # Ok::<(), gedcom_loader::GedcomError>(())
/// ```
#[derive(Default)]
pub struct Genealogy {
    /// Individuals indexed by identifier.
    individuals: HashMap<IndividualId, Individual>,
    /// Families indexed by identifier.
    families: HashMap<FamilyId, Family>,
}

impl std::fmt::Debug for Genealogy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Genealogy")
            .field("individuals", &self.individuals.len())
            .field("families", &self.families.len())
            .finish()
    }
}

impl Genealogy {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from resolved records.
    ///
    /// Identifiers are unique after assembly, so no record is replaced.
    pub fn from_resolution(resolution: Resolution) -> Self {
        Self {
            individuals: resolution
                .individuals
                .into_iter()
                .map(|i| (i.id.clone(), i))
                .collect(),
            families: resolution
                .families
                .into_iter()
                .map(|f| (f.id.clone(), f))
                .collect(),
        }
    }

    /// Gets an individual by identifier.
    pub fn get_individual(&self, id: &IndividualId) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Gets a family by identifier.
    pub fn get_family(&self, id: &FamilyId) -> Option<&Family> {
        self.families.get(id)
    }

    /// Checks if an individual exists.
    pub fn has_individual(&self, id: &IndividualId) -> bool {
        self.individuals.contains_key(id)
    }

    /// Checks if a family exists.
    pub fn has_family(&self, id: &FamilyId) -> bool {
        self.families.contains_key(id)
    }

    /// Returns the name of an individual, if known.
    pub fn name_of(&self, id: &IndividualId) -> Option<&str> {
        self.individuals.get(id)?.name.as_deref()
    }

    /// Returns the children of a family in file order.
    pub fn children_of(&self, id: &FamilyId) -> Vec<&Individual> {
        self.families
            .get(id)
            .map(|family| {
                family
                    .children
                    .iter()
                    .filter_map(|child| self.individuals.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns all individuals sorted by identifier.
    pub fn individuals_sorted(&self) -> Vec<&Individual> {
        let mut individuals: Vec<&Individual> = self.individuals.values().collect();
        individuals.sort_by(|a, b| a.id.cmp(&b.id));
        individuals
    }

    /// Returns all families sorted by identifier.
    pub fn families_sorted(&self) -> Vec<&Family> {
        let mut families: Vec<&Family> = self.families.values().collect();
        families.sort_by(|a, b| a.id.cmp(&b.id));
        families
    }

    /// Returns the number of individuals.
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the number of families.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty()
    }

    /// Consumes the store, returning its records sorted by identifier.
    pub fn into_records(self) -> (Vec<Individual>, Vec<Family>) {
        let mut individuals: Vec<Individual> = self.individuals.into_values().collect();
        individuals.sort_by(|a, b| a.id.cmp(&b.id));
        let mut families: Vec<Family> = self.families.into_values().collect();
        families.sort_by(|a, b| a.id.cmp(&b.id));
        (individuals, families)
    }
}
