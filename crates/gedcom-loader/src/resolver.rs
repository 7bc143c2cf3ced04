//! Reference resolution.
//!
//! Runs once assembly is complete. Every `FAMC`/`FAMS` link must name an
//! existing family and every `HUSB`/`WIFE`/`CHIL` link an existing
//! individual; links that don't are reported and dropped. Optionally, links
//! that the target record does not mirror are reported as well.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use gedcom_types::{Family, FamilyId, Individual, IndividualId};

use crate::diagnostic::{Diagnostic, LinkRole};
use crate::types::LoaderConfig;

/// Records whose links all point at existing records.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Individuals, in input order.
    pub individuals: Vec<Individual>,
    /// Families, in input order.
    pub families: Vec<Family>,
    /// Problems found while resolving.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves links between individuals and families.
#[derive(Debug, Clone)]
pub struct Resolver {
    check_back_links: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            check_back_links: true,
        }
    }
}

impl Resolver {
    /// Creates a resolver from loader configuration.
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            check_back_links: config.check_back_links,
        }
    }

    /// Drops dangling links and reports them.
    ///
    /// Resolving records that were already resolved changes nothing.
    pub fn resolve(
        &self,
        mut individuals: Vec<Individual>,
        mut families: Vec<Family>,
    ) -> Resolution {
        let mut diagnostics = Vec::new();

        let family_ids: HashSet<FamilyId> = families.iter().map(|f| f.id.clone()).collect();
        let individual_ids: HashSet<IndividualId> =
            individuals.iter().map(|i| i.id.clone()).collect();

        for individual in &mut individuals {
            let owner = individual.id.as_str();
            let mut check = |links: &mut Vec<FamilyId>, role| {
                drop_dangling(links, &family_ids, owner, role, &mut diagnostics)
            };
            check(&mut individual.child_of, LinkRole::Famc);
            check(&mut individual.spouse_of, LinkRole::Fams);
        }

        for family in &mut families {
            let owner = family.id.as_str();
            for (role, spouse) in [
                (LinkRole::Husb, &mut family.husband),
                (LinkRole::Wife, &mut family.wife),
            ] {
                drop_dangling_spouse(spouse, &individual_ids, owner, role, &mut diagnostics);
            }
            drop_dangling(
                &mut family.children,
                &individual_ids,
                owner,
                LinkRole::Chil,
                &mut diagnostics,
            );
        }

        if self.check_back_links {
            diagnostics.extend(missing_back_links(&individuals, &families));
        }

        tracing::debug!(
            individuals = individuals.len(),
            families = families.len(),
            problems = diagnostics.len(),
            "resolved references"
        );

        Resolution {
            individuals,
            families,
            diagnostics,
        }
    }
}

/// Resolves links with the default settings.
///
/// # Examples
///
/// ```
/// use gedcom_loader::{resolve, Diagnostic};
/// use gedcom_types::{FamilyId, Individual, IndividualId};
///
/// let mut child = Individual::new(IndividualId::new("I3"));
/// child.child_of.push(FamilyId::new("F404"));
///
/// let resolution = resolve(vec![child], vec![]);
/// assert!(resolution.individuals[0].child_of.is_empty());
/// assert!(matches!(resolution.diagnostics[..], [Diagnostic::DanglingReference { .. }]));
/// ```
pub fn resolve(individuals: Vec<Individual>, families: Vec<Family>) -> Resolution {
    Resolver::default().resolve(individuals, families)
}

fn drop_dangling<T>(
    links: &mut Vec<T>,
    known: &HashSet<T>,
    owner: &str,
    role: LinkRole,
    diagnostics: &mut Vec<Diagnostic>,
) where
    T: Eq + Hash + Display,
{
    links.retain(|target| {
        let found = known.contains(target);
        if !found {
            diagnostics.push(Diagnostic::DanglingReference {
                owner: owner.to_string(),
                role,
                target: target.to_string(),
            });
        }
        found
    });
}

fn drop_dangling_spouse(
    link: &mut Option<IndividualId>,
    known: &HashSet<IndividualId>,
    owner: &str,
    role: LinkRole,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if link.as_ref().is_some_and(|target| !known.contains(target)) {
        if let Some(target) = link.take() {
            diagnostics.push(Diagnostic::DanglingReference {
                owner: owner.to_string(),
                role,
                target: target.to_string(),
            });
        }
    }
}

/// Finds links that the linked record does not declare in reverse.
fn missing_back_links(individuals: &[Individual], families: &[Family]) -> Vec<Diagnostic> {
    let individual_index: HashMap<&IndividualId, &Individual> =
        individuals.iter().map(|i| (&i.id, i)).collect();
    let family_index: HashMap<&FamilyId, &Family> = families.iter().map(|f| (&f.id, f)).collect();

    let mut diagnostics = Vec::new();
    let mut report = |owner: &dyn Display, role: LinkRole, target: &dyn Display| {
        diagnostics.push(Diagnostic::MissingBackLink {
            owner: owner.to_string(),
            role,
            target: target.to_string(),
        });
    };

    for family in families {
        let spouses = [
            (LinkRole::Husb, &family.husband),
            (LinkRole::Wife, &family.wife),
        ];
        for (role, spouse) in spouses {
            if let Some(id) = spouse {
                if individual_index
                    .get(id)
                    .is_some_and(|i| !i.is_spouse_in(&family.id))
                {
                    report(&family.id, role, id);
                }
            }
        }
        for id in &family.children {
            if individual_index
                .get(id)
                .is_some_and(|i| !i.is_child_in(&family.id))
            {
                report(&family.id, LinkRole::Chil, id);
            }
        }
    }

    for individual in individuals {
        for id in &individual.spouse_of {
            let listed = |f: &&Family| f.spouses().any(|spouse| *spouse == individual.id);
            if family_index.get(id).is_some_and(|f| !listed(f)) {
                report(&individual.id, LinkRole::Fams, id);
            }
        }
        for id in &individual.child_of {
            if family_index
                .get(id)
                .is_some_and(|f| !f.children.contains(&individual.id))
            {
                report(&individual.id, LinkRole::Famc, id);
            }
        }
    }

    diagnostics
}
