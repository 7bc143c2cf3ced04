use std::path::PathBuf;

use chrono::NaiveDate;
use gedcom_loader::gedcom_types::{FamilyId, IndividualId, MaritalStatus, Sex};
use gedcom_loader::{load_path, load_str, resolve, Diagnostic, GedcomError, LinkRole, LoaderConfig};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(text: &str) -> gedcom_loader::LoadOutcome {
    load_str(text, &LoaderConfig::default()).unwrap()
}

#[test]
fn fixture_loads_without_problems() {
    let outcome = load_path(fixture_path("family.ged"), &LoaderConfig::strict()).unwrap();

    assert_eq!(outcome.genealogy.individual_count(), 5);
    assert_eq!(outcome.genealogy.family_count(), 2);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.stats.unrecognized_lines, 0);
}

#[test]
fn fixture_records_are_linked_both_ways() {
    let outcome = load_path(fixture_path("family.ged"), &LoaderConfig::default()).unwrap();
    let genealogy = &outcome.genealogy;

    for family in genealogy.families_sorted() {
        for spouse in family.spouses() {
            let individual = genealogy.get_individual(spouse).unwrap();
            assert!(individual.is_spouse_in(&family.id));
        }
        for child in &family.children {
            let individual = genealogy.get_individual(child).unwrap();
            assert!(individual.is_child_in(&family.id));
        }
    }

    let f2 = genealogy.get_family(&FamilyId::new("F2")).unwrap();
    assert_eq!(f2.status(), MaritalStatus::Divorced);
    assert_eq!(f2.wife, Some(IndividualId::new("I3")));
}

#[test]
fn fixture_rows() {
    let outcome = load_path(fixture_path("family.ged"), &LoaderConfig::default()).unwrap();
    let today = NaiveDate::from_ymd_opt(2020, 9, 20).unwrap();

    let individuals = outcome.genealogy.individual_rows(today);
    let ids: Vec<&str> = individuals.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["I1", "I2", "I3", "I4", "I5"]);

    let john = &individuals[0];
    assert_eq!(john.age, "61");
    assert!(!john.alive);
    assert_eq!(john.spouse, "{F1}");

    let families = outcome.genealogy.family_rows();
    assert_eq!(families[0].husband_name, "John /Doe/");
    assert_eq!(families[0].wife_name, "Mary /Roe/");
    assert_eq!(families[1].divorced, "9 SEP 2005");
    assert_eq!(families[1].child, "{I5}");
}

#[test]
fn single_individual_scenario() {
    let outcome = load("0 I1 INDI\n1 NAME Jane /Doe/\n1 SEX F\n");

    assert!(outcome.diagnostics.is_empty());
    let jane = outcome
        .genealogy
        .get_individual(&IndividualId::new("I1"))
        .unwrap();
    assert_eq!(jane.name.as_deref(), Some("Jane /Doe/"));
    assert_eq!(jane.sex, Some(Sex::Female));
    assert!(jane.birth.is_none());
    assert!(jane.death.is_none());
    assert!(jane.child_of.is_empty());
    assert!(jane.spouse_of.is_empty());
}

#[test]
fn family_scenario_resolves_cleanly() {
    let outcome = load(
        "0 I1 INDI\n1 FAMS F1\n0 I2 INDI\n1 FAMS F1\n0 I3 INDI\n1 FAMC F1\n\
         0 F1 FAM\n1 HUSB I1\n1 WIFE I2\n1 CHIL I3\n",
    );

    assert!(outcome
        .diagnostics
        .iter()
        .all(|d| !matches!(d, Diagnostic::DanglingReference { .. })));
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn birth_date_follows_birt() {
    let outcome = load("0 I1 INDI\n1 BIRT\n2 DATE 1 JAN 1990\n");
    let person = outcome
        .genealogy
        .get_individual(&IndividualId::new("I1"))
        .unwrap();
    assert_eq!(
        person.birth.as_ref().map(|d| d.as_str()),
        Some("1 JAN 1990")
    );
}

#[test]
fn date_without_context_is_reported() {
    let outcome = load("0 I1 INDI\n2 DATE 1 JAN 1990\n");

    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::MissingAttributeContext {
            line: 2,
            date: "1 JAN 1990".to_string(),
        }]
    );
    let person = outcome
        .genealogy
        .get_individual(&IndividualId::new("I1"))
        .unwrap();
    assert!(person.birth.is_none());
    assert!(person.death.is_none());
}

#[test]
fn garbage_line_reported_once_and_skipped() {
    let outcome = load("0 I1 INDI\n7 GARBAGE here\n1 NAME Jane /Doe/\n0 I2 INDI\n");

    let unrecognized: Vec<&Diagnostic> = outcome
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnrecognizedLine { .. }))
        .collect();
    assert_eq!(unrecognized.len(), 1);
    assert_eq!(unrecognized[0].line(), Some(2));
    assert_eq!(outcome.genealogy.individual_count(), 2);
    assert_eq!(
        outcome.genealogy.name_of(&IndividualId::new("I1")),
        Some("Jane /Doe/")
    );
}

#[test]
fn undated_death_and_divorce_are_kept() {
    let outcome = load(
        "0 I1 INDI\n1 NAME A\n1 DEAT\n\
         0 F1 FAM\n1 MARR\n2 DATE 1 JAN 1990\n1 DIV\n",
    );
    let today = NaiveDate::from_ymd_opt(2020, 9, 20).unwrap();

    let rows = outcome.genealogy.individual_rows(today);
    assert!(!rows[0].alive);
    assert_eq!(rows[0].death, "N/A");

    let family = outcome.genealogy.get_family(&FamilyId::new("F1")).unwrap();
    assert_eq!(family.status(), MaritalStatus::Divorced);
}

#[test]
fn damaged_record_header_does_not_merge_into_previous_record() {
    let outcome = load("0 I1 INDI\n0 I2 PERSON\n1 NAME Bob\n");

    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.genealogy.individual_count(), 1);
    assert_eq!(outcome.genealogy.name_of(&IndividualId::new("I1")), None);
}

#[test]
fn dangling_references_are_dropped() {
    let outcome = load("0 I1 INDI\n1 FAMC F9\n0 F1 FAM\n1 WIFE I8\n");

    assert_eq!(
        outcome.diagnostics,
        vec![
            Diagnostic::DanglingReference {
                owner: "I1".to_string(),
                role: LinkRole::Famc,
                target: "F9".to_string(),
            },
            Diagnostic::DanglingReference {
                owner: "F1".to_string(),
                role: LinkRole::Wife,
                target: "I8".to_string(),
            },
        ]
    );
    let family = outcome.genealogy.get_family(&FamilyId::new("F1")).unwrap();
    assert_eq!(family.wife, None);
}

#[test]
fn resolving_a_loaded_genealogy_again_changes_nothing() {
    let outcome = load_path(fixture_path("family.ged"), &LoaderConfig::default()).unwrap();
    let (individuals, families) = outcome.genealogy.into_records();

    let again = resolve(individuals.clone(), families.clone());
    assert!(again.diagnostics.is_empty());
    assert_eq!(again.individuals, individuals);
    assert_eq!(again.families, families);
}

#[test]
fn missing_file_is_fatal() {
    let err = load_path(fixture_path("missing.ged"), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, GedcomError::FileNotFound { .. }));
}
