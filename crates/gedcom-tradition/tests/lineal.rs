#![allow(missing_docs)]
//! Patrilineal, matrilineal and paternal name derivation.

use gedcom_model::{IndividualNames, Sex, TraditionKind};
use gedcom_tradition::SurnameTradition;
use insta::assert_snapshot;

const SEXES: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Unknown];

fn patrilineal() -> SurnameTradition {
    SurnameTradition::new(TraditionKind::Patrilineal)
}

fn matrilineal() -> SurnameTradition {
    SurnameTradition::new(TraditionKind::Matrilineal)
}

#[test]
fn test_patrilineal_child_takes_father_surname() {
    let father = "John /White/";
    let mother = "Mary /Black/";
    for sex in SEXES {
        assert_eq!(
            patrilineal().new_child_names(Some(father), Some(mother), sex),
            vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"],
            "{sex}"
        );
    }
}

#[test]
fn test_patrilineal_child_with_surname_prefix() {
    let names = patrilineal().new_child_names(Some("John /de White/"), Some("Mary /Black/"), Sex::Male);
    assert_eq!(names.len(), 1);
    assert_snapshot!(&names[0], @r"
    1 NAME /de White/
    2 TYPE BIRTH
    2 SPFX de
    2 SURN White
    ");
}

#[test]
fn test_patrilineal_child_without_parents() {
    assert_eq!(
        patrilineal().new_child_names::<str>(None, None, Sex::Unknown),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_patrilineal_child_with_mother_only() {
    assert_eq!(
        patrilineal().new_child_names(None, Some("Mary /Black/"), Sex::Female),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_patrilineal_child_of_father_without_surname_group() {
    assert_eq!(
        patrilineal().new_child_names(Some("John"), Some("Mary /Black/"), Sex::Male),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_patrilineal_parent() {
    let child = "Chris /White/";
    assert_eq!(
        patrilineal().new_parent_names(child, Sex::Male),
        vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]
    );
    for sex in [Sex::Female, Sex::Unknown] {
        assert_eq!(
            patrilineal().new_parent_names(child, sex),
            vec!["1 NAME //\n2 TYPE BIRTH"],
            "{sex}"
        );
    }
}

#[test]
fn test_patrilineal_spouse_is_always_default() {
    for sex in SEXES {
        assert_eq!(
            patrilineal().new_spouse_names("Chris /White/", sex),
            vec!["1 NAME //\n2 TYPE BIRTH"],
            "{sex}"
        );
    }
}

#[test]
fn test_matrilineal_child_takes_mother_surname() {
    let father = "John /White/";
    let mother = "Mary /Black/";
    for sex in SEXES {
        assert_eq!(
            matrilineal().new_child_names(Some(father), Some(mother), sex),
            vec!["1 NAME /Black/\n2 TYPE BIRTH\n2 SURN Black"],
            "{sex}"
        );
    }
}

#[test]
fn test_matrilineal_child_with_surname_prefix() {
    let names = matrilineal().new_child_names(Some("John /White/"), Some("Mary /van der Berg/"), Sex::Female);
    assert_snapshot!(&names[0], @r"
    1 NAME /van der Berg/
    2 TYPE BIRTH
    2 SPFX van der
    2 SURN Berg
    ");
}

#[test]
fn test_matrilineal_child_falls_back_to_father() {
    let father = "John /White/";
    for mother in [None, Some("Mary")] {
        for sex in SEXES {
            assert_eq!(
                matrilineal().new_child_names(Some(father), mother, sex),
                vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"],
                "{sex}"
            );
        }
    }
}

#[test]
fn test_matrilineal_child_without_parents() {
    assert_eq!(
        matrilineal().new_child_names(None, Some("Mary"), Sex::Female),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
    assert_eq!(
        matrilineal().new_child_names::<str>(None, None, Sex::Unknown),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_matrilineal_parent() {
    let child = "Chris /White/";
    assert_eq!(
        matrilineal().new_parent_names(child, Sex::Female),
        vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]
    );
    for sex in [Sex::Male, Sex::Unknown] {
        assert_eq!(
            matrilineal().new_parent_names(child, sex),
            vec!["1 NAME //\n2 TYPE BIRTH"],
            "{sex}"
        );
    }
}

#[test]
fn test_matrilineal_spouse_is_always_default() {
    for sex in SEXES {
        assert_eq!(
            matrilineal().new_spouse_names("Chris /White/", sex),
            vec!["1 NAME //\n2 TYPE BIRTH"]
        );
    }
}

#[test]
fn test_paternal_wife_takes_husband_surname() {
    let paternal = SurnameTradition::new(TraditionKind::Paternal);
    let names = paternal.new_spouse_names("John /de White/", Sex::Female);
    assert_eq!(names.len(), 2);
    assert_snapshot!(names.join("\n"), @r"
    1 NAME //
    2 TYPE BIRTH
    1 NAME /de White/
    2 TYPE MARRIED
    2 SPFX de
    2 SURN White
    ");
    assert_eq!(
        paternal.new_spouse_names("Mary /Black/", Sex::Male),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_paternal_parents() {
    let paternal = SurnameTradition::new(TraditionKind::Paternal);
    let child = "Chris /White/";
    assert_eq!(
        paternal.new_parent_names(child, Sex::Male),
        vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]
    );
    assert_eq!(
        paternal.new_parent_names(child, Sex::Female),
        vec![
            "1 NAME //\n2 TYPE BIRTH",
            "1 NAME /White/\n2 TYPE MARRIED\n2 SURN White"
        ]
    );
    assert_eq!(
        paternal.new_child_names(Some("John /White/"), Some("Mary /Black/"), Sex::Unknown),
        vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]
    );
}

#[test]
fn test_individual_names_source() {
    let father = IndividualNames::new(["John /White/", "Johnny /Whyte/"]);
    let mother = IndividualNames::new(["Mary /Black/"]);
    assert_eq!(
        patrilineal().new_child_names(Some(&father), Some(&mother), Sex::Male),
        vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]
    );

    let nameless = IndividualNames::default();
    assert_eq!(
        patrilineal().new_parent_names(&nameless, Sex::Male),
        vec!["1 NAME //\n2 TYPE BIRTH"]
    );
}

#[test]
fn test_records_carry_name_type() {
    let records = patrilineal().new_child_records(Some("John /White/"), None, Sex::Male);
    assert_eq!(records[0].name, "/White/");
    assert_eq!(records[0].name_type.as_code(), "BIRTH");
}
