#![allow(missing_docs)]

use gedcom_model::codelist::{Codelist, LetterCase, Term};

fn marriage_type() -> Codelist {
    Codelist::new("Marriage type", "FAM:MARR:TYPE", LetterCase::Upper)
        .with_term(Term::new("CIVIL", "Civil marriage"))
        .with_term(Term::new("COMMON LAW", "Common-law marriage"))
        .with_term(Term::new("RELIGIOUS", "Religious marriage").with_synonym("RELI"))
}

#[test]
fn test_codelist_validation() {
    let ct = marriage_type();

    assert!(ct.is_valid("CIVIL"));
    assert!(ct.is_valid("civil")); // Case-insensitive
    assert!(ct.is_valid("Common Law"));

    // Synonyms
    assert!(ct.is_valid("RELI"));
    assert!(ct.is_valid("reli"));

    assert!(!ct.is_valid("PARTNERS"));
    assert!(!ct.is_valid(""));
}

#[test]
fn test_codelist_normalization() {
    let ct = marriage_type();

    assert_eq!(ct.normalize("RELI"), "RELIGIOUS");
    assert_eq!(ct.normalize("religious"), "RELIGIOUS");
    assert_eq!(ct.normalize("civil"), "CIVIL");

    // Unknown value is only case-folded
    assert_eq!(ct.normalize("Handfasting"), "HANDFASTING");
}

#[test]
fn test_lowercase_codelist() {
    let ct = Codelist::new("Restriction", "INDI:RESN", LetterCase::Lower)
        .with_term(Term::new("privacy", "Show to members").with_synonym("private"));

    assert_eq!(ct.normalize("PRIVATE"), "privacy");
    assert_eq!(ct.normalize("Privacy"), "privacy");
    assert_eq!(ct.normalize("SECRET"), "secret");
}

#[test]
fn test_codes_keep_declaration_order() {
    let ct = marriage_type();
    assert_eq!(ct.codes(), vec!["CIVIL", "COMMON LAW", "RELIGIOUS"]);
    assert_eq!(
        ct.term("reli").map(|t| t.label.as_str()),
        Some("Religious marriage")
    );
}

#[test]
fn test_case_folding_is_ascii_only() {
    assert_eq!(LetterCase::Upper.apply("straße"), "STRAßE");
    assert_eq!(LetterCase::Lower.apply("ÉTÉ Civil"), "ÉtÉ civil");

    let ct = marriage_type();
    assert_eq!(ct.normalize("Mariage à l'église"), "MARIAGE à L'éGLISE");
}
