//! Patrilineal traditions whose surnames change form with sex and marriage.

use gedcom_model::{NameParts, NameRecord, Sex};

use super::DEFAULT_NAME;
use crate::extract::NameGrammar;
use crate::inflect::{
    LITHUANIAN_DAUGHTER, LITHUANIAN_FATHER, LITHUANIAN_WIFE, POLISH_FEMININE, POLISH_MASCULINE,
    inflect,
};

/// Apply `table` to the surname, rebuilding the slash group when it changes.
fn reinflect(parts: NameParts, table: &[(&str, &str)]) -> NameParts {
    let surname = inflect(&parts.surname, table);
    if surname == parts.surname {
        return parts;
    }
    let mut parts = NameParts { surname, ..parts };
    parts.full = format!("/{}/", parts.full_surname());
    parts
}

fn child(
    grammar: &NameGrammar,
    father: &str,
    sex: Sex,
    daughter: &[(&str, &str)],
) -> Option<Vec<NameRecord>> {
    let mut parts = grammar.parts(father)?;
    if sex == Sex::Female {
        parts = reinflect(parts, daughter);
    }
    Some(vec![NameRecord::birth_from_parts(&parts)])
}

fn wife(grammar: &NameGrammar, source: &str, steps: &[&[(&str, &str)]]) -> Option<Vec<NameRecord>> {
    let parts = steps
        .iter()
        .fold(grammar.parts(source)?, |parts, table| reinflect(parts, table));
    Some(vec![
        NameRecord::birth(DEFAULT_NAME),
        NameRecord::married_from_parts(&parts),
    ])
}

fn father(grammar: &NameGrammar, child: &str, masculine: &[(&str, &str)]) -> Option<Vec<NameRecord>> {
    let parts = reinflect(grammar.parts(child)?, masculine);
    Some(vec![NameRecord::birth_from_parts(&parts)])
}

pub(super) fn polish_child(grammar: &NameGrammar, father: &str, sex: Sex) -> Option<Vec<NameRecord>> {
    child(grammar, father, sex, POLISH_FEMININE)
}

pub(super) fn polish_father(grammar: &NameGrammar, child: &str) -> Option<Vec<NameRecord>> {
    father(grammar, child, POLISH_MASCULINE)
}

/// Married name in the feminine form of `source`'s surname.
pub(super) fn polish_wife(grammar: &NameGrammar, source: &str) -> Option<Vec<NameRecord>> {
    wife(grammar, source, &[POLISH_FEMININE])
}

pub(super) fn lithuanian_child(
    grammar: &NameGrammar,
    father: &str,
    sex: Sex,
) -> Option<Vec<NameRecord>> {
    child(grammar, father, sex, LITHUANIAN_DAUGHTER)
}

pub(super) fn lithuanian_father(grammar: &NameGrammar, child: &str) -> Option<Vec<NameRecord>> {
    father(grammar, child, LITHUANIAN_FATHER)
}

/// Married name in the wife's form of the masculine surname of `source`.
pub(super) fn lithuanian_wife(grammar: &NameGrammar, source: &str) -> Option<Vec<NameRecord>> {
    wife(grammar, source, &[LITHUANIAN_FATHER, LITHUANIAN_WIFE])
}
