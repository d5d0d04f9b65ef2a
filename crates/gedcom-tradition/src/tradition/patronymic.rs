//! Scandinavian-style patronyms built from the father's given name.

use gedcom_model::{NameRecord, Sex};

use crate::extract::{NameGrammar, given_name};

const SON: &str = "son";
const DAUGHTER: &str = "dotter";

/// `Erik` -> `Eriks`, `Nils` -> `Nils`.
fn genitive(given: &str) -> String {
    if given.ends_with('s') {
        given.to_string()
    } else {
        format!("{given}s")
    }
}

/// `/Eriksson/` for a son of Erik, `/Eriksdotter/` for a daughter.
pub(super) fn child(father: &str, sex: Sex) -> Option<Vec<NameRecord>> {
    let given = given_name(father)?;
    let suffix = match sex {
        Sex::Male => SON,
        Sex::Female => DAUGHTER,
        Sex::Other | Sex::Unknown => return None,
    };
    let patronym = format!("{}{suffix}", genitive(given));
    Some(vec![
        NameRecord::birth(format!("/{patronym}/")).with_surname(patronym),
    ])
}

/// Recover the father's given name from the child's patronym.
///
/// A genitive `s` is always dropped, so `Nilsson` yields `Nil`.
pub(super) fn father(grammar: &NameGrammar, child: &str) -> Option<Vec<NameRecord>> {
    let parts = grammar.parts(child)?;
    let stem = parts
        .surname
        .strip_suffix(SON)
        .or_else(|| parts.surname.strip_suffix(DAUGHTER))?;
    let given = stem.strip_suffix('s').unwrap_or(stem);
    if given.is_empty() {
        return None;
    }
    Some(vec![
        NameRecord::birth(format!("{given} //")).with_given(given),
    ])
}
