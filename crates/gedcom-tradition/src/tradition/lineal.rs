//! Single-surname inheritance shared by the patrilineal, matrilineal and
//! paternal traditions.

use gedcom_model::NameRecord;

use super::DEFAULT_NAME;
use crate::extract::NameGrammar;

/// Birth name carrying the surname group of `source`.
pub(super) fn inherit(grammar: &NameGrammar, source: &str) -> Option<Vec<NameRecord>> {
    let parts = grammar.parts(source)?;
    Some(vec![NameRecord::birth_from_parts(&parts)])
}

/// Empty birth name followed by a married name carrying the surname group of
/// `source`.
pub(super) fn marry(grammar: &NameGrammar, source: &str) -> Option<Vec<NameRecord>> {
    let parts = grammar.parts(source)?;
    Some(vec![
        NameRecord::birth(DEFAULT_NAME),
        NameRecord::married_from_parts(&parts),
    ])
}
