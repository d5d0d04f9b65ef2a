//! Controlled vocabulary model.
//!
//! A [`Codelist`] holds the legal codes of one GEDCOM field (for example
//! `FAM:MARR:TYPE`) together with alternate spellings that normalize to them.
//!
//! ## Structure
//!
//! - **Terms**: the canonical codes, kept in declaration order so that user
//!   interfaces list them the way the vocabulary defines them.
//! - **Synonyms**: alternate or historical codes (e.g. `RELI` from
//!   GEDCOM 5.5EL) mapped to the canonical code.
//!
//! GEDCOM vocabularies differ in letter case: `MARR:TYPE` codes are
//! uppercase, `PEDI` and `RESN` codes are lowercase. Each codelist carries
//! its [`LetterCase`] and folds input to it before lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Letter case of a vocabulary's canonical codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    /// Fold `value` to this case. Only ASCII letters change.
    pub fn apply(&self, value: &str) -> String {
        match self {
            LetterCase::Upper => value.to_ascii_uppercase(),
            LetterCase::Lower => value.to_ascii_lowercase(),
        }
    }
}

/// A single legal code within a codelist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Canonical code as written in GEDCOM (e.g. "RELIGIOUS").
    pub code: String,

    /// English display label (e.g. "Religious marriage").
    pub label: String,

    /// Alternate spellings that normalize to `code`.
    pub synonyms: Vec<String>,
}

impl Term {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            synonyms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }
}

/// The legal codes of one GEDCOM field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Codelist {
    /// Vocabulary name (e.g. "Marriage type").
    pub name: String,

    /// GEDCOM tag path the vocabulary applies to (e.g. "FAM:MARR:TYPE").
    pub tag_path: String,

    /// Letter case of the canonical codes.
    pub case: LetterCase,

    /// Terms in declaration order.
    terms: Vec<Term>,

    /// Case-folded code -> index into `terms`.
    index: BTreeMap<String, usize>,

    /// Case-folded synonym -> case-folded canonical code.
    synonyms: BTreeMap<String, String>,
}

impl Codelist {
    /// Create an empty codelist.
    pub fn new(name: impl Into<String>, tag_path: impl Into<String>, case: LetterCase) -> Self {
        Self {
            name: name.into(),
            tag_path: tag_path.into(),
            case,
            terms: Vec::new(),
            index: BTreeMap::new(),
            synonyms: BTreeMap::new(),
        }
    }

    /// Add a term to this codelist.
    pub fn add_term(&mut self, term: Term) {
        let key = self.case.apply(&term.code);

        for synonym in &term.synonyms {
            let syn_key = self.case.apply(synonym);
            if syn_key != key {
                self.synonyms.insert(syn_key, key.clone());
            }
        }

        self.index.insert(key, self.terms.len());
        self.terms.push(term);
    }

    /// Builder form of [`Codelist::add_term`].
    #[must_use]
    pub fn with_term(mut self, term: Term) -> Self {
        self.add_term(term);
        self
    }

    /// Terms in declaration order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Canonical codes in declaration order.
    pub fn codes(&self) -> Vec<&str> {
        self.terms.iter().map(|t| t.code.as_str()).collect()
    }

    /// Look up a term by code or synonym, ignoring case.
    pub fn term(&self, value: &str) -> Option<&Term> {
        let key = self.case.apply(value);
        let key = self.synonyms.get(&key).unwrap_or(&key);
        self.index.get(key).map(|&idx| &self.terms[idx])
    }

    /// Check if a value is a code or synonym of this codelist (case-insensitive).
    pub fn is_valid(&self, value: &str) -> bool {
        self.term(value).is_some()
    }

    /// Normalize a value to its canonical code.
    ///
    /// Unrecognized values are returned folded to the vocabulary's case.
    pub fn normalize(&self, value: &str) -> String {
        match self.term(value) {
            Some(term) => term.code.clone(),
            None => self.case.apply(value),
        }
    }
}
