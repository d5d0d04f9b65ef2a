//! Controlled-value canonicalization.
//!
//! Each [`Vocabulary`] is one GEDCOM field with a closed set of codes. A value
//! goes through the shared base normalization (whitespace, optional entity
//! decoding), is folded to the vocabulary's letter case, and is then mapped
//! through the vocabulary's synonym table. Values that are not codes pass
//! through after normalization.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use gedcom_model::{
    Codelist, GedcomError, LabelProvider, LetterCase, NameType, NormalizationOptions, Term,
};
use tracing::trace;

use crate::tag::canonical_tag_path;
use crate::text::canonical_text;

static MARRIAGE_TYPE: LazyLock<Codelist> = LazyLock::new(|| {
    Codelist::new("Marriage type", "FAM:MARR:TYPE", LetterCase::Upper)
        .with_term(Term::new("CIVIL", "Civil marriage"))
        .with_term(Term::new("COMMON LAW", "Common-law marriage"))
        .with_term(Term::new("PARTNERS", "Registered partnership"))
        // GEDCOM 5.5EL uses RELI for a religious marriage.
        .with_term(Term::new("RELIGIOUS", "Religious marriage").with_synonym("RELI"))
});

static PEDIGREE: LazyLock<Codelist> = LazyLock::new(|| {
    Codelist::new("Pedigree", "INDI:FAMC:PEDI", LetterCase::Lower)
        .with_term(Term::new("adopted", "Adopted"))
        .with_term(Term::new("birth", "Birth").with_synonym("natural"))
        .with_term(Term::new("foster", "Foster"))
        .with_term(Term::new("rada", "Rada"))
        .with_term(Term::new("sealing", "Sealing"))
});

static RESTRICTION: LazyLock<Codelist> = LazyLock::new(|| {
    Codelist::new("Restriction", "INDI:RESN", LetterCase::Lower)
        .with_term(Term::new("none", "Show to visitors"))
        .with_term(Term::new("privacy", "Show to members").with_synonym("private"))
        .with_term(Term::new("confidential", "Show to managers"))
        .with_term(Term::new("locked", "Only managers can edit"))
});

static NAME_TYPE: LazyLock<Codelist> = LazyLock::new(|| {
    let mut codelist = Codelist::new("Name type", "INDI:NAME:TYPE", LetterCase::Upper);
    for name_type in NameType::ALL {
        let mut term = Term::new(name_type.as_code(), name_type.label());
        if name_type == NameType::Aka {
            term = term.with_synonym("ALIAS");
        }
        codelist.add_term(term);
    }
    codelist
});

/// A GEDCOM field with a controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// `FAM:MARR:TYPE`
    MarriageType,
    /// `INDI:FAMC:PEDI`
    Pedigree,
    /// `INDI:RESN`
    Restriction,
    /// `INDI:NAME:TYPE`
    NameType,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::MarriageType,
        Vocabulary::Pedigree,
        Vocabulary::Restriction,
        Vocabulary::NameType,
    ];

    /// Stable key, also used as the label-provider domain.
    pub fn key(&self) -> &'static str {
        match self {
            Vocabulary::MarriageType => "marriage-type",
            Vocabulary::Pedigree => "pedigree",
            Vocabulary::Restriction => "restriction",
            Vocabulary::NameType => "name-type",
        }
    }

    pub fn codelist(&self) -> &'static Codelist {
        match self {
            Vocabulary::MarriageType => &MARRIAGE_TYPE,
            Vocabulary::Pedigree => &PEDIGREE,
            Vocabulary::Restriction => &RESTRICTION,
            Vocabulary::NameType => &NAME_TYPE,
        }
    }

    /// Convert a value to its canonical form with default options.
    pub fn canonical(&self, value: &str) -> String {
        self.canonical_with(value, &NormalizationOptions::default())
    }

    /// Convert a value to its canonical form.
    pub fn canonical_with(&self, value: &str, options: &NormalizationOptions) -> String {
        let codelist = self.codelist();
        let text = canonical_text(value, options.unescape_entities);

        if !options.custom_maps.is_empty() {
            if let Some(mapped) = options.custom_maps.get(&text) {
                return mapped.clone();
            }
            if let Some(mapped) = options.custom_maps.get(&codelist.case.apply(&text)) {
                return mapped.clone();
            }
        }

        let canonical = codelist.normalize(&text);
        if canonical != codelist.case.apply(&text) {
            trace!(vocabulary = self.key(), canonical = %canonical, "remapped alternate code");
        }
        canonical
    }

    /// Legal codes with display labels, for populating a selection list.
    ///
    /// The first entry is always the empty (unset) option.
    pub fn values(&self, labels: &dyn LabelProvider) -> Vec<(String, String)> {
        std::iter::once((String::new(), String::new()))
            .chain(self.codelist().terms().iter().map(|term| {
                (
                    term.code.clone(),
                    labels.label(self.key(), &term.code, &term.label),
                )
            }))
            .collect()
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Vocabulary {
    type Err = GedcomError;

    /// Accepts a key (`marriage-type`) or an unambiguous tag path
    /// (`FAM:MARR:TYPE`, `MARR:TYPE`, `marriage:type`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(vocabulary) = Vocabulary::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(trimmed))
        {
            return Ok(vocabulary);
        }

        let path = canonical_tag_path(trimmed);
        let suffix = format!(":{path}");
        let matches: Vec<Vocabulary> = Vocabulary::ALL
            .into_iter()
            .filter(|v| {
                let tag_path = &v.codelist().tag_path;
                *tag_path == path || tag_path.ends_with(&suffix)
            })
            .collect();

        match matches.as_slice() {
            [vocabulary] => Ok(*vocabulary),
            _ => Err(GedcomError::UnknownVocabulary(s.to_string())),
        }
    }
}
