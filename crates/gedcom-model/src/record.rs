//! Name parts and derived NAME records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::NameType;

/// Structured parts of a slash-delimited surname group.
///
/// For `John /de la Cruz/` the parts are `full = "/de la Cruz/"`,
/// `prefix = "de la"`, `surname = "Cruz"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameParts {
    /// The surname group as written, slashes included.
    pub full: String,
    /// Surname prefix particles (`SPFX`), empty when absent.
    pub prefix: String,
    /// Surname proper (`SURN`), empty when absent.
    pub surname: String,
}

impl NameParts {
    pub fn new(
        full: impl Into<String>,
        prefix: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            full: full.into(),
            prefix: prefix.into(),
            surname: surname.into(),
        }
    }

    /// Prefix and surname joined by a space, as they appear between slashes.
    pub fn full_surname(&self) -> String {
        match (self.prefix.is_empty(), self.surname.is_empty()) {
            (true, _) => self.surname.clone(),
            (false, true) => self.prefix.clone(),
            (false, false) => format!("{} {}", self.prefix, self.surname),
        }
    }
}

/// Level-2 substructure tags a derived name may carry, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NamePiece {
    /// `GIVN`
    Given,
    /// `SPFX`
    SurnamePrefix,
    /// `SURN`
    Surname,
}

impl NamePiece {
    pub fn tag(&self) -> &'static str {
        match self {
            NamePiece::Given => "GIVN",
            NamePiece::SurnamePrefix => "SPFX",
            NamePiece::Surname => "SURN",
        }
    }
}

/// One derived NAME record.
///
/// Renders as:
///
/// ```text
/// 1 NAME <name>
/// 2 TYPE <type>
/// 2 GIVN <given>      (only when non-empty)
/// 2 SPFX <prefix>     (only when non-empty)
/// 2 SURN <surname>    (only when non-empty)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub name_type: NameType,
    pieces: Vec<(NamePiece, String)>,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, name_type: NameType) -> Self {
        Self {
            name: name.into(),
            name_type,
            pieces: Vec::new(),
        }
    }

    /// A name given at birth.
    pub fn birth(name: impl Into<String>) -> Self {
        Self::new(name, NameType::Birth)
    }

    /// A name taken at marriage.
    pub fn married(name: impl Into<String>) -> Self {
        Self::new(name, NameType::Married)
    }

    /// Birth name carrying the prefix and surname of `parts`.
    pub fn birth_from_parts(parts: &NameParts) -> Self {
        Self::birth(parts.full.clone())
            .with_prefix(parts.prefix.clone())
            .with_surname(parts.surname.clone())
    }

    /// Married name carrying the prefix and surname of `parts`.
    pub fn married_from_parts(parts: &NameParts) -> Self {
        Self::married(parts.full.clone())
            .with_prefix(parts.prefix.clone())
            .with_surname(parts.surname.clone())
    }

    /// Set a level-2 piece. Empty values are dropped when rendering.
    #[must_use]
    pub fn with_piece(mut self, piece: NamePiece, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.pieces.iter_mut().find(|(p, _)| *p == piece) {
            Some(slot) => slot.1 = value,
            None => {
                self.pieces.push((piece, value));
                self.pieces.sort_by_key(|(p, _)| *p);
            }
        }
        self
    }

    #[must_use]
    pub fn with_given(self, given: impl Into<String>) -> Self {
        self.with_piece(NamePiece::Given, given)
    }

    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        self.with_piece(NamePiece::SurnamePrefix, prefix)
    }

    #[must_use]
    pub fn with_surname(self, surname: impl Into<String>) -> Self {
        self.with_piece(NamePiece::Surname, surname)
    }

    /// Value of a piece, if set and non-empty.
    pub fn piece(&self, piece: NamePiece) -> Option<&str> {
        self.pieces
            .iter()
            .find(|(p, v)| *p == piece && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Render as GEDCOM lines joined by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 NAME {}\n2 TYPE {}", self.name, self.name_type)?;
        for (piece, value) in &self.pieces {
            if !value.is_empty() {
                write!(f, "\n2 {} {}", piece.tag(), value)?;
            }
        }
        Ok(())
    }
}
