//! Type-safe enumerations for GEDCOM concepts used by the engine.
//!
//! These enums give compile-time safety to values that travel as short
//! codes in GEDCOM text (`SEX`, `NAME:TYPE`) or as configuration keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GedcomError;

/// Sex of an individual as recorded in `INDI:SEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
    /// `X`
    Other,
    /// `U`, and anything unrecognized.
    #[default]
    Unknown,
}

impl Sex {
    /// Returns the GEDCOM code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Other => "X",
            Sex::Unknown => "U",
        }
    }

    /// Total conversion from a GEDCOM code; unrecognized codes are `Unknown`.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            "X" | "OTHER" => Ok(Sex::Other),
            "U" | "UNKNOWN" => Ok(Sex::Unknown),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

/// Name type per `INDI:NAME:TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameType {
    /// Also known as.
    Aka,
    /// Name given at or near birth.
    Birth,
    /// Name assumed at immigration.
    Immigrant,
    /// Name used before marriage.
    Maiden,
    /// Name taken at marriage.
    Married,
    /// Name used professionally.
    Professional,
    /// Name taken on entering a religious order.
    Religious,
}

impl NameType {
    /// All name types in display order.
    pub const ALL: [NameType; 7] = [
        NameType::Aka,
        NameType::Birth,
        NameType::Immigrant,
        NameType::Maiden,
        NameType::Married,
        NameType::Professional,
        NameType::Religious,
    ];

    /// Returns the canonical GEDCOM code.
    pub fn as_code(&self) -> &'static str {
        match self {
            NameType::Aka => "AKA",
            NameType::Birth => "BIRTH",
            NameType::Immigrant => "IMMIGRANT",
            NameType::Maiden => "MAIDEN",
            NameType::Married => "MARRIED",
            NameType::Professional => "PROFESSIONAL",
            NameType::Religious => "RELIGIOUS",
        }
    }

    /// English display label.
    pub fn label(&self) -> &'static str {
        match self {
            NameType::Aka => "Also known as",
            NameType::Birth => "Name at birth",
            NameType::Immigrant => "Immigrant name",
            NameType::Maiden => "Maiden name",
            NameType::Married => "Married name",
            NameType::Professional => "Professional name",
            NameType::Religious => "Religious name",
        }
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Surname tradition selected once per genealogical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraditionKind {
    /// No surname inheritance.
    None,
    /// Children take their father's surname.
    #[default]
    Patrilineal,
    /// Children take their mother's surname.
    Matrilineal,
    /// Patrilineal, and wives take their husband's surname.
    Paternal,
    /// Children take a patronym built from the father's given name.
    Patronymic,
    /// Children take one surname from each parent, father's first.
    Spanish,
    /// Children take one surname from each parent, mother's first.
    Portuguese,
    /// Patrilineal with feminine surname forms.
    Polish,
    /// Patrilineal with daughter and wife surname forms.
    Lithuanian,
}

impl TraditionKind {
    /// All traditions in display order.
    pub const ALL: [TraditionKind; 9] = [
        TraditionKind::Paternal,
        TraditionKind::Patrilineal,
        TraditionKind::Matrilineal,
        TraditionKind::Patronymic,
        TraditionKind::Spanish,
        TraditionKind::Portuguese,
        TraditionKind::Polish,
        TraditionKind::Lithuanian,
        TraditionKind::None,
    ];

    /// Configuration key.
    pub fn key(&self) -> &'static str {
        match self {
            TraditionKind::None => "none",
            TraditionKind::Patrilineal => "patrilineal",
            TraditionKind::Matrilineal => "matrilineal",
            TraditionKind::Paternal => "paternal",
            TraditionKind::Patronymic => "patronymic",
            TraditionKind::Spanish => "spanish",
            TraditionKind::Portuguese => "portuguese",
            TraditionKind::Polish => "polish",
            TraditionKind::Lithuanian => "lithuanian",
        }
    }
}

impl fmt::Display for TraditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TraditionKind {
    type Err = GedcomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TraditionKind::ALL
            .into_iter()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| GedcomError::UnknownTradition(s.to_string()))
    }
}
