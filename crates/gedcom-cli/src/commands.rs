//! Command implementations. Each returns rows for the caller to print.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gedcom_model::{EngineConfig, LabelProvider, NormalizationOptions, Sex, TraditionKind};
use gedcom_normalization::{Axis, Vocabulary, canonical_tag};
use gedcom_tradition::SurnameTradition;

/// One input and its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRow {
    pub input: String,
    pub canonical: String,
}

/// One coordinate text and what it reads as.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRow {
    pub input: String,
    pub degrees: Option<f64>,
    /// The degrees written back in GEDCOM form.
    pub gedcom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraditionRow {
    pub key: &'static str,
    pub name: String,
    pub description: String,
}

/// The relative whose NAME records are derived.
#[derive(Debug, Clone, Copy)]
pub enum Relative<'a> {
    Child {
        father: Option<&'a str>,
        mother: Option<&'a str>,
    },
    Parent {
        child: &'a str,
    },
    Spouse {
        individual: &'a str,
    },
}

/// Load the engine configuration.
///
/// Without a file the defaults apply. `tradition` replaces the configured
/// tradition when given.
pub fn load_config(path: Option<&Path>, tradition: Option<TraditionKind>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            EngineConfig::from_toml_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(tradition) = tradition {
        config.tradition = tradition;
    }
    Ok(config)
}

pub fn canonical_tags(tags: &[String]) -> Vec<CanonicalRow> {
    tags.iter()
        .map(|tag| CanonicalRow {
            input: tag.clone(),
            canonical: canonical_tag(tag),
        })
        .collect()
}

pub fn canonical_values(
    vocabulary: Vocabulary,
    values: &[String],
    options: &NormalizationOptions,
) -> Vec<CanonicalRow> {
    values
        .iter()
        .map(|value| CanonicalRow {
            input: value.clone(),
            canonical: vocabulary.canonical_with(value, options),
        })
        .collect()
}

/// Codes and labels of `vocabulary`, without the unset option.
pub fn vocabulary_values(vocabulary: Vocabulary, labels: &dyn LabelProvider) -> Vec<(String, String)> {
    vocabulary
        .values(labels)
        .into_iter()
        .filter(|(code, _)| !code.is_empty())
        .collect()
}

pub fn read_coordinates(axis: Axis, texts: &[String]) -> Vec<CoordinateRow> {
    texts
        .iter()
        .map(|text| {
            let degrees = axis.read(text);
            CoordinateRow {
                input: text.clone(),
                degrees,
                gedcom: degrees.map(|degrees| axis.format(degrees)),
            }
        })
        .collect()
}

pub fn derive_names(tradition: &SurnameTradition, relative: Relative<'_>, sex: Sex) -> Vec<String> {
    match relative {
        Relative::Child { father, mother } => tradition.new_child_names(father, mother, sex),
        Relative::Parent { child } => tradition.new_parent_names(child, sex),
        Relative::Spouse { individual } => tradition.new_spouse_names(individual, sex),
    }
}

pub fn traditions(labels: &dyn LabelProvider) -> Vec<TraditionRow> {
    SurnameTradition::all()
        .iter()
        .map(|tradition| TraditionRow {
            key: tradition.kind().key(),
            name: tradition.name(labels),
            description: tradition.description(labels),
        })
        .collect()
}
