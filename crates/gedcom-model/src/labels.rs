//! Display labels for codes and traditions.
//!
//! Translation is owned by the caller. The engine asks a [`LabelProvider`]
//! for a label and passes the English text along so that an identity
//! provider is a valid implementation.

use std::collections::BTreeMap;

/// Source of localized display labels.
pub trait LabelProvider: Send + Sync {
    /// Label for `code` within `domain` (a vocabulary or tradition key).
    ///
    /// `english` is the built-in English label.
    fn label(&self, domain: &str, code: &str, english: &str) -> String;
}

/// Returns the built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelProvider for EnglishLabels {
    fn label(&self, _domain: &str, _code: &str, english: &str) -> String {
        english.to_string()
    }
}

/// In-memory translation catalog with English fallback.
#[derive(Debug, Clone, Default)]
pub struct CatalogLabels {
    labels: BTreeMap<(String, String), String>,
}

impl CatalogLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        code: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.labels
            .insert((domain.into(), code.into()), label.into());
    }

    #[must_use]
    pub fn with_label(
        mut self,
        domain: impl Into<String>,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.insert(domain, code, label);
        self
    }
}

impl LabelProvider for CatalogLabels {
    fn label(&self, domain: &str, code: &str, english: &str) -> String {
        self.labels
            .get(&(domain.to_string(), code.to_string()))
            .cloned()
            .unwrap_or_else(|| english.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_falls_back_to_english() {
        let labels = CatalogLabels::new().with_label("marriage-type", "CIVIL", "Standesamtlich");
        assert_eq!(
            labels.label("marriage-type", "CIVIL", "Civil marriage"),
            "Standesamtlich"
        );
        assert_eq!(
            labels.label("marriage-type", "RELIGIOUS", "Religious marriage"),
            "Religious marriage"
        );
    }
}
