//! Error types for engine configuration.

use thiserror::Error;

/// Errors raised while selecting or loading engine configuration.
///
/// Canonicalization and name derivation never fail; only configuration does.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GedcomError {
    /// Surname tradition key not recognized.
    #[error("Unknown surname tradition: {0}")]
    UnknownTradition(String),

    /// Controlled vocabulary key or tag path not recognized.
    #[error("Unknown controlled vocabulary: {0}")]
    UnknownVocabulary(String),

    /// Configuration parsed but is not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for [`crate::EngineConfig`].
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, GedcomError>;
