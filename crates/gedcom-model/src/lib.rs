//! Data model for the GEDCOM canonicalization and name-derivation engine.
//!
//! - [`enums`]: sex, name type, and surname tradition keys
//! - [`codelist`]: controlled vocabularies with synonym remapping
//! - [`record`]: extracted name parts and derived NAME records
//! - [`labels`]: injected display-label lookup
//! - [`options`]: engine and normalization configuration
//! - [`source`]: access to an individual's NAME text

pub mod codelist;
pub mod enums;
pub mod error;
pub mod labels;
pub mod options;
pub mod record;
pub mod source;

pub use codelist::{Codelist, LetterCase, Term};
pub use enums::{NameType, Sex, TraditionKind};
pub use error::{GedcomError, Result};
pub use labels::{CatalogLabels, EnglishLabels, LabelProvider};
pub use options::{EngineConfig, NormalizationOptions, ParticleRule};
pub use record::{NameParts, NamePiece, NameRecord};
pub use source::{IndividualNames, NameSource};
