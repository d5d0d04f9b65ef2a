//! GEDCOM canonicalization.
//!
//! - **tag**: long-form and foreign tag spellings to canonical short tags
//! - **values**: controlled vocabularies (marriage type, pedigree, restriction, name type)
//! - **coordinate**: hemisphere-prefixed or plain latitude/longitude text to signed degrees
//! - **text**: field-independent whitespace and entity normalization
//! - **numeric**: decimal numeral recognition and formatting
//!
//! Every operation is total: unrecognized input passes through unchanged
//! (tags, values) or yields `None` (coordinates).

pub mod coordinate;
pub mod numeric;
pub mod tag;
pub mod text;
pub mod values;

pub use coordinate::{
    Axis, format_latitude, format_longitude, read_degrees, read_latitude, read_longitude,
};
pub use tag::{canonical_tag, canonical_tag_path};
pub use values::Vocabulary;
