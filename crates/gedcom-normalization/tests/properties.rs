#![allow(missing_docs)]
//! Property tests for the canonicalizers.

use gedcom_normalization::{Vocabulary, canonical_tag, format_latitude, read_latitude, read_longitude};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonical_tag_is_idempotent(tag in "[ -~]{0,24}") {
        let once = canonical_tag(&tag);
        prop_assert_eq!(canonical_tag(&once), once);
    }

    #[test]
    fn canonical_tag_ignores_case(tag in "[A-Za-z_-]{1,20}") {
        prop_assert_eq!(
            canonical_tag(&tag.to_ascii_lowercase()),
            canonical_tag(&tag.to_ascii_uppercase())
        );
    }

    #[test]
    fn controlled_values_are_idempotent(value in "[ -~\t\n]{0,24}") {
        for vocabulary in Vocabulary::ALL {
            let once = vocabulary.canonical(&value);
            prop_assert_eq!(vocabulary.canonical(&once), once);
        }
    }

    #[test]
    fn plain_numbers_read_as_themselves(degrees in -1000.0f64..1000.0) {
        let text = degrees.to_string();
        prop_assert_eq!(read_latitude(&text), Some(degrees));
        prop_assert_eq!(read_longitude(&text), Some(degrees));
    }

    #[test]
    fn formatted_latitude_reads_back(degrees in -90.0f64..90.0) {
        prop_assert_eq!(read_latitude(&format_latitude(degrees)), Some(degrees));
    }
}
