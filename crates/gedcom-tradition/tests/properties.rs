#![allow(missing_docs)]
//! Totality of name derivation over arbitrary text.

use gedcom_model::{Sex, TraditionKind};
use gedcom_tradition::{NameGrammar, SurnameTradition};
use proptest::prelude::*;

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![
        Just(Sex::Male),
        Just(Sex::Female),
        Just(Sex::Other),
        Just(Sex::Unknown),
    ]
}

proptest! {
    #[test]
    fn derivation_always_yields_names(
        father in proptest::option::of("[ -~]{0,32}"),
        mother in proptest::option::of("[ -~]{0,32}"),
        sex in sex(),
    ) {
        for kind in TraditionKind::ALL {
            let tradition = SurnameTradition::new(kind);
            let children = tradition.new_child_names(father.as_deref(), mother.as_deref(), sex);
            prop_assert!(!children.is_empty());
            for name in &children {
                prop_assert!(name.starts_with("1 NAME "));
            }
            let individual = father.as_deref().unwrap_or("");
            prop_assert!(!tradition.new_parent_names(individual, sex).is_empty());
            prop_assert!(!tradition.new_spouse_names(individual, sex).is_empty());
        }
    }

    #[test]
    fn surname_group_is_a_substring(text in "[ -~]{0,40}") {
        if let Some(parts) = NameGrammar::default().parts(&text) {
            prop_assert!(text.contains(&parts.full));
            prop_assert!(parts.full.starts_with('/') && parts.full.ends_with('/'));
            prop_assert!(!parts.surname.contains('/'));
            if parts.surname.is_empty() {
                prop_assert!(parts.prefix.is_empty());
            }
        }
    }
}
