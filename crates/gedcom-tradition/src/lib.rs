//! Surname traditions for deriving NAME records of new relatives.
//!
//! - [`extract`]: the surname-group grammar (`John /de White/`)
//! - [`inflect`]: gendered surname endings
//! - [`tradition`]: the tradition engine
//!
//! ```
//! use gedcom_model::{Sex, TraditionKind};
//! use gedcom_tradition::SurnameTradition;
//!
//! let tradition = SurnameTradition::new(TraditionKind::Patrilineal);
//! let names = tradition.new_child_names(Some("John /White/"), Some("Mary /Black/"), Sex::Female);
//! assert_eq!(names, vec!["1 NAME /White/\n2 TYPE BIRTH\n2 SURN White"]);
//! ```

pub mod extract;
pub mod inflect;
pub mod tradition;

pub use extract::{NameGrammar, extract_name, given_name, surname_groups};
pub use tradition::{DEFAULT_NAME, SurnameTradition};
