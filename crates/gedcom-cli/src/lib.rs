//! CLI library components for the GEDCOM engine.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
