//! CLI argument definitions for the GEDCOM engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gedcom_model::{Sex, TraditionKind};
use gedcom_normalization::{Axis, Vocabulary};

#[derive(Parser)]
#[command(
    name = "gedcom",
    version,
    about = "GEDCOM canonicalization and name derivation",
    long_about = "Canonicalize GEDCOM tags, controlled values and coordinates, and derive\n\
                  NAME records for new relatives under a surname tradition."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Surname tradition (overrides the configuration file).
    #[arg(long = "tradition", value_name = "KEY", global = true)]
    pub tradition: Option<TraditionKind>,

    /// Engine configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize GEDCOM tags.
    Tag {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Canonicalize values of a controlled vocabulary.
    Value(ValueArgs),

    /// List the codes and labels of a controlled vocabulary.
    Values {
        /// Vocabulary key (e.g. `marriage-type`) or tag path (e.g. `FAM:MARR:TYPE`).
        #[arg(value_name = "VOCABULARY")]
        vocabulary: Vocabulary,
    },

    /// Read latitude or longitude text as signed degrees.
    Coord {
        #[arg(value_enum, value_name = "AXIS")]
        axis: AxisArg,

        #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
        texts: Vec<String>,
    },

    /// Derive NAME records for a new child.
    Child {
        /// Father's NAME value, e.g. "John /White/".
        #[arg(long)]
        father: Option<String>,

        /// Mother's NAME value.
        #[arg(long)]
        mother: Option<String>,

        /// Sex of the new child (M, F, X, U).
        #[arg(long, default_value = "U")]
        sex: Sex,
    },

    /// Derive NAME records for a new parent.
    Parent {
        /// Child's NAME value.
        #[arg(long)]
        child: String,

        /// Sex of the new parent (M, F, X, U).
        #[arg(long, default_value = "U")]
        sex: Sex,
    },

    /// Derive NAME records for a new spouse.
    Spouse {
        /// NAME value of the individual gaining a spouse.
        #[arg(long)]
        individual: String,

        /// Sex of the new spouse (M, F, X, U).
        #[arg(long, default_value = "U")]
        sex: Sex,
    },

    /// List the supported surname traditions.
    Traditions,
}

#[derive(Args)]
pub struct ValueArgs {
    /// Vocabulary key (e.g. `pedigree`) or tag path (e.g. `INDI:FAMC:PEDI`).
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: Vocabulary,

    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Decode HTML entities before matching.
    #[arg(long = "unescape-entities")]
    pub unescape_entities: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AxisArg {
    #[value(alias = "latitude")]
    Lat,
    #[value(alias = "longitude")]
    Long,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Lat => Axis::Latitude,
            AxisArg::Long => Axis::Longitude,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
