//! GEDCOM engine CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use gedcom_cli::commands::{
    Relative, canonical_tags, canonical_values, derive_names, load_config, read_coordinates,
    traditions, vocabulary_values,
};
use gedcom_cli::logging::{LogConfig, LogFormat, init_logging};
use gedcom_model::{EnglishLabels, NormalizationOptions};
use gedcom_tradition::SurnameTradition;
use tracing::debug;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{
    print_canonical, print_coordinates, print_names, print_traditions, print_values,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Tag { tags } => print_canonical("Tag", &canonical_tags(tags)),
        Command::Value(args) => {
            let options = NormalizationOptions::new().with_unescape_entities(args.unescape_entities);
            print_canonical(
                "Value",
                &canonical_values(args.vocabulary, &args.values, &options),
            );
        }
        Command::Values { vocabulary } => {
            print_values(&vocabulary_values(*vocabulary, &EnglishLabels));
        }
        Command::Coord { axis, texts } => {
            print_coordinates(&read_coordinates((*axis).into(), texts));
        }
        Command::Child { father, mother, sex } => {
            let relative = Relative::Child {
                father: father.as_deref(),
                mother: mother.as_deref(),
            };
            print_names(&derive_names(&tradition(cli)?, relative, *sex));
        }
        Command::Parent { child, sex } => {
            let relative = Relative::Parent {
                child: child.as_str(),
            };
            print_names(&derive_names(&tradition(cli)?, relative, *sex));
        }
        Command::Spouse { individual, sex } => {
            let relative = Relative::Spouse {
                individual: individual.as_str(),
            };
            print_names(&derive_names(&tradition(cli)?, relative, *sex));
        }
        Command::Traditions => print_traditions(&traditions(&EnglishLabels)),
    }
    Ok(())
}

fn tradition(cli: &Cli) -> Result<SurnameTradition> {
    let config = load_config(cli.config.as_deref(), cli.tradition)?;
    debug!(tradition = %config.tradition, "loaded engine configuration");
    Ok(SurnameTradition::from_config(&config))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
