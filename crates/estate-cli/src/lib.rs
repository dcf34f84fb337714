//! Command-line inspector for estate wizard records
//!
//! Loads a record-set JSON file and prints what the wizard would do with it:
//! the derived context, visible steps, sidebar categories, navigation from a
//! given step, or the template data for a preview.

#![allow(missing_docs)]

mod report;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use estate_model::RecordSet;
use estate_template::map_records;
use estate_wizard::{StepRegistry, WizardConfig, WizardSnapshot};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber; `RUST_LOG` wins over `-v`
pub fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn records_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("records")
            .long("records")
            .short('r')
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Record-set JSON file (will, people, assets)"),
    )
    .arg(
        Arg::new("today")
            .long("today")
            .help("Date used for age calculations (YYYY-MM-DD); defaults to the local date"),
    )
}

/// Command-line definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("estate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect estate wizard records")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Wizard config TOML file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity"),
        )
        .subcommand(records_args(
            Command::new("context").about("Print the derived visibility context"),
        ))
        .subcommand(records_args(
            Command::new("steps")
                .about("List visible steps with completion marks")
                .arg(
                    Arg::new("family")
                        .long("family")
                        .help(
                            "Document family (will, poa-property, poa-care); \
                             defaults to the record's type",
                        ),
                ),
        ))
        .subcommand(records_args(
            Command::new("categories").about("Show steps grouped by category with progress"),
        ))
        .subcommand(records_args(
            Command::new("nav")
                .about("Resolve navigation from a step id")
                .arg(
                    Arg::new("current")
                        .long("current")
                        .required(true)
                        .help("Step id the router is on"),
                ),
        ))
        .subcommand(records_args(
            Command::new("preview")
                .about("Print template data for the document preview")
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent the JSON output"),
                ),
        ))
}

/// `-v` count, whether given before or after the subcommand
#[must_use]
pub fn verbosity(matches: &ArgMatches) -> u8 {
    let sub = matches
        .subcommand()
        .map_or(0, |(_, args)| args.get_count("verbose"));
    sub.max(matches.get_count("verbose"))
}

/// Run the selected subcommand and return what should be printed
pub fn execute(matches: &ArgMatches) -> Result<String> {
    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };

    let config_path = args
        .get_one::<PathBuf>("config")
        .or_else(|| matches.get_one::<PathBuf>("config"));
    let config = match config_path {
        Some(path) => WizardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WizardConfig::default(),
    };
    let records = load_records(args)?;
    let today = today(args)?;
    tracing::debug!(command = name, %today, "running command");

    match name {
        "context" => {
            let snapshot = WizardSnapshot::from_records(&records, today, &config);
            Ok(serde_json::to_string_pretty(&snapshot.context)?)
        }
        "steps" => {
            let registry = match args.get_one::<String>("family") {
                Some(family) => family.parse::<StepRegistry>()?,
                None => StepRegistry::for_document_type(&records.will.document_type),
            };
            let snapshot = WizardSnapshot::with_registry(registry, &records, today, &config);
            Ok(report::steps(&snapshot))
        }
        "categories" => {
            let snapshot = WizardSnapshot::from_records(&records, today, &config);
            Ok(report::categories(&snapshot))
        }
        "nav" => {
            let snapshot = WizardSnapshot::from_records(&records, today, &config);
            let current = args
                .get_one::<String>("current")
                .context("--current is required")?;
            Ok(report::navigation(&snapshot.cursor(current)))
        }
        "preview" => {
            let data = map_records(&records);
            let json = if args.get_flag("pretty") {
                data.to_json_pretty()?
            } else {
                data.to_json_string()?
            };
            Ok(json)
        }
        other => anyhow::bail!("unknown command {other}"),
    }
}

fn load_records(args: &ArgMatches) -> Result<RecordSet> {
    let path = args
        .get_one::<PathBuf>("records")
        .context("--records is required")?;
    RecordSet::load(path).with_context(|| format!("loading records {}", path.display()))
}

fn today(args: &ArgMatches) -> Result<NaiveDate> {
    match args.get_one::<String>("today") {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid --today date {text:?}")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
