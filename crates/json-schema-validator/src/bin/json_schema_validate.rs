//! `json-schema-validate`: validate a JSON document against a JSON Schema.
//!
//! Usage:
//!   json-schema-validate SCHEMA [INSTANCE]
//!
//! The instance is read from stdin when omitted or `-`. Exit status is 0 when
//! the instance conforms, 1 when it does not, 2 when the schema or an input
//! cannot be loaded.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use json_schema_validator::cli::{read_input, render, run};
use json_schema_validator::{FactoryOptions, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "json-schema-validate", version, about, long_about = None)]
struct Cli {
    /// Schema document.
    schema: PathBuf,

    /// Instance document; stdin when omitted.
    instance: Option<PathBuf>,

    /// Namespace assumed for schemas without `$schema`.
    #[arg(long)]
    default_namespace: Option<Url>,

    /// Deepest accepted schema nesting.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log verbosity when RUST_LOG is unset (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(schema = %cli.schema.display(), "loading schema");

    let mut options = FactoryOptions::new().max_depth(cli.max_depth);
    if let Some(namespace) = cli.default_namespace {
        options = options.default_namespace(namespace);
    }

    let outcome = read_input(Some(cli.schema.as_path())).and_then(|schema| {
        let instance = read_input(cli.instance.as_deref())?;
        run(&schema, &instance, options)
    });

    match outcome {
        Ok(outcome) => {
            let report = render(&outcome);
            if io::stdout().write_all(report.as_bytes()).is_err() {
                return ExitCode::from(2);
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
