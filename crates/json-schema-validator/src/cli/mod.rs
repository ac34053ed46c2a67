//! Logic behind the `json-schema-validate` binary.
//!
//! Kept here rather than in the binary so it can be tested without spawning a
//! process.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::error::SchemaError;
use crate::factory::{FactoryOptions, JsonSchemaFactory};
use crate::result::ValidationResult;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("invalid schema: {0}")]
    Schema(#[source] SchemaError),

    #[error("invalid instance: {0}")]
    Instance(#[source] serde_json::Error),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

/// Outcome of one run: the validation result and the instance it was
/// computed on, needed to show offending values.
#[derive(Debug)]
pub struct Outcome {
    pub instance: Value,
    pub result: ValidationResult,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        if self.result.is_successful() {
            0
        } else {
            1
        }
    }
}

/// Reads a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|source| CliError::Io {
            path: p.display().to_string(),
            source,
        }),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

pub fn run(schema_text: &str, instance_text: &str, options: FactoryOptions) -> Result<Outcome, CliError> {
    let schema = JsonSchemaFactory::with_options(options)
        .from(schema_text)
        .map_err(CliError::Schema)?;
    let instance: Value = serde_json::from_str(instance_text).map_err(CliError::Instance)?;
    let result = schema.validate(&instance);
    Ok(Outcome { instance, result })
}

/// One line per error: `<pointer>: <message>`, followed by the offending
/// value when the pointer resolves inside the instance.
pub fn render(outcome: &Outcome) -> String {
    let mut out = String::new();
    for error in &outcome.result {
        out.push_str(&error.to_string());
        if let Some(found) = error.pointer().get(&outcome.instance) {
            out.push_str(&format!(" (found {found})"));
        }
        out.push('\n');
    }
    out
}
