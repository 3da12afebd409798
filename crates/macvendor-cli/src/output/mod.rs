//! Output formatting for different formats.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use macvendor::{LookupResult, MacAddress, MacVendorError};
use serde::{Deserialize, Serialize};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text: the vendor name, or `field: value` lines
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Write a lookup result to `out`.
///
/// Without `verbose` only the vendor name is written (as `{"<mac>": "<vendor>"}`
/// for structured formats) and a missing vendor is an error. With `verbose`
/// every field is written; a result without fields is an error.
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    verbose: bool,
    color: bool,
    mac: MacAddress,
    result: &LookupResult,
) -> Result<()> {
    if verbose {
        if result.is_empty() {
            return Err(MacVendorError::VendorNotFound(mac.to_string()).into());
        }

        match format {
            OutputFormat::Pretty => {
                for (field, value) in result.fields() {
                    if color {
                        writeln!(out, "{}: {}", field.bold(), value)?;
                    } else {
                        writeln!(out, "{field}: {value}")?;
                    }
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Yaml => {
                write!(out, "{}", serde_yaml::to_string(result)?)?;
            }
        }
        return Ok(());
    }

    let vendor = result.require_vendor(mac)?;
    match format {
        OutputFormat::Pretty => writeln!(out, "{vendor}")?,
        OutputFormat::Json => {
            let single = BTreeMap::from([(mac.to_string(), vendor)]);
            writeln!(out, "{}", serde_json::to_string(&single)?)?;
        }
        OutputFormat::Yaml => {
            let single = BTreeMap::from([(mac.to_string(), vendor)]);
            write!(out, "{}", serde_yaml::to_string(&single)?)?;
        }
    }

    Ok(())
}
