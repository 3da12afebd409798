//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::ffi::OsString;
use std::time::Duration;

use anyhow::Result;
use args::Cli;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use macvendor::{LookupRequest, MacAddress, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    run_from(std::env::args_os()).await
}

/// Run the CLI application with an explicit argument list.
pub async fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Bare invocation shows usage instead of a missing-argument error
    if args.len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| e.exit());

    crate::logging::init(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    let request = build_request(&cli, &config).unwrap_or_else(|e| e.exit());

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Create context for commands
    let ctx = commands::Context {
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        verbose: cli.verbose,
        color: !cli.no_color,
        base_url: cli
            .base_url
            .or(config.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: cli
            .timeout
            .or(config.timeout_secs)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
    };

    commands::lookup::execute(ctx, request).await
}

/// Combine the parsed arguments and the config file into a lookup request.
///
/// A malformed MAC address or a missing key is reported with the usage line.
/// The API key comes from `--api-key`, then `MACADDRESS_IO_API_KEY`, then the
/// config file.
pub fn build_request(cli: &Cli, config: &Config) -> std::result::Result<LookupRequest, clap::Error> {
    let mac: MacAddress = cli
        .mac
        .parse()
        .map_err(|e| Cli::command().error(ErrorKind::ValueValidation, e))?;

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| config.api_key.clone())
        .filter(|key| !key.trim().is_empty());

    let Some(api_key) = api_key else {
        return Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "the following required argument was not provided: --api-key <API_KEY>\n\n\
             Set it with one of:\n  \
             1. --api-key <KEY>\n  \
             2. MACADDRESS_IO_API_KEY environment variable\n  \
             3. api_key in the config file",
        ));
    };

    LookupRequest::new(mac, api_key, cli.verbose)
        .map_err(|e| Cli::command().error(ErrorKind::ValueValidation, e))
}
