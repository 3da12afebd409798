//! # macvendor-cli
//!
//! Command-line lookup of MAC address vendors through macaddress.io.
//!
//! ## Features
//!
//! - **Vendor lookup**: prints the company registered for a MAC address
//! - **Verbose mode**: `--verbose` prints every field the service returns
//! - **Multiple output formats**: plain text, JSON, YAML
//! - **Config file**: API key and defaults in `config.toml`

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
