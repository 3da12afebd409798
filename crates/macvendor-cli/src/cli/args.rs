//! Command-line argument definitions using clap.

use clap::Parser;

use crate::output::OutputFormat;

/// Resolve a MAC address to its vendor
///
/// Queries the macaddress.io API and prints the company registered for the
/// address.
///
/// Get your API key at: https://macaddress.io
#[derive(Parser, Debug)]
#[command(name = "macvendor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MAC address to be resolved
    #[arg(short, long, value_name = "XX:XX:XX:XX:XX:XX")]
    pub mac: String,

    /// API key to authenticate your macaddress.io account
    #[arg(short = 'k', long, env = "MACADDRESS_IO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print detailed info, not only the vendor company
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Override the API base URL
    #[arg(long, env = "MACVENDOR_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}
