//! Command implementations.

pub mod lookup;

use std::time::Duration;

use macvendor::MacVendorClient;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Print every result field
    pub verbose: bool,

    /// Highlight field names
    pub color: bool,

    /// API base URL
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,
}

impl Context {
    /// Create a macaddress.io client with the configured settings.
    pub fn client(&self) -> anyhow::Result<MacVendorClient> {
        Ok(MacVendorClient::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout)
            .build()?)
    }
}
