//! macvendor - MAC address vendor lookup
//!
//! Resolves a MAC address to its vendor using the macaddress.io API.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    macvendor_cli::run().await
}
