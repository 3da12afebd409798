//! Resolve MAC addresses to their vendor through the macaddress.io API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use macvendor::{LookupRequest, MacVendorClient, Resolver};
//!
//! #[tokio::main]
//! async fn main() -> macvendor::Result<()> {
//!     let client = MacVendorClient::new()?;
//!     let request = LookupRequest::new("00:1A:2B:3C:4D:5E".parse()?, "your-api-key", false)?;
//!
//!     let result = client.resolve(&request).await?;
//!     println!("Vendor: {:?}", result.vendor_name());
//!
//!     for (field, value) in result.fields() {
//!         println!("{field}: {value}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/macvendor/1.0.0")]

// Re-export core types
pub use macvendor_core::*;

// Re-export client
pub use macvendor_client::api;
pub use macvendor_client::{MacVendorClient, MacVendorClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
