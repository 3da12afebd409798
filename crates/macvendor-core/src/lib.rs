//! Core types and traits for MAC address vendor lookups.
//!
//! This crate provides the foundational types used across the macvendor crates:
//!
//! - **Types**: [`MacAddress`], [`LookupRequest`] and [`LookupResult`]
//! - **Errors**: Comprehensive error handling with [`MacVendorError`]
//! - **Resolver**: the [`Resolver`] trait implemented by lookup back ends
//!
//! # Example
//!
//! ```rust,ignore
//! use macvendor_core::{LookupRequest, Resolver, Result};
//!
//! async fn print_vendor(resolver: &impl Resolver, request: &LookupRequest) -> Result<()> {
//!     let result = resolver.resolve(request).await?;
//!     println!("{}", result.require_vendor(request.mac_address())?);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/macvendor-core/1.0.0")]

mod error;
mod resolver;
pub mod types;

pub use error::{MacVendorError, Result};
pub use resolver::Resolver;
pub use types::*;
