//! HTTP client for the macaddress.io vendor lookup API.
//!
//! This crate provides [`MacVendorClient`], the HTTP implementation of
//! [`macvendor_core::Resolver`].

#![doc(html_root_url = "https://docs.rs/macvendor-client/1.0.0")]

mod client;
pub mod api;

pub use client::{MacVendorClient, MacVendorClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use macvendor_core::{MacVendorError, Result};
