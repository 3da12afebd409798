//! Vendor lookup endpoint.

use crate::MacVendorClient;
use macvendor_core::{LookupRequest, LookupResult, MacAddress, Result};
use serde_json::{json, Value};

/// Path of the lookup endpoint, relative to the base URL
const LOOKUP_PATH: &str = "/v1";

/// Response representation requested from the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputType {
    /// Full JSON document with vendor, block and address details
    #[default]
    Json,
    /// Plain-text body holding only the vendor name
    Vendor,
}

impl OutputType {
    /// Value of the `output` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Vendor => "vendor",
        }
    }
}

/// Vendor lookup endpoint
pub struct LookupApi<'a> {
    client: &'a MacVendorClient,
}

impl<'a> LookupApi<'a> {
    pub(crate) const fn new(client: &'a MacVendorClient) -> Self {
        Self { client }
    }

    /// Resolve a request with full details
    pub async fn resolve(&self, request: &LookupRequest) -> Result<LookupResult> {
        self.mac(request).send().await
    }

    /// Start a lookup with custom options
    #[must_use]
    pub fn mac(&self, request: &LookupRequest) -> LookupRequestBuilder<'a> {
        LookupRequestBuilder::new(self.client, request)
    }
}

/// Builder for a single lookup call
pub struct LookupRequestBuilder<'a> {
    client: &'a MacVendorClient,
    mac: MacAddress,
    api_key: String,
    output: OutputType,
}

impl<'a> LookupRequestBuilder<'a> {
    fn new(client: &'a MacVendorClient, request: &LookupRequest) -> Self {
        Self {
            client,
            mac: request.mac_address(),
            api_key: request.api_key().to_string(),
            output: OutputType::default(),
        }
    }

    /// Select the response representation
    #[must_use]
    pub const fn output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<LookupResult> {
        let mac = self.mac.to_string();
        let params = [("search", mac.as_str()), ("output", self.output.as_str())];

        match self.output {
            OutputType::Json => {
                let body: Value = self
                    .client
                    .get_with_query(LOOKUP_PATH, &self.api_key, &params)
                    .await?;
                LookupResult::from_json(&body)
            }
            OutputType::Vendor => {
                let body = self
                    .client
                    .get_text(LOOKUP_PATH, &self.api_key, &params)
                    .await?;
                LookupResult::from_json(&json!({ "vendorName": body.trim() }))
            }
        }
    }
}
