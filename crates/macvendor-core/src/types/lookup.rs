use crate::{MacAddress, MacVendorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields that may carry the vendor name, in lookup order
const VENDOR_FIELDS: [&str; 3] = ["vendorName", "vendorDetails.companyName", "companyName"];

/// A validated lookup built from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    mac_address: MacAddress,
    api_key: String,
    verbose: bool,
}

impl LookupRequest {
    /// Create a request, rejecting an empty API key
    pub fn new(mac_address: MacAddress, api_key: impl Into<String>, verbose: bool) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MacVendorError::MissingApiKey);
        }

        Ok(Self {
            mac_address,
            api_key,
            verbose,
        })
    }

    /// The address to resolve
    #[must_use]
    pub const fn mac_address(&self) -> MacAddress {
        self.mac_address
    }

    /// API key used to authenticate the lookup
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether all result fields were requested
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Field name to value mapping returned by the vendor-resolution service
///
/// Nested objects are flattened into dotted keys (`vendorDetails.companyName`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResult {
    fields: BTreeMap<String, String>,
}

impl LookupResult {
    /// Build a result from a decoded JSON response body
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(MacVendorError::UnexpectedResponse(format!(
                "expected a JSON object, got: {value}"
            )));
        };

        let mut fields = BTreeMap::new();
        for (key, value) in map {
            flatten(key, value, &mut fields);
        }

        Ok(Self { fields })
    }

    /// Look up a single field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// The vendor name, if the service reported a non-empty one
    #[must_use]
    pub fn vendor_name(&self) -> Option<&str> {
        VENDOR_FIELDS
            .iter()
            .filter_map(|field| self.get(field))
            .map(str::trim)
            .find(|name| !name.is_empty())
    }

    /// The vendor name, or [`MacVendorError::VendorNotFound`]
    pub fn require_vendor(&self, mac: MacAddress) -> Result<&str> {
        self.vendor_name()
            .ok_or_else(|| MacVendorError::VendorNotFound(mac.to_string()))
    }

    /// All fields, sorted by name
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the service returned no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&format!("{prefix}.{key}"), value, out);
            }
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter(|item| !item.is_null())
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(", ");
            out.insert(prefix.to_string(), joined);
        }
        other => {
            out.insert(prefix.to_string(), scalar_text(other));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
