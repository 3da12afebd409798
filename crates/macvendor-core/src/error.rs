use std::time::Duration;
use thiserror::Error;

/// Result type alias for macvendor operations
pub type Result<T> = std::result::Result<T, MacVendorError>;

/// Errors that can occur while resolving a MAC address
#[derive(Error, Debug)]
pub enum MacVendorError {
    /// MAC address is not in `XX:XX:XX:XX:XX:XX` form
    #[error(
        "invalid MAC address '{0}': expected XX:XX:XX:XX:XX:XX where X is a hexadecimal digit"
    )]
    InvalidMac(String),

    /// No API key was supplied
    #[error("API key is missing or empty")]
    MissingApiKey,

    /// Authentication failed - invalid key or access denied
    #[error("access denied ({code}): {reason}")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        code: u16,
        /// Reason reported by the service
        reason: String,
    },

    /// The account has run out of lookup credits
    #[error("insufficient credits: {reason}")]
    InsufficientCredits {
        /// Reason reported by the service
        reason: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded: {reason}")]
    RateLimited {
        /// Reason reported by the service
        reason: String,
    },

    /// API returned any other error response
    #[error("API error ({code}): {reason}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Reason reported by the service
        reason: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body parsed but did not have the expected shape
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The service knows no vendor for this address
    #[error("no vendor found for MAC address {0}")]
    VendorNotFound(String),
}

impl MacVendorError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns true if the error was raised before any request was sent
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidMac(_) | Self::MissingApiKey)
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { code, .. } | Self::Api { code, .. } => Some(*code),
            Self::InsufficientCredits { .. } => Some(402),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}
