//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages for
//! the one networked operation in the system, the manifest fetch. Every
//! variant is recovered locally by substituting the fallback manifest;
//! none of them is fatal to the running page.

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (offline, CORS, DNS, etc.)
    Network(String),
    /// HTTP error response (non-2xx status)
    Http(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParse(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
