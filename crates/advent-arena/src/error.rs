//! Error types for the fetcher crate.

use thiserror::Error;

/// Errors from requesting a single page of a collection.
///
/// The accumulator never passes these on: any of them ends pagination and
/// the items gathered so far are returned.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request for page {page} failed: {message}")]
    Transport {
        /// Page that was requested.
        page: u32,
        /// Error message.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("page {page} returned HTTP {status}")]
    Status {
        /// Page that was requested.
        page: u32,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not a contents page.
    #[error("failed to parse page {page}: {message}")]
    Parse {
        /// Page that was requested.
        page: u32,
        /// Error message.
        message: String,
    },

    /// The collection URL could not be built.
    #[error("invalid collection URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
