//! Error types for deck_prices

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the pricing pipeline.
///
/// Every variant is fatal to the run; nothing is retried or downgraded.
#[derive(Debug, Error)]
pub enum PriceError {
    /// Deck line is not `<quantity> <name>`
    #[error("Invalid deck line {line_number}: {line:?}")]
    Format { line_number: usize, line: String },

    /// Deck file missing or unreadable
    #[error("Failed to read deck file {}: {source}", .path.display())]
    ReadDeck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cached response exists but could not be read
    #[error("Failed to read cached response {}: {source}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetched response could not be persisted
    #[error("Failed to write cached response {}: {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed (connection, TLS, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("HTTP error: {status}{}", detail_suffix(.details))]
    HttpStatus {
        status: reqwest::StatusCode,
        details: Option<String>,
    },

    /// Response body does not match the search schema
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Price field is present but not a decimal
    #[error("Invalid price {value:?} for {name}")]
    InvalidPrice { name: String, value: String },
}

impl PriceError {
    /// Process exit status for this error. Status 1 is reserved for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            PriceError::ReadDeck { .. } => 2,
            _ => 3,
        }
    }
}

fn detail_suffix(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

/// Result alias for deck_prices operations
pub type Result<T> = std::result::Result<T, PriceError>;
