//! Caching layer for search responses

pub mod response_cache;

pub use response_cache::{fetch_cached, QueryFingerprint, ResponseCache};
