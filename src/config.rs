use std::path::PathBuf;
use std::time::Duration;

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const USER_AGENT: &str = "Deck-Prices/0.1";

/// Runtime settings passed explicitly through the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme and host of the pricing API, without the search path
    pub api_base_url: String,
    /// Directory holding cached search responses
    pub cache_dir: PathBuf,
    pub user_agent: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: SCRYFALL_API_URL.to_string(),
            cache_dir: default_cache_dir(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Returns the default cache path: ~/.cache/deck_prices
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deck_prices")
}
