//! Deck Prices - MTG deck list valuation
//!
//! Parses a deck list, prices every card with a single batched Scryfall
//! search and caches the raw response so identical decks never hit the
//! network twice.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod reconcile;

// Re-export commonly used items
pub use api::{decode_search_response, PriceSource, ScryfallClient};
pub use cache::{fetch_cached, QueryFingerprint, ResponseCache};
pub use config::Config;
pub use error::{PriceError, Result};
pub use formatters::format_report;
pub use io::{parse_deck, read_deck};
pub use models::{Deck, DeckEntry, PricedCard};
pub use pipeline::{price_deck_file, resolve_prices};
pub use query::{build_query, SearchQuery, PRICEABLE_MAX_QUANTITY};
pub use reconcile::apply_prices;
