//! Price resolution pipeline
//!
//! Parse, build the query, fetch through the cache, decode and reconcile.
//! The stages run once, in order; the first error ends the run.

use crate::api::{decode_search_response, PriceSource, ScryfallClient};
use crate::cache::{fetch_cached, ResponseCache};
use crate::config::Config;
use crate::error::Result;
use crate::io::read_deck;
use crate::models::Deck;
use crate::query::build_query;
use crate::reconcile::apply_prices;
use std::path::Path;

/// Resolve prices for every priceable entry of `deck` in place.
///
/// Returns the number of search results matched to deck entries. A deck
/// without priceable entries resolves to zero matches without touching the
/// cache or the network.
pub fn resolve_prices(
    deck: &mut Deck,
    config: &Config,
    cache: &ResponseCache,
    source: &dyn PriceSource,
) -> Result<usize> {
    let query = build_query(deck, &config.api_base_url);
    if query.is_empty() {
        log::info!("No priceable cards in deck, skipping price lookup");
        return Ok(0);
    }

    let bytes = fetch_cached(cache, &query, source)?;
    let prices = decode_search_response(&bytes)?;
    Ok(apply_prices(deck, &prices))
}

/// Read a deck file and price it against the configured Scryfall endpoint
pub fn price_deck_file(path: impl AsRef<Path>, config: &Config) -> Result<Deck> {
    let mut deck = read_deck(path)?;
    let cache = ResponseCache::new(config.cache_dir.clone());
    let client = ScryfallClient::new(config)?;

    resolve_prices(&mut deck, config, &cache, &client)?;
    Ok(deck)
}
