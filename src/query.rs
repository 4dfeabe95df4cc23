use crate::models::Deck;

/// Entries with more copies than this are assumed to be basic lands and never priced
pub const PRICEABLE_MAX_QUANTITY: u32 = 4;

/// Path and parameter of the Scryfall full-text search endpoint
pub const SEARCH_PATH: &str = "/cards/search?q=";

/// Disjunction operator between card names, already in query-string form
pub const OR_OPERATOR: &str = "+OR+";

/// A fully built batched search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    url: String,
    card_count: usize,
}

impl SearchQuery {
    /// Complete request URL; also the input of the cache fingerprint
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of card names in the disjunction
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }
}

/// Whether an entry with this quantity takes part in price lookup
pub fn is_priceable(quantity: u32) -> bool {
    quantity <= PRICEABLE_MAX_QUANTITY
}

/// Build one search request covering every priceable entry of the deck.
///
/// Names are percent-encoded and sorted so the same deck always produces the
/// same URL, whatever the map order.
pub fn build_query(deck: &Deck, api_base_url: &str) -> SearchQuery {
    let mut names: Vec<String> = deck
        .entries()
        .filter(|entry| is_priceable(entry.quantity))
        .map(|entry| urlencoding::encode(&entry.name).into_owned())
        .collect();
    names.sort();

    let url = format!(
        "{}{}{}",
        api_base_url.trim_end_matches('/'),
        SEARCH_PATH,
        names.join(OR_OPERATOR)
    );

    log::debug!("Built search query for {} cards: {}", names.len(), url);
    SearchQuery {
        url,
        card_count: names.len(),
    }
}
