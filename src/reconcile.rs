use crate::models::{Deck, PricedCard};

/// Copy resolved prices onto deck entries with exactly the same name.
///
/// Names not in the deck are ignored. If a name appears more than once in
/// `prices`, the last occurrence wins. Returns the number of matched cards.
pub fn apply_prices(deck: &mut Deck, prices: &[PricedCard]) -> usize {
    let mut matched = 0;

    for priced in prices {
        match deck.get_mut(&priced.name) {
            Some(entry) => {
                entry.unit_price = priced.unit_price_usd;
                matched += 1;
            }
            None => log::debug!("Ignoring search result not in deck: {}", priced.name),
        }
    }

    log::info!("Matched {} of {} search results to the deck", matched, prices.len());
    matched
}
