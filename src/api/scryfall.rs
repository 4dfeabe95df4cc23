use crate::config::Config;
use crate::error::{PriceError, Result};
use crate::models::PricedCard;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Scryfall search response (one page of a list object)
#[derive(Debug, Deserialize)]
pub struct ScryfallSearchResponse {
    pub data: Vec<ScryfallSearchCard>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub total_cards: Option<u64>,
}

/// The part of a Scryfall card object needed for pricing
#[derive(Debug, Deserialize)]
pub struct ScryfallSearchCard {
    pub name: String,
    #[serde(default)]
    pub prices: ScryfallPrices,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScryfallPrices {
    pub usd: Option<String>,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
pub struct ScryfallError {
    pub code: String,
    pub details: String,
}

/// Source of raw search responses.
///
/// Takes the complete query URL and returns the response body untouched, so
/// the body can be cached verbatim.
pub trait PriceSource {
    fn fetch(&self, query_url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP client for the Scryfall search endpoint
pub struct ScryfallClient {
    client: reqwest::blocking::Client,
}

impl ScryfallClient {
    pub fn new(config: &Config) -> Result<Self> {
        // `None` also lifts reqwest's default 30s limit
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PriceSource for ScryfallClient {
    fn fetch(&self, query_url: &str) -> Result<Vec<u8>> {
        log::info!("Fetching prices from Scryfall");
        log::debug!("GET {}", query_url);

        let response = self
            .client
            .get(query_url)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        let body = response.bytes()?;

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            let details = serde_json::from_slice::<ScryfallError>(&body)
                .ok()
                .map(|error| format!("{}: {}", error.code, error.details));
            Err(PriceError::HttpStatus { status, details })
        }
    }
}

/// Decode a raw search response into name/price pairs.
///
/// A null `usd` price means no price is available; a price string that is
/// not a decimal is a decode error.
pub fn decode_search_response(bytes: &[u8]) -> Result<Vec<PricedCard>> {
    let response: ScryfallSearchResponse = serde_json::from_slice(bytes)?;

    if response.has_more {
        log::warn!(
            "Search matched {} cards, only the first {} were priced",
            response
                .total_cards
                .map(|n| n.to_string())
                .unwrap_or_else(|| "more".to_string()),
            response.data.len()
        );
    }

    response
        .data
        .into_iter()
        .map(|card| {
            let unit_price_usd = match card.prices.usd {
                Some(value) => Some(Decimal::from_str(value.trim()).map_err(|_| {
                    PriceError::InvalidPrice {
                        name: card.name.clone(),
                        value: value.clone(),
                    }
                })?),
                None => None,
            };
            Ok(PricedCard {
                name: card.name,
                unit_price_usd,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
