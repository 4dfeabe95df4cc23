//! Price lookup against the Scryfall search API

pub mod scryfall;

pub use scryfall::{
    decode_search_response, PriceSource, ScryfallClient, ScryfallError, ScryfallPrices,
    ScryfallSearchCard, ScryfallSearchResponse,
};
