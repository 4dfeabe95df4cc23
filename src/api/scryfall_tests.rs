//! Tests for the Scryfall search client and response decoding.

use std::str::FromStr;

use rust_decimal::Decimal;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{decode_search_response, PriceSource, ScryfallClient};
use crate::config::Config;
use crate::error::PriceError;

fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        cache_dir: std::env::temp_dir(),
        user_agent: "Deck-Prices-Test/1.0".to_string(),
        timeout: Some(std::time::Duration::from_secs(10)),
    }
}

/// Helper: a minimal search list with the given (name, usd) pairs.
fn search_json(cards: &[(&str, Option<&str>)]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = cards
        .iter()
        .map(|(name, usd)| {
            serde_json::json!({
                "object": "card",
                "name": name,
                "prices": { "usd": usd, "usd_foil": null, "eur": "1.00" }
            })
        })
        .collect();
    serde_json::json!({
        "object": "list",
        "total_cards": cards.len(),
        "has_more": false,
        "data": data
    })
}

// ── ScryfallClient::fetch ────────────────────────────────────────────

#[tokio::test]
async fn fetch_returns_raw_body() {
    let mock_server = MockServer::start().await;
    let body = search_json(&[("Black Lotus", Some("5000.00"))]);

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", "Black Lotus"))
        .and(header("user-agent", "Deck-Prices-Test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = ScryfallClient::new(&test_config(&base_url))?;
        client.fetch(&format!("{}/cards/search?q=Black%20Lotus", base_url))
    })
    .await
    .unwrap();

    let bytes = result.unwrap();
    let decoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(decoded, body);
}

#[tokio::test]
async fn fetch_error_status_includes_scryfall_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "object": "error",
            "status": 404,
            "code": "not_found",
            "details": "Your query didn't match any cards."
        })))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = ScryfallClient::new(&test_config(&base_url))?;
        client.fetch(&format!("{}/cards/search?q=Nonexistent", base_url))
    })
    .await
    .unwrap();

    match result {
        Err(PriceError::HttpStatus { status, details }) => {
            assert_eq!(status.as_u16(), 404);
            let details = details.unwrap();
            assert!(details.starts_with("not_found"));
            assert!(details.contains("didn't match"));
        }
        other => panic!("Expected PriceError::HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_error_status_without_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = ScryfallClient::new(&test_config(&base_url))?;
        client.fetch(&format!("{}/cards/search?q=Opt", base_url))
    })
    .await
    .unwrap();

    match result {
        Err(PriceError::HttpStatus { status, details }) => {
            assert_eq!(status.as_u16(), 503);
            assert!(details.is_none());
        }
        other => panic!("Expected PriceError::HttpStatus, got: {other:?}"),
    }
}

// ── decode_search_response ───────────────────────────────────────────

#[test]
fn decode_prices_as_decimals() {
    let body = search_json(&[("Black Lotus", Some("5000.00")), ("Opt", Some("0.10"))]);
    let cards = decode_search_response(body.to_string().as_bytes()).unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Black Lotus");
    assert_eq!(
        cards[0].unit_price_usd,
        Some(Decimal::from_str("5000.00").unwrap())
    );
    assert_eq!(cards[1].unit_price_usd, Some(Decimal::from_str("0.10").unwrap()));
}

#[test]
fn decode_null_price_is_absent() {
    let body = search_json(&[("Alpha Tester Card", None)]);
    let cards = decode_search_response(body.to_string().as_bytes()).unwrap();

    assert_eq!(cards.len(), 1);
    assert!(cards[0].unit_price_usd.is_none());
}

#[test]
fn decode_missing_prices_object_is_absent() {
    let body = r#"{"object":"list","has_more":false,"data":[{"name":"Opt"}]}"#;
    let cards = decode_search_response(body.as_bytes()).unwrap();
    assert!(cards[0].unit_price_usd.is_none());
}

#[test]
fn decode_empty_list() {
    let body = search_json(&[]);
    let cards = decode_search_response(body.to_string().as_bytes()).unwrap();
    assert!(cards.is_empty());
}

#[test]
fn decode_tolerates_more_pages() {
    let body = r#"{"object":"list","total_cards":300,"has_more":true,"next_page":"https://example.com/2","data":[{"name":"Opt","prices":{"usd":"0.10"}}]}"#;
    let cards = decode_search_response(body.as_bytes()).unwrap();
    assert_eq!(cards.len(), 1);
}

#[test]
fn decode_malformed_structure_fails() {
    let result = decode_search_response(br#"{"object":"list","data":"oops"}"#);
    assert!(matches!(result, Err(PriceError::Decode(_))));

    let result = decode_search_response(b"<html>not json</html>");
    assert!(matches!(result, Err(PriceError::Decode(_))));
}

#[test]
fn decode_non_numeric_price_fails() {
    let body = search_json(&[("Opt", Some("cheap"))]);
    match decode_search_response(body.to_string().as_bytes()) {
        Err(PriceError::InvalidPrice { name, value }) => {
            assert_eq!(name, "Opt");
            assert_eq!(value, "cheap");
        }
        other => panic!("Expected PriceError::InvalidPrice, got: {other:?}"),
    }
}
