//! Catalog loading
//!
//! One-shot read of the product catalog (HTTP or local file), shape
//! validation, and the per-product image fetches that follow a
//! successful load. Loader failures stay on the diagnostic channel and
//! leave the catalog empty; there is no retry and no timeout.

use std::path::PathBuf;

use iced::widget::image;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use super::types::Product;

/// Where the catalog document lives.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Url(String),
    Path(PathBuf),
}

impl CatalogSource {
    /// Classify a location string: anything that is not http(s) is a
    /// file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Url(url) => write!(f, "{url}"),
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Why a load attempt produced no products. `Clone` because the error
/// rides back into the update loop inside a `Message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to fetch products: {0}")]
    Transport(String),
    #[error("failed to parse products: {0}")]
    Parse(String),
    #[error("invalid data format: expected an array under the \"products\" key")]
    InvalidFormat,
}

/// Fetch and validate the catalog document. Called exactly once, at boot.
pub async fn fetch_catalog(
    client: &Client,
    source: &CatalogSource,
) -> Result<Vec<Product>, LoadError> {
    let body = match source {
        CatalogSource::Url(url) => client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| LoadError::Transport(e.to_string()))?
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?,
        CatalogSource::Path(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?,
    };

    parse_catalog(&body)
}

/// Validate the document shape: a JSON object with an array under the
/// `products` key, every entry a well-formed product.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, LoadError> {
    let mut document: Value =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    match document.get_mut("products") {
        Some(products) if products.is_array() => {
            serde_json::from_value(products.take()).map_err(|_| LoadError::InvalidFormat)
        }
        _ => Err(LoadError::InvalidFormat),
    }
}

/// Fetch one remote product image. Failures are logged at debug level
/// and the card keeps its placeholder glyph.
pub async fn fetch_image(client: &Client, url: &str) -> Option<image::Handle> {
    let response = match client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
    {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("image fetch failed for {url}: {e}");
            return None;
        }
    };

    match response.bytes().await {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(e) => {
            tracing::debug!("image fetch failed for {url}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_document() {
        let body = r#"{ "products": [{"id":1,"name":"Widget","price":9.99,"category":"Tools","image":"w.png"}] }"#;
        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].category, "Tools");
    }

    #[test]
    fn test_empty_products_array_is_empty_catalog() {
        let products = parse_catalog(r#"{ "products": [] }"#).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_wrong_top_level_key_is_invalid_format() {
        match parse_catalog(r#"{ "items": [{"id":1}] }"#) {
            Err(LoadError::InvalidFormat) => {}
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_products_not_an_array_is_invalid_format() {
        match parse_catalog(r#"{ "products": {"id": 1} }"#) {
            Err(LoadError::InvalidFormat) => {}
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        match parse_catalog("{ not json") {
            Err(LoadError::Parse(_)) => {}
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_entry_rejects_document() {
        match parse_catalog(r#"{ "products": [{"id": "one"}] }"#) {
            Err(LoadError::InvalidFormat) => {}
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_source_classification() {
        match CatalogSource::parse("https://example.com/products.json") {
            CatalogSource::Url(url) => assert_eq!(url, "https://example.com/products.json"),
            other => panic!("Expected Url, got {:?}", other),
        }
        match CatalogSource::parse("data/products.json") {
            CatalogSource::Path(path) => assert_eq!(path, PathBuf::from("data/products.json")),
            other => panic!("Expected Path, got {:?}", other),
        }
    }
}
