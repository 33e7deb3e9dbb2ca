//! Catalog data model

use serde::{Deserialize, Serialize};

/// One catalog entry. The catalog is immutable for the life of the
/// process; `id` is the stable render key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}
