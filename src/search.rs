//! Product name search
//!
//! Pure filtering over the in-memory catalog. Runs only on explicit
//! trigger, never on keystroke.

use crate::catalog::types::Product;

/// The one failure shown to the user; loader errors never are.
pub const NO_MATCH_MESSAGE: &str = "No product found with the given name.";

/// Case-insensitive substring match on the product name. The empty
/// query matches everything; no trimming, no tokenization, catalog
/// order preserved.
pub fn filter_products(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 10.0,
            category: "Misc".to_string(),
            image: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Laptop Stand"),
            product(2, "USB-C Cable"),
            product(3, "Desk Lamp"),
            product(4, "laptop sleeve"),
        ]
    }

    #[test]
    fn test_case_insensitive_substring() {
        let results = filter_products(&catalog(), "LAPTOP");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[1].id, 4);
    }

    #[test]
    fn test_matches_mid_word() {
        let results = filter_products(&catalog(), "amp");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Desk Lamp");
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let ids: Vec<u32> = filter_products(&catalog(), "")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        assert!(filter_products(&[], "laptop").is_empty());
        assert!(filter_products(&[], "").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        assert!(filter_products(&catalog(), " laptop").is_empty());
    }
}
