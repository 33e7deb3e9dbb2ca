//! View widgets: search section, product cards, theme.

pub mod product_card;
pub mod search_bar;
pub mod theme;
