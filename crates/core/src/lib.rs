//! Tuckshop
//!
//! Tuckshop is the domain core of a campus snack storefront: cart aggregation
//! and subtotals over a product catalog, plus the debounced-autosave state
//! machine behind free-text order suggestions. Everything here is pure and
//! sans-IO; persistence and network drivers live in the application crate.

pub mod cart;
pub mod fixtures;
pub mod products;
pub mod suggestions;
