//! Cart persistence.

mod service;

pub use service::{CartsService, KvCartsService, MockCartsService};
