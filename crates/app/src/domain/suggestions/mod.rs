//! Order suggestion autosave.

mod controller;
mod errors;
mod rest;
mod service;

pub use controller::AutosaveController;
pub use errors::SuggestionsApiError;
pub use rest::RestSuggestionsApi;
pub use service::{MockSuggestionsApi, SuggestionsApi};
