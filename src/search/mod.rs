//! Search request state for the storefront page.
//!
//! This module describes what the page asks the external pipeline for:
//! query text, paging, and the category filter selection.

mod filter;
mod request;

pub use filter::CategoryFilter;
pub use request::{SearchRequest, PARAM_FILTER, PARAM_PAGE, PARAM_QUERY, PARAM_RESULTS_PER_PAGE};
