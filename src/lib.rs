//! # Storefront Results
//!
//! Search results view models for storefront pages backed by an external
//! search pipeline.
//!
//! The pipeline does all retrieval, paging, and filtering. This crate turns
//! whatever it returns into display-ready result cards (name, brand, price,
//! image, and a buy button label) without ever failing on partial records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::{Config, JsonSource, ResultsPage};
//!
//! // Load page configuration
//! let config = Config::from_file("./storefront.json")?;
//!
//! // Decode the latest pipeline response
//! let source = JsonSource::from_json_str(&response_body, &config.fields)?;
//!
//! // Build the result cards
//! let page = ResultsPage::new(config, source)?;
//! for view in page.render()? {
//!     println!("{} by {}: {}", view.display_name, view.display_brand, view.buy_label);
//! }
//! ```
//!
//! ## Key Concepts
//!
//! ### Raw results and views
//!
//! A [`RawResult`] is one pipeline record with every field optional. A
//! [`ResultView`] is its display-ready projection with every field present.
//! [`ResultViewModelBuilder::build`] maps one sequence to the other,
//! keeping length and order.
//!
//! ### Result sources
//!
//! The pipeline is reached only through [`ResultSource`], a synchronous
//! read of the current result set. [`result_feed`] offers the push-style
//! alternative: each published result set is built once.
//!
//! ### Search requests
//!
//! [`SearchRequest`] carries the query, page, and [`CategoryFilter`]
//! selection, and renders them into pipeline parameters.
//!
//! ## Thread Safety
//!
//! [`ResultsPage`], [`ResultViewModelBuilder`], and every shipped source
//! are `Send + Sync`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod page;

// Domain modules
mod result;
mod search;
mod source;

// ============================================================================
// Public API re-exports
// ============================================================================

// Main page interface
pub use page::ResultsPage;

// Configuration
pub use config::{
    Config, FieldDictionary, FilterConfig, PipelineConfig, ViewConfig, EMPTY_IMAGE,
    MAX_RESULTS_PER_PAGE,
};

// Error handling
pub use error::{Result, SourceError, StorefrontError, ValidationError};

// Results
pub use result::{RawResult, ResultView, ResultViewModelBuilder};

// Search
pub use search::{
    CategoryFilter, SearchRequest, PARAM_FILTER, PARAM_PAGE, PARAM_QUERY, PARAM_RESULTS_PER_PAGE,
};

// Sources
pub use source::{
    decode_response, result_feed, JsonSource, ResultFeed, ResultPublisher, ResultSource,
    SharedSource, StaticSource,
};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common storefront usage.
///
/// ```rust
/// use storefront::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Result, StorefrontError};
    pub use crate::page::ResultsPage;
    pub use crate::result::{RawResult, ResultView, ResultViewModelBuilder};
    pub use crate::search::SearchRequest;
    pub use crate::source::{ResultSource, StaticSource};
}
