//! The storefront results page.
//!
//! [`ResultsPage`] ties the pieces together. It owns a validated
//! [`Config`], a [`ResultViewModelBuilder`] made from the config's view
//! policy, and the upstream [`ResultSource`]. Each call to
//! [`render`](ResultsPage::render) is one rendering pass: read the current
//! result set, build fresh views, hand them back.
//!
//! # Quick Start
//!
//! ```rust
//! use storefront::{Config, RawResult, ResultsPage, StaticSource};
//!
//! let source = StaticSource::new(vec![RawResult {
//!     name: Some("Widget".to_string()),
//!     brand: Some("Acme".to_string()),
//!     price: Some(9.99),
//!     image: Some("http://x/w.png".to_string()),
//! }]);
//!
//! let page = ResultsPage::new(Config::default(), source).unwrap();
//! let views = page.render().unwrap();
//! assert_eq!(views[0].buy_label, "Buy now for $9.99");
//! ```
//!
//! # Thread Safety
//!
//! `ResultsPage` is `Send + Sync` and can be shared across threads using
//! `Arc`. Rendering takes `&self` and keeps no state between passes.

use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{Result, StorefrontError};
use crate::result::{RawResult, ResultView, ResultViewModelBuilder};
use crate::search::SearchRequest;
use crate::source::ResultSource;

/// A results page over one upstream result source.
pub struct ResultsPage {
    /// Upstream result source (pipeline client, shared set, or fixture).
    source: Box<dyn ResultSource>,

    /// View builder made from `config.view`.
    builder: ResultViewModelBuilder,

    /// Configuration the page was created with.
    config: Config,
}

impl std::fmt::Debug for ResultsPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultsPage")
            .field("config", &self.config)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl ResultsPage {
    /// Creates a page over `source`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` if the configuration is invalid
    /// (see [`Config::validate`]).
    #[instrument(skip_all, fields(collection = %config.pipeline.collection))]
    pub fn new(config: Config, source: impl ResultSource + 'static) -> Result<Self> {
        config.validate().map_err(StorefrontError::from)?;

        let builder = ResultViewModelBuilder::new(config.view.clone());

        info!(
            account = %config.pipeline.account,
            pipeline = %config.pipeline.name,
            results_per_page = config.results_per_page,
            "Results page created"
        );

        Ok(Self {
            source: Box::new(source),
            builder,
            config,
        })
    }

    /// Runs one rendering pass over the source's current result set.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Source` if the source can't be read.
    /// Building the views themselves never fails.
    #[instrument(skip(self))]
    pub fn render(&self) -> Result<Vec<ResultView>> {
        let results = self.source.current_results()?;
        let views = self.builder.build(&results);
        debug!(count = views.len(), "Rendered result views");
        Ok(views)
    }

    /// Builds views for `results` without consulting the source.
    pub fn render_from(&self, results: &[RawResult]) -> Vec<ResultView> {
        self.builder.build(results)
    }

    /// Creates a fresh search request using this page's configuration.
    pub fn request(&self) -> SearchRequest {
        SearchRequest::new(&self.config)
    }

    /// Returns the request to send when the page loads, if any.
    ///
    /// `Some` with an empty-query first-page request when
    /// `config.search_on_load` is set, `None` otherwise.
    pub fn initial_request(&self) -> Option<SearchRequest> {
        self.config.search_on_load.then(|| self.request())
    }

    /// Returns a reference to the page configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the view builder.
    #[inline]
    pub fn builder(&self) -> &ResultViewModelBuilder {
        &self.builder
    }
}

// ResultsPage is auto Send + Sync: Box<dyn ResultSource> requires
// Send + Sync, and Config and the builder are plain data.
