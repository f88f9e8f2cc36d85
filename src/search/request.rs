//! Search request state.
//!
//! [`SearchRequest`] is the query, page, and filter selection the page
//! hands to the external pipeline whenever the shopper types, pages, or
//! clicks a filter. The pipeline owns retrieval; this type only knows how
//! to describe what to retrieve.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::search::filter::CategoryFilter;

/// Pipeline parameter carrying the query text.
pub const PARAM_QUERY: &str = "q";
/// Pipeline parameter carrying the page size.
pub const PARAM_RESULTS_PER_PAGE: &str = "resultsPerPage";
/// Pipeline parameter carrying the 1-based page number.
pub const PARAM_PAGE: &str = "page";
/// Pipeline parameter carrying the filter expression.
pub const PARAM_FILTER: &str = "filter";

/// The state of one search: query text, page, and selected category.
///
/// # Example
///
/// ```rust
/// use storefront::{Config, SearchRequest};
///
/// let mut request = SearchRequest::new(&Config::default()).with_query("usb cable");
/// request.next_page();
/// request.category_mut().select("Computers & Tablets");
///
/// let params = request.to_params();
/// assert_eq!(params["q"], "usb cable");
/// assert_eq!(params["page"], "2");
/// assert_eq!(params["filter"], r#"level1 = "Computers & Tablets""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    page: usize,
    results_per_page: usize,
    category: CategoryFilter,
}

impl SearchRequest {
    /// Creates an empty-query request for the first page.
    pub fn new(config: &Config) -> Self {
        Self {
            query: String::new(),
            page: 1,
            results_per_page: config.results_per_page,
            category: CategoryFilter::new(&config.category_filter),
        }
    }

    /// Replaces the query text and returns to the first page.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Replaces the query text and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Current query text.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page number.
    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Results requested per page.
    #[inline]
    pub fn results_per_page(&self) -> usize {
        self.results_per_page
    }

    /// Advances to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Goes back one page, stopping at the first.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jumps to `page`. Page 0 is treated as page 1.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The category filter selection.
    #[inline]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Mutable access to the category filter selection.
    ///
    /// Changing the filter does not reset the page; call
    /// [`go_to_page(1)`](Self::go_to_page) if the result set shrinks.
    #[inline]
    pub fn category_mut(&mut self) -> &mut CategoryFilter {
        &mut self.category
    }

    /// Renders the request into pipeline parameters.
    ///
    /// The filter parameter is present only while a category is selected.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(PARAM_QUERY.to_string(), self.query.clone());
        params.insert(
            PARAM_RESULTS_PER_PAGE.to_string(),
            self.results_per_page.to_string(),
        );
        params.insert(PARAM_PAGE.to_string(), self.page.to_string());
        if let Some(expression) = self.category.expression() {
            params.insert(PARAM_FILTER.to_string(), expression);
        }
        params
    }
}
