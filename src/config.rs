//! Configuration types for the storefront results page.
//!
//! The [`Config`] struct describes everything the page needs to know about
//! the external search pipeline and how results are presented:
//! - Pipeline identity (account, collection, pipeline name)
//! - Field dictionary mapping view roles to backend fields
//! - The category list filter
//! - View formatting policy (currency symbol, placeholders, buy phrase)
//!
//! # Example
//! ```rust
//! use storefront::{Config, PipelineConfig};
//!
//! // Use defaults (the bestbuy demo collection)
//! let config = Config::default();
//!
//! // Point at another collection
//! let config = Config {
//!     pipeline: PipelineConfig {
//!         collection: "outdoor-gear".to_string(),
//!         ..Default::default()
//!     },
//!     results_per_page: 48,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, StorefrontError, ValidationError};

/// Upper bound on `results_per_page`, matching what the pipeline accepts.
pub const MAX_RESULTS_PER_PAGE: usize = 100;

/// Marker used as the image URL when a result has no image.
///
/// A 1x1 transparent GIF, so an image element still loads successfully and
/// the marker can't be confused with an empty URL sent by the backend.
pub const EMPTY_IMAGE: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Storefront page configuration.
///
/// All fields have sensible defaults. Use struct update syntax to override
/// specific settings:
///
/// ```rust
/// use storefront::Config;
///
/// let config = Config {
///     results_per_page: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which pipeline serves the searches.
    pub pipeline: PipelineConfig,

    /// Backend field names for each role on the result card.
    pub fields: FieldDictionary,

    /// The category list filter shown next to the results.
    pub category_filter: FilterConfig,

    /// How view records are formatted.
    pub view: ViewConfig,

    /// Results requested per page.
    ///
    /// Default: 20
    pub results_per_page: usize,

    /// Whether an empty query is sent as soon as the page loads.
    ///
    /// Read by `ResultsPage::initial_request()`.
    pub search_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            fields: FieldDictionary::default(),
            category_filter: FilterConfig::default(),
            view: ViewConfig::default(),
            results_per_page: 20,
            search_on_load: true,
        }
    }
}

impl Config {
    /// Creates a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a Config from a JSON document.
    ///
    /// Missing keys fall back to their defaults. The parsed config is
    /// validated before it is returned.
    ///
    /// # Example
    /// ```rust
    /// use storefront::Config;
    ///
    /// let config = Config::from_json_str(r#"{ "results_per_page": 12 }"#).unwrap();
    /// assert_eq!(config.results_per_page, 12);
    /// assert_eq!(config.pipeline.collection, "bestbuy");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// Returns `StorefrontError::Io` if the file can't be read,
    /// `StorefrontError::Config` if it is empty, `StorefrontError::Json`
    /// if it isn't valid JSON, and `StorefrontError::Validation` if the
    /// values are out of range.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        if contents.trim().is_empty() {
            return Err(StorefrontError::config("config file is empty"));
        }

        let config = Self::from_json_str(&contents)?;
        debug!(
            collection = %config.pipeline.collection,
            results_per_page = config.results_per_page,
            "Config loaded"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Called automatically by `ResultsPage::new()` and the JSON loaders.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - Any pipeline, field dictionary, or filter name is empty
    /// - The currency symbol or buy phrase is empty
    /// - `results_per_page` is 0 or greater than [`MAX_RESULTS_PER_PAGE`]
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let required = [
            ("pipeline.account", &self.pipeline.account),
            ("pipeline.collection", &self.pipeline.collection),
            ("pipeline.name", &self.pipeline.name),
            ("fields.title", &self.fields.title),
            ("fields.subtitle", &self.fields.subtitle),
            ("fields.price", &self.fields.price),
            ("fields.image", &self.fields.image),
            ("category_filter.name", &self.category_filter.name),
            ("category_filter.field", &self.category_filter.field),
            ("view.currency_symbol", &self.view.currency_symbol),
            ("view.buy_phrase", &self.view.buy_phrase),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::required_field(field));
            }
        }

        if self.results_per_page == 0 {
            return Err(ValidationError::invalid_field(
                "results_per_page",
                "must be greater than 0",
            ));
        }
        if self.results_per_page > MAX_RESULTS_PER_PAGE {
            return Err(ValidationError::invalid_field(
                "results_per_page",
                format!(
                    "must not exceed {}, got {}",
                    MAX_RESULTS_PER_PAGE, self.results_per_page
                ),
            ));
        }

        Ok(())
    }
}

/// Identity of the search pipeline that serves results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Account the collection belongs to.
    pub account: String,
    /// Collection of indexed products.
    pub collection: String,
    /// Name of the query pipeline.
    pub name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            account: "1594153711901724220".to_string(),
            collection: "bestbuy".to_string(),
            name: "query".to_string(),
        }
    }
}

/// Maps result card roles to backend field names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDictionary {
    /// Field shown as the product name.
    pub title: String,
    /// Field shown as the brand line under the name.
    pub subtitle: String,
    /// Field holding the product price.
    pub price: String,
    /// Field holding the product image URL.
    pub image: String,
}

impl Default for FieldDictionary {
    fn default() -> Self {
        Self {
            title: "name".to_string(),
            subtitle: "brand".to_string(),
            price: "price".to_string(),
            image: "image".to_string(),
        }
    }
}

/// A list filter over one backend field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Name the filter is registered under.
    pub name: String,
    /// Backend field the filter matches on.
    pub field: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            name: "category".to_string(),
            field: "level1".to_string(),
        }
    }
}

/// Formatting policy for result views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Symbol placed before every formatted price.
    pub currency_symbol: String,
    /// Text shown when a price is missing or invalid.
    pub price_placeholder: String,
    /// Image URL used when a result has no image.
    pub image_placeholder: String,
    /// Phrase the buy button label starts with.
    pub buy_phrase: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            price_placeholder: "N/A".to_string(),
            image_placeholder: EMPTY_IMAGE.to_string(),
            buy_phrase: "Buy now for ".to_string(),
        }
    }
}
