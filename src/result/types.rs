//! Type definitions for search results.
//!
//! # Type Flow
//!
//! ```text
//! pipeline response ("values" bag, untyped JSON)
//!     ↓ RawResult::from_values()
//! RawResult (every field optional)
//!     ↓ ResultViewModelBuilder::build()
//! ResultView (every field present and displayable)
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::config::FieldDictionary;

// ============================================================================
// RawResult: one matched item as delivered by the backend
// ============================================================================

/// A search result as delivered by the upstream pipeline.
///
/// Backend records are best-effort: any field may be missing, empty, or of
/// the wrong type. `RawResult` keeps only what could be read, and leaves the
/// fallback policy to [`ResultViewModelBuilder`](super::ResultViewModelBuilder).
///
/// Results carry no identifier that is unique across a result set; their
/// position in the sequence is the only ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawResult {
    /// Product name, if the backend sent text.
    pub name: Option<String>,

    /// Brand, if the backend sent text.
    pub brand: Option<String>,

    /// Price, if the backend sent a number or numeric text.
    ///
    /// May still be negative or non-finite; the builder rejects those.
    pub price: Option<f64>,

    /// Image URL, if the backend sent text.
    pub image: Option<String>,
}

impl RawResult {
    /// Creates a result with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Reads a result out of a pipeline `values` object.
    ///
    /// Field names come from the [`FieldDictionary`]. This never fails:
    /// a non-object `values` yields an all-absent result, text fields only
    /// accept JSON strings, and the price accepts JSON numbers or strings
    /// that parse as a number.
    ///
    /// # Example
    /// ```rust
    /// use serde_json::json;
    /// use storefront::{FieldDictionary, RawResult};
    ///
    /// let values = json!({ "name": "Widget", "price": "9.99", "brand": 7 });
    /// let raw = RawResult::from_values(&values, &FieldDictionary::default());
    /// assert_eq!(raw.name.as_deref(), Some("Widget"));
    /// assert_eq!(raw.price, Some(9.99));
    /// assert_eq!(raw.brand, None);
    /// ```
    pub fn from_values(values: &Value, fields: &FieldDictionary) -> Self {
        let Some(map) = values.as_object() else {
            return Self::default();
        };

        Self {
            name: map.get(&fields.title).and_then(text_value),
            brand: map.get(&fields.subtitle).and_then(text_value),
            price: map.get(&fields.price).and_then(numeric_value),
            image: map.get(&fields.image).and_then(text_value),
        }
    }
}

fn text_value(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// ============================================================================
// ResultView: the display-ready projection
// ============================================================================

/// Display-ready projection of a [`RawResult`].
///
/// Every field is always present and safe to show, so the presentation
/// layer never has to branch on missing data. Views are rebuilt on every
/// rendering pass and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ResultView {
    /// Product name, or `""`.
    pub display_name: String,

    /// Brand line, or `""`.
    pub display_brand: String,

    /// Currency-prefixed price with two fraction digits, or the placeholder.
    pub display_price: String,

    /// Image URL, or the image placeholder.
    pub image_url: String,

    /// Buy button label: the buy phrase followed by `display_price`.
    pub buy_label: String,
}
