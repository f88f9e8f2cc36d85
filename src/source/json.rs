//! Decoding of pipeline responses.
//!
//! A pipeline response looks like:
//!
//! ```text
//! {
//!   "results": [
//!     { "values": { "name": "...", "brand": "...", "price": "...", "image": "..." } },
//!     ...
//!   ],
//!   ...
//! }
//! ```
//!
//! Everything below the top-level object is treated as best-effort: a
//! missing `results` array is an empty result set, and a result without a
//! `values` object still occupies its position as an all-absent record.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::FieldDictionary;
use crate::error::{Result, SourceError};
use crate::result::RawResult;
use crate::source::ResultSource;

/// Decodes the result set out of a pipeline response.
///
/// # Errors
///
/// Returns `SourceError::Malformed` if `response` is not a JSON object.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use storefront::{decode_response, FieldDictionary};
///
/// let response = json!({
///     "results": [
///         { "values": { "name": "Widget", "price": "9.99" } },
///         { "values": { "name": "Gadget" } },
///     ]
/// });
/// let results = decode_response(&response, &FieldDictionary::default()).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].price, Some(9.99));
/// ```
pub fn decode_response(response: &Value, fields: &FieldDictionary) -> Result<Vec<RawResult>> {
    let Some(body) = response.as_object() else {
        return Err(SourceError::malformed(format!(
            "expected a JSON object, got {}",
            kind(response)
        ))
        .into());
    };

    let results = match body.get("results") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.get("values")
                    .map(|values| RawResult::from_values(values, fields))
                    .unwrap_or_default()
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(results)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A result source backed by one decoded pipeline response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonSource {
    results: Vec<RawResult>,
}

impl JsonSource {
    /// Decodes `response` using the given field dictionary.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Malformed` if `response` is not a JSON object.
    #[instrument(skip(response, fields))]
    pub fn from_value(response: &Value, fields: &FieldDictionary) -> Result<Self> {
        let results = decode_response(response, fields)?;
        debug!(count = results.len(), "Pipeline response decoded");
        Ok(Self { results })
    }

    /// Parses and decodes a pipeline response body.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Json` if `body` isn't valid JSON, or
    /// `SourceError::Malformed` if it isn't a JSON object.
    pub fn from_json_str(body: &str, fields: &FieldDictionary) -> Result<Self> {
        let response: Value = serde_json::from_str(body)?;
        Self::from_value(&response, fields)
    }
}

impl ResultSource for JsonSource {
    fn current_results(&self) -> Result<Vec<RawResult>> {
        Ok(self.results.clone())
    }
}
