//! The category list filter.
//!
//! [`CategoryFilter`] tracks which values of the configured filter field
//! the shopper has selected, and renders them into the filter expression
//! the search pipeline evaluates. Matching happens in the backend; this
//! type only carries the selection.

use crate::config::FilterConfig;

/// Selection state for a list filter over one backend field.
///
/// Selected values keep the order they were chosen in, so the rendered
/// expression is stable for a given sequence of clicks.
///
/// # Example
///
/// ```rust
/// use storefront::{CategoryFilter, FilterConfig};
///
/// let mut filter = CategoryFilter::new(&FilterConfig::default());
/// filter.toggle("Laptops");
/// filter.toggle("Tablets");
/// assert_eq!(
///     filter.expression().as_deref(),
///     Some(r#"level1 = "Laptops" OR level1 = "Tablets""#)
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    name: String,
    field: String,
    selected: Vec<String>,
}

impl CategoryFilter {
    /// Creates an empty filter from its configuration.
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            name: config.name.clone(),
            field: config.field.clone(),
            selected: Vec::new(),
        }
    }

    /// Name the filter is registered under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend field the filter matches on.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Selected values, in selection order.
    #[inline]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns true if at least one value is selected.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns true if `value` is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Selects `value`. Selecting an already selected value is a no-op.
    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.is_selected(&value) {
            self.selected.push(value);
        }
    }

    /// Flips the selection of `value`. Returns true if it is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(value.to_string());
            true
        }
    }

    /// Deselects every value.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Renders the selection as a pipeline filter expression.
    ///
    /// Returns `None` when nothing is selected. Several values are joined
    /// with `OR`; double quotes and backslashes inside values are escaped.
    pub fn expression(&self) -> Option<String> {
        if self.selected.is_empty() {
            return None;
        }

        let clauses: Vec<String> = self
            .selected
            .iter()
            .map(|value| format!("{} = \"{}\"", self.field, escape(value)))
            .collect();
        Some(clauses.join(" OR "))
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
