//! Conversion of raw search results into display-ready views.
//!
//! [`ResultViewModelBuilder`] owns the fallback policy for every card
//! field, so presentation code can render views without checking for
//! missing or malformed data.
//!
//! # Field Policy
//!
//! | View field | Source | Fallback |
//! |------------|--------|----------|
//! | `display_name` | `name`, non-empty | `""` |
//! | `display_brand` | `brand`, non-empty | `""` |
//! | `display_price` | `price`, finite and >= 0 | price placeholder (`N/A`) |
//! | `image_url` | `image`, non-empty | image placeholder |
//! | `buy_label` | buy phrase + `display_price` | never falls back |

use crate::config::ViewConfig;
use crate::result::types::{RawResult, ResultView};

/// Builds [`ResultView`]s from [`RawResult`]s.
///
/// Building is total: it never fails, never mutates its input, performs no
/// I/O, and returns one view per input in input order. The builder holds
/// only its formatting policy, so it is `Send + Sync` and can be shared
/// freely between callers.
///
/// # Example
/// ```rust
/// use storefront::{RawResult, ResultViewModelBuilder};
///
/// let builder = ResultViewModelBuilder::default();
/// let views = builder.build(&[RawResult {
///     name: Some("Widget".to_string()),
///     price: Some(19.5),
///     ..Default::default()
/// }]);
///
/// assert_eq!(views[0].display_price, "$19.50");
/// assert_eq!(views[0].buy_label, "Buy now for $19.50");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultViewModelBuilder {
    view: ViewConfig,
}

impl ResultViewModelBuilder {
    /// Creates a builder with the given formatting policy.
    pub fn new(view: ViewConfig) -> Self {
        Self { view }
    }

    /// Returns the formatting policy in use.
    #[inline]
    pub fn view_config(&self) -> &ViewConfig {
        &self.view
    }

    /// Converts a result set into views, preserving length and order.
    pub fn build(&self, results: &[RawResult]) -> Vec<ResultView> {
        results.iter().map(|r| self.build_one(r)).collect()
    }

    /// Converts a single result into its view.
    pub fn build_one(&self, result: &RawResult) -> ResultView {
        let display_price = self.format_price(result.price);
        let buy_label = format!("{}{}", self.view.buy_phrase, display_price);

        ResultView {
            display_name: non_empty(result.name.as_deref()).unwrap_or_default().to_owned(),
            display_brand: non_empty(result.brand.as_deref()).unwrap_or_default().to_owned(),
            image_url: non_empty(result.image.as_deref())
                .unwrap_or(self.view.image_placeholder.as_str())
                .to_owned(),
            display_price,
            buy_label,
        }
    }

    /// Formats a price with the currency symbol and two fraction digits.
    ///
    /// Missing, negative, NaN, and infinite prices become the placeholder.
    ///
    /// ```rust
    /// use storefront::ResultViewModelBuilder;
    ///
    /// let builder = ResultViewModelBuilder::default();
    /// assert_eq!(builder.format_price(Some(9.99)), "$9.99");
    /// assert_eq!(builder.format_price(Some(-3.0)), "N/A");
    /// assert_eq!(builder.format_price(None), "N/A");
    /// ```
    pub fn format_price(&self, price: Option<f64>) -> String {
        match price {
            Some(p) if p.is_finite() && p >= 0.0 => {
                // -0.0 passes the range check but would print as "-0.00"
                let p = if p == 0.0 { 0.0 } else { p };
                format!("{}{:.2}", self.view.currency_symbol, p)
            }
            _ => self.view.price_placeholder.clone(),
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EMPTY_IMAGE;

    fn builder() -> ResultViewModelBuilder {
        ResultViewModelBuilder::default()
    }

    #[test]
    fn test_format_price_two_fraction_digits() {
        assert_eq!(builder().format_price(Some(19.5)), "$19.50");
        assert_eq!(builder().format_price(Some(9.99)), "$9.99");
        assert_eq!(builder().format_price(Some(100.0)), "$100.00");
        assert_eq!(builder().format_price(Some(0.0)), "$0.00");
    }

    #[test]
    fn test_format_price_negative_zero() {
        assert_eq!(builder().format_price(Some(-0.0)), "$0.00");
    }

    #[test]
    fn test_format_price_invalid() {
        assert_eq!(builder().format_price(None), "N/A");
        assert_eq!(builder().format_price(Some(-3.0)), "N/A");
        assert_eq!(builder().format_price(Some(-0.01)), "N/A");
        assert_eq!(builder().format_price(Some(f64::NAN)), "N/A");
        assert_eq!(builder().format_price(Some(f64::INFINITY)), "N/A");
        assert_eq!(builder().format_price(Some(f64::NEG_INFINITY)), "N/A");
    }

    #[test]
    fn test_build_one_complete() {
        let view = builder().build_one(&RawResult {
            name: Some("Widget".to_string()),
            brand: Some("Acme".to_string()),
            price: Some(9.99),
            image: Some("http://x/w.png".to_string()),
        });
        assert_eq!(view.display_name, "Widget");
        assert_eq!(view.display_brand, "Acme");
        assert_eq!(view.display_price, "$9.99");
        assert_eq!(view.image_url, "http://x/w.png");
        assert_eq!(view.buy_label, "Buy now for $9.99");
    }

    #[test]
    fn test_build_one_empty_strings_fall_back() {
        let view = builder().build_one(&RawResult {
            name: Some(String::new()),
            brand: Some(String::new()),
            price: None,
            image: Some(String::new()),
        });
        assert_eq!(view.display_name, "");
        assert_eq!(view.display_brand, "");
        assert_eq!(view.image_url, EMPTY_IMAGE);
        assert_ne!(view.image_url, "");
        assert_eq!(view.buy_label, "Buy now for N/A");
    }

    #[test]
    fn test_custom_view_config() {
        let builder = ResultViewModelBuilder::new(ViewConfig {
            currency_symbol: "€".to_string(),
            price_placeholder: "price on request".to_string(),
            image_placeholder: "/static/no-image.svg".to_string(),
            buy_phrase: "Add to cart: ".to_string(),
        });

        let priced = builder.build_one(&RawResult {
            price: Some(3.0),
            ..Default::default()
        });
        assert_eq!(priced.display_price, "€3.00");
        assert_eq!(priced.buy_label, "Add to cart: €3.00");
        assert_eq!(priced.image_url, "/static/no-image.svg");

        let unpriced = builder.build_one(&RawResult::default());
        assert_eq!(unpriced.display_price, "price on request");
        assert_eq!(unpriced.buy_label, "Add to cart: price on request");
    }

    #[test]
    fn test_build_does_not_mutate_input() {
        let input = vec![RawResult::named("Widget"), RawResult::default()];
        let before = input.clone();
        let _ = builder().build(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_builder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResultViewModelBuilder>();
    }
}
