//! Upstream result sources.
//!
//! The search pipeline is an external collaborator. The page reaches it only
//! through the [`ResultSource`] trait: a synchronous read of the current
//! result set, evaluated once per rendering pass.
//!
//! # Providers
//!
//! - [`StaticSource`] - A fixed result set (tests, previews, server-side rendering)
//! - [`SharedSource`] - A result set replaced by another thread as searches complete
//! - [`JsonSource`] - A decoded pipeline response
//!
//! For push-style delivery, see [`result_feed`].

mod feed;
mod json;

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::result::RawResult;

pub use feed::{result_feed, ResultFeed, ResultPublisher};
pub use json::{decode_response, JsonSource};

/// Read access to the current result set of an external search pipeline.
///
/// Implementations must be thread-safe (`Send + Sync`) so a page can be
/// shared between rendering threads. How and when the result set refreshes
/// is up to the implementation.
///
/// # Implementing a Custom Source
///
/// ```rust,ignore
/// use storefront::{RawResult, Result, ResultSource};
///
/// struct PipelineClient {
///     latest: MyResponseCache,
/// }
///
/// impl ResultSource for PipelineClient {
///     fn current_results(&self) -> Result<Vec<RawResult>> {
///         Ok(self.latest.results())
///     }
/// }
/// ```
pub trait ResultSource: Send + Sync {
    /// Returns the result set as of now, in pipeline order.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Source` if the result set can't be read.
    fn current_results(&self) -> Result<Vec<RawResult>>;
}

/// A fixed result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticSource {
    results: Vec<RawResult>,
}

impl StaticSource {
    /// Creates a source that always returns `results`.
    pub fn new(results: Vec<RawResult>) -> Self {
        Self { results }
    }
}

impl From<Vec<RawResult>> for StaticSource {
    fn from(results: Vec<RawResult>) -> Self {
        Self::new(results)
    }
}

impl ResultSource for StaticSource {
    fn current_results(&self) -> Result<Vec<RawResult>> {
        Ok(self.results.clone())
    }
}

/// A result set that can be replaced while pages read it.
///
/// Clones share the same underlying result set, so one handle can be given
/// to the page and another kept by whatever receives pipeline responses.
///
/// # Example
///
/// ```rust
/// use storefront::{RawResult, ResultSource, SharedSource};
///
/// let source = SharedSource::default();
/// let writer = source.clone();
///
/// writer.replace(vec![RawResult::named("Widget")]).unwrap();
/// assert_eq!(source.current_results().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedSource {
    results: Arc<RwLock<Vec<RawResult>>>,
}

impl SharedSource {
    /// Creates a shared source holding `results`.
    pub fn new(results: Vec<RawResult>) -> Self {
        Self {
            results: Arc::new(RwLock::new(results)),
        }
    }

    /// Replaces the current result set.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::LockPoisoned` if a writer panicked mid-update.
    pub fn replace(&self, results: Vec<RawResult>) -> Result<()> {
        let mut current = self
            .results
            .write()
            .map_err(|_| SourceError::LockPoisoned)?;
        debug!(count = results.len(), "Result set replaced");
        *current = results;
        Ok(())
    }
}

impl ResultSource for SharedSource {
    fn current_results(&self) -> Result<Vec<RawResult>> {
        let current = self
            .results
            .read()
            .map_err(|_| SourceError::LockPoisoned)?;
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_returns_same_set() {
        let source = StaticSource::from(vec![RawResult::named("a"), RawResult::named("b")]);
        let first = source.current_results().unwrap();
        let second = source.current_results().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_static_source_is_empty() {
        assert!(StaticSource::default().current_results().unwrap().is_empty());
    }

    #[test]
    fn test_shared_source_clones_share_state() {
        let source = SharedSource::new(vec![RawResult::named("old")]);
        let writer = source.clone();

        writer
            .replace(vec![RawResult::named("new"), RawResult::named("newer")])
            .unwrap();

        let results = source.current_results().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name.as_deref(), Some("new"));
    }

    #[test]
    fn test_shared_source_poisoned_lock() {
        let source = SharedSource::default();
        let poisoner = source.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.results.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = source.current_results().unwrap_err();
        assert!(matches!(
            err,
            crate::StorefrontError::Source(SourceError::LockPoisoned)
        ));
        assert!(source.replace(Vec::new()).is_err());
    }

    #[test]
    fn test_sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaticSource>();
        assert_send_sync::<SharedSource>();
        assert_send_sync::<Box<dyn ResultSource>>();
    }
}
