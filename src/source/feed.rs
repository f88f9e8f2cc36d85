//! Push delivery of result sets.
//!
//! Whatever receives pipeline responses holds a [`ResultPublisher`] and
//! publishes each new result set. The rendering side holds the matching
//! [`ResultFeed`], which builds views exactly once per published set, in
//! publish order.
//!
//! ```text
//! pipeline thread                          render thread
//! ───────────────                          ─────────────
//! publisher.publish(results) ──channel──▶  feed.recv() → Vec<ResultView>
//! ```

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use tracing::{debug, instrument};

use crate::error::{Result, SourceError};
use crate::result::{RawResult, ResultView, ResultViewModelBuilder};

/// Creates a publisher/feed pair backed by a bounded channel.
///
/// `capacity` is the number of result sets that can be queued before
/// `publish` blocks. A capacity of 0 makes every publish wait for the
/// renderer.
///
/// # Example
///
/// ```rust
/// use storefront::{result_feed, RawResult, ResultViewModelBuilder};
///
/// let (publisher, feed) = result_feed(4, ResultViewModelBuilder::default());
/// publisher.publish(vec![RawResult::named("Widget")]).unwrap();
///
/// let views = feed.recv().unwrap();
/// assert_eq!(views[0].display_name, "Widget");
/// ```
pub fn result_feed(
    capacity: usize,
    builder: ResultViewModelBuilder,
) -> (ResultPublisher, ResultFeed) {
    let (sender, receiver) = bounded(capacity);
    (
        ResultPublisher { sender },
        ResultFeed { receiver, builder },
    )
}

/// Sending half of a result feed. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ResultPublisher {
    sender: Sender<Vec<RawResult>>,
}

impl ResultPublisher {
    /// Publishes a new result set, blocking while the feed is full.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the feed has been dropped.
    #[instrument(skip_all, fields(count = results.len()))]
    pub fn publish(&self, results: Vec<RawResult>) -> Result<()> {
        self.sender
            .send(results)
            .map_err(|_| SourceError::Closed)?;
        debug!("Result set published");
        Ok(())
    }
}

/// Receiving half of a result feed.
///
/// Also an iterator over built view sets that ends once every publisher
/// has been dropped and the queue is drained.
#[derive(Debug)]
pub struct ResultFeed {
    receiver: Receiver<Vec<RawResult>>,
    builder: ResultViewModelBuilder,
}

impl ResultFeed {
    /// Blocks until the next result set arrives and returns its views.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` once all publishers are gone and no
    /// result sets remain.
    pub fn recv(&self) -> Result<Vec<ResultView>> {
        let results = self.receiver.recv().map_err(|_| SourceError::Closed)?;
        Ok(self.builder.build(&results))
    }

    /// Returns the views of the next result set if one is already queued.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` once all publishers are gone and no
    /// result sets remain.
    pub fn try_recv(&self) -> Result<Option<Vec<ResultView>>> {
        match self.receiver.try_recv() {
            Ok(results) => Ok(Some(self.builder.build(&results))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SourceError::Closed.into()),
        }
    }

    /// Number of result sets waiting to be rendered.
    #[inline]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Iterator for ResultFeed {
    type Item = Vec<ResultView>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn test_publish_then_recv() {
        let (publisher, feed) = result_feed(2, ResultViewModelBuilder::default());
        publisher
            .publish(vec![RawResult {
                name: Some("Widget".to_string()),
                price: Some(19.5),
                ..Default::default()
            }])
            .unwrap();

        let views = feed.recv().unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].display_price, "$19.50");
    }

    #[test]
    fn test_try_recv_empty() {
        let (_publisher, feed) = result_feed(1, ResultViewModelBuilder::default());
        assert!(feed.try_recv().unwrap().is_none());
    }

    #[test]
    fn test_pending_counts_queued_sets() {
        let (publisher, feed) = result_feed(3, ResultViewModelBuilder::default());
        publisher.publish(Vec::new()).unwrap();
        publisher.publish(Vec::new()).unwrap();
        assert_eq!(feed.pending(), 2);
        feed.recv().unwrap();
        assert_eq!(feed.pending(), 1);
    }

    #[test]
    fn test_recv_after_publishers_dropped() {
        let (publisher, feed) = result_feed(1, ResultViewModelBuilder::default());
        publisher.publish(vec![RawResult::named("last")]).unwrap();
        drop(publisher);

        // Queued sets are still delivered before the feed reports closed
        assert_eq!(feed.recv().unwrap()[0].display_name, "last");
        assert!(matches!(
            feed.recv(),
            Err(StorefrontError::Source(SourceError::Closed))
        ));
        assert!(feed.try_recv().is_err());
    }

    #[test]
    fn test_publish_after_feed_dropped() {
        let (publisher, feed) = result_feed(1, ResultViewModelBuilder::default());
        drop(feed);
        let err = publisher.publish(Vec::new()).unwrap_err();
        assert!(err.is_source());
    }

    #[test]
    fn test_feed_iterator_ends_when_closed() {
        let (publisher, feed) = result_feed(3, ResultViewModelBuilder::default());
        publisher.publish(vec![RawResult::named("a")]).unwrap();
        publisher
            .publish(vec![RawResult::named("b"), RawResult::named("c")])
            .unwrap();
        drop(publisher);

        let sizes: Vec<usize> = feed.map(|views| views.len()).collect();
        assert_eq!(sizes, vec![1, 2]);
    }
}
