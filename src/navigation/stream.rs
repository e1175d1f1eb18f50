//! Live parameter streams.

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{trace, warn};

use super::ParamMap;

/// Snapshots buffered per subscriber before it starts lagging.
const STREAM_CAPACITY: usize = 64;

/// Fan-out channel of parameter snapshots.
///
/// Every subscriber receives every snapshot emitted after it subscribed,
/// in emission order, plus the latest snapshot at the time it subscribed.
/// A subscriber that falls more than [`STREAM_CAPACITY`] snapshots behind
/// skips the oldest ones; the newest is always kept.
#[derive(Debug)]
pub struct ParamStream {
    sender: broadcast::Sender<ParamMap>,
    latest: Option<ParamMap>,
}

impl ParamStream {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(STREAM_CAPACITY);
        Self {
            sender,
            latest: None,
        }
    }

    /// Opens a subscription, replaying the latest snapshot if any.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            replay: self.latest.clone(),
            rx: self.sender.subscribe(),
        }
    }

    /// Publishes a snapshot to every live subscriber.
    pub fn emit(&mut self, snapshot: ParamMap) {
        if self.sender.send(snapshot.clone()).is_err() {
            trace!("no subscribers for snapshot");
        }
        self.latest = Some(snapshot);
    }

    /// Most recently emitted snapshot.
    pub fn latest(&self) -> Option<&ParamMap> {
        self.latest.as_ref()
    }

    /// Subscriptions currently alive.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ParamStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a [`ParamStream`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    replay: Option<ParamMap>,
    rx: broadcast::Receiver<ParamMap>,
}

impl Subscription {
    /// Takes the next pending snapshot without blocking.
    pub fn try_next(&mut self) -> Option<ParamMap> {
        if let Some(snapshot) = self.replay.take() {
            return Some(snapshot);
        }

        loop {
            match self.rx.try_recv() {
                Ok(snapshot) => return Some(snapshot),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "parameter subscription lagged; oldest snapshots dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Takes all pending snapshots in emission order.
    pub fn drain(&mut self) -> Vec<ParamMap> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(key: &str, value: &str) -> ParamMap {
        ParamMap::from([(key.to_string(), value.to_string())])
    }

    #[test]
    fn test_subscriber_receives_in_order() {
        // Arrange
        let mut stream = ParamStream::new();
        let mut sub = stream.subscribe();

        // Act
        stream.emit(snapshot("k", "1"));
        stream.emit(snapshot("k", "2"));

        // Assert
        assert_eq!(sub.drain(), vec![snapshot("k", "1"), snapshot("k", "2")]);
        assert!(sub.try_next().is_none(), "Drained subscription should be empty");
    }

    #[test]
    fn test_late_subscriber_gets_latest_only() {
        // Arrange
        let mut stream = ParamStream::new();
        stream.emit(snapshot("k", "old"));
        stream.emit(snapshot("k", "new"));

        // Act
        let mut sub = stream.subscribe();

        // Assert
        assert_eq!(sub.drain(), vec![snapshot("k", "new")]);
    }

    #[test]
    fn test_replay_precedes_later_emissions() {
        // Arrange
        let mut stream = ParamStream::new();
        stream.emit(snapshot("k", "1"));
        let mut sub = stream.subscribe();

        // Act
        stream.emit(snapshot("k", "2"));

        // Assert
        assert_eq!(sub.drain(), vec![snapshot("k", "1"), snapshot("k", "2")]);
    }

    #[test]
    fn test_fresh_stream_replays_nothing() {
        let stream = ParamStream::new();
        let mut sub = stream.subscribe();
        assert!(sub.try_next().is_none());
        assert!(stream.latest().is_none());
    }

    #[test]
    fn test_dropped_subscription_is_released() {
        // Arrange
        let mut stream = ParamStream::new();
        let mut kept = stream.subscribe();
        let dropped = stream.subscribe();
        assert_eq!(stream.subscriber_count(), 2);

        // Act
        drop(dropped);
        stream.emit(snapshot("k", "v"));

        // Assert
        assert_eq!(stream.subscriber_count(), 1);
        assert_eq!(kept.try_next(), Some(snapshot("k", "v")));
    }

    #[test]
    fn test_emit_without_subscribers_keeps_latest() {
        let mut stream = ParamStream::new();
        stream.emit(snapshot("k", "v"));
        assert_eq!(stream.latest(), Some(&snapshot("k", "v")));
    }

    #[test]
    fn test_independent_subscribers() {
        // Arrange
        let mut stream = ParamStream::new();
        let mut a = stream.subscribe();
        let mut b = stream.subscribe();

        // Act
        stream.emit(snapshot("k", "v"));
        let _ = a.drain();

        // Assert
        assert_eq!(b.drain().len(), 1, "Draining one subscriber must not affect another");
    }

    #[test]
    fn test_lagging_subscriber_keeps_newest() {
        // Arrange
        let mut stream = ParamStream::new();
        let mut sub = stream.subscribe();
        let total = STREAM_CAPACITY + 6;

        // Act
        for i in 0..total {
            stream.emit(snapshot("k", &i.to_string()));
        }
        let received = sub.drain();

        // Assert
        assert!(!received.is_empty());
        assert!(received.len() <= STREAM_CAPACITY, "Oldest snapshots should be skipped");
        assert_eq!(received.last(), Some(&snapshot("k", &(total - 1).to_string())));
    }
}
