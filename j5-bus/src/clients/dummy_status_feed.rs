use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use crate::error::Error;
use crate::traits::{StatusFeed, StatusHandler, StatusReport, StatusSubscription};

type HandlerMap = Arc<Mutex<HashMap<usize, StatusHandler>>>;

/// `StatusFeed` driven by hand.
///
/// Tests and offline runs push reports with [`publish`](Self::publish);
/// every live subscriber receives each report. Unsubscribing takes the
/// handler lock, so once [`StatusSubscription::close`] returns no further
/// delivery can reach the handler.
#[derive(Default)]
pub struct DummyStatusFeed {
    handlers: HandlerMap,
    next_id: AtomicUsize,
}

impl DummyStatusFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `report` to every live subscriber.
    pub fn publish(&self, report: StatusReport) {
        for handler in self.handlers.lock().unwrap().values() {
            handler(report);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().unwrap().len()
    }
}

impl StatusFeed for DummyStatusFeed {
    fn subscribe(&self, handler: StatusHandler) -> Result<StatusSubscription, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handlers.lock().unwrap().insert(id, handler);
        let handlers = self.handlers.clone();
        Ok(StatusSubscription::new(move || {
            handlers.lock().unwrap().remove(&id);
        }))
    }
}

impl fmt::Debug for DummyStatusFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyStatusFeed")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_publish_and_receive() {
        let feed = DummyStatusFeed::new();
        let received = Arc::new(Mutex::new(None));
        let received_in_handler = received.clone();
        let subscription = feed
            .subscribe(Box::new(move |report| {
                received_in_handler.lock().unwrap().replace(report);
            }))
            .unwrap();

        feed.publish(StatusReport {
            external_control: true,
            contactors: true,
            fault: false,
            voltage: 48.2,
        });
        let report = received.lock().unwrap().take().unwrap();
        assert!(report.external_control);
        assert!(report.contactors);
        assert!(!report.fault);
        assert_approx_eq!(report.voltage, 48.2_f32);
        subscription.close();
    }

    #[test]
    fn test_multiple_subscribers_receive_same_report() {
        let feed = DummyStatusFeed::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count1 = count.clone();
        let count2 = count.clone();
        let _s1 = feed
            .subscribe(Box::new(move |_| {
                count1.fetch_add(1, Ordering::Relaxed);
            }))
            .unwrap();
        let _s2 = feed
            .subscribe(Box::new(move |_| {
                count2.fetch_add(1, Ordering::Relaxed);
            }))
            .unwrap();

        feed.publish(StatusReport::default());
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_close_stops_delivery() {
        let feed = DummyStatusFeed::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_in_handler = count.clone();
        let subscription = feed
            .subscribe(Box::new(move |_| {
                count_in_handler.fetch_add(1, Ordering::Relaxed);
            }))
            .unwrap();

        feed.publish(StatusReport::default());
        assert_eq!(count.load(Ordering::Relaxed), 1);

        subscription.close();
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(StatusReport::default());
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let feed = DummyStatusFeed::new();
        {
            let _subscription = feed.subscribe(Box::new(|_| {})).unwrap();
            assert_eq!(feed.subscriber_count(), 1);
        }
        assert_eq!(feed.subscriber_count(), 0);
    }
}
