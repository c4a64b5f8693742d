use std::fmt;

use crate::error::Error;
use auto_impl::auto_impl;

/// Status telemetry snapshot produced by the vehicle.
///
/// Reports are well-formed by construction; every field is present in every
/// message the transport delivers.
#[derive(Clone, Debug, Default, Copy)]
pub struct StatusReport {
    /// true while the vehicle is driven via the direct connection rather
    /// than the handheld remote.
    pub external_control: bool,
    /// true if the line contactors are closed.
    pub contactors: bool,
    /// true if a fault is detected on the vehicle.
    pub fault: bool,
    /// Supply voltage in volts.
    pub voltage: f32,
}

/// Callback invoked for each received [`StatusReport`].
///
/// Runs on the transport's delivery context, which may also service other
/// subscriptions, so handlers must not block.
pub type StatusHandler = Box<dyn Fn(StatusReport) + Send + Sync>;

#[auto_impl(Box, Arc)]
pub trait StatusFeed {
    /// Registers `handler` for every status report until the returned
    /// subscription is closed.
    fn subscribe(&self, handler: StatusHandler) -> Result<StatusSubscription, Error>;
}

/// Owned handle to an active status subscription.
///
/// Delivery stops when the handle is closed or dropped; after
/// [`close`](Self::close) returns, the handler is not invoked again.
pub struct StatusSubscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl StatusSubscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Releases the subscription.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for StatusSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for StatusSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
