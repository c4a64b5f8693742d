use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use j5_bus::{CommandSender, MotionCommand, StatusSubscription};
use tracing::{debug, warn};

use crate::RelayConfig;

/// Publishes one fixed command at the configured rate until stopped.
///
/// The command is immutable for the lifetime of the relay; the publish loop
/// and the status subscription run concurrently without shared mutable
/// state.
#[derive(Debug)]
pub struct CommandRelay<S>
where
    S: CommandSender,
{
    command: MotionCommand,
    sender: S,
    period: Duration,
    is_running: Arc<AtomicBool>,
}

impl<S> CommandRelay<S>
where
    S: CommandSender,
{
    pub fn new(command: MotionCommand, sender: S, config: &RelayConfig) -> Self {
        assert!(config.publish_rate_hz > 0.0);
        Self {
            command,
            sender,
            period: Duration::from_secs_f64(1.0 / config.publish_rate_hz),
            is_running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn command(&self) -> MotionCommand {
        self.command
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Requests the transition to the stopped state. The loop observes it
    /// at the next tick; there is no transition back.
    pub fn stop(&self) {
        self.is_running.store(false, Ordering::Relaxed);
    }

    /// Runs the publish loop until [`stop`](Self::stop) is called.
    ///
    /// Each tick sends the unchanged command; a failed send is logged and
    /// retried at the next tick. The interval fires on the period grid, so
    /// publish latency does not accumulate as drift. `status` is held for
    /// the lifetime of the loop and closed before returning, so no status
    /// handler runs once this returns.
    pub async fn run(&self, status: StatusSubscription) {
        self.is_running.store(true, Ordering::Relaxed);
        let mut interval = tokio::time::interval(self.period);
        loop {
            interval.tick().await;
            if !self.is_running() {
                break;
            }
            debug!(
                linear = self.command.linear,
                angular = self.command.angular,
                "sending velocity command"
            );
            if let Err(e) = self.sender.send_command(&self.command) {
                warn!("failed to send velocity command: {e}");
            }
        }
        status.close();
    }
}
