use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use crate::error::Error;
use crate::traits::{CommandSender, MotionCommand};

/// `CommandSender` that records commands instead of talking to a vehicle.
#[derive(Debug, Default)]
pub struct DummyCommandSender {
    last_command: Mutex<MotionCommand>,
    send_count: AtomicUsize,
    fail_sends: AtomicBool,
}

impl DummyCommandSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `send_command` fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.fail_sends.store(failing, Ordering::Relaxed);
    }

    /// Number of `send_command` calls, failed attempts included.
    pub fn send_count(&self) -> usize {
        self.send_count.load(Ordering::Relaxed)
    }

    pub fn last_command(&self) -> MotionCommand {
        *self.last_command.lock().unwrap()
    }
}

impl CommandSender for DummyCommandSender {
    fn send_command(&self, command: &MotionCommand) -> Result<(), Error> {
        self.send_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_sends.load(Ordering::Relaxed) {
            return Err(Error::Connection {
                message: "dummy sender is set to fail".to_owned(),
            });
        }
        *self.last_command.lock().unwrap() = *command;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_send_and_record() {
        let sender = DummyCommandSender::new();
        let command = sender.last_command();
        assert_approx_eq!(command.linear, 0.0);
        assert_approx_eq!(command.angular, 0.0);

        sender
            .send_command(&MotionCommand::new(1.5, -0.3))
            .unwrap();
        let command = sender.last_command();
        assert_approx_eq!(command.linear, 1.5);
        assert_approx_eq!(command.angular, -0.3);
        assert_eq!(sender.send_count(), 1);
    }

    #[test]
    fn test_failing_counts_attempts() {
        let sender = DummyCommandSender::new();
        sender.set_failing(true);
        assert!(sender.send_command(&MotionCommand::new(1.0, 0.0)).is_err());
        assert!(sender.send_command(&MotionCommand::new(1.0, 0.0)).is_err());
        assert_eq!(sender.send_count(), 2);
        // the last successfully delivered command is unchanged
        assert_approx_eq!(sender.last_command().linear, 0.0);

        sender.set_failing(false);
        sender.send_command(&MotionCommand::new(1.0, 0.0)).unwrap();
        assert_eq!(sender.send_count(), 3);
        assert_approx_eq!(sender.last_command().linear, 1.0);
    }
}
