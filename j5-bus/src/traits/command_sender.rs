use crate::error::Error;
use auto_impl::auto_impl;

/// Velocity command sent to the vehicle.
///
/// The vehicle attempts to perform the commanded motion but does not
/// guarantee that the motion is exactly achieved.
#[derive(Clone, Debug, Default, Copy)]
pub struct MotionCommand {
    /// Forward velocity in m/s (body x axis).
    pub linear: f64,
    /// Rotational velocity around the body z axis in rad/s.
    pub angular: f64,
}

impl MotionCommand {
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

#[auto_impl(Box, Rc, Arc)]
pub trait CommandSender {
    /// Sends a single velocity command.
    ///
    /// Delivery is at most once per call, with no ordering guarantee
    /// relative to status receipt.
    fn send_command(&self, command: &MotionCommand) -> Result<(), Error>;
}
