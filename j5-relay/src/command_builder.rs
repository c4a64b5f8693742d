use j5_bus::MotionCommand;

use crate::CommandLimits;

/// Default forward velocity command in m/s.
pub const DEFAULT_VELOCITY_COMMAND: f64 = 0.0;

/// Default turn rate command in rad/s.
pub const DEFAULT_TURN_RATE_COMMAND: f64 = 0.0;

/// Builds a bounded [`MotionCommand`] from operator-supplied text.
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder {
    limits: CommandLimits,
}

impl CommandBuilder {
    pub fn new(limits: CommandLimits) -> Self {
        Self { limits }
    }

    /// Parses up to two tokens as linear and angular velocity.
    ///
    /// A missing or malformed token falls back to the default value, and
    /// parsed values saturate at the configured bounds. Extra tokens are
    /// ignored.
    pub fn build(&self, tokens: &[String]) -> MotionCommand {
        let linear = parse_velocity(tokens.first())
            .unwrap_or(DEFAULT_VELOCITY_COMMAND)
            .clamp(-self.limits.max_linear, self.limits.max_linear);
        let angular = parse_velocity(tokens.get(1))
            .unwrap_or(DEFAULT_TURN_RATE_COMMAND)
            .clamp(-self.limits.max_angular, self.limits.max_angular);
        MotionCommand::new(linear, angular)
    }
}

fn parse_velocity(token: Option<&String>) -> Option<f64> {
    // NaN parses as a number but cannot be clamped into the bounds.
    token?.parse().ok().filter(|v: &f64| !v.is_nan())
}
