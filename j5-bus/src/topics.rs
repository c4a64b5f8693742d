//! Fixed topic names of the J5 control network. Do not change these.

/// Velocity commands are published here, at 10 Hz or faster.
pub const COMMAND_TOPIC: &str = "/j5_cmd";

/// The vehicle reports status telemetry here.
pub const STATUS_TOPIC: &str = "/j5_status";
