use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Saturation bounds applied to operator input.
///
/// These are safety limits for the relay and do not reflect the actual
/// limits of the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CommandLimits {
    /// Maximum forward velocity magnitude in m/s.
    #[serde(default = "default_max_linear")]
    pub max_linear: f64,
    /// Maximum turn rate magnitude in rad/s.
    #[serde(default = "default_max_angular")]
    pub max_angular: f64,
}

fn default_max_linear() -> f64 {
    3.0
}

fn default_max_angular() -> f64 {
    1.0
}

impl Default for CommandLimits {
    fn default() -> Self {
        Self {
            max_linear: default_max_linear(),
            max_angular: default_max_angular(),
        }
    }
}

/// Settings of the publish loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// Command publish rate in Hz. The vehicle expects commands at 10 Hz
    /// or faster.
    #[serde(default = "default_publish_rate_hz")]
    pub publish_rate_hz: f64,
    #[serde(default)]
    pub limits: CommandLimits,
}

fn default_publish_rate_hz() -> f64 {
    10.0
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            publish_rate_hz: default_publish_rate_hz(),
            limits: CommandLimits::default(),
        }
    }
}
