use j5_bus::{StatusHandler, StatusReport};
use tracing::info;

/// Renders received status telemetry for the operator.
///
/// Runs on the bus delivery context, interleaved with the publish loop, so
/// it must stay non-blocking and never touches the outgoing command.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusObserver;

impl StatusObserver {
    pub fn new() -> Self {
        Self
    }

    pub fn on_status(&self, report: &StatusReport) {
        info!(
            external_control = report.external_control,
            fault = report.fault,
            contactors = report.contactors,
            voltage = report.voltage,
            "received vehicle status"
        );
    }

    /// Wraps the observer into a handler for [`j5_bus::StatusFeed::subscribe`].
    pub fn into_handler(self) -> StatusHandler {
        Box::new(move |report| self.on_status(&report))
    }
}
