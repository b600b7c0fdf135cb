//! Submit handler and the tracing-backed submission log

use super::traits::{Notifier, SubmissionLog};
use crate::state::FormFields;

/// Acknowledgment shown after every submit
pub const ACKNOWLEDGMENT: &str = "Form submitted!";

/// Emits submitted snapshots as structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl SubmissionLog for TracingLog {
    fn record(&self, fields: &FormFields) {
        let record = serde_json::to_string(fields).unwrap_or_default();
        tracing::info!(
            target: "form_screen::submit",
            name = %fields.name,
            email = %fields.email,
            category = %fields.category,
            notifications = fields.notifications,
            record = %record,
            "form submitted"
        );
    }
}

/// Logs a snapshot and acknowledges it. Cannot fail, does not deduplicate.
#[derive(Debug, Clone)]
pub struct SubmitHandler<L: SubmissionLog> {
    log: L,
}

impl<L: SubmissionLog> SubmitHandler<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn submit(&self, fields: &FormFields, notifier: &mut dyn Notifier) {
        self.log.record(fields);
        notifier.notify_user(ACKNOWLEDGMENT);
    }
}
