//! Capabilities consumed by the submit handler, mockable in tests

use crate::state::FormFields;

/// Sink for submitted form snapshots
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionLog {
    /// Record one submitted snapshot, untransformed
    fn record(&self, fields: &FormFields);
}

impl<T: SubmissionLog + ?Sized> SubmissionLog for Box<T> {
    fn record(&self, fields: &FormFields) {
        (**self).record(fields);
    }
}

/// Blocking user-visible acknowledgment
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Present `message` to the user
    fn notify_user(&mut self, message: &str);
}
