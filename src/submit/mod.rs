//! Submit handling for the sample form

mod handler;
mod traits;

pub use handler::{SubmitHandler, TracingLog};
pub use traits::{Notifier, SubmissionLog};

#[cfg(test)]
pub use traits::{MockNotifier, MockSubmissionLog};
