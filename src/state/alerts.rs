//! Pending user acknowledgments

use crate::submit::Notifier;
use std::collections::VecDeque;

/// FIFO of messages waiting to be shown as a modal dialog
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    pending: VecDeque<String>,
}

impl AlertQueue {
    /// Message currently on screen, if any
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    pub fn is_showing(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Dismiss the alert on screen; the next one, if any, takes its place
    pub fn dismiss(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

impl Notifier for AlertQueue {
    fn notify_user(&mut self, message: &str) {
        self.pending.push_back(message.to_string());
    }
}
