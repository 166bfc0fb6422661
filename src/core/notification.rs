//! Toast notifications model
//!
//! The queue is plain data; `ui::notifications` wraps it in a signal and
//! drives the auto-dismiss timers.

use std::collections::VecDeque;

/// Maximum number of toasts shown at once
pub const MAX_TOASTS: usize = 5;

pub const SUCCESS_DISMISS_MS: u32 = 3000;
pub const ERROR_DISMISS_MS: u32 = 4000;
pub const INFO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn dismiss_after_ms(&self) -> u32 {
        match self {
            ToastKind::Success => SUCCESS_DISMISS_MS,
            ToastKind::Error => ERROR_DISMISS_MS,
            ToastKind::Info => INFO_DISMISS_MS,
        }
    }
}

/// A single toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub auto_dismiss_ms: u32,
}

/// Bounded FIFO of visible toasts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return a copy of it. The oldest toast is dropped once
    /// the queue holds more than [`MAX_TOASTS`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Toast {
        let toast = Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            auto_dismiss_ms: kind.dismiss_after_ms(),
        };
        self.next_id += 1;

        self.items.push_back(toast.clone());
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
        toast
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Success, "Welcome back!");
        let second = queue.push(ToastKind::Error, "Incorrect email or password");
        assert!(second.id > first.id);
        assert_eq!(second.auto_dismiss_ms, ERROR_DISMISS_MS);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss_durations() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Success, "ok");
        queue.push(ToastKind::Error, "bad");
        queue.push(ToastKind::Info, "fyi");

        let durations: Vec<u32> = queue.items().map(|t| t.auto_dismiss_ms).collect();
        assert_eq!(durations, vec![3000, 4000, 5000]);
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut queue = ToastQueue::new();
        for i in 0..7 {
            queue.push(ToastKind::Info, format!("toast {}", i));
        }

        assert_eq!(queue.len(), MAX_TOASTS);
        let messages: Vec<&str> = queue.items().map(|t| t.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["toast 2", "toast 3", "toast 4", "toast 5", "toast 6"]
        );
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::new();
        let keep = queue.push(ToastKind::Success, "keep").id;
        let drop = queue.push(ToastKind::Error, "drop").id;

        queue.dismiss(drop);
        queue.dismiss(999);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items().next().map(|t| t.id), Some(keep));
    }

    #[test]
    fn test_dismissing_everything_empties_queue() {
        let mut queue = ToastQueue::new();
        let toast = queue.push(ToastKind::Info, "a");
        queue.dismiss(toast.id);
        assert!(queue.is_empty());
    }
}
