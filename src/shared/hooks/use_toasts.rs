use dioxus::prelude::*;
use uuid::Uuid;

use crate::shared::errors::ApiError;
use crate::shared::utils::timer;

pub const TOAST_TIMEOUT_MS: u64 = 4000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "c-toast--info",
            ToastKind::Success => "c-toast--success",
            ToastKind::Error => "c-toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded toast list, newest last; oldest dropped on overflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.push(toast);
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastState {
    pub queue: Signal<ToastQueue>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = self.queue.write().push(kind, message);
        let mut queue = self.queue;
        spawn(async move {
            timer::sleep_ms(TOAST_TIMEOUT_MS).await;
            queue.write().dismiss(id);
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    /// Surface an API failure with its user-facing message
    pub fn api_error(&mut self, error: &ApiError) {
        self.push(ToastKind::Error, error.user_message());
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.queue.write().dismiss(id);
    }
}

pub fn use_toast_provider() -> ToastState {
    use_context_provider(|| ToastState {
        queue: Signal::new(ToastQueue::default()),
    })
}

pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest_on_overflow() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(ToastKind::Info, format!("toast {}", i));
        }
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Error, "a");
        queue.push(ToastKind::Success, "b");
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "b");
    }
}
