use crate::player::Notification;
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);
const TOAST_CAPACITY: usize = 3;

pub struct Toast {
    pub message: String,
    expires: Instant,
}

/// Short-lived messages shown over the console, newest last.
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        ToastQueue {
            toasts: VecDeque::with_capacity(TOAST_CAPACITY),
        }
    }

    pub fn push(&mut self, notification: &Notification) {
        self.push_at(notification, Instant::now());
    }

    pub(crate) fn push_at(&mut self, notification: &Notification, now: Instant) {
        self.toasts.push_back(Toast {
            message: notification.to_string(),
            expires: now + TOAST_LIFETIME,
        });
        while self.toasts.len() > TOAST_CAPACITY {
            self.toasts.pop_front();
        }
    }

    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
