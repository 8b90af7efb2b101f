//! Transient user-facing status messages.
//!
//! A notice stays fully visible for three seconds, then fades for another
//! 300 ms before it is dropped. Only the most recent notice is kept.

use std::time::{Duration, Instant};

/// How long a notice stays fully visible
pub const NOTICE_VISIBLE: Duration = Duration::from_secs(3);
/// Fade-out window appended after the visible period
pub const NOTICE_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A single toast message
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    posted_at: Instant,
}

impl Notice {
    fn new(message: String, kind: NoticeKind) -> Self {
        Self {
            message,
            kind,
            posted_at: Instant::now(),
        }
    }

    /// Whether the notice is inside its fade-out window
    pub fn is_fading(&self) -> bool {
        self.posted_at.elapsed() >= NOTICE_VISIBLE && !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= NOTICE_VISIBLE + NOTICE_FADE
    }
}

/// Holder for the current toast, if any
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(Notice::new(message.into(), NoticeKind::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Notice::new(message.into(), NoticeKind::Error));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.current = Some(Notice::new(message.into(), NoticeKind::Info));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Drop the active notice once its visible-plus-fade window has passed
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(|n| n.is_expired()) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
