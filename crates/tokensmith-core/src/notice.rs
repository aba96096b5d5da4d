//! Transient user notices.
//!
//! Notices stack in a corner of the window, never block interaction, and
//! auto-dismiss after [`NOTICE_TTL`]. Every error in the taxonomy is
//! surfaced through this one mechanism.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long a notice stays on screen before auto-dismissal.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Error,
    Info,
}

impl NoticeLevel {
    /// CSS class for the banner surface
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "notice notice--error",
            NoticeLevel::Info => "notice notice--info",
        }
    }
}

/// A transient banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Unique within the process; used to remove the right banner when
    /// several stack
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            level,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_get_distinct_ids() {
        let a = Notice::error("one");
        let b = Notice::error("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn level_classes() {
        assert_eq!(NoticeLevel::Error.class(), "notice notice--error");
        assert_eq!(NoticeLevel::Info.class(), "notice notice--info");
    }

    #[test]
    fn ttl_is_five_seconds() {
        assert_eq!(NOTICE_TTL, Duration::from_secs(5));
    }
}
