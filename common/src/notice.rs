//! Transient advisories shown in the footer bar.
//!
//! At most one notice is visible. There is no priority between kinds: the
//! most recently raised notice replaces the current one, even within the
//! same tick (a fetch timeout raised after a periodic reset wins). Notices
//! expire after [`Config::notice_ms`](crate::config::Config::notice_ms).

use crate::sample::Millis;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    /// A weather fetch reported a network or parse failure.
    FetchFailed,
    /// A weather fetch was cancelled after the fetch timeout.
    FetchTimedOut,
    /// The sensors did not answer at startup.
    SensorOffline,
    /// The sample buffer was cleared.
    StatsReset,
}

impl NoticeKind {
    pub const fn text(self) -> &'static str {
        match self {
            Self::FetchFailed => "WEATHER FETCH FAILED",
            Self::FetchTimedOut => "WEATHER TIMED OUT",
            Self::SensorOffline => "SENSOR OFFLINE",
            Self::StatsReset => "STATS RESET",
        }
    }
}

/// Active notice with its start time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub since: Millis,
}

impl Notice {
    pub const fn new(kind: NoticeKind, since: Millis) -> Self { Self { kind, since } }

    #[inline]
    pub const fn is_expired(&self, now: Millis, duration: Millis) -> bool { now.saturating_sub(self.since) >= duration }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::new(NoticeKind::StatsReset, 1_000);
        assert!(!notice.is_expired(3_999, 3_000));
        assert!(notice.is_expired(4_000, 3_000));
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(NoticeKind::SensorOffline.text(), "SENSOR OFFLINE");
        assert_eq!(NoticeKind::FetchTimedOut.text(), "WEATHER TIMED OUT");
    }
}
