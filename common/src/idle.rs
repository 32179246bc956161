//! Idle detection and idle-face animation timing.
//!
//! ```text
//!            now - last_interaction > timeout
//!   Active ------------------------------------> Idle
//!     ^                                           |
//!     +------------------ wake() -----------------+
//! ```
//!
//! Every button event calls [`IdleController::wake`], which also restarts
//! the timeout. The timeout is passed in on every update so it can depend on
//! the mode currently on screen.

use log::debug;

use crate::config::IdleConfig;
use crate::sample::Millis;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IdleState {
    Active,
    /// Idle since the given time.
    Idle { since: Millis },
}

/// Tracks user inactivity and drives the idle animation cadence.
pub struct IdleController {
    state: IdleState,
    last_interaction: Millis,
    last_frame: Option<Millis>,
}

impl IdleController {
    pub const fn new(now: Millis) -> Self {
        Self {
            state: IdleState::Active,
            last_interaction: now,
            last_frame: None,
        }
    }

    /// Re-evaluate idleness. Returns `true` on the tick idle mode is entered.
    pub fn update(
        &mut self,
        now: Millis,
        timeout: Millis,
    ) -> bool {
        if self.is_idle() || now.saturating_sub(self.last_interaction) <= timeout {
            return false;
        }
        debug!("idle after {} ms without input", now - self.last_interaction);
        self.state = IdleState::Idle { since: now };
        self.last_frame = None;
        true
    }

    /// Register user interaction. Returns `true` if this woke the dashboard.
    pub fn wake(
        &mut self,
        now: Millis,
    ) -> bool {
        self.last_interaction = now;
        let was_idle = self.is_idle();
        self.state = IdleState::Active;
        was_idle
    }

    #[inline]
    pub const fn is_idle(&self) -> bool { matches!(self.state, IdleState::Idle { .. }) }

    #[inline]
    pub const fn state(&self) -> IdleState { self.state }

    #[inline]
    pub const fn last_interaction(&self) -> Millis { self.last_interaction }

    /// Whether an idle animation frame is due. Claims the frame when it is.
    pub fn animation_due(
        &mut self,
        now: Millis,
        frame_ms: Millis,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let due = self.last_frame.is_none_or(|last| now.saturating_sub(last) >= frame_ms);
        if due {
            self.last_frame = Some(now);
        }
        due
    }

    /// Whether the eyes are inside a blink window.
    ///
    /// Blinks recur every `blink_interval_ms` counted from idle entry, each
    /// lasting `blink_duration_ms` at the end of the interval, so the face
    /// always opens with its eyes open.
    pub fn eyes_closed(
        &self,
        now: Millis,
        config: &IdleConfig,
    ) -> bool {
        let IdleState::Idle { since } = self.state else {
            return false;
        };
        let phase = now.saturating_sub(since) % config.blink_interval_ms;
        phase >= config.blink_interval_ms - config.blink_duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Millis = 60_000;

    #[test]
    fn test_idle_timeout_is_strict() {
        let mut idle = IdleController::new(0);
        assert!(!idle.update(59_999, TIMEOUT));
        assert!(!idle.update(60_000, TIMEOUT));
        assert!(!idle.is_idle());
        assert!(idle.update(60_001, TIMEOUT));
        assert_eq!(idle.state(), IdleState::Idle { since: 60_001 });
    }

    #[test]
    fn test_update_reports_entry_once() {
        let mut idle = IdleController::new(0);
        assert!(idle.update(70_000, TIMEOUT));
        assert!(!idle.update(71_000, TIMEOUT));
        assert!(idle.is_idle());
    }

    #[test]
    fn test_wake_resets_timer() {
        let mut idle = IdleController::new(0);
        idle.update(70_000, TIMEOUT);
        assert!(idle.wake(75_000));
        assert!(!idle.is_idle());
        assert_eq!(idle.last_interaction(), 75_000);
        assert!(!idle.update(135_000, TIMEOUT));
        assert!(idle.update(135_001, TIMEOUT));
    }

    #[test]
    fn test_wake_while_active_only_resets() {
        let mut idle = IdleController::new(0);
        assert!(!idle.wake(30_000));
        assert!(!idle.update(89_000, TIMEOUT));
    }

    #[test]
    fn test_animation_cadence() {
        let mut idle = IdleController::new(0);
        assert!(!idle.animation_due(0, 200));
        idle.update(60_001, TIMEOUT);
        assert!(idle.animation_due(60_001, 200));
        assert!(!idle.animation_due(60_100, 200));
        assert!(idle.animation_due(60_201, 200));
    }

    #[test]
    fn test_blink_window() {
        let config = IdleConfig::DEFAULT;
        let mut idle = IdleController::new(0);
        assert!(!idle.eyes_closed(10, &config));
        idle.update(100_000, TIMEOUT);
        assert!(!idle.eyes_closed(100_000, &config));
        assert!(!idle.eyes_closed(103_799, &config));
        assert!(idle.eyes_closed(103_800, &config));
        assert!(idle.eyes_closed(103_999, &config));
        assert!(!idle.eyes_closed(104_000, &config));
    }
}
