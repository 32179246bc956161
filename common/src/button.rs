//! Edge-triggered button input with debounce.
//!
//! Inputs are polled once per loop iteration as raw pressed/released
//! levels. A press fires exactly once on the released-to-pressed edge.
//! Level changes arriving within [`DEBOUNCE_MS`] of the previous accepted
//! change are treated as contact bounce and ignored.

use crate::navigation::Button;
use crate::sample::Millis;

/// Minimum time between accepted level changes.
pub const DEBOUNCE_MS: Millis = 50;

/// Debounced edge detector for one button.
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Millis>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the press edge.
    pub fn just_pressed(
        &mut self,
        pressed: bool,
        now: Millis,
    ) -> bool {
        if pressed == self.was_pressed {
            return false;
        }
        if let Some(last) = self.last_change
            && now.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = pressed;
        self.last_change = Some(now);
        pressed
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

/// Raw levels of the three buttons for one poll.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ButtonLevels {
    pub previous: bool,
    pub home: bool,
    pub next: bool,
}

/// The three navigation buttons.
#[derive(Default)]
pub struct ButtonPanel {
    previous: ButtonState,
    home: ButtonState,
    next: ButtonState,
}

impl ButtonPanel {
    pub const fn new() -> Self {
        Self {
            previous: ButtonState::new(),
            home: ButtonState::new(),
            next: ButtonState::new(),
        }
    }

    /// Poll all three buttons; returns the first press edge seen.
    ///
    /// Every button is polled each call so no edge state is skipped. If two
    /// buttons are pressed in the same poll, Home wins, then Previous.
    pub fn poll(
        &mut self,
        levels: ButtonLevels,
        now: Millis,
    ) -> Option<Button> {
        let previous = self.previous.just_pressed(levels.previous, now);
        let home = self.home.just_pressed(levels.home, now);
        let next = self.next.just_pressed(levels.next, now);

        if home {
            Some(Button::Home)
        } else if previous {
            Some(Button::Previous)
        } else if next {
            Some(Button::Next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(true, 100));
        assert!(!button.just_pressed(true, 200));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut button = ButtonState::new();
        button.just_pressed(true, 0);
        assert!(!button.just_pressed(false, 100));
        assert!(button.just_pressed(true, 200));
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 1_000));
        assert!(!button.just_pressed(false, 1_010));
        assert!(!button.just_pressed(true, 1_020));
        // Still held after bounce settles: no second press.
        assert!(!button.just_pressed(true, 1_100));
    }

    #[test]
    fn test_panel_reports_each_button() {
        let mut panel = ButtonPanel::new();
        let next = ButtonLevels {
            next: true,
            ..Default::default()
        };
        assert_eq!(panel.poll(next, 0), Some(Button::Next));
        assert_eq!(panel.poll(next, 100), None);
        assert_eq!(panel.poll(ButtonLevels::default(), 200), None);
        let previous = ButtonLevels {
            previous: true,
            ..Default::default()
        };
        assert_eq!(panel.poll(previous, 300), Some(Button::Previous));
    }

    #[test]
    fn test_panel_home_wins() {
        let mut panel = ButtonPanel::new();
        let both = ButtonLevels {
            previous: true,
            home: true,
            next: false,
        };
        assert_eq!(panel.poll(both, 0), Some(Button::Home));
    }
}
