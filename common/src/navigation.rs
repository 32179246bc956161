//! Button routing between modes and weather locations.
//!
//! The same Previous/Next press means different things depending on where
//! the user is:
//!
//! | Mode                          | Previous / Next           |
//! |-------------------------------|---------------------------|
//! | Weather, 2+ locations         | page the location         |
//! | anything else                 | cycle the mode            |
//!
//! Home always returns to the configured home mode.

use log::debug;

use crate::screens::ScreenMode;

/// The three physical buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    Previous,
    Home,
    Next,
}

/// What should be on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavigationState {
    pub mode: ScreenMode,
    /// Selected weather location.
    pub location: usize,
}

/// Result of a button press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Mode changed (or was re-selected): full redraw.
    Mode(ScreenMode),
    /// Weather location changed: redraw from cache, fetch if needed.
    Location(usize),
}

/// Screen-mode state machine.
pub struct NavigationController {
    state: NavigationState,
    home: ScreenMode,
}

impl NavigationController {
    pub const fn new(home: ScreenMode) -> Self {
        Self {
            state: NavigationState {
                mode: home,
                location: 0,
            },
            home,
        }
    }

    #[inline]
    pub const fn state(&self) -> NavigationState { self.state }

    #[inline]
    pub const fn mode(&self) -> ScreenMode { self.state.mode }

    #[inline]
    pub const fn location(&self) -> usize { self.state.location }

    /// Route a button press.
    pub fn handle(
        &mut self,
        button: Button,
        locations: usize,
    ) -> Transition {
        let paging = self.state.mode == ScreenMode::Weather && locations > 1;
        let transition = match (button, paging) {
            (Button::Home, _) => Transition::Mode(self.home),
            (Button::Next, true) => Transition::Location((self.state.location + 1) % locations),
            (Button::Previous, true) => Transition::Location((self.state.location + locations - 1) % locations),
            (Button::Next, false) => Transition::Mode(self.state.mode.next()),
            (Button::Previous, false) => Transition::Mode(self.state.mode.prev()),
        };

        match transition {
            Transition::Mode(mode) => self.state.mode = mode,
            Transition::Location(location) => self.state.location = location,
        }
        debug!("{button:?} -> {transition:?}");
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(mode: ScreenMode, location: usize) -> NavigationController {
        let mut nav = NavigationController::new(ScreenMode::Normal);
        nav.state = NavigationState { mode, location };
        nav
    }

    #[test]
    fn test_next_on_weather_pages_location() {
        let mut nav = at(ScreenMode::Weather, 2);
        assert_eq!(nav.handle(Button::Next, 6), Transition::Location(3));
        assert_eq!(nav.mode(), ScreenMode::Weather);
        assert_eq!(nav.location(), 3);
    }

    #[test]
    fn test_location_paging_wraps() {
        let mut nav = at(ScreenMode::Weather, 5);
        assert_eq!(nav.handle(Button::Next, 6), Transition::Location(0));
        assert_eq!(nav.handle(Button::Previous, 6), Transition::Location(5));
    }

    #[test]
    fn test_next_on_graph_changes_mode_only() {
        let mut nav = at(ScreenMode::Graph, 4);
        assert_eq!(nav.handle(Button::Next, 6), Transition::Mode(ScreenMode::Stats));
        assert_eq!(nav.location(), 4);
    }

    #[test]
    fn test_single_location_weather_cycles_modes() {
        let mut nav = at(ScreenMode::Weather, 0);
        assert_eq!(nav.handle(Button::Next, 1), Transition::Mode(ScreenMode::Device));
        let mut nav = at(ScreenMode::Weather, 0);
        assert_eq!(nav.handle(Button::Previous, 0), Transition::Mode(ScreenMode::Stats));
    }

    #[test]
    fn test_previous_wraps_modes() {
        let mut nav = at(ScreenMode::Normal, 0);
        assert_eq!(nav.handle(Button::Previous, 3), Transition::Mode(ScreenMode::Device));
    }

    #[test]
    fn test_home_returns_to_home_mode() {
        let mut nav = at(ScreenMode::Weather, 2);
        assert_eq!(nav.handle(Button::Home, 6), Transition::Mode(ScreenMode::Normal));
        assert_eq!(nav.location(), 2);
        assert_eq!(nav.handle(Button::Home, 6), Transition::Mode(ScreenMode::Normal));
    }

    #[test]
    fn test_custom_home_mode() {
        let mut nav = NavigationController::new(ScreenMode::Weather);
        nav.handle(Button::Next, 1);
        assert_eq!(nav.handle(Button::Home, 1), Transition::Mode(ScreenMode::Weather));
    }
}
