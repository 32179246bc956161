//! Digital output status.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use super::{Screen, ScreenData, ScreenMode};
use crate::colors::{GRAY, GREEN, LIGHT_GRAY, RED};
use crate::config::{BODY, CENTER_X};
use crate::surface::{Align, Surface, TextSize, TextSpec};
use crate::widgets::{draw_banded_value, draw_header};

const TOP: i32 = BODY.top_left.y;
const STATE_BOX: Rectangle = Rectangle::new(Point::new(CENTER_X - 80, TOP + 40), Size::new(160, 56));
const RULE_POS: Point = Point::new(CENTER_X, TOP + 120);
const SENSORS_POS: Point = Point::new(CENTER_X, TOP + 150);

/// Output status screen.
///
/// The output can flip on any tick, so the state box is repainted every
/// tick. The surrounding labels are static.
#[derive(Default)]
pub struct DeviceScreen;

impl DeviceScreen {
    fn draw_state<S: Surface>(
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        let (text, color) = if data.output_on { ("ON", RED) } else { ("OFF", GRAY) };
        draw_banded_value(surface, STATE_BOX, text, color, TextSize::Large);
    }
}

impl Screen for DeviceScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(BODY);
        draw_header(surface, ScreenMode::Device.title(), None);
        surface.text("Output", Point::new(CENTER_X, TOP + 24), TextSpec::small(LIGHT_GRAY).align(Align::Center));
        Self::draw_state(surface, data);

        let rule = data.config.output;
        let mut text: String<40> = String::new();
        write!(text, "on if light <= {} or temp >= {:.1}C", rule.dark_at, rule.hot_at).ok();
        surface.text(&text, RULE_POS, TextSpec::small(LIGHT_GRAY).align(Align::Center));

        let (sensors, color) = if data.sensors_offline { ("sensors OFFLINE", RED) } else { ("sensors OK", GREEN) };
        surface.text(sensors, SENSORS_POS, TextSpec::new(color, TextSize::Small, Align::Center));
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        Self::draw_state(surface, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixture::Fixture;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_full_draw_shows_state_and_rule() {
        let mut fx = Fixture::new();
        fx.output_on = true;
        let mut surface = RecordingSurface::new();
        DeviceScreen.draw_full(&mut surface, &fx.data());
        assert_eq!(surface.text_color("ON"), Some(RED));
        assert!(surface.has_text("on if light <= 200 or temp >= 30.0C"));
        assert!(surface.has_text("sensors OK"));
    }

    #[test]
    fn test_incremental_repaints_state_box() {
        let fx = Fixture::new();
        let mut surface = RecordingSurface::new();
        DeviceScreen.draw_incremental(&mut surface, &fx.data());
        assert_eq!(surface.texts(), vec!["OFF"]);
        assert_eq!(surface.fills(), vec![STATE_BOX]);
    }
}
