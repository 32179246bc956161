//! Banded numeric value boxes and labels.
//!
//! One helper serves every color-coded reading on every screen: the caller
//! picks the color (usually via [`Bands::color`](crate::thresholds::Bands::color)),
//! the widget clears its box and prints the text centered in it.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::sample::Field;
use crate::surface::{Align, Surface, TextSize, TextSpec};

/// Formatted reading, e.g. `21.5C`, `48%`, `640`.
pub type ValueText = String<12>;

/// Format `value` with the unit and precision used for `field`.
pub fn format_value(
    field: Field,
    value: f32,
) -> ValueText {
    let mut text = ValueText::new();
    match field {
        Field::Temperature => write!(text, "{value:.1}C").ok(),
        Field::Humidity => write!(text, "{value:.0}%").ok(),
        Field::Illuminance => write!(text, "{value:.0}").ok(),
    };
    text
}

/// Clear `area` and print `text` centered in it.
pub fn draw_banded_value<S>(
    surface: &mut S,
    area: Rectangle,
    text: &str,
    color: Rgb565,
    size: TextSize,
) where
    S: Surface,
{
    surface.clear_area(area);
    surface.text(text, area.center(), TextSpec::new(color, size, Align::Center));
}

/// Print a small left-aligned label, vertically centered on `at`.
pub fn draw_label<S>(
    surface: &mut S,
    text: &str,
    at: Point,
    color: Rgb565,
) where
    S: Surface,
{
    surface.text(text, at, TextSpec::small(color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED};
    use crate::surface::recording::{Command, RecordingSurface};

    #[test]
    fn test_format_value_per_field() {
        assert_eq!(format_value(Field::Temperature, 21.54).as_str(), "21.5C");
        assert_eq!(format_value(Field::Temperature, -3.0).as_str(), "-3.0C");
        assert_eq!(format_value(Field::Humidity, 48.4).as_str(), "48%");
        assert_eq!(format_value(Field::Illuminance, 1500.0).as_str(), "1500");
    }

    #[test]
    fn test_banded_value_clears_then_prints() {
        let mut surface = RecordingSurface::new();
        let area = Rectangle::new(Point::new(10, 10), Size::new(100, 30));
        draw_banded_value(&mut surface, area, "29.0C", RED, TextSize::Large);
        assert_eq!(
            surface.commands[0],
            Command::Fill {
                area,
                color: BLACK
            }
        );
        assert_eq!(surface.text_color("29.0C"), Some(RED));
    }
}
