//! Abstract drawing surface.
//!
//! Renderers only issue three kinds of drawing intent: fill a rectangle,
//! draw a line, draw a string. Any `DrawTarget<Color = Rgb565>` (simulator
//! window, framebuffer, SPI display driver) is a [`Surface`] through the
//! blanket impl below, so the core never touches pixels directly.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, WHITE};
use crate::styles::{CENTERED, LARGE_FONT, LEFT, MEDIUM_FONT, RIGHT, SMALL_FONT};

/// Text scale.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

/// Horizontal anchor of a string relative to its position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Foreground/background color, scale and alignment for one string.
///
/// Text is always vertically centered on its anchor point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextSpec {
    pub color: Rgb565,
    pub background: Option<Rgb565>,
    pub size: TextSize,
    pub align: Align,
}

impl TextSpec {
    pub const fn new(color: Rgb565, size: TextSize, align: Align) -> Self {
        Self {
            color,
            background: None,
            size,
            align,
        }
    }

    pub const fn small(color: Rgb565) -> Self { Self::new(color, TextSize::Small, Align::Left) }

    pub const fn medium(color: Rgb565) -> Self { Self::new(color, TextSize::Medium, Align::Left) }

    pub const fn large(color: Rgb565) -> Self { Self::new(color, TextSize::Large, Align::Center) }

    #[must_use]
    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub const fn on(mut self, background: Rgb565) -> Self {
        self.background = Some(background);
        self
    }
}

impl Default for TextSpec {
    fn default() -> Self { Self::small(WHITE) }
}

/// Drawing intents understood by every display backend.
pub trait Surface {
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565);

    /// One-pixel line between two points, both inclusive.
    fn line(&mut self, from: Point, to: Point, color: Rgb565);

    fn text(&mut self, text: &str, at: Point, spec: TextSpec);

    /// Fill `area` with the background color.
    fn clear_area(&mut self, area: Rectangle) { self.fill_rect(area, BLACK); }
}

impl<D> Surface for D
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) {
        area.into_styled(PrimitiveStyle::with_fill(color)).draw(self).ok();
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb565) {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .ok();
    }

    fn text(&mut self, text: &str, at: Point, spec: TextSpec) {
        let font = match spec.size {
            TextSize::Small => SMALL_FONT,
            TextSize::Medium => MEDIUM_FONT,
            TextSize::Large => LARGE_FONT,
        };
        let layout = match spec.align {
            Align::Left => LEFT,
            Align::Center => CENTERED,
            Align::Right => RIGHT,
        };
        let mut style = MonoTextStyle::new(font, spec.color);
        style.background_color = spec.background;
        Text::with_text_style(text, at, style, layout).draw(self).ok();
    }
}

// =============================================================================
// Test Surface
// =============================================================================


#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::recording::{Command, RecordingSurface};
    use super::*;

    #[test]
    fn test_draw_target_fill_sets_pixels() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.fill_rect(Rectangle::new(Point::new(1, 1), Size::new(2, 2)), WHITE);
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_draw_target_line() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.line(Point::new(0, 3), Point::new(4, 3), WHITE);
        assert_eq!(display.get_pixel(Point::new(4, 3)), Some(WHITE));
    }

    #[test]
    fn test_recording_surface_captures_commands() {
        let mut surface = RecordingSurface::new();
        surface.clear_area(Rectangle::new(Point::zero(), Size::new(10, 10)));
        surface.text("21.5", Point::new(5, 5), TextSpec::large(WHITE));
        assert_eq!(surface.len(), 2);
        assert!(matches!(surface.commands[0], Command::Fill { color, .. } if color == BLACK));
        assert_eq!(surface.texts(), vec!["21.5"]);
        assert!(surface.filled(Rectangle::new(Point::new(2, 2), Size::new(3, 3))));
    }
}
