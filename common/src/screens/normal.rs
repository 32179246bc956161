//! Live readings: one banded value box per field.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Screen, ScreenData, ScreenMode};
use crate::colors::{GRAY, LIGHT_GRAY};
use crate::config::BODY;
use crate::sample::Field;
use crate::surface::{Surface, TextSize};
use crate::widgets::{draw_banded_value, draw_header, draw_label, format_value};

const ROW_HEIGHT: i32 = BODY.size.height as i32 / 3;
const LABEL_X: i32 = 16;
const VALUE_X: i32 = 110;
const VALUE_SIZE: Size = Size::new(200, 40);

const fn row_center_y(row: usize) -> i32 { BODY.top_left.y + ROW_HEIGHT * row as i32 + ROW_HEIGHT / 2 }

/// Fixed value box for `row`.
const fn value_box(row: usize) -> Rectangle {
    Rectangle::new(
        Point::new(VALUE_X, row_center_y(row) - VALUE_SIZE.height as i32 / 2),
        VALUE_SIZE,
    )
}

/// Live readings screen.
///
/// Values change nearly every tick, so the incremental path repaints all
/// three value boxes unconditionally. Each box is small and fixed-size.
#[derive(Default)]
pub struct NormalScreen;

impl NormalScreen {
    fn draw_values<S: Surface>(
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        let latest = data.latest();
        for (row, field) in Field::ALL.into_iter().enumerate() {
            match latest {
                Some(sample) => {
                    let value = sample.value(field);
                    let text = format_value(field, value);
                    let color = data.config.bands.color(field, value);
                    draw_banded_value(surface, value_box(row), &text, color, TextSize::Large);
                }
                None => draw_banded_value(surface, value_box(row), "--", GRAY, TextSize::Large),
            }
        }
    }
}

impl Screen for NormalScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(BODY);
        draw_header(surface, ScreenMode::Normal.title(), None);
        for (row, field) in Field::ALL.into_iter().enumerate() {
            draw_label(surface, field.label(), Point::new(LABEL_X, row_center_y(row)), LIGHT_GRAY);
        }
        Self::draw_values(surface, data);
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        Self::draw_values(surface, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{CYAN, RED, WHITE, YELLOW};
    use crate::screens::fixture::Fixture;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_full_draw_shows_labels_and_banded_values() {
        let mut fx = Fixture::new();
        fx.record(29.0, 50.0, 1600);
        let mut surface = RecordingSurface::new();
        NormalScreen.draw_full(&mut surface, &fx.data());

        assert!(surface.filled(BODY));
        for label in ["Temp", "Humid", "Light"] {
            assert!(surface.has_text(label));
        }
        assert_eq!(surface.text_color("29.0C"), Some(RED));
        assert_eq!(surface.text_color("50%"), Some(WHITE));
        assert_eq!(surface.text_color("1600"), Some(YELLOW));
    }

    #[test]
    fn test_incremental_repaints_value_boxes_only() {
        let mut fx = Fixture::new();
        fx.record(12.0, 50.0, 800);
        let mut surface = RecordingSurface::new();
        NormalScreen.draw_incremental(&mut surface, &fx.data());

        assert_eq!(surface.texts(), vec!["12.0C", "50%", "800"]);
        assert_eq!(surface.text_color("12.0C"), Some(CYAN));
        assert!(!surface.filled(BODY));
    }

    #[test]
    fn test_placeholders_without_samples() {
        let fx = Fixture::new();
        let mut surface = RecordingSurface::new();
        NormalScreen.draw_incremental(&mut surface, &fx.data());
        assert_eq!(surface.texts(), vec!["--", "--", "--"]);
    }

    #[test]
    fn test_value_boxes_stay_inside_body() {
        for row in 0..3 {
            let b = value_box(row);
            assert!(b.top_left.y >= BODY.top_left.y);
            assert!(b.top_left.y + b.size.height as i32 <= BODY.top_left.y + BODY.size.height as i32);
        }
    }
}
