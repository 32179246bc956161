//! Aggregate statistics table: rows are fields, columns are avg/max/min.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Screen, ScreenData, ScreenMode};
use crate::colors::{GRAY, LIGHT_GRAY};
use crate::config::BODY;
use crate::sample::{Aggregate, Field};
use crate::surface::{Align, Surface, TextSize, TextSpec};
use crate::widgets::{draw_banded_value, draw_header, draw_label, format_value};

const COLUMNS: [&str; 3] = ["avg", "max", "min"];
const COLUMN_X: [i32; 3] = [130, 200, 270];
const CELL_SIZE: Size = Size::new(66, 28);
const TITLE_Y: i32 = BODY.top_left.y + 18;
const FIRST_ROW_Y: i32 = BODY.top_left.y + 60;
const ROW_PITCH: i32 = 50;
const LABEL_X: i32 = 16;

const fn row_y(row: usize) -> i32 { FIRST_ROW_Y + ROW_PITCH * row as i32 }

const fn cell(row: usize, column: usize) -> Rectangle {
    Rectangle::new(
        Point::new(COLUMN_X[column] - CELL_SIZE.width as i32 / 2, row_y(row) - CELL_SIZE.height as i32 / 2),
        CELL_SIZE,
    )
}

/// Statistics screen.
///
/// Aggregates only change when a sample is recorded, so the incremental
/// path compares the buffer generation like the graph does.
#[derive(Default)]
pub struct StatsScreen {
    drawn: Option<u32>,
}

impl StatsScreen {
    fn draw_cells<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        for (row, field) in Field::ALL.into_iter().enumerate() {
            let agg = data.samples.aggregate(field);
            let values = [agg.avg, agg.max, agg.min];
            for (column, value) in values.into_iter().enumerate() {
                Self::draw_cell(surface, data, cell(row, column), field, &agg, value);
            }
        }
        self.drawn = Some(data.samples.recorded_count());
    }

    fn draw_cell<S: Surface>(
        surface: &mut S,
        data: &ScreenData<'_>,
        area: Rectangle,
        field: Field,
        agg: &Aggregate,
        value: f32,
    ) {
        if agg.count == 0 {
            draw_banded_value(surface, area, "--", GRAY, TextSize::Medium);
        } else {
            let text = format_value(field, value);
            draw_banded_value(surface, area, &text, data.config.bands.color(field, value), TextSize::Medium);
        }
    }
}

impl Screen for StatsScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(BODY);
        draw_header(surface, ScreenMode::Stats.title(), None);

        for (title, x) in COLUMNS.into_iter().zip(COLUMN_X) {
            surface.text(title, Point::new(x, TITLE_Y), TextSpec::small(LIGHT_GRAY).align(Align::Center));
        }
        surface.line(
            Point::new(LABEL_X, TITLE_Y + 10),
            Point::new(BODY.size.width as i32 - LABEL_X, TITLE_Y + 10),
            GRAY,
        );
        for (row, field) in Field::ALL.into_iter().enumerate() {
            draw_label(surface, field.label(), Point::new(LABEL_X, row_y(row)), LIGHT_GRAY);
        }

        self.draw_cells(surface, data);
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        match self.drawn {
            None => self.draw_full(surface, data),
            Some(generation) if generation == data.samples.recorded_count() => {}
            Some(_) => self.draw_cells(surface, data),
        }
    }
}
