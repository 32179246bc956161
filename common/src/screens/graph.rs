//! Time-series graph of the sample buffer.
//!
//! All three fields share one plot area; each series is scaled into it by
//! its own [`GraphDomain`](crate::config::GraphDomain).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use super::{Screen, ScreenData, ScreenMode};
use crate::colors::{GRAY, GREEN, RED, YELLOW};
use crate::config::{BODY, SCREEN_WIDTH};
use crate::sample::Field;
use crate::surface::{Surface, TextSpec};
use crate::widgets::{draw_frame, draw_header, draw_line_series};

const LEGEND_Y: i32 = BODY.top_left.y + 10;

const FRAME: Rectangle = Rectangle::new(
    Point::new(6, BODY.top_left.y + 20),
    Size::new(SCREEN_WIDTH - 12, BODY.size.height - 26),
);

/// Plot area inside the frame.
const PLOT: Rectangle = Rectangle::new(
    Point::new(FRAME.top_left.x + 1, FRAME.top_left.y + 1),
    Size::new(FRAME.size.width - 2, FRAME.size.height - 2),
);

const fn series_color(field: Field) -> Rgb565 {
    match field {
        Field::Temperature => RED,
        Field::Humidity => GREEN,
        Field::Illuminance => YELLOW,
    }
}

/// Graph screen.
#[derive(Default)]
pub struct GraphScreen {
    /// Buffer generation last plotted. `None` until the first full draw.
    drawn: Option<u32>,
}

impl GraphScreen {
    fn draw_series<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(PLOT);
        for field in Field::ALL {
            let values = data
                .samples
                .iter_chronological()
                .map(|slot| slot.sample().map(|s| s.value(field)));
            draw_line_series(surface, PLOT, values, data.config.graph.domain(field), series_color(field));
        }
        self.drawn = Some(data.samples.recorded_count());
    }

    /// Forget the plotted generation so the next incremental call redraws.
    pub fn invalidate(&mut self) { self.drawn = None; }
}

impl Screen for GraphScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(BODY);
        draw_header(surface, ScreenMode::Graph.title(), None);

        let mut x = 12;
        for field in Field::ALL {
            surface.text(field.label(), Point::new(x, LEGEND_Y), TextSpec::small(series_color(field)));
            x += 60;
        }
        draw_frame(surface, FRAME, GRAY);
        self.draw_series(surface, data);
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        match self.drawn {
            None => self.draw_full(surface, data),
            Some(generation) if generation == data.samples.recorded_count() => {
                debug!("graph unchanged at generation {generation}, skipping");
            }
            Some(_) => self.draw_series(surface, data),
        }
    }
}
