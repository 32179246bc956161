//! Weather for the selected location, redrawn region by region.
//!
//! ```text
//! +--------------------------------------+
//! | city name                            |  CITY
//! |  +------+                            |
//! |  | icon |        17.5C               |  ICON / TEMPERATURE
//! |  +------+                            |
//! |          scattered clouds            |  DESCRIPTION
//! |              STALE                   |  STATUS
//! +--------------------------------------+
//! ```
//!
//! Each region is repainted only when its own value differs from the
//! snapshot of what is on screen. Temperature has a noise floor: changes
//! smaller than `repaint_delta` leave the old value displayed.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Screen, ScreenData, ScreenMode};
use crate::colors::{GRAY, LIGHT_GRAY, ORANGE, WHITE};
use crate::config::{BODY, SCREEN_WIDTH};
use crate::sample::Field;
use crate::surface::{Align, Surface, TextSize, TextSpec};
use crate::weather::{CacheEntry, ConditionSymbol, Description};
use crate::widgets::{draw_banded_value, draw_condition_icon, draw_header, format_value};

const TOP: i32 = BODY.top_left.y;

const CITY: Rectangle = Rectangle::new(Point::new(0, TOP + 4), Size::new(SCREEN_WIDTH, 28));
const DATA: Rectangle = Rectangle::new(Point::new(0, TOP + 34), Size::new(SCREEN_WIDTH, BODY.size.height - 34));
const ICON_CENTER: Point = Point::new(64, TOP + 74);
const TEMPERATURE: Rectangle = Rectangle::new(Point::new(120, TOP + 52), Size::new(190, 44));
const DESCRIPTION: Rectangle = Rectangle::new(Point::new(8, TOP + 118), Size::new(SCREEN_WIDTH - 16, 20));
const STATUS: Rectangle = Rectangle::new(Point::new(8, TOP + 146), Size::new(SCREEN_WIDTH - 16, 20));

/// Freshness marker under the description.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Status {
    Fresh,
    Fetching,
    Stale,
}

impl Status {
    fn of(
        entry: &CacheEntry,
        data: &ScreenData<'_>,
    ) -> Self {
        if data.fetching {
            Self::Fetching
        } else if entry.is_stale(data.now, data.config.weather.stale_after_ms) {
            Self::Stale
        } else {
            Self::Fresh
        }
    }
}

/// What the data regions currently show.
struct Shown {
    symbol: ConditionSymbol,
    description: Description,
    temperature: f32,
    status: Status,
}

/// Weather screen with per-region diffing.
#[derive(Default)]
pub struct WeatherScreen {
    /// Location whose header and name are on screen.
    city: Option<usize>,
    /// Snapshot of valid data on screen. `None` while a placeholder is shown.
    shown: Option<Shown>,
    /// Placeholder on screen: location and whether it said "fetching".
    placeholder: Option<(usize, bool)>,
}

impl WeatherScreen {
    /// Location whose valid data is on screen, if any.
    pub fn displayed_city(&self) -> Option<usize> { self.shown.as_ref().and(self.city) }

    fn draw_placeholder<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        let text = if data.fetching { "fetching..." } else { "no data" };
        draw_banded_value(surface, DATA, text, GRAY, TextSize::Medium);
        self.placeholder = Some((data.location, data.fetching));
        self.shown = None;
    }

    fn draw_data<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
        entry: &CacheEntry,
    ) {
        surface.clear_area(DATA);
        let shown = Shown {
            symbol: entry.symbol,
            description: entry.description.clone(),
            temperature: entry.temperature,
            status: Status::of(entry, data),
        };
        draw_condition_icon(surface, ICON_CENTER, shown.symbol);
        Self::draw_temperature(surface, data, shown.temperature);
        Self::draw_description(surface, entry);
        Self::draw_status(surface, shown.status);
        self.shown = Some(shown);
        self.placeholder = None;
    }

    fn draw_temperature<S: Surface>(
        surface: &mut S,
        data: &ScreenData<'_>,
        temperature: f32,
    ) {
        let text = format_value(Field::Temperature, temperature);
        let color = data.config.bands.color(Field::Temperature, temperature);
        draw_banded_value(surface, TEMPERATURE, &text, color, TextSize::Large);
    }

    fn draw_description<S: Surface>(
        surface: &mut S,
        entry: &CacheEntry,
    ) {
        let text = if entry.description.is_empty() { entry.symbol.label() } else { entry.description.as_str() };
        draw_banded_value(surface, DESCRIPTION, text, WHITE, TextSize::Small);
    }

    fn draw_status<S: Surface>(
        surface: &mut S,
        status: Status,
    ) {
        surface.clear_area(STATUS);
        let (text, color) = match status {
            Status::Fresh => return,
            Status::Fetching => ("updating...", LIGHT_GRAY),
            Status::Stale => ("STALE", ORANGE),
        };
        surface.text(text, STATUS.center(), TextSpec::small(color).align(Align::Center));
    }
}

impl Screen for WeatherScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        surface.clear_area(BODY);
        let page = (data.locations.len() > 1).then_some((data.location, data.locations.len()));
        draw_header(surface, ScreenMode::Weather.title(), page);
        surface.text(data.location_name(), Point::new(16, CITY.center().y), TextSpec::medium(WHITE));
        self.city = Some(data.location);

        let entry = data.entry();
        if entry.valid {
            self.draw_data(surface, data, entry);
        } else {
            self.draw_placeholder(surface, data);
        }
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        if self.city != Some(data.location) {
            self.draw_full(surface, data);
            return;
        }

        let entry = data.entry();
        if !entry.valid {
            if self.placeholder != Some((data.location, data.fetching)) {
                self.draw_placeholder(surface, data);
            }
            return;
        }

        let Some(shown) = self.shown.as_mut() else {
            // First valid data after a placeholder.
            self.draw_full(surface, data);
            return;
        };

        if entry.symbol != shown.symbol {
            draw_condition_icon(surface, ICON_CENTER, entry.symbol);
            shown.symbol = entry.symbol;
        }
        if entry.description != shown.description {
            Self::draw_description(surface, entry);
            shown.description = entry.description.clone();
        }
        let delta = micromath::F32(entry.temperature - shown.temperature).abs().0;
        if delta >= data.config.weather.repaint_delta {
            Self::draw_temperature(surface, data, entry.temperature);
            shown.temperature = entry.temperature;
        }
        let status = Status::of(entry, data);
        if status != shown.status {
            Self::draw_status(surface, status);
            shown.status = status;
        }
    }
}
