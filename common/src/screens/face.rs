//! Idle face.
//!
//! Takes over the whole screen while the dashboard is idle. Every feature
//! is derived from data the dashboard already holds:
//!
//! | Feature | Source                                                       |
//! |---------|--------------------------------------------------------------|
//! | cheeks  | temperature band, then humidity band                         |
//! | eyelids | blink window from the idle controller                        |
//! | mouth   | weather condition if known, else temperature band            |
//! | brows   | weather condition                                            |
//!
//! The face runs on its own faster cadence. Each frame only repaints the
//! features that changed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Screen, ScreenData};
use crate::colors::{BLACK, CYAN, FACE, ORANGE, PINK, RED};
use crate::config::{CENTER_X, CENTER_Y, SCREEN};
use crate::sample::Field;
use crate::surface::Surface;
use crate::thresholds::Band;
use crate::weather::ConditionSymbol;

// =============================================================================
// Geometry
// =============================================================================

const HEAD: Rectangle = Rectangle::new(Point::new(CENTER_X - 100, CENTER_Y - 90), Size::new(200, 180));
const EYES: [Point; 2] = [Point::new(CENTER_X - 40, CENTER_Y - 20), Point::new(CENTER_X + 40, CENTER_Y - 20)];
const EYE_SIZE: Size = Size::new(20, 26);
const EYE_AREA: Size = Size::new(24, 30);
const BROW_OFFSET: Point = Point::new(0, -28);
const BROW_AREA: Size = Size::new(40, 16);
const CHEEKS: [Point; 2] = [Point::new(CENTER_X - 60, CENTER_Y + 20), Point::new(CENTER_X + 60, CENTER_Y + 20)];
const CHEEK_SIZE: Size = Size::new(28, 14);
const MOUTH: Point = Point::new(CENTER_X, CENTER_Y + 50);
const MOUTH_AREA: Size = Size::new(80, 30);

// =============================================================================
// Features
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mouth {
    Smile,
    Flat,
    Frown,
    Open,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Brows {
    Level,
    Raised,
    Worried,
    Angry,
}

/// Everything that varies on the face.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Features {
    /// `None` draws cheeks in the skin color.
    pub cheeks: Option<Rgb565>,
    pub eyes_closed: bool,
    pub mouth: Mouth,
    pub brows: Brows,
}

impl Features {
    pub fn from_data(data: &ScreenData<'_>) -> Self {
        let bands = &data.config.bands;
        let latest = data.latest();
        let temperature = latest.map(|s| bands.for_field(Field::Temperature).classify(s.temperature));
        let humidity = latest.map(|s| bands.for_field(Field::Humidity).classify(s.humidity));

        let cheeks = match (temperature, humidity) {
            (Some(Band::High), _) => Some(RED),
            (Some(Band::Low), _) => Some(CYAN),
            (_, Some(Band::High)) => Some(PINK),
            (_, Some(Band::Low)) => Some(ORANGE),
            _ => None,
        };

        let entry = data.entry();
        let condition = (entry.valid && entry.symbol != ConditionSymbol::Unknown).then_some(entry.symbol);

        let mouth = match (condition, temperature) {
            (Some(ConditionSymbol::Clear), _) => Mouth::Smile,
            (Some(ConditionSymbol::Cloudy), _) => Mouth::Flat,
            (Some(ConditionSymbol::Rain | ConditionSymbol::Snow), _) => Mouth::Frown,
            (Some(ConditionSymbol::Thunder), _) => Mouth::Open,
            (_, Some(Band::High)) => Mouth::Open,
            (_, Some(Band::Low)) => Mouth::Frown,
            (_, Some(Band::Neutral)) => Mouth::Smile,
            (_, None) => Mouth::Flat,
        };

        let brows = match condition {
            Some(ConditionSymbol::Clear) => Brows::Raised,
            Some(ConditionSymbol::Rain | ConditionSymbol::Snow) => Brows::Worried,
            Some(ConditionSymbol::Thunder) => Brows::Angry,
            _ => Brows::Level,
        };

        Self {
            cheeks,
            eyes_closed: data.blink_closed,
            mouth,
            brows,
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Idle face renderer.
#[derive(Default)]
pub struct FaceScreen {
    shown: Option<Features>,
}

impl FaceScreen {
    fn draw_eyes<S: Surface>(
        surface: &mut S,
        closed: bool,
    ) {
        for eye in EYES {
            surface.fill_rect(Rectangle::with_center(eye, EYE_AREA), FACE);
            if closed {
                let half = EYE_SIZE.width as i32 / 2;
                surface.line(eye + Point::new(-half, 4), eye + Point::new(half, 4), BLACK);
            } else {
                surface.fill_rect(Rectangle::with_center(eye, EYE_SIZE), BLACK);
            }
        }
    }

    fn draw_brows<S: Surface>(
        surface: &mut S,
        brows: Brows,
    ) {
        for (side, eye) in [-1, 1].into_iter().zip(EYES) {
            let center = eye + BROW_OFFSET;
            surface.fill_rect(Rectangle::with_center(center, BROW_AREA), FACE);
            // dy for the inner (toward the nose) and outer ends.
            let (inner, outer) = match brows {
                Brows::Level => (0, 0),
                Brows::Raised => (-5, -5),
                Brows::Worried => (-5, 3),
                Brows::Angry => (5, -3),
            };
            let inner_pt = center + Point::new(-side * 14, inner);
            let outer_pt = center + Point::new(side * 14, outer);
            surface.line(inner_pt, outer_pt, BLACK);
            surface.line(inner_pt + Point::new(0, 1), outer_pt + Point::new(0, 1), BLACK);
        }
    }

    fn draw_cheeks<S: Surface>(
        surface: &mut S,
        cheeks: Option<Rgb565>,
    ) {
        for cheek in CHEEKS {
            surface.fill_rect(Rectangle::with_center(cheek, CHEEK_SIZE), cheeks.unwrap_or(FACE));
        }
    }

    fn draw_mouth<S: Surface>(
        surface: &mut S,
        mouth: Mouth,
    ) {
        surface.fill_rect(Rectangle::with_center(MOUTH, MOUTH_AREA), FACE);
        let at = |x: i32, y: i32| MOUTH + Point::new(x, y);
        match mouth {
            Mouth::Smile => {
                surface.line(at(-30, -8), at(-15, 6), BLACK);
                surface.line(at(-15, 6), at(15, 6), BLACK);
                surface.line(at(15, 6), at(30, -8), BLACK);
            }
            Mouth::Frown => {
                surface.line(at(-30, 8), at(-15, -4), BLACK);
                surface.line(at(-15, -4), at(15, -4), BLACK);
                surface.line(at(15, -4), at(30, 8), BLACK);
            }
            Mouth::Flat => surface.line(at(-25, 0), at(25, 0), BLACK),
            Mouth::Open => surface.fill_rect(Rectangle::with_center(MOUTH, Size::new(24, 18)), BLACK),
        }
    }
}

impl Screen for FaceScreen {
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        let features = Features::from_data(data);
        surface.clear_area(SCREEN);
        surface.fill_rect(HEAD, FACE);
        Self::draw_eyes(surface, features.eyes_closed);
        Self::draw_brows(surface, features.brows);
        Self::draw_cheeks(surface, features.cheeks);
        Self::draw_mouth(surface, features.mouth);
        self.shown = Some(features);
    }

    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        let Some(shown) = self.shown else {
            self.draw_full(surface, data);
            return;
        };

        let features = Features::from_data(data);
        if features.eyes_closed != shown.eyes_closed {
            Self::draw_eyes(surface, features.eyes_closed);
        }
        if features.brows != shown.brows {
            Self::draw_brows(surface, features.brows);
        }
        if features.cheeks != shown.cheeks {
            Self::draw_cheeks(surface, features.cheeks);
        }
        if features.mouth != shown.mouth {
            Self::draw_mouth(surface, features.mouth);
        }
        self.shown = Some(features);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixture::Fixture;
    use crate::surface::recording::RecordingSurface;
    use crate::weather::classify;

    fn with_weather(fx: &mut Fixture, description: &str) {
        fx.weather.update(0, description, classify(description), 15.0, fx.now);
    }

    #[test]
    fn test_weather_condition_drives_mouth_first() {
        let mut fx = Fixture::new();
        fx.record(35.0, 50.0, 800);
        with_weather(&mut fx, "light rain");
        let f = Features::from_data(&fx.data());
        assert_eq!(f.mouth, Mouth::Frown);
        assert_eq!(f.brows, Brows::Worried);
        assert_eq!(f.cheeks, Some(RED));
    }

    #[test]
    fn test_temperature_fallback_without_weather() {
        let mut fx = Fixture::new();
        fx.record(35.0, 50.0, 800);
        assert_eq!(Features::from_data(&fx.data()).mouth, Mouth::Open);
        fx.record(22.0, 50.0, 800);
        let f = Features::from_data(&fx.data());
        assert_eq!(f.mouth, Mouth::Smile);
        assert_eq!(f.cheeks, None);
        assert_eq!(f.brows, Brows::Level);
    }

    #[test]
    fn test_unknown_condition_falls_back_to_temperature() {
        let mut fx = Fixture::new();
        fx.record(10.0, 50.0, 800);
        with_weather(&mut fx, "mist");
        assert_eq!(Features::from_data(&fx.data()).mouth, Mouth::Frown);
    }

    #[test]
    fn test_humidity_cheeks_when_temperature_neutral() {
        let mut fx = Fixture::new();
        fx.record(22.0, 85.0, 800);
        assert_eq!(Features::from_data(&fx.data()).cheeks, Some(PINK));
        fx.record(22.0, 20.0, 800);
        assert_eq!(Features::from_data(&fx.data()).cheeks, Some(ORANGE));
    }

    #[test]
    fn test_full_draw_covers_screen() {
        let fx = Fixture::new();
        let mut screen = FaceScreen::default();
        let mut surface = RecordingSurface::new();
        screen.draw_full(&mut surface, &fx.data());
        assert!(surface.filled(SCREEN));
        assert!(surface.filled(HEAD));
    }

    #[test]
    fn test_blink_repaints_only_eyes() {
        let mut fx = Fixture::new();
        fx.record(22.0, 50.0, 800);
        let mut screen = FaceScreen::default();
        let mut surface = RecordingSurface::new();
        screen.draw_full(&mut surface, &fx.data());

        surface.reset();
        screen.draw_incremental(&mut surface, &fx.data());
        assert!(surface.is_empty());

        fx.blink_closed = true;
        screen.draw_incremental(&mut surface, &fx.data());
        // Two eye areas cleared, one lid line each.
        assert_eq!(surface.fills().len(), 2);
        assert_eq!(surface.line_count(), 2);
    }
}
