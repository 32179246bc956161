//! Application configuration.
//!
//! Two kinds of settings live here:
//!
//! - **Layout constants**: display geometry and screen regions, computed at
//!   compile time so renderers never recalculate positions per frame.
//! - **[`Config`]**: runtime-tunable behaviour (idle timeouts, thresholds,
//!   graph domains, weather refresh policy). Defaults are `const` so a
//!   firmware build can hold the config in flash; [`Config::validate`]
//!   rejects inconsistent values before a [`Dashboard`](crate::dashboard::Dashboard)
//!   is built.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::error::ConfigError;
use crate::output::OutputRule;
use crate::sample::{Field, Millis};
use crate::screens::ScreenMode;
use crate::thresholds::Bands;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (M5Stack-class 320x240 panel).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Footer (notice bar) height in pixels.
pub const FOOTER_HEIGHT: u32 = 20;

/// Top of the footer bar.
pub const FOOTER_Y: i32 = (SCREEN_HEIGHT - FOOTER_HEIGHT) as i32;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Whole screen.
pub const SCREEN: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Header bar.
pub const HEADER: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Area between header and footer.
pub const BODY: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT - FOOTER_HEIGHT),
);

/// Footer bar, reserved for notices.
pub const FOOTER: Rectangle = Rectangle::new(Point::new(0, FOOTER_Y), Size::new(SCREEN_WIDTH, FOOTER_HEIGHT));

// =============================================================================
// Sampling Configuration
// =============================================================================

/// Number of samples kept for graph and statistics.
pub const SAMPLE_CAPACITY: usize = 60;

/// Period of the data/render tick.
pub const TICK_MS: Millis = 1_000;

/// Maximum number of weather locations.
pub const MAX_LOCATIONS: usize = 8;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Idle detection and idle-face animation timing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IdleConfig {
    /// Time without input before the idle face takes over.
    pub timeout_ms: Millis,
    /// Optional per-mode timeouts, indexed by [`ScreenMode::index`].
    pub per_mode_ms: [Option<Millis>; ScreenMode::COUNT],
    /// Idle face animation cadence.
    pub frame_ms: Millis,
    /// Time between blinks.
    pub blink_interval_ms: Millis,
    /// How long the eyes stay closed.
    pub blink_duration_ms: Millis,
}

impl IdleConfig {
    pub const DEFAULT: Self = Self {
        timeout_ms: 60_000,
        per_mode_ms: [None; ScreenMode::COUNT],
        frame_ms: 200,
        blink_interval_ms: 4_000,
        blink_duration_ms: 200,
    };

    /// Timeout that applies while `mode` is on screen.
    pub const fn timeout_for(&self, mode: ScreenMode) -> Millis {
        match self.per_mode_ms[mode.index()] {
            Some(ms) => ms,
            None => self.timeout_ms,
        }
    }
}

/// Vertical value range a graph series is scaled into.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GraphDomain {
    pub min: f32,
    pub max: f32,
}

impl GraphDomain {
    pub const fn new(min: f32, max: f32) -> Self { Self { min, max } }
}

/// Per-series graph domains.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GraphConfig {
    pub temperature: GraphDomain,
    pub humidity: GraphDomain,
    pub illuminance: GraphDomain,
}

impl GraphConfig {
    pub const DEFAULT: Self = Self {
        temperature: GraphDomain::new(10.0, 40.0),
        humidity: GraphDomain::new(0.0, 100.0),
        illuminance: GraphDomain::new(0.0, 2000.0),
    };

    pub const fn domain(&self, field: Field) -> GraphDomain {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
            Field::Illuminance => self.illuminance,
        }
    }
}

/// Weather refresh and redraw policy.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WeatherConfig {
    /// Re-request the selected location once its entry is this old.
    pub refresh_interval_ms: Millis,
    /// Entries older than this show a "stale" marker.
    pub stale_after_ms: Millis,
    /// In-flight requests older than this are cancelled.
    pub fetch_timeout_ms: Millis,
    /// Minimum temperature change that repaints the temperature region.
    pub repaint_delta: f32,
}

impl WeatherConfig {
    pub const DEFAULT: Self = Self {
        refresh_interval_ms: 600_000,
        stale_after_ms: 720_000,
        fetch_timeout_ms: 15_000,
        repaint_delta: 0.1,
    };
}

/// Complete runtime configuration.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    pub idle: IdleConfig,
    pub bands: Bands,
    pub graph: GraphConfig,
    pub weather: WeatherConfig,
    pub output: OutputRule,
    /// Periodic sample buffer reset.
    pub sample_reset_ms: Millis,
    /// How long notices stay on screen.
    pub notice_ms: Millis,
    /// Mode the Home button returns to.
    pub home_mode: ScreenMode,
}

impl Config {
    pub const DEFAULT: Self = Self {
        idle: IdleConfig::DEFAULT,
        bands: Bands::DEFAULT,
        graph: GraphConfig::DEFAULT,
        weather: WeatherConfig::DEFAULT,
        output: OutputRule::DEFAULT,
        sample_reset_ms: 24 * 60 * 60 * 1_000,
        notice_ms: 3_000,
        home_mode: ScreenMode::Normal,
    };

    /// Set the default idle timeout.
    #[must_use]
    pub const fn with_idle_timeout(mut self, timeout_ms: Millis) -> Self {
        self.idle.timeout_ms = timeout_ms;
        self
    }

    /// Override the idle timeout for a single mode.
    #[must_use]
    pub const fn with_mode_timeout(mut self, mode: ScreenMode, timeout_ms: Millis) -> Self {
        self.idle.per_mode_ms[mode.index()] = Some(timeout_ms);
        self
    }

    /// Check value consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            if !self.bands.for_field(field).is_ordered() {
                return Err(ConfigError::BandOrder { field: field.label() });
            }
            let domain = self.graph.domain(field);
            if !(domain.min < domain.max) {
                return Err(ConfigError::GraphDomain { field: field.label() });
            }
        }

        let durations = [
            ("idle timeout", self.idle.timeout_ms),
            ("idle frame cadence", self.idle.frame_ms),
            ("blink interval", self.idle.blink_interval_ms),
            ("weather refresh interval", self.weather.refresh_interval_ms),
            ("fetch timeout", self.weather.fetch_timeout_ms),
            ("sample reset period", self.sample_reset_ms),
            ("notice duration", self.notice_ms),
        ];
        for (name, value) in durations {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { name });
            }
        }
        if self.idle.per_mode_ms.contains(&Some(0)) {
            return Err(ConfigError::ZeroDuration { name: "per-mode idle timeout" });
        }

        if self.idle.blink_duration_ms >= self.idle.blink_interval_ms {
            return Err(ConfigError::BlinkWindow);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::DEFAULT }
}
