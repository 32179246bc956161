//! Value banding for color-coded readings.
//!
//! Every on-screen reading (live values, statistics cells, idle face cheeks)
//! is colored by the same rule: at or below `low` is the low band, at or
//! above `high` is the high band, anything between is neutral. The default
//! thresholds are compile-time constants with ordering assertions; a
//! [`Config`](crate::config::Config) may replace them at runtime.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{CYAN, LIGHT_GRAY, ORANGE, RED, WHITE, YELLOW};
use crate::sample::Field;

// =============================================================================
// Default Thresholds
// =============================================================================

/// At or below this temperature (°C) the reading is "cold".
pub const TEMP_COLD: f32 = 18.0;

/// At or above this temperature (°C) the reading is "hot".
pub const TEMP_HOT: f32 = 28.0;

const _: () = assert!(TEMP_COLD < TEMP_HOT);

/// At or below this relative humidity (%) the air is "dry".
pub const HUMIDITY_DRY: f32 = 30.0;

/// At or above this relative humidity (%) the air is "humid".
pub const HUMIDITY_HUMID: f32 = 70.0;

const _: () = assert!(HUMIDITY_DRY < HUMIDITY_HUMID);

/// At or below this light level (raw counts) the room is "dark".
pub const LIGHT_DARK: f32 = 200.0;

/// At or above this light level (raw counts) the room is "bright".
pub const LIGHT_BRIGHT: f32 = 1500.0;

const _: () = assert!(LIGHT_DARK < LIGHT_BRIGHT);

// =============================================================================
// Bands
// =============================================================================

/// Which side of the thresholds a value falls on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Band {
    Low,
    Neutral,
    High,
}

/// Low/high threshold pair for one field.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BandThresholds {
    pub low: f32,
    pub high: f32,
}

impl BandThresholds {
    pub const fn new(low: f32, high: f32) -> Self { Self { low, high } }

    /// Classify a value. Both thresholds are inclusive.
    pub fn classify(&self, value: f32) -> Band {
        if value >= self.high {
            Band::High
        } else if value <= self.low {
            Band::Low
        } else {
            Band::Neutral
        }
    }

    /// Whether `low` is strictly below `high`.
    pub fn is_ordered(&self) -> bool { self.low < self.high }
}

/// Colors for the three bands of one field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BandColors {
    pub low: Rgb565,
    pub neutral: Rgb565,
    pub high: Rgb565,
}

impl BandColors {
    pub const fn pick(&self, band: Band) -> Rgb565 {
        match band {
            Band::Low => self.low,
            Band::Neutral => self.neutral,
            Band::High => self.high,
        }
    }
}

pub const TEMPERATURE_COLORS: BandColors = BandColors { low: CYAN, neutral: WHITE, high: RED };
pub const HUMIDITY_COLORS: BandColors = BandColors { low: ORANGE, neutral: WHITE, high: CYAN };
pub const LIGHT_COLORS: BandColors = BandColors { low: LIGHT_GRAY, neutral: WHITE, high: YELLOW };

/// Thresholds for all three sample fields.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bands {
    pub temperature: BandThresholds,
    pub humidity: BandThresholds,
    pub illuminance: BandThresholds,
}

impl Bands {
    pub const DEFAULT: Self = Self {
        temperature: BandThresholds::new(TEMP_COLD, TEMP_HOT),
        humidity: BandThresholds::new(HUMIDITY_DRY, HUMIDITY_HUMID),
        illuminance: BandThresholds::new(LIGHT_DARK, LIGHT_BRIGHT),
    };

    pub const fn for_field(&self, field: Field) -> &BandThresholds {
        match field {
            Field::Temperature => &self.temperature,
            Field::Humidity => &self.humidity,
            Field::Illuminance => &self.illuminance,
        }
    }

    /// Color for `value` of `field`, using that field's thresholds and palette.
    pub fn color(&self, field: Field, value: f32) -> Rgb565 {
        band_color(value, self.for_field(field), &colors_for(field))
    }
}

impl Default for Bands {
    fn default() -> Self { Self::DEFAULT }
}

/// Palette used for a field.
pub const fn colors_for(field: Field) -> BandColors {
    match field {
        Field::Temperature => TEMPERATURE_COLORS,
        Field::Humidity => HUMIDITY_COLORS,
        Field::Illuminance => LIGHT_COLORS,
    }
}

/// Color of `value` given its thresholds and band palette.
#[inline]
pub fn band_color(
    value: f32,
    thresholds: &BandThresholds,
    colors: &BandColors,
) -> Rgb565 {
    colors.pick(thresholds.classify(value))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_ordering() {
        assert!(Bands::DEFAULT.temperature.is_ordered());
        assert!(Bands::DEFAULT.humidity.is_ordered());
        assert!(Bands::DEFAULT.illuminance.is_ordered());
    }

    #[test]
    fn test_classify_inclusive_edges() {
        let t = BandThresholds::new(18.0, 28.0);
        assert_eq!(t.classify(18.0), Band::Low);
        assert_eq!(t.classify(18.1), Band::Neutral);
        assert_eq!(t.classify(27.9), Band::Neutral);
        assert_eq!(t.classify(28.0), Band::High);
        assert_eq!(t.classify(-5.0), Band::Low);
    }

    #[test]
    fn test_temperature_colors() {
        let bands = Bands::DEFAULT;
        assert_eq!(bands.color(Field::Temperature, 30.0), RED);
        assert_eq!(bands.color(Field::Temperature, 22.0), WHITE);
        assert_eq!(bands.color(Field::Temperature, 10.0), CYAN);
    }

    #[test]
    fn test_humidity_and_light_colors() {
        let bands = Bands::DEFAULT;
        assert_eq!(bands.color(Field::Humidity, 20.0), ORANGE);
        assert_eq!(bands.color(Field::Humidity, 85.0), CYAN);
        assert_eq!(bands.color(Field::Illuminance, 50.0), LIGHT_GRAY);
        assert_eq!(bands.color(Field::Illuminance, 1800.0), YELLOW);
    }

    #[test]
    fn test_unordered_thresholds_detected() {
        assert!(!BandThresholds::new(30.0, 10.0).is_ordered());
        assert!(!BandThresholds::new(10.0, 10.0).is_ordered());
    }
}
