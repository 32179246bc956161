//! Color constants for the environment dashboard.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Standard colors come from the `RgbColor` trait constants so the values are
//! exact. Application colors are built with `Rgb565::new(r, g, b)`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default text and neutral band.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Hot band, output ON, thunder icon.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Graph humidity series.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Bright light band, sun icon.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan. Cold band, humid band, rain icon.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Magenta. Idle face flushed cheeks.
pub const PINK: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange. Dry band and stale weather marker.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for dividers, grid lines and placeholder text.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for secondary labels and cloud icons.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(20, 40, 20);

/// Header bar background.
pub const HEADER_BG: Rgb565 = Rgb565::new(2, 8, 10);

/// Idle face skin tone.
pub const FACE: Rgb565 = Rgb565::new(31, 52, 14);

/// Notice bar background.
pub const NOTICE_BG: Rgb565 = Rgb565::new(20, 0, 0);
