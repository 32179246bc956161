//! Pre-computed static text styles and font references.
//!
//! Fonts are selected through [`TextSize`](crate::surface::TextSize) so
//! renderers never pick a font directly. Alignment styles are `const` and
//! built once at compile time.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

/// Small label font (6x10 pixels).
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

/// Medium font for titles and descriptions (10x20 pixels).
pub const MEDIUM_FONT: &MonoFont = &FONT_10X20;

/// Large value font (`ProFont` 24pt).
pub const LARGE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Left-aligned text, vertically centered on the anchor point.
pub const LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Centered text, vertically centered on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned text, vertically centered on the anchor point.
pub const RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();
