//! Widget components for the environment dashboard.
//!
//! Widgets draw through [`Surface`](crate::surface::Surface) so the same code
//! runs against the simulator window, a framebuffer, or a recording surface
//! in tests. Every widget owns a fixed rectangle and clears it before
//! painting, so callers can repaint one widget without touching its
//! neighbours.

mod chrome;
mod icons;
mod primitives;
mod values;

pub use chrome::{clear_footer, draw_header, draw_notice};
pub use icons::{ICON_SIZE, draw_condition_icon};
pub use primitives::{draw_frame, draw_line_series};
pub use values::{ValueText, draw_banded_value, draw_label, format_value};
