//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::GraphDomain;
use crate::surface::Surface;

/// Draw a one-pixel outline just inside `area`.
pub fn draw_frame<S>(
    surface: &mut S,
    area: Rectangle,
    color: Rgb565,
) where
    S: Surface,
{
    let Some(br) = area.bottom_right() else {
        return;
    };
    let tl = area.top_left;
    surface.line(tl, Point::new(br.x, tl.y), color);
    surface.line(Point::new(tl.x, br.y), br, color);
    surface.line(tl, Point::new(tl.x, br.y), color);
    surface.line(Point::new(br.x, tl.y), br, color);
}

/// Plot one series of optional values as connected line segments.
///
/// Points are spread evenly across the width of `area`, oldest on the left.
/// Values are clamped into `domain` before scaling. A `None` breaks the line,
/// so empty buffer slots leave a gap instead of dropping to the baseline.
///
/// Returns the number of segments drawn.
pub fn draw_line_series<S, I>(
    surface: &mut S,
    area: Rectangle,
    values: I,
    domain: GraphDomain,
    color: Rgb565,
) -> usize
where
    S: Surface,
    I: ExactSizeIterator<Item = Option<f32>>,
{
    let count = values.len();
    if count < 2 {
        return 0;
    }

    let w = area.size.width as i32;
    let h = area.size.height as i32;
    if w < 2 || h < 2 {
        return 0;
    }

    let min_y = area.top_left.y;
    let max_y = area.top_left.y + h - 1;
    let max_x = area.top_left.x + w - 1;

    let range = domain.max - domain.min;
    let y_scale = if range > 0.0 { (h - 1) as f32 / range } else { 0.0 };
    let x_step = (w - 1) as f32 / (count - 1) as f32;

    let mut prev: Option<Point> = None;
    let mut segments = 0;

    for (i, value) in values.enumerate() {
        let Some(value) = value else {
            prev = None;
            continue;
        };

        let x = (area.top_left.x + (i as f32 * x_step) as i32).min(max_x);
        let y = (max_y - ((value.clamp(domain.min, domain.max) - domain.min) * y_scale) as i32).clamp(min_y, max_y);
        let point = Point::new(x, y);

        if let Some(from) = prev {
            surface.line(from, point, color);
            segments += 1;
        }
        prev = Some(point);
    }

    segments
}
