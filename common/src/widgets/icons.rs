//! Weather condition icons built from rectangles and lines.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{CYAN, GRAY, LIGHT_GRAY, WHITE, YELLOW};
use crate::surface::{Align, Surface, TextSize, TextSpec};
use crate::weather::ConditionSymbol;

/// Icons fit in a square of this side, centered on the given point.
pub const ICON_SIZE: u32 = 48;

const HALF: i32 = ICON_SIZE as i32 / 2;

/// Clear the icon square around `center` and draw the icon for `symbol`.
pub fn draw_condition_icon<S>(
    surface: &mut S,
    center: Point,
    symbol: ConditionSymbol,
) where
    S: Surface,
{
    surface.clear_area(Rectangle::with_center(center, Size::new_equal(ICON_SIZE)));

    match symbol {
        ConditionSymbol::Clear => draw_sun(surface, center),
        ConditionSymbol::Cloudy => draw_cloud(surface, center, LIGHT_GRAY),
        ConditionSymbol::Rain => {
            draw_cloud(surface, center + Point::new(0, -6), LIGHT_GRAY);
            for dx in [-10, 0, 10] {
                let top = center + Point::new(dx, 10);
                surface.line(top, top + Point::new(-4, 10), CYAN);
            }
        }
        ConditionSymbol::Snow => {
            draw_cloud(surface, center + Point::new(0, -6), LIGHT_GRAY);
            for dx in [-10, 0, 10] {
                let flake = center + Point::new(dx, 15);
                surface.line(flake + Point::new(-3, 0), flake + Point::new(3, 0), WHITE);
                surface.line(flake + Point::new(0, -3), flake + Point::new(0, 3), WHITE);
            }
        }
        ConditionSymbol::Thunder => {
            draw_cloud(surface, center + Point::new(0, -6), GRAY);
            let a = center + Point::new(2, 6);
            let b = center + Point::new(-4, 14);
            let c = center + Point::new(2, 14);
            let d = center + Point::new(-4, HALF - 2);
            surface.line(a, b, YELLOW);
            surface.line(b, c, YELLOW);
            surface.line(c, d, YELLOW);
        }
        ConditionSymbol::Unknown => {
            surface.text("?", center, TextSpec::new(LIGHT_GRAY, TextSize::Large, Align::Center));
        }
    }
}

fn draw_sun<S: Surface>(
    surface: &mut S,
    center: Point,
) {
    surface.fill_rect(Rectangle::with_center(center, Size::new_equal(20)), YELLOW);
    let rays = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];
    for (dx, dy) in rays {
        let inner = center + Point::new(dx * 14, dy * 14);
        let outer = center + Point::new(dx * 20, dy * 20);
        surface.line(inner, outer, YELLOW);
    }
}

fn draw_cloud<S: Surface>(
    surface: &mut S,
    center: Point,
    color: Rgb565,
) {
    surface.fill_rect(Rectangle::with_center(center + Point::new(0, 4), Size::new(40, 14)), color);
    surface.fill_rect(Rectangle::with_center(center + Point::new(-6, -4), Size::new(18, 12)), color);
    surface.fill_rect(Rectangle::with_center(center + Point::new(7, -6), Size::new(16, 14)), color);
}
