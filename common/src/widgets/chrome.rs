//! Header bar and footer notice bar.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::String;

use crate::colors::{HEADER_BG, LIGHT_GRAY, NOTICE_BG, WHITE};
use crate::config::{FOOTER, HEADER, HEADER_HEIGHT, SCREEN_WIDTH};
use crate::surface::{Align, Surface, TextSpec};

const HEADER_TEXT_Y: i32 = HEADER_HEIGHT as i32 / 2;
const TITLE_POS: Point = Point::new(8, HEADER_TEXT_Y);
const PAGE_POS: Point = Point::new(SCREEN_WIDTH as i32 - 8, HEADER_TEXT_Y);

/// Draw the header bar with a mode title and an optional `index/total` page marker.
///
/// `page` is zero-based; it is shown one-based.
pub fn draw_header<S>(
    surface: &mut S,
    title: &str,
    page: Option<(usize, usize)>,
) where
    S: Surface,
{
    surface.fill_rect(HEADER, HEADER_BG);
    surface.text(title, TITLE_POS, TextSpec::medium(WHITE).on(HEADER_BG));

    if let Some((index, total)) = page {
        let mut marker: String<12> = String::new();
        write!(marker, "{}/{}", index + 1, total).ok();
        surface.text(&marker, PAGE_POS, TextSpec::small(LIGHT_GRAY).align(Align::Right).on(HEADER_BG));
    }
}

/// Show a transient message in the footer bar.
pub fn draw_notice<S>(
    surface: &mut S,
    text: &str,
) where
    S: Surface,
{
    surface.fill_rect(FOOTER, NOTICE_BG);
    surface.text(text, FOOTER.center(), TextSpec::small(WHITE).align(Align::Center).on(NOTICE_BG));
}

/// Blank the footer bar.
pub fn clear_footer<S>(surface: &mut S)
where
    S: Surface,
{
    surface.clear_area(FOOTER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_header_page_marker_is_one_based() {
        let mut surface = RecordingSurface::new();
        draw_header(&mut surface, "Weather", Some((2, 6)));
        assert_eq!(surface.texts(), vec!["Weather", "3/6"]);
        assert!(surface.filled(HEADER));
    }

    #[test]
    fn test_header_without_page() {
        let mut surface = RecordingSurface::new();
        draw_header(&mut surface, "Graph", None);
        assert_eq!(surface.texts(), vec!["Graph"]);
    }

    #[test]
    fn test_notice_fills_footer() {
        let mut surface = RecordingSurface::new();
        draw_notice(&mut surface, "FETCH FAILED");
        assert!(surface.filled(FOOTER));
        assert!(surface.has_text("FETCH FAILED"));
    }
}
