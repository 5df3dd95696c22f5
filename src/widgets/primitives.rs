//! Low-level drawing primitives for the sidebar.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::{PANEL_BORDER, SIGNAL_DOT_OFF, WHITE};
use crate::layout::{
    ACCENT_CLIP_WIDTH, ACCENT_CORNER_RADIUS, ACCENT_FILL_WIDTH, ACCENT_INSET_X, ACCENT_INSET_Y,
    METRIC_BORDER_WIDTH, METRIC_CORNER_RADIUS, METRIC_LINE_HEIGHT, METRIC_PANEL_SHORT,
    METRIC_PANEL_TALL, METRIC_PANEL_WIDTH, METRIC_PANEL_X, METRIC_TEXT_CENTER_X, SIGNAL_DOT_COUNT,
    SIGNAL_DOT_DIAMETER, SIGNAL_DOT_STEP, SIGNAL_DOTS_X, SIGNAL_DOTS_Y,
};
use crate::styles::{CENTERED_MIDDLE, METRIC_TEXT_STYLE};

/// Translucent-white border stroke, computed at compile time.
const PANEL_BORDER_STYLE: PrimitiveStyle<Rgb888> =
    PrimitiveStyle::with_stroke(PANEL_BORDER, METRIC_BORDER_WIDTH);

/// Panel height rule: two-line captions get the tall panel.
pub fn metric_panel_height(label: &str) -> u32 {
    if label.contains('\n') { METRIC_PANEL_TALL } else { METRIC_PANEL_SHORT }
}

/// Draw one rounded metric panel at vertical offset `y`: status-colored
/// accent strip on the left, translucent border around the full panel, and
/// the caption centered inside.
pub fn draw_metric_panel<D>(display: &mut D, label: &str, color: Rgb888, y: i32)
where
    D: DrawTarget<Color = Rgb888>,
{
    let height = metric_panel_height(label);
    let panel = Rectangle::new(Point::new(METRIC_PANEL_X, y), Size::new(METRIC_PANEL_WIDTH, height));

    // Accent strip: a wide rounded fill clipped to a narrow window on the
    // panel's left edge, so only the leading rounded corners stay visible.
    let strip = Rectangle::new(
        Point::new(METRIC_PANEL_X + ACCENT_INSET_X, y),
        Size::new(ACCENT_CLIP_WIDTH, height),
    );
    let accent = RoundedRectangle::with_equal_corners(
        Rectangle::new(
            Point::new(METRIC_PANEL_X + ACCENT_INSET_X, y + ACCENT_INSET_Y),
            Size::new(ACCENT_FILL_WIDTH, height - 2 * ACCENT_INSET_Y as u32),
        ),
        Size::new(ACCENT_CORNER_RADIUS, ACCENT_CORNER_RADIUS),
    );
    {
        let mut strip_target = display.clipped(&strip);
        accent
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut strip_target)
            .ok();
    }

    RoundedRectangle::with_equal_corners(
        panel,
        Size::new(METRIC_CORNER_RADIUS, METRIC_CORNER_RADIUS),
    )
    .into_styled(PANEL_BORDER_STYLE)
    .draw(display)
    .ok();

    draw_metric_label(display, label, y, height);
}

/// Center the caption (one or two lines) in the panel's text box.
fn draw_metric_label<D>(display: &mut D, label: &str, y: i32, height: u32)
where
    D: DrawTarget<Color = Rgb888>,
{
    let lines = label.lines().count() as i32;
    if lines == 0 {
        return;
    }
    let center_y = y + height as i32 / 2;
    let mut line_y = center_y - (lines - 1) * METRIC_LINE_HEIGHT / 2;
    for line in label.lines() {
        Text::with_text_style(
            line,
            Point::new(METRIC_TEXT_CENTER_X, line_y),
            METRIC_TEXT_STYLE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
        line_y += METRIC_LINE_HEIGHT;
    }
}

/// Draw the five-dot signal strength row; dot `i` fills white iff
/// `i < filled`, every other dot stays mid-gray.
pub fn draw_signal_dots<D>(display: &mut D, filled: u8)
where
    D: DrawTarget<Color = Rgb888>,
{
    for i in 0..SIGNAL_DOT_COUNT {
        let color = if i < filled { WHITE } else { SIGNAL_DOT_OFF };
        Circle::new(
            Point::new(SIGNAL_DOTS_X + i32::from(i) * SIGNAL_DOT_STEP, SIGNAL_DOTS_Y),
            SIGNAL_DOT_DIAMETER,
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SIDEBAR_HEIGHT, SIDEBAR_WIDTH};
    use crate::testutil::TestDisplay;

    fn display() -> TestDisplay {
        TestDisplay::new(Size::new(SIDEBAR_WIDTH, SIDEBAR_HEIGHT))
    }

    /// Center of dot `i`'s bounding box.
    fn dot_center(i: i32) -> Point {
        Point::new(
            SIGNAL_DOTS_X + i * SIGNAL_DOT_STEP + SIGNAL_DOT_DIAMETER as i32 / 2,
            SIGNAL_DOTS_Y + SIGNAL_DOT_DIAMETER as i32 / 2,
        )
    }

    #[test]
    fn test_panel_height_two_lines() {
        assert_eq!(metric_panel_height("TEMP\nGOOD"), METRIC_PANEL_TALL);
    }

    #[test]
    fn test_panel_height_one_line() {
        assert_eq!(metric_panel_height("TEMP"), METRIC_PANEL_SHORT);
        assert_eq!(metric_panel_height(""), METRIC_PANEL_SHORT);
    }

    #[test]
    fn test_signal_dots_fill_count() {
        let mut display = display();
        draw_signal_dots(&mut display, 3);

        for i in 0..3 {
            assert_eq!(display.pixel(dot_center(i)), WHITE, "dot {i} should be filled");
        }
        for i in 3..5 {
            assert_eq!(display.pixel(dot_center(i)), SIGNAL_DOT_OFF, "dot {i} should be unfilled");
        }
    }

    #[test]
    fn test_signal_dots_all_unfilled_at_zero() {
        let mut display = display();
        draw_signal_dots(&mut display, 0);
        for i in 0..5 {
            assert_eq!(display.pixel(dot_center(i)), SIGNAL_DOT_OFF);
        }
    }

    #[test]
    fn test_metric_panel_accent_takes_status_color() {
        let mut display = display();
        let color = Rgb888::new(201, 34, 49);
        draw_metric_panel(&mut display, "TEMP\nHIGH", color, 338);

        // Mid-height inside the accent clip window.
        let probe = Point::new(METRIC_PANEL_X + ACCENT_INSET_X + ACCENT_CLIP_WIDTH as i32 / 2, 400);
        assert_eq!(display.pixel(probe), color);
    }

    #[test]
    fn test_metric_panel_accent_clipped_to_strip() {
        let mut display = display();
        let color = Rgb888::new(66, 171, 76);
        draw_metric_panel(&mut display, "TEMP\nGOOD", color, 338);

        // The accent fill is 100 wide but the clip window ends after 18;
        // pixels past the window must be untouched.
        let past_strip = Point::new(METRIC_PANEL_X + ACCENT_INSET_X + ACCENT_CLIP_WIDTH as i32 + 4, 400);
        assert_eq!(display.pixel(past_strip), Rgb888::BLACK);
    }

    #[test]
    fn test_metric_panel_border_drawn() {
        let mut display = display();
        draw_metric_panel(&mut display, "TEMP\nGOOD", Rgb888::new(66, 171, 76), 338);

        // The 2px centered stroke covers the outline row along the panel top.
        let on_border = (0..2).any(|dy| {
            display.pixel(Point::new(METRIC_TEXT_CENTER_X, 338 - 1 + dy)) == PANEL_BORDER
        });
        assert!(on_border, "expected border stroke near the panel's top edge");
    }
}
