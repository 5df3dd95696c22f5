//! Sidebar geometry as named constants.
//!
//! The sidebar is a fixed 300-unit-wide strip on a 1080-unit-tall cluster
//! display. Nothing here is computed at runtime: every rectangle, offset,
//! and diameter the paint path needs is a compile-time constant, and the
//! few derived values are `const` arithmetic over the primary ones.
//!
//! Constants that must hold relationships (panels inside the strip, the dot
//! row fitting the width) are validated with compile-time assertions.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Widget bounds
// =============================================================================

/// Fixed sidebar width in logical units.
pub const SIDEBAR_WIDTH: u32 = 300;

/// Cluster display height. The host determines the real height; the layout
/// anchors the home icon against this reference edge.
pub const SIDEBAR_HEIGHT: u32 = 1080;

/// Full widget bounds, for the background fill.
pub const SIDEBAR_BOUNDS: Rectangle =
    Rectangle::new(Point::zero(), Size::new(SIDEBAR_WIDTH, SIDEBAR_HEIGHT));

// =============================================================================
// Touch targets
// =============================================================================

/// Settings button rectangle. Touch releases inside it request the settings
/// screen; the settings icon is drawn scaled to exactly this rectangle.
pub const SETTINGS_BTN: Rectangle = Rectangle::new(Point::new(50, 35), Size::new(200, 117));

/// Home icon size (asset is authored at this size, no scaling).
pub const HOME_ICON_SIZE: Size = Size::new(180, 180);

/// Home icon position: centered-ish horizontally, 40 units off the bottom.
pub const HOME_ICON_POS: Point = Point::new(60, (SIDEBAR_HEIGHT - HOME_ICON_SIZE.height - 40) as i32);

// =============================================================================
// Signal strength dots
// =============================================================================

/// Number of dots in the signal strength indicator.
pub const SIGNAL_DOT_COUNT: u8 = 5;

/// X of the first dot's bounding box.
pub const SIGNAL_DOTS_X: i32 = 58;

/// Y of the dot row's bounding box.
pub const SIGNAL_DOTS_Y: i32 = 196;

/// Dot diameter.
pub const SIGNAL_DOT_DIAMETER: u32 = 27;

/// Left-edge-to-left-edge spacing between adjacent dots.
pub const SIGNAL_DOT_STEP: i32 = 37;

// =============================================================================
// Network / address band
// =============================================================================

/// Top of the band showing the network name or wifi address.
pub const NETWORK_BAND_Y: i32 = 247;

/// Height of the network band.
pub const NETWORK_BAND_HEIGHT: u32 = 50;

/// Anchor for the centered network text (band center).
pub const NETWORK_TEXT_POS: Point = Point::new(
    (SIDEBAR_WIDTH / 2) as i32,
    NETWORK_BAND_Y + (NETWORK_BAND_HEIGHT / 2) as i32,
);

// =============================================================================
// Metric panels
// =============================================================================

/// Left edge of every metric panel.
pub const METRIC_PANEL_X: i32 = 30;

/// Metric panel width.
pub const METRIC_PANEL_WIDTH: u32 = 240;

/// Vertical position of the temperature panel.
pub const METRIC_TEMP_Y: i32 = 338;

/// Vertical position of the module-connection panel.
pub const METRIC_MODULE_Y: i32 = 496;

/// Vertical position of the battery panel.
pub const METRIC_BATTERY_Y: i32 = 654;

/// Panel height when the caption has two lines.
pub const METRIC_PANEL_TALL: u32 = 124;

/// Panel height when the caption is a single line.
pub const METRIC_PANEL_SHORT: u32 = 100;

/// Corner radius of the panel's outer border.
pub const METRIC_CORNER_RADIUS: u32 = 20;

/// Stroke width of the panel's outer border.
pub const METRIC_BORDER_WIDTH: u32 = 2;

/// Horizontal inset of the accent strip from the panel edge.
pub const ACCENT_INSET_X: i32 = 6;

/// Visible width of the accent strip (the clip window).
pub const ACCENT_CLIP_WIDTH: u32 = 18;

/// Vertical inset of the accent fill inside the panel.
pub const ACCENT_INSET_Y: i32 = 6;

/// Width of the rounded accent fill. Wider than the clip window so only the
/// leading rounded corners survive the clip.
pub const ACCENT_FILL_WIDTH: u32 = 100;

/// Corner radius of the accent fill.
pub const ACCENT_CORNER_RADIUS: u32 = 10;

/// Left inset of the caption's layout box inside the panel.
pub const METRIC_TEXT_INSET_LEFT: i32 = 30;

/// Total horizontal trim of the caption's layout box.
pub const METRIC_TEXT_TRIM: i32 = 40;

/// X anchor for centered caption text.
pub const METRIC_TEXT_CENTER_X: i32 =
    METRIC_PANEL_X + METRIC_TEXT_INSET_LEFT + (METRIC_PANEL_WIDTH as i32 - METRIC_TEXT_TRIM) / 2;

/// Baseline-to-baseline spacing of the two caption lines.
pub const METRIC_LINE_HEIGHT: i32 = 36;

// =============================================================================
// Compile-time validation
// =============================================================================

const _: () = assert!(METRIC_PANEL_X as u32 + METRIC_PANEL_WIDTH <= SIDEBAR_WIDTH);
const _: () = assert!(METRIC_PANEL_SHORT < METRIC_PANEL_TALL);
const _: () = assert!(METRIC_TEMP_Y < METRIC_MODULE_Y);
const _: () = assert!(METRIC_MODULE_Y < METRIC_BATTERY_Y);
const _: () = assert!(
    SIGNAL_DOTS_X + (SIGNAL_DOT_COUNT as i32 - 1) * SIGNAL_DOT_STEP + SIGNAL_DOT_DIAMETER as i32
        <= SIDEBAR_WIDTH as i32
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_btn_inside_sidebar() {
        let bottom_right = SETTINGS_BTN.top_left + SETTINGS_BTN.size;
        assert!(bottom_right.x <= SIDEBAR_WIDTH as i32);
        assert!(bottom_right.y <= SIDEBAR_HEIGHT as i32);
    }

    #[test]
    fn test_home_icon_anchored_to_bottom() {
        assert_eq!(
            HOME_ICON_POS.y + HOME_ICON_SIZE.height as i32 + 40,
            SIDEBAR_HEIGHT as i32,
            "home icon should sit 40 units off the bottom edge"
        );
    }

    #[test]
    fn test_metric_text_centered_in_layout_box() {
        // Layout box runs from panel x + left inset to panel right edge minus
        // the remaining trim; its midpoint is the text anchor.
        let left = METRIC_PANEL_X + METRIC_TEXT_INSET_LEFT;
        let width = METRIC_PANEL_WIDTH as i32 - METRIC_TEXT_TRIM;
        assert_eq!(METRIC_TEXT_CENTER_X, left + width / 2);
    }

    #[test]
    fn test_panels_do_not_overlap() {
        assert!(METRIC_TEMP_Y + METRIC_PANEL_TALL as i32 <= METRIC_MODULE_Y);
        assert!(METRIC_MODULE_Y + METRIC_PANEL_TALL as i32 <= METRIC_BATTERY_Y);
    }
}
