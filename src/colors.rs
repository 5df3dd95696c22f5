//! Color palette for the cluster sidebar.
//!
//! The sidebar renders to an `Rgb888` framebuffer. The framebuffer has no
//! alpha channel, so every translucent element of the visual design is
//! pre-blended over the color it sits on and stored as a plain constant
//! (see [`blend_over`]).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Sidebar background fill, a dark neutral gray.
pub const SIDEBAR_BG: Rgb888 = Rgb888::new(57, 57, 57);

/// Pure white. Used for text and filled signal dots.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Unfilled signal dots, mid-gray.
pub const SIGNAL_DOT_OFF: Rgb888 = Rgb888::new(0x54, 0x54, 0x54);

// =============================================================================
// Theme status colors
// =============================================================================

/// Healthy state accent (green).
pub const GOOD: Rgb888 = Rgb888::new(66, 171, 76);

/// Degraded state accent (amber).
pub const WARNING: Rgb888 = Rgb888::new(218, 202, 37);

/// Fault state accent (red).
pub const DANGER: Rgb888 = Rgb888::new(201, 34, 49);

/// Metric panel border: white at alpha 0x55, pre-blended over [`SIDEBAR_BG`].
///
/// Must equal `blend_over(WHITE, SIDEBAR_BG, 0x55)`; verified by test.
pub const PANEL_BORDER: Rgb888 = Rgb888::new(123, 123, 123);

/// Opacity applied to the settings icon (65% of 255).
pub const SETTINGS_ICON_ALPHA: u8 = 166;

// =============================================================================
// Blending
// =============================================================================

/// Blend `fg` over `bg` at the given alpha (0 = all background, 255 = all
/// foreground).
///
/// Integer per-channel blend with rounding, so constants derived from it are
/// exact and the per-pixel icon pre-blend stays off the float path.
pub fn blend_over(fg: Rgb888, bg: Rgb888, alpha: u8) -> Rgb888 {
    let a = u32::from(alpha);
    let channel = |f: u8, b: u8| -> u8 {
        let mixed = u32::from(f) * a + u32::from(b) * (255 - a);
        ((mixed + 127) / 255) as u8
    };
    Rgb888::new(
        channel(fg.r(), bg.r()),
        channel(fg.g(), bg.g()),
        channel(fg.b(), bg.b()),
    )
}
