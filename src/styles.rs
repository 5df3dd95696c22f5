//! Pre-computed text styles for the sidebar.
//!
//! Styles are `const` so the paint path never constructs font/style objects
//! per frame; the compiler places them in read-only data.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::WHITE;

/// Horizontally centered, anchored at the optical middle of the line.
/// Used for the network band and metric captions, which center on fixed
/// anchor points rather than flowing from a baseline.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Network name / wifi address text (regular weight, smaller).
pub const NETWORK_TEXT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Metric panel caption text (large).
pub const METRIC_TEXT_STYLE: MonoTextStyle<'static, Rgb888> =
    MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
