//! Simulator-shell feedback overlay.
//!
//! The real cluster navigates to the settings screen when the sidebar emits
//! its request; the simulator has no settings screen, so it flashes a short
//! confirmation popup instead. White border over a background-colored card,
//! centered in the strip, expires on its own.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{SIDEBAR_BG, WHITE};
use crate::layout::{SIDEBAR_HEIGHT, SIDEBAR_WIDTH};
use crate::strings::{POPUP_OPENING, POPUP_SETTINGS};
use crate::styles::{CENTERED_MIDDLE, NETWORK_TEXT_STYLE};

/// How long the popup stays on screen.
const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// Popup card size.
const POPUP_WIDTH: u32 = 220;
const POPUP_HEIGHT: u32 = 80;

/// Card position (centered in the strip).
const POPUP_X: i32 = (SIDEBAR_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SIDEBAR_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Border geometry (3px white frame behind the card).
const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const CARD_POS: Point = Point::new(POPUP_X, POPUP_Y);
const CARD_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

/// Text anchors for the two lines.
const TEXT1_POS: Point = Point::new((SIDEBAR_WIDTH / 2) as i32, POPUP_Y + 28);
const TEXT2_POS: Point = Point::new((SIDEBAR_WIDTH / 2) as i32, POPUP_Y + 52);

const WHITE_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(WHITE);
const CARD_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(SIDEBAR_BG);

/// Active settings-request popup; tracks its own expiry.
#[derive(Clone, Copy, Debug)]
pub struct SettingsPopup {
    shown_at: Instant,
}

impl SettingsPopup {
    pub fn new() -> Self {
        Self { shown_at: Instant::now() }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= POPUP_DURATION
    }
}

/// Draw the confirmation popup over the sidebar.
pub fn draw_settings_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE).into_styled(WHITE_FILL).draw(display).ok();
    Rectangle::new(CARD_POS, CARD_SIZE).into_styled(CARD_FILL).draw(display).ok();

    Text::with_text_style(POPUP_OPENING, TEXT1_POS, NETWORK_TEXT_STYLE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
    Text::with_text_style(POPUP_SETTINGS, TEXT2_POS, NETWORK_TEXT_STYLE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
