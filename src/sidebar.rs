//! The status sidebar widget.
//!
//! A fixed 300-unit-wide strip showing connectivity, device temperature,
//! vehicle-module link state, and battery charge, plus the home and settings
//! touch targets. The widget holds plain display fields: the update handler
//! derives them from a [`DeviceStatus`] snapshot, the paint handler reads
//! them back. Derivation and painting run on the same thread, so no locking
//! is involved anywhere.
//!
//! Interaction follows three small entry points:
//! - [`StatusSidebar::update_state`] per device-state tick
//! - [`StatusSidebar::handle_release`] per pointer release
//! - [`StatusSidebar::draw`] per repaint
//!
//! A field change marks the widget dirty; the host polls
//! [`StatusSidebar::take_redraw`] to decide when to repaint.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::ContainsPoint;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::SIDEBAR_BG;
use crate::icons::Icon;
use crate::layout::{
    HOME_ICON_POS, METRIC_BATTERY_Y, METRIC_MODULE_Y, METRIC_TEMP_Y, NETWORK_TEXT_POS,
    SETTINGS_BTN, SIDEBAR_BOUNDS,
};
use crate::status::{
    DeviceStatus, MetricDisplay, NETWORK_LINE_CAP, battery_metric, displayed_signal_strength,
    module_metric, network_line, thermal_metric,
};
use crate::styles::{CENTERED_MIDDLE, NETWORK_TEXT_STYLE};
use crate::widgets::primitives::{draw_metric_panel, draw_signal_dots};

/// Notification the sidebar hands back to its host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SidebarEvent {
    /// The settings touch target was released; the host owns navigation.
    OpenSettings,
}

/// Sidebar widget state: the two icons plus the display fields derived from
/// the most recent visible tick.
pub struct StatusSidebar {
    home_icon: Option<Icon>,
    settings_icon: Option<Icon>,

    network_line: String<NETWORK_LINE_CAP>,
    signal_dots: u8,
    temp_metric: MetricDisplay,
    module_metric: MetricDisplay,
    battery_metric: MetricDisplay,

    /// Set when any display field changes; consumed by the host.
    dirty: bool,
}

impl StatusSidebar {
    /// Create the widget. Icons may be absent (failed asset load); the
    /// widget then paints without them.
    pub fn new(home_icon: Option<Icon>, settings_icon: Option<Icon>) -> Self {
        Self {
            home_icon,
            settings_icon,
            network_line: String::new(),
            signal_dots: 0,
            temp_metric: MetricDisplay::default(),
            module_metric: MetricDisplay::default(),
            battery_metric: MetricDisplay::default(),
            dirty: true,
        }
    }

    /// Consume one device-state tick.
    ///
    /// Skipped entirely while the parent screen is hidden: no field changes,
    /// no redraw request. Otherwise every display field is re-derived from
    /// this snapshot and the dirty flag is raised iff something changed.
    pub fn update_state(&mut self, status: &DeviceStatus) {
        if !status.screen_visible {
            return;
        }

        set_field(
            &mut self.network_line,
            network_line(status.network_type, &status.wifi_ip),
            &mut self.dirty,
        );
        set_field(
            &mut self.signal_dots,
            displayed_signal_strength(status.network_strength),
            &mut self.dirty,
        );
        set_field(&mut self.temp_metric, thermal_metric(status.thermal), &mut self.dirty);
        set_field(&mut self.module_metric, module_metric(status.module), &mut self.dirty);
        set_field(
            &mut self.battery_metric,
            battery_metric(status.battery_percent),
            &mut self.dirty,
        );
    }

    /// Handle a pointer release. Releases inside the settings button request
    /// the settings screen; everything else is ignored.
    pub fn handle_release(&self, position: Point) -> Option<SidebarEvent> {
        SETTINGS_BTN.contains(position).then_some(SidebarEvent::OpenSettings)
    }

    /// Whether a repaint is pending, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Whether a repaint is pending, without clearing the flag.
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Paint the whole sidebar from the stored display fields.
    pub fn draw<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb888>,
    {
        display.fill_solid(&SIDEBAR_BOUNDS, SIDEBAR_BG).ok();

        // Touch target icons. The settings icon carries its 65% opacity
        // pre-blended; the home icon draws as authored.
        if let Some(icon) = &self.settings_icon {
            icon.draw(display, SETTINGS_BTN.top_left);
        }
        if let Some(icon) = &self.home_icon {
            icon.draw(display, HOME_ICON_POS);
        }

        draw_signal_dots(display, self.signal_dots);

        Text::with_text_style(&self.network_line, NETWORK_TEXT_POS, NETWORK_TEXT_STYLE, CENTERED_MIDDLE)
            .draw(display)
            .ok();

        draw_metric_panel(display, &self.temp_metric.label, self.temp_metric.color.rgb(), METRIC_TEMP_Y);
        draw_metric_panel(
            display,
            &self.module_metric.label,
            self.module_metric.color.rgb(),
            METRIC_MODULE_Y,
        );
        draw_metric_panel(
            display,
            &self.battery_metric.label,
            self.battery_metric.color.rgb(),
            METRIC_BATTERY_Y,
        );
    }
}

/// Assign `value` to `field`, raising `dirty` when it differs.
fn set_field<T: PartialEq>(field: &mut T, value: T, dirty: &mut bool) {
    if *field != value {
        *field = value;
        *dirty = true;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
