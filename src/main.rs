// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // intentional f32->u8/i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in signal synthesis
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Cluster sidebar simulator.
//!
//! Hosts the [`StatusSidebar`](sidebar::StatusSidebar) widget in an SDL
//! window the size of the cluster's sidebar strip (300x1080). The shell
//! stands in for the collaborators the widget has on the real device:
//!
//! - the telemetry system, replaced by [`synth_status`] ticks that sweep
//!   every visual state the sidebar can show
//! - the touch layer, replaced by mouse releases forwarded to the widget
//! - the navigation owner, replaced by a log line and a short popup when
//!   the widget requests the settings screen
//!
//! Press `H` to toggle the parent screen's visibility flag (updates are
//! skipped while hidden); close the window to quit.

mod colors;
mod icons;
mod layout;
mod sidebar;
mod status;
mod strings;
mod styles;
#[cfg(test)]
mod testutil;
mod widgets;

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::colors::{SETTINGS_ICON_ALPHA, SIDEBAR_BG};
use crate::icons::Icon;
use crate::layout::{SETTINGS_BTN, SIDEBAR_HEIGHT, SIDEBAR_WIDTH};
use crate::sidebar::{SidebarEvent, StatusSidebar};
use crate::status::{DeviceStatus, ModuleKind, NetworkType, ThermalLevel};
use crate::widgets::popups::{SettingsPopup, draw_settings_popup};

/// Target frame time (~50 FPS). The loop sleeps if a frame completes early.
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames between synthetic device-state ticks (~10 Hz at 50 FPS).
const TICK_INTERVAL: u32 = 5;

const HOME_ICON_PATH: &str = "assets/button_home.bmp";
const SETTINGS_ICON_PATH: &str = "assets/button_settings.bmp";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    let home_icon = Icon::load(Path::new(HOME_ICON_PATH));
    let settings_icon = Icon::load(Path::new(SETTINGS_ICON_PATH))
        .map(|icon| icon.scaled_to(SETTINGS_BTN.size).blended_over(SIDEBAR_BG, SETTINGS_ICON_ALPHA));
    let mut sidebar = StatusSidebar::new(home_icon, settings_icon);

    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(SIDEBAR_WIDTH, SIDEBAR_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Cluster Sidebar", &output_settings);

    // First paint before entering the loop; `events()` needs a live window.
    debug_assert!(sidebar.needs_redraw(), "fresh widget must request its first paint");
    let _ = sidebar.take_redraw();
    sidebar.draw(&mut display);
    window.update(&display);

    info!("cluster sidebar simulator started");

    let mut frame: u32 = 0;
    let mut screen_visible = true;
    let mut active_popup: Option<SettingsPopup> = None;

    loop {
        let frame_start = Instant::now();
        let mut popup_changed = false;

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode: Keycode::H, repeat: false, .. } => {
                    screen_visible = !screen_visible;
                    info!(visible = screen_visible, "parent screen visibility toggled");
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if let Some(SidebarEvent::OpenSettings) = sidebar.handle_release(point) {
                        info!("open settings requested");
                        active_popup = Some(SettingsPopup::new());
                        popup_changed = true;
                    }
                }
                _ => {}
            }
        }

        if let Some(popup) = &active_popup
            && popup.is_expired()
        {
            active_popup = None;
            popup_changed = true;
        }

        if frame % TICK_INTERVAL == 0 {
            let snapshot = synth_status(frame / TICK_INTERVAL, screen_visible);
            sidebar.update_state(&snapshot);
            debug!(tick = frame / TICK_INTERVAL, "device state tick");
        }

        if sidebar.take_redraw() || popup_changed {
            sidebar.draw(&mut display);
            if active_popup.is_some() {
                draw_settings_popup(&mut display);
            }
        }

        window.update(&display);

        frame = frame.wrapping_add(1);
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Synthesize one device-state snapshot.
///
/// Smooth periodic signals walk the sidebar through all of its visuals:
/// the battery drains and recharges, the thermal level sweeps across its
/// three bands, the network cycles through its types with varying strength,
/// and the module link drops out periodically.
fn synth_status(tick: u32, screen_visible: bool) -> DeviceStatus {
    let t = tick as f32;

    let battery_percent = fake_signal(t, 0.0, 100.0, 0.013) as u8;

    let thermal_raw = fake_signal(t, 20.0, 95.0, 0.007);
    let thermal = if thermal_raw < 60.0 {
        ThermalLevel::Nominal
    } else if thermal_raw < 80.0 {
        ThermalLevel::Warning
    } else {
        ThermalLevel::Critical
    };

    let network_type = match (tick / 120) % 4 {
        0 => NetworkType::Wifi,
        1 => NetworkType::Cell4G,
        2 => NetworkType::Cell5G,
        _ => NetworkType::None,
    };
    let network_strength =
        if network_type == NetworkType::None { 0 } else { ((tick / 30) % 5) as u8 };

    let module =
        if (tick / 200).is_multiple_of(3) { ModuleKind::Unknown } else { ModuleKind::External };

    let mut wifi_ip = String::new();
    if network_type == NetworkType::Wifi {
        let _ = wifi_ip.push_str("192.168.1.5");
    }

    DeviceStatus {
        network_type,
        network_strength,
        wifi_ip,
        battery_percent,
        thermal,
        module,
        screen_visible,
    }
}

/// Smooth sine sweep between `min` and `max`.
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_status_fields_in_range() {
        for tick in 0..2000 {
            let status = synth_status(tick, true);
            assert!(status.battery_percent <= 100);
            assert!(status.network_strength <= 4, "raw strength stays in 0-4");
        }
    }

    #[test]
    fn test_synth_status_wifi_has_address() {
        // Ticks 0..120 are the wifi phase of the network cycle.
        let status = synth_status(0, true);
        assert_eq!(status.network_type, NetworkType::Wifi);
        assert!(!status.wifi_ip.is_empty());

        // The cellular phase carries no wifi address.
        let status = synth_status(130, true);
        assert_eq!(status.network_type, NetworkType::Cell4G);
        assert!(status.wifi_ip.is_empty());
    }

    #[test]
    fn test_synth_status_propagates_visibility() {
        assert!(synth_status(0, true).screen_visible);
        assert!(!synth_status(0, false).screen_visible);
    }

    #[test]
    fn test_fake_signal_stays_in_bounds() {
        for tick in 0..1000 {
            let value = fake_signal(tick as f32, 10.0, 20.0, 0.05);
            assert!((10.0..=20.0).contains(&value), "signal {value} escaped its bounds");
        }
    }
}
