//! Device status snapshot and its mapping to display state.
//!
//! The telemetry side of the cluster delivers a [`DeviceStatus`] snapshot on
//! every update tick. The functions here turn snapshot fields into what the
//! sidebar actually shows: a filled-dot count, a network line, and three
//! [`MetricDisplay`] caption/color pairs. All mappings are pure so each can
//! be exercised directly in tests.
//!
//! A caption and its color are always produced together, by the same
//! function, from the same snapshot field. That keeps a panel from ever
//! pairing one tick's text with another tick's color.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use crate::colors;
use crate::layout::SIGNAL_DOT_COUNT;
use crate::strings;

/// Capacity of a metric caption (longest caption plus headroom).
pub const METRIC_LABEL_CAP: usize = 20;

/// Capacity of the network band line (fits an IPv4 address with headroom).
pub const NETWORK_LINE_CAP: usize = 24;

// =============================================================================
// Snapshot field enums
// =============================================================================

/// Active uplink reported by the connectivity stack.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NetworkType {
    #[default]
    None,
    Wifi,
    Cell2G,
    Cell3G,
    Cell4G,
    Cell5G,
}

impl NetworkType {
    /// Display name for the address band.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => strings::NETWORK_NONE,
            Self::Wifi => strings::NETWORK_WIFI,
            Self::Cell2G => strings::NETWORK_2G,
            Self::Cell3G => strings::NETWORK_3G,
            Self::Cell4G => strings::NETWORK_LTE,
            Self::Cell5G => strings::NETWORK_5G,
        }
    }
}

/// Device temperature classification from the thermal daemon.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThermalLevel {
    #[default]
    Nominal,
    Warning,
    Critical,
}

/// Hardware revision of the vehicle control-interface module, as reported by
/// the telemetry stream. `Unknown` means no module is linked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModuleKind {
    #[default]
    Unknown,
    External,
    Integrated,
}

impl ModuleKind {
    /// Whether a control-interface module is currently linked.
    pub const fn is_linked(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// One tick's worth of device state, consumed whole and never retained.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DeviceStatus {
    pub network_type: NetworkType,
    /// Raw signal strength, 0-4. 0 means no signal.
    pub network_strength: u8,
    /// Wifi IP address; empty when unassigned.
    pub wifi_ip: String<NETWORK_LINE_CAP>,
    /// Battery charge, 0-100.
    pub battery_percent: u8,
    pub thermal: ThermalLevel,
    pub module: ModuleKind,
    /// Whether the screen hosting the sidebar is currently shown.
    pub screen_visible: bool,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self {
            network_type: NetworkType::default(),
            network_strength: 0,
            wifi_ip: String::new(),
            battery_percent: 0,
            thermal: ThermalLevel::default(),
            module: ModuleKind::default(),
            screen_visible: true,
        }
    }
}

// =============================================================================
// Display state
// =============================================================================

/// One of the three theme colors a metric panel can take.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatusColor {
    #[default]
    Good,
    Warning,
    Danger,
}

impl StatusColor {
    /// Concrete palette color.
    pub const fn rgb(self) -> Rgb888 {
        match self {
            Self::Good => colors::GOOD,
            Self::Warning => colors::WARNING,
            Self::Danger => colors::DANGER,
        }
    }
}

/// Caption and color of one metric panel, derived together from a single
/// snapshot field.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MetricDisplay {
    pub label: String<METRIC_LABEL_CAP>,
    pub color: StatusColor,
}

impl MetricDisplay {
    fn from_static(label: &'static str, color: StatusColor) -> Self {
        let mut s = String::new();
        let _ = s.push_str(label);
        Self { label: s, color }
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Number of filled dots for a raw signal strength.
///
/// Raw 0 means no signal and shows zero dots. Any nonzero raw value is
/// shifted up by one so the weakest live signal still fills two dots,
/// capped at the dot count.
pub const fn displayed_signal_strength(raw: u8) -> u8 {
    if raw == 0 {
        0
    } else {
        let shifted = raw.saturating_add(1);
        if shifted > SIGNAL_DOT_COUNT { SIGNAL_DOT_COUNT } else { shifted }
    }
}

/// Text for the address band: the wifi IP when on wifi with an assigned
/// address, otherwise the network type's display name.
pub fn network_line(net: NetworkType, wifi_ip: &str) -> String<NETWORK_LINE_CAP> {
    let mut line: String<NETWORK_LINE_CAP> = String::new();
    let source = if net == NetworkType::Wifi && !wifi_ip.is_empty() {
        wifi_ip
    } else {
        net.label()
    };
    // Overlong input truncates rather than blanking the band.
    for ch in source.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

/// Battery caption and color.
pub fn battery_metric(percent: u8) -> MetricDisplay {
    let mut color = StatusColor::Good;
    if percent < 30 {
        color = StatusColor::Warning;
    } else if percent < 10 {
        // Shadowed by the < 30 arm above, so a low battery never reaches
        // Danger through this path. Matches the shipped cluster.
        // TODO: product call pending on whether < 10 should outrank < 30;
        // reorder the arms once decided.
        color = StatusColor::Danger;
    }

    let mut label: String<METRIC_LABEL_CAP> = String::new();
    let _ = write!(label, "{}\n{}%", strings::BATTERY_PREFIX, percent);
    MetricDisplay { label, color }
}

/// Temperature caption and color.
pub fn thermal_metric(level: ThermalLevel) -> MetricDisplay {
    match level {
        ThermalLevel::Nominal => MetricDisplay::from_static(strings::TEMP_GOOD, StatusColor::Good),
        ThermalLevel::Warning => {
            MetricDisplay::from_static(strings::TEMP_WARNING, StatusColor::Warning)
        }
        ThermalLevel::Critical => MetricDisplay::from_static(strings::TEMP_HIGH, StatusColor::Danger),
    }
}

/// Module-connection caption and color.
pub fn module_metric(kind: ModuleKind) -> MetricDisplay {
    if kind.is_linked() {
        MetricDisplay::from_static(strings::VEHICLE_ONLINE, StatusColor::Good)
    } else {
        MetricDisplay::from_static(strings::VEHICLE_OFFLINE, StatusColor::Danger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
