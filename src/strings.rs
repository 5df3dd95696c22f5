//! User-visible display strings.
//!
//! Every string the sidebar renders lives in this table so a locale swap
//! touches one file. The production cluster this layout comes from shipped
//! Korean captions; this build compiles the English set because the bundled
//! mono fonts cover ASCII only.

// Network type names shown in the address band.
pub const NETWORK_NONE: &str = "--";
pub const NETWORK_WIFI: &str = "WiFi";
pub const NETWORK_2G: &str = "2G";
pub const NETWORK_3G: &str = "3G";
pub const NETWORK_LTE: &str = "LTE";
pub const NETWORK_5G: &str = "5G";

// Temperature panel captions.
pub const TEMP_GOOD: &str = "TEMP\nGOOD";
pub const TEMP_WARNING: &str = "TEMP\nWARNING";
pub const TEMP_HIGH: &str = "TEMP\nHIGH";

// Module-connection panel captions.
pub const VEHICLE_ONLINE: &str = "VEHICLE\nONLINE";
pub const VEHICLE_OFFLINE: &str = "VEHICLE\nOFFLINE";

/// First line of the battery caption; the percent line is formatted per tick.
pub const BATTERY_PREFIX: &str = "BATTERY";

// Simulator shell popup shown when the settings screen is requested.
pub const POPUP_OPENING: &str = "OPENING";
pub const POPUP_SETTINGS: &str = "SETTINGS";
