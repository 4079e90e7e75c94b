//! Application constants and default values for zonepick.
//!
//! This module contains the configuration file layout, the built-in timezone
//! alias table, and the operational constants used throughout the application.

// ═══ Configuration Files ═══
// All paths are resolved under the platform config directory

pub const DEFAULT_CONFIG_DIR: &str = "zonepick";
pub const DEFAULT_CONFIG_FILE: &str = "zonepick.toml";
pub const DEFAULT_LOCATIONS_FILE: &str = "locations.toml";

/// Environment override for the config directory, honored by test builds only.
pub const CONFIG_DIR_ENV: &str = "ZONEPICK_CONFIG_DIR";

// ═══ Timezone Database ═══

/// The one canonical identifier without a continent prefix.
pub const UTC_IDENTIFIER: &str = "UTC";

/// Group label shown above the currently-used timezones in the picker.
pub const IN_USE_GROUP_LABEL: &str = "Currently in use";

// ═══ Built-in Timezone Aliases ═══
// Legacy abbreviations mapped to canonical identifiers. Entry order is match
// precedence; alias entries from user configuration are consulted first.

pub const DEFAULT_TIMEZONE_ALIASES: &[(&str, &[&str])] = &[
    ("America/Anchorage", &["AKST", "AKDT"]),
    ("America/Chicago", &["CST", "CDT", "Central"]),
    ("America/Denver", &["MST", "MDT", "Mountain"]),
    ("America/Halifax", &["AST", "ADT"]),
    ("America/Los_Angeles", &["PST", "PDT", "Pacific"]),
    ("America/New_York", &["EST", "EDT", "Eastern"]),
    ("America/Sao_Paulo", &["BRT"]),
    ("Asia/Dubai", &["GST"]),
    ("Asia/Kolkata", &["IST"]),
    ("Asia/Tokyo", &["JST"]),
    ("Australia/Sydney", &["AEST", "AEDT"]),
    ("Europe/Berlin", &["CET", "CEST"]),
    ("Europe/London", &["GMT", "BST"]),
    ("Europe/Moscow", &["MSK"]),
    ("Pacific/Auckland", &["NZST", "NZDT"]),
    ("Pacific/Honolulu", &["HST"]),
];

// ═══ Picker Interface ═══
// Visual display settings for the interactive timezone picker

pub const PICKER_VISIBLE_ITEMS: usize = 5; // Rows shown at once in the result list
pub const PICKER_MAX_RESULTS: usize = 100; // Filter cap to keep redraws cheap
pub const PICKER_MAX_DISPLAY_WIDTH: usize = 60; // Characters before a row is truncated

// ═══ Exit Codes ═══
// Standard exit codes for process termination

pub const EXIT_FAILURE: i32 = 1; // General failure, including unresolved lookups
