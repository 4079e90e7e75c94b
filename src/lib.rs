//! # Zonepick
//!
//! Resolves arbitrary timezone strings to canonical IANA identifiers and
//! builds grouped timezone menus for configuration UIs.
//!
//! The resolver matches free-form input ("new york", "BST") against the
//! embedded timezone database with an alias fallback, memoizing every
//! outcome. The menu builder groups identifiers by continent and highlights
//! the timezones already used by location records.
//!
//! ## Architecture
//!
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Application-wide constants and the built-in alias table
//! - **logger**: Structured logging with visual formatting
//! - **store**: Location records and the used-timezone query
//! - **tz**: Timezone database access, resolution, and menu building
//! - **utils**: Path display helpers

pub mod config;
pub mod constants;
pub mod logger;
pub mod store;
pub mod tz;
pub mod utils;

// Re-export important types for easier access
pub use config::{Config, validate_config};
pub use logger::{Log, LogLevel};
pub use store::{LocationRecord, LocationStatus, LocationStore};
pub use tz::{AliasEntry, AliasTable, TimezoneMenu, TimezoneResolver};
