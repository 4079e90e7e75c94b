//! Implementation of the --list command.
//!
//! Builds the grouped timezone menu from the embedded database and the
//! location records, then renders it as formatted text or JSON. The menu
//! structure itself stays rendering-agnostic; this module is one consumer.

use anyhow::Result;

use crate::config::Config;
use crate::logger::Log;
use crate::store::LocationStore;
use crate::tz::{TimezoneMenu, database};

/// Handle the --list command.
pub fn handle_menu_command(debug_enabled: bool, json_output: bool) -> Result<()> {
    if json_output {
        // Keep stdout parseable
        Log::set_enabled(false);
    }

    Log::log_version();

    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }

    let menu = build_menu(&config, debug_enabled)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&menu)?);
        return Ok(());
    }

    if menu.in_use.is_empty() {
        Log::log_block_start("Currently in use: none");
    } else {
        Log::log_block_start("Currently in use");
        for entry in &menu.in_use {
            Log::log_indented(&format!("{} ({})", entry.id, entry.label));
        }
    }

    for group in &menu.continents {
        Log::log_block_start(&group.name);
        for entry in &group.entries {
            Log::log_indented(&format!("{} ({})", entry.id, entry.label));
        }
    }

    Log::log_end();
    Ok(())
}

/// Build the grouped menu from configuration and location records.
pub fn build_menu(config: &Config, debug_enabled: bool) -> Result<TimezoneMenu> {
    let config_path = Config::get_config_path()?;
    let locations_path = config.locations_path(&config_path);

    let store = LocationStore::load_or_default(&locations_path)?;
    if debug_enabled {
        Log::log_pipe();
        if store.is_empty() {
            Log::log_debug(&format!(
                "No location records at {}",
                crate::utils::path_for_display(&locations_path)
            ));
        } else {
            Log::log_debug(&format!(
                "Loaded {} location records from {}",
                store.len(),
                crate::utils::path_for_display(&locations_path)
            ));
        }
    }

    let used = store.used_timezones();
    let identifiers = database::canonical_identifiers();

    Ok(TimezoneMenu::build(
        &identifiers,
        &used,
        config.default_timezone(),
    ))
}
