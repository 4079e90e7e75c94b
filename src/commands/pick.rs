//! Implementation of the --pick command.
//!
//! Runs the interactive picker over the grouped menu and persists the chosen
//! timezone as the configured default, so the next menu render lists it first.

use anyhow::Result;

use crate::config::Config;
use crate::logger::Log;
use crate::tz::picker;

/// Handle the --pick command.
pub fn handle_pick_command(debug_enabled: bool) -> Result<()> {
    Log::log_version();

    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }

    let menu = crate::commands::menu::build_menu(&config, debug_enabled)?;

    let selected = match picker::select_timezone_interactive(&menu) {
        Ok(item) => item,
        Err(e) => {
            if e.to_string().contains("cancelled") {
                Log::log_block_start("Selection cancelled, configuration unchanged");
                Log::log_end();
                return Ok(());
            }
            return Err(e);
        }
    };

    Log::log_block_start(&format!("Selected {}", selected.id));
    if let Some(now) = crate::tz::now_in_zone(&selected.id) {
        Log::log_indented(&format!(
            "Current time there: {}",
            now.format("%H:%M:%S (%Z)")
        ));
    }

    Config::update_default_timezone(&selected.id)?;

    let config_path = Config::get_config_path()?;
    Log::log_decorated(&format!(
        "Saved as default_timezone in {}",
        crate::utils::path_for_display(&config_path)
    ));

    Log::log_end();
    Ok(())
}
