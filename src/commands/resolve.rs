//! Implementation of the --resolve and --check commands.
//!
//! Both commands build a resolver over the embedded database and the
//! configured alias table. --resolve runs the full matching passes over
//! free-form input; --check is a byte-exact membership test with a resolution
//! hint when the exact test fails.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::logger::Log;
use crate::tz::TimezoneResolver;

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    input: &'a str,
    timezone: Option<&'a str>,
}

/// Handle the --resolve command.
///
/// # Returns
/// `Ok(true)` when the input resolved to a canonical identifier.
pub fn handle_resolve_command(input: &str, debug_enabled: bool, json_output: bool) -> Result<bool> {
    if json_output {
        // Keep stdout parseable
        Log::set_enabled(false);
    }

    Log::log_version();

    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }

    let resolver = TimezoneResolver::from_database(config.alias_table());
    let resolved = resolver.resolve(Some(input));

    if json_output {
        let report = ResolveReport {
            input,
            timezone: resolved.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(resolved.is_some());
    }

    match &resolved {
        Some(timezone) => {
            Log::log_block_start(&format!("Resolved \"{}\" to {}", input, timezone));
            if let Some(now) = crate::tz::now_in_zone(timezone) {
                Log::log_indented(&format!(
                    "Current time there: {}",
                    now.format("%H:%M:%S (%Z)")
                ));
            }
        }
        None => {
            Log::log_block_start(&format!("No timezone matches \"{}\"", input));
            Log::log_indented("Try a city name like \"new york\" or an abbreviation like \"BST\"");
        }
    }

    Log::log_end();
    Ok(resolved.is_some())
}

/// Handle the --check command.
///
/// # Returns
/// `Ok(true)` when the input is exactly a canonical identifier.
pub fn handle_check_command(input: &str, debug_enabled: bool) -> Result<bool> {
    Log::log_version();

    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }

    let resolver = TimezoneResolver::from_database(config.alias_table());
    let valid = resolver.is_valid(input);

    if valid {
        Log::log_block_start(&format!("{} is a canonical timezone identifier", input));
    } else {
        Log::log_block_start(&format!("\"{}\" is not a canonical timezone identifier", input));
        if let Some(suggestion) = resolver.resolve(Some(input)) {
            Log::log_indented(&format!("Did you mean {}?", suggestion));
        }
    }

    Log::log_end();
    Ok(valid)
}
