//! Binary entry point for zonepick.
//!
//! Parses command-line arguments and dispatches to the one-shot command
//! handlers. Unresolved lookups exit non-zero so the commands compose in
//! shell scripts; the library itself treats "no match" as a plain outcome.

use anyhow::Result;

mod args;
mod commands;
mod config;
mod constants;
mod logger;
mod store;
mod tz;
mod utils;

use args::{CliAction, ParsedArgs, display_help, display_version_info};
use constants::EXIT_FAILURE;

fn main() -> Result<()> {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::Menu {
            debug_enabled,
            json_output,
        } => commands::menu::handle_menu_command(debug_enabled, json_output),
        CliAction::Resolve {
            debug_enabled,
            json_output,
            input,
        } => {
            let matched =
                commands::resolve::handle_resolve_command(&input, debug_enabled, json_output)?;
            if !matched {
                std::process::exit(EXIT_FAILURE);
            }
            Ok(())
        }
        CliAction::Check {
            debug_enabled,
            input,
        } => {
            let valid = commands::resolve::handle_check_command(&input, debug_enabled)?;
            if !valid {
                std::process::exit(EXIT_FAILURE);
            }
            Ok(())
        }
        CliAction::Pick { debug_enabled } => commands::pick::handle_pick_command(debug_enabled),
        CliAction::ShowVersion => {
            display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
    }
}
