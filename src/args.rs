//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

use crate::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the grouped timezone menu (the default action)
    Menu {
        debug_enabled: bool,
        json_output: bool,
    },
    /// Resolve a free-form input to a canonical timezone
    Resolve {
        debug_enabled: bool,
        json_output: bool,
        input: String,
    },
    /// Check whether an input is a canonical timezone identifier
    Check { debug_enabled: bool, input: String },
    /// Interactively pick the default timezone
    Pick { debug_enabled: bool },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut json_output = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut run_pick = false;
        let mut resolve_input: Option<String> = None;
        let mut check_input: Option<String> = None;
        let mut unknown_arg_found = false;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--json" | "-j" => json_output = true,
                "--list" | "-l" => {} // Menu is the default action
                "--pick" | "-p" => run_pick = true,
                "--resolve" | "-r" => {
                    // Parse: --resolve <input>
                    if i + 1 < args_vec.len() {
                        resolve_input = Some(args_vec[i + 1].clone());
                        i += 1; // Skip the parsed argument
                    } else {
                        Log::log_warning("Missing argument for --resolve. Usage: --resolve <input>");
                        unknown_arg_found = true;
                    }
                }
                "--check" | "-c" => {
                    // Parse: --check <timezone>
                    if i + 1 < args_vec.len() {
                        check_input = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        Log::log_warning(
                            "Missing argument for --check. Usage: --check <timezone>",
                        );
                        unknown_arg_found = true;
                    }
                }
                _ => {
                    // Check if the argument starts with a dash, indicating it's an option
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        unknown_arg_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
            i += 1;
        }

        // Determine the action based on parsed flags
        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help || unknown_arg_found {
            if unknown_arg_found {
                CliAction::ShowHelpDueToError
            } else {
                CliAction::ShowHelp
            }
        } else if run_pick {
            CliAction::Pick { debug_enabled }
        } else if let Some(input) = resolve_input {
            CliAction::Resolve {
                debug_enabled,
                json_output,
                input,
            }
        } else if let Some(input) = check_input {
            CliAction::Check {
                debug_enabled,
                input,
            }
        } else {
            CliAction::Menu {
                debug_enabled,
                json_output,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: zonepick [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-c, --check <timezone>  Check a canonical timezone identifier");
    Log::log_indented("-d, --debug             Enable detailed debug output");
    Log::log_indented("-j, --json              Emit JSON instead of formatted text");
    Log::log_indented("-l, --list              Print the grouped timezone menu (default)");
    Log::log_indented("-p, --pick              Interactively pick the default timezone");
    Log::log_indented("-r, --resolve <input>   Resolve free-form input to a timezone");
    Log::log_indented("-h, --help              Print help information");
    Log::log_indented("-V, --version           Print version information");
    Log::log_end();
}
