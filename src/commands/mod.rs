//! Command-line command handlers for zonepick.
//!
//! This module contains implementations for the one-shot CLI commands:
//! --list, --resolve, --check, and --pick. Each command is implemented in its
//! own submodule to keep the code organized and maintainable.

pub mod menu;
pub mod pick;
pub mod resolve;
