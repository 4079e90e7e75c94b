//! Interactive timezone selection for the configuration menu.
//!
//! This module provides a terminal fuzzy-search UI over the grouped timezone
//! menu: type to filter, arrow keys to navigate, Enter to select. Entries from
//! the "currently in use" group are listed first so operators can re-pick a
//! zone their locations already use.

use crate::constants::{
    IN_USE_GROUP_LABEL, PICKER_MAX_DISPLAY_WIDTH, PICKER_MAX_RESULTS, PICKER_VISIBLE_ITEMS,
};
use crate::logger::Log;
use crate::tz::menu::TimezoneMenu;
use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    cursor::{Hide, MoveDown, MoveUp, Show},
    event::{self, Event, KeyCode},
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{Write, stdout};

/// A selectable row in the picker: a timezone plus the group it renders under.
#[derive(Debug, Clone)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
    pub group: String,
}

/// Run interactive timezone selection over a built menu.
///
/// # Returns
/// * `Ok(item)` - The selected timezone
/// * `Err(_)` - If selection fails or the user cancels
pub fn select_timezone_interactive(menu: &TimezoneMenu) -> Result<PickerItem> {
    Log::log_block_start("Select a timezone");

    let items = picker_items(menu);

    Log::log_indented("Type to search, use ↑/↓ to navigate, Enter to select, Esc to cancel");

    let selected = fuzzy_search_timezone(&items)?;
    Ok(selected.clone())
}

/// Flatten a menu into picker rows, used group first.
fn picker_items(menu: &TimezoneMenu) -> Vec<PickerItem> {
    let mut items = Vec::new();
    for entry in &menu.in_use {
        items.push(PickerItem {
            id: entry.id.clone(),
            label: entry.label.clone(),
            group: IN_USE_GROUP_LABEL.to_string(),
        });
    }
    for group in &menu.continents {
        for entry in &group.entries {
            items.push(PickerItem {
                id: entry.id.clone(),
                label: entry.label.clone(),
                group: group.name.clone(),
            });
        }
    }
    items
}

/// Fuzzy search for timezones with a fixed-height scrollable list.
fn fuzzy_search_timezone(items: &[PickerItem]) -> Result<&PickerItem> {
    if items.is_empty() {
        return Err(anyhow::anyhow!("No timezones available"));
    }

    // Set up terminal
    let mut stdout = stdout();
    stdout.flush()?; // Ensure previous output is displayed
    terminal::enable_raw_mode()?;
    stdout.execute(Hide)?;

    // State for fuzzy search
    let mut search_query = String::new();
    let mut selected_index = 0;
    let mut scroll_offset = 0;

    let result = loop {
        // Filter items based on search query
        let filtered_items: Vec<&PickerItem> = if search_query.is_empty() {
            items.iter().take(PICKER_MAX_RESULTS).collect()
        } else {
            let search_lower = search_query.to_lowercase();
            items
                .iter()
                .filter(|item| {
                    item.id.to_lowercase().contains(&search_lower)
                        || item.label.to_lowercase().contains(&search_lower)
                        || item.group.to_lowercase().contains(&search_lower)
                })
                .take(PICKER_MAX_RESULTS)
                .collect()
        };

        // Adjust selection if it's out of bounds
        if selected_index >= filtered_items.len() && !filtered_items.is_empty() {
            selected_index = filtered_items.len() - 1;
        }

        // Adjust scroll to keep selection visible
        if selected_index < scroll_offset {
            scroll_offset = selected_index;
        } else if selected_index >= scroll_offset + PICKER_VISIBLE_ITEMS {
            scroll_offset = selected_index - PICKER_VISIBLE_ITEMS + 1;
        }

        // Clear from cursor down and keep the logger's pipe continuity
        stdout.execute(Clear(ClearType::FromCursorDown))?;
        stdout.execute(Print("┃\r\n"))?;

        // Draw search box
        stdout.execute(Print("┃ Search: "))?;
        stdout.execute(Print(&search_query))?;
        if search_query.is_empty() {
            stdout.execute(Print("_"))?;
        }
        stdout.execute(Print("\r\n"))?;

        // Draw results (always exactly PICKER_VISIBLE_ITEMS lines)
        for i in 0..PICKER_VISIBLE_ITEMS {
            if scroll_offset + i < filtered_items.len() {
                let item = &filtered_items[scroll_offset + i];
                let is_selected = scroll_offset + i == selected_index;

                let display = format!("{} ({})", item.id, item.label);
                let display = if display.len() > PICKER_MAX_DISPLAY_WIDTH {
                    format!("{}…", &display[..PICKER_MAX_DISPLAY_WIDTH - 1])
                } else {
                    display
                };

                if is_selected {
                    stdout.execute(Print("┃ ▶ "))?;
                    stdout.execute(Print(&display))?;
                } else {
                    stdout.execute(Print("┃   "))?;
                    stdout.execute(Print(&display))?;
                }
            } else {
                stdout.execute(Print("┃"))?;
            }
            stdout.execute(Print("\r\n"))?;
        }

        // Status line
        stdout.execute(Print("┃ "))?;
        if filtered_items.is_empty() {
            stdout.execute(Print("No timezones found"))?;
        } else {
            stdout.execute(Print(format!(
                "{} of {} timezones",
                filtered_items.len(),
                items.len()
            )))?;
        }
        stdout.execute(Print("\r\n"))?;

        stdout.flush()?;

        // Move cursor back up to start for next update
        // We drew: pipe gap + search line + result lines + status line
        let lines_drawn = 1 + 1 + PICKER_VISIBLE_ITEMS + 1;
        stdout.execute(MoveUp(lines_drawn as u16))?;

        // Handle keyboard input
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => {
                    break Err(anyhow::anyhow!("Timezone selection cancelled by user"));
                }
                KeyCode::Enter => {
                    if !filtered_items.is_empty() {
                        break Ok(filtered_items[selected_index]);
                    }
                }
                KeyCode::Up if selected_index > 0 => {
                    selected_index -= 1;
                }
                KeyCode::Up => {}
                KeyCode::Down => {
                    if selected_index + 1 < filtered_items.len() {
                        selected_index += 1;
                    }
                }
                KeyCode::Backspace => {
                    search_query.pop();
                    selected_index = 0;
                    scroll_offset = 0;
                }
                KeyCode::Char(c) => {
                    search_query.push(c);
                    selected_index = 0;
                    scroll_offset = 0;
                }
                _ => {}
            }
        }
    };

    // Clean up terminal
    terminal::disable_raw_mode()?;
    stdout.execute(Show)?;

    // Move cursor down past the search UI for next logger output
    let lines_drawn = 1 + 1 + PICKER_VISIBLE_ITEMS + 1;
    stdout.execute(MoveDown(lines_drawn as u16))?;
    stdout.flush()?;

    result
}
