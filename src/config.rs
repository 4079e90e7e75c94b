//! Configuration system for zonepick with validation and default generation.
//!
//! This module manages the TOML-based configuration file, handling path
//! discovery, validation, default value generation, and targeted updates when
//! the interactive picker saves a new default timezone.
//!
//! ## Configuration Location
//!
//! The configuration lives at **XDG_CONFIG_HOME**/zonepick/zonepick.toml and
//! is created with commented defaults on first run. Test builds can redirect
//! the directory through the `ZONEPICK_CONFIG_DIR` environment variable.
//!
//! ## Configuration Structure
//!
//! ```toml
//! default_timezone = "Europe/London"   # Shown first in the menu
//! locations = "locations.toml"         # Location records, relative to this directory
//!
//! # Extra aliases checked before the built-in table
//! [[alias]]
//! timezone = "Europe/London"
//! aliases = ["GMT", "BST"]
//! ```
//!
//! ## Validation and Error Handling
//!
//! Loading validates that the default timezone and every alias target are
//! canonical identifiers. When the default is merely resolvable (a city name,
//! an abbreviation) the error suggests the canonical spelling.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::logger::Log;
use crate::tz::resolver::{AliasEntry, AliasTable, TimezoneResolver};

/// Configuration structure for zonepick settings.
///
/// All fields are optional in the file; missing values fall back to the
/// defaults in [`crate::constants`].
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Timezone shown first in the selection menu.
    ///
    /// An empty string is treated the same as leaving the key out.
    pub default_timezone: Option<String>,

    /// Location records file, resolved relative to the config directory
    /// unless absolute.
    pub locations: Option<String>,

    /// User alias entries, consulted before the built-in table.
    #[serde(default, rename = "alias")]
    pub aliases: Vec<AliasEntry>,
}

impl Config {
    /// Path to the configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        #[cfg(any(test, feature = "testing-support"))]
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir).join(DEFAULT_CONFIG_FILE));
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
    }

    /// Load the configuration, creating a commented default file if missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_block_start(&format!(
                "Created default config file: {}",
                crate::utils::path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path)
    }

    /// Load and validate the configuration from an explicit path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::apply_defaults(&mut config);
        validate_config(&config)?;

        Ok(config)
    }

    fn apply_defaults(config: &mut Config) {
        if config.locations.is_none() {
            config.locations = Some(DEFAULT_LOCATIONS_FILE.to_string());
        }
    }

    /// The configured default timezone, with empty treated as unset.
    pub fn default_timezone(&self) -> Option<&str> {
        self.default_timezone
            .as_deref()
            .filter(|tz| !tz.is_empty())
    }

    /// The complete alias table: user entries first, then the built-ins.
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::builtin().prepended_with(self.aliases.clone())
    }

    /// Resolve the location records path against the config file's directory.
    pub fn locations_path(&self, config_path: &Path) -> PathBuf {
        let locations = self.locations.as_deref().unwrap_or(DEFAULT_LOCATIONS_FILE);
        let locations = Path::new(locations);
        if locations.is_absolute() {
            return locations.to_path_buf();
        }
        match config_path.parent() {
            Some(parent) => parent.join(locations),
            None => locations.to_path_buf(),
        }
    }

    /// Write a commented default configuration file.
    pub fn create_default_config(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let settings = ConfigBuilder::new()
            .add_section("Zonepick configuration")
            .add_setting(
                "default_timezone",
                "\"\"",
                "Timezone shown first in the menu (leave empty for none)",
            )
            .add_setting(
                "locations",
                &format!("\"{}\"", DEFAULT_LOCATIONS_FILE),
                "Location records file, relative to this directory",
            )
            .build();

        let mut config_content = settings;
        config_content.push_str("\n\n#[Timezone aliases]\n");
        config_content.push_str("# Extra aliases checked before the built-in table. Example:\n");
        config_content.push_str("# [[alias]]\n");
        config_content.push_str("# timezone = \"Europe/London\"\n");
        config_content.push_str("# aliases = [\"GMT\", \"BST\"]\n");

        fs::write(path, config_content).context("Failed to write default config file")?;
        Ok(())
    }

    /// Update the `default_timezone` line of an existing config file.
    ///
    /// The line's trailing comment and column are preserved. When the key is
    /// missing, it is inserted before the first table header so it stays a
    /// top-level key.
    pub fn update_default_timezone(timezone: &str) -> Result<()> {
        let config_path = Self::get_config_path()?;
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let new_line = format!("default_timezone = \"{}\"", timezone);
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

        if let Some(index) = lines.iter().position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with("default_timezone ") || trimmed.starts_with("default_timezone=")
        }) {
            lines[index] = preserve_comment_formatting(&lines[index], &new_line);
        } else {
            let insert_at = lines
                .iter()
                .position(|line| line.trim_start().starts_with('['))
                .unwrap_or(lines.len());
            lines.insert(insert_at, new_line);
        }

        let mut updated = lines.join("\n");
        if !updated.ends_with('\n') {
            updated.push('\n');
        }
        fs::write(&config_path, updated)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Log the loaded configuration for debug output.
    pub fn log_config(&self) {
        Log::log_block_start("Loaded configuration");
        Log::log_indented(&format!(
            "Default timezone: {}",
            self.default_timezone().unwrap_or("(none)")
        ));
        Log::log_indented(&format!(
            "Locations file: {}",
            self.locations.as_deref().unwrap_or(DEFAULT_LOCATIONS_FILE)
        ));
        Log::log_indented(&format!("User aliases: {}", self.aliases.len()));
    }
}

/// Validate a loaded configuration against the canonical identifier set.
pub fn validate_config(config: &Config) -> Result<()> {
    let identifiers = crate::tz::database::canonical_identifiers();

    if let Some(default) = config.default_timezone() {
        if !identifiers.iter().any(|id| *id == default) {
            let resolver = TimezoneResolver::from_database(config.alias_table());
            match resolver.resolve(Some(default)) {
                Some(suggestion) => anyhow::bail!(
                    "default_timezone \"{}\" is not a canonical identifier.\n\
                     Did you mean \"{}\"? Canonical identifiers look like \"Europe/London\".",
                    default,
                    suggestion
                ),
                None => anyhow::bail!(
                    "default_timezone \"{}\" is not a canonical identifier.\n\
                     Run 'zonepick --resolve \"{}\"' to search for a match.",
                    default,
                    default
                ),
            }
        }
    }

    for entry in &config.aliases {
        if !identifiers.iter().any(|id| *id == entry.timezone.as_str()) {
            anyhow::bail!(
                "Alias entry points at \"{}\", which is not a canonical identifier",
                entry.timezone
            );
        }
        if entry.aliases.is_empty() {
            anyhow::bail!("Alias entry for \"{}\" lists no aliases", entry.timezone);
        }
        if entry.aliases.iter().any(|alias| alias.trim().is_empty()) {
            anyhow::bail!(
                "Alias entry for \"{}\" contains a blank alias",
                entry.timezone
            );
        }
    }

    Ok(())
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{}]", title),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{} = {}", key, value);
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {}", comment),
            },
        });
        self
    }

    fn build(self) -> String {
        // Calculate the maximum width of all setting lines for alignment
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // +1 for one space between setting and comment

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new()); // Empty line before new section
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        result.join("\n")
    }
}

fn preserve_comment_formatting(original_line: &str, new_line: &str) -> String {
    match original_line.find('#') {
        Some(column) => {
            let comment = &original_line[column..];
            if new_line.len() < column {
                format!("{:<width$}{}", new_line, comment, width = column)
            } else {
                format!("{} {}", new_line, comment)
            }
        }
        None => new_line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn parse(content: &str) -> Config {
        let mut config: Config = toml::from_str(content).unwrap();
        Config::apply_defaults(&mut config);
        config
    }

    #[test]
    fn test_config_toml_parsing() {
        let config = parse(
            r#"
default_timezone = "Europe/London"
locations = "records/locations.toml"

[[alias]]
timezone = "Europe/London"
aliases = ["GMT", "BST"]
"#,
        );
        assert_eq!(config.default_timezone(), Some("Europe/London"));
        assert_eq!(config.locations.as_deref(), Some("records/locations.toml"));
        assert_eq!(config.aliases.len(), 1);
        assert_eq!(config.aliases[0].timezone, "Europe/London");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_config_defaults_applied() {
        let config = parse("");
        assert_eq!(config.default_timezone(), None);
        assert_eq!(config.locations.as_deref(), Some(DEFAULT_LOCATIONS_FILE));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_empty_default_timezone_treated_as_unset() {
        let config = parse(r#"default_timezone = """#);
        assert_eq!(config.default_timezone(), None);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_rejects_unknown_default_timezone() {
        let config = parse(r#"default_timezone = "Atlantis/Citadel""#);
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("not a canonical identifier"));
    }

    #[test]
    fn test_validation_suggests_resolvable_default_timezone() {
        let config = parse(r#"default_timezone = "new york""#);
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("America/New_York"));
    }

    #[test]
    fn test_validation_rejects_alias_with_unknown_target() {
        let config = parse(
            r#"
[[alias]]
timezone = "Atlantis/Citadel"
aliases = ["ATL"]
"#,
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_empty_alias_list() {
        let config = parse(
            r#"
[[alias]]
timezone = "Europe/London"
aliases = []
"#,
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_blank_alias() {
        let config = parse(
            r#"
[[alias]]
timezone = "Europe/London"
aliases = ["GMT", "  "]
"#,
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_alias_table_puts_user_entries_first() {
        let config = parse(
            r#"
[[alias]]
timezone = "Europe/Berlin"
aliases = ["HQ"]
"#,
        );
        let table = config.alias_table();
        assert_eq!(table.entries()[0].timezone, "Europe/Berlin");
        assert!(table.entries().len() > 1);
    }

    #[test]
    fn test_locations_path_resolution() {
        let config = parse(r#"locations = "records.toml""#);
        let config_path = PathBuf::from("/home/op/.config/zonepick/zonepick.toml");
        assert_eq!(
            config.locations_path(&config_path),
            PathBuf::from("/home/op/.config/zonepick/records.toml")
        );

        let absolute = parse(r#"locations = "/var/lib/zonepick/records.toml""#);
        assert_eq!(
            absolute.locations_path(&config_path),
            PathBuf::from("/var/lib/zonepick/records.toml")
        );
    }

    #[test]
    fn test_default_config_file_creation() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("zonepick.toml");

        Config::create_default_config(&config_path).unwrap();
        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.default_timezone(), None);
        assert_eq!(config.locations.as_deref(), Some(DEFAULT_LOCATIONS_FILE));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_config_malformed_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("zonepick.toml");
        std::fs::write(&config_path, "default_timezone = [not valid").unwrap();
        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    #[serial]
    fn test_update_default_timezone_preserves_comment() {
        let temp_dir = tempdir().unwrap();
        unsafe { std::env::set_var(CONFIG_DIR_ENV, temp_dir.path()) };

        let config_path = Config::get_config_path().unwrap();
        Config::create_default_config(&config_path).unwrap();

        Config::update_default_timezone("Europe/London").unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        let line = content
            .lines()
            .find(|line| line.starts_with("default_timezone"))
            .unwrap();
        assert!(line.contains("\"Europe/London\""));
        assert!(line.contains("# Timezone shown first in the menu"));

        // The updated file still loads and validates
        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.default_timezone(), Some("Europe/London"));

        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
    }

    #[test]
    #[serial]
    fn test_update_default_timezone_inserts_before_tables() {
        let temp_dir = tempdir().unwrap();
        unsafe { std::env::set_var(CONFIG_DIR_ENV, temp_dir.path()) };

        let config_path = Config::get_config_path().unwrap();
        std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        std::fs::write(
            &config_path,
            "locations = \"locations.toml\"\n\n[[alias]]\ntimezone = \"Europe/London\"\naliases = [\"GMT\"]\n",
        )
        .unwrap();

        Config::update_default_timezone("Asia/Tokyo").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.default_timezone(), Some("Asia/Tokyo"));
        assert_eq!(config.aliases.len(), 1);

        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
    }
}
