//! Location records and the used-timezone query.
//!
//! Locations live in a TOML file next to the main configuration, one
//! `[[location]]` table per record:
//!
//! ```toml
//! [[location]]
//! name = "Downtown office"
//! timezone = "America/New_York"
//! status = "publish"
//! ```
//!
//! The store is read-only from this module's point of view: it answers the
//! one query the menu needs, "which timezones are currently in use". Failures
//! reading the file are surfaced to the caller; a missing file is simply an
//! empty store.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Publication state of a location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    /// Visible to end users.
    Publish,
    /// Work in progress; still counts for timezone usage.
    Draft,
    /// Retired records, ignored by the usage query.
    Archived,
}

/// One location record as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    #[serde(default)]
    pub timezone: Option<String>,
    pub status: LocationStatus,
}

#[derive(Debug, Default, Deserialize)]
struct LocationFile {
    #[serde(default, rename = "location")]
    locations: Vec<LocationRecord>,
}

/// Read-only collection of location records.
#[derive(Debug, Default)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
}

impl LocationStore {
    /// Build a store from in-memory records, preserving their order.
    pub fn from_records(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// Load records from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locations from {}", path.display()))?;

        let file: LocationFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse locations from {}", path.display()))?;

        Ok(Self::from_records(file.locations))
    }

    /// Load records from a TOML file, treating a missing file as empty.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty timezone values across published and draft records,
    /// in record order.
    pub fn used_timezones(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !matches!(
                record.status,
                LocationStatus::Publish | LocationStatus::Draft
            ) {
                continue;
            }
            let Some(timezone) = record.timezone.as_deref() else {
                continue;
            };
            if timezone.is_empty() || seen.iter().any(|s| s == timezone) {
                continue;
            }
            seen.push(timezone.to_string());
        }
        seen
    }
}
