//! Timezone database access, resolution, and menu building.
//!
//! This module provides functionality for:
//! - Reading the canonical identifier set from the embedded IANA database
//! - Resolving free-form strings to canonical identifiers
//! - Building the grouped selection menu
//! - Interactive timezone picking

pub mod menu;
pub mod picker;
pub mod resolver;

pub use menu::{ContinentGroup, TimezoneEntry, TimezoneMenu};
pub use resolver::{AliasEntry, AliasTable, TimezoneResolver};

/// Access to the embedded IANA timezone database.
pub mod database {
    use crate::constants::UTC_IDENTIFIER;

    /// Canonical identifiers in `Continent/City` form plus the `UTC` sentinel.
    ///
    /// `chrono-tz` also ships `Etc/*` offsets and legacy single-token names;
    /// those are filtered out so every identifier groups cleanly by continent.
    /// `TZ_VARIANTS` is sorted, so the returned order is stable across runs.
    pub fn canonical_identifiers() -> Vec<&'static str> {
        chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| {
                *name == UTC_IDENTIFIER || (name.contains('/') && !name.starts_with("Etc/"))
            })
            .collect()
    }
}

/// Current wall-clock time in the given canonical timezone.
///
/// Returns `None` when the identifier is not in the embedded database.
pub fn now_in_zone(id: &str) -> Option<chrono::DateTime<chrono_tz::Tz>> {
    let tz: chrono_tz::Tz = id.parse().ok()?;
    Some(chrono::Utc::now().with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_identifiers_shape() {
        let ids = database::canonical_identifiers();
        assert!(!ids.is_empty());
        assert!(ids.contains(&"America/New_York"));
        assert!(ids.contains(&"Europe/London"));
        assert!(ids.contains(&"UTC"));
        for id in &ids {
            assert!(
                *id == "UTC" || id.contains('/'),
                "unexpected identifier shape: {}",
                id
            );
            assert!(!id.starts_with("Etc/"), "Etc zone leaked through: {}", id);
        }
    }

    #[test]
    fn test_canonical_identifiers_are_unique() {
        let ids = database::canonical_identifiers();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_now_in_zone() {
        assert!(now_in_zone("America/New_York").is_some());
        assert!(now_in_zone("UTC").is_some());
        assert!(now_in_zone("Atlantis/Citadel").is_none());
    }
}
