//! Grouped timezone menu construction.
//!
//! Builds the data structure behind a timezone selection UI: a "currently in
//! use" group followed by one group per continent, each entry carrying a
//! human-readable label. The output is plain ordered data; rendering it as
//! text, JSON, or markup is the consumer's concern.

use serde::Serialize;

use crate::constants::UTC_IDENTIFIER;

/// A selectable timezone: canonical identifier plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneEntry {
    pub id: String,
    pub label: String,
}

/// A named bucket of timezones sharing a leading path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentGroup {
    pub name: String,
    pub entries: Vec<TimezoneEntry>,
}

/// The complete grouped menu.
///
/// `continents` preserves first-seen order from the identifier scan, with the
/// synthetic `UTC` group guaranteed last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneMenu {
    pub in_use: Vec<TimezoneEntry>,
    pub continents: Vec<ContinentGroup>,
}

impl TimezoneMenu {
    /// Build the menu from a canonical identifier set and usage data.
    ///
    /// # Arguments
    /// * `identifiers` - Canonical identifier set, iteration order preserved
    /// * `used` - Timezones currently in use, already deduplicated
    /// * `default_timezone` - Optional global default, prepended to the used
    ///   group when set and not already present
    pub fn build<S: AsRef<str>>(
        identifiers: &[S],
        used: &[String],
        default_timezone: Option<&str>,
    ) -> Self {
        let mut in_use = Vec::new();

        let default_first = default_timezone
            .filter(|tz| !tz.is_empty() && !used.iter().any(|u| u == tz))
            .map(str::to_string);
        for id in default_first.into_iter().chain(used.iter().cloned()) {
            if id.is_empty() {
                continue;
            }
            in_use.push(TimezoneEntry {
                label: display_label(&id),
                id,
            });
        }

        let mut continents: Vec<ContinentGroup> = Vec::new();
        for id in identifiers {
            let id = id.as_ref();
            // Identifiers without a continent prefix don't group; the UTC
            // sentinel gets its own synthetic group below
            let Some((continent, city)) = id.split_once('/') else {
                continue;
            };
            let entry = TimezoneEntry {
                id: id.to_string(),
                label: city_label(city),
            };
            match continents.iter_mut().find(|group| group.name == continent) {
                Some(group) => group.entries.push(entry),
                None => continents.push(ContinentGroup {
                    name: continent.to_string(),
                    entries: vec![entry],
                }),
            }
        }

        // The UTC group is synthetic and always last, whether or not the
        // identifier set contains the sentinel
        continents.retain(|group| group.name != UTC_IDENTIFIER);
        continents.push(ContinentGroup {
            name: UTC_IDENTIFIER.to_string(),
            entries: vec![TimezoneEntry {
                id: UTC_IDENTIFIER.to_string(),
                label: UTC_IDENTIFIER.to_string(),
            }],
        });

        TimezoneMenu { in_use, continents }
    }
}

/// Human-readable label for a full identifier.
///
/// The portion after the first `/`, with any further `/` rendered as " - "
/// and underscores as spaces. Identifiers without a `/` label as themselves.
pub fn display_label(id: &str) -> String {
    match id.split_once('/') {
        Some((_, city)) => city_label(city),
        None => id.to_string(),
    }
}

fn city_label(city: &str) -> String {
    city.replace('/', " - ").replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<&'static str> {
        vec!["America/New_York", "Europe/London", "UTC"]
    }

    #[test]
    fn test_display_label_rules() {
        assert_eq!(display_label("America/New_York"), "New York");
        assert_eq!(display_label("Europe/London"), "London");
        assert_eq!(
            display_label("America/Argentina/Buenos_Aires"),
            "Argentina - Buenos Aires"
        );
        assert_eq!(display_label("UTC"), "UTC");
    }

    #[test]
    fn test_build_groups_by_continent_with_trailing_utc() {
        let used = vec!["Europe/London".to_string()];
        let menu = TimezoneMenu::build(&ids(), &used, None);

        assert_eq!(menu.in_use.len(), 1);
        assert_eq!(menu.in_use[0].id, "Europe/London");
        assert_eq!(menu.in_use[0].label, "London");

        let names: Vec<&str> = menu
            .continents
            .iter()
            .map(|group| group.name.as_str())
            .collect();
        assert_eq!(names, vec!["America", "Europe", "UTC"]);

        assert_eq!(menu.continents[0].entries[0].id, "America/New_York");
        assert_eq!(menu.continents[0].entries[0].label, "New York");
        assert_eq!(menu.continents[2].entries.len(), 1);
        assert_eq!(menu.continents[2].entries[0].id, "UTC");
        assert_eq!(menu.continents[2].entries[0].label, "UTC");
    }

    #[test]
    fn test_utc_group_present_even_without_sentinel() {
        let menu = TimezoneMenu::build(&["America/New_York"], &[], None);
        let last = menu.continents.last().unwrap();
        assert_eq!(last.name, "UTC");
        assert_eq!(last.entries[0].id, "UTC");
    }

    #[test]
    fn test_default_timezone_prepended_when_absent() {
        let used = vec!["Europe/London".to_string()];
        let menu = TimezoneMenu::build(&ids(), &used, Some("America/New_York"));
        let in_use: Vec<&str> = menu.in_use.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(in_use, vec!["America/New_York", "Europe/London"]);
    }

    #[test]
    fn test_default_timezone_not_duplicated() {
        let used = vec!["Europe/London".to_string()];
        let menu = TimezoneMenu::build(&ids(), &used, Some("Europe/London"));
        let in_use: Vec<&str> = menu.in_use.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(in_use, vec!["Europe/London"]);
    }

    #[test]
    fn test_empty_default_and_empty_used_entries_skipped() {
        let used = vec!["".to_string(), "Europe/London".to_string()];
        let menu = TimezoneMenu::build(&ids(), &used, Some(""));
        let in_use: Vec<&str> = menu.in_use.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(in_use, vec!["Europe/London"]);
    }

    #[test]
    fn test_used_entry_without_slash_labels_as_itself() {
        let used = vec!["UTC".to_string()];
        let menu = TimezoneMenu::build(&ids(), &used, None);
        assert_eq!(menu.in_use[0].label, "UTC");
    }

    #[test]
    fn test_continent_order_is_first_seen() {
        let set = vec![
            "Pacific/Auckland",
            "America/New_York",
            "Pacific/Honolulu",
            "Europe/London",
        ];
        let menu = TimezoneMenu::build(&set, &[], None);
        let names: Vec<&str> = menu
            .continents
            .iter()
            .map(|group| group.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pacific", "America", "Europe", "UTC"]);
    }

    #[test]
    fn test_multi_segment_identifiers_group_under_first_segment() {
        let set = vec!["America/Argentina/Buenos_Aires", "America/New_York"];
        let menu = TimezoneMenu::build(&set, &[], None);
        assert_eq!(menu.continents[0].name, "America");
        assert_eq!(menu.continents[0].entries.len(), 2);
        assert_eq!(
            menu.continents[0].entries[0].label,
            "Argentina - Buenos Aires"
        );
    }

    #[test]
    fn test_menu_serializes_in_order() {
        let menu = TimezoneMenu::build(&ids(), &[], None);
        let json = serde_json::to_string(&menu).unwrap();
        let america = json.find("America").unwrap();
        let europe = json.find("Europe").unwrap();
        let utc = json.rfind("UTC").unwrap();
        assert!(america < europe);
        assert!(europe < utc);
    }
}
