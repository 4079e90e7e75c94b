//! Timezone string resolution with alias fallback and memoized lookups.
//!
//! The resolver turns operator-entered strings ("new york", "BST",
//! "Europe/London") into canonical IANA identifiers. Matching runs in strict
//! order: exact identifier, unique case-insensitive substring, then the alias
//! table. Every outcome, including a failed lookup, is memoized so repeated
//! queries for the same raw input never re-run the matching passes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEZONE_ALIASES;

/// One canonical timezone together with the colloquial names that map to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Canonical identifier the aliases resolve to.
    pub timezone: String,
    /// Alias spellings, compared case-insensitively.
    pub aliases: Vec<String>,
}

/// Ordered alias lookup table.
///
/// Entry order is match precedence: the first entry whose alias list contains
/// the queried value wins. The table is immutable once constructed and is
/// handed to [`TimezoneResolver::new`] rather than read from ambient state,
/// so tests can substitute synthetic tables freely.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build a table from explicit entries, preserving their order.
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table of legacy abbreviations.
    pub fn builtin() -> Self {
        let entries = DEFAULT_TIMEZONE_ALIASES
            .iter()
            .map(|(timezone, aliases)| AliasEntry {
                timezone: (*timezone).to_string(),
                aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Return this table with `entries` placed in front of the existing ones.
    ///
    /// Used to give user-configured aliases precedence over the built-ins.
    pub fn prepended_with(self, mut entries: Vec<AliasEntry>) -> Self {
        entries.extend(self.entries);
        Self { entries }
    }

    /// Entries in match-precedence order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }
}

/// Resolves raw timezone strings against a fixed canonical identifier set.
///
/// The identifier set and alias table are injected at construction and never
/// change for the resolver's lifetime. The memo cache is the only mutable
/// state; it is mutex-guarded so concurrent `resolve` calls stay coherent.
#[derive(Debug)]
pub struct TimezoneResolver {
    identifiers: Vec<String>,
    aliases: AliasTable,
    cache: Mutex<HashMap<String, Option<String>>>,
    misses: AtomicUsize,
}

impl TimezoneResolver {
    /// Create a resolver over an explicit identifier set.
    pub fn new<I, S>(identifiers: I, aliases: AliasTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            aliases,
            cache: Mutex::new(HashMap::new()),
            misses: AtomicUsize::new(0),
        }
    }

    /// Create a resolver over the embedded IANA database.
    pub fn from_database(aliases: AliasTable) -> Self {
        Self::new(crate::tz::database::canonical_identifiers(), aliases)
    }

    /// The canonical identifier set this resolver matches against.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Whether `candidate` is exactly present in the canonical set.
    ///
    /// Byte-for-byte comparison, no trimming or case folding.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.identifiers.iter().any(|id| id == candidate)
    }

    /// Resolve a raw input to a canonical identifier, if any matches.
    ///
    /// Absent input is treated as the empty string. The result, including a
    /// miss, is cached under the original raw input, and subsequent calls for
    /// the same input return the cached outcome without re-running matching.
    ///
    /// # Returns
    /// * `Some(identifier)` - The best-matching canonical identifier
    /// * `None` - Nothing matched; this is an expected outcome, not an error
    pub fn resolve(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.unwrap_or("");

        {
            let cache = self
                .cache
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(cached) = cache.get(raw) {
                return cached.clone();
            }
        }

        let resolved = self.lookup(raw);

        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.insert(raw.to_string(), resolved.clone());
        resolved
    }

    /// Run the matching passes for an input not found in the cache.
    fn lookup(&self, raw: &str) -> Option<String> {
        self.misses.fetch_add(1, Ordering::Relaxed);

        // Exact match short-circuits before any normalization happens
        if self.is_valid(raw) {
            return Some(raw.to_string());
        }

        let needle = raw.trim().to_lowercase();
        let needle_underscored = needle.replace(' ', "_");

        // A unique case-insensitive substring match wins; zero or several
        // matches mean the input is ambiguous and this pass yields nothing
        let mut matches = self
            .identifiers
            .iter()
            .filter(|id| id.to_lowercase().contains(&needle_underscored));
        if let (Some(only), None) = (matches.next(), matches.next()) {
            return Some(only.clone());
        }

        // Alias comparison reuses the trimmed lowercase needle, spaces intact
        for entry in self.aliases.entries() {
            if entry
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == needle)
            {
                return Some(entry.timezone.clone());
            }
        }

        None
    }

    /// Number of times the full matching passes have run (cache misses).
    #[cfg(any(test, feature = "testing-support"))]
    pub fn resolution_misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
