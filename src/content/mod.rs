//! Help content repository for the calculator suite
//!
//! Owns the full set of authored `ContentEntry` records and exposes
//! single-key lookup. The production repository is built once, on first
//! access, from the compiled-in dataset under `entries/` and is read-only for
//! the lifetime of the process — concurrent readers need no coordination.
//!
//! ## Usage
//!
//! ```
//! use circuitcalc_content::content::get_content;
//!
//! match get_content("ohms-law") {
//!     Some(entry) => println!("{}", entry.guide.title),
//!     None => {} // no help authored for this calculator — hide the panel
//! }
//! ```

mod entries;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::types::ContentEntry;

/// Immutable mapping from calculator identifier to its help content.
///
/// Identifiers are case-sensitive kebab-case tokens (e.g. `"ohms-law"`) that
/// correspond 1:1 with calculator widgets in the dashboard.
pub struct ContentRepository {
    entries: HashMap<String, ContentEntry>,
}

impl ContentRepository {
    /// Build a repository from `(id, entry)` pairs.
    ///
    /// Exposed so tests can assemble small fixture repositories without the
    /// production dataset. Duplicate ids are an authoring bug: the later
    /// entry wins and a warning is logged.
    #[must_use]
    pub fn new(entries: Vec<(&str, ContentEntry)>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for (id, entry) in entries {
            if map.insert(id.to_string(), entry).is_some() {
                warn!(id, "duplicate help content id — keeping the later entry");
            }
        }
        Self { entries: map }
    }

    /// Look up the content entry for a calculator identifier.
    ///
    /// A miss is not an error — it simply means no help has been authored
    /// for that calculator yet, and the caller should omit the help panel.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.get(id)
    }

    /// Identifiers of all calculators with authored content, in no
    /// particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide repository, initialized on first access.
static REPOSITORY: OnceLock<ContentRepository> = OnceLock::new();

/// The production content repository.
pub fn repository() -> &'static ContentRepository {
    REPOSITORY.get_or_init(|| {
        let repo = ContentRepository::new(entries::all());
        debug!(calculators = repo.len(), "help content repository initialized");
        repo
    })
}

/// Look up help content for a calculator identifier in the production
/// repository. Returns `None` when no content has been authored for `id`.
#[must_use]
pub fn get_content(id: &str) -> Option<&'static ContentEntry> {
    repository().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

    fn fixture_entry(marker: &str) -> ContentEntry {
        ContentEntry {
            how_to_use: HowToUse {
                title: format!("How to Use {marker}"),
                steps: vec!["Enter a value.".to_string()],
            },
            metrics: MetricGlossary {
                title: "Terms".to_string(),
                items: vec![MetricItem::new("Term", marker)],
            },
            guide: Guide {
                title: "Guide".to_string(),
                sections: vec![GuideSection::paragraph("Overview", marker)],
            },
        }
    }

    #[test]
    fn test_fixture_repository_lookup() {
        let repo = ContentRepository::new(vec![("unit-test-calc", fixture_entry("a"))]);
        assert_eq!(repo.len(), 1);
        assert!(repo.get("unit-test-calc").is_some());
        assert!(repo.get("other-calc").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_later_entry() {
        let repo = ContentRepository::new(vec![
            ("dup", fixture_entry("first")),
            ("dup", fixture_entry("second")),
        ]);
        assert_eq!(repo.len(), 1);
        let entry = repo.get("dup").unwrap();
        assert_eq!(entry.metrics.items[0].definition, "second");
    }

    #[test]
    fn test_empty_repository() {
        let repo = ContentRepository::new(Vec::new());
        assert!(repo.is_empty());
        assert!(repo.get("anything").is_none());
    }

    #[test]
    fn test_ids_match_lookups() {
        let repo = ContentRepository::new(vec![
            ("a-calc", fixture_entry("a")),
            ("b-calc", fixture_entry("b")),
        ]);
        let mut ids: Vec<&str> = repo.ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a-calc", "b-calc"]);
        for id in ids {
            assert!(repo.get(id).is_some());
        }
    }
}
