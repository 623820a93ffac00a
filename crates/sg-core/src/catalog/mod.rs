//! The test catalog: an immutable table of statistical tests keyed by id.
//!
//! Lookups are exact and case-sensitive. The decision tree is responsible for
//! referencing ids exactly as they appear here; nothing in this module
//! normalizes or fuzzes a key.

pub mod entries;
pub mod ids;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::errors::GuideError;

// ---------------------------------------------------------------------------
// TestKind
// ---------------------------------------------------------------------------

/// Whether a test relies on distributional (parametric) assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Parametric,
    NonParametric,
    /// Tests where the parametric/non-parametric split does not apply
    /// (categorical tests, model-comparison tests, diagnostics).
    General,
}

impl TestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parametric => "parametric",
            Self::NonParametric => "non_parametric",
            Self::General => "general",
        }
    }

    /// Short marker shown next to a test name, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Parametric => Some("P"),
            Self::NonParametric => Some("NP"),
            Self::General => None,
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TestEntry
// ---------------------------------------------------------------------------

/// Descriptive metadata for one statistical test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestEntry {
    pub id: &'static str,
    pub kind: TestKind,
    /// Alternate names, shown next to the id. Never used for lookup.
    pub aliases: &'static [&'static str],
    /// Short form written right after the id, e.g. `LRT`.
    pub abbreviation: Option<&'static str>,
    /// When to reach for this test or which statistics it reports. Shown in
    /// parentheses after the name.
    pub usage: Option<&'static str>,
    pub purpose: &'static str,
    /// Display order matters.
    pub assumptions: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    entries: entries::STANDARD_ENTRIES,
    index: build_index(entries::STANDARD_ENTRIES),
});

/// Read-only id -> entry table.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [TestEntry],
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog over a static entry table.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::DuplicateCatalogEntry`] if two entries share an id.
    pub fn new(entries: &'static [TestEntry]) -> Result<Self, GuideError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, position).is_some() {
                return Err(GuideError::DuplicateCatalogEntry {
                    id: entry.id.to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// The process-wide catalog of every test the guide knows about.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Look up an entry by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::MissingCatalogEntry`] if no entry has this id.
    pub fn lookup(&self, id: &str) -> Result<&TestEntry, GuideError> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| GuideError::MissingCatalogEntry { id: id.to_string() })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All entries in catalog order.
    #[must_use]
    pub const fn entries(&self) -> &'static [TestEntry] {
        self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The standard table is checked for duplicates by the tests below; later
// duplicates simply shadow earlier ones here.
fn build_index(entries: &'static [TestEntry]) -> HashMap<&'static str, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.id, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Catalog, TestEntry, TestKind, entries, ids};
    use crate::errors::GuideError;

    static DUPLICATED: [TestEntry; 2] = [
        TestEntry {
            id: "Sign Test",
            kind: TestKind::NonParametric,
            aliases: &[],
            abbreviation: None,
            usage: None,
            purpose: "first",
            assumptions: &[],
        },
        TestEntry {
            id: "Sign Test",
            kind: TestKind::NonParametric,
            aliases: &[],
            abbreviation: None,
            usage: None,
            purpose: "second",
            assumptions: &[],
        },
    ];

    #[test]
    fn standard_table_has_unique_ids() {
        let catalog = Catalog::new(entries::STANDARD_ENTRIES).expect("no duplicate ids");
        assert_eq!(catalog.len(), Catalog::standard().len());
    }

    #[test]
    fn standard_catalog_holds_every_guide_test() {
        assert_eq!(Catalog::standard().len(), 52);
        assert!(!Catalog::standard().is_empty());
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = Catalog::standard();
        let entry = catalog.lookup(ids::WELCH_T_TEST).expect("cataloged");
        assert_eq!(entry.id, "Welch's t-test");
        assert_eq!(entry.kind, TestKind::Parametric);
        assert!(!entry.assumptions.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = Catalog::standard();
        assert!(catalog.contains("Sign Test"));
        assert!(!catalog.contains("sign test"));
        assert!(!catalog.contains(" Sign Test"));
        let missing = catalog.lookup("sign test");
        assert!(matches!(
            missing,
            Err(GuideError::MissingCatalogEntry { ref id }) if id == "sign test"
        ));
    }

    #[test]
    fn aliases_are_not_lookup_keys() {
        let catalog = Catalog::standard();
        let mann_whitney = catalog.lookup(ids::MANN_WHITNEY_U).expect("cataloged");
        assert!(mann_whitney.aliases.contains(&"Wilcoxon Rank-Sum Test"));
        assert!(!catalog.contains("Wilcoxon Rank-Sum Test"));
    }

    #[test]
    fn abbreviations_and_usage_are_not_lookup_keys() {
        let catalog = Catalog::standard();
        let lrt = catalog.lookup(ids::LIKELIHOOD_RATIO).expect("cataloged");
        assert_eq!(lrt.abbreviation, Some("LRT"));
        assert!(!catalog.contains("LRT"));

        let mcnemar = catalog.lookup(ids::MCNEMAR).expect("cataloged");
        assert!(mcnemar.usage.is_some_and(|usage| usage.contains("2x2")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = Catalog::new(&DUPLICATED).expect_err("duplicates must fail");
        assert!(matches!(error, GuideError::DuplicateCatalogEntry { ref id } if id == "Sign Test"));
    }

    #[test]
    fn entries_keep_catalog_order() {
        let first = Catalog::standard().entries().first().expect("non-empty");
        assert_eq!(first.id, ids::ONE_SAMPLE_T_TEST);
        let last = Catalog::standard().entries().last().expect("non-empty");
        assert_eq!(last.id, ids::SCORE_TEST);
    }

    #[test]
    fn kind_markers() {
        assert_eq!(TestKind::Parametric.marker(), Some("P"));
        assert_eq!(TestKind::NonParametric.marker(), Some("NP"));
        assert_eq!(TestKind::General.marker(), None);
        assert_eq!(TestKind::NonParametric.to_string(), "non_parametric");
    }
}
