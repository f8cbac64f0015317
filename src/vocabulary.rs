//! Column Vocabulary
//!
//! The fixed, ordered set of canonical schema column names that sentences
//! are resolved against, plus the parallel lower-cased sequence used only
//! for matching. Both sequences have identical length and index
//! correspondence, and the vocabulary is immutable once built.

/// Canonical column names of the paper-database schema, in schema order.
/// Casing is preserved exactly for output.
pub const CANONICAL_COLUMNS: [&str; 14] = [
    "Place",
    "Affiliate",
    "AffiliationID",
    "AuthID",
    "FieldID",
    "Name",
    "ConfID",
    "PaperID",
    "Venue",
    "Year",
    "Topic",
    "KeywordID",
    "Summary",
    "Title",
];

/// Ordered column vocabulary with a lower-cased view for matching.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    canonical: Vec<String>,
    lowered: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(CANONICAL_COLUMNS.iter().map(|s| s.to_string()).collect())
    }
}

impl Vocabulary {
    /// Build a vocabulary from canonical names, deriving the lower-cased
    /// matching sequence at the same indices.
    pub fn new(canonical: Vec<String>) -> Self {
        let lowered = canonical.iter().map(|c| c.to_lowercase()).collect();
        Self { canonical, lowered }
    }

    /// Lower-cased entries, index-aligned with the canonical names.
    pub fn lowered(&self) -> &[String] {
        &self.lowered
    }

    /// Canonical entries in schema order.
    pub fn canonical(&self) -> &[String] {
        &self.canonical
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Resolve a lower-cased entry back to its canonical name.
    ///
    /// Tie-break: if the lower-cased sequence contains duplicates, the
    /// first positional match wins. The shipped vocabulary is
    /// duplicate-free, so this is a degenerate case that is documented
    /// rather than optimized.
    pub fn canonical_for(&self, lowered_entry: &str) -> Option<&str> {
        self.lowered
            .iter()
            .position(|l| l == lowered_entry)
            .map(|idx| self.canonical[idx].as_str())
    }

    /// Membership test against the canonical names.
    pub fn contains_canonical(&self, name: &str) -> bool {
        self.canonical.iter().any(|c| c == name)
    }
}
