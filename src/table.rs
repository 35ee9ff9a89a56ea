//! Suffix table.
//!
//! An immutable map from a dotted public suffix ("com", "co.uk",
//! "shiga.jp") to its [`SuffixRecord`]. Built once, then only read.

use std::collections::hash_map;
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::parser::{parse_suffix_list, parse_suffix_list_from_file};
use crate::types::SuffixRecord;

/// Suffix list compiled into the crate
#[cfg(feature = "bundled")]
pub const BUNDLED_SUFFIX_LIST: &str = include_str!("data/public_suffix.dat");

/// Options for building a table from suffix list text.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Lowercase entries before insertion
    pub lowercase: bool,
    /// Skip repeated entries instead of failing
    pub allow_duplicates: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            allow_duplicates: false,
        }
    }
}

impl LoadOptions {
    /// Create new load options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether entries are lowercased.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set whether duplicate entries are tolerated.
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }
}

/// Read-only suffix lookup table
#[derive(Debug, Clone, Default)]
pub struct SuffixTable {
    entries: HashMap<String, SuffixRecord>,
}

impl SuffixTable {
    /// Build a table from records. Later records replace earlier ones
    /// with the same suffix.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SuffixRecord>,
    {
        let records = records.into_iter();
        let mut entries = HashMap::with_capacity(records.size_hint().0);
        for record in records {
            entries.insert(record.suffix().to_string(), record);
        }
        Self { entries }
    }

    /// Parse a table from suffix list text with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, &LoadOptions::default())
    }

    /// Parse a table from suffix list text.
    pub fn parse_with_options(text: &str, options: &LoadOptions) -> Result<Self> {
        let records = parse_suffix_list(text, options)?;
        let table = Self::from_records(records);
        log::debug!("suffix table built from text: {} entries", table.len());
        Ok(table)
    }

    /// Load a table from a suffix list file with default options.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_options(path, &LoadOptions::default())
    }

    /// Load a table from a suffix list file.
    pub fn from_file_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let records = parse_suffix_list_from_file(path, options)?;
        let table = Self::from_records(records);
        log::debug!(
            "suffix table loaded from {}: {} entries",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Parse the suffix list bundled with the crate.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_SUFFIX_LIST)
    }

    /// Look up an exact suffix string.
    pub fn lookup(&self, suffix: &str) -> Option<&SuffixRecord> {
        self.entries.get(suffix)
    }

    /// Check whether a suffix is present.
    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.contains_key(suffix)
    }

    /// Number of suffixes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all records in arbitrary order.
    pub fn iter(&self) -> hash_map::Values<'_, String, SuffixRecord> {
        self.entries.values()
    }
}

impl FromIterator<SuffixRecord> for SuffixTable {
    fn from_iter<I: IntoIterator<Item = SuffixRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// Process-wide table parsed from the bundled suffix list on first use.
#[cfg(feature = "bundled")]
static DEFAULT_TABLE: once_cell::sync::Lazy<SuffixTable> = once_cell::sync::Lazy::new(|| {
    SuffixTable::bundled().expect("DEFAULT_TABLE: bundled suffix list is malformed")
});

/// Shared table built from the bundled suffix list.
///
/// Panics on first use if the bundled list fails to parse.
#[cfg(feature = "bundled")]
pub fn default_table() -> &'static SuffixTable {
    &DEFAULT_TABLE
}
