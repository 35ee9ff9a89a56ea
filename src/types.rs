use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the suffix dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuffixRecord {
    suffix: String,
    labels: usize,
}

impl SuffixRecord {
    /// Create a record from a dotted suffix string (e.g. "co.uk")
    pub fn new(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let labels = suffix.split('.').count();
        Self { suffix, labels }
    }

    /// The canonical suffix string
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Number of labels in the suffix ("co.uk" has 2)
    pub fn label_count(&self) -> usize {
        self.labels
    }
}

/// Input of a single decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionRequest {
    /// Host to decompose, already stripped of scheme, port and path
    pub link: String,
    /// Extra labels beyond the registrable domain to keep in the subdomain
    pub level: usize,
}

impl DecompositionRequest {
    /// Create a request for `link` at `level`
    pub fn new(link: impl Into<String>, level: usize) -> Self {
        Self {
            link: link.into(),
            level,
        }
    }
}

/// Output of a decomposition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionResult {
    /// The input, unchanged
    pub link: String,
    /// Longest matching public suffix
    pub suffix: String,
    /// Registrable domain: the suffix plus one label
    pub domain: String,
    /// The domain plus up to `level` further labels
    pub subdomain: String,
    /// Number of dot-separated labels in the input
    pub label_count: usize,
}

impl DecompositionResult {
    /// Split into the `(subdomain, domain, suffix)` tuple
    pub fn into_parts(self) -> (String, String, String) {
        (self.subdomain, self.domain, self.suffix)
    }
}

impl fmt::Display for DecompositionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
