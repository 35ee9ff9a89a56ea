//! Suffix Engine - registrable domain and public suffix decomposition
//!
//! This library splits a host into three parts against a flat table of
//! public suffixes:
//! - the public suffix (`com`, `co.uk`, `shiga.jp`), matched longest-first
//!   from the right
//! - the registrable domain (the suffix plus one label)
//! - a subdomain carrying up to `level` extra labels
//!
//! # Example
//!
//! ```rust
//! use suffix_engine::{Decomposer, SuffixTable};
//!
//! let table = SuffixTable::parse("
//! com
//! jp
//! shiga.jp    // multi-label suffix
//! ").unwrap();
//!
//! let engine = Decomposer::new(&table);
//!
//! let result = engine.decompose("mp.weixin.qq.com", 1).unwrap();
//! assert_eq!(result.suffix, "com");
//! assert_eq!(result.domain, "qq.com");
//! assert_eq!(result.subdomain, "weixin.qq.com");
//! assert_eq!(result.label_count, 4);
//!
//! let result = engine.decompose("ritto.shiga.jp", 0).unwrap();
//! assert_eq!(result.suffix, "shiga.jp");
//! assert_eq!(result.domain, "ritto.shiga.jp");
//!
//! // Best-effort mode: unknown suffixes give empty strings
//! let (subdomain, domain, suffix) = engine.get_subdomain("host.zzzinvalid", 0);
//! assert!(subdomain.is_empty() && domain.is_empty() && suffix.is_empty());
//! ```
//!
//! # Suffix List Format
//!
//! ```text
//! // comment
//! com
//! co.uk       # trailing comment
//! shiga.jp
//! ```
//!
//! Entries are exact suffixes. Wildcard (`*.`) and exception (`!`) rules
//! are rejected when the list is parsed.
//!
//! # Bundled List
//!
//! With the default `bundled` feature, [`decompose`], [`get_subdomain`]
//! and [`decompose_link`] run against a list compiled into the crate.

pub mod engine;
pub mod error;
pub mod link;
pub mod parser;
pub mod table;
pub mod types;

// Re-export commonly used items
pub use engine::Decomposer;
pub use error::{Result, TldError};
pub use link::host_from_link;
pub use parser::{parse_suffix_list, parse_suffix_list_from_file};
pub use table::{LoadOptions, SuffixTable};
pub use types::{DecompositionRequest, DecompositionResult, SuffixRecord};

#[cfg(feature = "bundled")]
pub use table::{default_table, BUNDLED_SUFFIX_LIST};

/// Decompose `input` against the bundled suffix list.
///
/// See [`Decomposer::decompose`].
#[cfg(feature = "bundled")]
pub fn decompose(input: &str, level: usize) -> Result<DecompositionResult> {
    Decomposer::new(default_table()).decompose(input, level)
}

/// Best-effort decomposition against the bundled suffix list, returning
/// `(subdomain, domain, suffix)` and empty strings when no suffix matches.
#[cfg(feature = "bundled")]
pub fn get_subdomain(input: &str, level: usize) -> (String, String, String) {
    Decomposer::new(default_table()).get_subdomain(input, level)
}

/// Extract the host from `link` and decompose it against the bundled list.
#[cfg(feature = "bundled")]
pub fn decompose_link(link: &str, level: usize) -> Result<DecompositionResult> {
    Decomposer::new(default_table()).decompose_link(link, level)
}
