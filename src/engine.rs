//! Decomposition engine.
//!
//! Walks a host from its rightmost label leftwards, growing the matched
//! public suffix as far as the table allows, then takes one label for the
//! registrable domain and up to `level` more for the subdomain.

use crate::error::{Result, TldError};
use crate::link::host_from_link;
use crate::table::SuffixTable;
use crate::types::{DecompositionRequest, DecompositionResult};

/// Decomposes hosts against a borrowed [`SuffixTable`].
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'a> {
    table: &'a SuffixTable,
}

impl<'a> Decomposer<'a> {
    /// Create a decomposer over a table.
    pub fn new(table: &'a SuffixTable) -> Self {
        Self { table }
    }

    /// The table this decomposer reads from.
    pub fn table(&self) -> &'a SuffixTable {
        self.table
    }

    /// Split `input` into subdomain, registrable domain and public suffix.
    ///
    /// `input` must already be a bare host: no scheme, port or path, and
    /// no case folding is applied. Fails with [`TldError::SuffixNotFound`]
    /// when no right-anchored part of the input is a known suffix.
    pub fn decompose(&self, input: &str, level: usize) -> Result<DecompositionResult> {
        let label_count = input.split('.').count();

        if label_count == 1 {
            let record = self.table.lookup(input).ok_or_else(|| {
                log::debug!("no suffix for single label {}", input);
                TldError::not_found(input)
            })?;
            return Ok(DecompositionResult {
                link: input.to_string(),
                suffix: record.suffix().to_string(),
                domain: String::new(),
                subdomain: String::new(),
                label_count,
            });
        }

        let mut suffix: Option<&str> = None;
        let mut domain: Option<&str> = None;
        let mut subdomain = "";
        let mut extra = 0;

        // Every candidate labels[i..n) is the tail of the input after a dot,
        // or the whole input once the dots run out.
        let starts = input
            .rmatch_indices('.')
            .map(|(dot, _)| dot + 1)
            .chain(std::iter::once(0));

        for start in starts {
            let candidate = &input[start..];
            subdomain = candidate;

            if let Some(record) = self.table.lookup(candidate) {
                log::trace!("{}: suffix candidate {} matched", input, candidate);
                suffix = Some(record.suffix());
                continue;
            }

            if suffix.is_some() {
                if domain.is_none() {
                    domain = Some(candidate);
                }
                if extra >= level {
                    break;
                }
                extra += 1;
            }
        }

        let suffix = suffix.ok_or_else(|| {
            log::debug!("no suffix for {}", input);
            TldError::not_found(input)
        })?;

        let result = DecompositionResult {
            link: input.to_string(),
            suffix: suffix.to_string(),
            domain: domain.unwrap_or_default().to_string(),
            subdomain: subdomain.to_string(),
            label_count,
        };
        log::debug!(
            "decomposed {} (level {}): subdomain={} domain={} suffix={}",
            input,
            level,
            result.subdomain,
            result.domain,
            result.suffix
        );
        Ok(result)
    }

    /// Decompose a [`DecompositionRequest`].
    pub fn decompose_request(&self, request: &DecompositionRequest) -> Result<DecompositionResult> {
        self.decompose(&request.link, request.level)
    }

    /// Best-effort variant of [`decompose`](Self::decompose) returning
    /// `(subdomain, domain, suffix)`.
    ///
    /// An unknown suffix yields three empty strings instead of an error.
    /// Note that a known suffix with no label to its left also yields an
    /// empty domain; use `decompose` to tell the two apart.
    pub fn get_subdomain(&self, input: &str, level: usize) -> (String, String, String) {
        match self.decompose(input, level) {
            Ok(result) => result.into_parts(),
            Err(_) => (String::new(), String::new(), String::new()),
        }
    }

    /// Extract the host from a link such as `https://www.baidu.com/s?wd=x`
    /// and decompose it. The result keeps the original link.
    pub fn decompose_link(&self, link: &str, level: usize) -> Result<DecompositionResult> {
        let host = host_from_link(link)?;
        let mut result = self.decompose(&host, level)?;
        result.link = link.to_string();
        Ok(result)
    }
}
