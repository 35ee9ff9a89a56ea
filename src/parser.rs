//! Suffix list parser.
//!
//! Reads the line-oriented suffix list format into [`SuffixRecord`]s.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TldError};
use crate::table::LoadOptions;
use crate::types::SuffixRecord;

/// A single label of a suffix entry: word characters and inner hyphens.
/// `\w` is Unicode-aware, so IDN entries such as "公司.cn" are accepted
/// alongside their ACE ("xn--") spelling.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w(?:[\w-]*\w)?$").expect("LABEL_PATTERN: hardcoded regex is invalid")
});

/// Parse a suffix list from text.
///
/// One suffix per line. `//` and `#` start comments, blank lines are
/// ignored. Wildcard (`*.`) and exception (`!`) rules are rejected.
pub fn parse_suffix_list(text: &str, options: &LoadOptions) -> Result<Vec<SuffixRecord>> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        let suffix = parse_single_suffix(line, line_num, options)?;

        if !seen.insert(suffix.clone()) {
            if options.allow_duplicates {
                log::trace!("skipping duplicate suffix {} at line {}", suffix, line_num);
                continue;
            }
            return Err(TldError::DuplicateSuffix {
                line: line_num,
                suffix,
            });
        }

        records.push(SuffixRecord::new(suffix));
    }

    Ok(records)
}

/// Parse a suffix list from a file.
pub fn parse_suffix_list_from_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<SuffixRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        TldError::ParseError(format!(
            "Failed to read suffix list '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_suffix_list(&text, options)
}

fn strip_comment(line: &str) -> &str {
    let cut = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min();
    match cut {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_single_suffix(line: &str, line_num: usize, options: &LoadOptions) -> Result<String> {
    if line.starts_with('*') || line.starts_with('!') {
        return Err(TldError::UnsupportedRule {
            line: line_num,
            rule: line.to_string(),
        });
    }

    let suffix = if options.lowercase {
        line.to_lowercase()
    } else {
        line.to_string()
    };

    for label in suffix.split('.') {
        if label.is_empty() {
            return Err(TldError::ParseErrorAtLine {
                line: line_num,
                message: format!("Empty label in suffix: {}", line),
            });
        }
        if !LABEL_PATTERN.is_match(label) {
            return Err(TldError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid label '{}' in suffix: {}", label, line),
            });
        }
    }

    Ok(suffix)
}
