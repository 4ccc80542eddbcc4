#![deny(missing_docs)]

//! # Parameter Extractor
//!
//! Collects the parameters a summary line declares:
//! - `/{name}` anywhere in the line becomes a required path parameter;
//! - `key={placeholder}` after the first `?` becomes an optional query parameter.
//!
//! Literal query values (`page=1`) are ignored. Names are unique in the result;
//! path parameters come first and shadow query keys of the same name.

use crate::oas::models::RouteParam;
use std::collections::HashSet;

/// Extracts path and query parameters from a raw summary line.
pub fn extract_parameters(name: &str) -> Vec<RouteParam> {
    let mut seen = HashSet::new();
    let mut params = Vec::new();

    for param in path_placeholders(name) {
        if seen.insert(param) {
            params.push(RouteParam::path(param));
        }
    }

    if let Some((_, query)) = name.split_once('?') {
        for key in query_placeholders(query) {
            if seen.insert(key) {
                params.push(RouteParam::query(key));
            }
        }
    }

    params
}

/// Every `/{...}` placeholder in order of appearance.
///
/// The name runs to the next `}`, so it may itself contain `/` or `{`.
fn path_placeholders(input: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find("/{") {
        let start = cursor + offset + 2;
        let Some(len) = input[start..].find('}') else {
            break;
        };
        if len == 0 {
            // `/{}` carries no name; resume right after the slash.
            cursor += offset + 1;
            continue;
        }
        found.push(&input[start..start + len]);
        cursor = start + len + 1;
    }

    found
}

/// Keys of every `key={placeholder}` assignment, where `key` is a full word.
fn query_placeholders(query: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while cursor < query.len() {
        let rest = &query[cursor..];
        let Some(word_start) = rest.find(is_word_char) else {
            break;
        };
        let word = &rest[word_start..];
        let word_len = word.find(|c: char| !is_word_char(c)).unwrap_or(word.len());
        let key = &word[..word_len];
        let after_key = cursor + word_start + word_len;

        match placeholder_len(&query[after_key..]) {
            Some(consumed) => {
                found.push(key);
                cursor = after_key + consumed;
            }
            None => cursor = after_key,
        }
    }

    found
}

/// Length of a leading `={placeholder}` (non-empty placeholder), if present.
fn placeholder_len(input: &str) -> Option<usize> {
    let inner = input.strip_prefix("={")?;
    match inner.find('}') {
        Some(0) | None => None,
        Some(close) => Some(2 + close + 1),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
