#![deny(missing_docs)]

//! # Route Name Parser
//!
//! Turns a help page summary line such as
//! `POST api/product/edit/book/{product_id}?token={token}` into an HTTP verb
//! and a path template.
//!
//! Accepted shape: a verb token (`GET`, `POST`, `PUT`, `DELETE`, `PATCH`, any case)
//! at the very start, at least one whitespace character, then the path. An
//! empty path is the root. Anything
//! from the first `?` onwards is the query string and is not part of the path.

use crate::oas::models::{HttpMethod, ParsedRoute};

/// Parses a summary line into a route.
///
/// Never fails: a line without a recognizable leading verb yields `GET /unknown`.
pub fn parse_route_name(name: &str) -> ParsedRoute {
    split_route_name(name).unwrap_or_else(ParsedRoute::unknown)
}

fn split_route_name(name: &str) -> Option<ParsedRoute> {
    let verb_end = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let method = HttpMethod::from_token(&name[..verb_end])?;

    let rest = &name[verb_end..];
    let target = rest.trim_start();
    // The verb must be separated from whatever follows it.
    if target.len() == rest.len() {
        return None;
    }

    let raw_path = target.split('?').next().unwrap_or_default();
    Some(ParsedRoute {
        method,
        path: normalize_path(raw_path),
    })
}

/// `" api/orders/{id}/ "` -> `"/api/orders/{id}"`
fn normalize_path(raw: &str) -> String {
    format!("/{}", raw.trim().trim_matches('/'))
}
