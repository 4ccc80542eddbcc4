#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives `operationId` values from an HTTP method and a path template, and keeps
//! them unique for the lifetime of one document build.

use crate::oas::models::HttpMethod;
use std::collections::{HashMap, HashSet};

/// Derives the base identifier of an operation.
///
/// e.g. `GET /users/{id}` -> `get_users_id`. The root path has no segment to
/// append, so `GET /` is just `get`.
pub fn base_operation_id(method: HttpMethod, path: &str) -> String {
    let flattened = path.replace('/', "_").replace(['{', '}'], "");
    match flattened.trim_matches('_') {
        "" => method.to_string(),
        segments => format!("{}_{}", method, segments),
    }
}

/// Hands out collision-free operation ids.
///
/// The first request for a base identifier returns it unchanged; later requests
/// for the same base get `_1`, `_2`, ... appended. One allocator belongs to one
/// document build, so results depend only on the order of requests.
#[derive(Debug, Default)]
pub struct OperationIdAllocator {
    collisions: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl OperationIdAllocator {
    /// Creates an allocator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh identifier for `method` + `path`.
    pub fn allocate(&mut self, method: HttpMethod, path: &str) -> String {
        let base = base_operation_id(method, path);
        let count = self.collisions.entry(base.clone()).or_insert(0);

        let mut candidate = if *count == 0 && !self.issued.contains(&base) {
            base.clone()
        } else {
            *count += 1;
            format!("{}_{}", base, count)
        };
        // A suffixed id may equal another route's base (`/a/b` twice vs `/a/b/1`).
        while self.issued.contains(&candidate) {
            *count += 1;
            candidate = format!("{}_{}", base, count);
        }

        self.issued.insert(candidate.clone());
        candidate
    }

    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Whether no identifier has been handed out yet.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_operation_id() {
        assert_eq!(base_operation_id(HttpMethod::Get, "/users"), "get_users");
        assert_eq!(
            base_operation_id(HttpMethod::Post, "/users/{id}/activate"),
            "post_users_id_activate"
        );
        assert_eq!(
            base_operation_id(HttpMethod::Get, "/Default/FaceOrdering/GetInterval"),
            "get_Default_FaceOrdering_GetInterval"
        );
        assert_eq!(base_operation_id(HttpMethod::Delete, "/"), "delete");
        assert_eq!(base_operation_id(HttpMethod::Get, "/{}"), "get");
    }

    #[test]
    fn test_single_separator_after_method() {
        assert_eq!(base_operation_id(HttpMethod::Get, "/a/b"), "get_a_b");
        assert_eq!(
            base_operation_id(HttpMethod::Put, "/api/values/{id}"),
            "put_api_values_id"
        );
        let mut ids = OperationIdAllocator::new();
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_1");
        assert_eq!(ids.allocate(HttpMethod::Get, "/"), "get");
    }

    #[test]
    fn test_collisions_get_running_suffix() {
        let mut ids = OperationIdAllocator::new();
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_1");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_2");
        assert_eq!(ids.allocate(HttpMethod::Post, "/a/b"), "post_a_b");
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_distinct_paths_sharing_a_base() {
        let mut ids = OperationIdAllocator::new();
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/{b}"), "get_a_b");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_1");
    }

    #[test]
    fn test_suffix_never_reissues_a_natural_base() {
        let mut ids = OperationIdAllocator::new();
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_1");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b/1"), "get_a_b_1_1");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b/1"), "get_a_b_1_2");

        let mut ids = OperationIdAllocator::new();
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b/1"), "get_a_b_1");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b");
        assert_eq!(ids.allocate(HttpMethod::Get, "/a/b"), "get_a_b_2");
    }

    #[test]
    fn test_no_duplicates_over_long_sequences() {
        let mut ids = OperationIdAllocator::new();
        let mut seen = HashSet::new();
        for round in 0..50 {
            for path in ["/x", "/x/1", "/x/2", "/x/{id}", "/x/1/1"] {
                let id = ids.allocate(HttpMethod::Get, path);
                assert!(seen.insert(id.clone()), "duplicate {id} in round {round}");
            }
        }
        assert_eq!(ids.len(), 250);
    }

    #[test]
    fn test_fresh_allocator_has_no_history() {
        let mut first = OperationIdAllocator::new();
        first.allocate(HttpMethod::Get, "/a");
        let mut second = OperationIdAllocator::new();
        assert!(second.is_empty());
        assert_eq!(second.allocate(HttpMethod::Get, "/a"), "get_a");
    }
}
