#![deny(missing_docs)]

//! # Help Page Model
//!
//! What the extractor reads off an ASP.NET help page, before any route parsing.

use indexmap::IndexMap;

/// Text used when an API row has no documentation cell.
pub const NO_DOCUMENTATION: &str = "No documentation available.";

/// Groups keyed by the `id` of their `<h2>`, in page order.
pub type ApiGroups = IndexMap<String, ApiGroup>;

/// A section of the help page (usually one controller).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiGroup {
    /// Text of the paragraph following the group heading, possibly empty.
    pub description: String,
    /// Entries in table order.
    pub apis: Vec<ApiEntry>,
}

/// One row of a group's API table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiEntry {
    /// Summary line, e.g. `GET api/orders/{id}`.
    pub name: String,
    /// Absolute link to the detail page.
    pub url: String,
    /// Documentation cell text.
    pub description: String,
    /// Filled in when detail pages are fetched.
    pub detail: Option<ApiDetail>,
}

impl ApiEntry {
    /// Creates an entry without detail.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            detail: None,
        }
    }
}

/// Extra information scraped from an API's own page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiDetail {
    /// Rows of the URI parameter table.
    pub parameters: Vec<DetailParam>,
    /// Raw request body sample.
    pub request_example: Option<String>,
    /// Raw response body sample.
    pub response_example: Option<String>,
}

/// A row of the URI parameter table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailParam {
    /// Parameter name.
    pub name: String,
    /// Description cell text.
    pub description: String,
}

/// Total number of entries across all groups.
pub fn api_count(groups: &ApiGroups) -> usize {
    groups.values().map(|g| g.apis.len()).sum()
}
