#![deny(missing_docs)]

//! # Help Page Index
//!
//! Reads the API listing from the main help page. The page is a sequence of
//! groups, each introduced by `<h2 id="Group">`, optionally followed by a `<p>`
//! description, and then a `<table class="help-page-table">` whose body rows
//! hold a link (the summary line) and a `td.api-documentation` cell.

use crate::error::{AppError, AppResult};
use crate::help_page::dom::{HtmlPage, NodeId};
use crate::help_page::model::{ApiEntry, ApiGroup, ApiGroups, NO_DOCUMENTATION};
use tracing::debug;
use url::Url;

/// Class of the table listing a group's APIs.
const API_TABLE_CLASS: &str = "help-page-table";

/// Class of the cell holding an API's documentation.
const API_DOC_CLASS: &str = "api-documentation";

/// Extracts all API groups from the main help page.
///
/// `base_url` resolves the relative links of each row. Groups without any
/// linked row are left out; a group id seen twice keeps its first position but
/// the later content.
pub fn parse_main_page(html: &str, base_url: &str) -> AppResult<ApiGroups> {
    let base = Url::parse(base_url)
        .map_err(|e| AppError::Page(format!("Invalid base URL '{}': {}", base_url, e)))?;
    let page = HtmlPage::parse(html);
    let mut groups = ApiGroups::new();

    for heading in page.elements("h2") {
        let Some(group_name) = page.attr(heading, "id").filter(|id| !id.is_empty()) else {
            continue;
        };

        let description = page
            .next_element_sibling(heading)
            .filter(|&sibling| page.is(sibling, "p"))
            .map(|p| page.stripped_text(p))
            .unwrap_or_default();

        let Some(table) = page.find_next(heading, |n| {
            page.is(n, "table") && page.has_class(n, API_TABLE_CLASS)
        }) else {
            debug!(group = group_name, "no API table follows the group heading");
            continue;
        };

        let apis = table_rows(&page, table)
            .filter_map(|row| parse_row(&page, row, &base))
            .collect::<Vec<_>>();

        if apis.is_empty() {
            debug!(group = group_name, "group has no linked APIs");
            continue;
        }
        groups.insert(group_name.to_string(), ApiGroup { description, apis });
    }

    Ok(groups)
}

/// Rows of the table body (the header lives in `<thead>`).
fn table_rows(page: &HtmlPage, table: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    page.descendant_elements(table, "tbody")
        .next()
        .into_iter()
        .flat_map(move |body| page.descendant_elements(body, "tr"))
}

fn parse_row(page: &HtmlPage, row: NodeId, base: &Url) -> Option<ApiEntry> {
    let link = page.descendant_elements(row, "a").next()?;
    let href = page.attr(link, "href").unwrap_or_default();
    let url = base
        .join(href)
        .map(String::from)
        .unwrap_or_else(|_| href.to_string());

    let description = page
        .descendant_elements(row, "td")
        .find(|&cell| page.has_class(cell, API_DOC_CLASS))
        .map(|cell| page.stripped_text(cell))
        .unwrap_or_else(|| NO_DOCUMENTATION.to_string());

    Some(ApiEntry::new(page.stripped_text(link), url, description))
}
