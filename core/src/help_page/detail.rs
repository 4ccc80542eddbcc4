#![deny(missing_docs)]

//! # API Detail Page
//!
//! Reads the per-API page linked from the index: the URI parameter table and
//! the request/response samples. Every section is optional; a page
//! missing all of them yields an empty [`ApiDetail`].

use crate::help_page::dom::{HtmlPage, NodeId};
use crate::help_page::model::{ApiDetail, DetailParam};
use regex::Regex;
use std::sync::OnceLock;

/// Parses an API detail page.
pub fn parse_api_detail(html: &str) -> ApiDetail {
    let page = HtmlPage::parse(html);

    let parameters = find_heading(&page, uri_parameters_re())
        .and_then(|heading| page.find_next(heading, |n| page.is(n, "table")))
        .map(|table| parameter_rows(&page, table))
        .unwrap_or_default();
    let request_example = sample_after(&page, request_body_re());
    let response_example = sample_after(&page, response_re());

    ApiDetail {
        parameters,
        request_example,
        response_example,
    }
}

fn uri_parameters_re() -> &'static Regex {
    static URI_PARAMETERS_RE: OnceLock<Regex> = OnceLock::new();
    URI_PARAMETERS_RE
        .get_or_init(|| Regex::new(r"(?i)URI参数|URI Parameters").expect("Invalid regex"))
}

fn request_body_re() -> &'static Regex {
    static REQUEST_BODY_RE: OnceLock<Regex> = OnceLock::new();
    REQUEST_BODY_RE.get_or_init(|| Regex::new(r"(?i)请求正文|Request Body").expect("Invalid regex"))
}

fn response_re() -> &'static Regex {
    static RESPONSE_RE: OnceLock<Regex> = OnceLock::new();
    RESPONSE_RE.get_or_init(|| Regex::new(r"(?i)响应|Response").expect("Invalid regex"))
}

/// First `h2`/`h3` whose text matches `pattern`.
fn find_heading(page: &HtmlPage, pattern: &Regex) -> Option<NodeId> {
    page.elements("h2")
        .chain(page.elements("h3"))
        .filter(|&h| pattern.is_match(&page.stripped_text(h)))
        .min()
}

fn sample_after(page: &HtmlPage, pattern: &Regex) -> Option<String> {
    let heading = find_heading(page, pattern)?;
    let pre = page.find_next(heading, |n| page.is(n, "pre"))?;
    Some(page.raw_text(pre)).filter(|text| !text.is_empty())
}

/// Which cell holds which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    name: usize,
    description: usize,
}

impl ColumnMap {
    /// Name, type, description; the type column is not used.
    const POSITIONAL: Self = Self {
        name: 0,
        description: 2,
    };

    /// Maps columns by header label; `None` unless both are labelled.
    fn from_header(labels: &[String]) -> Option<Self> {
        let find = |candidates: &[&str]| {
            labels.iter().position(|label| {
                let label = label.to_lowercase();
                candidates.iter().any(|c| label == *c)
            })
        };
        Some(Self {
            name: find(&["name", "名称"])?,
            description: find(&["description", "说明", "描述"])?,
        })
    }

    fn width(&self) -> usize {
        self.name.max(self.description) + 1
    }
}

fn parameter_rows(page: &HtmlPage, table: NodeId) -> Vec<DetailParam> {
    let rows: Vec<Vec<String>> = page
        .descendant_elements(table, "tr")
        .map(|tr| {
            page.descendants(tr)
                .filter(|&cell| page.is(cell, "td") || page.is(cell, "th"))
                .map(|cell| page.stripped_text(cell))
                .collect()
        })
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let columns = ColumnMap::from_header(header).unwrap_or(ColumnMap::POSITIONAL);

    body.iter()
        .filter(|cells| cells.len() >= columns.width().max(3))
        .map(|cells| DetailParam {
            name: cells[columns.name].clone(),
            description: cells[columns.description].clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"<html><body>
        <h1>POST api/orders/{id}?notify={notify}</h1>
        <h2>Request Information</h2>
        <h3>URI Parameters</h3>
        <table class="help-page-table">
            <thead><tr><td>Name</td><td>Description</td><td>Type</td><td>Additional information</td></tr></thead>
            <tbody>
                <tr><td>id</td><td><p>Order id</p></td><td>integer</td><td>Required</td></tr>
                <tr><td>notify</td><td></td><td>boolean</td><td>None.</td></tr>
            </tbody>
        </table>
        <h3>Request Body</h3>
        <pre class="wrapped">{
  "Quantity": 2
}</pre>
        <h2>Response Information</h2>
        <pre>{"Id": 1}</pre>
    </body></html>"#;

    #[test]
    fn test_full_detail_page() {
        let detail = parse_api_detail(DETAIL);
        assert_eq!(
            detail.parameters,
            vec![
                DetailParam {
                    name: "id".into(),
                    description: "Order id".into(),
                },
                DetailParam {
                    name: "notify".into(),
                    description: "".into(),
                },
            ]
        );
        assert_eq!(
            detail.request_example.as_deref(),
            Some("{\n  \"Quantity\": 2\n}")
        );
        assert_eq!(detail.response_example.as_deref(), Some(r#"{"Id": 1}"#));
    }

    #[test]
    fn test_positional_columns_skip_first_row() {
        let html = r#"<h2>URI参数</h2>
            <table>
                <tr><td>参数</td><td>类别</td><td>备注</td></tr>
                <tr><td>machine_Number</td><td>string</td><td>机器编号</td></tr>
                <tr><td>short</td><td>row</td></tr>
            </table>"#;
        let detail = parse_api_detail(html);
        assert_eq!(
            detail.parameters,
            vec![DetailParam {
                name: "machine_Number".into(),
                description: "机器编号".into(),
            }]
        );
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let html = "<h2>uri parameters</h2><table><tr><th>NAME</th><th>TYPE</th><th>DESCRIPTION</th></tr>\
                    <tr><td>q</td><td>string</td><td>search</td></tr></table>";
        let detail = parse_api_detail(html);
        assert_eq!(detail.parameters.len(), 1);
        assert_eq!(detail.parameters[0].name, "q");
        assert_eq!(detail.parameters[0].description, "search");
    }

    #[test]
    fn test_header_without_type_column() {
        let html = "<h3>URI Parameters</h3><table>\
                    <tr><th>Description</th><th>Name</th><th>Additional information</th></tr>\
                    <tr><td>Page size</td><td>take</td><td>Default is 20</td></tr></table>";
        let detail = parse_api_detail(html);
        assert_eq!(
            detail.parameters,
            vec![DetailParam {
                name: "take".into(),
                description: "Page size".into(),
            }]
        );
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(parse_api_detail("<p>nothing to see</p>"), ApiDetail::default());
        assert_eq!(parse_api_detail(""), ApiDetail::default());
    }
}
