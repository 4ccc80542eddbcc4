#![deny(missing_docs)]

//! # Conversion Pipeline
//!
//! Drives a full run: fetch the main help page, extract the groups, optionally
//! enrich each entry from its detail page, and assemble the document.
//!
//! Transport is injected through [`PageSource`] so the pipeline runs the same
//! against a live server or a set of saved pages.

use crate::error::{AppError, AppResult};
use crate::help_page::{api_count, parse_api_detail, parse_main_page, ApiGroups};
use crate::oas::builder::DocumentBuilder;
use crate::oas::document::{OpenApiDocument, OpenApiInfo};
use tracing::{debug, info, warn};

/// Something that can return the HTML behind a URL.
pub trait PageSource {
    /// Fetches the page at `url` as text.
    fn fetch(&self, url: &str) -> AppResult<String>;
}

/// Knobs for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Fetch and parse every API's detail page.
    pub fetch_details: bool,
    /// `info` block of the generated document.
    pub info: OpenApiInfo,
}

/// Converts the help page at `help_url` into an OpenAPI document.
///
/// Only the main page is mandatory: a detail page that cannot be fetched is
/// logged and its entry is emitted without detail.
pub fn convert(
    source: &impl PageSource,
    help_url: &str,
    options: &ConvertOptions,
) -> AppResult<OpenApiDocument> {
    let base_url = help_url.trim_end_matches('/');

    info!(url = base_url, "fetching main help page");
    let html = source.fetch(base_url).map_err(|e| match e {
        AppError::Fetch(reason) => AppError::Fetch(format!("Cannot fetch main page: {}", reason)),
        other => other,
    })?;

    let mut groups = parse_main_page(&html, base_url)?;
    info!(
        groups = groups.len(),
        apis = api_count(&groups),
        "parsed API listing"
    );

    if options.fetch_details {
        fetch_details(source, &mut groups);
    }

    Ok(DocumentBuilder::new(base_url)
        .with_info(options.info.clone())
        .build(&groups))
}

/// Fills in `detail` for every entry, one page at a time in document order.
fn fetch_details(source: &impl PageSource, groups: &mut ApiGroups) {
    info!("fetching API detail pages");
    for (group_name, group) in groups.iter_mut() {
        let total = group.apis.len();
        for (i, api) in group.apis.iter_mut().enumerate() {
            debug!(group = %group_name, "{}/{}: {}", i + 1, total, api.name);
            match source.fetch(&api.url) {
                Ok(html) => api.detail = Some(parse_api_detail(&html)),
                Err(e) => warn!(url = %api.url, error = %e, "skipping detail page"),
            }
        }
    }
}
