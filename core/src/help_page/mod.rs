#![deny(missing_docs)]

//! # Help Page Module
//!
//! Page Model Extractor for ASP.NET Web API help pages.
//!
//! - **model**: groups, entries and detail records read from the pages.
//! - **dom**: document-order view over the parsed HTML.
//! - **index**: the main page listing every API.
//! - **detail**: the per-API page.

pub mod detail;
pub mod dom;
pub mod index;
pub mod model;

pub use detail::parse_api_detail;
pub use index::parse_main_page;
pub use model::{api_count, ApiDetail, ApiEntry, ApiGroup, ApiGroups, DetailParam};
