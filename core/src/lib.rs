#![deny(missing_docs)]

//! # help2oas Core
//!
//! Converts the API listing of an ASP.NET Web API help page into an
//! OpenAPI 3.0 document.
//!
//! HTML -> [`help_page`] groups -> [`oas::builder`] (route parsing, parameter
//! extraction, operation ids) -> [`OpenApiDocument`].

/// Shared error types.
pub mod error;

/// Help page scraping (Page Model Extractor).
pub mod help_page;

/// Route parsing, operation naming and document assembly.
pub mod oas;

/// End-to-end conversion driver.
pub mod convert;

pub use convert::{convert, ConvertOptions, PageSource};
pub use error::{AppError, AppResult};
pub use help_page::{
    parse_api_detail, parse_main_page, ApiDetail, ApiEntry, ApiGroup, ApiGroups, DetailParam,
};
pub use oas::document::{OpenApiDocument, OpenApiInfo};
pub use oas::{
    build_document, extract_parameters, parse_route_name, DocumentBuilder, HttpMethod,
    OperationIdAllocator, ParamSource, ParsedRoute, RouteParam,
};
