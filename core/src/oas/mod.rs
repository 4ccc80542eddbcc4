#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **models**: Intermediate Representation of parsed routes.
//! - **routes**: Summary line parsing and operation naming.
//! - **document**: Typed output document.
//! - **builder**: Assembly of the document from help page groups.

pub mod builder;
pub mod document;
pub mod models;
pub mod routes;

pub use builder::{build_document, server_url, DocumentBuilder};
pub use document::{OpenApiDocument, OpenApiInfo, Operation};
pub use models::{HttpMethod, ParamSource, ParsedRoute, RouteParam};
pub use routes::{extract_parameters, parse_route_name, OperationIdAllocator};
