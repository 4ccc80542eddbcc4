#![deny(missing_docs)]

//! # Routes Module
//!
//! Everything derived from a single help page summary line:
//! verb and path (`parse`), declared parameters (`params`) and the
//! operation identifier (`naming`).

pub mod naming;
pub mod params;
pub mod parse;

pub use naming::{base_operation_id, OperationIdAllocator};
pub use params::extract_parameters;
pub use parse::parse_route_name;
