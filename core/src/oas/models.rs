#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Intermediate Representation (IR) structures produced by the route name parser
//! and consumed by the document assembler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verbs recognized at the start of a help page summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
}

impl HttpMethod {
    /// Matches a verb token case-insensitively (`get`, `Post`, `DELETE`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Lowercase form used as the operation key in `paths`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
        }
    }

    /// Whether operations with this verb carry a JSON request body.
    pub fn has_request_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A help page summary line resolved to a verb and a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path template, always starting with `/`, placeholders kept as `{name}`.
    pub path: String,
}

impl ParsedRoute {
    /// Route used when a summary line has no recognizable leading verb.
    pub fn unknown() -> Self {
        Self {
            method: HttpMethod::Get,
            path: "/unknown".to_string(),
        }
    }
}

/// Location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    /// `{name}` segment of the path.
    Path,
    /// `key={placeholder}` pair in the query string.
    Query,
}

/// A parameter extracted from a summary line (or a detail page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParam {
    /// Parameter name.
    pub name: String,
    /// Where the parameter is bound.
    pub source: ParamSource,
    /// Path parameters are always required.
    pub required: bool,
    /// Human-readable description.
    pub description: String,
}

impl RouteParam {
    /// A required path parameter with the synthesized description.
    pub fn path(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("path parameter {}", name),
            name,
            source: ParamSource::Path,
            required: true,
        }
    }

    /// An optional query parameter with the synthesized description.
    pub fn query(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("query parameter {}", name),
            name,
            source: ParamSource::Query,
            required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_tokens_are_case_insensitive() {
        assert_eq!(HttpMethod::from_token("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_token("pAtCh"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::from_token("HEAD"), None);
        assert_eq!(HttpMethod::from_token(""), None);
    }

    #[test]
    fn test_request_body_verbs() {
        assert!(HttpMethod::Post.has_request_body());
        assert!(HttpMethod::Put.has_request_body());
        assert!(HttpMethod::Patch.has_request_body());
        assert!(!HttpMethod::Get.has_request_body());
        assert!(!HttpMethod::Delete.has_request_body());
    }

    #[test]
    fn test_param_constructors() {
        let p = RouteParam::path("id");
        assert!(p.required);
        assert_eq!(p.source, ParamSource::Path);
        assert_eq!(p.description, "path parameter id");

        let q = RouteParam::query("token");
        assert!(!q.required);
        assert_eq!(q.description, "query parameter token");
    }

    #[test]
    fn test_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&HttpMethod::Delete).unwrap(), "\"delete\"");
        assert_eq!(HttpMethod::Put.to_string(), "put");
    }
}
