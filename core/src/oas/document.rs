#![deny(missing_docs)]

//! # OpenAPI Document
//!
//! Typed form of the emitted OpenAPI 3.0 document. Field names follow the wire
//! format exactly; maps keep insertion order so output is stable across runs.

use crate::error::AppResult;
use crate::oas::models::{HttpMethod, ParamSource};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version string written to the `openapi` field.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Media type used for every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Operations of one path, keyed by lowercase method.
pub type PathItem = IndexMap<HttpMethod, Operation>;

/// Root of the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Always [`OPENAPI_VERSION`].
    pub openapi: String,
    /// API metadata.
    pub info: OpenApiInfo,
    /// Server the API is reachable at.
    pub servers: Vec<OpenApiServer>,
    /// One tag per help page group.
    pub tags: Vec<OpenApiTag>,
    /// Path template -> method -> operation.
    pub paths: IndexMap<String, PathItem>,
}

impl OpenApiDocument {
    /// Creates an empty document with the given metadata.
    pub fn new(info: OpenApiInfo) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            servers: Vec::new(),
            tags: Vec::new(),
            paths: IndexMap::new(),
        }
    }

    /// Looks up the operation stored at `path` + `method`.
    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<&Operation> {
        self.paths.get(path).and_then(|item| item.get(&method))
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML rendering.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a JSON document back into its typed form.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The `info` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiInfo {
    /// The title of the API.
    pub title: String,
    /// Description of the API.
    pub description: String,
    /// The version of the API document.
    pub version: String,
}

impl Default for OpenApiInfo {
    fn default() -> Self {
        Self {
            title: "ASP.NET Web API".to_string(),
            description: "API documentation converted from an ASP.NET help page".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

impl OpenApiInfo {
    /// Overrides the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Overrides the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Overrides the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Server metadata for `servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiServer {
    /// Server URL.
    pub url: String,
    /// Description for the server.
    pub description: String,
}

/// Tag metadata for `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiTag {
    /// The tag name (the group id).
    pub name: String,
    /// A description of the tag.
    pub description: String,
}

/// A single operation under `paths.<path>.<method>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Group the operation belongs to.
    pub tags: Vec<String>,
    /// The raw summary line.
    pub summary: String,
    /// Documentation text.
    pub description: String,
    /// Unique identifier within the document.
    pub operation_id: String,
    /// Path and query parameters; omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// JSON body for post/put/patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Status code -> response.
    pub responses: IndexMap<String, Response>,
}

/// A parameter object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// `path` or `query`.
    #[serde(rename = "in")]
    pub location: ParamSource,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Parameter schema (always a string).
    pub schema: SchemaRef,
    /// Parameter description.
    pub description: String,
}

/// A request body object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Media type -> content.
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// An `application/json` body with an object schema.
    pub fn json_object(example: Option<String>) -> Self {
        Self {
            content: json_content(example),
        }
    }
}

/// A response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description.
    pub description: String,
    /// Media type -> content; absent for schema-less responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

impl Response {
    /// A response without a body.
    pub fn bare(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: None,
        }
    }

    /// A response carrying an `application/json` object.
    pub fn json_object(description: impl Into<String>, example: Option<String>) -> Self {
        Self {
            description: description.into(),
            content: Some(json_content(example)),
        }
    }
}

/// A media type object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Body schema.
    pub schema: SchemaRef,
    /// Sample text copied verbatim from a detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A bare `{"type": ...}` schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// JSON type name.
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl SchemaRef {
    /// `{"type": "object"}`
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
        }
    }

    /// `{"type": "string"}`
    pub fn string() -> Self {
        Self {
            schema_type: "string".to_string(),
        }
    }
}

fn json_content(example: Option<String>) -> IndexMap<String, MediaType> {
    IndexMap::from([(
        JSON_MEDIA_TYPE.to_string(),
        MediaType {
            schema: SchemaRef::object(),
            example,
        },
    )])
}
