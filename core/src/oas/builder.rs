#![deny(missing_docs)]

//! # Document Assembler
//!
//! Maps grouped help page entries onto an OpenAPI document. Groups and entries
//! are processed in insertion order, each entry through the route name parser,
//! the parameter extractor and one [`OperationIdAllocator`] owned by the build.

use crate::help_page::model::{ApiDetail, ApiEntry, ApiGroups, NO_DOCUMENTATION};
use crate::oas::document::{
    OpenApiDocument, OpenApiInfo, OpenApiServer, OpenApiTag, Operation, Parameter, RequestBody,
    Response, SchemaRef,
};
use crate::oas::models::{ParsedRoute, RouteParam};
use crate::oas::routes::{extract_parameters, parse_route_name, OperationIdAllocator};
use indexmap::IndexMap;
use tracing::warn;

/// Builds documents for one help page location.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    base_url: String,
    info: OpenApiInfo,
}

impl DocumentBuilder {
    /// `base_url` is the help page URL; the server entry is derived from it.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            info: OpenApiInfo::default(),
        }
    }

    /// Replaces the static `info` block.
    pub fn with_info(mut self, info: OpenApiInfo) -> Self {
        self.info = info;
        self
    }

    /// Assembles the document.
    ///
    /// Two entries resolving to the same path and method leave only the later
    /// operation in the document (a warning is logged).
    pub fn build(&self, groups: &ApiGroups) -> OpenApiDocument {
        let mut doc = OpenApiDocument::new(self.info.clone());
        doc.servers.push(OpenApiServer {
            url: server_url(&self.base_url),
            description: "API server".to_string(),
        });
        doc.tags = groups
            .iter()
            .map(|(name, group)| OpenApiTag {
                name: name.clone(),
                description: if group.description.is_empty() {
                    format!("{} related interfaces", name)
                } else {
                    group.description.clone()
                },
            })
            .collect();

        let mut ids = OperationIdAllocator::new();
        for (group_name, group) in groups {
            for api in &group.apis {
                let route = parse_route_name(&api.name);
                let operation = build_operation(group_name, api, &route, &mut ids);

                let replaced = doc
                    .paths
                    .entry(route.path.clone())
                    .or_default()
                    .insert(route.method, operation);
                if let Some(previous) = replaced {
                    warn!(
                        path = %route.path,
                        method = %route.method,
                        replaced = %previous.summary,
                        by = %api.name,
                        "duplicate route, keeping the later entry"
                    );
                }
            }
        }

        doc
    }
}

/// Shorthand for `DocumentBuilder::new(base_url).build(groups)`.
pub fn build_document(groups: &ApiGroups, base_url: &str) -> OpenApiDocument {
    DocumentBuilder::new(base_url).build(groups)
}

/// `http://host/app/Help/` -> `http://host/app`
pub fn server_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/Help")
        .or_else(|| trimmed.strip_suffix("/help"))
        .unwrap_or(trimmed)
        .to_string()
}

fn build_operation(
    group_name: &str,
    api: &ApiEntry,
    route: &ParsedRoute,
    ids: &mut OperationIdAllocator,
) -> Operation {
    let detail = api.detail.as_ref();

    let mut params = extract_parameters(&api.name);
    if let Some(detail) = detail {
        merge_detail_params(&mut params, detail);
    }

    let request_body = route.method.has_request_body().then(|| {
        RequestBody::json_object(detail.and_then(|d| d.request_example.clone()))
    });

    let responses = IndexMap::from([
        (
            "200".to_string(),
            Response::json_object(
                "success",
                detail.and_then(|d| d.response_example.clone()),
            ),
        ),
        ("400".to_string(), Response::bare("bad request")),
        ("500".to_string(), Response::bare("server error")),
    ]);

    Operation {
        tags: vec![group_name.to_string()],
        summary: api.name.clone(),
        description: if api.description.is_empty() {
            NO_DOCUMENTATION.to_string()
        } else {
            api.description.clone()
        },
        operation_id: ids.allocate(route.method, &route.path),
        parameters: (!params.is_empty()).then(|| params.into_iter().map(to_parameter).collect()),
        request_body,
        responses,
    }
}

/// Appends detail-page parameters the summary line did not already declare.
fn merge_detail_params(params: &mut Vec<RouteParam>, detail: &ApiDetail) {
    for extra in &detail.parameters {
        if extra.name.is_empty() || params.iter().any(|p| p.name == extra.name) {
            continue;
        }
        let mut param = RouteParam::query(extra.name.clone());
        if !extra.description.is_empty() {
            param.description = extra.description.clone();
        }
        params.push(param);
    }
}

fn to_parameter(param: RouteParam) -> Parameter {
    Parameter {
        name: param.name,
        location: param.source,
        required: param.required,
        schema: SchemaRef::string(),
        description: param.description,
    }
}
