//! Domain model for parsed OpenAPI documents.
//!
//! The parser lowers the raw JSON document into these types with every `$ref`
//! resolved, so later stages never touch JSON pointers.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

/// HTTP methods the endpoint catalog supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// All supported methods, in the order operations are cataloged per path.
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ]
    }

    /// The lowercase key used for this method inside a path item.
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }

    /// The wire form used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether operations with this method may carry a request body.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level parsed document.
#[derive(Debug, Clone)]
pub struct OpenApiContext {
    pub version: String,
    pub info: ApiInfo,
    pub servers: Vec<Server>,
    pub operations: Vec<Operation>,
}

/// The `info` block of the document.
#[derive(Debug, Clone)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

/// One entry of the `servers` array.
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

/// A single path + method pair from the document.
#[derive(Debug, Clone)]
pub struct Operation {
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: Vec<Response>,
}

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// A declared operation parameter with its resolved schema.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub schema: Schema,
    pub description: Option<String>,
}

/// A request body with its per-media-type schemas.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<String, Schema>,
    pub description: Option<String>,
}

/// A response for one status code with its per-media-type schemas.
#[derive(Debug, Clone)]
pub struct Response {
    pub status_code: String,
    pub description: String,
    pub content: BTreeMap<String, Schema>,
}

impl Response {
    /// Whether this is a 2xx response.
    pub fn is_success(&self) -> bool {
        self.status_code.starts_with('2')
    }
}

/// Schema for `additionalProperties`: either a blanket boolean or a value schema.
#[derive(Debug, Clone)]
pub enum AdditionalProperties {
    Boolean(bool),
    Schema(Box<Schema>),
}

/// A resolved schema node.
///
/// `ref_name` carries the component name when the node was reached through a
/// `$ref`, which is what lets the catalog emit named type shapes instead of
/// anonymous ones.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub ref_name: Option<String>,
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Option<Box<Schema>>,
    pub properties: BTreeMap<String, Schema>,
    pub required: Vec<String>,
    pub additional_properties: Option<AdditionalProperties>,
    pub nullable: bool,
    pub default: Option<JsonValue>,
}

impl Schema {
    /// True when a named field is listed in `required`.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }
}
