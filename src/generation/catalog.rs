//! Endpoint catalog construction.
//!
//! Turns a parsed schema into the set of endpoint definitions and named type
//! shapes the emitter renders. All catalog-level invariants are enforced
//! here: unique operation names, declared path parameters for every template
//! placeholder, a resolvable success response per operation, and scalar-only
//! path/query parameters.

use std::collections::BTreeMap;

use crate::generation::naming::operation_name;
use crate::generation::{GenerateConfig, GenerationError};
use crate::openapi::{
    AdditionalProperties, HttpMethod, OpenApiContext, Operation, ParameterLocation, Schema,
};

/// Validation-error shapes shared by every endpoint. These map to the client
/// library's error module and are never emitted as generated types.
const SHARED_ERROR_SHAPES: &[&str] = &["ValidationError", "HTTPValidationError"];

/// The generator's output model: everything the template needs, fully
/// resolved and deterministically ordered.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    pub api_title: String,
    pub api_version: String,
    pub endpoints: Vec<EndpointDef>,
    pub shapes: Vec<TypeShape>,
}

/// One generated operation.
#[derive(Debug, Clone)]
pub struct EndpointDef {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub path_params: Vec<ParamDef>,
    pub query_params: Vec<ParamDef>,
    pub body: Option<BodyDef>,
    pub response: ResponseKind,
    pub doc: Option<String>,
}

impl EndpointDef {
    /// True for cacheable read operations with a JSON response.
    pub fn is_cacheable_query(&self) -> bool {
        self.method == HttpMethod::Get && matches!(self.response, ResponseKind::Json(_))
    }
}

/// Scalar types allowed for path and query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Integer,
    Number,
    String,
    Boolean,
}

impl ScalarType {
    fn from_schema(schema: &Schema, site: &str) -> Result<Self, GenerationError> {
        match schema.schema_type.as_deref() {
            Some("integer") => Ok(ScalarType::Integer),
            Some("number") => Ok(ScalarType::Number),
            Some("string") => Ok(ScalarType::String),
            Some("boolean") => Ok(ScalarType::Boolean),
            other => Err(GenerationError::Schema(format!(
                "{site}: path/query parameters must be scalar, got {other:?}"
            ))),
        }
    }
}

/// A path or query parameter.
#[derive(Debug, Clone)]
pub struct ParamDef {
    pub name: String,
    pub ty: ScalarType,
    pub required: bool,
    pub doc: Option<String>,
}

/// Request body binding.
#[derive(Debug, Clone)]
pub enum BodyDef {
    /// JSON body referencing a named shape.
    Json { shape: String },
    /// Multipart upload with a single binary file part.
    Multipart { file_field: String },
}

/// The success-response decoding strategy for an endpoint.
#[derive(Debug, Clone)]
pub enum ResponseKind {
    Json(FieldType),
    Binary,
}

/// The type of a field or response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Number,
    String,
    Boolean,
    /// Untyped JSON.
    Any,
    Array(Box<FieldType>),
    /// String-keyed map with homogeneous values.
    Map(Box<FieldType>),
    /// Reference to a named shape.
    Ref(String),
}

/// One field of a named shape.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub wire_name: String,
    pub ty: FieldType,
    pub optional: bool,
    pub doc: Option<String>,
}

/// A named record shape emitted as a struct.
#[derive(Debug, Clone)]
pub struct TypeShape {
    pub name: String,
    pub doc: Option<String>,
    pub fields: Vec<FieldDef>,
    /// Shapes serialized into request bodies omit absent optional fields.
    pub request_direction: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Request,
    Response,
}

/// Build the endpoint catalog for a parsed schema.
pub fn build_catalog(
    spec: &OpenApiContext,
    config: &GenerateConfig,
) -> Result<EndpointCatalog, GenerationError> {
    let mut shapes: BTreeMap<String, TypeShape> = BTreeMap::new();
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut endpoints = Vec::new();

    for op in &spec.operations {
        let endpoint = build_endpoint(op, config, &mut shapes)?;
        let site = format!("{} {}", op.method, op.path);

        if let Some(first) = seen.get(&endpoint.name) {
            return Err(GenerationError::NameCollision {
                name: endpoint.name,
                first: first.clone(),
                second: site,
            });
        }
        seen.insert(endpoint.name.clone(), site);
        endpoints.push(endpoint);
    }

    tracing::debug!(
        endpoints = endpoints.len(),
        shapes = shapes.len(),
        "catalog built"
    );

    Ok(EndpointCatalog {
        api_title: spec.info.title.clone(),
        api_version: spec.info.version.clone(),
        endpoints,
        shapes: shapes.into_values().collect(),
    })
}

fn build_endpoint(
    op: &Operation,
    config: &GenerateConfig,
    shapes: &mut BTreeMap<String, TypeShape>,
) -> Result<EndpointDef, GenerationError> {
    let site = format!("{} {}", op.method, op.path);
    let name = operation_name(op.method, &op.path, &config.strip_prefix);

    let mut path_params = Vec::new();
    for placeholder in path_placeholders(&op.path) {
        let param = op
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Path && p.name == placeholder)
            .ok_or_else(|| {
                GenerationError::Schema(format!(
                    "{site}: path parameter '{placeholder}' is not declared"
                ))
            })?;
        path_params.push(ParamDef {
            name: placeholder,
            ty: ScalarType::from_schema(&param.schema, &site)?,
            required: true,
            doc: param.description.clone(),
        });
    }

    let query_params = op
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| {
            Ok(ParamDef {
                name: p.name.clone(),
                ty: ScalarType::from_schema(&p.schema, &site)?,
                required: p.required && !p.schema.nullable,
                doc: p.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    let body = op
        .request_body
        .as_ref()
        .map(|rb| {
            if !op.method.is_mutating() {
                return Err(GenerationError::Schema(format!(
                    "{site}: GET operations cannot carry a request body"
                )));
            }
            if let Some(schema) = rb.content.get("multipart/form-data") {
                Ok(BodyDef::Multipart {
                    file_field: multipart_file_field(schema),
                })
            } else if let Some(schema) = rb.content.get("application/json") {
                let shape = schema.ref_name.clone().ok_or_else(|| {
                    GenerationError::Schema(format!(
                        "{site}: JSON request body must reference a named component schema"
                    ))
                })?;
                register_shape(shapes, schema, Direction::Request, &site)?;
                Ok(BodyDef::Json { shape })
            } else {
                Err(GenerationError::Schema(format!(
                    "{site}: unsupported request body media type"
                )))
            }
        })
        .transpose()?;

    let success = op
        .responses
        .iter()
        .find(|r| r.is_success())
        .ok_or_else(|| {
            GenerationError::Schema(format!("{site}: no success response declared"))
        })?;

    let response = if let Some(schema) = success.content.get("application/json") {
        ResponseKind::Json(field_type(shapes, schema, Direction::Response, &site)?)
    } else if success
        .content
        .keys()
        .any(|m| m == "image/png" || m == "application/octet-stream")
    {
        ResponseKind::Binary
    } else {
        return Err(GenerationError::Schema(format!(
            "{site}: no resolvable response type"
        )));
    };

    Ok(EndpointDef {
        name,
        method: op.method,
        path: op.path.clone(),
        path_params,
        query_params,
        body,
        response,
        doc: op
            .summary
            .clone()
            .or_else(|| op.description.clone()),
    })
}

/// The `{param}` placeholders of a path template, in path order.
fn path_placeholders(path: &str) -> Vec<String> {
    path.split('/')
        .filter_map(|seg| seg.strip_prefix('{')?.strip_suffix('}'))
        .map(String::from)
        .collect()
}

/// The name of the binary part in a multipart body schema.
fn multipart_file_field(schema: &Schema) -> String {
    schema
        .properties
        .iter()
        .find(|(_, prop)| prop.format.as_deref() == Some("binary"))
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| "file".to_string())
}

fn field_type(
    shapes: &mut BTreeMap<String, TypeShape>,
    schema: &Schema,
    direction: Direction,
    site: &str,
) -> Result<FieldType, GenerationError> {
    if let Some(name) = &schema.ref_name {
        if SHARED_ERROR_SHAPES.contains(&name.as_str()) {
            return Err(GenerationError::Schema(format!(
                "{site}: shared validation-error shape '{name}' cannot appear in a success payload"
            )));
        }
        register_shape(shapes, schema, direction, site)?;
        return Ok(FieldType::Ref(name.clone()));
    }

    match schema.schema_type.as_deref() {
        Some("integer") => Ok(FieldType::Integer),
        Some("number") => Ok(FieldType::Number),
        Some("string") => Ok(FieldType::String),
        Some("boolean") => Ok(FieldType::Boolean),
        Some("array") => {
            let inner = match &schema.items {
                Some(items) => field_type(shapes, items, direction, site)?,
                None => FieldType::Any,
            };
            Ok(FieldType::Array(Box::new(inner)))
        }
        Some("object") | None => match &schema.additional_properties {
            Some(AdditionalProperties::Schema(inner)) => Ok(FieldType::Map(Box::new(
                field_type(shapes, inner, direction, site)?,
            ))),
            Some(AdditionalProperties::Boolean(true)) => {
                Ok(FieldType::Map(Box::new(FieldType::Any)))
            }
            _ if !schema.properties.is_empty() => Err(GenerationError::Schema(format!(
                "{site}: anonymous object schemas are unsupported; promote to a named component"
            ))),
            _ => Ok(FieldType::Any),
        },
        Some(other) => Err(GenerationError::Schema(format!(
            "{site}: unsupported schema type '{other}'"
        ))),
    }
}

fn register_shape(
    shapes: &mut BTreeMap<String, TypeShape>,
    schema: &Schema,
    direction: Direction,
    site: &str,
) -> Result<(), GenerationError> {
    let name = schema
        .ref_name
        .clone()
        .expect("register_shape called without a component name");

    if let Some(existing) = shapes.get_mut(&name) {
        if direction == Direction::Request {
            existing.request_direction = true;
        }
        return Ok(());
    }

    // Placeholder first so self-referential schemas terminate.
    shapes.insert(
        name.clone(),
        TypeShape {
            name: name.clone(),
            doc: None,
            fields: Vec::new(),
            request_direction: direction == Direction::Request,
        },
    );

    let fields = schema
        .properties
        .iter()
        .map(|(wire_name, field_schema)| {
            Ok(FieldDef {
                wire_name: wire_name.clone(),
                ty: field_type(shapes, field_schema, direction, site)?,
                optional: !schema.is_required(wire_name) || field_schema.nullable,
                doc: field_schema.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    let entry = shapes.get_mut(&name).expect("placeholder shape present");
    entry.doc = schema.description.clone();
    entry.fields = fields;
    Ok(())
}
