//! Render-context construction.
//!
//! Maps the language-neutral catalog onto Rust: type strings, identifier
//! casing, path-format expressions, and query-serialization expressions are
//! all precomputed here so the template stays declarative.

use serde::Serialize;

use crate::generation::catalog::{
    BodyDef, EndpointCatalog, EndpointDef, FieldType, ParamDef, ResponseKind, ScalarType,
    TypeShape,
};
use crate::generation::naming::{sanitize_field_name, to_proper_case};
use crate::generation::sanitizers::sanitize_doc;
use crate::generation::{GenerateConfig, GenerationError};

/// One field of an emitted shape struct.
#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    pub ident: String,
    pub wire: String,
    pub needs_rename: bool,
    pub rust_type: String,
    pub optional: bool,
}

/// One emitted shape struct.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeContext {
    pub name: String,
    pub doc: Option<String>,
    pub request_direction: bool,
    pub fields: Vec<FieldContext>,
}

/// One field of an endpoint's argument struct.
#[derive(Debug, Clone, Serialize)]
pub struct ArgFieldContext {
    pub ident: String,
    pub rust_type: String,
}

/// One query parameter with its precomputed serialization expressions.
#[derive(Debug, Clone, Serialize)]
pub struct QueryContext {
    pub wire: String,
    pub ident: String,
    pub required: bool,
    pub value_expr: String,
    pub opt_value_expr: String,
}

/// One endpoint accessor.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointContext {
    pub fn_name: String,
    pub operation: String,
    pub doc: Option<String>,
    pub method: String,
    pub path: String,
    pub kind: String,
    pub args_type: Option<String>,
    pub args: Vec<ArgFieldContext>,
    pub path_let: Option<String>,
    pub path_arg: String,
    pub has_query: bool,
    pub query: Vec<QueryContext>,
    pub query_arg: String,
    pub body_ident: Option<String>,
    pub file_field: Option<String>,
    pub response_type: String,
    pub cached: bool,
}

/// The full template context.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleContext {
    pub api_title: String,
    pub api_version: String,
    pub schema_source: String,
    pub client_ref: String,
    pub uses_hashmap: bool,
    pub uses_value: bool,
    pub shapes: Vec<ShapeContext>,
    pub endpoints: Vec<EndpointContext>,
}

/// Build the template context for a catalog.
pub fn build_context(
    catalog: &EndpointCatalog,
    config: &GenerateConfig,
) -> Result<ModuleContext, GenerationError> {
    let shapes: Vec<ShapeContext> = catalog.shapes.iter().map(shape_context).collect();
    let endpoints: Vec<EndpointContext> = catalog
        .endpoints
        .iter()
        .map(|e| endpoint_context(e, config))
        .collect();

    let uses_hashmap = catalog
        .shapes
        .iter()
        .flat_map(|s| s.fields.iter().map(|f| &f.ty))
        .chain(catalog.endpoints.iter().filter_map(|e| match &e.response {
            ResponseKind::Json(ty) => Some(ty),
            ResponseKind::Binary => None,
        }))
        .any(contains_map);
    let uses_value = catalog
        .shapes
        .iter()
        .flat_map(|s| s.fields.iter().map(|f| &f.ty))
        .chain(catalog.endpoints.iter().filter_map(|e| match &e.response {
            ResponseKind::Json(ty) => Some(ty),
            ResponseKind::Binary => None,
        }))
        .any(contains_any)
        || endpoints.iter().any(|e| e.cached);

    Ok(ModuleContext {
        api_title: catalog.api_title.clone(),
        api_version: catalog.api_version.clone(),
        schema_source: config.schema_source.clone(),
        client_ref: config.client_ref.clone(),
        uses_hashmap,
        uses_value,
        shapes,
        endpoints,
    })
}

/// The Rust rendering of a payload type.
pub fn rust_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Integer => "i64".to_string(),
        FieldType::Number => "f64".to_string(),
        FieldType::String => "String".to_string(),
        FieldType::Boolean => "bool".to_string(),
        FieldType::Any => "Value".to_string(),
        FieldType::Array(inner) => format!("Vec<{}>", rust_type(inner)),
        FieldType::Map(inner) => format!("HashMap<String, {}>", rust_type(inner)),
        FieldType::Ref(name) => name.clone(),
    }
}

fn scalar_rust_type(ty: ScalarType) -> &'static str {
    match ty {
        ScalarType::Integer => "i64",
        ScalarType::Number => "f64",
        ScalarType::String => "String",
        ScalarType::Boolean => "bool",
    }
}

fn contains_map(ty: &FieldType) -> bool {
    match ty {
        FieldType::Map(_) => true,
        FieldType::Array(inner) => contains_map(inner),
        _ => false,
    }
}

fn contains_any(ty: &FieldType) -> bool {
    match ty {
        FieldType::Any => true,
        FieldType::Array(inner) | FieldType::Map(inner) => contains_any(inner),
        _ => false,
    }
}

fn shape_context(shape: &TypeShape) -> ShapeContext {
    let fields = shape
        .fields
        .iter()
        .map(|f| {
            let ident = sanitize_field_name(&f.wire_name);
            let base = rust_type(&f.ty);
            FieldContext {
                needs_rename: ident != f.wire_name,
                wire: f.wire_name.clone(),
                rust_type: if f.optional {
                    format!("Option<{base}>")
                } else {
                    base
                },
                optional: f.optional,
                ident,
            }
        })
        .collect();

    ShapeContext {
        name: shape.name.clone(),
        doc: shape.doc.as_deref().map(sanitize_doc),
        request_direction: shape.request_direction,
        fields,
    }
}

fn endpoint_context(endpoint: &EndpointDef, config: &GenerateConfig) -> EndpointContext {
    let mut args = Vec::new();

    for param in &endpoint.path_params {
        args.push(ArgFieldContext {
            ident: sanitize_field_name(&param.name),
            rust_type: scalar_rust_type(param.ty).to_string(),
        });
    }

    let query: Vec<QueryContext> = endpoint.query_params.iter().map(query_context).collect();
    for (param, ctx) in endpoint.query_params.iter().zip(&query) {
        let base = scalar_rust_type(param.ty).to_string();
        args.push(ArgFieldContext {
            ident: ctx.ident.clone(),
            rust_type: if param.required {
                base
            } else {
                format!("Option<{base}>")
            },
        });
    }

    let mut body_ident = None;
    let mut file_field = None;
    match &endpoint.body {
        Some(BodyDef::Json { shape }) => {
            let ident = sanitize_field_name(shape);
            args.push(ArgFieldContext {
                ident: ident.clone(),
                rust_type: shape.clone(),
            });
            body_ident = Some(ident);
        }
        Some(BodyDef::Multipart { file_field: field }) => {
            let ident = sanitize_field_name(field);
            args.push(ArgFieldContext {
                ident: ident.clone(),
                rust_type: "Vec<u8>".to_string(),
            });
            args.push(ArgFieldContext {
                ident: format!("{ident}_name"),
                rust_type: "String".to_string(),
            });
            file_field = Some(field.clone());
            body_ident = Some(ident);
        }
        None => {}
    }

    let args_type = if args.is_empty() {
        None
    } else {
        Some(format!("{}Args", to_proper_case(&endpoint.name)))
    };

    let (path_let, path_arg) = if endpoint.path_params.is_empty() {
        (None, format!("\"{}\"", endpoint.path))
    } else {
        let mut fmt = endpoint.path.clone();
        let mut fmt_args = Vec::new();
        for param in &endpoint.path_params {
            fmt = fmt.replace(&format!("{{{}}}", param.name), "{}");
            fmt_args.push(format!("args.{}", sanitize_field_name(&param.name)));
        }
        (
            Some(format!(
                "let path = format!(\"{fmt}\", {});",
                fmt_args.join(", ")
            )),
            "&path".to_string(),
        )
    };

    let has_query = !query.is_empty();
    let query_arg = if has_query { "&query" } else { "&[]" }.to_string();

    let (kind, response_type) = match (&endpoint.response, &endpoint.body, endpoint.method) {
        (ResponseKind::Binary, _, _) => ("get_binary".to_string(), "Vec<u8>".to_string()),
        (ResponseKind::Json(ty), None, crate::openapi::HttpMethod::Get) => {
            ("get_json".to_string(), rust_type(ty))
        }
        (ResponseKind::Json(ty), Some(BodyDef::Json { .. }), _) => {
            ("send_json".to_string(), rust_type(ty))
        }
        (ResponseKind::Json(ty), Some(BodyDef::Multipart { .. }), _) => {
            ("send_multipart".to_string(), rust_type(ty))
        }
        (ResponseKind::Json(ty), None, _) => ("send_empty".to_string(), rust_type(ty)),
    };

    EndpointContext {
        fn_name: endpoint.name.clone(),
        operation: endpoint.name.clone(),
        doc: endpoint.doc.as_deref().map(sanitize_doc),
        method: endpoint.method.as_str().to_string(),
        path: endpoint.path.clone(),
        kind,
        args_type,
        args,
        path_let,
        path_arg,
        has_query,
        query,
        query_arg,
        body_ident,
        file_field,
        response_type,
        cached: config.cache_accessors && endpoint.is_cacheable_query(),
    }
}

fn query_context(param: &ParamDef) -> QueryContext {
    let ident = sanitize_field_name(&param.name);
    let (value_expr, opt_value_expr) = match param.ty {
        ScalarType::String => (format!("args.{ident}.clone()"), "v.clone()".to_string()),
        _ => (format!("args.{ident}.to_string()"), "v.to_string()".to_string()),
    };

    QueryContext {
        wire: param.name.clone(),
        ident,
        required: param.required,
        value_expr,
        opt_value_expr,
    }
}
