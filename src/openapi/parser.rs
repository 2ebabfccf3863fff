//! OpenAPI document parser.
//!
//! Lowers a raw JSON document into [`OpenApiContext`], resolving `$ref`
//! pointers, merging path-level and method-level parameters, and collapsing
//! `anyOf: [T, null]` unions (the shape FastAPI emits for optional fields)
//! into a nullable `T`.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::generation::GenerationError;
use crate::openapi::types::{
    AdditionalProperties, ApiInfo, HttpMethod, OpenApiContext, Operation, Parameter,
    ParameterLocation, RequestBody, Response, Schema, Server,
};

/// Parser over the raw JSON value of an OpenAPI document.
pub struct OpenApiParser {
    json: JsonValue,
}

impl OpenApiParser {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the complete document.
    pub fn parse(&self) -> Result<OpenApiContext, GenerationError> {
        let version = self
            .json
            .get("openapi")
            .or_else(|| self.json.get("swagger"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| GenerationError::Schema("missing OpenAPI version".into()))?
            .to_string();

        let info = ApiInfo {
            title: self
                .json
                .pointer("/info/title")
                .and_then(|v| v.as_str())
                .ok_or_else(|| GenerationError::Schema("missing info.title".into()))?
                .to_string(),
            version: self
                .json
                .pointer("/info/version")
                .and_then(|v| v.as_str())
                .ok_or_else(|| GenerationError::Schema("missing info.version".into()))?
                .to_string(),
            description: self
                .json
                .pointer("/info/description")
                .and_then(|v| v.as_str())
                .map(String::from),
        };

        let servers = self
            .json
            .get("servers")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|s| {
                        Some(Server {
                            url: s.get("url").and_then(|v| v.as_str())?.to_string(),
                            description: s
                                .get("description")
                                .and_then(|v| v.as_str())
                                .map(String::from),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let operations = self.parse_operations()?;
        tracing::debug!(count = operations.len(), "parsed operations");

        Ok(OpenApiContext {
            version,
            info,
            servers,
            operations,
        })
    }

    /// Walk `paths` and build one [`Operation`] per path + method pair.
    ///
    /// `serde_json` maps iterate in key order, so the resulting operation
    /// order is a pure function of the document.
    fn parse_operations(&self) -> Result<Vec<Operation>, GenerationError> {
        let paths = self
            .json
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| GenerationError::Schema("missing 'paths' object".into()))?;

        paths
            .iter()
            .flat_map(|(path, path_item)| {
                HttpMethod::all()
                    .iter()
                    .filter_map(|method| {
                        path_item
                            .get(method.key())
                            .and_then(JsonValue::as_object)
                            .map(|method_item| (path.as_str(), *method, path_item, method_item))
                    })
                    .collect::<Vec<_>>()
            })
            .map(|(path, method, path_item, method_item)| {
                self.build_operation(path, method, path_item, method_item)
            })
            .collect()
    }

    fn build_operation(
        &self,
        path: &str,
        method: HttpMethod,
        path_item: &JsonValue,
        method_item: &serde_json::Map<String, JsonValue>,
    ) -> Result<Operation, GenerationError> {
        let summary = method_item
            .get("summary")
            .and_then(JsonValue::as_str)
            .map(String::from);
        let description = method_item
            .get("description")
            .and_then(JsonValue::as_str)
            .map(String::from);

        // Path-level parameters apply to every method beneath the path.
        let mut parameters = self.extract_parameters(path_item)?;
        parameters.extend(self.extract_parameters(&JsonValue::Object(method_item.clone()))?);

        let request_body = method_item
            .get("requestBody")
            .map(|rb| self.parse_request_body(rb))
            .transpose()?;

        let responses = self.extract_responses(method_item)?;

        Ok(Operation {
            path: path.to_string(),
            method,
            summary,
            description,
            parameters,
            request_body,
            responses,
        })
    }

    fn extract_parameters(&self, item: &JsonValue) -> Result<Vec<Parameter>, GenerationError> {
        item.get("parameters")
            .and_then(JsonValue::as_array)
            .map(|arr| {
                arr.iter()
                    .map(|param| {
                        if let Some(ref_str) = param.get("$ref").and_then(JsonValue::as_str) {
                            let resolved = self.resolve_ref(ref_str)?;
                            self.parse_parameter(&resolved)
                        } else {
                            self.parse_parameter(param)
                        }
                    })
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn parse_parameter(&self, param: &JsonValue) -> Result<Parameter, GenerationError> {
        let name = param
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| GenerationError::Schema("parameter missing name".into()))?
            .to_string();

        let location = match param.get("in").and_then(JsonValue::as_str) {
            Some("path") => ParameterLocation::Path,
            Some("query") => ParameterLocation::Query,
            Some("header") => ParameterLocation::Header,
            Some("cookie") => ParameterLocation::Cookie,
            other => {
                return Err(GenerationError::Schema(format!(
                    "parameter '{name}' has invalid location {other:?}"
                )));
            }
        };

        let required = param
            .get("required")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        let schema = self.parse_schema(param.get("schema").unwrap_or(&JsonValue::Null))?;
        let description = param
            .get("description")
            .and_then(JsonValue::as_str)
            .map(String::from);

        Ok(Parameter {
            name,
            location,
            required,
            schema,
            description,
        })
    }

    fn extract_responses(
        &self,
        method_item: &serde_json::Map<String, JsonValue>,
    ) -> Result<Vec<Response>, GenerationError> {
        method_item
            .get("responses")
            .and_then(JsonValue::as_object)
            .map(|map| {
                map.iter()
                    .map(|(status, response)| self.parse_response(status, response))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn parse_response(
        &self,
        status_code: &str,
        response: &JsonValue,
    ) -> Result<Response, GenerationError> {
        let resolved = if let Some(ref_str) = response.get("$ref").and_then(JsonValue::as_str) {
            self.resolve_ref(ref_str)?
        } else {
            response.clone()
        };

        Ok(Response {
            status_code: status_code.to_string(),
            description: resolved
                .get("description")
                .and_then(JsonValue::as_str)
                .unwrap_or("")
                .to_string(),
            content: self.parse_content(resolved.get("content"))?,
        })
    }

    fn parse_request_body(&self, body: &JsonValue) -> Result<RequestBody, GenerationError> {
        let resolved = if let Some(ref_str) = body.get("$ref").and_then(JsonValue::as_str) {
            self.resolve_ref(ref_str)?
        } else {
            body.clone()
        };

        Ok(RequestBody {
            required: resolved
                .get("required")
                .and_then(JsonValue::as_bool)
                .unwrap_or(false),
            content: self.parse_content(resolved.get("content"))?,
            description: resolved
                .get("description")
                .and_then(JsonValue::as_str)
                .map(String::from),
        })
    }

    /// Parse a `content` map (media type → `{ schema }`) into resolved schemas.
    fn parse_content(
        &self,
        content: Option<&JsonValue>,
    ) -> Result<BTreeMap<String, Schema>, GenerationError> {
        let Some(obj) = content.and_then(JsonValue::as_object) else {
            return Ok(BTreeMap::new());
        };

        obj.iter()
            .map(|(media_type, media)| {
                let schema = media
                    .get("schema")
                    .map(|s| self.parse_schema(s))
                    .transpose()?
                    .unwrap_or_default();
                Ok((media_type.clone(), schema))
            })
            .collect()
    }

    fn parse_schema(&self, schema: &JsonValue) -> Result<Schema, GenerationError> {
        // A $ref node resolves to its target, remembering the component name.
        if let Some(ref_str) = schema.get("$ref").and_then(JsonValue::as_str) {
            let resolved = self.resolve_ref(ref_str)?;
            let mut parsed = self.parse_schema(&resolved)?;
            parsed.ref_name = ref_str.rsplit('/').next().map(String::from);
            return Ok(parsed);
        }

        // FastAPI encodes `Optional[T]` as `anyOf: [T, {type: null}]`.
        if let Some(variants) = schema.get("anyOf").and_then(JsonValue::as_array) {
            return self.collapse_nullable_union(schema, variants);
        }

        let schema_type = schema
            .get("type")
            .and_then(JsonValue::as_str)
            .map(String::from);
        let format = schema
            .get("format")
            .and_then(JsonValue::as_str)
            .map(String::from);
        let title = schema
            .get("title")
            .and_then(JsonValue::as_str)
            .map(String::from);
        let description = schema
            .get("description")
            .and_then(JsonValue::as_str)
            .map(String::from);

        let items = schema
            .get("items")
            .map(|v| self.parse_schema(v))
            .transpose()?
            .map(Box::new);

        let properties = schema
            .get("properties")
            .and_then(JsonValue::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), self.parse_schema(v)?)))
                    .collect::<Result<BTreeMap<_, _>, GenerationError>>()
            })
            .transpose()?
            .unwrap_or_default();

        let required = schema
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(JsonValue::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let additional_properties = match schema.get("additionalProperties") {
            Some(JsonValue::Bool(b)) => Some(AdditionalProperties::Boolean(*b)),
            Some(v) => Some(AdditionalProperties::Schema(Box::new(self.parse_schema(v)?))),
            None => None,
        };

        let nullable = schema
            .get("nullable")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);

        Ok(Schema {
            ref_name: None,
            schema_type,
            format,
            title,
            description,
            items,
            properties,
            required,
            additional_properties,
            nullable,
            default: schema.get("default").cloned(),
        })
    }

    /// Collapse `anyOf: [T, {type: null}]` into a nullable `T`. Any other
    /// union shape is unsupported.
    fn collapse_nullable_union(
        &self,
        schema: &JsonValue,
        variants: &[JsonValue],
    ) -> Result<Schema, GenerationError> {
        let non_null: Vec<&JsonValue> = variants
            .iter()
            .filter(|v| v.get("type").and_then(JsonValue::as_str) != Some("null"))
            .collect();

        if non_null.len() != 1 || non_null.len() == variants.len() {
            return Err(GenerationError::Schema(format!(
                "unsupported anyOf union: {schema}"
            )));
        }

        let mut parsed = self.parse_schema(non_null[0])?;
        parsed.nullable = true;
        if parsed.title.is_none() {
            parsed.title = schema
                .get("title")
                .and_then(JsonValue::as_str)
                .map(String::from);
        }
        Ok(parsed)
    }

    /// Resolve an internal JSON-pointer reference such as
    /// `#/components/schemas/ZoneResponse`.
    fn resolve_ref(&self, ref_str: &str) -> Result<JsonValue, GenerationError> {
        if let Some(pointer) = ref_str.strip_prefix('#') {
            self.json.pointer(pointer).cloned().ok_or_else(|| {
                GenerationError::Schema(format!("unable to resolve reference: {ref_str}"))
            })
        } else {
            Err(GenerationError::Schema(format!(
                "external references not supported: {ref_str}"
            )))
        }
    }
}
