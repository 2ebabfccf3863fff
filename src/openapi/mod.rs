//! OpenAPI document loading and parsing.

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{FileSchemaLoader, HttpSchemaLoader, SchemaLoader, load_schema};
pub use parser::OpenApiParser;
pub use types::{
    AdditionalProperties, ApiInfo, HttpMethod, OpenApiContext, Operation, Parameter,
    ParameterLocation, RequestBody, Response, Schema, Server,
};
