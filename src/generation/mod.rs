//! Client-module generation pipeline.
//!
//! `load → parse → catalog → context → render` — each stage a pure function
//! of its input, so a given schema and configuration always produce the same
//! module text.

pub mod catalog;
pub mod context;
pub mod emitter;
pub mod errors;
pub mod naming;
pub mod sanitizers;

pub use catalog::{build_catalog, EndpointCatalog};
pub use context::build_context;
pub use emitter::render_module;
pub use errors::GenerationError;

use crate::openapi::OpenApiContext;

/// Generation configuration.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Label recorded in the generated module header; typically the schema
    /// path or URL the module was generated from.
    pub schema_source: String,
    /// Path prefix elided from operation names (still present in request
    /// paths).
    pub strip_prefix: String,
    /// Name of the client type the generated accessors attach to.
    pub client_ref: String,
    /// Whether to emit `*_cached` accessor variants for query endpoints.
    pub cache_accessors: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            schema_source: String::new(),
            strip_prefix: "/api/v1".to_string(),
            client_ref: "ThermalClient".to_string(),
            cache_accessors: true,
        }
    }
}

/// Run the full pipeline from a parsed schema to module text.
pub fn generate_module(
    spec: &OpenApiContext,
    config: &GenerateConfig,
) -> Result<String, GenerationError> {
    let catalog = build_catalog(spec, config)?;
    tracing::info!(
        endpoints = catalog.endpoints.len(),
        shapes = catalog.shapes.len(),
        "generating client module"
    );
    let context = build_context(&catalog, config)?;
    render_module(&context)
}
