//! Schema document loading.
//!
//! A schema source is either a filesystem path or an HTTP(S) URL; the
//! document itself may be JSON or YAML. Both loaders produce the raw JSON
//! value and hand it to [`OpenApiParser`](crate::openapi::OpenApiParser).

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;

use crate::generation::GenerationError;
use crate::openapi::parser::OpenApiParser;
use crate::openapi::types::OpenApiContext;

/// A source a schema document can be read from.
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<OpenApiContext, GenerationError>;
}

/// Load a schema from a path or URL, picking the right loader.
pub async fn load_schema(source: &str) -> Result<OpenApiContext, GenerationError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        HttpSchemaLoader::new().load(source).await
    } else {
        FileSchemaLoader.load(source).await
    }
}

/// Loads schema documents from the filesystem.
pub struct FileSchemaLoader;

#[async_trait]
impl SchemaLoader for FileSchemaLoader {
    async fn load(&self, source: &str) -> Result<OpenApiContext, GenerationError> {
        let path = Path::new(source);
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            GenerationError::Load(format!("failed to read schema {}: {e}", path.display()))
        })?;

        let value = parse_document(&content, source)?;
        OpenApiParser::new(value).parse()
    }
}

/// Loads schema documents over HTTP(S).
pub struct HttpSchemaLoader {
    client: Client,
}

impl HttpSchemaLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaLoader for HttpSchemaLoader {
    async fn load(&self, source: &str) -> Result<OpenApiContext, GenerationError> {
        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| GenerationError::Load(format!("failed to fetch {source}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Load(format!(
                "HTTP {status} when fetching {source}"
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response
            .text()
            .await
            .map_err(|e| GenerationError::Load(format!("failed to read response body: {e}")))?;

        let value = if content_type.contains("json") {
            serde_json::from_str(&content).map_err(GenerationError::Serialization)?
        } else if content_type.contains("yaml") {
            parse_yaml(&content)?
        } else {
            parse_document(&content, source)?
        };

        OpenApiParser::new(value).parse()
    }
}

/// Parse document text by extension, falling back to trying both formats.
fn parse_document(content: &str, source: &str) -> Result<JsonValue, GenerationError> {
    if source.ends_with(".json") {
        serde_json::from_str(content).map_err(GenerationError::Serialization)
    } else if source.ends_with(".yaml") || source.ends_with(".yml") {
        parse_yaml(content)
    } else {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| GenerationError::Load(format!("failed to parse schema document: {e}")))
    }
}

fn parse_yaml(content: &str) -> Result<JsonValue, GenerationError> {
    serde_yaml::from_str(content)
        .map_err(|e| GenerationError::Load(format!("failed to parse YAML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MINIMAL_SPEC_JSON: &str = r#"{
        "openapi": "3.0.2",
        "info": { "title": "Thermal API", "version": "1.0" },
        "paths": {}
    }"#;

    #[tokio::test]
    async fn loads_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.json");
        tokio::fs::write(&file, MINIMAL_SPEC_JSON).await.unwrap();

        let spec = load_schema(file.to_str().unwrap()).await.unwrap();
        assert_eq!(spec.info.title, "Thermal API");
    }

    #[tokio::test]
    async fn loads_yaml_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.yaml");
        tokio::fs::write(
            &file,
            "openapi: 3.0.2\ninfo:\n  title: Thermal API\n  version: '1.0'\npaths: {}\n",
        )
        .await
        .unwrap();

        let spec = load_schema(file.to_str().unwrap()).await.unwrap();
        assert_eq!(spec.info.title, "Thermal API");
    }

    #[tokio::test]
    async fn loads_json_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/openapi.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(MINIMAL_SPEC_JSON)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/openapi.json", server.uri());
        let spec = load_schema(&url).await.unwrap();
        assert_eq!(spec.version, "3.0.2");
    }

    #[tokio::test]
    async fn http_error_status_is_a_load_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        match load_schema(&url).await {
            Err(GenerationError::Load(msg)) => assert!(msg.contains("404")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let result = load_schema("/nonexistent/schema.json").await;
        assert!(matches!(result, Err(GenerationError::Load(_))));
    }
}
