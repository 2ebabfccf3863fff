//! End-to-end generation tests over the canonical thermal-monitoring schema.

use serde_json::{Value, json};

use thermogen::generation::{GenerateConfig, build_catalog, generate_module};
use thermogen::openapi::{OpenApiParser, load_schema};
use thermogen::output::{check_module, write_module};

const SCHEMA: &str = include_str!("../schemas/thermal.openapi.json");

fn parse_schema() -> thermogen::openapi::OpenApiContext {
    let value: Value = serde_json::from_str(SCHEMA).unwrap();
    OpenApiParser::new(value).parse().unwrap()
}

fn config() -> GenerateConfig {
    GenerateConfig {
        schema_source: "schemas/thermal.openapi.json".to_string(),
        ..GenerateConfig::default()
    }
}

#[test]
fn catalog_covers_every_backend_operation() {
    let catalog = build_catalog(&parse_schema(), &config()).unwrap();

    let names: Vec<&str> = catalog.endpoints.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "create_alarms_acknowledge",
            "get_alarms_history",
            "get_analytics_anomalies",
            "get_analytics_heatmap",
            "get_analytics_trends",
            "create_database_backup",
            "create_database_migrate",
            "create_database_restore",
            "get_events_frames_by_event_id",
            "get_events_frames_png_by_event_id",
            "get_events_frames_blobs_by_event_id",
            "get_frames_export",
            "get_health",
            "get_notifications_settings",
            "create_notifications_settings",
            "update_notifications_settings_by_notification_id",
            "delete_notifications_settings_by_notification_id",
            "get_reports",
            "get_settings",
            "create_settings",
            "get_thermal_real_time",
            "get_zones",
            "create_zones",
            "delete_zones_by_zone_id",
            "get_zones_average_by_zone_id",
        ]
    );

    // The shared validation-error shapes stay out of the emitted set.
    let shapes: Vec<&str> = catalog.shapes.iter().map(|s| s.name.as_str()).collect();
    assert!(!shapes.contains(&"ValidationError"));
    assert!(!shapes.contains(&"HTTPValidationError"));
    assert!(shapes.contains(&"ZoneRequest"));
    assert!(shapes.contains(&"HeatmapResponse"));
    assert_eq!(shapes.len(), 15);
}

#[test]
fn generation_is_deterministic() {
    let spec = parse_schema();
    let first = generate_module(&spec, &config()).unwrap();
    let second = generate_module(&spec, &config()).unwrap();
    assert_eq!(first, second);

    // A separately parsed document renders the same bytes too.
    let third = generate_module(&parse_schema(), &config()).unwrap();
    assert_eq!(first, third);
}

#[test]
fn committed_module_is_up_to_date() {
    let module = generate_module(&parse_schema(), &config()).unwrap();
    assert_eq!(
        module,
        include_str!("../crates/thermoclient/src/api.rs"),
        "crates/thermoclient/src/api.rs has drifted; re-run `thermogen generate`"
    );
}

#[test]
fn module_binds_paths_queries_and_bodies() {
    let module = generate_module(&parse_schema(), &config()).unwrap();

    // Path substitution comes from required argument fields.
    assert!(module.contains(
        "let path = format!(\"/api/v1/zones/{}/average\", args.zone_id);"
    ));

    // Optional query parameters are pushed only when present.
    assert!(module.contains("if let Some(v) = &args.zone_id {"));
    assert!(module.contains("query.push((\"zone_id\", v.to_string()));"));
    assert!(module.contains("query.push((\"start_time\", args.start_time.clone()));"));

    // Optional request fields vanish from serialized bodies.
    assert!(module.contains("#[serde(skip_serializing_if = \"Option::is_none\")]"));

    // Untyped map responses and binary endpoints keep their shapes.
    assert!(module.contains("pub async fn get_health(&self) -> ApiResult<HashMap<String, String>> {"));
    assert!(module.contains(
        "pub async fn get_frames_export(&self, args: &GetFramesExportArgs) -> ApiResult<Vec<u8>> {"
    ));

    // The multipart restore uploads a named file part.
    assert!(module.contains("reqwest::multipart::Part::bytes(args.file.clone())"));

    // Reserved wire names are renamed, not dropped.
    assert!(module.contains("#[serde(rename = \"type\")]"));
    assert!(module.contains("pub type_: String,"));
}

#[test]
fn cached_accessors_follow_the_hook_flag() {
    let spec = parse_schema();

    let with_cache = generate_module(&spec, &config()).unwrap();
    assert!(with_cache.contains("pub async fn get_zones_cached("));
    // Mutations and binary endpoints never get cached variants.
    assert!(!with_cache.contains("create_zones_cached"));
    assert!(!with_cache.contains("get_frames_export_cached"));

    let without_cache = generate_module(
        &spec,
        &GenerateConfig {
            cache_accessors: false,
            ..config()
        },
    )
    .unwrap();
    assert!(!without_cache.contains("_cached("));
}

#[test]
fn appending_an_operation_keeps_existing_names() {
    let spec = parse_schema();
    let before = build_catalog(&spec, &config()).unwrap();

    let mut document: Value = serde_json::from_str(SCHEMA).unwrap();
    document["paths"]["/api/v1/calibration"] = json!({
        "get": {
            "summary": "Get Calibration",
            "responses": {
                "200": {
                    "description": "Successful Response",
                    "content": {
                        "application/json": {
                            "schema": { "type": "object", "additionalProperties": { "type": "string" } }
                        }
                    }
                }
            }
        }
    });
    let extended = OpenApiParser::new(document).parse().unwrap();
    let after = build_catalog(&extended, &config()).unwrap();

    assert_eq!(after.endpoints.len(), before.endpoints.len() + 1);
    let after_names: std::collections::BTreeSet<&str> =
        after.endpoints.iter().map(|e| e.name.as_str()).collect();
    for endpoint in &before.endpoints {
        assert!(
            after_names.contains(endpoint.name.as_str()),
            "operation '{}' was renamed by an unrelated addition",
            endpoint.name
        );
    }
}

#[tokio::test]
async fn generate_write_check_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("thermal.openapi.json");
    tokio::fs::write(&schema_path, SCHEMA).await.unwrap();

    let spec = load_schema(schema_path.to_str().unwrap()).await.unwrap();
    let module = generate_module(&spec, &config()).unwrap();

    let out = dir.path().join("api.rs");
    write_module(&out, &module).await.unwrap();
    check_module(&out, &module).await.unwrap();

    // Any drift from the rendered text fails the check.
    tokio::fs::write(&out, format!("{module}\n// local edit\n"))
        .await
        .unwrap();
    assert!(check_module(&out, &module).await.is_err());
}
