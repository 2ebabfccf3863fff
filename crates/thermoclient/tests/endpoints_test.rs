//! End-to-end tests for the generated endpoint accessors against a mock
//! backend.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param,
    query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use thermoclient::api::{
    CreateDatabaseRestoreArgs, CreateZonesArgs, DeleteZonesByZoneIdArgs, GetAnalyticsHeatmapArgs,
    GetFramesExportArgs, GetZonesAverageByZoneIdArgs, ZoneRequest,
};
use thermoclient::{ApiError, ThermalClient, TransportFailure};

fn client_for(server: &MockServer) -> ThermalClient {
    ThermalClient::new(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn zone_creation_body_contains_exactly_the_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .and(body_json(json!({
            "id": 1,
            "x": 0,
            "y": 0,
            "width": 10,
            "height": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "x": 0,
            "y": 0,
            "width": 10,
            "height": 10,
            "name": "Zone (0,0)",
            "color": "#FF0000",
            "enabled": true,
            "threshold": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zone = client_for(&server)
        .create_zones(&CreateZonesArgs {
            zone_request: ZoneRequest {
                color: None,
                enabled: None,
                height: 10,
                id: 1,
                name: None,
                threshold: None,
                width: 10,
                x: 0,
                y: 0,
            },
        })
        .await
        .unwrap();

    assert_eq!(zone.name, "Zone (0,0)");
    assert_eq!(zone.threshold, None);
}

#[tokio::test]
async fn zone_average_substitutes_the_path_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/zones/7/average"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"zone_id": 7, "average": 36.5})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let average = client_for(&server)
        .get_zones_average_by_zone_id(&GetZonesAverageByZoneIdArgs { zone_id: 7 })
        .await
        .unwrap();

    assert_eq!(average.zone_id, 7);
    assert_eq!(average.average, 36.5);
}

#[tokio::test]
async fn heatmap_omits_absent_zone_id_from_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/analytics/heatmap"))
        .and(query_param("start_time", "2024-01-01T00:00:00"))
        .and(query_param("end_time", "2024-01-02T00:00:00"))
        .and(query_param_is_missing("zone_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "heatmap": [[20.0, 21.5], [19.0, 22.0]],
            "width": 2,
            "height": 2,
            "start_time": "2024-01-01T00:00:00",
            "end_time": "2024-01-02T00:00:00",
            "zone_id": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let heatmap = client_for(&server)
        .get_analytics_heatmap(&GetAnalyticsHeatmapArgs {
            start_time: "2024-01-01T00:00:00".to_string(),
            end_time: "2024-01-02T00:00:00".to_string(),
            zone_id: None,
        })
        .await
        .unwrap();

    assert_eq!(heatmap.width, 2);
    assert_eq!(heatmap.zone_id, None);
}

#[tokio::test]
async fn present_optional_query_parameters_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/frames/export"))
        .and(query_param("event_id", "12"))
        .and(query_param("overlay", "zones"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .get_frames_export(&GetFramesExportArgs {
            event_id: Some(12),
            overlay: Some("zones".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn validation_failure_discriminates_with_field_locations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                { "loc": ["body", "width"], "msg": "field required", "type": "value_error.missing" }
            ]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_zones(&CreateZonesArgs {
            zone_request: ZoneRequest {
                color: None,
                enabled: None,
                height: 10,
                id: 1,
                name: None,
                threshold: None,
                width: 10,
                x: 0,
                y: 0,
            },
        })
        .await;

    match result {
        Err(ApiError::Validation(errors)) => {
            assert!(!errors.detail.is_empty());
            assert_eq!(errors.detail[0].msg, "field required");
            assert_eq!(errors.detail[0].kind, "value_error.missing");
            assert_eq!(errors.detail[0].loc.len(), 2);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_5xx_discriminates_as_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    match client_for(&server).get_zones().await {
        Err(ApiError::Transport(TransportFailure::Http { status, .. })) => {
            assert_eq!(status, 503);
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn notification_type_field_roundtrips_through_rename() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "ops-email",
            "type": "email",
            "config": "{\"to\": \"ops@example.com\"}",
            "enabled": true,
            "created_at": "2024-01-01T00:00:00"
        }])))
        .mount(&server)
        .await;

    let notifications = client_for(&server).get_notifications_settings().await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].type_, "email");
}

#[tokio::test]
async fn database_restore_uploads_a_multipart_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/database/restore"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("backup.sqlite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "restored"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_database_restore(&CreateDatabaseRestoreArgs {
            file: b"SQLite format 3\0".to_vec(),
            file_name: "backup.sqlite".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result["status"], json!("restored"));
}

#[tokio::test]
async fn delete_zone_returns_the_status_map() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/zones/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "deleted"})))
        .mount(&server)
        .await;

    let status = client_for(&server)
        .delete_zones_by_zone_id(&DeleteZonesByZoneIdArgs { zone_id: 3 })
        .await
        .unwrap();

    assert_eq!(status.get("status").map(String::as_str), Some("deleted"));
}

#[tokio::test]
async fn event_frames_png_passes_binary_through() {
    let server = MockServer::start().await;
    let png_header = vec![0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    Mock::given(method("GET"))
        .and(path("/api/v1/events/5/frames.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(png_header.clone())
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .get_events_frames_png_by_event_id(&thermoclient::api::GetEventsFramesPngByEventIdArgs {
            event_id: 5,
        })
        .await
        .unwrap();

    assert_eq!(bytes, png_header);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (healths, zones) = futures::join!(
        futures::future::join_all((0..8).map(|_| client.get_health())),
        futures::future::join_all((0..8).map(|_| client.get_zones())),
    );

    for health in healths {
        assert_eq!(
            health.unwrap().get("status").map(String::as_str),
            Some("ok")
        );
    }
    for zone_list in zones {
        assert!(zone_list.unwrap().is_empty());
    }
}
