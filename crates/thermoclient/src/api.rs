//! IR Thermal Monitoring API bindings (API version 1.0).
//!
//! @generated by thermogen from schemas/thermal.openapi.json.
//! Do not edit by hand; run `thermogen generate` to refresh.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ThermalClient;
use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmAcknowledgeRequest {
    pub alarm_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmEventResponse {
    pub acknowledged: bool,
    pub acknowledged_at: Option<String>,
    pub alarm_id: i64,
    pub event_type: String,
    pub temperature: f64,
    pub timestamp: String,
    pub zone_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResponse {
    pub anomalies: Vec<Value>,
    pub zone_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFrameResponse {
    pub event_id: i64,
    pub frame_size: i64,
    pub id: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub end_time: String,
    pub heatmap: Vec<Vec<f64>>,
    pub height: i64,
    pub start_time: String,
    pub width: i64,
    pub zone_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub config: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub config: String,
    pub created_at: String,
    pub enabled: bool,
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub end_time: String,
    pub report_type: String,
    pub start_time: String,
    pub summary: Value,
    pub zone_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub description: Option<String>,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalFrameResponse {
    pub frame: Vec<f64>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
    pub zone_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAverageResponse {
    pub average: f64,
    pub zone_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub height: i64,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub width: i64,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub color: String,
    pub enabled: bool,
    pub height: i64,
    pub id: i64,
    pub name: String,
    pub threshold: Option<f64>,
    pub width: i64,
    pub x: i64,
    pub y: i64,
}

/// Arguments for [`ThermalClient::create_alarms_acknowledge`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAlarmsAcknowledgeArgs {
    pub alarm_acknowledge_request: AlarmAcknowledgeRequest,
}

/// Arguments for [`ThermalClient::get_analytics_anomalies`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetAnalyticsAnomaliesArgs {
    pub start_time: String,
    pub end_time: String,
    pub zone_id: Option<i64>,
}

/// Arguments for [`ThermalClient::get_analytics_heatmap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetAnalyticsHeatmapArgs {
    pub start_time: String,
    pub end_time: String,
    pub zone_id: Option<i64>,
}

/// Arguments for [`ThermalClient::get_analytics_trends`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetAnalyticsTrendsArgs {
    pub start_time: String,
    pub end_time: String,
    pub zone_id: Option<i64>,
}

/// Arguments for [`ThermalClient::create_database_restore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabaseRestoreArgs {
    pub file: Vec<u8>,
    pub file_name: String,
}

/// Arguments for [`ThermalClient::get_events_frames_by_event_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetEventsFramesByEventIdArgs {
    pub event_id: i64,
}

/// Arguments for [`ThermalClient::get_events_frames_png_by_event_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetEventsFramesPngByEventIdArgs {
    pub event_id: i64,
}

/// Arguments for [`ThermalClient::get_events_frames_blobs_by_event_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetEventsFramesBlobsByEventIdArgs {
    pub event_id: i64,
}

/// Arguments for [`ThermalClient::get_frames_export`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetFramesExportArgs {
    pub event_id: Option<i64>,
    pub overlay: Option<String>,
}

/// Arguments for [`ThermalClient::create_notifications_settings`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateNotificationsSettingsArgs {
    pub notification_request: NotificationRequest,
}

/// Arguments for [`ThermalClient::update_notifications_settings_by_notification_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateNotificationsSettingsByNotificationIdArgs {
    pub notification_id: i64,
    pub notification_request: NotificationRequest,
}

/// Arguments for [`ThermalClient::delete_notifications_settings_by_notification_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteNotificationsSettingsByNotificationIdArgs {
    pub notification_id: i64,
}

/// Arguments for [`ThermalClient::get_reports`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetReportsArgs {
    pub report_type: String,
    pub start_time: String,
    pub end_time: String,
    pub zone_id: Option<i64>,
}

/// Arguments for [`ThermalClient::create_settings`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSettingsArgs {
    pub settings_request: SettingsRequest,
}

/// Arguments for [`ThermalClient::create_zones`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateZonesArgs {
    pub zone_request: ZoneRequest,
}

/// Arguments for [`ThermalClient::delete_zones_by_zone_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteZonesByZoneIdArgs {
    pub zone_id: i64,
}

/// Arguments for [`ThermalClient::get_zones_average_by_zone_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetZonesAverageByZoneIdArgs {
    pub zone_id: i64,
}

impl ThermalClient {

    /// Acknowledge Alarm (`POST /api/v1/alarms/acknowledge`).
    pub async fn create_alarms_acknowledge(&self, args: &CreateAlarmsAcknowledgeArgs) -> ApiResult<Value> {
        self.transport()
            .send_json(Method::POST, "/api/v1/alarms/acknowledge", &[], &args.alarm_acknowledge_request)
            .await
    }

    /// Get Alarm History (`GET /api/v1/alarms/history`).
    pub async fn get_alarms_history(&self) -> ApiResult<Vec<AlarmEventResponse>> {
        self.transport().get_json("/api/v1/alarms/history", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_alarms_history`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_alarms_history_cached(&self) -> ApiResult<Vec<AlarmEventResponse>> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_alarms_history", &key).await {
            return Ok(hit);
        }
        let value = self.get_alarms_history().await?;
        self.cache_store("get_alarms_history", &key, &value).await;
        Ok(value)
    }

    /// Get Anomalies (`GET /api/v1/analytics/anomalies`).
    pub async fn get_analytics_anomalies(&self, args: &GetAnalyticsAnomaliesArgs) -> ApiResult<AnomalyResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        query.push(("start_time", args.start_time.clone()));
        query.push(("end_time", args.end_time.clone()));
        if let Some(v) = &args.zone_id {
            query.push(("zone_id", v.to_string()));
        }
        self.transport().get_json("/api/v1/analytics/anomalies", &query).await
    }

    /// Cached variant of [`ThermalClient::get_analytics_anomalies`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_analytics_anomalies_cached(&self, args: &GetAnalyticsAnomaliesArgs) -> ApiResult<AnomalyResponse> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_analytics_anomalies", &key).await {
            return Ok(hit);
        }
        let value = self.get_analytics_anomalies(args).await?;
        self.cache_store("get_analytics_anomalies", &key, &value).await;
        Ok(value)
    }

    /// Get Heatmap (`GET /api/v1/analytics/heatmap`).
    pub async fn get_analytics_heatmap(&self, args: &GetAnalyticsHeatmapArgs) -> ApiResult<HeatmapResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        query.push(("start_time", args.start_time.clone()));
        query.push(("end_time", args.end_time.clone()));
        if let Some(v) = &args.zone_id {
            query.push(("zone_id", v.to_string()));
        }
        self.transport().get_json("/api/v1/analytics/heatmap", &query).await
    }

    /// Cached variant of [`ThermalClient::get_analytics_heatmap`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_analytics_heatmap_cached(&self, args: &GetAnalyticsHeatmapArgs) -> ApiResult<HeatmapResponse> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_analytics_heatmap", &key).await {
            return Ok(hit);
        }
        let value = self.get_analytics_heatmap(args).await?;
        self.cache_store("get_analytics_heatmap", &key, &value).await;
        Ok(value)
    }

    /// Get Trends (`GET /api/v1/analytics/trends`).
    pub async fn get_analytics_trends(&self, args: &GetAnalyticsTrendsArgs) -> ApiResult<TrendResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        query.push(("start_time", args.start_time.clone()));
        query.push(("end_time", args.end_time.clone()));
        if let Some(v) = &args.zone_id {
            query.push(("zone_id", v.to_string()));
        }
        self.transport().get_json("/api/v1/analytics/trends", &query).await
    }

    /// Cached variant of [`ThermalClient::get_analytics_trends`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_analytics_trends_cached(&self, args: &GetAnalyticsTrendsArgs) -> ApiResult<TrendResponse> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_analytics_trends", &key).await {
            return Ok(hit);
        }
        let value = self.get_analytics_trends(args).await?;
        self.cache_store("get_analytics_trends", &key, &value).await;
        Ok(value)
    }

    /// Backup Database (`POST /api/v1/database/backup`).
    pub async fn create_database_backup(&self) -> ApiResult<Value> {
        self.transport()
            .send_empty(Method::POST, "/api/v1/database/backup", &[])
            .await
    }

    /// Migrate Database (`POST /api/v1/database/migrate`).
    pub async fn create_database_migrate(&self) -> ApiResult<Value> {
        self.transport()
            .send_empty(Method::POST, "/api/v1/database/migrate", &[])
            .await
    }

    /// Restore Database (`POST /api/v1/database/restore`).
    pub async fn create_database_restore(&self, args: &CreateDatabaseRestoreArgs) -> ApiResult<Value> {
        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(args.file.clone())
                .file_name(args.file_name.clone()),
        );
        self.transport()
            .send_multipart(Method::POST, "/api/v1/database/restore", form)
            .await
    }

    /// Get Event Frames (`GET /api/v1/events/{eventId}/frames`).
    pub async fn get_events_frames_by_event_id(&self, args: &GetEventsFramesByEventIdArgs) -> ApiResult<Vec<EventFrameResponse>> {
        let path = format!("/api/v1/events/{}/frames", args.event_id);
        self.transport().get_json(&path, &[]).await
    }

    /// Cached variant of [`ThermalClient::get_events_frames_by_event_id`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_events_frames_by_event_id_cached(&self, args: &GetEventsFramesByEventIdArgs) -> ApiResult<Vec<EventFrameResponse>> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_events_frames_by_event_id", &key).await {
            return Ok(hit);
        }
        let value = self.get_events_frames_by_event_id(args).await?;
        self.cache_store("get_events_frames_by_event_id", &key, &value).await;
        Ok(value)
    }

    /// Download Event Frames Png (`GET /api/v1/events/{eventId}/frames.png`).
    pub async fn get_events_frames_png_by_event_id(&self, args: &GetEventsFramesPngByEventIdArgs) -> ApiResult<Vec<u8>> {
        let path = format!("/api/v1/events/{}/frames.png", args.event_id);
        self.transport().get_binary(&path, &[]).await
    }

    /// Get Event Frame Blobs (`GET /api/v1/events/{eventId}/frames/blobs`).
    pub async fn get_events_frames_blobs_by_event_id(&self, args: &GetEventsFramesBlobsByEventIdArgs) -> ApiResult<Vec<u8>> {
        let path = format!("/api/v1/events/{}/frames/blobs", args.event_id);
        self.transport().get_binary(&path, &[]).await
    }

    /// Export Frames (`GET /api/v1/frames/export`).
    pub async fn get_frames_export(&self, args: &GetFramesExportArgs) -> ApiResult<Vec<u8>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &args.event_id {
            query.push(("event_id", v.to_string()));
        }
        if let Some(v) = &args.overlay {
            query.push(("overlay", v.clone()));
        }
        self.transport().get_binary("/api/v1/frames/export", &query).await
    }

    /// Health (`GET /api/v1/health`).
    pub async fn get_health(&self) -> ApiResult<HashMap<String, String>> {
        self.transport().get_json("/api/v1/health", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_health`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_health_cached(&self) -> ApiResult<HashMap<String, String>> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_health", &key).await {
            return Ok(hit);
        }
        let value = self.get_health().await?;
        self.cache_store("get_health", &key, &value).await;
        Ok(value)
    }

    /// Get Notifications (`GET /api/v1/notifications/settings`).
    pub async fn get_notifications_settings(&self) -> ApiResult<Vec<NotificationResponse>> {
        self.transport().get_json("/api/v1/notifications/settings", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_notifications_settings`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_notifications_settings_cached(&self) -> ApiResult<Vec<NotificationResponse>> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_notifications_settings", &key).await {
            return Ok(hit);
        }
        let value = self.get_notifications_settings().await?;
        self.cache_store("get_notifications_settings", &key, &value).await;
        Ok(value)
    }

    /// Add Notification (`POST /api/v1/notifications/settings`).
    pub async fn create_notifications_settings(&self, args: &CreateNotificationsSettingsArgs) -> ApiResult<NotificationResponse> {
        self.transport()
            .send_json(Method::POST, "/api/v1/notifications/settings", &[], &args.notification_request)
            .await
    }

    /// Update Notification (`PUT /api/v1/notifications/settings/{notificationId}`).
    pub async fn update_notifications_settings_by_notification_id(&self, args: &UpdateNotificationsSettingsByNotificationIdArgs) -> ApiResult<Value> {
        let path = format!("/api/v1/notifications/settings/{}", args.notification_id);
        self.transport()
            .send_json(Method::PUT, &path, &[], &args.notification_request)
            .await
    }

    /// Delete Notification (`DELETE /api/v1/notifications/settings/{notificationId}`).
    pub async fn delete_notifications_settings_by_notification_id(&self, args: &DeleteNotificationsSettingsByNotificationIdArgs) -> ApiResult<Value> {
        let path = format!("/api/v1/notifications/settings/{}", args.notification_id);
        self.transport()
            .send_empty(Method::DELETE, &path, &[])
            .await
    }

    /// Get Report (`GET /api/v1/reports`).
    pub async fn get_reports(&self, args: &GetReportsArgs) -> ApiResult<ReportResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        query.push(("report_type", args.report_type.clone()));
        query.push(("start_time", args.start_time.clone()));
        query.push(("end_time", args.end_time.clone()));
        if let Some(v) = &args.zone_id {
            query.push(("zone_id", v.to_string()));
        }
        self.transport().get_json("/api/v1/reports", &query).await
    }

    /// Cached variant of [`ThermalClient::get_reports`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_reports_cached(&self, args: &GetReportsArgs) -> ApiResult<ReportResponse> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_reports", &key).await {
            return Ok(hit);
        }
        let value = self.get_reports(args).await?;
        self.cache_store("get_reports", &key, &value).await;
        Ok(value)
    }

    /// Get Settings (`GET /api/v1/settings`).
    pub async fn get_settings(&self) -> ApiResult<Vec<SettingsResponse>> {
        self.transport().get_json("/api/v1/settings", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_settings`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_settings_cached(&self) -> ApiResult<Vec<SettingsResponse>> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_settings", &key).await {
            return Ok(hit);
        }
        let value = self.get_settings().await?;
        self.cache_store("get_settings", &key, &value).await;
        Ok(value)
    }

    /// Set Setting (`POST /api/v1/settings`).
    pub async fn create_settings(&self, args: &CreateSettingsArgs) -> ApiResult<SettingsResponse> {
        self.transport()
            .send_json(Method::POST, "/api/v1/settings", &[], &args.settings_request)
            .await
    }

    /// Get Real Time Frame (`GET /api/v1/thermal/real-time`).
    pub async fn get_thermal_real_time(&self) -> ApiResult<ThermalFrameResponse> {
        self.transport().get_json("/api/v1/thermal/real-time", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_thermal_real_time`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_thermal_real_time_cached(&self) -> ApiResult<ThermalFrameResponse> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_thermal_real_time", &key).await {
            return Ok(hit);
        }
        let value = self.get_thermal_real_time().await?;
        self.cache_store("get_thermal_real_time", &key, &value).await;
        Ok(value)
    }

    /// Get Zones (`GET /api/v1/zones`).
    pub async fn get_zones(&self) -> ApiResult<Vec<ZoneResponse>> {
        self.transport().get_json("/api/v1/zones", &[]).await
    }

    /// Cached variant of [`ThermalClient::get_zones`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_zones_cached(&self) -> ApiResult<Vec<ZoneResponse>> {
        let key = Value::Null;
        if let Some(hit) = self.cache_lookup("get_zones", &key).await {
            return Ok(hit);
        }
        let value = self.get_zones().await?;
        self.cache_store("get_zones", &key, &value).await;
        Ok(value)
    }

    /// Add Zone (`POST /api/v1/zones`).
    pub async fn create_zones(&self, args: &CreateZonesArgs) -> ApiResult<ZoneResponse> {
        self.transport()
            .send_json(Method::POST, "/api/v1/zones", &[], &args.zone_request)
            .await
    }

    /// Delete Zone (`DELETE /api/v1/zones/{zoneId}`).
    pub async fn delete_zones_by_zone_id(&self, args: &DeleteZonesByZoneIdArgs) -> ApiResult<HashMap<String, String>> {
        let path = format!("/api/v1/zones/{}", args.zone_id);
        self.transport()
            .send_empty(Method::DELETE, &path, &[])
            .await
    }

    /// Get Zone Average (`GET /api/v1/zones/{zoneId}/average`).
    pub async fn get_zones_average_by_zone_id(&self, args: &GetZonesAverageByZoneIdArgs) -> ApiResult<ZoneAverageResponse> {
        let path = format!("/api/v1/zones/{}/average", args.zone_id);
        self.transport().get_json(&path, &[]).await
    }

    /// Cached variant of [`ThermalClient::get_zones_average_by_zone_id`]. Identical
    /// argument sets are served from the response cache when one is attached;
    /// cache failures fall back to a live request.
    pub async fn get_zones_average_by_zone_id_cached(&self, args: &GetZonesAverageByZoneIdArgs) -> ApiResult<ZoneAverageResponse> {
        let key = serde_json::to_value(args).unwrap_or(Value::Null);
        if let Some(hit) = self.cache_lookup("get_zones_average_by_zone_id", &key).await {
            return Ok(hit);
        }
        let value = self.get_zones_average_by_zone_id(args).await?;
        self.cache_store("get_zones_average_by_zone_id", &key, &value).await;
        Ok(value)
    }
}
