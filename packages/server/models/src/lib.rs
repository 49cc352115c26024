#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the campus safety server.
//!
//! Responses are camelCase JSON. Request bodies also accept the snake_case
//! keys the mobile frontend sends (`location_id`, `battery_level`, ...).
//! Every request field is optional, and a field of the wrong JSON type reads
//! as absent; handlers fill gaps with fixed fallbacks instead of rejecting
//! the request.

mod lenient;

use campus_safety_location_models::HeatmapEntry;
use campus_safety_store_models::{Emergency, GeoPoint, Incident, NewIncident, Patrol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome tag carried by every mutating endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// The request was applied.
    Success,
    /// A voice command was understood but needed no action.
    Processed,
    /// A voice command raised an SOS.
    EmergencyTriggered,
    /// A voice command asks the client to change page.
    Navigation,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// Body of `POST /api/report-incident`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIncidentRequest {
    /// Location the incident happened at.
    #[serde(alias = "location_id")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub location_id: Option<String>,
    /// Any other report fields (type, description, anonymity, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<ReportIncidentRequest> for NewIncident {
    fn from(request: ReportIncidentRequest) -> Self {
        Self::new(request.location_id, request.details)
    }
}

/// Response from `POST /api/report-incident`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIncidentResponse {
    /// Always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// Id assigned to the new incident.
    pub incident_id: String,
}

// ---------------------------------------------------------------------------
// Emergencies
// ---------------------------------------------------------------------------

/// Body of `POST /api/trigger-emergency`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEmergencyRequest {
    /// Raising user. Defaults to the mock user.
    #[serde(alias = "user_id")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub user_id: Option<String>,
    /// Device position. Defaults to the campus centre.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub location: Option<GeoPoint>,
    /// Emergency kind. Defaults to `emergency_sos`.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub kind: Option<String>,
    /// What raised it. Defaults to `manual`.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub source: Option<String>,
    /// Device battery percentage, clamped to 0-100. Defaults to 85.
    #[serde(alias = "battery_level")]
    #[serde(default, deserialize_with = "lenient::battery_level")]
    pub battery_level: Option<u8>,
}

/// Response from `POST /api/trigger-emergency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEmergencyResponse {
    /// Always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// Id assigned to the new emergency.
    pub emergency_id: String,
    /// Simulated count of nearby app users alerted.
    pub nearby_devices: u8,
    /// Patrol unit suggested for dispatch, if any is available.
    pub nearest_patrol: Option<Patrol>,
    /// Human-readable arrival estimate.
    pub response_time_estimate: String,
}

/// Body of `POST /api/cancel-emergency`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelEmergencyRequest {
    /// Emergency to resolve.
    #[serde(alias = "emergency_id")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub emergency_id: Option<String>,
}

/// Generic `{status, message}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Outcome tag.
    pub status: ApiStatus,
    /// Human-readable message.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Voice
// ---------------------------------------------------------------------------

/// Body of `POST /api/voice-command`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandRequest {
    /// Transcribed command text.
    #[serde(default, deserialize_with = "lenient::string")]
    pub command: String,
}

/// Response from `POST /api/voice-command`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandResponse {
    /// Outcome tag.
    pub status: ApiStatus,
    /// Client action to take (`emergency`, `report`, a page name), or
    /// `null` when nothing matched.
    pub action: Option<String>,
    /// Id of the emergency raised, for SOS commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_id: Option<String>,
    /// Feedback to show the user.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Safety data
// ---------------------------------------------------------------------------

/// Response from `GET /api/get-safety-data`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyDataResponse {
    /// Risk heatmap, one entry per campus location.
    pub heatmap: Vec<HeatmapEntry>,
    /// Most recent incidents, oldest first.
    pub incidents: Vec<Incident>,
    /// When this snapshot was taken.
    pub last_updated: DateTime<Utc>,
}

/// Simulated GPS fix from `GET /api/get-location`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFix {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Accuracy radius in metres.
    pub accuracy: u8,
    /// When the fix was taken.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Device / profile
// ---------------------------------------------------------------------------

/// Body of `POST /api/update-battery`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatteryRequest {
    /// Battery percentage, clamped to 0-100. Defaults to 85.
    #[serde(alias = "battery_level")]
    #[serde(default, deserialize_with = "lenient::battery_level")]
    pub battery_level: Option<u8>,
}

/// Response from `POST /api/update-battery`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatteryResponse {
    /// Always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// Battery percentage now on record.
    pub battery_level: u8,
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// Body of `POST /api/admin/update-patrol`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatrolRequest {
    /// Patrol unit id.
    #[serde(alias = "patrol_id")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub patrol_id: Option<String>,
    /// New status name (`available`, `patrolling`, `responding`,
    /// `off_duty`).
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<String>,
}

/// Response from `POST /api/admin/update-patrol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatrolResponse {
    /// Always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// Patrol id from the request.
    pub patrol_id: Option<String>,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Incidents reported since startup.
    pub total_incidents: usize,
    /// Emergencies still active.
    pub active_emergencies: usize,
    /// Quoted average response time.
    pub avg_response_time: String,
    /// Quoted patrol coverage.
    pub coverage: String,
}

/// Response from `GET /api/admin/overview`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    /// Emergencies still active.
    pub active_emergencies: Vec<Emergency>,
    /// Most recent incidents, oldest first.
    pub recent_incidents: Vec<Incident>,
    /// All patrol units.
    pub patrols: Vec<Patrol>,
    /// Headline numbers.
    pub stats: AdminStats,
}

// ---------------------------------------------------------------------------
// Safe walk
// ---------------------------------------------------------------------------

/// Body of `POST /api/start-safewalk`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSafeWalkRequest {
    /// Walking user. Defaults to the mock user.
    #[serde(alias = "user_id")]
    #[serde(default, deserialize_with = "lenient::optional")]
    pub user_id: Option<String>,
    /// Where the walk starts (place name or coordinates).
    #[serde(alias = "start_location")]
    pub start_location: Option<Value>,
    /// Where the walk ends (place name or coordinates).
    #[serde(alias = "end_location")]
    pub end_location: Option<Value>,
}

/// State of a safe walk session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeWalkStatus {
    /// In progress.
    Active,
}

/// A safe walk session. Sessions are not stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeWalkSession {
    /// Session id, `SW_` followed by four digits.
    pub safewalk_id: String,
    /// Walking user.
    pub user_id: String,
    /// Where the walk starts.
    pub start_location: Option<Value>,
    /// Where the walk ends.
    pub end_location: Option<Value>,
    /// When the walk started.
    pub start_time: DateTime<Utc>,
    /// Session state.
    pub status: SafeWalkStatus,
}

/// Response from `POST /api/start-safewalk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSafeWalkResponse {
    /// Always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// The new session.
    pub safewalk_data: SafeWalkSession,
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/shop/products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    /// Category name to filter by (`wearables`, `defense`, `apparel`).
    pub category: Option<String>,
}
