#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record types held by the campus safety store.
//!
//! Incidents and emergencies are append-only logs whose only mutable field
//! is their status. Patrols, the mock user profile and the shop catalog are
//! static seed data with a couple of in-place updates (patrol status,
//! battery level).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, Display, EnumString};

/// Battery level assumed when a client doesn't report one.
pub const DEFAULT_BATTERY_LEVEL: u8 = 85;

/// Emergency type for a manually triggered SOS.
pub const EMERGENCY_TYPE_SOS: &str = "emergency_sos";
/// Emergency type for an SOS raised by a voice command.
pub const EMERGENCY_TYPE_VOICE: &str = "voice_emergency";
/// Emergency source for the SOS button.
pub const EMERGENCY_SOURCE_MANUAL: &str = "manual";
/// Emergency source for voice commands.
pub const EMERGENCY_SOURCE_VOICE: &str = "voice";

/// Report body keys that the store assigns itself and never takes from the
/// client.
pub const RESERVED_INCIDENT_KEYS: &[&str] =
    &["id", "timestamp", "status", "locationId", "location_id"];

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl GeoPoint {
    /// Centre of the demo campus, used when a client sends no location.
    pub const CAMPUS_CENTER: Self = Self {
        lat: 28.6129,
        lng: 77.2295,
    };

    /// Creates a point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// Lifecycle of a reported incident.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IncidentStatus {
    /// Newly reported, not yet triaged.
    Reported,
}

/// A reported safety incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// `INC` followed by a zero-padded sequence number.
    pub id: String,
    /// Location the incident was reported at, if any. Not validated.
    pub location_id: Option<String>,
    /// When the incident was recorded.
    pub timestamp: DateTime<Utc>,
    /// Current status.
    pub status: IncidentStatus,
    /// Remaining report fields, kept verbatim.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// An incident report before the store stamps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewIncident {
    /// Location the incident was reported at, if any.
    pub location_id: Option<String>,
    /// Free-form report fields.
    pub details: Map<String, Value>,
}

impl NewIncident {
    /// Creates a report, dropping any [`RESERVED_INCIDENT_KEYS`] from
    /// `details`.
    #[must_use]
    pub fn new(location_id: Option<String>, mut details: Map<String, Value>) -> Self {
        for key in RESERVED_INCIDENT_KEYS {
            details.remove(*key);
        }
        Self {
            location_id,
            details,
        }
    }
}

// ---------------------------------------------------------------------------
// Emergencies
// ---------------------------------------------------------------------------

/// Lifecycle of an SOS emergency.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmergencyStatus {
    /// Raised and awaiting response.
    Active,
    /// Cancelled or handled.
    Resolved,
}

/// An SOS emergency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emergency {
    /// `EMG` followed by a zero-padded sequence number.
    pub id: String,
    /// User who raised the emergency.
    pub user_id: String,
    /// Display name of that user.
    pub user_name: String,
    /// Reported position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Kind of emergency (e.g. `emergency_sos`, `voice_emergency`).
    #[serde(rename = "type")]
    pub kind: String,
    /// What raised it (e.g. `manual`, `voice`).
    pub source: String,
    /// Device battery percentage at trigger time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<u8>,
    /// Transcribed command, for voice-raised emergencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_command: Option<String>,
    /// When the emergency was raised.
    pub timestamp: DateTime<Utc>,
    /// Current status.
    pub status: EmergencyStatus,
    /// When the emergency was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Emergency {
    /// Whether this emergency is still awaiting response.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmergencyStatus::Active
    }
}

/// An emergency before the store stamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmergency {
    /// User who raised the emergency.
    pub user_id: String,
    /// Display name of that user.
    pub user_name: String,
    /// Reported position.
    pub location: Option<GeoPoint>,
    /// Kind of emergency.
    pub kind: String,
    /// What raised it.
    pub source: String,
    /// Device battery percentage.
    pub battery_level: Option<u8>,
    /// Transcribed command, for voice-raised emergencies.
    pub voice_command: Option<String>,
}

// ---------------------------------------------------------------------------
// Patrols
// ---------------------------------------------------------------------------

/// Duty status of a security patrol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatrolStatus {
    /// Free to take a dispatch.
    Available,
    /// On a routine round.
    Patrolling,
    /// Attending an emergency.
    Responding,
    /// Not on shift.
    OffDuty,
}

impl PatrolStatus {
    /// Parses a status name such as `available` or `off_duty`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPatrolStatusError`] if `value` isn't a known status.
    pub fn parse(value: &str) -> Result<Self, InvalidPatrolStatusError> {
        value
            .trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| InvalidPatrolStatusError {
                value: value.to_string(),
            })
    }
}

/// Error returned when a patrol status string isn't recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid patrol status '{value}'")]
pub struct InvalidPatrolStatusError {
    /// The rejected status string.
    pub value: String,
}

/// A campus security patrol unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patrol {
    /// Unit id (e.g. `P001`).
    pub id: String,
    /// Unit call name.
    pub name: String,
    /// Current duty status.
    pub status: PatrolStatus,
    /// Last known position.
    pub location: GeoPoint,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Someone to notify when the user raises an emergency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Relationship to the user.
    pub relationship: String,
}

/// Profile of a campus user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Student id (e.g. `STU2024001`).
    #[serde(rename = "id")]
    pub student_id: String,
    /// Campus email.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Emergency contacts.
    pub emergency_contacts: Vec<EmergencyContact>,
    /// Medical notes for responders.
    pub medical_info: String,
    /// Last reported device battery percentage.
    pub battery_level: u8,
}

impl UserProfile {
    /// Profile shown when the requested user doesn't exist.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "User".to_string(),
            student_id: "STU000000".to_string(),
            email: "user@campus.edu".to_string(),
            phone: "+91-0000000000".to_string(),
            emergency_contacts: Vec::new(),
            medical_info: "None".to_string(),
            battery_level: DEFAULT_BATTERY_LEVEL,
        }
    }
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Shop catalog section.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductCategory {
    /// Bracelets, pendants and other worn devices.
    Wearables,
    /// Alarms, sprays and other self-defense gear.
    Defense,
    /// Clothing.
    Apparel,
}

/// A product in the safety shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog id.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Price in whole rupees.
    pub price: u32,
    /// Image path under the static root.
    pub image: String,
    /// Catalog section.
    pub category: ProductCategory,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Icon name for the frontend.
    pub icon: String,
}
