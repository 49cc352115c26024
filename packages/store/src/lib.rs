#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Process-lifetime state for the campus safety app.
//!
//! [`CampusStore`] owns everything the server mutates: the location safety
//! scores, the incident and emergency logs, patrol statuses and the mock
//! user's profile. Nothing is persisted; a restart reseeds from [`seed`].
//!
//! The logs are append-only. Ids come from an [`IdSequence`] per log rather
//! than the log length, so they stay unique even if removal is ever added.
//!
//! Handlers share the store through [`SharedStore`], which serializes every
//! operation behind a single mutex.

pub mod ids;
pub mod seed;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use campus_safety_location::SafetyScoreStore;
use campus_safety_store_models::{
    Emergency, EmergencyStatus, Incident, IncidentStatus, NewEmergency, NewIncident, Patrol,
    PatrolStatus, Product, ProductCategory, UserProfile,
};
use chrono::Utc;

pub use ids::IdSequence;
pub use seed::DEFAULT_USER_ID;

/// In-memory state of the campus safety app.
#[derive(Debug, Clone)]
pub struct CampusStore {
    locations: SafetyScoreStore,
    incidents: Vec<Incident>,
    incident_ids: IdSequence,
    emergencies: Vec<Emergency>,
    emergency_ids: IdSequence,
    patrols: Vec<Patrol>,
    users: BTreeMap<String, UserProfile>,
    products: Vec<Product>,
}

impl Default for CampusStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CampusStore {
    /// Creates a store populated with the demo campus: locations, patrols,
    /// the mock user and the shop catalog. The logs start empty.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_locations(SafetyScoreStore::campus_default())
    }

    /// Creates a seeded store that tracks `locations` instead of the
    /// default campus.
    #[must_use]
    pub fn with_locations(locations: SafetyScoreStore) -> Self {
        let mut users = BTreeMap::new();
        users.insert(DEFAULT_USER_ID.to_string(), seed::default_user());

        Self {
            locations,
            incidents: Vec::new(),
            incident_ids: IdSequence::new("INC"),
            emergencies: Vec::new(),
            emergency_ids: IdSequence::new("EMG"),
            patrols: seed::patrols(),
            users,
            products: seed::products(),
        }
    }

    /// Location safety scores.
    #[must_use]
    pub const fn locations(&self) -> &SafetyScoreStore {
        &self.locations
    }

    // -- Incidents ----------------------------------------------------------

    /// Records an incident and applies it to its location's safety score.
    ///
    /// The incident is logged even if its location id is missing or
    /// unknown; in that case no score changes.
    pub fn add_incident(&mut self, incident: NewIncident) -> String {
        let id = self.incident_ids.next_id();

        self.locations.record_incident(incident.location_id.as_deref());

        log::info!(
            "Recorded incident {id} at {}",
            incident.location_id.as_deref().unwrap_or("unspecified location")
        );

        self.incidents.push(Incident {
            id: id.clone(),
            location_id: incident.location_id,
            timestamp: Utc::now(),
            status: IncidentStatus::Reported,
            details: incident.details,
        });

        id
    }

    /// All incidents, oldest first.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// The last `count` incidents, oldest first.
    #[must_use]
    pub fn recent_incidents(&self, count: usize) -> &[Incident] {
        let start = self.incidents.len().saturating_sub(count);
        &self.incidents[start..]
    }

    // -- Emergencies --------------------------------------------------------

    /// Raises an emergency in the `active` state.
    pub fn add_emergency(&mut self, emergency: NewEmergency) -> String {
        let id = self.emergency_ids.next_id();

        log::info!(
            "Emergency {id} raised by {} ({} via {})",
            emergency.user_id,
            emergency.kind,
            emergency.source
        );

        self.emergencies.push(Emergency {
            id: id.clone(),
            user_id: emergency.user_id,
            user_name: emergency.user_name,
            location: emergency.location,
            kind: emergency.kind,
            source: emergency.source,
            battery_level: emergency.battery_level,
            voice_command: emergency.voice_command,
            timestamp: Utc::now(),
            status: EmergencyStatus::Active,
            resolved_at: None,
        });

        id
    }

    /// Resolves the emergency with the given id.
    ///
    /// Returns `false` if no emergency has that id. Cancelling an
    /// already-resolved emergency keeps its original resolution time.
    pub fn cancel_emergency(&mut self, emergency_id: &str) -> bool {
        let Some(emergency) = self.emergencies.iter_mut().find(|e| e.id == emergency_id) else {
            log::debug!("No emergency '{emergency_id}' to cancel");
            return false;
        };

        if emergency.is_active() {
            emergency.status = EmergencyStatus::Resolved;
            emergency.resolved_at = Some(Utc::now());
            log::info!("Emergency {emergency_id} resolved");
        }

        true
    }

    /// Looks up an emergency by id.
    #[must_use]
    pub fn emergency(&self, emergency_id: &str) -> Option<&Emergency> {
        self.emergencies.iter().find(|e| e.id == emergency_id)
    }

    /// All emergencies, oldest first.
    #[must_use]
    pub fn emergencies(&self) -> &[Emergency] {
        &self.emergencies
    }

    /// Emergencies still awaiting response, oldest first.
    pub fn active_emergencies(&self) -> impl Iterator<Item = &Emergency> {
        self.emergencies.iter().filter(|e| e.is_active())
    }

    // -- Patrols ------------------------------------------------------------

    /// All patrol units.
    #[must_use]
    pub fn patrols(&self) -> &[Patrol] {
        &self.patrols
    }

    /// First available patrol in roster order.
    ///
    /// This is a roster scan, not a distance search; positions are ignored.
    #[must_use]
    pub fn nearest_available_patrol(&self) -> Option<&Patrol> {
        self.patrols.iter().find(|p| p.status == PatrolStatus::Available)
    }

    /// Sets a patrol's status. Returns `false` if no patrol has that id.
    pub fn update_patrol_status(&mut self, patrol_id: &str, status: PatrolStatus) -> bool {
        match self.patrols.iter_mut().find(|p| p.id == patrol_id) {
            Some(patrol) => {
                log::info!("Patrol {patrol_id}: {} -> {status}", patrol.status);
                patrol.status = status;
                true
            }
            None => false,
        }
    }

    // -- Users --------------------------------------------------------------

    /// Looks up a user profile.
    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&UserProfile> {
        self.users.get(user_id)
    }

    /// Stores the latest battery level for a user. Returns `false` if the
    /// user doesn't exist.
    pub fn update_battery(&mut self, user_id: &str, battery_level: u8) -> bool {
        match self.users.get_mut(user_id) {
            Some(user) => {
                user.battery_level = battery_level;
                true
            }
            None => false,
        }
    }

    // -- Shop ---------------------------------------------------------------

    /// Catalog products, optionally limited to one category.
    pub fn products(&self, category: Option<ProductCategory>) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| category.is_none_or(|c| p.category == c))
    }
}

/// Cloneable handle to a [`CampusStore`] shared across request handlers.
///
/// Each [`SharedStore::lock`] holds the store exclusively, so one request's
/// read-modify-write can't interleave with another's.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<CampusStore>>,
}

impl SharedStore {
    /// Wraps a store for sharing.
    #[must_use]
    pub fn new(store: CampusStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store for one operation.
    ///
    /// A poisoned lock is recovered; the store holds plain data with no
    /// invariant spanning more than a single field write.
    pub fn lock(&self) -> MutexGuard<'_, CampusStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<CampusStore> for SharedStore {
    fn from(store: CampusStore) -> Self {
        Self::new(store)
    }
}
