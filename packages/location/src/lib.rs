#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory registry of campus locations and their running safety scores.
//!
//! Every reported incident at a known location costs that location a flat
//! [`INCIDENT_PENALTY`] off its score (floored at [`SafetyScore::MIN`]) and
//! bumps its report count. Reports are all weighted equally; there is no
//! decay or diminishing severity. The heatmap is a straight projection of
//! the current scores onto [`RiskLevel`]s in insertion order.

pub mod campus;

use std::collections::BTreeMap;

use campus_safety_location_models::{HeatmapEntry, LocationSafetyRecord};

pub use campus_safety_location_models::{RiskLevel, SafetyScore};

/// Score deducted from a location for each reported incident.
pub const INCIDENT_PENALTY: f64 = 0.2;

/// Insertion-ordered set of [`LocationSafetyRecord`]s keyed by location id.
#[derive(Debug, Clone, Default)]
pub struct SafetyScoreStore {
    records: Vec<LocationSafetyRecord>,
    /// location id -> index into `records`
    index: BTreeMap<String, usize>,
}

impl SafetyScoreStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the campus locations from
    /// [`campus::locations`].
    #[must_use]
    pub fn campus_default() -> Self {
        campus::locations().into_iter().collect()
    }

    /// Inserts a record. A record with an existing id replaces the old one
    /// in place, keeping its original position.
    pub fn insert(&mut self, record: LocationSafetyRecord) {
        if let Some(&idx) = self.index.get(&record.location_id) {
            self.records[idx] = record;
        } else {
            self.index
                .insert(record.location_id.clone(), self.records.len());
            self.records.push(record);
        }
    }

    /// Looks up a record by location id.
    #[must_use]
    pub fn get(&self, location_id: &str) -> Option<&LocationSafetyRecord> {
        self.index.get(location_id).map(|&idx| &self.records[idx])
    }

    /// Applies one incident report to `location_id`.
    ///
    /// Increments the report count and lowers the score by
    /// [`INCIDENT_PENALTY`]. An absent or unknown id is ignored; the updated
    /// record is returned when one was found.
    pub fn record_incident(&mut self, location_id: Option<&str>) -> Option<&LocationSafetyRecord> {
        let location_id = location_id?;

        let Some(&idx) = self.index.get(location_id) else {
            log::warn!("Ignoring incident for unknown location '{location_id}'");
            return None;
        };

        let record = &mut self.records[idx];
        record.report_count = record.report_count.saturating_add(1);
        record.score = record.score.penalized(INCIDENT_PENALTY);

        log::debug!(
            "Location '{}' now at score {} after {} reports",
            record.location_id,
            record.score,
            record.report_count
        );

        Some(&*record)
    }

    /// Projects every location onto the heatmap, in insertion order.
    #[must_use]
    pub fn risk_heatmap(&self) -> Vec<HeatmapEntry> {
        self.records.iter().map(HeatmapEntry::from).collect()
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[LocationSafetyRecord] {
        &self.records
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LocationSafetyRecord> for SafetyScoreStore {
    fn from_iter<T: IntoIterator<Item = LocationSafetyRecord>>(iter: T) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}
