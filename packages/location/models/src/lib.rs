#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Campus location safety types.
//!
//! A location carries a running [`SafetyScore`] on a 1.0-5.0 scale (lower is
//! less safe) and the number of incidents reported there. The presentation
//! layer never shows the raw score on its own; it projects it onto an
//! inverse 1-10 [`RiskLevel`] for the heatmap.

use serde::{Deserialize, Serialize};

/// A location's perceived safety on a 1.0-5.0 scale, kept at one decimal.
///
/// Every constructor clamps into [`SafetyScore::MIN`]..=[`SafetyScore::MAX`]
/// and rounds to one decimal place, so a `SafetyScore` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SafetyScore(f64);

impl SafetyScore {
    /// Lowest (least safe) score.
    pub const MIN: f64 = 1.0;
    /// Highest (safest) score.
    pub const MAX: f64 = 5.0;

    /// Creates a score, clamping into range and rounding to one decimal.
    ///
    /// `NaN` is treated as [`Self::MAX`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MAX);
        }
        let clamped = value.clamp(Self::MIN, Self::MAX);
        Self((clamped * 10.0).round() / 10.0)
    }

    /// Returns the numeric value of this score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns this score lowered by `penalty`, re-clamped and re-rounded.
    #[must_use]
    pub fn penalized(self, penalty: f64) -> Self {
        Self::new(self.0 - penalty)
    }
}

impl From<f64> for SafetyScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SafetyScore> for f64 {
    fn from(score: SafetyScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for SafetyScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Heatmap risk on a 1-10 scale, derived from a [`SafetyScore`]. Higher is
/// worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RiskLevel(u8);

impl RiskLevel {
    /// Lowest risk level.
    pub const MIN: u8 = 1;
    /// Highest risk level.
    pub const MAX: u8 = 10;

    /// Projects a safety score onto the risk scale:
    /// `clamp(round((5 - score) * 2), 1, 10)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_score(score: SafetyScore) -> Self {
        let raw = ((SafetyScore::MAX - score.value()) * 2.0).round();
        let clamped = raw.clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Self(clamped as u8)
    }

    /// Returns the numeric value of this risk level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<SafetyScore> for RiskLevel {
    fn from(score: SafetyScore) -> Self {
        Self::from_score(score)
    }
}

/// A named campus location and its running safety score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSafetyRecord {
    /// Stable key, unique across the campus mapping (e.g. `library_main`).
    pub location_id: String,
    /// Human-readable label.
    pub display_name: String,
    /// Current safety score.
    pub score: SafetyScore,
    /// Number of incidents reported at this location. Never decreases.
    pub report_count: u32,
}

impl LocationSafetyRecord {
    /// Creates a record with the given starting score and report count.
    #[must_use]
    pub fn new(
        location_id: impl Into<String>,
        display_name: impl Into<String>,
        score: f64,
        report_count: u32,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            display_name: display_name.into(),
            score: SafetyScore::new(score),
            report_count,
        }
    }

    /// Returns the heatmap risk level for this record's current score.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

/// One location's entry in the risk heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapEntry {
    /// Location key.
    pub location_id: String,
    /// Human-readable label.
    pub display_name: String,
    /// Derived risk (1-10).
    pub risk_level: RiskLevel,
    /// Current safety score.
    pub score: SafetyScore,
    /// Number of incidents reported at this location.
    pub report_count: u32,
}

impl From<&LocationSafetyRecord> for HeatmapEntry {
    fn from(record: &LocationSafetyRecord) -> Self {
        Self {
            location_id: record.location_id.clone(),
            display_name: record.display_name.clone(),
            risk_level: record.risk_level(),
            score: record.score,
            report_count: record.report_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_into_range() {
        assert!((SafetyScore::new(7.3).value() - 5.0).abs() < f64::EPSILON);
        assert!((SafetyScore::new(-2.0).value() - 1.0).abs() < f64::EPSILON);
        assert!((SafetyScore::new(f64::NAN).value() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        assert!((SafetyScore::new(4.2 - 0.2).value() - 4.0).abs() < f64::EPSILON);
        assert!((SafetyScore::new(3.26).value() - 3.3).abs() < f64::EPSILON);
        assert_eq!(SafetyScore::new(2.8).penalized(0.2).to_string(), "2.6");
    }

    #[test]
    fn penalty_floors_at_minimum() {
        let score = SafetyScore::new(1.1).penalized(0.2);
        assert!((score.value() - SafetyScore::MIN).abs() < f64::EPSILON);
    }

    #[test]
    fn risk_level_stays_in_range() {
        for tenths in 0..=60 {
            let level = RiskLevel::from_score(SafetyScore::new(f64::from(tenths) / 10.0));
            assert!(
                (RiskLevel::MIN..=RiskLevel::MAX).contains(&level.value()),
                "risk {level:?} out of range"
            );
        }
    }

    #[test]
    fn risk_level_is_inverse_monotonic() {
        let mut previous = u8::MAX;
        for tenths in 10..=50 {
            let level = RiskLevel::from_score(SafetyScore::new(f64::from(tenths) / 10.0)).value();
            assert!(level <= previous, "risk rose from {previous} to {level}");
            previous = level;
        }
    }

    #[test]
    fn risk_level_known_values() {
        assert_eq!(RiskLevel::from_score(SafetyScore::new(4.0)).value(), 2);
        assert_eq!(RiskLevel::from_score(SafetyScore::new(4.2)).value(), 2);
        assert_eq!(RiskLevel::from_score(SafetyScore::new(2.8)).value(), 4);
        assert_eq!(RiskLevel::from_score(SafetyScore::new(5.0)).value(), 1);
        assert_eq!(RiskLevel::from_score(SafetyScore::new(1.0)).value(), 8);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = LocationSafetyRecord::new("cafeteria", "Main Cafeteria", 4.0, 2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["locationId"], "cafeteria");
        assert_eq!(json["displayName"], "Main Cafeteria");
        assert_eq!(json["score"], 4.0);
        assert_eq!(json["reportCount"], 2);
    }

    #[test]
    fn deserialized_score_is_clamped() {
        let record: LocationSafetyRecord = serde_json::from_str(
            r#"{"locationId":"x","displayName":"X","score":9.9,"reportCount":0}"#,
        )
        .unwrap();
        assert!((record.score.value() - 5.0).abs() < f64::EPSILON);
    }
}
