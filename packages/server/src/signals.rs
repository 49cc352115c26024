//! Simulated device and environment signals.
//!
//! The demo has no real GPS, Bluetooth scanning or session service, so the
//! handlers ask a [`SignalSource`] for these values. [`RandomSignals`] is
//! what the server runs with; tests substitute a fixed source.

use std::ops::RangeInclusive;

use campus_safety_store_models::GeoPoint;
use rand::Rng as _;

/// How many nearby app users an SOS reaches.
pub const NEARBY_DEVICES: RangeInclusive<u8> = 2..=8;
/// Accuracy radius of a simulated fix, in metres.
pub const FIX_ACCURACY_METERS: RangeInclusive<u8> = 5..=15;
/// Maximum offset of a simulated fix from the campus centre, in degrees.
pub const FIX_JITTER_DEGREES: f64 = 0.0005;
/// Numeric part of a safe walk id.
pub const SAFEWALK_SUFFIX: RangeInclusive<u16> = 1000..=9999;

/// Source of values the demo would otherwise read from hardware.
pub trait SignalSource: Send + Sync {
    /// Number of nearby devices alerted by an SOS.
    fn nearby_devices(&self) -> u8;

    /// A position fix near `base` and its accuracy in metres.
    fn position_fix(&self, base: GeoPoint) -> (GeoPoint, u8);

    /// Numeric suffix for a new safe walk id.
    fn safewalk_suffix(&self) -> u16;
}

/// [`SignalSource`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSignals;

impl SignalSource for RandomSignals {
    fn nearby_devices(&self) -> u8 {
        rand::thread_rng().gen_range(NEARBY_DEVICES)
    }

    fn position_fix(&self, base: GeoPoint) -> (GeoPoint, u8) {
        let mut rng = rand::thread_rng();
        let lat = base.lat + rng.gen_range(-FIX_JITTER_DEGREES..FIX_JITTER_DEGREES);
        let lng = base.lng + rng.gen_range(-FIX_JITTER_DEGREES..FIX_JITTER_DEGREES);
        (GeoPoint::new(lat, lng), rng.gen_range(FIX_ACCURACY_METERS))
    }

    fn safewalk_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(SAFEWALK_SUFFIX)
    }
}
