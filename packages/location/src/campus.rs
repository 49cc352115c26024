//! Seed locations for the demo campus.

use campus_safety_location_models::LocationSafetyRecord;

/// Returns the campus locations with their starting scores and report
/// counts, in display order.
#[must_use]
pub fn locations() -> Vec<LocationSafetyRecord> {
    vec![
        LocationSafetyRecord::new("library_main", "Library Main Entrance", 4.2, 3),
        LocationSafetyRecord::new("hostel_a", "Girls Hostel A Block", 4.5, 1),
        LocationSafetyRecord::new("parking_north", "North Parking Lot", 2.8, 8),
        LocationSafetyRecord::new("cafeteria", "Main Cafeteria", 4.0, 2),
        LocationSafetyRecord::new("sports_complex", "Sports Complex", 3.5, 4),
        LocationSafetyRecord::new("academic_block_b", "Academic Block B", 4.3, 1),
    ]
}
