//! Static demo data: patrols, the mock user and the shop catalog.

use campus_safety_store_models::{
    DEFAULT_BATTERY_LEVEL, EmergencyContact, GeoPoint, Patrol, PatrolStatus, Product,
    ProductCategory, UserProfile,
};

/// Id of the single mock user every request acts as.
pub const DEFAULT_USER_ID: &str = "user123";

/// Security units on shift at startup.
#[must_use]
pub fn patrols() -> Vec<Patrol> {
    vec![
        patrol("P001", "Campus Security A", PatrolStatus::Available, 28.6139, 77.2295),
        patrol("P002", "Campus Security B", PatrolStatus::Patrolling, 28.6129, 77.2305),
        patrol("P003", "Rapid Response", PatrolStatus::Available, 28.6149, 77.2285),
    ]
}

fn patrol(id: &str, name: &str, status: PatrolStatus, lat: f64, lng: f64) -> Patrol {
    Patrol {
        id: id.to_string(),
        name: name.to_string(),
        status,
        location: GeoPoint::new(lat, lng),
    }
}

/// The mock user.
#[must_use]
pub fn default_user() -> UserProfile {
    UserProfile {
        name: "Priya Sharma".to_string(),
        student_id: "STU2024001".to_string(),
        email: "priya.sharma@campus.edu".to_string(),
        phone: "+91-9876543210".to_string(),
        emergency_contacts: vec![
            contact("Parent", "+91-9876543211", "Parent"),
            contact("Best Friend", "+91-9876543212", "Friend"),
        ],
        medical_info: "None".to_string(),
        battery_level: DEFAULT_BATTERY_LEVEL,
    }
}

fn contact(name: &str, phone: &str, relationship: &str) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        phone: phone.to_string(),
        relationship: relationship.to_string(),
    }
}

/// The safety shop catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Smart Safety Bracelet",
            "Waterproof bracelet with SOS button and GPS tracking",
            1299,
            "bracelet.jpg",
            ProductCategory::Wearables,
            &["SOS Button", "GPS Tracking", "Waterproof", "30-day battery"],
            "heartbeat",
        ),
        product(
            2,
            "Self-Defense Keychain",
            "Compact personal alarm with 130dB siren and strobe light",
            599,
            "keychain.jpg",
            ProductCategory::Defense,
            &["130dB Alarm", "Strobe Light", "Keychain Design", "Easy to Carry"],
            "shield-alt",
        ),
        product(
            3,
            "Safety Pendant",
            "Elegant necklace with hidden SOS button and fall detection",
            1599,
            "pendant.jpg",
            ProductCategory::Wearables,
            &["Hidden SOS", "Fall Detection", "Elegant Design", "GPS Enabled"],
            "gem",
        ),
        product(
            4,
            "Pepper Spray",
            "Legal self-defense spray with safety lock and quick release",
            399,
            "pepper-spray.jpg",
            ProductCategory::Defense,
            &["Legal Formula", "Safety Lock", "Quick Release", "Compact Size"],
            "spray-can",
        ),
        product(
            5,
            "Phoenix Hoodie",
            "Comfortable hoodie with safety features and reflective strips",
            1499,
            "hoodie.jpg",
            ProductCategory::Apparel,
            &["Reflective Strips", "Comfortable", "Safety Features", "Premium Quality"],
            "tshirt",
        ),
        product(
            6,
            "Personal Alarm",
            "Loud personal safety alarm with pin activation",
            299,
            "alarm.jpg",
            ProductCategory::Defense,
            &["Loud Alarm", "Pin Activation", "Compact", "Easy to Use"],
            "bell",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    description: &str,
    price: u32,
    image_file: &str,
    category: ProductCategory,
    features: &[&str],
    icon: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: format!("/static/images/{image_file}"),
        category,
        features: features.iter().map(ToString::to_string).collect(),
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_unique() {
        let mut ids: Vec<u32> = products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn at_least_one_patrol_starts_available() {
        assert!(
            patrols()
                .iter()
                .any(|p| p.status == PatrolStatus::Available)
        );
    }
}
