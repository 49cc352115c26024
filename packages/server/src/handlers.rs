//! HTTP handler functions for the campus safety API.

use actix_web::{HttpResponse, web};
use campus_safety_server_models::{
    AdminOverview, AdminStats, ApiHealth, ApiStatus, CancelEmergencyRequest, LocationFix,
    MessageResponse, ProductQueryParams, ReportIncidentRequest, ReportIncidentResponse,
    SafeWalkSession, SafeWalkStatus, SafetyDataResponse, StartSafeWalkRequest,
    StartSafeWalkResponse, TriggerEmergencyRequest, TriggerEmergencyResponse,
    UpdateBatteryRequest, UpdateBatteryResponse, UpdatePatrolRequest, UpdatePatrolResponse,
    VoiceCommandRequest, VoiceCommandResponse,
};
use campus_safety_store::{CampusStore, DEFAULT_USER_ID};
use campus_safety_store_models::{
    DEFAULT_BATTERY_LEVEL, EMERGENCY_SOURCE_MANUAL, EMERGENCY_SOURCE_VOICE, EMERGENCY_TYPE_SOS,
    EMERGENCY_TYPE_VOICE, GeoPoint, NewEmergency, PatrolStatus, Product, ProductCategory,
    UserProfile,
};
use campus_safety_voice::VoiceIntent;
use chrono::Utc;

use crate::AppState;

/// Arrival estimate quoted with every SOS.
const RESPONSE_TIME_ESTIMATE: &str = "45 seconds";
/// Average response time shown on the admin dashboard.
const AVG_RESPONSE_TIME: &str = "45s";
/// Patrol coverage shown on the admin dashboard.
const PATROL_COVERAGE: &str = "100%";
/// Incidents included in a safety data snapshot.
const SAFETY_DATA_INCIDENTS: usize = 10;
/// Incidents shown on the admin dashboard.
const ADMIN_RECENT_INCIDENTS: usize = 5;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/report-incident`
///
/// Logs the incident and docks its location's safety score. Unknown
/// locations are accepted; the incident is logged without a score change.
pub async fn report_incident(
    state: web::Data<AppState>,
    body: web::Json<ReportIncidentRequest>,
) -> HttpResponse {
    let incident_id = state.store.lock().add_incident(body.into_inner().into());

    HttpResponse::Ok().json(ReportIncidentResponse {
        status: ApiStatus::Success,
        incident_id,
    })
}

/// `POST /api/trigger-emergency`
///
/// Raises an SOS and suggests the first available patrol.
pub async fn trigger_emergency(
    state: web::Data<AppState>,
    body: web::Json<TriggerEmergencyRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let (emergency_id, nearest_patrol) = {
        let mut store = state.store.lock();
        let user_name = mock_user_name(&store);
        let emergency_id = store.add_emergency(NewEmergency {
            user_id: request
                .user_id
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            user_name,
            location: Some(request.location.unwrap_or(GeoPoint::CAMPUS_CENTER)),
            kind: request
                .kind
                .unwrap_or_else(|| EMERGENCY_TYPE_SOS.to_string()),
            source: request
                .source
                .unwrap_or_else(|| EMERGENCY_SOURCE_MANUAL.to_string()),
            battery_level: Some(request.battery_level.unwrap_or(DEFAULT_BATTERY_LEVEL)),
            voice_command: None,
        });
        (emergency_id, store.nearest_available_patrol().cloned())
    };

    HttpResponse::Ok().json(TriggerEmergencyResponse {
        status: ApiStatus::Success,
        emergency_id,
        nearby_devices: state.signals.nearby_devices(),
        nearest_patrol,
        response_time_estimate: RESPONSE_TIME_ESTIMATE.to_string(),
    })
}

/// `POST /api/cancel-emergency`
///
/// Resolves the emergency if it exists. The response is the same either
/// way, since the client may cancel an SOS it never got an id for.
pub async fn cancel_emergency(
    state: web::Data<AppState>,
    body: web::Json<CancelEmergencyRequest>,
) -> HttpResponse {
    if let Some(emergency_id) = body.into_inner().emergency_id {
        state.store.lock().cancel_emergency(&emergency_id);
    }

    HttpResponse::Ok().json(MessageResponse {
        status: ApiStatus::Success,
        message: "Emergency cancelled".to_string(),
    })
}

/// `POST /api/voice-command`
pub async fn voice_command(
    state: web::Data<AppState>,
    body: web::Json<VoiceCommandRequest>,
) -> HttpResponse {
    let command = body.into_inner().command.to_lowercase();

    let response = match campus_safety_voice::route(&command) {
        VoiceIntent::Emergency => {
            let mut store = state.store.lock();
            let user_name = mock_user_name(&store);
            let emergency_id = store.add_emergency(NewEmergency {
                user_id: DEFAULT_USER_ID.to_string(),
                user_name,
                location: None,
                kind: EMERGENCY_TYPE_VOICE.to_string(),
                source: EMERGENCY_SOURCE_VOICE.to_string(),
                battery_level: None,
                voice_command: Some(command),
            });
            VoiceCommandResponse {
                status: ApiStatus::EmergencyTriggered,
                action: Some("emergency".to_string()),
                emergency_id: Some(emergency_id),
                message: "Emergency alert activated via voice command!".to_string(),
            }
        }
        VoiceIntent::Report => VoiceCommandResponse {
            status: ApiStatus::Navigation,
            action: Some("report".to_string()),
            emergency_id: None,
            message: "Opening incident reporting...".to_string(),
        },
        VoiceIntent::Navigate(destination) => VoiceCommandResponse {
            status: ApiStatus::Navigation,
            action: Some(destination.to_string()),
            emergency_id: None,
            message: destination.message().to_string(),
        },
        VoiceIntent::Unmatched => VoiceCommandResponse {
            status: ApiStatus::Processed,
            action: None,
            emergency_id: None,
            message: "Command processed".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// `GET /api/get-safety-data`
///
/// Returns the risk heatmap and the latest incidents.
pub async fn safety_data(state: web::Data<AppState>) -> HttpResponse {
    let (heatmap, incidents) = {
        let store = state.store.lock();
        (
            store.locations().risk_heatmap(),
            store.recent_incidents(SAFETY_DATA_INCIDENTS).to_vec(),
        )
    };

    HttpResponse::Ok().json(SafetyDataResponse {
        heatmap,
        incidents,
        last_updated: Utc::now(),
    })
}

/// `GET /api/get-location`
///
/// Returns a simulated GPS fix near the campus centre.
pub async fn location(state: web::Data<AppState>) -> HttpResponse {
    let (fix, accuracy) = state.signals.position_fix(GeoPoint::CAMPUS_CENTER);

    HttpResponse::Ok().json(LocationFix {
        lat: fix.lat,
        lng: fix.lng,
        accuracy,
        timestamp: Utc::now(),
    })
}

/// `POST /api/update-battery`
pub async fn update_battery(
    state: web::Data<AppState>,
    body: web::Json<UpdateBatteryRequest>,
) -> HttpResponse {
    let battery_level = body.battery_level.unwrap_or(DEFAULT_BATTERY_LEVEL);
    state
        .store
        .lock()
        .update_battery(DEFAULT_USER_ID, battery_level);

    HttpResponse::Ok().json(UpdateBatteryResponse {
        status: ApiStatus::Success,
        battery_level,
    })
}

/// `POST /api/start-safewalk`
///
/// Opens a safe walk session. Sessions are handed to the client and not
/// tracked server-side.
pub async fn start_safewalk(
    state: web::Data<AppState>,
    body: web::Json<StartSafeWalkRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let session = SafeWalkSession {
        safewalk_id: format!("SW_{}", state.signals.safewalk_suffix()),
        user_id: request
            .user_id
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        start_location: request.start_location,
        end_location: request.end_location,
        start_time: Utc::now(),
        status: SafeWalkStatus::Active,
    };
    log::info!("Safe walk {} started", session.safewalk_id);

    HttpResponse::Ok().json(StartSafeWalkResponse {
        status: ApiStatus::Success,
        safewalk_data: session,
    })
}

/// `GET /api/profile`
///
/// Returns the mock user's profile.
pub async fn profile(state: web::Data<AppState>) -> HttpResponse {
    let profile = state
        .store
        .lock()
        .user(DEFAULT_USER_ID)
        .cloned()
        .unwrap_or_else(UserProfile::placeholder);

    HttpResponse::Ok().json(profile)
}

/// `GET /api/locations`
///
/// Lists campus locations and their current safety scores.
pub async fn locations(state: web::Data<AppState>) -> HttpResponse {
    let records = state.store.lock().locations().records().to_vec();
    HttpResponse::Ok().json(records)
}

/// `GET /api/shop/products`
///
/// Lists the shop catalog, optionally filtered by `category`. An unknown
/// category matches nothing.
pub async fn products(
    state: web::Data<AppState>,
    params: web::Query<ProductQueryParams>,
) -> HttpResponse {
    let category = match params.category.as_deref() {
        None => None,
        Some(raw) => match raw.trim().parse::<ProductCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                log::warn!("Unknown product category '{raw}'");
                return HttpResponse::Ok().json(Vec::<Product>::new());
            }
        },
    };

    let products: Vec<_> = state.store.lock().products(category).cloned().collect();

    HttpResponse::Ok().json(products)
}

/// `GET /api/admin/emergencies`
///
/// Lists emergencies still awaiting response.
pub async fn admin_emergencies(state: web::Data<AppState>) -> HttpResponse {
    let active: Vec<_> = state.store.lock().active_emergencies().cloned().collect();
    HttpResponse::Ok().json(active)
}

/// `GET /api/admin/overview`
pub async fn admin_overview(state: web::Data<AppState>) -> HttpResponse {
    let overview = {
        let store = state.store.lock();
        let active_emergencies: Vec<_> = store.active_emergencies().cloned().collect();

        AdminOverview {
            stats: AdminStats {
                total_incidents: store.incidents().len(),
                active_emergencies: active_emergencies.len(),
                avg_response_time: AVG_RESPONSE_TIME.to_string(),
                coverage: PATROL_COVERAGE.to_string(),
            },
            active_emergencies,
            recent_incidents: store.recent_incidents(ADMIN_RECENT_INCIDENTS).to_vec(),
            patrols: store.patrols().to_vec(),
        }
    };

    HttpResponse::Ok().json(overview)
}

/// `POST /api/admin/update-patrol`
///
/// Sets a patrol's status. Unknown patrols and statuses are logged and
/// ignored.
pub async fn update_patrol(
    state: web::Data<AppState>,
    body: web::Json<UpdatePatrolRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    if let (Some(patrol_id), Some(status)) = (&request.patrol_id, &request.status) {
        match PatrolStatus::parse(status) {
            Ok(status) => {
                if !state.store.lock().update_patrol_status(patrol_id, status) {
                    log::warn!("No patrol '{patrol_id}' to update");
                }
            }
            Err(e) => log::warn!("Ignoring patrol update for '{patrol_id}': {e}"),
        }
    }

    HttpResponse::Ok().json(UpdatePatrolResponse {
        status: ApiStatus::Success,
        patrol_id: request.patrol_id,
    })
}

fn mock_user_name(store: &CampusStore) -> String {
    store
        .user(DEFAULT_USER_ID)
        .map_or_else(|| UserProfile::placeholder().name, |user| user.name.clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test};
    use campus_safety_store_models::EmergencyStatus;
    use serde_json::{Value, json};

    use super::*;
    use crate::signals::SignalSource;

    struct FixedSignals;

    impl SignalSource for FixedSignals {
        fn nearby_devices(&self) -> u8 {
            5
        }

        fn position_fix(&self, base: GeoPoint) -> (GeoPoint, u8) {
            (GeoPoint::new(base.lat + 0.0001, base.lng - 0.0001), 9)
        }

        fn safewalk_suffix(&self) -> u16 {
            4321
        }
    }

    fn test_state() -> AppState {
        AppState::new(Arc::new(FixedSignals))
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(crate::configure_api),
            )
            .await
        };
    }

    macro_rules! post_json {
        ($app:expr, $uri:expr, $body:expr $(,)?) => {{
            let req = test::TestRequest::post()
                .uri($uri)
                .set_json($body)
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            body
        }};
    }

    macro_rules! get_json {
        ($app:expr, $uri:expr $(,)?) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            body
        }};
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let state = test_state();
        let app = init_app!(state);

        let body = get_json!(app, "/api/health");
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn reported_incident_updates_heatmap() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(
            app,
            "/api/report-incident",
            json!({"locationId": "library_main", "type": "harassment"}),
        );
        assert_eq!(body["status"], "success");
        assert_eq!(body["incidentId"], "INC0001");

        let data = get_json!(app, "/api/get-safety-data");
        let library = data["heatmap"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["locationId"] == "library_main")
            .unwrap();
        assert_eq!(library["score"], 4.0);
        assert_eq!(library["reportCount"], 4);
        assert_eq!(library["riskLevel"], 2);

        let incidents = data["incidents"].as_array().unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0]["id"], "INC0001");
        assert_eq!(incidents[0]["status"], "reported");
        assert_eq!(incidents[0]["type"], "harassment");
        assert!(data["lastUpdated"].is_string());
    }

    #[actix_web::test]
    async fn legacy_report_route_accepts_snake_case() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(app, "/report", json!({"location_id": "parking_north"}));
        assert_eq!(body["incidentId"], "INC0001");

        let store = state.store.lock();
        let record = store.locations().get("parking_north").unwrap();
        assert!((record.score.value() - 2.6).abs() < f64::EPSILON);
    }

    #[actix_web::test]
    async fn unknown_location_still_logs_incident() {
        let state = test_state();
        let app = init_app!(state);
        let before = state.store.lock().locations().records().to_vec();

        let body = post_json!(app, "/api/report-incident", json!({"locationId": "nowhere"}));
        assert_eq!(body["incidentId"], "INC0001");

        let store = state.store.lock();
        assert_eq!(store.incidents().len(), 1);
        assert_eq!(store.locations().records(), before.as_slice());
    }

    #[actix_web::test]
    async fn safety_data_returns_last_ten_incidents() {
        let state = test_state();
        let app = init_app!(state);

        for _ in 0..12 {
            post_json!(app, "/api/report-incident", json!({}));
        }

        let data = get_json!(app, "/api/get-safety-data");
        let incidents = data["incidents"].as_array().unwrap();
        assert_eq!(incidents.len(), 10);
        assert_eq!(incidents[0]["id"], "INC0003");
        assert_eq!(incidents[9]["id"], "INC0012");
    }

    #[actix_web::test]
    async fn trigger_emergency_fills_defaults() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(app, "/api/trigger-emergency", json!({}));
        assert_eq!(body["status"], "success");
        assert_eq!(body["emergencyId"], "EMG0001");
        assert_eq!(body["nearbyDevices"], 5);
        assert_eq!(body["nearestPatrol"]["id"], "P001");
        assert_eq!(body["responseTimeEstimate"], "45 seconds");

        let store = state.store.lock();
        let emergency = store.emergency("EMG0001").unwrap();
        assert_eq!(emergency.user_id, "user123");
        assert_eq!(emergency.user_name, "Priya Sharma");
        assert_eq!(emergency.kind, "emergency_sos");
        assert_eq!(emergency.source, "manual");
        assert_eq!(emergency.battery_level, Some(85));
        assert_eq!(emergency.location, Some(GeoPoint::CAMPUS_CENTER));
        assert_eq!(emergency.status, EmergencyStatus::Active);
    }

    #[actix_web::test]
    async fn trigger_emergency_without_available_patrol() {
        let state = test_state();
        let app = init_app!(state);

        for patrol_id in ["P001", "P003"] {
            post_json!(
                app,
                "/api/admin/update-patrol",
                json!({"patrolId": patrol_id, "status": "responding"}),
            );
        }

        let body = post_json!(
            app,
            "/api/trigger-emergency",
            json!({"source": "shake", "battery_level": 12}),
        );
        assert!(body["nearestPatrol"].is_null());
        assert_eq!(
            state.store.lock().emergency("EMG0001").unwrap().battery_level,
            Some(12)
        );
    }

    #[actix_web::test]
    async fn cancelled_emergency_leaves_admin_list() {
        let state = test_state();
        let app = init_app!(state);

        post_json!(app, "/api/trigger-emergency", json!({}));
        post_json!(app, "/api/trigger-emergency", json!({}));

        let body = post_json!(
            app,
            "/api/cancel-emergency",
            json!({"emergencyId": "EMG0001"}),
        );
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Emergency cancelled");

        let active = get_json!(app, "/api/admin/emergencies");
        let active = active.as_array().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["id"], "EMG0002");

        let store = state.store.lock();
        let cancelled = store.emergency("EMG0001").unwrap();
        assert_eq!(cancelled.status, EmergencyStatus::Resolved);
        assert!(cancelled.resolved_at.is_some());
    }

    #[actix_web::test]
    async fn cancelling_unknown_emergency_still_succeeds() {
        let state = test_state();
        let app = init_app!(state);

        post_json!(app, "/api/trigger-emergency", json!({}));
        let body = post_json!(
            app,
            "/api/cancel-emergency",
            json!({"user_id": "user123", "emergency_id": "current"}),
        );

        assert_eq!(body["status"], "success");
        assert_eq!(state.store.lock().active_emergencies().count(), 1);
    }

    #[actix_web::test]
    async fn voice_emergency_raises_sos() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(app, "/api/voice-command", json!({"command": "Please HELP me"}));
        assert_eq!(body["status"], "emergency_triggered");
        assert_eq!(body["action"], "emergency");
        assert_eq!(body["emergencyId"], "EMG0001");

        let store = state.store.lock();
        let emergency = store.emergency("EMG0001").unwrap();
        assert_eq!(emergency.kind, "voice_emergency");
        assert_eq!(emergency.source, "voice");
        assert_eq!(emergency.voice_command.as_deref(), Some("please help me"));
        assert!(emergency.location.is_none());
    }

    #[actix_web::test]
    async fn voice_navigation_and_fallback() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(app, "/api/voice-command", json!({"command": "open the map"}));
        assert_eq!(body["status"], "navigation");
        assert_eq!(body["action"], "safety_map");
        assert_eq!(body["message"], "Opening safety map...");

        let body = post_json!(app, "/api/voice-command", json!({"command": "report theft"}));
        assert_eq!(body["action"], "report");

        let body = post_json!(app, "/api/voice-command", json!({}));
        assert_eq!(body["status"], "processed");
        assert!(body["action"].is_null());
        assert!(state.store.lock().emergencies().is_empty());
    }

    #[actix_web::test]
    async fn location_uses_signal_source() {
        let state = test_state();
        let app = init_app!(state);

        let body = get_json!(app, "/api/get-location");
        assert_eq!(body["accuracy"], 9);
        let lat = body["lat"].as_f64().unwrap();
        assert!((lat - (GeoPoint::CAMPUS_CENTER.lat + 0.0001)).abs() < 1e-9);
    }

    #[actix_web::test]
    async fn battery_update_reaches_profile() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(app, "/api/update-battery", json!({"batteryLevel": 40}));
        assert_eq!(body["batteryLevel"], 40);
        assert_eq!(get_json!(app, "/api/profile")["batteryLevel"], 40);

        let body = post_json!(app, "/api/update-battery", json!({}));
        assert_eq!(body["batteryLevel"], 85);
        assert_eq!(get_json!(app, "/api/dashboard")["batteryLevel"], 85);
    }

    #[actix_web::test]
    async fn profile_lists_emergency_contacts() {
        let state = test_state();
        let app = init_app!(state);

        let body = get_json!(app, "/api/profile");
        assert_eq!(body["id"], "STU2024001");
        assert_eq!(body["emergencyContacts"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn patrol_update_ignores_unknown_status() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(
            app,
            "/api/admin/update-patrol",
            json!({"patrol_id": "P002", "status": "napping"}),
        );
        assert_eq!(body["status"], "success");
        assert_eq!(body["patrolId"], "P002");
        assert_eq!(
            state.store.lock().patrols()[1].status,
            PatrolStatus::Patrolling
        );

        post_json!(
            app,
            "/api/admin/update-patrol",
            json!({"patrolId": "P002", "status": "off_duty"}),
        );
        assert_eq!(state.store.lock().patrols()[1].status, PatrolStatus::OffDuty);
    }

    #[actix_web::test]
    async fn admin_overview_counts() {
        let state = test_state();
        let app = init_app!(state);

        for _ in 0..7 {
            post_json!(app, "/api/report-incident", json!({"locationId": "cafeteria"}));
        }
        post_json!(app, "/api/trigger-emergency", json!({}));

        let body = get_json!(app, "/api/admin/overview");
        assert_eq!(body["stats"]["totalIncidents"], 7);
        assert_eq!(body["stats"]["activeEmergencies"], 1);
        assert_eq!(body["stats"]["avgResponseTime"], "45s");
        assert_eq!(body["stats"]["coverage"], "100%");
        assert_eq!(body["recentIncidents"].as_array().unwrap().len(), 5);
        assert_eq!(body["patrols"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn safewalk_session_id() {
        let state = test_state();
        let app = init_app!(state);

        let body = post_json!(
            app,
            "/api/start-safewalk",
            json!({"start_location": "library_main", "endLocation": {"lat": 28.61, "lng": 77.22}}),
        );
        let session = &body["safewalkData"];
        assert_eq!(session["safewalkId"], "SW_4321");
        assert_eq!(session["userId"], "user123");
        assert_eq!(session["startLocation"], "library_main");
        assert_eq!(session["endLocation"]["lat"], 28.61);
        assert_eq!(session["status"], "active");
    }

    #[actix_web::test]
    async fn products_filter_by_category() {
        let state = test_state();
        let app = init_app!(state);

        assert_eq!(
            get_json!(app, "/api/shop/products").as_array().unwrap().len(),
            6
        );
        assert_eq!(
            get_json!(app, "/api/shop/products?category=defense")
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert!(
            get_json!(app, "/api/shop/products?category=toys")
                .as_array()
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn locations_list_seeded_campus() {
        let state = test_state();
        let app = init_app!(state);

        let body = get_json!(app, "/api/locations");
        let locations = body.as_array().unwrap();
        assert_eq!(locations.len(), 6);
        assert_eq!(locations[0]["locationId"], "library_main");
        assert_eq!(locations[0]["displayName"], "Library Main Entrance");
    }

    #[actix_web::test]
    async fn mistyped_location_still_logs_incident() {
        let state = test_state();
        let app = init_app!(state);
        let before = state.store.lock().locations().records().to_vec();

        let body = post_json!(app, "/api/report-incident", json!({"location_id": 5}));
        assert_eq!(body["status"], "success");
        assert_eq!(body["incidentId"], "INC0001");

        let store = state.store.lock();
        assert_eq!(store.incidents().len(), 1);
        assert!(store.incidents()[0].location_id.is_none());
        assert_eq!(store.locations().records(), before.as_slice());
    }

    #[actix_web::test]
    async fn mistyped_fields_fall_back_to_defaults() {
        let state = test_state();
        let app = init_app!(state);

        for (uri, payload) in [
            ("/api/update-battery", json!({"battery_level": 85.5})),
            ("/api/update-battery", json!({"battery_level": 300})),
            ("/api/trigger-emergency", json!({"battery_level": -1})),
            ("/api/cancel-emergency", json!({"emergency_id": 1})),
            ("/api/admin/update-patrol", json!({"patrolId": 7, "status": true})),
            ("/api/voice-command", json!({"command": null})),
        ] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }

        let store = state.store.lock();
        assert_eq!(store.user(DEFAULT_USER_ID).unwrap().battery_level, 100);
        let emergency = store.emergency("EMG0001").unwrap();
        assert_eq!(emergency.battery_level, Some(0));
        assert_eq!(emergency.status, EmergencyStatus::Active);
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected_as_json() {
        let state = test_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/report-incident")
            .insert_header(ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
        assert!(state.store.lock().incidents().is_empty());
    }
}
