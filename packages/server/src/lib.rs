#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the campus safety application.
//!
//! Serves the JSON API for incident reporting, SOS emergencies, the
//! location risk heatmap, patrol status, the safety shop and voice
//! commands, plus the static frontend. All state lives in a
//! [`SharedStore`] for the life of the process.

pub mod config;
pub mod error;
mod handlers;
pub mod interactive;
pub mod signals;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use campus_safety_store::{CampusStore, SharedStore};

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use signals::{RandomSignals, SignalSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Campus incidents, emergencies, patrols and location scores.
    pub store: SharedStore,
    /// Simulated device signals.
    pub signals: Arc<dyn SignalSource>,
}

impl AppState {
    /// Creates state over a freshly seeded campus store.
    #[must_use]
    pub fn new(signals: Arc<dyn SignalSource>) -> Self {
        Self {
            store: SharedStore::new(CampusStore::seeded()),
            signals,
        }
    }
}

/// Registers the `/api` routes, the legacy `/report` form endpoint and the
/// JSON body error handler.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into()),
    )
    .route("/report", web::post().to(handlers::report_incident))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/report-incident", web::post().to(handlers::report_incident))
            .route("/trigger-emergency", web::post().to(handlers::trigger_emergency))
            .route("/cancel-emergency", web::post().to(handlers::cancel_emergency))
            .route("/voice-command", web::post().to(handlers::voice_command))
            .route("/get-safety-data", web::get().to(handlers::safety_data))
            .route("/get-location", web::get().to(handlers::location))
            .route("/update-battery", web::post().to(handlers::update_battery))
            .route("/start-safewalk", web::post().to(handlers::start_safewalk))
            .route("/profile", web::get().to(handlers::profile))
            .route("/dashboard", web::get().to(handlers::profile))
            .route("/locations", web::get().to(handlers::locations))
            .route("/shop/products", web::get().to(handlers::products))
            .route("/admin/emergencies", web::get().to(handlers::admin_emergencies))
            .route("/admin/overview", web::get().to(handlers::admin_overview))
            .route("/admin/update-patrol", web::post().to(handlers::update_patrol)),
    );
}

/// Starts the campus safety API server.
///
/// Seeds the in-memory store and serves the API and the static frontend
/// until the server is shut down. This is a regular async function; the
/// caller provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the server fails to bind or encounters a
/// runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    log::info!("Seeding campus store...");
    let state = web::Data::new(AppState::new(Arc::new(RandomSignals)));

    let ServerConfig {
        bind_addr,
        port,
        static_dir,
    } = config;

    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found; only the API will be served",
            static_dir.display()
        );
    }

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
            // Serve frontend static files
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await?;

    Ok(())
}
