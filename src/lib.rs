//! STEM KEEA site backend.
//!
//! An in-memory content store for news, programs, events, team and gallery records, the
//! filtered views each public page shows, and a REST API over both. Nothing is persisted:
//! the store lives as long as the process.

pub mod api;
pub mod config;
pub mod errors;
pub mod filters;
pub mod gallery;
pub mod models;
pub mod session;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use gallery::GalleryViewer;
use session::AdminSession;
use store::ContentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ContentStore>>,
    pub gallery: Arc<RwLock<GalleryViewer>>,
    pub session: Arc<AdminSession>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: ContentStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            gallery: Arc::new(RwLock::new(GalleryViewer::new())),
            session: Arc::new(AdminSession::new(config.admin.clone())),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let session = state.session.clone();

    // Mutating routes, only reachable with an operator logged in
    let admin_routes = Router::new()
        .route("/dashboard", get(api::get_dashboard))
        .route("/news", get(api::list_all_news).post(api::create_news))
        .route("/news/{id}", put(api::update_news).delete(api::delete_news))
        .route(
            "/news/{id}/toggle-published",
            post(api::toggle_news_published),
        )
        .route(
            "/programs",
            get(api::list_all_programs).post(api::create_program),
        )
        .route(
            "/programs/{id}",
            put(api::update_program).delete(api::delete_program),
        )
        .route("/events", get(api::list_all_events).post(api::create_event))
        .route(
            "/events/{id}",
            put(api::update_event).delete(api::delete_event),
        )
        .layer(middleware::from_fn(move |req, next| {
            session::admin_gate_layer(session.clone(), req, next)
        }));

    let api_routes = Router::new()
        // Datastore
        .route("/datastore", get(api::get_datastore))
        .route("/datastore/revision", get(api::get_revision))
        // News
        .route("/news", get(api::list_news))
        .route("/news/latest", get(api::list_latest_news))
        .route("/news/{slug}", get(api::get_news_by_slug))
        // Programs, events, team
        .route("/programs", get(api::list_programs))
        .route("/events", get(api::list_events))
        .route("/team", get(api::list_team))
        // Gallery
        .route("/gallery", get(api::get_gallery))
        .route("/gallery/filter", put(api::set_gallery_filter))
        .route("/gallery/lightbox", get(api::get_lightbox))
        .route("/gallery/lightbox/open", post(api::open_lightbox))
        .route("/gallery/lightbox/next", post(api::next_image))
        .route("/gallery/lightbox/prev", post(api::prev_image))
        .route("/gallery/lightbox/close", post(api::close_lightbox))
        .route("/gallery/lightbox/key", post(api::lightbox_key))
        // Session
        .route("/session", get(api::get_session))
        .route("/session/login", post(api::login))
        .route("/session/logout", post(api::logout))
        .nest("/admin", admin_routes);

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
