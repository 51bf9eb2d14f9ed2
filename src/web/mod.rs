use axum::{
    Router,
    http::Method,
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::repositories::{AlbumRepository, MediaRepository, TagRepository};
use crate::db::repository::Repository;
use crate::models::{Album, Media, Tag};
use crate::web::alert::AlertHeaders;

pub mod alert;
pub mod error;
pub mod routes;

pub use error::AppError;

/// One repository per collection, each handed to its own handlers.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn Repository<Album>>,
    pub media: Arc<dyn Repository<Media>>,
    pub tags: Arc<dyn Repository<Tag>>,
    pub alerts: AlertHeaders,
}

impl AppState {
    pub fn from_database(db: DatabaseConnection, alerts: AlertHeaders) -> Self {
        Self {
            albums: Arc::new(AlbumRepository::new(db.clone())),
            media: Arc::new(MediaRepository::new(db.clone())),
            tags: Arc::new(TagRepository::new(db)),
            alerts,
        }
    }
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_axum_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .merge(routes::resource_router(app_state.albums, app_state.alerts.clone()))
        .merge(routes::resource_router(app_state.media, app_state.alerts.clone()))
        .merge(routes::resource_router(app_state.tags, app_state.alerts))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
