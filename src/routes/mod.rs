use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::models::AppState;

pub mod contact;
pub mod health;
pub mod services;
pub mod static_files;

/// Build the full application router.
///
/// The SPA fallback matches every path, so it is registered as the router
/// fallback and therefore resolves strictly after every explicit route.
/// It is GET-only: other methods on unmatched paths get 405.
pub fn create_router(state: AppState) -> Router {
    let hero_route = format!("/{}", state.config.content.hero_image);
    Router::new()
        .route("/", get(static_files::index_handler))
        .merge(contact::create_router())
        .merge(health::create_router())
        .merge(services::create_router())
        .route(&hero_route, get(static_files::hero_image_handler))
        .fallback_service(
            get(static_files::spa_fallback_handler).with_state(state.clone()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
