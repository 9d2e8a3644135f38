use axum::{
    Router,
    routing::{get, post},
};

pub mod feed;
mod health;

pub use health::health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/api/feed/consolidate", post(feed::consolidate))
        .with_state(app_state)
}
