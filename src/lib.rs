//! Hotel booking form: validation, stay pricing and persistence.

pub mod booking;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::db::BookingStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::form::booking_form))
        .route("/health", get(health))
        .merge(booking::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
