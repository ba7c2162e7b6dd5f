//! HTTP front end: a single form at `/`.

mod handlers;
mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::blacklist::Blacklist;
use crate::config::DEFAULT_MAX_BODY_BYTES;

pub use views::ERROR_MESSAGE;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub blacklist: Arc<Blacklist>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(blacklist: Blacklist) -> Self {
        Self {
            blacklist: Arc::new(blacklist),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_handler).post(handlers::submit_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state)
}
