use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::{
    handler::{health, note},
    state::NotesAppState,
};

/// Builds the service routes; every response, including unmatched routes
/// and unsupported methods, is written through the state's responder.
pub fn build_router(state: Arc<NotesAppState>) -> Router {
    Router::new()
        .route("/headpat", get(health::headpat))
        .route("/api/v1/notes", get(note::find_all).post(note::create))
        .route(
            "/api/v1/notes/{id}",
            get(note::find_by_id).delete(note::delete),
        )
        .fallback(health::not_found)
        .method_not_allowed_fallback(health::method_not_allowed)
        .with_state(state)
}
