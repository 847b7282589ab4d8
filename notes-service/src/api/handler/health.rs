use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use envelope::Code;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::NotesAppState;

/// Payload of the `/headpat` health check.
#[derive(Debug, Serialize, ToSchema)]
pub struct HeadpatResponse {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/headpat",
    tag = "Health",
    operation_id = "headpat",
    responses(
        (status = 200, description = "Service is up", body = envelope::ApiResponse<HeadpatResponse>)
    )
)]
pub async fn headpat(State(state): State<Arc<NotesAppState>>) -> Response {
    state
        .responder
        .success_response(
            StatusCode::OK,
            Code::Ok,
            "nyaa~! all systems operational, senpai! (=^-w-^=)",
            HeadpatResponse { status: "up" },
        )
        .into_response()
}

/// Envelope for requests that match no route.
pub async fn not_found(State(state): State<Arc<NotesAppState>>) -> Response {
    state
        .responder
        .error_response(
            Some(StatusCode::NOT_FOUND),
            Some(Code::NotFound),
            "route not found",
            None,
        )
        .into_response()
}

/// Envelope for a known route called with a method it does not serve.
pub async fn method_not_allowed(State(state): State<Arc<NotesAppState>>) -> Response {
    state
        .responder
        .error_response(
            Some(StatusCode::METHOD_NOT_ALLOWED),
            Some(Code::BadRequest),
            "method not allowed",
            None,
        )
        .into_response()
}
