use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use envelope::{ApiResponse, Code};
use uuid::Uuid;

use crate::{
    api::state::NotesAppState,
    domain::note::{CreateNote, Note},
    error::NotesServiceError,
};

#[utoipa::path(
    get,
    path = "/api/v1/notes",
    tag = "Notes",
    operation_id = "list_notes",
    responses(
        (status = 200, description = "List all notes", body = ApiResponse<Vec<Note>>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_all(State(state): State<Arc<NotesAppState>>) -> Response {
    match state.note_repo.find_all().await {
        Ok(notes) => state
            .responder
            .success_response(StatusCode::OK, Code::Ok, "notes listed", notes)
            .into_response(),
        Err(e) => e.respond(&state.responder),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    operation_id = "get_note",
    params(
        ("id" = Uuid, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = ApiResponse<Note>),
        (status = 404, description = "Note not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_by_id(
    State(state): State<Arc<NotesAppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return invalid_id(&state, rejection),
    };

    match state.note_repo.find_by_id(id).await {
        Ok(Some(note)) => state
            .responder
            .success_response(StatusCode::OK, Code::Ok, "note found", note)
            .into_response(),
        Ok(None) => NotesServiceError::NotFound("Note not found".to_string())
            .respond(&state.responder),
        Err(e) => e.respond(&state.responder),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/notes",
    tag = "Notes",
    operation_id = "create_note",
    request_body = CreateNote,
    responses(
        (status = 201, description = "Note created", body = ApiResponse<Note>),
        (status = 400, description = "Invalid note")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<NotesAppState>>,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> Response {
    let note = match payload {
        Ok(Json(note)) => note,
        Err(rejection) => {
            return NotesServiceError::BadRequest(rejection.body_text()).respond(&state.responder);
        }
    };
    if let Err(e) = note.validate() {
        return e.respond(&state.responder);
    }

    match state.note_repo.create(note).await {
        Ok(note) => state
            .responder
            .success_response(StatusCode::CREATED, Code::Created, "note created", note)
            .into_response(),
        Err(e) => e.respond(&state.responder),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    operation_id = "delete_note",
    params(
        ("id" = Uuid, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted, data is null"),
        (status = 404, description = "Note not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<NotesAppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return invalid_id(&state, rejection),
    };

    match state.note_repo.delete(id).await {
        Ok(()) => state
            .responder
            .success_response(StatusCode::OK, Code::Ok, "note deleted", ())
            .into_response(),
        Err(e) => e.respond(&state.responder),
    }
}

fn invalid_id(state: &NotesAppState, rejection: PathRejection) -> Response {
    NotesServiceError::BadRequest(rejection.body_text()).respond(&state.responder)
}
