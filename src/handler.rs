use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{model::NoteId, request::NoteInput, response::*, AppState};

pub async fn get_notes_handler(
    State(data): State<Arc<AppState>>,
) -> Result<Json<Vec<NoteView>>, ApiError> {
    let notes = data.notes.get_all().await?;
    Ok(Json(notes))
}

pub async fn get_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> Result<Json<NoteView>, ApiError> {
    let note = data.notes.get_by_id(id).await?;
    Ok(Json(note))
}

pub async fn post_note_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<NoteInput>,
) -> Result<Json<NoteView>, ApiError> {
    body.validate()?;
    let created = data.notes.create(body).await?;
    Ok(Json(created))
}

pub async fn put_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
    Json(body): Json<NoteInput>,
) -> Result<Json<NoteView>, ApiError> {
    body.validate()?;
    let updated = data.notes.update(id, body).await?;
    Ok(Json(updated))
}

pub async fn delete_note_handler(
    State(data): State<Arc<AppState>>,
    Path(id): Path<NoteId>,
) -> Result<StatusCode, ApiError> {
    data.notes.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}
