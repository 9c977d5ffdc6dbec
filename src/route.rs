use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handler::{
        delete_note_handler, get_note_handler, get_notes_handler, post_note_handler,
        put_note_handler,
    },
    AppState,
};

/// Note routes, served both at the root and under `/api`.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let notes = Router::new()
        .route("/notes", get(get_notes_handler).post(post_note_handler))
        .route(
            "/notes/:id",
            get(get_note_handler)
                .put(put_note_handler)
                .delete(delete_note_handler),
        );

    Router::new()
        .merge(notes.clone())
        .nest("/api", notes)
        .with_state(app_state)
}
