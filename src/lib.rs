//! Notes backend: validated create/read/update/delete over a single note
//! entity, served over HTTP with axum.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod request;
pub mod response;
pub mod route;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use model::{NewNote, Note, NoteId};
pub use request::NoteInput;
pub use response::{ApiError, NoteView};
pub use route::create_router;
pub use service::NoteService;
pub use store::{MemoryNoteStore, NoteStore, PgNoteStore, StoreError, StoreResult};

pub struct AppState {
    pub notes: NoteService,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        AppState {
            notes: NoteService::new(store),
        }
    }
}
