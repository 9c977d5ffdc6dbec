//! Persistence boundary for notes.
//!
//! The service talks to storage only through [`NoteStore`], so the backend
//! is picked once at startup and can be swapped in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{NewNote, Note, NoteId};

pub mod memory;
pub mod postgres;

pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Stores a new note under a fresh id, stamping both timestamps with
    /// the same instant.
    async fn insert(&self, note: NewNote) -> StoreResult<Note>;

    /// Overwrites `title`, `content` and `updated_at` of the row with
    /// `note.id`. `created_at` is never written here.
    async fn save(&self, note: &Note) -> StoreResult<Note>;

    async fn find_by_id(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// All notes in creation order.
    async fn find_all(&self) -> StoreResult<Vec<Note>>;

    async fn delete(&self, note: &Note) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<i64>;
}
