//! Note operations.
//!
//! Payloads reaching this layer have already passed the validation rules.
//! Existence is always checked here with a lookup before any write, so an
//! absent id surfaces as [`ServiceError::NotFound`] and never reaches
//! `save` or `delete`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{NewNote, Note, NoteId};
use crate::request::NoteInput;
use crate::response::NoteView;
use crate::store::NoteStore;

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        NoteService { store }
    }

    pub async fn create(&self, input: NoteInput) -> ServiceResult<NoteView> {
        let stored = self.store.insert(NewNote::from(input)).await?;
        info!(note_id = stored.id, "note created");
        Ok(NoteView::from(&stored))
    }

    pub async fn get_by_id(&self, id: NoteId) -> ServiceResult<NoteView> {
        let note = self.find_existing(id).await?;
        debug!(note_id = id, "note fetched");
        Ok(NoteView::from(&note))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<NoteView>> {
        let notes = self.store.find_all().await?;
        debug!(count = notes.len(), "notes listed");
        Ok(notes.iter().map(NoteView::from).collect())
    }

    /// Replaces title and content and restamps `updated_at`. `id` and
    /// `created_at` stay as stored.
    pub async fn update(&self, id: NoteId, input: NoteInput) -> ServiceResult<NoteView> {
        let mut note = self.find_existing(id).await?;
        note.title = input.title;
        note.content = input.content;
        note.updated_at = Utc::now().max(note.created_at);

        let stored = self.store.save(&note).await?;
        info!(note_id = id, "note updated");
        Ok(NoteView::from(&stored))
    }

    pub async fn delete_by_id(&self, id: NoteId) -> ServiceResult<()> {
        let note = self.find_existing(id).await?;
        self.store.delete(&note).await?;
        info!(note_id = id, "note deleted");
        Ok(())
    }

    async fn find_existing(&self, id: NoteId) -> ServiceResult<Note> {
        match self.store.find_by_id(id).await? {
            Some(note) => Ok(note),
            None => {
                warn!(note_id = id, "note not found");
                Err(ServiceError::NotFound(id))
            }
        }
    }
}
