use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{NoteStore, StoreResult};
use crate::model::{NewNote, Note, NoteId};

/// In-process store. Ids start at 1 and are never reused, and the
/// `BTreeMap` keeps iteration in creation order.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: NoteId,
    notes: BTreeMap<NoteId, Note>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let now = Utc::now();
        let stored = Note {
            id: state.last_id,
            title: note.title,
            content: note.content,
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, note: &Note) -> StoreResult<Note> {
        let mut state = self.state.write().await;
        let stored = match state.notes.get_mut(&note.id) {
            Some(existing) => {
                existing.title = note.title.clone();
                existing.content = note.content.clone();
                existing.updated_at = note.updated_at;
                existing.clone()
            }
            // Overwriting a row that vanished between lookup and write
            // recreates it under the same id.
            None => {
                state.last_id = state.last_id.max(note.id);
                state.notes.insert(note.id, note.clone());
                note.clone()
            }
        };
        Ok(stored)
    }

    async fn find_by_id(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.state.read().await.notes.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.state.read().await.notes.values().cloned().collect())
    }

    async fn delete(&self, note: &Note) -> StoreResult<()> {
        self.state.write().await.notes.remove(&note.id);
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.state.read().await.notes.len() as i64)
    }
}
