use tracing::info;

use crate::model::NewNote;
use crate::store::{NoteStore, StoreResult};

pub const DEMO_TITLE: &str = "Example note";
pub const DEMO_CONTENT: &str = "This is the content of the example note.";

/// Inserts one example note when the store is empty. Returns whether a
/// note was written.
pub async fn seed_demo_data(store: &dyn NoteStore) -> StoreResult<bool> {
    if store.count().await? > 0 {
        return Ok(false);
    }

    let note = store
        .insert(NewNote {
            title: DEMO_TITLE.to_string(),
            content: DEMO_CONTENT.to_string(),
        })
        .await?;
    info!(note_id = note.id, "seeded demo note");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryNoteStore;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryNoteStore::new();

        assert!(seed_demo_data(&store).await.unwrap());
        assert!(!seed_demo_data(&store).await.unwrap());

        let notes = store.find_all().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, DEMO_TITLE);
        assert_eq!(notes[0].content, DEMO_CONTENT);
    }

    #[tokio::test]
    async fn leaves_populated_store_alone() {
        let store = MemoryNoteStore::new();
        store
            .insert(NewNote {
                title: "mine".to_string(),
                content: "already here".to_string(),
            })
            .await
            .unwrap();

        assert!(!seed_demo_data(&store).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
