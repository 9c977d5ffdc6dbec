use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::info;

use super::{NoteStore, StoreResult};
use crate::model::{NewNote, Note, NoteId};

/// Postgres-backed store. Rows live in the `notes` table created by the
/// embedded migrations.
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    db: Pool<Postgres>,
}

impl PgNoteStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        PgNoteStore { db }
    }

    /// Opens a pool against `database_url` and brings the schema up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!(max_connections, "connected to postgres");

        sqlx::migrate!("./migrations").run(&db).await?;
        info!("notes schema is up to date");

        Ok(PgNoteStore::new(db))
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let now = Utc::now();
        let stored = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, title, content, created_at, updated_at",
        )
        .bind(note.title)
        .bind(note.content)
        .bind(now)
        .fetch_one(&self.db)
        .await?;
        Ok(stored)
    }

    async fn save(&self, note: &Note) -> StoreResult<Note> {
        let stored = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE
                SET title = EXCLUDED.title,
                    content = EXCLUDED.content,
                    updated_at = EXCLUDED.updated_at
             RETURNING id, title, content, created_at, updated_at",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at)
        .bind(note.updated_at)
        .fetch_one(&self.db)
        .await?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, created_at, updated_at FROM notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(note)
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, created_at, updated_at FROM notes ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(notes)
    }

    async fn delete(&self, note: &Note) -> StoreResult<()> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(note.id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
