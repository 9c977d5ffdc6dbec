use chrono::prelude::*;

pub type NoteId = i64;

/// Persisted note row. Only a store hands these out, so `id` and both
/// timestamps are always populated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note that has not been stored yet: no identity, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}
