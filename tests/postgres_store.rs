//! Postgres store tests. These need a reachable database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

use chrono::Duration;
use notes_api::{NewNote, NoteStore, PgNoteStore};

async fn setup_store() -> PgNoteStore {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
    PgNoteStore::connect(&database_url, 2)
        .await
        .expect("failed to connect to test database")
}

fn new_note(title: &str) -> NewNote {
    NewNote {
        title: title.to_string(),
        content: format!("{title} content"),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_find_save_delete_roundtrip() {
    let store = setup_store().await;

    let inserted = store.insert(new_note("pg insert")).await.unwrap();
    assert_eq!(inserted.created_at, inserted.updated_at);

    let found = store.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.title, "pg insert");

    let mut changed = found.clone();
    changed.title = "pg saved".to_string();
    changed.created_at = found.created_at - Duration::days(1);
    changed.updated_at = found.updated_at + Duration::seconds(1);
    let saved = store.save(&changed).await.unwrap();
    assert_eq!(saved.id, inserted.id);
    assert_eq!(saved.title, "pg saved");
    assert_eq!(saved.created_at, found.created_at);

    store.delete(&saved).await.unwrap();
    assert!(store.find_by_id(inserted.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn find_all_lists_in_insertion_order() {
    let store = setup_store().await;
    let before = store.count().await.unwrap();

    let first = store.insert(new_note("pg first")).await.unwrap();
    let second = store.insert(new_note("pg second")).await.unwrap();
    assert_eq!(store.count().await.unwrap(), before + 2);

    let ids: Vec<_> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    let first_pos = ids.iter().position(|id| *id == first.id).unwrap();
    let second_pos = ids.iter().position(|id| *id == second.id).unwrap();
    assert!(first_pos < second_pos);

    store.delete(&first).await.unwrap();
    store.delete(&second).await.unwrap();
}
