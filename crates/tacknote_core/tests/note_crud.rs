use rusqlite::{params, Connection};
use std::collections::HashSet;
use tacknote_core::db::open_db_in_memory;
use tacknote_core::{
    NoteColor, NoteId, NotePatch, NoteStore, SqliteNoteRepository, NOTES_SLOT_KEY,
};

/// Builds a store over the connection and clears the seeded sample notes so
/// tests start from a genuinely empty collection.
fn empty_store(conn: &Connection) -> NoteStore<SqliteNoteRepository<'_>> {
    let mut store = NoteStore::new(SqliteNoteRepository::new(conn));
    let seeded: Vec<NoteId> = store.notes().iter().map(|note| note.id).collect();
    for id in seeded {
        store.delete_note(id);
    }
    store
}

/// Rewrites every stored note's timestamps to a fixed value, so a later
/// mutation's refresh (or lack of one) is observable.
fn rewrite_slot_timestamps(conn: &Connection, epoch_ms: i64) {
    let raw: String = conn
        .query_row(
            "SELECT value FROM slots WHERE key = ?1;",
            [NOTES_SLOT_KEY],
            |row| row.get(0),
        )
        .unwrap();
    let mut notes: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for note in notes.as_array_mut().unwrap() {
        note["createdAt"] = epoch_ms.into();
        note["updatedAt"] = epoch_ms.into();
    }
    conn.execute(
        "UPDATE slots SET value = ?2 WHERE key = ?1;",
        params![NOTES_SLOT_KEY, notes.to_string()],
    )
    .unwrap();
}

#[test]
fn add_increments_count_and_assigns_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let mut ids = HashSet::new();
    for index in 0..3 {
        let before = store.notes().len();
        let id = store.add_note(format!("note {index}"), "", NoteColor::Blue);
        assert_eq!(store.notes().len(), before + 1);
        assert!(ids.insert(id), "id {id} collided");
    }
}

#[test]
fn add_sets_note_defaults() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);

    let id = store.add_note("Fresh", "body", NoteColor::Pink);
    let note = store.get(id).unwrap();

    assert_eq!(note.title, "Fresh");
    assert_eq!(note.content, "body");
    assert_eq!(note.color, NoteColor::Pink);
    assert!(!note.pinned);
    assert!(note.tags.is_empty());
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn update_merges_patch_and_refreshes_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let id = {
        let mut store = empty_store(&conn);
        store.add_note("Original", "unchanged body", NoteColor::Blue)
    };
    rewrite_slot_timestamps(&conn, 1_000);

    let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
    store.update_note(
        id,
        &NotePatch {
            title: Some("Renamed".to_string()),
            ..NotePatch::default()
        },
    );

    let note = store.get(id).unwrap();
    assert_eq!(note.title, "Renamed");
    assert_eq!(note.content, "unchanged body");
    assert_eq!(note.created_at, 1_000);
    assert!(note.updated_at > 1_000);
}

#[test]
fn update_unknown_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);
    store.add_note("Only", "note", NoteColor::Blue);
    let snapshot: Vec<_> = store.notes().to_vec();

    store.update_note(
        NoteId::new_v4(),
        &NotePatch {
            title: Some("ghost".to_string()),
            ..NotePatch::default()
        },
    );

    assert_eq!(store.notes(), snapshot.as_slice());
}

#[test]
fn delete_then_get_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);
    let id = store.add_note("Doomed", "", NoteColor::Gray);

    store.delete_note(id);

    assert!(store.get(id).is_none());
    assert!(store.notes().is_empty());
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);
    store.add_note("Kept", "", NoteColor::Blue);
    let snapshot: Vec<_> = store.notes().to_vec();

    store.delete_note(NoteId::new_v4());

    assert_eq!(store.notes(), snapshot.as_slice());
}

#[test]
fn toggle_pin_flips_twice_back_and_never_touches_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let id = {
        let mut store = empty_store(&conn);
        store.add_note("Pinnable", "", NoteColor::Blue)
    };
    rewrite_slot_timestamps(&conn, 2_000);

    let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
    assert!(!store.get(id).unwrap().pinned);

    store.toggle_pin(id);
    let pinned = store.get(id).unwrap();
    assert!(pinned.pinned);
    assert_eq!(pinned.updated_at, 2_000);

    store.toggle_pin(id);
    let unpinned = store.get(id).unwrap();
    assert!(!unpinned.pinned);
    assert_eq!(unpinned.updated_at, 2_000);
}

#[test]
fn toggle_pin_unknown_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn);
    store.add_note("Stable", "", NoteColor::Blue);
    let snapshot: Vec<_> = store.notes().to_vec();

    store.toggle_pin(NoteId::new_v4());

    assert_eq!(store.notes(), snapshot.as_slice());
}
