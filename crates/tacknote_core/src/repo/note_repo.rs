//! Notes slot adapter.
//!
//! # Responsibility
//! - Persist the full notes collection as one serialized array in its slot.
//! - Load the collection back, degrading to empty on any failure.
//!
//! # Invariants
//! - `load_notes` never errors: absent, unreadable and malformed slots all
//!   read as the empty collection.
//! - `save_notes` rewrites the whole slot on every call and never reports
//!   failure to the caller.
//! - Color normalization happens during deserialization; normalized values
//!   are not written back until the next save.

use crate::model::note::Note;
use crate::repo::{read_slot, write_slot};
use log::{error, warn};
use rusqlite::Connection;

/// Slot key holding the serialized notes array.
pub const NOTES_SLOT_KEY: &str = "notes_app_data";

/// Persistence contract for the notes collection.
///
/// Implementations are write-through mirrors of the in-memory collection,
/// read once at startup and overwritten on every mutation.
pub trait NoteRepository {
    /// Loads the persisted collection; empty when the slot is absent,
    /// unreadable or malformed.
    fn load_notes(&self) -> Vec<Note>;
    /// Serializes and overwrites the whole collection. Fire-and-forget.
    fn save_notes(&self, notes: &[Note]);
}

/// SQLite-backed notes slot adapter.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs an adapter over a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load_notes(&self) -> Vec<Note> {
        let Some(raw) = read_slot(self.conn, NOTES_SLOT_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=error error_code=malformed_slot error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save_notes(&self, notes: &[Note]) {
        let serialized = match serde_json::to_string(notes) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!(
                    "event=notes_save module=repo status=error error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        write_slot(self.conn, NOTES_SLOT_KEY, &serialized);
    }
}
