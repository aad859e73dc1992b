//! Storage-slot adapters over the SQLite `slots` table.
//!
//! # Responsibility
//! - Keep slot SQL inside the persistence boundary.
//! - Provide fail-open read and fire-and-forget write adapters for the
//!   notes collection and the theme preference.
//!
//! # Invariants
//! - Callers never observe storage errors: reads degrade to "absent",
//!   writes are swallowed. Failures are logged with structured events.
//! - Every save overwrites the whole slot; there are no partial writes.

use rusqlite::{params, Connection, OptionalExtension};

pub mod note_repo;
pub mod theme_repo;

/// Reads one slot value, treating any failure as an absent slot.
pub(crate) fn read_slot(conn: &Connection, key: &str) -> Option<String> {
    let result = conn
        .query_row(
            "SELECT value FROM slots WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional();

    match result {
        Ok(value) => value,
        Err(err) => {
            log::warn!("event=slot_read module=repo status=error key={key} error={err}");
            None
        }
    }
}

/// Overwrites one slot value, swallowing any failure.
pub(crate) fn write_slot(conn: &Connection, key: &str, value: &str) {
    let result = conn.execute(
        "INSERT INTO slots (key, value, updated_at)
         VALUES (?1, ?2, strftime('%s', 'now') * 1000)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![key, value],
    );

    if let Err(err) = result {
        log::error!("event=slot_write module=repo status=error key={key} error={err}");
    }
}
