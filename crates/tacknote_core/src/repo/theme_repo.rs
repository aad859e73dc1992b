//! Theme preference slot adapter.
//!
//! Same failure policy as the notes slot: reads degrade to "unset", writes
//! are fire-and-forget. The fallback for an unset preference belongs to the
//! presentation layer, not here.

use crate::model::theme::ThemePreference;
use crate::repo::{read_slot, write_slot};
use rusqlite::Connection;

/// Slot key holding the theme preference.
pub const THEME_SLOT_KEY: &str = "notes-theme";

/// Persistence contract for the theme preference.
pub trait ThemeRepository {
    /// Loads the stored preference; `None` when absent or unrecognized.
    fn load_theme(&self) -> Option<ThemePreference>;
    /// Overwrites the stored preference. Fire-and-forget.
    fn save_theme(&self, theme: ThemePreference);
}

/// SQLite-backed theme slot adapter.
pub struct SqliteThemeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteThemeRepository<'conn> {
    /// Constructs an adapter over a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ThemeRepository for SqliteThemeRepository<'_> {
    fn load_theme(&self) -> Option<ThemePreference> {
        read_slot(self.conn, THEME_SLOT_KEY)
            .and_then(|value| ThemePreference::parse(value.trim()))
    }

    fn save_theme(&self, theme: ThemePreference) {
        write_slot(self.conn, THEME_SLOT_KEY, theme.as_str());
    }
}
