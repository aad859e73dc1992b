//! Note store: authoritative collection, mutations, derived views.
//!
//! # Responsibility
//! - Own the in-memory note collection and the session search query.
//! - Write the full collection through to the repository on every mutation.
//! - Recompute derived views (filtered/pinned/other) on each read.
//!
//! # Invariants
//! - The in-memory collection is the source of truth for the session; the
//!   repository is a write-through mirror read once at construction.
//! - Every mutation completes its persistence write before returning.
//! - Mutations on unknown ids are silent no-ops.
//! - `toggle_pin` flips `pinned` without refreshing `updated_at`; `update`
//!   always refreshes `updated_at`.
//! - The search query is session state and is never persisted.

use crate::model::note::{now_epoch_ms, Note, NoteColor, NoteId, NotePatch};
use crate::repo::note_repo::NoteRepository;
use crate::search::filter::{normalize_query, note_matches};
use log::info;

/// In-memory note store over a write-through repository.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
    search_query: String,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Loads the persisted collection and seeds sample notes when empty.
    ///
    /// Seeding runs at most once per empty-storage initialization and
    /// persists the samples immediately.
    pub fn new(repo: R) -> Self {
        let mut notes = repo.load_notes();
        if notes.is_empty() {
            notes = sample_notes();
            repo.save_notes(&notes);
            info!(
                "event=store_seed module=service status=ok count={}",
                notes.len()
            );
        }

        Self {
            repo,
            notes,
            search_query: String::new(),
        }
    }

    /// Full collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Point lookup by id. No side effects.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates a note, appends it and persists the collection.
    ///
    /// Returns the generated stable id.
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
    ) -> NoteId {
        let note = Note::new(title, content, color);
        let id = note.id;
        self.notes.push(note);
        self.repo.save_notes(&self.notes);
        id
    }

    /// Merges the patch into the matching note and refreshes `updated_at`.
    ///
    /// Unknown ids are silent no-ops; the collection is persisted either way.
    pub fn update_note(&mut self, id: NoteId, patch: &NotePatch) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            patch.apply_to(note);
            note.updated_at = now_epoch_ms();
        }
        self.repo.save_notes(&self.notes);
    }

    /// Removes the matching note if present and persists the collection.
    pub fn delete_note(&mut self, id: NoteId) {
        self.notes.retain(|note| note.id != id);
        self.repo.save_notes(&self.notes);
    }

    /// Flips `pinned` on the matching note and persists the collection.
    ///
    /// Deliberately leaves `updated_at` untouched so pin toggles do not
    /// reorder recency-sorted displays.
    pub fn toggle_pin(&mut self, id: NoteId) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            note.pinned = !note.pinned;
        }
        self.repo.save_notes(&self.notes);
    }

    /// Sets the session search query. Never persisted.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Clears the session search query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// Whether a non-blank search query is active.
    pub fn is_searching(&self) -> bool {
        normalize_query(&self.search_query).is_some()
    }

    /// Collection filtered by the current query; the full collection when
    /// no search is active.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        match normalize_query(&self.search_query) {
            Some(query) => self
                .notes
                .iter()
                .filter(|note| note_matches(note, &query))
                .collect(),
            None => self.notes.iter().collect(),
        }
    }

    /// Pinned subset of [`Self::filtered_notes`].
    pub fn pinned_notes(&self) -> Vec<&Note> {
        self.filtered_notes()
            .into_iter()
            .filter(|note| note.pinned)
            .collect()
    }

    /// Unpinned subset of [`Self::filtered_notes`].
    pub fn other_notes(&self) -> Vec<&Note> {
        self.filtered_notes()
            .into_iter()
            .filter(|note| !note.pinned)
            .collect()
    }
}

/// Illustrative starter notes for a first launch on empty storage.
fn sample_notes() -> Vec<Note> {
    let mut welcome = Note::new(
        "Welcome!",
        "This is your first note. Open it to start editing.",
        NoteColor::Blue,
    );
    welcome.pinned = true;
    welcome.tags = vec!["welcome".to_string()];

    let mut ideas = Note::new(
        "Project ideas",
        "\u{2022} Add a dark theme\n\u{2022} Implement search\n\u{2022} Add categories",
        NoteColor::Green,
    );
    ideas.tags = vec!["work".to_string(), "ideas".to_string()];

    let mut groceries = Note::new("Groceries", "Milk, bread, eggs, fruit", NoteColor::Yellow);
    groceries.tags = vec!["shopping".to_string()];

    vec![welcome, ideas, groceries]
}
