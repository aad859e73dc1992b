//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its serialized shape.
//! - Provide the creation constructor and the partial-update carrier.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a note and never reused.
//! - `created_at` is set once at construction and never changes.
//! - `color` deserialization is lossy: unrecognized values become
//!   [`NoteColor::Blue`] instead of failing the whole record.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Closed color tag set for notes.
///
/// Stored as a lowercase string on the wire. Values outside this set are
/// coerced to [`NoteColor::Blue`] when read back, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
    Gray,
}

impl NoteColor {
    /// Parses a stored color string. Returns `None` for foreign values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "pink" => Some(Self::Pink),
            "purple" => Some(Self::Purple),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }

    /// Parses a stored color string, falling back to the default.
    pub fn from_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Returns the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }

    /// All members of the enumeration, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Blue,
            Self::Green,
            Self::Yellow,
            Self::Pink,
            Self::Purple,
            Self::Gray,
        ]
    }
}

impl Serialize for NoteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NoteColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_lossy(&value))
    }
}

/// Canonical note record.
///
/// The wire shape uses camelCase field names and epoch-millisecond
/// timestamps; `pinned` and `tags` are optional on the wire and default to
/// `false` / empty for records written by older builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable id used for lookup, mutation targeting and display identity.
    pub id: NoteId,
    pub title: String,
    /// Body text; may be empty or multi-line.
    pub content: String,
    #[serde(default)]
    pub color: NoteColor,
    /// Creation time in epoch milliseconds. Never changes after construction.
    pub created_at: i64,
    /// Last content mutation time in epoch milliseconds.
    pub updated_at: i64,
    #[serde(default)]
    pub pinned: bool,
    /// Ordered user tags, lowercase by convention but not enforced here.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Creates a new note with a generated stable id.
    ///
    /// # Invariants
    /// - Both timestamps are set to the current time.
    /// - `pinned` starts as `false`; `tags` starts empty.
    pub fn new(title: impl Into<String>, content: impl Into<String>, color: NoteColor) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            color,
            created_at: now,
            updated_at: now,
            pinned: false,
            tags: Vec::new(),
        }
    }
}

/// Partial-update carrier for [`Note`] mutations.
///
/// Absent fields leave the note untouched; present fields replace the
/// current value wholesale (tags are replaced, not merged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<NoteColor>,
    pub pinned: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    /// Applies every present field to the target note.
    ///
    /// Does not touch timestamps; callers own the `updated_at` refresh.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(color) = self.color {
            note.color = color;
        }
        if let Some(pinned) = self.pinned {
            note.pinned = pinned;
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
    }
}

/// Current wall-clock time in epoch milliseconds.
///
/// A clock before the Unix epoch degrades to 0 instead of panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
