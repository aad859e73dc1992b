//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory note collection.
//! - Orchestrate repository writes behind use-case level APIs.

pub mod note_store;
