//! Note search.
//!
//! # Responsibility
//! - Normalize user queries and match them against note text.
//!
//! # Invariants
//! - Matching is case-insensitive and substring-based over title/content.
//! - Blank queries never match-filter; they mean "no search active".

pub mod filter;
