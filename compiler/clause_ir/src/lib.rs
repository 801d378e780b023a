//! Clause IR - Header Data Model
//!
//! This crate contains the data handed to the clause formatter by the upstream
//! parser and comment indexer:
//! - Fragments: opaque rendered text with a precomputed display width
//! - Items: one `expr [as target]` entry of a compound-statement header
//! - Anchors and comments bound to them
//! - Statements: the validated, immutable unit the formatter consumes
//!
//! # Design Philosophy
//!
//! - **Structural anchors**: Comments are keyed by `Anchor` (a variant plus an
//!   item index), never by rendered offsets, so layout changes cannot move them.
//! - **Validate once**: `Statement::new` checks the upstream contract. Everything
//!   downstream reads the statement without re-checking it.
//! - **Read-only**: Nothing here is mutated after construction, so statements can
//!   be formatted from many threads at once.

mod comment;
mod fragment;
mod item;
mod statement;

pub use comment::{Anchor, AnchorComments, Comment, Placement};
pub use fragment::Fragment;
pub use item::Item;
pub use statement::{Statement, StatementError};
