//! Header Layout Selection
//!
//! Decides how a header's item list is laid out before anything is emitted.
//!
//! # Architecture
//!
//! 1. **`LayoutMode`**: Flat, Collapsed, or Expanded
//! 2. **`LayoutDecision`**: The mode plus delimiter and trailing-comma choices
//! 3. **`decide()`**: Maps a statement and config to a [`Decision`], or to
//!    [`Unsupported`] for headers that must be left exactly as written
//!
//! # Rule Order
//!
//! Rules are tried in priority order and the first match wins:
//!
//! 1. Forced expansion (magic trailing comma, dangling or line-ending comments)
//! 2. Single-item collapse (drop redundant parentheses around a lone item)
//! 3. Flat (everything fits on one line)
//! 4. Expanded (width overflow)
//!
//! User-intent signals come before width so that re-formatting an expanded
//! header never collapses it again.

mod decision;
mod mode;
mod selector;

pub use decision::{Decision, LayoutDecision, Unsupported};
pub use mode::LayoutMode;
pub use selector::decide;
