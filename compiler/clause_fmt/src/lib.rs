//! Clause Formatter
//!
//! Layout core for compound-statement headers with a parenthesized item list,
//! such as `with a as x, b as y:`.
//!
//! # Architecture
//!
//! Formatting a header is a two-step pure computation:
//!
//! 1. **Decide**: pick Flat, Collapsed, or Expanded from user-intent signals
//!    (magic trailing comma, comments) and the line width budget
//! 2. **Emit**: render the chosen layout, placing every comment by its anchor
//!
//! Headers that cannot be rewritten safely are reported as
//! [`Unsupported`] and passed through as written.
//!
//! Statements share nothing, so [`format_statements`] formats a batch in
//! parallel.
//!
//! # Modules
//!
//! - [`layout`]: Layout selection rules
//! - [`header`]: Header emission with comment placement
//! - [`width`]: Single-line width of headers
//! - [`emitter`]: Output abstraction for string output
//! - [`context`]: Configuration and emission state

pub mod context;
pub mod emitter;
pub mod header;
pub mod layout;
pub mod width;

pub use context::{FormatConfig, FormatContext, INDENT_WIDTH, MAX_LINE_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use header::{emit, HeaderEmitter};
pub use layout::{decide, Decision, LayoutDecision, LayoutMode, Unsupported};

use clause_ir::Statement;
use rayon::prelude::*;

/// Result of formatting one header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormattedHeader {
    /// The header was rendered with `layout`.
    Formatted {
        text: String,
        layout: LayoutDecision,
    },

    /// The header must be kept as written.
    ///
    /// `text` is the statement's source text, when the parser supplied it.
    Verbatim {
        text: Option<String>,
        reason: Unsupported,
    },
}

impl FormattedHeader {
    /// Get the text to write in place of the header.
    pub fn text(&self) -> Option<&str> {
        match self {
            FormattedHeader::Formatted { text, .. } => Some(text),
            FormattedHeader::Verbatim { text, .. } => text.as_deref(),
        }
    }

    /// Check if the header was left as written.
    pub fn is_verbatim(&self) -> bool {
        matches!(self, FormattedHeader::Verbatim { .. })
    }

    /// Get the layout used, if the header was formatted.
    pub fn layout(&self) -> Option<LayoutDecision> {
        match self {
            FormattedHeader::Formatted { layout, .. } => Some(*layout),
            FormattedHeader::Verbatim { .. } => None,
        }
    }
}

/// Format one header: decide its layout, then emit it.
pub fn format_statement(statement: &Statement, config: &FormatConfig) -> FormattedHeader {
    match decide(statement, config) {
        Decision::Layout(layout) => FormattedHeader::Formatted {
            text: emit(statement, layout, config),
            layout,
        },
        Decision::Unsupported(reason) => FormattedHeader::Verbatim {
            text: statement.source_text().map(str::to_owned),
            reason,
        },
    }
}

/// Format many independent headers in parallel.
///
/// Results are in input order.
pub fn format_statements(statements: &[Statement], config: &FormatConfig) -> Vec<FormattedHeader> {
    statements
        .par_iter()
        .map(|statement| format_statement(statement, config))
        .collect()
}
