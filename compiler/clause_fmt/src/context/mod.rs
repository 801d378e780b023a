//! Formatting Context
//!
//! Configuration for the formatter, and the state carried while a header is
//! emitted: indentation level and output.

use clause_ir::Fragment;

use crate::emitter::{Emitter, StringEmitter};

/// Default maximum line width before a header is split.
pub const MAX_LINE_WIDTH: usize = 88;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Configuration for the formatter.
///
/// Passed explicitly to every operation; nothing is read from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum line width. Single-line layouts wider than this are rejected.
    pub max_width: usize,

    /// Spaces used to indent items of an expanded header.
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
            indent_width: INDENT_WIDTH,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified max width.
    pub fn with_max_width(max_width: usize) -> Self {
        Self {
            max_width,
            ..Default::default()
        }
    }

    /// Create a new config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }

    /// Check if a line of `width` columns fits the budget.
    #[inline]
    pub fn fits(&self, width: usize) -> bool {
        width <= self.max_width
    }
}

/// Formatting context that tracks state during output.
///
/// Wraps the output emitter and maintains the indentation level of an
/// expanded header.
pub struct FormatContext {
    emitter: StringEmitter,
    indent_level: usize,
    config: FormatConfig,
}

impl FormatContext {
    /// Create a format context with a string emitter and custom config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            emitter: StringEmitter::new(),
            indent_level: 0,
            config,
        }
    }

    /// Get the current indentation in spaces.
    pub fn indent_width(&self) -> usize {
        self.indent_level * self.config.indent_width
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Emit literal text (keywords, punctuation, comments).
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
    }

    /// Emit the text of a rendered fragment.
    pub fn emit_fragment(&mut self, fragment: &Fragment) {
        self.emitter.emit(fragment.text());
    }

    /// Emit a single space.
    pub fn emit_space(&mut self) {
        self.emitter.emit_space();
    }

    /// Emit a newline without indentation.
    pub fn emit_newline(&mut self) {
        self.emitter.emit_newline();
    }

    /// Emit a newline followed by the current indentation.
    pub fn emit_newline_indent(&mut self) {
        self.emitter.emit_newline();
        self.emitter.emit_indent(self.indent_width());
    }

    /// Finish formatting and return the output.
    pub fn finalize(self) -> String {
        self.emitter.output()
    }
}
