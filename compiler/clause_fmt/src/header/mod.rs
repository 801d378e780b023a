//! Header Emission
//!
//! Renders a header according to a [`LayoutDecision`], placing every comment
//! next to its anchor.
//!
//! # Comment Placement
//!
//! Single-line layouts (Flat, Collapsed):
//! - own-line comments before the first item go above the keyword
//! - end-of-line comments after `)` and `:` follow the colon
//!
//! Expanded layout:
//! - comments after `(` stay there; own-line ones go before the first item
//! - each item's own-line comments precede it
//! - own-line comments before `as` split the item: `expr`, comments, `as target`
//! - end-of-line comments of an item, its `as`, and its comma all follow the
//!   comma, so the comma is never swallowed by a comment
//! - own-line comments before a comma follow the item's line, after the comma
//!   itself; read back, they belong to the next item (or to `)` after the
//!   last item)
//! - own-line comments before `)` or `:` precede the closing parenthesis
//!
//! The selector only picks a single-line layout when every comment is one the
//! single-line path can place. Emitting a single-line layout for any other
//! header panics rather than drop comments.

use clause_ir::{Anchor, Item, Statement};
use tracing::trace;

use crate::context::{FormatConfig, FormatContext};
use crate::layout::{LayoutDecision, LayoutMode};
use crate::width::{keyword, BINDING, SEPARATOR};

/// Gap between code and an end-of-line comment.
pub const TRAILING_COMMENT_GAP: &str = "  ";

/// Render a header to a string.
///
/// The result has no trailing newline; the caller appends the body.
///
/// # Panics
///
/// If `layout` is single-line and the header has a comment that needs a line
/// break. [`decide`](crate::decide) never produces such a pairing.
pub fn emit(statement: &Statement, layout: LayoutDecision, config: &FormatConfig) -> String {
    let mut ctx = FormatContext::with_config(*config);
    HeaderEmitter::new(statement, layout).emit(&mut ctx);
    ctx.finalize()
}

/// Renders one header through a [`FormatContext`].
pub struct HeaderEmitter<'a> {
    statement: &'a Statement,
    layout: LayoutDecision,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(statement: &'a Statement, layout: LayoutDecision) -> Self {
        HeaderEmitter { statement, layout }
    }

    /// Emit the header into `ctx`.
    pub fn emit(&self, ctx: &mut FormatContext) {
        trace!(
            mode = self.layout.mode().name(),
            comments = self.statement.comments().len(),
            "emitting header"
        );
        match self.layout.mode() {
            LayoutMode::Flat | LayoutMode::Collapsed => self.emit_single_line(ctx),
            LayoutMode::Expanded => self.emit_expanded(ctx),
        }
    }

    fn emit_single_line(&self, ctx: &mut FormatContext) {
        let items = self.statement.items();
        assert!(
            places_on_one_line(self.statement),
            "single-line layout chosen for a header with line-breaking comments"
        );

        for comment in self.statement.comments().leading(Anchor::ItemStart(0)) {
            ctx.emit(&comment.text);
            ctx.emit_newline();
        }

        ctx.emit(keyword(self.statement));
        ctx.emit_space();
        if self.layout.use_delimiters() {
            ctx.emit("(");
        }
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                ctx.emit(SEPARATOR);
            }
            emit_item_inline(ctx, item);
        }
        if self.layout.use_delimiters() {
            ctx.emit(")");
        }
        ctx.emit(":");

        self.emit_trailing(ctx, Anchor::CloseDelimiter);
        self.emit_trailing(ctx, Anchor::Colon);
    }

    fn emit_expanded(&self, ctx: &mut FormatContext) {
        let items = self.statement.items();

        ctx.emit(keyword(self.statement));
        ctx.emit_space();
        ctx.emit("(");
        self.emit_trailing(ctx, Anchor::OpenDelimiter);

        ctx.indent();
        self.emit_own_line(ctx, Anchor::OpenDelimiter);

        for (index, item) in items.iter().enumerate() {
            self.emit_own_line(ctx, Anchor::ItemStart(index));
            ctx.emit_newline_indent();
            ctx.emit_fragment(&item.expression);

            if let Some(binding) = &item.binding {
                let as_keyword = Anchor::AsKeyword(index);
                if self.statement.comments().leading(as_keyword).next().is_some() {
                    self.emit_own_line(ctx, as_keyword);
                    ctx.emit_newline_indent();
                    ctx.emit(BINDING.trim_start());
                } else {
                    ctx.emit(BINDING);
                }
                ctx.emit_fragment(binding);
            }

            if self.layout.separator_after(index, items.len()) {
                ctx.emit(",");
            }
            self.emit_trailing(ctx, Anchor::ItemStart(index));
            self.emit_trailing(ctx, Anchor::AsKeyword(index));
            self.emit_trailing(ctx, Anchor::Separator(index));
            self.emit_own_line(ctx, Anchor::Separator(index));
        }

        self.emit_own_line(ctx, Anchor::CloseDelimiter);
        self.emit_own_line(ctx, Anchor::Colon);
        ctx.dedent();

        ctx.emit_newline_indent();
        ctx.emit("):");
        self.emit_trailing(ctx, Anchor::CloseDelimiter);
        self.emit_trailing(ctx, Anchor::Colon);
    }

    /// Emit the own-line comments before `anchor`, each on a new indented line.
    fn emit_own_line(&self, ctx: &mut FormatContext, anchor: Anchor) {
        for comment in self.statement.comments().leading(anchor) {
            ctx.emit_newline_indent();
            ctx.emit(&comment.text);
        }
    }

    /// Emit the end-of-line comments after `anchor` on the current line.
    fn emit_trailing(&self, ctx: &mut FormatContext, anchor: Anchor) {
        for comment in self.statement.comments().trailing(anchor) {
            ctx.emit(TRAILING_COMMENT_GAP);
            ctx.emit(&comment.text);
        }
    }
}

/// Check that every comment of `statement` has a place in a single-line header.
///
/// Own-line comments may only precede the first item; end-of-line comments may
/// only follow `)` or `:`.
pub(crate) fn places_on_one_line(statement: &Statement) -> bool {
    let comments = statement.comments();
    !comments.has_dangling_comments()
        && !comments.has_leading_own_line_except_first_item()
        && !comments.has_item_trailing_comments()
}

/// Emit `expr` or `expr as target` on the current line.
fn emit_item_inline(ctx: &mut FormatContext, item: &Item) {
    ctx.emit_fragment(&item.expression);
    if let Some(binding) = &item.binding {
        ctx.emit(BINDING);
        ctx.emit_fragment(binding);
    }
}
