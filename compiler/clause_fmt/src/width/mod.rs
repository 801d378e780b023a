//! Width Calculation
//!
//! Single-line widths of headers, built from the precomputed widths of each
//! item's fragments. Text is never re-measured here.
//!
//! Trailing comments are not counted: a header that fits stays on one line even
//! if a comment after the colon runs past the limit.

use clause_ir::{Item, Statement};

/// Header keyword.
pub const WITH_KEYWORD: &str = "with";

/// Header keyword of an `async with` statement.
pub const ASYNC_WITH_KEYWORD: &str = "async with";

/// Text between an item's expression and its target.
pub const BINDING: &str = " as ";

/// Text between items on a single line.
pub const SEPARATOR: &str = ", ";

/// Keyword the header starts with.
#[inline]
pub fn keyword(statement: &Statement) -> &'static str {
    if statement.is_async() {
        ASYNC_WITH_KEYWORD
    } else {
        WITH_KEYWORD
    }
}

/// Width of one item: `expr` or `expr as target`.
#[inline]
pub fn item_width(item: &Item) -> usize {
    item.expression.width()
        + item
            .binding
            .as_ref()
            .map_or(0, |binding| BINDING.len() + binding.width())
}

/// Width of all items joined by `, `.
pub fn items_width(items: &[Item]) -> usize {
    let separators = items.len().saturating_sub(1) * SEPARATOR.len();
    items.iter().map(item_width).sum::<usize>() + separators
}

/// Width of the whole header on one line, keyword through colon.
///
/// `use_delimiters` adds the two parenthesis columns.
pub fn single_line_width(statement: &Statement, use_delimiters: bool) -> usize {
    let delimiters = if use_delimiters { 2 } else { 0 };
    // keyword, space, items, parens, colon
    keyword(statement).len() + 1 + items_width(statement.items()) + delimiters + 1
}
