//! Validated header statements.

use super::{Anchor, AnchorComments, Item};

/// Contract violations by the upstream parser or comment indexer.
///
/// These indicate a bug earlier in the pipeline, not a property of the source
/// being formatted.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StatementError {
    #[error("header has no items")]
    NoItems,

    #[error("comment anchored to {anchor}, but the header has {items} item(s)")]
    AnchorOutOfRange { anchor: Anchor, items: usize },

    #[error("comment anchored to {anchor}, but item {index} has no `as` target")]
    MissingBinding { anchor: Anchor, index: usize },
}

/// A compound-statement header: `[async] with <items>:`.
///
/// Constructed once from the parse tree, then only read. The body after the
/// colon is not part of the statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statement {
    items: Vec<Item>,
    comments: AnchorComments,
    source_had_delimiters: bool,
    source_had_magic_trailing_comma: bool,
    is_async: bool,
    source_text: Option<String>,
}

impl Statement {
    /// Build a statement, checking that every comment anchor exists.
    pub fn new(items: Vec<Item>, comments: AnchorComments) -> Result<Self, StatementError> {
        if items.is_empty() {
            return Err(StatementError::NoItems);
        }

        for comment in &comments {
            let anchor = comment.anchor;
            let Some(index) = anchor.item_index() else {
                continue;
            };
            let Some(item) = items.get(index) else {
                return Err(StatementError::AnchorOutOfRange {
                    anchor,
                    items: items.len(),
                });
            };
            if matches!(anchor, Anchor::AsKeyword(_)) && !item.has_binding() {
                return Err(StatementError::MissingBinding { anchor, index });
            }
        }

        Ok(Statement {
            items,
            comments,
            source_had_delimiters: false,
            source_had_magic_trailing_comma: false,
            is_async: false,
            source_text: None,
        })
    }

    /// Build a comment-free statement with a single item.
    pub fn single(item: Item) -> Self {
        Statement {
            items: vec![item],
            comments: AnchorComments::empty(),
            source_had_delimiters: false,
            source_had_magic_trailing_comma: false,
            is_async: false,
            source_text: None,
        }
    }

    /// Record whether the source wrapped the items in parentheses.
    #[must_use]
    pub fn with_source_delimiters(mut self, had_delimiters: bool) -> Self {
        self.source_had_delimiters = had_delimiters;
        self
    }

    /// Record a comma directly before the closing parenthesis in the source.
    ///
    /// A magic trailing comma only exists inside parentheses, so this also
    /// marks the source as delimited.
    #[must_use]
    pub fn with_magic_trailing_comma(mut self, had_comma: bool) -> Self {
        self.source_had_magic_trailing_comma = had_comma;
        self.source_had_delimiters |= had_comma;
        self
    }

    /// Mark an `async with` header.
    #[must_use]
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Attach the original header text, used when the header is left as-is.
    #[must_use]
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn comments(&self) -> &AnchorComments {
        &self.comments
    }

    #[inline]
    pub fn source_had_delimiters(&self) -> bool {
        self.source_had_delimiters
    }

    #[inline]
    pub fn source_had_magic_trailing_comma(&self) -> bool {
        self.source_had_magic_trailing_comma
    }

    #[inline]
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    #[inline]
    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    /// Index of the last item.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }
}
