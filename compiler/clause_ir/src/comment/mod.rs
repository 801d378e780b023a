//! Anchored comments.
//!
//! The upstream comment indexer attaches every comment in a header to exactly
//! one [`Anchor`], a token position derived from the header's structure, and
//! records whether the comment sat on its own line before that token or at the
//! end of the token's line.
//!
//! [`AnchorComments`] is the read-only lookup the formatter queries while
//! deciding a layout and while emitting it.

use rustc_hash::FxHashMap;
use std::fmt;

/// A token position in a header that a comment can bind to.
///
/// Item-relative anchors carry the zero-based item index. `Separator(i)` is the
/// comma following item `i`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    /// The opening parenthesis. Comments here belong to the container.
    OpenDelimiter,
    /// The first token of item `i`.
    ItemStart(usize),
    /// The `as` keyword of item `i` (and its target).
    AsKeyword(usize),
    /// The comma after item `i`.
    Separator(usize),
    /// The closing parenthesis.
    CloseDelimiter,
    /// The `:` ending the header.
    Colon,
}

impl Anchor {
    /// The item this anchor belongs to, if it is item-relative.
    #[inline]
    pub fn item_index(self) -> Option<usize> {
        match self {
            Anchor::ItemStart(i) | Anchor::AsKeyword(i) | Anchor::Separator(i) => Some(i),
            Anchor::OpenDelimiter | Anchor::CloseDelimiter | Anchor::Colon => None,
        }
    }

    /// Check if comments on this anchor are dangling (owned by the container).
    #[inline]
    pub fn is_dangling(self) -> bool {
        matches!(self, Anchor::OpenDelimiter)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::OpenDelimiter => f.write_str("`(`"),
            Anchor::ItemStart(i) => write!(f, "item {i}"),
            Anchor::AsKeyword(i) => write!(f, "`as` of item {i}"),
            Anchor::Separator(i) => write!(f, "`,` after item {i}"),
            Anchor::CloseDelimiter => f.write_str("`)`"),
            Anchor::Colon => f.write_str("`:`"),
        }
    }
}

/// Where a comment sits relative to its anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Placement {
    /// On its own line, before the anchor token.
    LeadingOwnLine,
    /// At the end of the anchor token's line.
    TrailingSameLine,
}

impl Placement {
    #[inline]
    pub fn is_leading(self) -> bool {
        matches!(self, Placement::LeadingOwnLine)
    }

    #[inline]
    pub fn is_trailing(self) -> bool {
        matches!(self, Placement::TrailingSameLine)
    }
}

/// A source comment bound to an anchor.
///
/// `text` is the full comment including its marker (`# note`) and is emitted
/// byte-for-byte.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Comment {
    pub text: String,
    pub anchor: Anchor,
    pub placement: Placement,
}

impl Comment {
    #[inline]
    pub fn new(text: impl Into<String>, anchor: Anchor, placement: Placement) -> Self {
        Comment {
            text: text.into(),
            anchor,
            placement,
        }
    }

    /// Create an own-line comment preceding `anchor`.
    #[inline]
    pub fn leading(text: impl Into<String>, anchor: Anchor) -> Self {
        Comment::new(text, anchor, Placement::LeadingOwnLine)
    }

    /// Create an end-of-line comment following `anchor`.
    #[inline]
    pub fn trailing(text: impl Into<String>, anchor: Anchor) -> Self {
        Comment::new(text, anchor, Placement::TrailingSameLine)
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({:?})", self.text, self.anchor, self.placement)
    }
}

/// Index of a header's comments by anchor.
///
/// Comments keep their source order both globally ([`AnchorComments::iter`])
/// and per anchor ([`AnchorComments::comments_for`]).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnchorComments {
    /// All comments in source order.
    comments: Vec<Comment>,
    /// Positions into `comments`, grouped by anchor.
    by_anchor: FxHashMap<Anchor, Vec<usize>>,
}

impl AnchorComments {
    /// Build the index from comments in source order.
    pub fn new(comments: Vec<Comment>) -> Self {
        let mut by_anchor: FxHashMap<Anchor, Vec<usize>> = FxHashMap::default();
        for (index, comment) in comments.iter().enumerate() {
            by_anchor.entry(comment.anchor).or_default().push(index);
        }

        AnchorComments {
            comments,
            by_anchor,
        }
    }

    /// Create an index with no comments.
    #[inline]
    pub fn empty() -> Self {
        AnchorComments::default()
    }

    /// Get the comments bound to `anchor`, in source order.
    ///
    /// Anchors without comments yield nothing.
    pub fn comments_for(&self, anchor: Anchor) -> impl Iterator<Item = &Comment> + '_ {
        self.by_anchor
            .get(&anchor)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.comments[index])
    }

    /// Own-line comments before `anchor`.
    pub fn leading(&self, anchor: Anchor) -> impl Iterator<Item = &Comment> + '_ {
        self.comments_for(anchor)
            .filter(|comment| comment.placement.is_leading())
    }

    /// End-of-line comments after `anchor`.
    pub fn trailing(&self, anchor: Anchor) -> impl Iterator<Item = &Comment> + '_ {
        self.comments_for(anchor)
            .filter(|comment| comment.placement.is_trailing())
    }

    /// Check if any comment is bound to `anchor`.
    #[inline]
    pub fn has_comments(&self, anchor: Anchor) -> bool {
        self.by_anchor.contains_key(&anchor)
    }

    /// Check if any comment belongs to the container rather than an item.
    #[inline]
    pub fn has_dangling_comments(&self) -> bool {
        self.has_comments(Anchor::OpenDelimiter)
    }

    /// Check for an own-line comment anywhere except before the first item.
    ///
    /// An own-line comment in front of the first item can be hoisted above the
    /// header keyword. Any other one needs the header split across lines.
    pub fn has_leading_own_line_except_first_item(&self) -> bool {
        self.comments
            .iter()
            .any(|c| c.placement.is_leading() && c.anchor != Anchor::ItemStart(0))
    }

    /// Check for an end-of-line comment that ends an item's line.
    ///
    /// Only comments trailing the closing delimiter or the colon can follow a
    /// single-line header.
    pub fn has_item_trailing_comments(&self) -> bool {
        self.comments.iter().any(|c| {
            c.placement.is_trailing()
                && !matches!(c.anchor, Anchor::Colon | Anchor::CloseDelimiter)
        })
    }

    /// Iterate over all comments in source order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl FromIterator<Comment> for AnchorComments {
    fn from_iter<T: IntoIterator<Item = Comment>>(iter: T) -> Self {
        AnchorComments::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnchorComments {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
