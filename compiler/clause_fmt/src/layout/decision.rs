//! Layout decisions.

use std::fmt;

use super::LayoutMode;

/// The layout chosen for one header.
///
/// Built once by [`decide`](super::decide) and only read afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutDecision {
    mode: LayoutMode,
    use_delimiters: bool,
    trailing_separator: bool,
}

impl LayoutDecision {
    /// One item per line, parenthesized, comma after every item.
    #[inline]
    pub const fn expanded() -> Self {
        LayoutDecision {
            mode: LayoutMode::Expanded,
            use_delimiters: true,
            trailing_separator: true,
        }
    }

    /// A lone item without parentheses.
    #[inline]
    pub const fn collapsed() -> Self {
        LayoutDecision {
            mode: LayoutMode::Collapsed,
            use_delimiters: false,
            trailing_separator: false,
        }
    }

    /// All items on one line.
    #[inline]
    pub const fn flat(use_delimiters: bool) -> Self {
        LayoutDecision {
            mode: LayoutMode::Flat,
            use_delimiters,
            trailing_separator: false,
        }
    }

    #[inline]
    pub fn mode(self) -> LayoutMode {
        self.mode
    }

    /// Check if the item list is wrapped in parentheses.
    #[inline]
    pub fn use_delimiters(self) -> bool {
        self.use_delimiters
    }

    /// Check if the last item is followed by a comma.
    #[inline]
    pub fn trailing_separator(self) -> bool {
        self.trailing_separator
    }

    /// Check if item `index` of `len` items is followed by a comma.
    #[inline]
    pub fn separator_after(self, index: usize, len: usize) -> bool {
        index + 1 < len || self.trailing_separator
    }
}

/// Headers the formatter will not touch.
///
/// This is not an error: the caller emits the original text unchanged, which
/// is always correct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unsupported {
    /// `with (x for x in y):` - the parentheses belong to the generator.
    ComprehensionSoleItem,

    /// A generator-like item next to other items cannot be wrapped safely.
    UnparenthesizableInList,

    /// `with (a, *b):` - starred items were rejected by older grammars.
    StarredInList,

    /// The layout would wrap an item that must not be parenthesized.
    UnparenthesizableNeedsDelimiters,
}

impl Unsupported {
    /// Get a human-readable description of the construct.
    pub fn description(self) -> &'static str {
        match self {
            Unsupported::ComprehensionSoleItem => "comprehension as the only item",
            Unsupported::UnparenthesizableInList => "unparenthesizable item in a list",
            Unsupported::StarredInList => "starred item in a list",
            Unsupported::UnparenthesizableNeedsDelimiters => {
                "unparenthesizable item that does not fit on one line"
            }
        }
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Format the header with this layout.
    Layout(LayoutDecision),

    /// Leave the header exactly as written.
    Unsupported(Unsupported),
}

impl Decision {
    /// Get the layout, if the header is formatted.
    #[inline]
    pub fn layout(self) -> Option<LayoutDecision> {
        match self {
            Decision::Layout(layout) => Some(layout),
            Decision::Unsupported(_) => None,
        }
    }

    /// Get the layout mode, if the header is formatted.
    #[inline]
    pub fn mode(self) -> Option<LayoutMode> {
        self.layout().map(LayoutDecision::mode)
    }

    #[inline]
    pub fn is_unsupported(self) -> bool {
        matches!(self, Decision::Unsupported(_))
    }
}
