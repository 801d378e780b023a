//! Layout modes.

/// How the items of a header are placed.
///
/// Example header `with a as x, b as y:` in each mode:
///
/// ```text
/// // Flat: one line, parentheses only where the source had them
/// with a as x, b as y:
///
/// // Collapsed: a lone item on one line, parentheses removed
/// with a as x:
///
/// // Expanded: one item per line inside parentheses, trailing comma
/// with (
///     a as x,
///     b as y,
/// ):
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// All items on the header line.
    Flat,

    /// One item per line between explicit parentheses.
    Expanded,

    /// A single item on the header line with redundant parentheses dropped.
    Collapsed,
}

impl LayoutMode {
    /// Check if the header is emitted on a single line.
    #[inline]
    pub fn is_single_line(self) -> bool {
        matches!(self, LayoutMode::Flat | LayoutMode::Collapsed)
    }

    /// Check if the header is split across lines.
    #[inline]
    pub fn is_multiline(self) -> bool {
        matches!(self, LayoutMode::Expanded)
    }

    /// Get a human-readable name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Flat => "flat",
            LayoutMode::Expanded => "expanded",
            LayoutMode::Collapsed => "collapsed",
        }
    }
}
