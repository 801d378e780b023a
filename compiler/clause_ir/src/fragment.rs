//! Rendered text fragments.

use std::fmt;

/// A piece of already-rendered source text and its display width.
///
/// The width is measured by the caller (Unicode width rules live upstream).
/// The formatter only ever adds widths together, it never re-measures text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Fragment {
    text: String,
    width: usize,
}

impl Fragment {
    /// Create a fragment whose width is its `char` count.
    ///
    /// Correct for ASCII and most identifiers. Callers with wide or combining
    /// characters should use [`Fragment::with_width`].
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Fragment { text, width }
    }

    /// Create a fragment with an externally measured width.
    #[inline]
    pub fn with_width(text: impl Into<String>, width: usize) -> Self {
        Fragment {
            text: text.into(),
            width,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (w={})", self.text, self.width)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
