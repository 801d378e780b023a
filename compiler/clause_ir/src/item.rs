//! Header items.

use super::Fragment;

/// One entry of a header list: `expression [as binding]`.
///
/// The two flags are computed once by the parser from the expression's node
/// kind. The formatter never inspects expression text to rediscover them.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item {
    /// The rendered context expression.
    pub expression: Fragment,
    /// The rendered `as` target, if any.
    pub binding: Option<Fragment>,
    /// `*expr` in item position.
    pub is_starred: bool,
    /// The expression cannot be wrapped in the header's optional parentheses
    /// without changing how it parses (e.g. a bare generator expression).
    pub is_unparenthesizable: bool,
}

impl Item {
    /// Create an unbound item.
    #[inline]
    pub fn new(expression: Fragment) -> Self {
        Item {
            expression,
            binding: None,
            is_starred: false,
            is_unparenthesizable: false,
        }
    }

    /// Create an item with an `as` target.
    #[inline]
    pub fn bound(expression: Fragment, binding: Fragment) -> Self {
        Item {
            binding: Some(binding),
            ..Item::new(expression)
        }
    }

    #[must_use]
    pub fn with_binding(mut self, binding: Fragment) -> Self {
        self.binding = Some(binding);
        self
    }

    #[must_use]
    pub fn starred(mut self) -> Self {
        self.is_starred = true;
        self
    }

    #[must_use]
    pub fn unparenthesizable(mut self) -> Self {
        self.is_unparenthesizable = true;
        self
    }

    /// Check if the item has an `as` target.
    #[inline]
    pub fn has_binding(&self) -> bool {
        self.binding.is_some()
    }
}
