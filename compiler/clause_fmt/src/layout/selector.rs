//! Layout selection rules.

use clause_ir::{Anchor, Comment, Statement};
use tracing::debug;

use super::{Decision, LayoutDecision, Unsupported};
use crate::context::FormatConfig;
use crate::header::places_on_one_line;
use crate::width::single_line_width;

/// Decide the layout of a header.
///
/// Pure function of the statement and the config. Returns
/// [`Decision::Unsupported`] for headers whose rewrite could change meaning;
/// the caller keeps their source text.
pub fn decide(statement: &Statement, config: &FormatConfig) -> Decision {
    if let Some(reason) = unsupported_construct(statement) {
        debug!(%reason, items = statement.items().len(), "header left as written");
        return Decision::Unsupported(reason);
    }

    let layout = select_layout(statement, config);

    // An unparenthesizable item may only ever be rendered bare.
    if layout.use_delimiters()
        && statement
            .items()
            .iter()
            .any(|item| item.is_unparenthesizable)
    {
        let reason = Unsupported::UnparenthesizableNeedsDelimiters;
        debug!(%reason, mode = layout.mode().name(), "header left as written");
        return Decision::Unsupported(reason);
    }

    debug!(
        mode = layout.mode().name(),
        delimiters = layout.use_delimiters(),
        trailing_separator = layout.trailing_separator(),
        items = statement.items().len(),
        "header layout"
    );
    Decision::Layout(layout)
}

/// Detect constructs that must never be re-wrapped, independent of width.
fn unsupported_construct(statement: &Statement) -> Option<Unsupported> {
    let items = statement.items();

    if let [item] = items {
        return (item.is_unparenthesizable && !item.has_binding())
            .then_some(Unsupported::ComprehensionSoleItem);
    }

    if items.iter().any(|item| item.is_unparenthesizable) {
        return Some(Unsupported::UnparenthesizableInList);
    }
    if items.iter().any(|item| item.is_starred) {
        return Some(Unsupported::StarredInList);
    }
    None
}

/// Apply the layout rules in priority order.
fn select_layout(statement: &Statement, config: &FormatConfig) -> LayoutDecision {
    // Rule 1: user intent and comments that need their own line
    if forces_expansion(statement) {
        return LayoutDecision::expanded();
    }

    let items = statement.items();

    // Rule 2: a lone item loses redundant parentheses
    if let [item] = items {
        if !item.is_starred
            && !item.is_unparenthesizable
            && statement.comments().iter().all(fits_single_line_header)
            && config.fits(single_line_width(statement, false))
        {
            return LayoutDecision::collapsed();
        }
    }

    // Rule 3: everything on one line
    let use_delimiters =
        statement.source_had_delimiters() && (items.len() > 1 || delimiters_required(statement));
    if config.fits(single_line_width(statement, use_delimiters)) {
        return LayoutDecision::flat(use_delimiters);
    }

    // Rule 4: width overflow
    LayoutDecision::expanded()
}

/// Check for signals that keep a header expanded regardless of width.
fn forces_expansion(statement: &Statement) -> bool {
    statement.source_had_magic_trailing_comma() || !places_on_one_line(statement)
}

/// Check if a comment can accompany a single-line header.
///
/// Own-line comments before the first item move above the keyword; end-of-line
/// comments after `)` or `:` follow the colon.
fn fits_single_line_header(comment: &Comment) -> bool {
    if comment.placement.is_leading() {
        comment.anchor == Anchor::ItemStart(0)
    } else {
        matches!(comment.anchor, Anchor::CloseDelimiter | Anchor::Colon)
    }
}

/// Check if the source's parentheses are load-bearing for a lone item.
///
/// Dropping them from `(*a)` would change how the header parses.
fn delimiters_required(statement: &Statement) -> bool {
    matches!(statement.items(), [item] if item.is_starred)
}
