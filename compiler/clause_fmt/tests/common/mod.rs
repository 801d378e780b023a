//! Shared helpers for the integration suites.
//!
//! `reparse` stands in for the upstream parser and comment indexer: given a
//! statement and the layout it was emitted with, it builds the statement a
//! parser would produce from the emitted text. Formatting that statement again
//! must reproduce the same text.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]
#![allow(clippy::expect_used, reason = "Tests can panic")]

use clause_fmt::{format_statement, FormatConfig, FormattedHeader, LayoutDecision, LayoutMode};
use clause_ir::{Anchor, AnchorComments, Comment, Fragment, Item, Statement};

pub fn item(text: &str) -> Item {
    Item::new(Fragment::new(text))
}

pub fn bound(text: &str, target: &str) -> Item {
    Item::bound(Fragment::new(text), Fragment::new(target))
}

pub fn statement(items: Vec<Item>, comments: Vec<Comment>) -> Statement {
    Statement::new(items, AnchorComments::new(comments)).expect("valid test statement")
}

/// Format a header that is expected to be rewritten.
pub fn format_text(statement: &Statement, config: &FormatConfig) -> (String, LayoutDecision) {
    match format_statement(statement, config) {
        FormattedHeader::Formatted { text, layout } => (text, layout),
        FormattedHeader::Verbatim { reason, .. } => {
            panic!("expected a formatted header, got verbatim ({reason})")
        }
    }
}

/// Re-anchor comments the way a parser would read them from emitted output.
pub fn reparse(statement: &Statement, layout: LayoutDecision) -> Statement {
    let comments = statement.comments();
    let last = statement.last_index();
    let mut out = Vec::with_capacity(comments.len());

    let retag = |comment: &Comment, anchor: Anchor| {
        Comment::new(comment.text.clone(), anchor, comment.placement)
    };

    match layout.mode() {
        LayoutMode::Flat | LayoutMode::Collapsed => {
            out.extend(comments.leading(Anchor::ItemStart(0)).cloned());
            out.extend(
                comments
                    .trailing(Anchor::CloseDelimiter)
                    .chain(comments.trailing(Anchor::Colon))
                    .map(|c| retag(c, Anchor::Colon)),
            );
        }
        LayoutMode::Expanded => {
            out.extend(comments.trailing(Anchor::OpenDelimiter).cloned());
            // Own-line comments right after `(` are dangling.
            out.extend(
                comments
                    .leading(Anchor::OpenDelimiter)
                    .chain(comments.leading(Anchor::ItemStart(0)))
                    .map(|c| retag(c, Anchor::OpenDelimiter)),
            );

            for index in 0..=last {
                if index > 0 {
                    out.extend(
                        comments
                            .leading(Anchor::Separator(index - 1))
                            .chain(comments.leading(Anchor::ItemStart(index)))
                            .map(|c| retag(c, Anchor::ItemStart(index))),
                    );
                }
                out.extend(comments.leading(Anchor::AsKeyword(index)).cloned());
                // Everything after the comma reads as trailing the comma.
                out.extend(
                    comments
                        .trailing(Anchor::ItemStart(index))
                        .chain(comments.trailing(Anchor::AsKeyword(index)))
                        .chain(comments.trailing(Anchor::Separator(index)))
                        .map(|c| retag(c, Anchor::Separator(index))),
                );
            }

            out.extend(
                comments
                    .leading(Anchor::Separator(last))
                    .chain(comments.leading(Anchor::CloseDelimiter))
                    .chain(comments.leading(Anchor::Colon))
                    .map(|c| retag(c, Anchor::CloseDelimiter)),
            );
            out.extend(
                comments
                    .trailing(Anchor::CloseDelimiter)
                    .chain(comments.trailing(Anchor::Colon))
                    .map(|c| retag(c, Anchor::Colon)),
            );
        }
    }

    let magic_comma = layout.mode() == LayoutMode::Expanded && layout.trailing_separator();
    Statement::new(statement.items().to_vec(), AnchorComments::new(out))
        .expect("re-anchored statement stays valid")
        .with_source_delimiters(layout.use_delimiters())
        .with_magic_trailing_comma(magic_comma)
        .with_async(statement.is_async())
}

/// Sorted comment texts found in `output`, one per `#`-started comment.
///
/// Assumes item fragments contain no `#` and each comment has exactly one.
pub fn comments_in(output: &str) -> Vec<String> {
    let mut found: Vec<String> = output
        .lines()
        .flat_map(|line| {
            line.match_indices('#')
                .map(|(start, _)| &line[start..])
                .collect::<Vec<_>>()
        })
        .map(|tail| match tail[1..].find("  #") {
            Some(end) => tail[..=end].to_owned(),
            None => tail.to_owned(),
        })
        .collect();
    found.sort();
    found
}
