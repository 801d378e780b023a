//! Idempotence verification.
//!
//! For each header: format it, re-read the output as a parser would, and
//! format again. The second pass must reproduce the first byte for byte and
//! choose the same layout.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use clause_fmt::{FormatConfig, LayoutMode};
use clause_ir::{Anchor, Comment, Statement};
use common::{bound, comments_in, format_text, item, reparse, statement};
use pretty_assertions::assert_eq;

fn corpus() -> Vec<(&'static str, Statement)> {
    let long = "a".repeat(50);
    vec![
        (
            "two long items",
            statement(vec![item(&long), item(&long)], vec![]),
        ),
        (
            "colon comment",
            statement(
                vec![item("a"), item("a")],
                vec![Comment::trailing("# after colon", Anchor::Colon)],
            ),
        ),
        (
            "item and comma comments",
            statement(
                vec![item("a"), item("b")],
                vec![
                    Comment::trailing("# a", Anchor::ItemStart(0)),
                    Comment::trailing("# comma", Anchor::Separator(0)),
                    Comment::trailing("# c", Anchor::ItemStart(1)),
                    Comment::trailing("# colon", Anchor::Colon),
                ],
            )
            .with_source_delimiters(true),
        ),
        (
            "binding comments",
            statement(
                vec![bound("a", "b"), item("c")],
                vec![
                    Comment::trailing("# a", Anchor::ItemStart(0)),
                    Comment::trailing("# as", Anchor::AsKeyword(0)),
                    Comment::trailing("# b", Anchor::AsKeyword(0)),
                    Comment::trailing("# comma", Anchor::Separator(0)),
                    Comment::trailing("# c", Anchor::ItemStart(1)),
                    Comment::trailing("# colon", Anchor::Colon),
                ],
            )
            .with_source_delimiters(true),
        ),
        (
            "magic comma",
            Statement::single(item("a")).with_magic_trailing_comma(true),
        ),
        (
            "redundant parentheses",
            Statement::single(item("a")).with_source_delimiters(true),
        ),
        (
            "own-line comments everywhere",
            statement(
                vec![bound("a", "x"), item("b")],
                vec![
                    Comment::trailing("# open", Anchor::OpenDelimiter),
                    Comment::leading("# dangling", Anchor::OpenDelimiter),
                    Comment::leading("# first", Anchor::ItemStart(0)),
                    Comment::leading("# before as", Anchor::AsKeyword(0)),
                    Comment::leading("# before comma", Anchor::Separator(0)),
                    Comment::leading("# second", Anchor::ItemStart(1)),
                    Comment::leading("# before close", Anchor::CloseDelimiter),
                    Comment::trailing("# close", Anchor::CloseDelimiter),
                    Comment::leading("# before colon", Anchor::Colon),
                    Comment::trailing("# colon", Anchor::Colon),
                ],
            )
            .with_source_delimiters(true),
        ),
        (
            "hoisted leading comment",
            statement(
                vec![item("a"), item("b")],
                vec![Comment::leading("# above", Anchor::ItemStart(0))],
            ),
        ),
        (
            "flat parentheses kept",
            statement(vec![item("a"), item("b")], vec![]).with_source_delimiters(true),
        ),
        (
            "lone starred item",
            Statement::single(item("*a").starred()).with_source_delimiters(true),
        ),
        (
            "async",
            statement(vec![bound("lock", "guard"), item("timeout(5)")], vec![]).with_async(true),
        ),
    ]
}

#[test]
fn formatting_twice_is_stable() {
    for max_width in [8, 20, 40, 88, 200] {
        let config = FormatConfig::with_max_width(max_width);
        for (name, statement) in corpus() {
            let (first, layout) = format_text(&statement, &config);
            let reread = reparse(&statement, layout);
            let (second, second_layout) = format_text(&reread, &config);

            assert_eq!(first, second, "{name} at width {max_width}");
            assert_eq!(
                layout, second_layout,
                "{name} at width {max_width}: layout changed"
            );
        }
    }
}

#[test]
fn expanded_output_stays_expanded_at_any_width() {
    let narrow = FormatConfig::with_max_width(8);
    let wide = FormatConfig::with_max_width(10_000);
    for (name, statement) in corpus() {
        let (_, layout) = format_text(&statement, &narrow);
        if layout.mode() != LayoutMode::Expanded {
            continue;
        }
        let reread = reparse(&statement, layout);
        let (_, wide_layout) = format_text(&reread, &wide);
        assert_eq!(wide_layout.mode(), LayoutMode::Expanded, "{name}");
    }
}

#[test]
fn comments_survive_both_passes() {
    let config = FormatConfig::default();
    for (name, statement) in corpus() {
        let mut expected: Vec<String> = statement
            .comments()
            .iter()
            .map(|c| c.text.clone())
            .collect();
        expected.sort();

        let (first, layout) = format_text(&statement, &config);
        assert_eq!(comments_in(&first), expected, "{name}: first pass");

        let reread = reparse(&statement, layout);
        assert_eq!(reread.comments().len(), statement.comments().len(), "{name}");
        let (second, _) = format_text(&reread, &config);
        assert_eq!(comments_in(&second), expected, "{name}: second pass");
    }
}
