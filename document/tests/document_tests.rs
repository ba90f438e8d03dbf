//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! End-to-end tests: styling a document, serializing it and decoding the
//! output the way the chat client renders it.

use ansiscribe_ansicodec::{Rendition, StyleFlags, decode_styled, strip_ansi_codes};
use ansiscribe_document::{
    AnsiSerializer, Background, Document, DocumentError, DocumentNode, EditingSession,
    EmitPolicy, Foreground, StyleAttribute, StylerConfig, serialize, unwrap_fence, wrap,
};
use proptest::prelude::*;

const RED: StyleAttribute = StyleAttribute::Foreground(Foreground::Red);

fn renditions(document: &Document) -> Vec<(char, Rendition)> {
    decode_styled(&serialize(document))
        .unwrap()
        .into_iter()
        .map(|styled| (styled.ch, styled.rendition))
        .collect()
}

fn count_spans(nodes: &[DocumentNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            DocumentNode::StyledSpan { children, .. } => 1 + count_spans(children),
            _ => 0,
        })
        .sum()
}

#[test]
fn test_hello_world_scenario() {
    let mut document = Document::from_plain_text("Hello World");
    document.apply_style(0..5, StyleAttribute::Bold).unwrap();
    document.apply_style(6..11, RED).unwrap();
    assert_eq!(
        serialize(&document),
        "\x1b[1mHello\x1b[0m \x1b[31mWorld\x1b[0m"
    );
    assert_eq!(
        wrap(&serialize(&document)),
        "```ansi\n\x1b[1mHello\x1b[0m \x1b[31mWorld\x1b[0m\n```"
    );
}

#[test]
fn test_hello_world_scenario_with_trailing_space_selected() {
    let mut document = Document::from_plain_text("Hello World");
    document.apply_style(0..6, StyleAttribute::Bold).unwrap();
    document.apply_style(6..11, RED).unwrap();
    assert_eq!(
        serialize(&document),
        "\x1b[1mHello \x1b[0m\x1b[31mWorld\x1b[0m"
    );
}

#[test]
fn test_hello_world_scenario_legacy() {
    let mut session = EditingSession::new(StylerConfig::legacy());
    session.push_text("Hello World");
    session.apply_style(0..5, StyleAttribute::Bold).unwrap();
    session.apply_style(6..11, RED).unwrap();
    assert_eq!(
        session.export(),
        "```ansi\n\x1b[1;2mHello\x1b[0m \x1b[2;31mWorld\x1b[0m\n```"
    );
}

#[test]
fn test_nesting_shows_both_styles() {
    let mut document = Document::from_plain_text("Hello");
    document.apply_style(0..5, StyleAttribute::Bold).unwrap();
    document.apply_style(2..4, StyleAttribute::Italic).unwrap();

    let chars = renditions(&document);
    assert_eq!(chars.len(), 5);
    for (index, (_, rendition)) in chars.iter().enumerate() {
        let expected = if (2..4).contains(&index) {
            StyleFlags::BOLD | StyleFlags::ITALIC
        } else {
            StyleFlags::BOLD
        };
        assert_eq!(rendition.styles, expected, "char {}", index);
    }
}

#[test]
fn test_restore_after_exit() {
    let document = Document::from_nodes(vec![DocumentNode::span(
        StyleAttribute::Bold,
        vec![
            DocumentNode::text("A"),
            DocumentNode::span(StyleAttribute::Italic, vec![DocumentNode::text("B")]),
            DocumentNode::text("C"),
        ],
    )]);
    let styles: Vec<(char, StyleFlags)> = renditions(&document)
        .into_iter()
        .map(|(ch, rendition)| (ch, rendition.styles))
        .collect();
    assert_eq!(
        styles,
        vec![
            ('A', StyleFlags::BOLD),
            ('B', StyleFlags::BOLD | StyleFlags::ITALIC),
            ('C', StyleFlags::BOLD),
        ]
    );
}

#[test]
fn test_colors_restore_after_nested_color() {
    let mut document = Document::from_plain_text("abc");
    document
        .apply_style(0..3, StyleAttribute::Background(Background::Black))
        .unwrap();
    document.apply_style(0..3, RED).unwrap();
    document
        .apply_style(1..2, StyleAttribute::Foreground(Foreground::Teal))
        .unwrap();

    let chars = renditions(&document);
    let colors: Vec<(Option<Foreground>, Option<Background>)> = chars
        .iter()
        .map(|(_, rendition)| (rendition.foreground, rendition.background))
        .collect();
    assert_eq!(
        colors,
        vec![
            (Some(Foreground::Red), Some(Background::Black)),
            (Some(Foreground::Teal), Some(Background::Black)),
            (Some(Foreground::Red), Some(Background::Black)),
        ]
    );
}

#[test]
fn test_sibling_content_is_unstyled() {
    let document = Document::from_nodes(vec![
        DocumentNode::span(RED, vec![DocumentNode::text("a")]),
        DocumentNode::text("b"),
        DocumentNode::span(StyleAttribute::Underline, vec![DocumentNode::text("c")]),
        DocumentNode::text("d"),
    ]);
    let chars = renditions(&document);
    assert!(chars[1].1.is_plain());
    assert!(chars[3].1.is_plain());
    assert_eq!(chars[0].1.foreground, Some(Foreground::Red));
    assert!(chars[2].1.styles.contains(StyleFlags::UNDERLINE));
}

#[test]
fn test_empty_selection_rejected_and_document_unmodified() {
    let mut session = EditingSession::new(StylerConfig::default());
    session.push_text("Hello");
    session.apply_style(0..2, RED).unwrap();
    let before = session.document().clone();

    let error = session.apply_style(4..4, StyleAttribute::Bold).unwrap_err();
    assert_eq!(error, DocumentError::EmptySelection);
    assert!(error.is_recoverable());
    assert_eq!(session.document(), &before);
}

#[test]
fn test_export_round_trips_through_fence() {
    let mut session = EditingSession::new(StylerConfig::discord());
    session.push_text("line one\nline two");
    session
        .apply_style(5..13, StyleAttribute::Background(Background::CreamWhite))
        .unwrap();
    let exported = session.export();
    let body = unwrap_fence("ansi", &exported).unwrap();
    assert_eq!(strip_ansi_codes(body), "line one\nline two");
    assert_eq!(body, session.serialize());
}

fn any_attribute() -> impl Strategy<Value = StyleAttribute> {
    proptest::sample::select(StyleAttribute::palette().to_vec())
}

fn styled_document() -> impl Strategy<Value = Document> {
    (
        "[a-zA-Z \n]{1,40}",
        proptest::collection::vec((any::<usize>(), any::<usize>(), any_attribute()), 0..8),
    )
        .prop_map(|(text, operations)| {
            let mut document = Document::from_plain_text(&text);
            let len = document.len();
            for (start, width, attribute) in operations {
                let start = start % len;
                let end = start + 1 + width % (len - start);
                document.apply_style(start..end, attribute).unwrap();
            }
            document
        })
}

proptest! {
    #[test]
    fn prop_styling_preserves_text(
        text in "[a-zA-Z \n]{1,40}",
        operations in proptest::collection::vec((any::<usize>(), any::<usize>(), any_attribute()), 1..8),
    ) {
        let mut document = Document::from_plain_text(&text);
        let len = document.len();
        for (start, width, attribute) in operations {
            let start = start % len;
            let end = start + 1 + width % (len - start);
            document.apply_style(start..end, attribute).unwrap();
            prop_assert_eq!(document.plain_text(), text.clone());
            prop_assert_eq!(document.len(), len);
        }
    }

    #[test]
    fn prop_unstyled_document_serializes_to_plain_text(text in "[a-zA-Z \n]{0,40}") {
        let document = Document::from_plain_text(&text);
        prop_assert_eq!(serialize(&document), text);
    }

    #[test]
    fn prop_one_reset_per_span(document in styled_document()) {
        for policy in [EmitPolicy::Minimal, EmitPolicy::Legacy] {
            let output = AnsiSerializer::new(policy).serialize(&document);
            prop_assert_eq!(output.matches("\x1b[0m").count(), count_spans(document.nodes()));
        }
    }

    #[test]
    fn prop_output_ends_unstyled(document in styled_document()) {
        let output = format!("{}x", serialize(&document));
        let chars = decode_styled(&output).unwrap();
        prop_assert!(chars.last().map(|c| c.rendition.is_plain()).unwrap_or(false));
        prop_assert_eq!(strip_ansi_codes(&output).into_owned(), format!("{}x", document.plain_text()));
    }

    #[test]
    fn prop_fence_wraps_output(document in styled_document()) {
        let fenced = wrap(&serialize(&document));
        prop_assert!(fenced.starts_with("```ansi\n"));
        prop_assert!(fenced.ends_with("\n```"));
    }
}
