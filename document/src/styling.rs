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


//! Range styling: wrapping a selection of the document in a styled span.
//!
//! The tree is rebuilt rather than patched. Nodes straddling a selection
//! boundary are split in two, with both halves of a split span keeping the
//! span's attribute, and the covered nodes are moved into a new
//! [`DocumentNode::StyledSpan`] at the position they occupied.
//!
//! When the whole selection falls inside one existing span, the new span is
//! created inside it, so the most recently applied attribute is always the
//! innermost one and wins for its class.

use crate::{Document, DocumentError, DocumentNode, DocumentResult};
use ansiscribe_ansicodec::StyleAttribute;
use std::ops::Range;
use tracing::{debug, instrument, trace};

/// Wraps the chars in `range` in a new span carrying `attribute`.
///
/// Styling never toggles: applying an attribute that is already active adds
/// another, redundant, span. The plain text of the document is unchanged.
///
/// # Errors
///
/// - [`DocumentError::EmptySelection`] if `range` is empty.
/// - [`DocumentError::RangeOutOfBounds`] if `range` ends past the document.
///
/// The document is left untouched on error.
///
/// # Examples
///
/// ```
/// use ansiscribe_ansicodec::StyleAttribute;
/// use ansiscribe_document::{Document, DocumentNode, apply_style};
///
/// let mut document = Document::from_plain_text("Hello World");
/// apply_style(&mut document, 0..5, StyleAttribute::Bold).unwrap();
/// assert_eq!(
///     document.nodes(),
///     &[
///         DocumentNode::span(StyleAttribute::Bold, vec![DocumentNode::text("Hello")]),
///         DocumentNode::text(" World"),
///     ]
/// );
/// ```
#[instrument(skip(document, range), fields(start = range.start, end = range.end))]
pub fn apply_style(
    document: &mut Document,
    range: Range<usize>,
    attribute: StyleAttribute,
) -> DocumentResult<()> {
    if range.is_empty() {
        debug!("rejecting empty selection");
        return Err(DocumentError::EmptySelection);
    }
    let max = document.len();
    if range.end > max {
        debug!(max, "rejecting selection past the end of the document");
        return Err(DocumentError::RangeOutOfBounds { range, max });
    }

    let nodes = std::mem::take(&mut document.nodes);
    document.nodes = wrap_range(nodes, range, attribute);
    Ok(())
}

impl Document {
    /// Wraps the chars in `range` in a new span carrying `attribute`.
    ///
    /// See [`apply_style`].
    pub fn apply_style(
        &mut self,
        range: Range<usize>,
        attribute: StyleAttribute,
    ) -> DocumentResult<()> {
        apply_style(self, range, attribute)
    }
}

fn wrap_range(
    mut nodes: Vec<DocumentNode>,
    range: Range<usize>,
    attribute: StyleAttribute,
) -> Vec<DocumentNode> {
    if let Some((index, offset)) = enclosing_span(&nodes, &range) {
        if let DocumentNode::StyledSpan { children, .. } = &mut nodes[index] {
            trace!(index, offset, "descending into enclosing span");
            let inner = std::mem::take(children);
            *children = wrap_range(inner, range.start - offset..range.end - offset, attribute);
        }
        return nodes;
    }

    let (mut before, rest) = split_nodes(nodes, range.start);
    let (covered, after) = split_nodes(rest, range.len());
    trace!(covered = covered.len(), "wrapping covered nodes");
    before.push(DocumentNode::span(attribute, covered));
    before.extend(after);
    before
}

/// Finds the span among `nodes` that holds all of `range`, with its start offset.
fn enclosing_span(nodes: &[DocumentNode], range: &Range<usize>) -> Option<(usize, usize)> {
    let mut offset = 0;
    for (index, node) in nodes.iter().enumerate() {
        let end = offset + node.len();
        if offset <= range.start && range.end <= end {
            return match node {
                DocumentNode::StyledSpan { .. } => Some((index, offset)),
                _ => None,
            };
        }
        if end >= range.end {
            return None;
        }
        offset = end;
    }
    None
}

/// Splits `nodes` into the nodes before and after char offset `at`.
///
/// Zero-length nodes sitting exactly on `at` stay on the left.
fn split_nodes(nodes: Vec<DocumentNode>, at: usize) -> (Vec<DocumentNode>, Vec<DocumentNode>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut offset = 0;

    for node in nodes {
        let len = node.len();
        if offset + len <= at {
            left.push(node);
        } else if offset >= at {
            right.push(node);
        } else {
            split_node(node, at - offset, &mut left, &mut right);
        }
        offset += len;
    }

    (left, right)
}

/// Splits a node that straddles char offset `at` (`0 < at < len`).
fn split_node(
    node: DocumentNode,
    at: usize,
    left: &mut Vec<DocumentNode>,
    right: &mut Vec<DocumentNode>,
) {
    match node {
        DocumentNode::TextRun { mut content } => {
            let index = content
                .char_indices()
                .nth(at)
                .map(|(index, _)| index)
                .unwrap_or(content.len());
            let tail = content.split_off(index);
            trace!(at, "splitting text run");
            left.push(DocumentNode::TextRun { content });
            right.push(DocumentNode::TextRun { content: tail });
        }
        DocumentNode::StyledSpan {
            attribute,
            children,
        } => {
            let (head, tail) = split_nodes(children, at);
            trace!(at, %attribute, "splitting styled span");
            left.push(DocumentNode::span(attribute, head));
            right.push(DocumentNode::span(attribute, tail));
        }
        // A line break is one char wide and never straddles an offset
        DocumentNode::LineBreak => left.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansiscribe_ansicodec::{Background, Foreground};
    use tracing_test::traced_test;

    const RED: StyleAttribute = StyleAttribute::Foreground(Foreground::Red);

    fn text(content: &str) -> DocumentNode {
        DocumentNode::text(content)
    }

    fn span(attribute: StyleAttribute, children: Vec<DocumentNode>) -> DocumentNode {
        DocumentNode::span(attribute, children)
    }

    #[test]
    fn test_style_whole_run() {
        let mut document = Document::from_plain_text("Hello");
        document.apply_style(0..5, StyleAttribute::Bold).unwrap();
        assert_eq!(
            document.nodes(),
            &[span(StyleAttribute::Bold, vec![text("Hello")])]
        );
    }

    #[test]
    fn test_style_middle_of_run() {
        let mut document = Document::from_plain_text("Hello World");
        document.apply_style(3..8, RED).unwrap();
        assert_eq!(
            document.nodes(),
            &[text("Hel"), span(RED, vec![text("lo Wo")]), text("rld")]
        );
        assert_eq!(document.plain_text(), "Hello World");
    }

    #[test]
    fn test_nested_style_descends_into_span() {
        let mut document = Document::from_plain_text("Hello");
        document.apply_style(0..5, StyleAttribute::Bold).unwrap();
        document.apply_style(2..4, StyleAttribute::Italic).unwrap();
        assert_eq!(
            document.nodes(),
            &[span(
                StyleAttribute::Bold,
                vec![
                    text("He"),
                    span(StyleAttribute::Italic, vec![text("ll")]),
                    text("o"),
                ]
            )]
        );
    }

    #[test]
    fn test_same_extent_nests_inside() {
        let mut document = Document::from_plain_text("Hi");
        document.apply_style(0..2, RED).unwrap();
        document
            .apply_style(0..2, StyleAttribute::Foreground(Foreground::Blue))
            .unwrap();
        assert_eq!(
            document.nodes(),
            &[span(
                RED,
                vec![span(
                    StyleAttribute::Foreground(Foreground::Blue),
                    vec![text("Hi")]
                )]
            )]
        );
    }

    #[test]
    fn test_overlapping_selection_splits_span() {
        let mut document = Document::from_plain_text("Hello World");
        document.apply_style(0..5, StyleAttribute::Bold).unwrap();
        document.apply_style(3..8, RED).unwrap();
        assert_eq!(
            document.nodes(),
            &[
                span(StyleAttribute::Bold, vec![text("Hel")]),
                span(
                    RED,
                    vec![span(StyleAttribute::Bold, vec![text("lo")]), text(" Wo")]
                ),
                text("rld"),
            ]
        );
        assert_eq!(document.plain_text(), "Hello World");
    }

    #[test]
    fn test_selection_across_line_break() {
        let mut document = Document::from_plain_text("ab\ncd");
        document
            .apply_style(1..4, StyleAttribute::Background(Background::Blurple))
            .unwrap();
        assert_eq!(
            document.nodes(),
            &[
                text("a"),
                span(
                    StyleAttribute::Background(Background::Blurple),
                    vec![text("b"), DocumentNode::LineBreak, text("c")]
                ),
                text("d"),
            ]
        );
    }

    #[test]
    fn test_split_multibyte_text() {
        let mut document = Document::from_plain_text("añb");
        document.apply_style(1..2, StyleAttribute::Underline).unwrap();
        assert_eq!(
            document.nodes(),
            &[
                text("a"),
                span(StyleAttribute::Underline, vec![text("ñ")]),
                text("b")
            ]
        );
    }

    #[test]
    fn test_split_deeply_nested_span_on_both_sides() {
        let mut document = Document::from_nodes(vec![span(
            StyleAttribute::Bold,
            vec![span(RED, vec![text("abcdef")])],
        )]);
        document.apply_style(0..3, StyleAttribute::Italic).unwrap();
        // Selection is enclosed by both spans, so the new span lands innermost
        assert_eq!(
            document.nodes(),
            &[span(
                StyleAttribute::Bold,
                vec![span(
                    RED,
                    vec![span(StyleAttribute::Italic, vec![text("abc")]), text("def")]
                )]
            )]
        );
    }

    #[test]
    fn test_selection_leaving_span_splits_ancestors() {
        let mut document = Document::from_nodes(vec![
            span(
                StyleAttribute::Bold,
                vec![text("ab"), span(RED, vec![text("cd")])],
            ),
            text("ef"),
        ]);
        document.apply_style(3..5, StyleAttribute::Underline).unwrap();
        assert_eq!(
            document.nodes(),
            &[
                span(
                    StyleAttribute::Bold,
                    vec![text("ab"), span(RED, vec![text("c")])]
                ),
                span(
                    StyleAttribute::Underline,
                    vec![
                        span(StyleAttribute::Bold, vec![span(RED, vec![text("d")])]),
                        text("e"),
                    ]
                ),
                text("f"),
            ]
        );
    }

    #[test]
    #[traced_test]
    fn test_empty_selection_rejected() {
        let mut document = Document::from_plain_text("Hello");
        let before = document.clone();
        assert_eq!(
            document.apply_style(2..2, StyleAttribute::Bold),
            Err(DocumentError::EmptySelection)
        );
        assert_eq!(document, before);
        assert!(logs_contain("rejecting empty selection"));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut document = Document::from_plain_text("Hello");
        let before = document.clone();
        assert_eq!(
            document.apply_style(3..6, StyleAttribute::Bold),
            Err(DocumentError::RangeOutOfBounds { range: 3..6, max: 5 })
        );
        assert_eq!(document, before);
    }

    #[test]
    fn test_empty_document_rejects_any_selection() {
        let mut document = Document::new();
        assert_eq!(
            document.apply_style(0..1, StyleAttribute::Bold),
            Err(DocumentError::RangeOutOfBounds { range: 0..1, max: 0 })
        );
    }

    #[test]
    fn test_zero_length_span_stays_outside_selection_start() {
        let mut document = Document::from_nodes(vec![
            text("ab"),
            span(StyleAttribute::Italic, Vec::new()),
            text("cd"),
        ]);
        document.apply_style(2..4, StyleAttribute::Bold).unwrap();
        assert_eq!(
            document.nodes(),
            &[
                text("ab"),
                span(StyleAttribute::Italic, Vec::new()),
                span(StyleAttribute::Bold, vec![text("cd")]),
            ]
        );
    }
}
