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


//! The boundary between the editing surface and the document core.
//!
//! The surface is responsible for sanitizing whatever the user typed or
//! pasted. What it hands over is a tree of [`SurfaceNode`]s, the only markup
//! vocabulary the core accepts: text, line breaks and spans tagged with an
//! `ansi-<code>` class. [`admit`] turns that tree into a [`Document`],
//! rejecting any class outside the style vocabulary.

use crate::{Document, DocumentNode, DocumentResult};
use ansiscribe_ansicodec::StyleAttribute;
use tracing::{instrument, warn};

/// A node as exposed by the editing surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceNode {
    Text(String),
    Break,
    Span {
        class_name: String,
        children: Vec<SurfaceNode>,
    },
}

impl SurfaceNode {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> SurfaceNode {
        SurfaceNode::Text(content.into())
    }

    /// Creates a span node with the given class.
    pub fn span(class_name: impl Into<String>, children: Vec<SurfaceNode>) -> SurfaceNode {
        SurfaceNode::Span {
            class_name: class_name.into(),
            children,
        }
    }
}

/// Converts a surface tree into a document.
///
/// # Errors
///
/// Returns [`crate::DocumentError::Vocabulary`] for the first span whose class
/// is not an `ansi-<code>` class from the vocabulary. Nothing is admitted in
/// that case.
///
/// # Examples
///
/// ```
/// use ansiscribe_document::{SurfaceNode, admit, serialize};
///
/// let document = admit(vec![
///     SurfaceNode::span("ansi-1", vec![SurfaceNode::text("Hi")]),
/// ]).unwrap();
/// assert_eq!(serialize(&document), "\x1b[1mHi\x1b[0m");
/// ```
#[instrument(skip_all, fields(nodes = nodes.len()))]
pub fn admit(nodes: Vec<SurfaceNode>) -> DocumentResult<Document> {
    Ok(Document::from_nodes(admit_nodes(nodes)?))
}

fn admit_nodes(nodes: Vec<SurfaceNode>) -> DocumentResult<Vec<DocumentNode>> {
    nodes.into_iter().map(admit_node).collect()
}

fn admit_node(node: SurfaceNode) -> DocumentResult<DocumentNode> {
    match node {
        SurfaceNode::Text(content) => Ok(DocumentNode::TextRun { content }),
        SurfaceNode::Break => Ok(DocumentNode::LineBreak),
        SurfaceNode::Span {
            class_name,
            children,
        } => {
            let attribute = StyleAttribute::from_class_name(&class_name).inspect_err(|error| {
                warn!(%class_name, %error, "surface handed over an unknown span class");
            })?;
            Ok(DocumentNode::span(attribute, admit_nodes(children)?))
        }
    }
}

impl Document {
    /// Converts a surface tree into a document. See [`admit`].
    pub fn from_surface(nodes: Vec<SurfaceNode>) -> DocumentResult<Document> {
        admit(nodes)
    }

    /// The surface representation of this document, for display after edits.
    pub fn to_surface(&self) -> Vec<SurfaceNode> {
        self.nodes().iter().map(SurfaceNode::from).collect()
    }
}

impl From<&DocumentNode> for SurfaceNode {
    fn from(node: &DocumentNode) -> Self {
        match node {
            DocumentNode::TextRun { content } => SurfaceNode::Text(content.clone()),
            DocumentNode::LineBreak => SurfaceNode::Break,
            DocumentNode::StyledSpan {
                attribute,
                children,
            } => SurfaceNode::Span {
                class_name: attribute.class_name(),
                children: children.iter().map(SurfaceNode::from).collect(),
            },
        }
    }
}
