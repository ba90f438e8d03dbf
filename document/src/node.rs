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


//! The styled document tree.
//!
//! A [`Document`] is an ordered sequence of [`DocumentNode`]s. Text lives in
//! [`DocumentNode::TextRun`] leaves, explicit line breaks in
//! [`DocumentNode::LineBreak`] leaves, and styling in
//! [`DocumentNode::StyledSpan`] nodes that own their children. Nodes are held
//! by value, so the tree can never share a node between two parents.
//!
//! Offsets into a document are counted in `char`s of its flattened plain
//! text, where a line break counts as the single char `'\n'`.

use ansiscribe_ansicodec::StyleAttribute;

/// A node of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentNode {
    /// A run of unstyled text.
    TextRun { content: String },
    /// An explicit line break.
    LineBreak,
    /// A region of the document carrying one style attribute.
    StyledSpan {
        attribute: StyleAttribute,
        children: Vec<DocumentNode>,
    },
}

impl DocumentNode {
    /// Creates a text run.
    pub fn text(content: impl Into<String>) -> DocumentNode {
        DocumentNode::TextRun {
            content: content.into(),
        }
    }

    /// Creates a line break.
    pub fn line_break() -> DocumentNode {
        DocumentNode::LineBreak
    }

    /// Creates a styled span around `children`.
    pub fn span(attribute: StyleAttribute, children: Vec<DocumentNode>) -> DocumentNode {
        DocumentNode::StyledSpan {
            attribute,
            children,
        }
    }

    /// Length of the text covered by this node, in chars.
    pub fn len(&self) -> usize {
        match self {
            DocumentNode::TextRun { content } => content.chars().count(),
            DocumentNode::LineBreak => 1,
            DocumentNode::StyledSpan { children, .. } => children.iter().map(Self::len).sum(),
        }
    }

    /// Returns `true` if the node covers no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the plain text covered by this node to `output`.
    pub fn write_plain_text(&self, output: &mut String) {
        match self {
            DocumentNode::TextRun { content } => output.push_str(content),
            DocumentNode::LineBreak => output.push('\n'),
            DocumentNode::StyledSpan { children, .. } => {
                for child in children {
                    child.write_plain_text(output);
                }
            }
        }
    }

    /// The plain text covered by this node.
    pub fn plain_text(&self) -> String {
        let mut output = String::new();
        self.write_plain_text(&mut output);
        output
    }

    /// The attribute of a styled span, `None` for leaves.
    pub fn attribute(&self) -> Option<StyleAttribute> {
        match self {
            DocumentNode::StyledSpan { attribute, .. } => Some(*attribute),
            _ => None,
        }
    }

    /// The children of a styled span, empty for leaves.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::StyledSpan { children, .. } => children,
            _ => &[],
        }
    }

    /// Nesting depth of styled spans below and including this node.
    pub fn depth(&self) -> usize {
        match self {
            DocumentNode::StyledSpan { children, .. } => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// A styled document, owned by one editing session.
///
/// # Examples
///
/// ```
/// use ansiscribe_document::Document;
///
/// let document = Document::from_plain_text("Hello\nWorld");
/// assert_eq!(document.len(), 11);
/// assert_eq!(document.plain_text(), "Hello\nWorld");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) nodes: Vec<DocumentNode>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Document {
        Document::default()
    }

    /// Creates a document from existing top-level nodes.
    pub fn from_nodes(nodes: Vec<DocumentNode>) -> Document {
        Document { nodes }
    }

    /// Creates an unstyled document, turning every `'\n'` into a line break node.
    pub fn from_plain_text(text: &str) -> Document {
        let mut document = Document::new();
        document.push_text(text);
        document
    }

    /// Appends text at the end of the document, unstyled.
    pub fn push_text(&mut self, text: &str) {
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.nodes.push(DocumentNode::LineBreak);
            }
            if !line.is_empty() {
                self.nodes.push(DocumentNode::text(line));
            }
        }
    }

    /// Appends a line break at the end of the document.
    pub fn push_line_break(&mut self) {
        self.nodes.push(DocumentNode::LineBreak);
    }

    /// Appends a node at the end of the document.
    pub fn push(&mut self, node: DocumentNode) {
        self.nodes.push(node);
    }

    /// The top-level nodes.
    pub fn nodes(&self) -> &[DocumentNode] {
        &self.nodes
    }

    /// Consumes the document, returning its top-level nodes.
    pub fn into_nodes(self) -> Vec<DocumentNode> {
        self.nodes
    }

    /// Length of the flattened plain text, in chars.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(DocumentNode::len).sum()
    }

    /// Returns `true` if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The document with all styling stripped.
    pub fn plain_text(&self) -> String {
        let mut output = String::new();
        for node in &self.nodes {
            node.write_plain_text(&mut output);
        }
        output
    }

    /// Maximum nesting depth of styled spans.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(DocumentNode::depth).max().unwrap_or(0)
    }

    /// Removes everything from the document.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl From<Vec<DocumentNode>> for Document {
    fn from(nodes: Vec<DocumentNode>) -> Self {
        Document::from_nodes(nodes)
    }
}

impl FromIterator<DocumentNode> for Document {
    fn from_iter<T: IntoIterator<Item = DocumentNode>>(iter: T) -> Self {
        Document::from_nodes(iter.into_iter().collect())
    }
}
