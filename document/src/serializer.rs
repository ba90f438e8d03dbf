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


//! Depth-first serialization of a document into escape-coded text.
//!
//! The target renderer has no way to switch off a single attribute; it only
//! understands "set these fields" and "reset everything". The serializer
//! therefore keeps a stack of [`GraphicState`] frames, starting from the
//! sentinel frame. Entering a span pushes the parent frame with the span's
//! class slot overwritten and writes it; leaving a span pops the frame, writes
//! the reset sequence and replays the parent frame so ancestor styling
//! resumes.

use crate::{Document, DocumentNode, DocumentResult, EmitPolicy};
use ansiscribe_ansicodec::{GraphicState, StyleAttribute, StyleClass};
use bytes::BufMut;
use std::fmt::Write;
use tracing::instrument;

/// Placeholder the legacy output writes for an unset slot.
const LEGACY_UNSET: u8 = 2;

/// Serializes a document with [`EmitPolicy::Minimal`].
///
/// # Examples
///
/// ```
/// use ansiscribe_ansicodec::StyleAttribute;
/// use ansiscribe_document::{Document, serialize};
///
/// let mut document = Document::from_plain_text("Hello World");
/// document.apply_style(0..5, StyleAttribute::Bold).unwrap();
/// assert_eq!(serialize(&document), "\x1b[1mHello\x1b[0m World");
/// ```
pub fn serialize(document: &Document) -> String {
    AnsiSerializer::default().serialize(document)
}

/// Writes documents as escape-coded text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiSerializer {
    policy: EmitPolicy,
}

impl AnsiSerializer {
    /// Creates a serializer using `policy`.
    pub fn new(policy: EmitPolicy) -> Self {
        Self { policy }
    }

    /// The emission policy in use.
    pub fn policy(&self) -> EmitPolicy {
        self.policy
    }

    /// Serializes `document` into a new string.
    #[instrument(skip_all, fields(policy = ?self.policy, len = document.len()))]
    pub fn serialize(&self, document: &Document) -> String {
        let mut output = String::with_capacity(document.len() * 2);
        let mut stack = vec![GraphicState::default()];
        // Writing into a String cannot fail
        let _ = self.write_nodes(document.nodes(), &mut stack, &mut output);
        output
    }

    /// Writes the serialized `document` to `writer`.
    pub fn write_document<W: Write>(
        &self,
        document: &Document,
        writer: &mut W,
    ) -> std::fmt::Result {
        let mut stack = vec![GraphicState::default()];
        self.write_nodes(document.nodes(), &mut stack, writer)
    }

    /// Encodes the serialized `document` into a byte buffer, returning the byte count.
    pub fn encode<T: BufMut>(&self, document: &Document, dst: &mut T) -> DocumentResult<usize> {
        let output = self.serialize(document);
        dst.put_slice(output.as_bytes());
        Ok(output.len())
    }

    fn write_nodes<W: Write>(
        &self,
        nodes: &[DocumentNode],
        stack: &mut Vec<GraphicState>,
        writer: &mut W,
    ) -> std::fmt::Result {
        for node in nodes {
            match node {
                DocumentNode::TextRun { content } => writer.write_str(content)?,
                DocumentNode::LineBreak => writer.write_char('\n')?,
                DocumentNode::StyledSpan {
                    attribute,
                    children,
                } => {
                    let parent = stack.last().copied().unwrap_or_default();
                    let state = parent.with(*attribute);
                    stack.push(state);
                    self.write_open(&state, *attribute, writer)?;
                    self.write_nodes(children, stack, writer)?;
                    stack.pop();
                    GraphicState::write_reset(writer)?;
                    self.write_restore(&parent, writer)?;
                }
            }
        }
        Ok(())
    }

    fn write_open<W: Write>(
        &self,
        state: &GraphicState,
        attribute: StyleAttribute,
        writer: &mut W,
    ) -> std::fmt::Result {
        match self.policy {
            EmitPolicy::Minimal => state.write_str(writer),
            EmitPolicy::Legacy => {
                let color = match attribute.class() {
                    StyleClass::Background => state.background.map(|c| c.to_u8()),
                    _ => state.foreground.map(|c| c.to_u8()),
                };
                write_legacy_pair(state, color, writer)
            }
        }
    }

    fn write_restore<W: Write>(&self, parent: &GraphicState, writer: &mut W) -> std::fmt::Result {
        match self.policy {
            EmitPolicy::Minimal => parent.write_str(writer),
            EmitPolicy::Legacy => {
                if let Some(foreground) = parent.foreground {
                    write_legacy_pair(parent, Some(foreground.to_u8()), writer)?;
                }
                if let Some(background) = parent.background {
                    write_legacy_pair(parent, Some(background.to_u8()), writer)?;
                }
                Ok(())
            }
        }
    }
}

fn write_legacy_pair<W: Write>(
    state: &GraphicState,
    color: Option<u8>,
    writer: &mut W,
) -> std::fmt::Result {
    let style = state.style.map(|s| s.to_u8()).unwrap_or(LEGACY_UNSET);
    write!(writer, "\x1b[{};{}m", style, color.unwrap_or(LEGACY_UNSET))
}
