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


//! Editing session: the owner of one document and the state around it.
//!
//! The session is the single writer of its [`Document`]. Mutations take
//! `&mut self` and export takes `&self`, so an export can never observe a
//! document that is being edited.

use crate::{
    AnsiSerializer, Document, DocumentResult, StylerConfig, SurfaceNode, admit, wrap_with,
};
use ansiscribe_ansicodec::StyleAttribute;
use std::collections::BTreeSet;
use std::ops::Range;
use tracing::{debug, info, instrument, warn};

/// Destination for exported text, provided by the presentation layer.
///
/// Implementations report failure with [`crate::DocumentError::Clipboard`];
/// retrying or falling back to another copy mechanism is their concern.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> DocumentResult<()>;
}

/// Attributes the user has switched on from the toolbar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveStyles {
    attributes: BTreeSet<StyleAttribute>,
}

impl ActiveStyles {
    pub fn is_active(&self, attribute: StyleAttribute) -> bool {
        self.attributes.contains(&attribute)
    }

    pub fn activate(&mut self, attribute: StyleAttribute) {
        self.attributes.insert(attribute);
    }

    pub fn deactivate(&mut self, attribute: StyleAttribute) {
        self.attributes.remove(&attribute);
    }

    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleAttribute> + '_ {
        self.attributes.iter().copied()
    }
}

/// Outcome of [`EditingSession::toggle_style`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The attribute was applied to the selection and is now active.
    Applied,
    /// The attribute was active; it was switched off and the document left alone.
    Deactivated,
}

const COPY_LABELS: [&str; 12] = [
    "Copy text as Discord formatted",
    "Copied!",
    "Double Copy!",
    "Triple Copy!",
    "Dominating!!",
    "Rampage!!",
    "Mega Copy!!",
    "Unstoppable!!",
    "Wicked Sick!!",
    "Monster Copy!!!",
    "GODLIKE!!!",
    "BEYOND GODLIKE!!!!",
];

/// Escalating label for the copy button, advanced after every successful copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    count: usize,
}

impl CopyFeedback {
    /// Highest count the label escalates to.
    pub const MAX_COUNT: usize = COPY_LABELS.len() - 1;

    /// Number of successful copies, capped at [`CopyFeedback::MAX_COUNT`].
    pub fn count(&self) -> usize {
        self.count
    }

    /// Records a successful copy.
    pub fn record_copy(&mut self) {
        self.count = (self.count + 1).min(Self::MAX_COUNT);
    }

    /// Label for the current count.
    pub fn label(&self) -> &'static str {
        COPY_LABELS[self.count]
    }

    /// `true` once the user has copied more than eight times.
    pub fn is_excessive(&self) -> bool {
        self.count > 8
    }
}

/// One user's editing session.
#[derive(Clone, Debug, Default)]
pub struct EditingSession {
    config: StylerConfig,
    document: Document,
    active: ActiveStyles,
    feedback: CopyFeedback,
}

impl EditingSession {
    /// Starts a session with an empty document.
    pub fn new(config: StylerConfig) -> Self {
        Self {
            config,
            document: Document::new(),
            active: ActiveStyles::default(),
            feedback: CopyFeedback::default(),
        }
    }

    pub fn config(&self) -> &StylerConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for direct text edits made by the surface.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn active_styles(&self) -> &ActiveStyles {
        &self.active
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Appends unstyled text typed or pasted by the user.
    pub fn push_text(&mut self, text: &str) {
        self.document.push_text(text);
    }

    /// Replaces the document with a tree handed over by the surface.
    ///
    /// The current document is kept if the tree is rejected.
    pub fn load_surface(&mut self, nodes: Vec<SurfaceNode>) -> DocumentResult<()> {
        self.document = admit(nodes)?;
        Ok(())
    }

    /// Applies `attribute` to `range`. See [`crate::apply_style`].
    pub fn apply_style(
        &mut self,
        range: Range<usize>,
        attribute: StyleAttribute,
    ) -> DocumentResult<()> {
        self.document.apply_style(range, attribute)
    }

    /// Applies `attribute` unless it is already active, in which case it is switched off.
    ///
    /// The active set only changes when the call succeeds.
    pub fn toggle_style(
        &mut self,
        range: Range<usize>,
        attribute: StyleAttribute,
    ) -> DocumentResult<Toggle> {
        if self.active.is_active(attribute) {
            debug!(%attribute, "switching off active style");
            self.active.deactivate(attribute);
            return Ok(Toggle::Deactivated);
        }
        self.document.apply_style(range, attribute)?;
        self.active.activate(attribute);
        Ok(Toggle::Applied)
    }

    /// The escape-coded body, without the code fence.
    pub fn serialize(&self) -> String {
        AnsiSerializer::new(self.config.emit_policy).serialize(&self.document)
    }

    /// The fenced deliverable.
    pub fn export(&self) -> String {
        wrap_with(&self.config.fence_language, &self.serialize())
    }

    /// Exports the document to `clipboard`, returning the new copy button label.
    ///
    /// # Errors
    ///
    /// Propagates the clipboard's error; the copy counter is left unchanged.
    #[instrument(skip_all, fields(len = self.document.len()))]
    pub fn copy_to<C: Clipboard>(&mut self, clipboard: &mut C) -> DocumentResult<&'static str> {
        let text = self.export();
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.feedback.record_copy();
                info!(copies = self.feedback.count(), "copied export to clipboard");
                Ok(self.feedback.label())
            }
            Err(error) => {
                warn!(%error, "clipboard rejected export");
                Err(error)
            }
        }
    }
}
