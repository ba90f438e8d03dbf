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


//! Error types for document editing and export

use ansiscribe_ansicodec::AnsiError;
use std::ops::Range;
use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Document editing and export error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A style was requested for a zero-length selection
    #[error("Please select some text first")]
    EmptySelection,

    /// The selection extends past the end of the document
    #[error("Range {range:?} out of bounds (document length {max})")]
    RangeOutOfBounds {
        /// The requested range
        range: Range<usize>,
        /// The document length in chars
        max: usize,
    },

    /// The editing surface handed over an attribute outside the vocabulary
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] AnsiError),

    /// Exported text is not wrapped in the expected code fence
    #[error("Missing code fence")]
    MissingFence,

    /// The clipboard collaborator rejected the export
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl DocumentError {
    /// Check if the error is recoverable
    ///
    /// Recoverable errors are reported back to the user, who can retry.
    /// Everything else is a contract violation by the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DocumentError::EmptySelection | DocumentError::Clipboard(_)
        )
    }
}
