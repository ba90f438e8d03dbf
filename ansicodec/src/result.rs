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


//! Error types for the ansicodec crate.
//!
//! Covers vocabulary lookups (unknown SGR codes or surface class names) and
//! decoding of escape-coded text back into styled characters.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`AnsiError`].
pub type AnsiResult<T> = Result<T, AnsiError>;

/// Errors that can occur when working with the style vocabulary or escape-coded text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnsiError {
    /// A numeric code that is not part of the style vocabulary.
    ///
    /// This is a contract violation by the caller: the editing surface is
    /// expected to hand over only codes from the palette.
    #[error("Invalid attribute code {code}")]
    InvalidAttributeCode {
        /// The rejected code
        code: u16,
    },

    /// A surface class name that does not follow the `ansi-<code>` convention.
    #[error("Invalid class name '{name}'")]
    InvalidClassName {
        /// The rejected class name
        name: String,
    },

    /// Malformed ANSI escape sequence encountered while decoding.
    #[error("Malformed ANSI sequence at position {position}: {description}")]
    MalformedSequence {
        /// The char position where the malformed sequence starts
        position: usize,
        /// Description of what's wrong with the sequence
        description: String,
    },

    /// Input ended in the middle of an escape sequence.
    #[error("Incomplete ANSI sequence at end of input (started at position {position})")]
    IncompleteSequence {
        /// The char position where the incomplete sequence starts
        position: usize,
    },

    /// Writing to the output sink failed.
    #[error("Formatting error")]
    Fmt(#[from] std::fmt::Error),
}

impl AnsiError {
    /// Returns the offending code for [`AnsiError::InvalidAttributeCode`].
    pub fn code(&self) -> Option<u16> {
        match self {
            AnsiError::InvalidAttributeCode { code } => Some(*code),
            _ => None,
        }
    }
}
