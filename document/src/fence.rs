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


//! Code fence wrapping for the exported text.

use crate::{DocumentError, DocumentResult};

/// Delimiter opening and closing a fenced code block.
pub const FENCE: &str = "```";

/// Info string the chat client recognizes for escape-coded blocks.
pub const ANSI_LANGUAGE: &str = "ansi";

/// Wraps serialized text in an `ansi` code fence.
///
/// ```
/// use ansiscribe_document::wrap;
///
/// assert_eq!(wrap("hi"), "```ansi\nhi\n```");
/// ```
pub fn wrap(serialized: &str) -> String {
    wrap_with(ANSI_LANGUAGE, serialized)
}

/// Wraps serialized text in a code fence with the given info string.
pub fn wrap_with(language: &str, serialized: &str) -> String {
    let mut output =
        String::with_capacity(FENCE.len() * 2 + language.len() + serialized.len() + 2);
    output.push_str(FENCE);
    output.push_str(language);
    output.push('\n');
    output.push_str(serialized);
    output.push('\n');
    output.push_str(FENCE);
    output
}

/// Returns the body of a fenced block produced by [`wrap_with`].
///
/// # Errors
///
/// Returns [`DocumentError::MissingFence`] if `fenced` does not start with the
/// opening fence for `language` or does not end with the closing fence.
pub fn unwrap_fence<'a>(language: &str, fenced: &'a str) -> DocumentResult<&'a str> {
    fenced
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_prefix(language))
        .and_then(|rest| rest.strip_prefix('\n'))
        .and_then(|rest| rest.strip_suffix(FENCE))
        .and_then(|rest| rest.strip_suffix('\n'))
        .ok_or(DocumentError::MissingFence)
}
