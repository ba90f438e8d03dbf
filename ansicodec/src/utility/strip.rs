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


use std::borrow::Cow;

/// Removes CSI escape sequences (`ESC [ ... final`) from a string.
///
/// Input without an escape character is returned borrowed. Other escape
/// families (OSC, DCS) are left in place.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ansiscribe_ansicodec::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[1;31mRed Text\x1b[0m"), "Red Text");
/// assert!(matches!(strip_ansi_codes("Plain Text"), Cow::Borrowed(_)));
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    if !str.contains('\x1b') {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut chars = str.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Skip parameters up to and including the final byte
            for ch in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&ch) {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    Cow::Owned(result)
}
