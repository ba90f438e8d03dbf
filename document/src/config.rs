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


/// How span boundaries are written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmitPolicy {
    /// Write only the slots that differ from the sentinel, in the order
    /// style, foreground, background, and restore the full parent state
    /// after every reset.
    #[default]
    Minimal,
    /// Byte-compatible with the original web styler: unset slots are written
    /// as `2`, every opening sequence carries the style slot plus either the
    /// foreground or the background, and the restore step only replays the
    /// parent's colors.
    Legacy,
}

/// Export settings for a document
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StylerConfig {
    /// Info string of the opening code fence
    pub fence_language: String,
    /// Escape sequence emission policy
    pub emit_policy: EmitPolicy,
}

impl StylerConfig {
    /// Chat client export with minimal escape sequences
    pub fn discord() -> StylerConfig {
        StylerConfig {
            fence_language: String::from("ansi"),
            emit_policy: EmitPolicy::Minimal,
        }
    }
    /// Reproduce the original web styler output exactly
    pub fn legacy() -> StylerConfig {
        StylerConfig {
            fence_language: String::from("ansi"),
            emit_policy: EmitPolicy::Legacy,
        }
    }
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self::discord()
    }
}
