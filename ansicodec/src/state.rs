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


use crate::{AnsiResult, Background, Foreground, StyleAttribute, TextStyle};
use bytes::BufMut;
use std::fmt::Write;

/// The universal reset sequence.
pub const RESET: &str = "\x1b[0m";

/// The formatting active at one point of the output, one slot per style class.
///
/// `GraphicState::default()` is the sentinel frame: nothing active in any
/// class. Applying an attribute only overwrites the slot of its class, so a
/// bold frame that receives italic becomes italic while keeping its colors.
///
/// # Examples
///
/// ```
/// use ansiscribe_ansicodec::{Foreground, GraphicState, StyleAttribute};
///
/// let state = GraphicState::default()
///     .with(StyleAttribute::Bold)
///     .with(StyleAttribute::Foreground(Foreground::Red));
/// assert_eq!(state.to_string(), "\x1b[1;31m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphicState {
    pub style: Option<TextStyle>,
    pub foreground: Option<Foreground>,
    pub background: Option<Background>,
}

impl GraphicState {
    /// Returns a copy of this state with the slot of `attribute`'s class overwritten.
    #[must_use]
    pub fn with(&self, attribute: StyleAttribute) -> GraphicState {
        let mut state = *self;
        state.apply(attribute);
        state
    }

    /// Overwrites the slot of `attribute`'s class in place.
    pub fn apply(&mut self, attribute: StyleAttribute) {
        match attribute {
            StyleAttribute::Bold => self.style = Some(TextStyle::Bold),
            StyleAttribute::Italic => self.style = Some(TextStyle::Italic),
            StyleAttribute::Underline => self.style = Some(TextStyle::Underline),
            StyleAttribute::Foreground(color) => self.foreground = Some(color),
            StyleAttribute::Background(color) => self.background = Some(color),
        }
    }

    /// Returns `true` for the sentinel frame.
    pub fn is_sentinel(&self) -> bool {
        self.style.is_none() && self.foreground.is_none() && self.background.is_none()
    }

    /// The active SGR codes in emission order: style, foreground, background.
    pub fn codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(3);
        if let Some(style) = self.style {
            codes.push(style.to_u8());
        }
        if let Some(foreground) = self.foreground {
            codes.push(foreground.to_u8());
        }
        if let Some(background) = self.background {
            codes.push(background.to_u8());
        }
        codes
    }

    /// Number of bytes [`GraphicState::write_str`] produces for this state.
    pub fn len(&self) -> usize {
        let codes = self.codes();
        if codes.is_empty() {
            return 0;
        }
        // "\x1b[" + codes + semicolons + "m"
        let digits: usize = codes.iter().map(|code| if *code < 10 { 1 } else { 2 }).sum();
        2 + digits + (codes.len() - 1) + 1
    }

    /// Returns `true` when writing this state produces no output.
    pub fn is_empty(&self) -> bool {
        self.is_sentinel()
    }

    /// Writes `ESC[<codes>m` for the non-sentinel slots. The sentinel writes nothing.
    pub fn write_str<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        let codes = self.codes();
        if codes.is_empty() {
            return Ok(());
        }
        writer.write_str("\x1b[")?;
        for (index, code) in codes.iter().enumerate() {
            if index > 0 {
                writer.write_char(';')?;
            }
            write!(writer, "{}", code)?;
        }
        writer.write_char('m')
    }

    /// Writes the reset sequence `ESC[0m`.
    pub fn write_reset<W: Write>(writer: &mut W) -> std::fmt::Result {
        writer.write_str(RESET)
    }

    /// Encodes the escape sequence for this state into a byte buffer.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> AnsiResult<usize> {
        let mut buffer = String::with_capacity(self.len());
        self.write_str(&mut buffer)?;
        dst.put_slice(buffer.as_bytes());
        Ok(buffer.len())
    }
}

impl From<StyleAttribute> for GraphicState {
    fn from(attribute: StyleAttribute) -> Self {
        GraphicState::default().with(attribute)
    }
}

impl std::fmt::Display for GraphicState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f)
    }
}
