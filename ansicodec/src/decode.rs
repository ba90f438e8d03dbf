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


//! Replays escape-coded text the way the chat client renders it.
//!
//! The renderer keeps independent bold, italic and underline flags plus one
//! foreground and one background color. `0` clears everything, a style code
//! switches its flag on, a color code replaces the color of its class, and any
//! other SGR parameter is ignored. Non-SGR CSI sequences are skipped.
//!
//! Because style flags accumulate until a reset, `ESC[1m` followed by `ESC[3m`
//! renders bold italic text even though each sequence names a single style.

use crate::{
    AnsiError, AnsiResult, Background, Foreground, GraphicState, StyleAttribute, TextStyle,
};
use bitflags::bitflags;
use std::str::CharIndices;
use tracing::trace;

bitflags! {
    /// Style flags active in the renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// SGR 1.
        const BOLD      = 1 << 0;
        /// SGR 3.
        const ITALIC    = 1 << 1;
        /// SGR 4.
        const UNDERLINE = 1 << 2;
    }
}

impl From<TextStyle> for StyleFlags {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Bold => StyleFlags::BOLD,
            TextStyle::Italic => StyleFlags::ITALIC,
            TextStyle::Underline => StyleFlags::UNDERLINE,
        }
    }
}

/// What the renderer shows for one character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rendition {
    pub styles: StyleFlags,
    pub foreground: Option<Foreground>,
    pub background: Option<Background>,
}

impl Rendition {
    /// Returns `true` when no formatting is visible.
    pub fn is_plain(&self) -> bool {
        self.styles.is_empty() && self.foreground.is_none() && self.background.is_none()
    }

    /// Returns `true` if `style` is switched on.
    pub fn has(&self, style: TextStyle) -> bool {
        self.styles.contains(StyleFlags::from(style))
    }

    fn apply(&mut self, attribute: StyleAttribute) {
        match attribute {
            StyleAttribute::Foreground(color) => self.foreground = Some(color),
            StyleAttribute::Background(color) => self.background = Some(color),
            style => {
                if let Some(style) = style.text_style() {
                    self.styles.insert(StyleFlags::from(style));
                }
            }
        }
    }
}

impl From<GraphicState> for Rendition {
    fn from(state: GraphicState) -> Self {
        Rendition {
            styles: state.style.map(StyleFlags::from).unwrap_or_default(),
            foreground: state.foreground,
            background: state.background,
        }
    }
}

/// A visible character together with how it is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub rendition: Rendition,
}

/// A maximal run of consecutive characters rendered the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub rendition: Rendition,
}

/// Decodes escape-coded text into visible characters with their rendition.
///
/// # Errors
///
/// - [`AnsiError::MalformedSequence`] for an `ESC` not followed by `[`, or an
///   SGR parameter that is not a decimal number.
/// - [`AnsiError::IncompleteSequence`] if the input ends inside a sequence.
///
/// # Examples
///
/// ```
/// use ansiscribe_ansicodec::{decode_styled, TextStyle};
///
/// let chars = decode_styled("\x1b[1mA\x1b[3mB\x1b[0mC").unwrap();
/// assert!(chars[0].rendition.has(TextStyle::Bold));
/// assert!(chars[1].rendition.has(TextStyle::Bold));
/// assert!(chars[1].rendition.has(TextStyle::Italic));
/// assert!(chars[2].rendition.is_plain());
/// ```
pub fn decode_styled(input: &str) -> AnsiResult<Vec<StyledChar>> {
    let mut output = Vec::with_capacity(input.len());
    let mut rendition = Rendition::default();
    let mut chars = input.char_indices();

    while let Some((position, ch)) = chars.next() {
        if ch != '\x1b' {
            output.push(StyledChar { ch, rendition });
            continue;
        }
        match chars.next() {
            Some((_, '[')) => {}
            Some((_, other)) => {
                return Err(AnsiError::MalformedSequence {
                    position,
                    description: format!("expected '[' after ESC, found {:?}", other),
                });
            }
            None => return Err(AnsiError::IncompleteSequence { position }),
        }
        let (parameters, final_byte) = read_csi(&mut chars, position)?;
        if final_byte == 'm' {
            apply_sgr(&mut rendition, &parameters, position)?;
        }
    }

    Ok(output)
}

/// Decodes escape-coded text and merges consecutive characters with equal rendition.
pub fn decode_runs(input: &str) -> AnsiResult<Vec<StyledRun>> {
    let mut runs: Vec<StyledRun> = Vec::new();
    for styled in decode_styled(input)? {
        match runs.last_mut() {
            Some(run) if run.rendition == styled.rendition => run.text.push(styled.ch),
            _ => runs.push(StyledRun {
                text: styled.ch.to_string(),
                rendition: styled.rendition,
            }),
        }
    }
    Ok(runs)
}

fn read_csi(chars: &mut CharIndices<'_>, position: usize) -> AnsiResult<(String, char)> {
    let mut parameters = String::new();
    for (_, ch) in chars.by_ref() {
        // Final bytes of a CSI sequence are 0x40..=0x7E
        if ('\x40'..='\x7e').contains(&ch) {
            return Ok((parameters, ch));
        }
        parameters.push(ch);
    }
    Err(AnsiError::IncompleteSequence { position })
}

fn apply_sgr(rendition: &mut Rendition, parameters: &str, position: usize) -> AnsiResult<()> {
    // `ESC[m` is an implicit reset
    if parameters.is_empty() {
        *rendition = Rendition::default();
        return Ok(());
    }
    for parameter in parameters.split(';') {
        let code = if parameter.is_empty() {
            0
        } else {
            parameter
                .parse::<u16>()
                .map_err(|_| AnsiError::MalformedSequence {
                    position,
                    description: format!("invalid SGR parameter {:?}", parameter),
                })?
        };
        if code == 0 {
            *rendition = Rendition::default();
        } else if let Ok(attribute) = StyleAttribute::from_code(code) {
            rendition.apply(attribute);
        } else {
            trace!(code, position, "ignoring SGR parameter outside the vocabulary");
        }
    }
    Ok(())
}
