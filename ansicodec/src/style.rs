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


//! The style vocabulary understood by the chat client's ANSI renderer.
//!
//! The renderer only honors a small subset of Select Graphic Rendition (SGR)
//! parameters: three text styles, eight foreground colors and five background
//! colors. Every attribute belongs to exactly one [`StyleClass`], and at most
//! one attribute per class is active at any point of the output.

use crate::{AnsiError, AnsiResult};

/// Prefix used by the editing surface to tag styled spans (`ansi-31`).
pub const CLASS_NAME_PREFIX: &str = "ansi-";

/// The formatting dimension an attribute belongs to.
///
/// Classification is purely numeric: style codes live below `10`, foreground
/// colors in the `30` decade and background colors in the `40` decade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum StyleClass {
    /// Bold, italic or underline.
    Style,
    /// Text color.
    Foreground,
    /// Cell color behind the text.
    Background,
}

impl StyleClass {
    /// Classifies a raw SGR code.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidAttributeCode`] for codes outside the three
    /// vocabulary ranges, including the reset code `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ansiscribe_ansicodec::StyleClass;
    ///
    /// assert_eq!(StyleClass::of(1).unwrap(), StyleClass::Style);
    /// assert_eq!(StyleClass::of(31).unwrap(), StyleClass::Foreground);
    /// assert_eq!(StyleClass::of(45).unwrap(), StyleClass::Background);
    /// assert!(StyleClass::of(0).is_err());
    /// ```
    pub fn of(code: u16) -> AnsiResult<StyleClass> {
        match code {
            1..=9 => Ok(StyleClass::Style),
            30..=39 => Ok(StyleClass::Foreground),
            40..=49 => Ok(StyleClass::Background),
            _ => Err(AnsiError::InvalidAttributeCode { code }),
        }
    }
}

/// Text style flags. Only one can be active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum TextStyle {
    /// SGR `1`.
    Bold,
    /// SGR `3`.
    Italic,
    /// SGR `4`.
    Underline,
}

impl TextStyle {
    /// Converts the style to its SGR code.
    pub fn to_u8(&self) -> u8 {
        match self {
            TextStyle::Bold => 1,
            TextStyle::Italic => 3,
            TextStyle::Underline => 4,
        }
    }

    /// Converts an SGR code to a style, `None` if the code is not a style.
    pub fn from_u8(value: u8) -> Option<TextStyle> {
        match value {
            1 => Some(TextStyle::Bold),
            3 => Some(TextStyle::Italic),
            4 => Some(TextStyle::Underline),
            _ => None,
        }
    }
}

/// Foreground palette of the chat client.
///
/// The names follow how the client renders the standard `30`-`37` codes,
/// which differs from the usual terminal names (`30` is a dark gray, `33` a
/// gold and so on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Foreground {
    /// FG `30`.
    DarkGray,
    /// FG `31`.
    Red,
    /// FG `32`.
    Green,
    /// FG `33`.
    Gold,
    /// FG `34`.
    Blue,
    /// FG `35`.
    Pink,
    /// FG `36`.
    Teal,
    /// FG `37`.
    White,
}

impl Foreground {
    /// All foreground colors in palette order.
    pub const ALL: [Foreground; 8] = [
        Foreground::DarkGray,
        Foreground::Red,
        Foreground::Green,
        Foreground::Gold,
        Foreground::Blue,
        Foreground::Pink,
        Foreground::Teal,
        Foreground::White,
    ];

    /// Converts the color to its SGR code.
    ///
    /// ```
    /// use ansiscribe_ansicodec::Foreground;
    ///
    /// assert_eq!(Foreground::DarkGray.to_u8(), 30);
    /// assert_eq!(Foreground::White.to_u8(), 37);
    /// ```
    pub fn to_u8(&self) -> u8 {
        match self {
            Foreground::DarkGray => 30,
            Foreground::Red => 31,
            Foreground::Green => 32,
            Foreground::Gold => 33,
            Foreground::Blue => 34,
            Foreground::Pink => 35,
            Foreground::Teal => 36,
            Foreground::White => 37,
        }
    }

    /// Converts an SGR code to a foreground color.
    pub fn from_u8(value: u8) -> Option<Foreground> {
        match value {
            30 => Some(Foreground::DarkGray),
            31 => Some(Foreground::Red),
            32 => Some(Foreground::Green),
            33 => Some(Foreground::Gold),
            34 => Some(Foreground::Blue),
            35 => Some(Foreground::Pink),
            36 => Some(Foreground::Teal),
            37 => Some(Foreground::White),
            _ => None,
        }
    }

    /// Display name as shown in the color picker.
    pub fn name(&self) -> &'static str {
        match self {
            Foreground::DarkGray => "Dark Gray",
            Foreground::Red => "Red",
            Foreground::Green => "Green",
            Foreground::Gold => "Gold",
            Foreground::Blue => "Blue",
            Foreground::Pink => "Pink",
            Foreground::Teal => "Teal",
            Foreground::White => "White",
        }
    }
}

/// Background palette of the chat client.
///
/// The client only renders five of the `40` decade codes, so the palette has
/// gaps at `43`, `44` and `46`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Background {
    /// BG `40`.
    Black,
    /// BG `41`.
    RustBrown,
    /// BG `42`.
    Gray,
    /// BG `45`.
    Blurple,
    /// BG `47`.
    CreamWhite,
}

impl Background {
    /// All background colors in palette order.
    pub const ALL: [Background; 5] = [
        Background::Black,
        Background::RustBrown,
        Background::Gray,
        Background::Blurple,
        Background::CreamWhite,
    ];

    /// Converts the color to its SGR code.
    pub fn to_u8(&self) -> u8 {
        match self {
            Background::Black => 40,
            Background::RustBrown => 41,
            Background::Gray => 42,
            Background::Blurple => 45,
            Background::CreamWhite => 47,
        }
    }

    /// Converts an SGR code to a background color.
    ///
    /// Codes inside the background decade that the client does not render
    /// (`43`, `44`, `46`) return `None`.
    pub fn from_u8(value: u8) -> Option<Background> {
        match value {
            40 => Some(Background::Black),
            41 => Some(Background::RustBrown),
            42 => Some(Background::Gray),
            45 => Some(Background::Blurple),
            47 => Some(Background::CreamWhite),
            _ => None,
        }
    }

    /// Display name as shown in the color picker.
    pub fn name(&self) -> &'static str {
        match self {
            Background::Black => "Black",
            Background::RustBrown => "Rust Brown",
            Background::Gray => "Gray (40%)",
            Background::Blurple => "Blurple",
            Background::CreamWhite => "Cream White",
        }
    }
}

/// A single attribute that can be applied to a range of text.
///
/// # Examples
///
/// ```
/// use ansiscribe_ansicodec::{Foreground, StyleAttribute, StyleClass};
///
/// let red = StyleAttribute::Foreground(Foreground::Red);
/// assert_eq!(red.code(), 31);
/// assert_eq!(red.class(), StyleClass::Foreground);
/// assert_eq!(red.class_name(), "ansi-31");
/// assert_eq!(StyleAttribute::from_code(31).unwrap(), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum StyleAttribute {
    Bold,
    Italic,
    Underline,
    Foreground(Foreground),
    Background(Background),
}

const PALETTE: [StyleAttribute; 16] = [
    StyleAttribute::Bold,
    StyleAttribute::Italic,
    StyleAttribute::Underline,
    StyleAttribute::Foreground(Foreground::DarkGray),
    StyleAttribute::Foreground(Foreground::Red),
    StyleAttribute::Foreground(Foreground::Green),
    StyleAttribute::Foreground(Foreground::Gold),
    StyleAttribute::Foreground(Foreground::Blue),
    StyleAttribute::Foreground(Foreground::Pink),
    StyleAttribute::Foreground(Foreground::Teal),
    StyleAttribute::Foreground(Foreground::White),
    StyleAttribute::Background(Background::Black),
    StyleAttribute::Background(Background::RustBrown),
    StyleAttribute::Background(Background::Gray),
    StyleAttribute::Background(Background::Blurple),
    StyleAttribute::Background(Background::CreamWhite),
];

impl StyleAttribute {
    /// Every attribute in toolbar order: styles, foregrounds, backgrounds.
    pub fn palette() -> &'static [StyleAttribute] {
        &PALETTE
    }

    /// The SGR code of this attribute.
    pub fn code(&self) -> u8 {
        match self {
            StyleAttribute::Bold => TextStyle::Bold.to_u8(),
            StyleAttribute::Italic => TextStyle::Italic.to_u8(),
            StyleAttribute::Underline => TextStyle::Underline.to_u8(),
            StyleAttribute::Foreground(color) => color.to_u8(),
            StyleAttribute::Background(color) => color.to_u8(),
        }
    }

    /// The class this attribute occupies in a graphic state.
    pub fn class(&self) -> StyleClass {
        match self {
            StyleAttribute::Bold | StyleAttribute::Italic | StyleAttribute::Underline => {
                StyleClass::Style
            }
            StyleAttribute::Foreground(_) => StyleClass::Foreground,
            StyleAttribute::Background(_) => StyleClass::Background,
        }
    }

    /// Returns the text style if this attribute is in the style class.
    pub fn text_style(&self) -> Option<TextStyle> {
        match self {
            StyleAttribute::Bold => Some(TextStyle::Bold),
            StyleAttribute::Italic => Some(TextStyle::Italic),
            StyleAttribute::Underline => Some(TextStyle::Underline),
            _ => None,
        }
    }

    /// Looks up an attribute by its SGR code.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiError::InvalidAttributeCode`] if the code is not in the
    /// vocabulary, even when it falls inside a class range (`43`, `38`).
    pub fn from_code(code: u16) -> AnsiResult<StyleAttribute> {
        let invalid = AnsiError::InvalidAttributeCode { code };
        let value = u8::try_from(code).map_err(|_| invalid.clone())?;
        let attribute = match StyleClass::of(code)? {
            StyleClass::Style => TextStyle::from_u8(value).map(StyleAttribute::from),
            StyleClass::Foreground => Foreground::from_u8(value).map(StyleAttribute::Foreground),
            StyleClass::Background => Background::from_u8(value).map(StyleAttribute::Background),
        };
        attribute.ok_or(invalid)
    }

    /// The class name the editing surface puts on a span carrying this attribute.
    pub fn class_name(&self) -> String {
        format!("{}{}", CLASS_NAME_PREFIX, self.code())
    }

    /// Parses an `ansi-<code>` class name.
    ///
    /// # Errors
    ///
    /// - [`AnsiError::InvalidClassName`] if the prefix is missing or the
    ///   suffix is not a decimal number.
    /// - [`AnsiError::InvalidAttributeCode`] if the number is not in the vocabulary.
    pub fn from_class_name(name: &str) -> AnsiResult<StyleAttribute> {
        let digits = name
            .strip_prefix(CLASS_NAME_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| AnsiError::InvalidClassName {
                name: name.to_string(),
            })?;
        let code = digits
            .parse::<u16>()
            .map_err(|_| AnsiError::InvalidAttributeCode { code: u16::MAX })?;
        StyleAttribute::from_code(code)
    }

    /// Display name as shown on the toolbar.
    pub fn name(&self) -> &'static str {
        match self {
            StyleAttribute::Bold => "Bold",
            StyleAttribute::Italic => "Italic",
            StyleAttribute::Underline => "Underline",
            StyleAttribute::Foreground(color) => color.name(),
            StyleAttribute::Background(color) => color.name(),
        }
    }
}

impl From<TextStyle> for StyleAttribute {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Bold => StyleAttribute::Bold,
            TextStyle::Italic => StyleAttribute::Italic,
            TextStyle::Underline => StyleAttribute::Underline,
        }
    }
}

impl From<Foreground> for StyleAttribute {
    fn from(color: Foreground) -> Self {
        StyleAttribute::Foreground(color)
    }
}

impl From<Background> for StyleAttribute {
    fn from(color: Background) -> Self {
        StyleAttribute::Background(color)
    }
}

impl TryFrom<u16> for StyleAttribute {
    type Error = AnsiError;

    fn try_from(code: u16) -> AnsiResult<Self> {
        StyleAttribute::from_code(code)
    }
}

impl std::fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
