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


//! Styled documents for chat clients that render a subset of ANSI escapes.
//!
//! A [`Document`] is built from plain text, styled range by range with
//! [`apply_style`], serialized with [`serialize`] and wrapped for pasting
//! with [`wrap`]. [`EditingSession`] ties these together for an editing
//! surface.

mod config;
mod fence;
mod guard;
mod node;
mod result;
mod serializer;
mod session;
mod styling;

pub use self::config::{EmitPolicy, StylerConfig};
pub use self::fence::{ANSI_LANGUAGE, FENCE, unwrap_fence, wrap, wrap_with};
pub use self::guard::{SurfaceNode, admit};
pub use self::node::{Document, DocumentNode};
pub use self::result::{DocumentError, DocumentResult};
pub use self::serializer::{AnsiSerializer, serialize};
pub use self::session::{ActiveStyles, Clipboard, CopyFeedback, EditingSession, Toggle};
pub use self::styling::apply_style;
pub use ansiscribe_ansicodec::{
    AnsiError, Background, Foreground, GraphicState, StyleAttribute, StyleClass, TextStyle,
};
