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


//! Style vocabulary and SGR handling for chat-client flavored ANSI text.

mod decode;
mod result;
mod state;
mod style;
pub mod utility;

pub use self::decode::{Rendition, StyleFlags, StyledChar, StyledRun, decode_runs, decode_styled};
pub use self::result::{AnsiError, AnsiResult};
pub use self::state::{GraphicState, RESET};
pub use self::style::{
    Background, CLASS_NAME_PREFIX, Foreground, StyleAttribute, StyleClass, TextStyle,
};
pub use self::utility::strip_ansi_codes;
