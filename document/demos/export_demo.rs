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


//! Styles a short message and prints the fenced export.
//!
//! Run with `cargo run -p ansiscribe-document --example export_demo`.

use ansiscribe_document::{
    Background, Clipboard, DocumentResult, EditingSession, Foreground, StyleAttribute,
    StylerConfig,
};
use tracing::info;

/// Stands in for the system clipboard by printing the export.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> DocumentResult<()> {
        println!("{}", text);
        Ok(())
    }
}

fn main() -> DocumentResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut session = EditingSession::new(StylerConfig::discord());
    session.push_text("Welcome to the server!\nRead the rules first.");

    session.apply_style(0..22, StyleAttribute::Foreground(Foreground::Gold))?;
    session.apply_style(0..7, StyleAttribute::Bold)?;
    session.apply_style(23..44, StyleAttribute::Background(Background::Blurple))?;
    session.apply_style(32..37, StyleAttribute::Underline)?;

    for attribute in StyleAttribute::palette() {
        info!(name = attribute.name(), code = attribute.code(), "palette entry");
    }

    let label = session.copy_to(&mut StdoutClipboard)?;
    info!(label, "export complete");
    Ok(())
}
