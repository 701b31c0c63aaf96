//! Terminal rendering of markdown documents.
//!
//! Uses termimad for inline styling when color is enabled and prints the
//! markdown untouched otherwise.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Format markdown for the terminal.
    ///
    /// Header lines keep their hash marks and are colored as a whole; other
    /// lines go through the termimad skin.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut output = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                output.push_str(&line.blue().to_string());
            } else {
                output.push_str(&self.skin.inline(line).to_string());
            }
            output.push('\n');
        }
        output
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(self.format(markdown).as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
