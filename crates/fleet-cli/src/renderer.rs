//! Terminal output.
//!
//! Core results are markdown. With colors enabled, headers are printed in
//! blue with their hash marks kept, critical alert lines in red, and the
//! rest goes through termimad for inline styling. With `--no-color` the
//! markdown is printed untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match Self::highlight(line) {
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Lines printed verbatim in a fixed color instead of through the skin.
    fn highlight(line: &str) -> Option<&'static str> {
        if line.starts_with('#') {
            Some(BLUE)
        } else if line.contains("Critical") || line.starts_with("Error:") {
            Some(RED)
        } else {
            None
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("## Trip 1\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_highlight_headers_and_critical_alerts() {
        assert_eq!(TerminalRenderer::highlight("## AB-123-CD (ID: 1)"), Some(BLUE));
        assert_eq!(
            TerminalRenderer::highlight("- ✖ Critical tire_check: AB-123-CD due in 300 km"),
            Some(RED)
        );
        assert_eq!(TerminalRenderer::highlight("- **Status**: active"), None);
    }
}
