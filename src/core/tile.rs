//! # Tile
//!
//! A single bordered box around one raw value. Every grid item and the
//! value box render through this.
//!
//! ```text
//! ╭─────────╮
//! │    A    │
//! ╰─────────╯
//! ```
//!
//! Selected tiles are drawn reversed so the highlight adapts to light and
//! dark terminal themes.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::core::render::Renderable;

/// Shown when a tile is built from an empty string.
pub const PLACEHOLDER: &str = "BoxPlaceholderText";

/// Horizontal padding on each side of the value.
const PADDING_X: usize = 4;

pub const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    raw: String,
}

impl Tile {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let raw = if text.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            text
        };
        Self { raw }
    }

    /// The unstyled value, as written to the store on activation.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn styled(&self, selected: bool) -> Text<'static> {
        let style = if selected {
            SELECTED_STYLE
        } else {
            Style::default()
        };

        let inner = self.raw.width() + 2 * PADDING_X;
        let rule = "─".repeat(inner);
        let pad = " ".repeat(PADDING_X);

        Text::from(vec![
            Line::from(Span::styled(format!("╭{rule}╮"), style)),
            Line::from(Span::styled(format!("│{pad}{}{pad}│", self.raw), style)),
            Line::from(Span::styled(format!("╰{rule}╯"), style)),
        ])
    }
}

impl Renderable for Tile {
    fn render(&self) -> Text<'static> {
        self.styled(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::plain;

    #[test]
    fn test_empty_text_uses_placeholder() {
        assert_eq!(Tile::new("").raw(), PLACEHOLDER);
        assert_eq!(Tile::new("A").raw(), "A");
    }

    #[test]
    fn test_tile_draws_rounded_border_with_padding() {
        let text = Tile::new("A").render();
        assert_eq!(
            plain(&text),
            "╭─────────╮\n│    A    │\n╰─────────╯"
        );
    }

    #[test]
    fn test_selected_tile_is_reversed() {
        let text = Tile::new("A").styled(true);
        assert!(text.lines.iter().all(|line| {
            line.spans
                .iter()
                .all(|span| span.style.add_modifier.contains(Modifier::REVERSED))
        }));

        let text = Tile::new("A").styled(false);
        assert!(text.lines.iter().all(|line| {
            line.spans
                .iter()
                .all(|span| !span.style.add_modifier.contains(Modifier::REVERSED))
        }));
    }

    #[test]
    fn test_wide_characters_keep_border_aligned() {
        let text = Tile::new("日本").render();
        let widths: Vec<usize> = text.lines.iter().map(Line::width).collect();
        assert_eq!(widths, vec![14, 14, 14]);
    }
}
