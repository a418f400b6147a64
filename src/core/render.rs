//! # Text Rendering
//!
//! `Renderable` is the one capability composition needs from a widget.
//! The join helpers place rendered blocks next to or under each other,
//! top/left aligned, padding ragged blocks with spaces so columns line up.

use ratatui::text::{Line, Span, Text};

/// A widget that can describe itself as styled text.
///
/// Focus state is baked into the returned `Text` (a focused grid highlights
/// its selected tile), so composing never needs to ask who holds focus.
pub trait Renderable {
    fn render(&self) -> Text<'static>;
}

fn block_width(text: &Text<'_>) -> usize {
    text.lines.iter().map(Line::width).max().unwrap_or(0)
}

/// Append `line`'s spans to `out`, padding to `width` columns.
fn push_padded(out: &mut Vec<Span<'static>>, line: Option<&Line<'static>>, width: usize) {
    let used = match line {
        Some(line) => {
            out.extend(line.spans.iter().cloned());
            line.width()
        }
        None => 0,
    };
    if used < width {
        out.push(Span::raw(" ".repeat(width - used)));
    }
}

/// Place blocks side by side, top aligned.
pub fn join_horizontal(blocks: Vec<Text<'static>>) -> Text<'static> {
    let height = blocks.iter().map(|b| b.lines.len()).max().unwrap_or(0);
    let widths: Vec<usize> = blocks.iter().map(block_width).collect();

    let lines = (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (block, &width) in blocks.iter().zip(&widths) {
                push_padded(&mut spans, block.lines.get(row), width);
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

/// Stack blocks top to bottom, left aligned.
pub fn join_vertical(blocks: Vec<Text<'static>>) -> Text<'static> {
    let width = blocks.iter().map(block_width).max().unwrap_or(0);

    let lines = blocks
        .into_iter()
        .flat_map(|block| block.lines)
        .map(|line| {
            let mut spans = Vec::new();
            push_padded(&mut spans, Some(&line), width);
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
