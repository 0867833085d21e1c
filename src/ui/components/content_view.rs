use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::block::{CalloutKind, DisplayBlock};
use crate::ui::layout::wrap_text;
use crate::ui::theme::Theme;

/// Renders a selector output sequence with word wrapping and scrolling.
pub struct ContentView<'a> {
    blocks: &'a [DisplayBlock],
    theme: &'a Theme,
    scroll: usize,
}

impl<'a> ContentView<'a> {
    pub fn new(blocks: &'a [DisplayBlock], theme: &'a Theme, scroll: usize) -> Self {
        Self {
            blocks,
            theme,
            scroll,
        }
    }
}

fn callout_marker(kind: CalloutKind) -> &'static str {
    match kind {
        CalloutKind::Info => "\u{2139}",  // ℹ
        CalloutKind::Warning => "!",
        CalloutKind::Success => "\u{2713}", // ✓
    }
}

/// Total wrapped line count for a block sequence at the given text width.
/// Used to clamp the scroll offset.
pub fn line_count(blocks: &[DisplayBlock], width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let mut count = 0;
    for block in blocks {
        count += match block {
            DisplayBlock::Heading(t) => wrap_text(t, width).len() + 1,
            DisplayBlock::Paragraph(t) => wrap_text(t, width).len() + 1,
            DisplayBlock::ListItem(t) => wrap_text(t, width.saturating_sub(2)).len(),
            DisplayBlock::Callout(_, t) => wrap_text(t, width.saturating_sub(2)).len() + 1,
        };
    }
    count
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize - 2;

        let mut lines: Vec<Line> = Vec::new();
        for display in self.blocks {
            match display {
                DisplayBlock::Heading(text) => {
                    for wrapped in wrap_text(text, width) {
                        lines.push(Line::from(Span::styled(
                            format!(" {wrapped}"),
                            Style::default()
                                .fg(colors.accent())
                                .add_modifier(Modifier::BOLD),
                        )));
                    }
                    lines.push(Line::from(""));
                }
                DisplayBlock::Paragraph(text) => {
                    for wrapped in wrap_text(text, width) {
                        lines.push(Line::from(Span::styled(
                            format!(" {wrapped}"),
                            Style::default().fg(colors.fg()),
                        )));
                    }
                    lines.push(Line::from(""));
                }
                DisplayBlock::ListItem(text) => {
                    // Continuation lines hang under the marker
                    for (i, wrapped) in
                        wrap_text(text, width.saturating_sub(2)).into_iter().enumerate()
                    {
                        let indent = if i == 0 { "   " } else { "     " };
                        lines.push(Line::from(Span::styled(
                            format!("{indent}{wrapped}"),
                            Style::default().fg(colors.fg()),
                        )));
                    }
                }
                DisplayBlock::Callout(kind, text) => {
                    let color = colors.callout(*kind);
                    let marker = callout_marker(*kind);
                    for (i, wrapped) in
                        wrap_text(text, width.saturating_sub(2)).into_iter().enumerate()
                    {
                        let prefix = if i == 0 {
                            format!(" {marker} ")
                        } else {
                            "   ".to_string()
                        };
                        lines.push(Line::from(Span::styled(
                            format!("{prefix}{wrapped}"),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        )));
                    }
                    lines.push(Line::from(""));
                }
            }
        }

        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let scroll = self.scroll.min(max_scroll) as u16;

        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}
