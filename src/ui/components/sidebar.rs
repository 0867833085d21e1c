use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::section::Section;
use crate::ui::theme::Theme;

/// Section navigation list. Selection is the single source of truth for
/// which section the content area shows.
pub struct Sidebar<'a> {
    pub selected: usize,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            selected: 0,
            theme,
            focused: true,
        }
    }

    pub fn section(&self) -> Section {
        Section::ALL[self.selected.min(Section::ALL.len() - 1)]
    }

    pub fn set_section(&mut self, section: Section) {
        self.selected = section.index();
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = Section::ALL.len() - 1;
        }
    }
}

impl Widget for &Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Navigation ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                Section::ALL
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (i, section) in Section::ALL.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let label_text = format!(" {indicator} [{}] {}", i + 1, section.label());
            let desc_text = format!("     {}", section.description());

            let lines = vec![
                Line::from(Span::styled(
                    label_text,
                    Style::default()
                        .fg(if is_selected {
                            colors.accent()
                        } else {
                            colors.fg()
                        })
                        .add_modifier(if is_selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                )),
                Line::from(Span::styled(
                    desc_text,
                    Style::default().fg(colors.text_dim()),
                )),
            ];

            if i < rows.len() {
                Paragraph::new(lines).render(rows[i], buf);
            }
        }
    }
}
