use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::select::{ConversionMapping, SimulationState};
use crate::ui::theme::Theme;

/// One interactive row in a panel: a boolean toggle or an enumerated choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlRow {
    Checkbox { label: String, checked: bool },
    Selector { label: String, value: String },
}

/// Rows for the PDF export simulation panel, in fixed order: PDFSHX toggle,
/// SHX font choice, combine-Mtext toggle.
pub fn simulation_rows(sim: &SimulationState) -> Vec<ControlRow> {
    vec![
        ControlRow::Checkbox {
            label: "Enable PDFSHX (Include SHX text as searchable)".to_string(),
            checked: sim.pdf_shx_enabled,
        },
        ControlRow::Selector {
            label: "Select SHX Font".to_string(),
            value: sim.selected_font.to_string(),
        },
        ControlRow::Checkbox {
            label: "Combine Mtext strings after recognition".to_string(),
            checked: sim.combine_text_enabled,
        },
    ]
}

/// Rows for the converter panel: source SHX font, target TrueType font.
pub fn converter_rows(mapping: &ConversionMapping) -> Vec<ControlRow> {
    vec![
        ControlRow::Selector {
            label: "Select SHX Font to Convert".to_string(),
            value: mapping.source.to_string(),
        },
        ControlRow::Selector {
            label: "Map to TrueType Font".to_string(),
            value: mapping.target.to_string(),
        },
    ]
}

pub struct ControlsPanel<'a> {
    rows: Vec<ControlRow>,
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(rows: Vec<ControlRow>, selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            rows,
            selected,
            focused,
            theme,
        }
    }

    /// Area height needed: one line per row plus the border.
    pub fn height(row_count: usize) -> u16 {
        row_count as u16 + 2
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Settings ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            let is_selected = self.focused && i == self.selected;
            let indicator = if is_selected { " > " } else { "   " };

            let text = match row {
                ControlRow::Checkbox { label, checked } => {
                    let mark = if *checked { "x" } else { " " };
                    format!("{indicator}[{mark}] {label}")
                }
                ControlRow::Selector { label, value } => {
                    format!("{indicator}{label}:  < {value} >")
                }
            };

            let style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fonts::{ShxFont, TrueTypeFont};

    #[test]
    fn simulation_rows_reflect_state() {
        let sim = SimulationState {
            pdf_shx_enabled: false,
            selected_font: ShxFont::Isocp,
            combine_text_enabled: true,
        };
        let rows = simulation_rows(&sim);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ControlRow::Checkbox {
                label: "Enable PDFSHX (Include SHX text as searchable)".to_string(),
                checked: false,
            }
        );
        assert_eq!(
            rows[1],
            ControlRow::Selector {
                label: "Select SHX Font".to_string(),
                value: "isocp.shx".to_string(),
            }
        );
        assert_eq!(
            rows[2],
            ControlRow::Checkbox {
                label: "Combine Mtext strings after recognition".to_string(),
                checked: true,
            }
        );
    }

    #[test]
    fn converter_rows_reflect_mapping() {
        let mapping = ConversionMapping {
            source: ShxFont::Txt,
            target: TrueTypeFont::Helvetica,
        };
        let rows = converter_rows(&mapping);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            ControlRow::Selector {
                label: "Select SHX Font to Convert".to_string(),
                value: "txt.shx".to_string(),
            }
        );
        assert_eq!(
            rows[1],
            ControlRow::Selector {
                label: "Map to TrueType Font".to_string(),
                value: "Helvetica".to_string(),
            }
        );
    }

    #[test]
    fn panel_height_covers_rows_and_border() {
        assert_eq!(ControlsPanel::height(3), 5);
        assert_eq!(ControlsPanel::height(2), 4);
    }

    #[test]
    fn renders_checkbox_and_selector_rows() {
        let theme = Theme::default();
        let rows = simulation_rows(&SimulationState::default());
        let area = Rect::new(0, 0, 70, 5);
        let mut buf = Buffer::empty(area);
        ControlsPanel::new(rows, 1, true, &theme).render(area, &mut buf);

        let row0: String = (1..69).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row0.contains("[x] Enable PDFSHX"));

        let row1: String = (1..69).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(row1.contains("> Select SHX Font:  < simplex.shx >"));
    }
}
