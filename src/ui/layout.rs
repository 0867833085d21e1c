use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: sidebar + content
    Narrow, // <90 cols: content only, section shown in the header
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub query: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        if tier.show_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(32), Constraint::Min(40)])
                .split(vertical[1]);

            Self {
                header: vertical[0],
                sidebar: Some(horizontal[0]),
                content: horizontal[1],
                query: vertical[2],
                footer: vertical[3],
                tier,
            }
        } else {
            Self {
                header: vertical[0],
                sidebar: None,
                content: vertical[1],
                query: vertical[2],
                footer: vertical[3],
                tier,
            }
        }
    }
}

/// Greedy word wrap. Words longer than the width are split hard.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                // Hard-split an overlong word
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == width {
                        lines.push(std::mem::take(&mut chunk));
                    }
                    chunk.push(ch);
                }
                current = chunk;
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == width {
                        lines.push(std::mem::take(&mut chunk));
                    }
                    chunk.push(ch);
                }
                current = chunk;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 90, 30)),
            LayoutTier::Wide
        );
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 89, 30)),
            LayoutTier::Narrow
        );
    }

    #[test]
    fn wide_layout_has_sidebar_narrow_does_not() {
        let wide = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert!(wide.sidebar.is_some());

        let narrow = AppLayout::new(Rect::new(0, 0, 60, 40));
        assert!(narrow.sidebar.is_none());
    }

    #[test]
    fn wrap_text_basic() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_text_fits_on_one_line() {
        assert_eq!(wrap_text("short", 80), vec!["short"]);
    }

    #[test]
    fn wrap_text_splits_overlong_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_text_zero_width_is_empty() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn wrap_text_empty_input_yields_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn pack_hints_fill_width() {
        let hints = ["[j/k] Section", "[Tab] Focus", "[q] Quit"];
        let lines = pack_hint_lines(&hints, 80);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[j/k] Section"));
        assert!(lines[0].contains("[q] Quit"));
    }

    #[test]
    fn pack_hints_overflow_to_next_line() {
        let hints = ["[j/k] Section", "[Tab] Focus", "[q] Quit"];
        let lines = pack_hint_lines(&hints, 20);
        assert!(lines.len() > 1);
    }
}
