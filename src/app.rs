use crate::config::Config;
use crate::content::block::DisplayBlock;
use crate::content::section::Section;
use crate::content::select::{ConversionMapping, SimulationState, query_response, select};
use crate::ui::components::sidebar::Sidebar;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Which part of the page owns keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Controls,
    Query,
}

pub struct App {
    pub sidebar: Sidebar<'static>,
    pub focus: Focus,
    pub sim: SimulationState,
    pub mapping: ConversionMapping,
    pub query: LineInput,
    pub query_reply: Option<DisplayBlock>,
    pub content_scroll: usize,
    pub control_selected: usize,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut sidebar = Sidebar::new(theme);
        sidebar.set_section(config.start_section());

        Self {
            sidebar,
            focus: Focus::Sidebar,
            sim: SimulationState::default(),
            mapping: ConversionMapping::default(),
            query: LineInput::new(""),
            query_reply: None,
            content_scroll: 0,
            control_selected: 0,
            theme,
            config,
            should_quit: false,
        }
    }

    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
        self.sidebar.theme = theme;
    }

    pub fn section(&self) -> Section {
        self.sidebar.section()
    }

    pub fn set_section(&mut self, section: Section) {
        self.sidebar.set_section(section);
        self.after_section_change();
    }

    pub fn next_section(&mut self) {
        self.sidebar.next();
        self.after_section_change();
    }

    pub fn prev_section(&mut self) {
        self.sidebar.prev();
        self.after_section_change();
    }

    fn after_section_change(&mut self) {
        self.content_scroll = 0;
        self.control_selected = 0;
        if self.focus == Focus::Controls && !self.section().has_controls() {
            self.set_focus(Focus::Sidebar);
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sidebar.focused = focus == Focus::Sidebar;
    }

    /// The block sequence currently on screen: the selector output for the
    /// active section, plus the question acknowledgment once one exists.
    pub fn visible_blocks(&self) -> Vec<DisplayBlock> {
        let mut blocks = select(self.section(), &self.sim, &self.mapping);
        if let Some(ref reply) = self.query_reply {
            blocks.push(reply.clone());
        }
        blocks
    }

    pub fn submit_query(&mut self) {
        self.query_reply = query_response(self.query.value());
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Sidebar if self.section().has_controls() => Focus::Controls,
            Focus::Sidebar => Focus::Query,
            Focus::Controls => Focus::Query,
            Focus::Query => Focus::Sidebar,
        };
        self.set_focus(next);
    }

    pub fn control_row_count(&self) -> usize {
        match self.section() {
            Section::Simulation => 3,
            Section::Converter => 2,
            _ => 0,
        }
    }

    pub fn control_next(&mut self) {
        let count = self.control_row_count();
        if count > 0 {
            self.control_selected = (self.control_selected + 1) % count;
        }
    }

    pub fn control_prev(&mut self) {
        let count = self.control_row_count();
        if count > 0 {
            self.control_selected = (self.control_selected + count - 1) % count;
        }
    }

    /// Space/Enter on a control row: toggles checkboxes, advances selectors.
    pub fn control_activate(&mut self) {
        match (self.section(), self.control_selected) {
            (Section::Simulation, 0) => self.sim.pdf_shx_enabled = !self.sim.pdf_shx_enabled,
            (Section::Simulation, 2) => {
                self.sim.combine_text_enabled = !self.sim.combine_text_enabled
            }
            _ => self.control_cycle_forward(),
        }
    }

    pub fn control_cycle_forward(&mut self) {
        match (self.section(), self.control_selected) {
            (Section::Simulation, 0) => self.sim.pdf_shx_enabled = !self.sim.pdf_shx_enabled,
            (Section::Simulation, 1) => self.sim.selected_font = self.sim.selected_font.next(),
            (Section::Simulation, 2) => {
                self.sim.combine_text_enabled = !self.sim.combine_text_enabled
            }
            (Section::Converter, 0) => self.mapping.source = self.mapping.source.next(),
            (Section::Converter, 1) => self.mapping.target = self.mapping.target.next(),
            _ => {}
        }
    }

    pub fn control_cycle_backward(&mut self) {
        match (self.section(), self.control_selected) {
            (Section::Simulation, 0) => self.sim.pdf_shx_enabled = !self.sim.pdf_shx_enabled,
            (Section::Simulation, 1) => self.sim.selected_font = self.sim.selected_font.prev(),
            (Section::Simulation, 2) => {
                self.sim.combine_text_enabled = !self.sim.combine_text_enabled
            }
            (Section::Converter, 0) => self.mapping.source = self.mapping.source.prev(),
            (Section::Converter, 1) => self.mapping.target = self.mapping.target.prev(),
            _ => {}
        }
    }

    pub fn scroll_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::block::CalloutKind;
    use crate::content::fonts::{ShxFont, TrueTypeFont};

    // Avoids Config::load so tests don't depend on the host config dir.
    fn test_app() -> App {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App {
            sidebar: Sidebar::new(theme),
            focus: Focus::Sidebar,
            sim: SimulationState::default(),
            mapping: ConversionMapping::default(),
            query: LineInput::new(""),
            query_reply: None,
            content_scroll: 0,
            control_selected: 0,
            theme,
            config: Config::default(),
            should_quit: false,
        }
    }

    #[test]
    fn section_change_resets_scroll_and_control_selection() {
        let mut app = test_app();
        app.set_section(Section::Simulation);
        app.content_scroll = 5;
        app.control_selected = 2;

        app.next_section();
        assert_eq!(app.section(), Section::Converter);
        assert_eq!(app.content_scroll, 0);
        assert_eq!(app.control_selected, 0);
    }

    #[test]
    fn focus_cycle_skips_controls_on_static_sections() {
        let mut app = test_app();
        assert_eq!(app.section(), Section::Overview);

        app.focus_next();
        assert_eq!(app.focus, Focus::Query);
        app.focus_next();
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn focus_cycle_includes_controls_on_interactive_sections() {
        let mut app = test_app();
        app.set_section(Section::Converter);

        app.focus_next();
        assert_eq!(app.focus, Focus::Controls);
        app.focus_next();
        assert_eq!(app.focus, Focus::Query);
        app.focus_next();
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn leaving_controls_section_drops_controls_focus() {
        let mut app = test_app();
        app.set_section(Section::Simulation);
        app.focus = Focus::Controls;

        app.set_section(Section::Overview);
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn control_activation_toggles_and_cycles() {
        let mut app = test_app();
        app.set_section(Section::Simulation);

        assert!(app.sim.pdf_shx_enabled);
        app.control_activate();
        assert!(!app.sim.pdf_shx_enabled);

        app.control_next();
        assert_eq!(app.control_selected, 1);
        app.control_cycle_forward();
        assert_eq!(app.sim.selected_font, ShxFont::Romans);
        app.control_cycle_backward();
        assert_eq!(app.sim.selected_font, ShxFont::Simplex);

        app.control_next();
        app.control_activate();
        assert!(app.sim.combine_text_enabled);
    }

    #[test]
    fn converter_controls_cycle_both_fonts() {
        let mut app = test_app();
        app.set_section(Section::Converter);

        app.control_cycle_forward();
        assert_eq!(app.mapping.source, ShxFont::Romans);

        app.control_next();
        app.control_cycle_forward();
        assert_eq!(app.mapping.target, TrueTypeFont::TimesNewRoman);

        app.control_next();
        assert_eq!(app.control_selected, 0, "selection wraps over two rows");
    }

    #[test]
    fn submit_query_sets_reply_only_when_nonempty() {
        let mut app = test_app();
        app.submit_query();
        assert!(app.query_reply.is_none());

        app.query = LineInput::new("my text shows as comments");
        app.submit_query();
        let reply = app.query_reply.clone().unwrap();
        assert!(reply.text().starts_with("Thanks for your question!"));

        app.query = LineInput::new("   ");
        app.submit_query();
        assert!(app.query_reply.is_none());
    }

    #[test]
    fn visible_blocks_append_reply_after_selector_output() {
        let mut app = test_app();
        app.set_section(Section::Simulation);
        app.query = LineInput::new("help");
        app.submit_query();

        let blocks = app.visible_blocks();
        assert!(blocks.last().unwrap().text().starts_with("Thanks for your question!"));
        // Selector output itself is unchanged underneath
        assert!(blocks.iter().any(|b| b.is_callout(CalloutKind::Warning)));
    }

    #[test]
    fn scroll_saturates_at_zero() {
        let mut app = test_app();
        app.scroll_up();
        assert_eq!(app.content_scroll, 0);
        app.scroll_down();
        app.scroll_down();
        app.scroll_up();
        assert_eq!(app.content_scroll, 1);
    }
}
