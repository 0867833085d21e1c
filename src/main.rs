mod app;
mod config;
mod content;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, Focus};
use content::Section;
use event::{AppEvent, EventPump};
use ui::components::content_view::ContentView;
use ui::components::controls::{ControlsPanel, converter_rows, simulation_rows};
use ui::layout::AppLayout;
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(
    name = "shxhelp",
    version,
    about = "Terminal guide to AutoCAD SHX text and its PDF export quirks"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(
        short,
        long,
        help = "Section to open (overview, pdf-issues, editing, simulation, converter)"
    )]
    section: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.set_theme(theme);
            app.config.theme = theme_name;
        }
    }
    if let Some(ref key) = cli.section {
        if let Some(section) = Section::from_key(key) {
            app.set_section(section);
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventPump::spawn(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Remember where the user left off
    app.config.start_section = app.section().as_key().to_string();
    let _ = app.config.save();

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventPump,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.focus == Focus::Query {
        handle_query_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::Char('/') => {
            app.set_focus(Focus::Query);
            return;
        }
        KeyCode::Char(ch @ '1'..='5') => {
            let idx = ch as usize - '1' as usize;
            app.set_section(Section::ALL[idx]);
            return;
        }
        KeyCode::PageDown => {
            app.scroll_down();
            return;
        }
        KeyCode::PageUp => {
            app.scroll_up();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Controls => handle_controls_key(app, key),
        Focus::Query => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.next_section(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_section(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            if app.section().has_controls() {
                app.set_focus(Focus::Controls);
            }
        }
        _ => {}
    }
}

fn handle_controls_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.control_next(),
        KeyCode::Up | KeyCode::Char('k') => app.control_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.control_activate(),
        KeyCode::Right | KeyCode::Char('l') => app.control_cycle_forward(),
        KeyCode::Left | KeyCode::Char('h') => app.control_cycle_backward(),
        _ => {}
    }
}

fn handle_query_key(app: &mut App, key: KeyEvent) {
    match app.query.handle(key) {
        InputResult::Submit => app.submit_query(),
        InputResult::Cancel => app.set_focus(Focus::Sidebar),
        InputResult::Continue => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    render_header(frame, app, layout.header, layout.sidebar.is_none());

    if let Some(sidebar_area) = layout.sidebar {
        frame.render_widget(&app.sidebar, sidebar_area);
    }

    render_content(frame, app, layout.content);
    render_query(frame, app, layout.query);
    render_footer(frame, app, layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect, show_position: bool) {
    let colors = &app.theme.colors;

    let position = if show_position {
        format!(
            " [{}/{}]",
            app.section().index() + 1,
            Section::ALL.len()
        )
    } else {
        String::new()
    };
    let info = format!(" {}{}", app.section().title(), position);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " shxhelp ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_content(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let blocks = app.visible_blocks();

    if app.section().has_controls() {
        let rows = match app.section() {
            Section::Simulation => simulation_rows(&app.sim),
            Section::Converter => converter_rows(&app.mapping),
            _ => Vec::new(),
        };
        let panel_height = ControlsPanel::height(rows.len());

        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(panel_height), Constraint::Min(4)])
            .split(area);

        let panel = ControlsPanel::new(
            rows,
            app.control_selected,
            app.focus == Focus::Controls,
            app.theme,
        );
        frame.render_widget(panel, split[0]);

        let view = ContentView::new(&blocks, app.theme, app.content_scroll);
        frame.render_widget(view, split[1]);
    } else {
        let view = ContentView::new(&blocks, app.theme, app.content_scroll);
        frame.render_widget(view, area);
    }
}

fn render_query(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let focused = app.focus == Focus::Query;

    let border = if focused {
        colors.border_focused()
    } else {
        colors.border()
    };
    let block = Block::bordered()
        .title(" Have a specific SHX text issue? Ask here: ")
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let (before, cursor_char, after) = app.query.render_parts();
    let mut spans = vec![Span::styled(
        format!(" {before}"),
        Style::default().fg(colors.fg()),
    )];
    if focused {
        spans.push(Span::styled(
            cursor_char.map(String::from).unwrap_or_else(|| " ".to_string()),
            Style::default().fg(colors.bg()).bg(colors.fg()),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(colors.fg()),
        ));
    } else if app.query.value().is_empty() {
        spans = vec![Span::styled(
            " Press / to type a question",
            Style::default().fg(colors.text_dim()),
        )];
    }

    Paragraph::new(Line::from(spans)).render(inner, frame.buffer_mut());
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let hints: Vec<&str> = match app.focus {
        Focus::Sidebar => vec![
            "[j/k] Section",
            "[1-5] Jump",
            "[Tab] Focus",
            "[/] Ask",
            "[PgUp/PgDn] Scroll",
            "[q] Quit",
        ],
        Focus::Controls => vec![
            "[j/k] Row",
            "[Space] Toggle",
            "[h/l] Change",
            "[Tab] Focus",
            "[q] Quit",
        ],
        Focus::Query => vec!["[Enter] Submit", "[Esc] Back"],
    };

    let lines = ui::layout::pack_hint_lines(&hints, area.width as usize);
    if let Some(first) = lines.first() {
        let footer = Paragraph::new(Line::from(Span::styled(
            first.clone(),
            Style::default().fg(colors.text_dim()),
        )));
        frame.render_widget(footer, area);
    }
}
