mod editor;
mod preview;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use editor::LineBuffer;
use fuego_mark_config::Config;
use fuego_mark_engine::{DocumentStore, EditorSession, FileStore, StyleCommand};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    fs::OpenOptions,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

const LOG_FILE: &str = "fuego-mark.log";
const TICK: Duration = Duration::from_millis(200);

struct App<S: DocumentStore> {
    session: EditorSession<S>,
    buffer: LineBuffer,
    palette: Option<ListState>,
    error: Option<String>,
}

impl<S: DocumentStore> App<S> {
    fn new(session: EditorSession<S>) -> Self {
        let buffer = LineBuffer::from_lines(session.document().source_lines());
        Self {
            session,
            buffer,
            palette: None,
            error: None,
        }
    }

    /// Handles one key press. Returns `true` when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.palette.is_some() {
            self.handle_palette_key(key);
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('q') if ctrl => return true,
            KeyCode::Char('b') if ctrl => self.apply(StyleCommand::Bold),
            KeyCode::Char('i') if ctrl => self.apply(StyleCommand::Italic),
            KeyCode::Tab => self.apply(StyleCommand::Italic),
            KeyCode::Char('k') if ctrl => self.open_palette(),
            KeyCode::F(2) => {
                let on = self.session.toggle_focus_mode();
                log::debug!("focus mode {}", if on { "on" } else { "off" });
            }
            KeyCode::Char(c) if !ctrl => {
                self.buffer.insert_char(c);
                self.content_changed();
            }
            KeyCode::Enter => {
                self.buffer.newline();
                self.content_changed();
            }
            KeyCode::Backspace => {
                self.buffer.backspace();
                self.content_changed();
            }
            KeyCode::Delete => {
                self.buffer.delete();
                self.content_changed();
            }
            KeyCode::Left if shift => self.buffer.select_left(),
            KeyCode::Right if shift => self.buffer.select_right(),
            KeyCode::Home if shift => self.buffer.select_home(),
            KeyCode::End if shift => self.buffer.select_end(),
            KeyCode::Left => self.buffer.left(),
            KeyCode::Right => self.buffer.right(),
            KeyCode::Up => self.buffer.up(),
            KeyCode::Down => self.buffer.down(),
            KeyCode::Home => self.buffer.home(),
            KeyCode::End => self.buffer.end(),
            _ => {}
        }
        false
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        let Some(state) = self.palette.as_mut() else {
            return;
        };
        let len = StyleCommand::ALL.len();
        match key.code {
            KeyCode::Esc => self.palette = None,
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.palette = None
            }
            KeyCode::Down => {
                let i = state.selected().map_or(0, |i| (i + 1) % len);
                state.select(Some(i));
            }
            KeyCode::Up => {
                let i = state.selected().map_or(0, |i| (i + len - 1) % len);
                state.select(Some(i));
            }
            KeyCode::Enter => {
                let command = state
                    .selected()
                    .and_then(|i| StyleCommand::ALL.get(i).copied());
                if let Some(command) = command {
                    self.palette = None;
                    self.apply(command);
                }
            }
            _ => {}
        }
    }

    fn open_palette(&mut self) {
        let mut state = ListState::default();
        state.select(Some(0));
        self.palette = Some(state);
    }

    fn apply(&mut self, command: StyleCommand) {
        log::debug!("applying {}", command.label());
        self.buffer.apply(command);
        self.content_changed();
    }

    fn content_changed(&mut self) {
        match self.session.on_content_changed(self.buffer.units()) {
            Ok(_) => self.error = None,
            Err(e) => {
                log::error!("failed to save {:?}: {e}", self.session.key());
                self.error = Some(e.to_string());
            }
        }
    }
}

fn main() -> Result<()> {
    // Store directory from CLI args, else config file, else defaults
    let args: Vec<String> = env::args().collect();

    let store_override = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [store-dir]", args[0]);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::resolve(&config_path, store_override) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} [store-dir]", args[0]);
            eprintln!("Settings are read from {}", config_path.display());
            process::exit(1);
        }
    };

    let store = match FileStore::create(&config.store_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Error: Store path '{}' is invalid: {e}",
                config.store_path.display()
            );
            process::exit(1);
        }
    };

    init_logging(store.root())?;
    log::info!(
        "using store at {} (settings: {})",
        store.root().display(),
        config_path.display()
    );

    let session = EditorSession::open(store, &config.document_key)
        .with_context(|| format!("opening document {:?}", config.document_key))?
        .with_debounce(config.status_debounce());
    let mut app = App::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

/// Sends log output to a file next to the stored documents; the terminal
/// belongs to the UI.
fn init_logging(dir: &Path) -> Result<()> {
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_app<S: DocumentStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Poll so the save indicator can fall back to "Saved" without input
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)
        {
            return Ok(());
        }
    }
}

fn ui<S: DocumentStore>(f: &mut Frame, app: &mut App<S>) {
    let focus = app.session.focus_mode();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if focus {
            vec![Constraint::Min(0), Constraint::Length(1)]
        } else {
            vec![
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
        })
        .split(f.area());

    let panes = if focus {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(100)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0])
    };

    // Source pane
    let source_area = panes[0];
    let source_block = if focus {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Source: {}", app.session.key()))
    };
    let inner = source_block.inner(source_area);
    let (row, _) = app.buffer.cursor();
    let scroll = row.saturating_sub(inner.height.saturating_sub(1) as usize);

    let source = if app.session.is_blank() && app.buffer.lines().iter().all(|l| l.is_empty()) {
        let placeholder = app.session.placeholder().unwrap_or_default();
        Paragraph::new(Line::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let selection = app.buffer.selection();
        let lines: Vec<Line> = app
            .buffer
            .lines()
            .iter()
            .enumerate()
            .map(|(i, l)| match &selection {
                Some(sel) if i == row => Line::from(vec![
                    Span::raw(&l[..sel.start]),
                    Span::styled(
                        &l[sel.clone()],
                        Style::default().add_modifier(Modifier::REVERSED),
                    ),
                    Span::raw(&l[sel.end..]),
                ]),
                _ => Line::from(l.as_str()),
            })
            .collect();
        Paragraph::new(lines).scroll((scroll as u16, 0))
    };
    f.render_widget(source.block(source_block), source_area);

    // Preview pane
    if !focus {
        let preview = Paragraph::new(preview::render_document(app.session.document()))
            .block(Block::default().borders(Borders::ALL).title("Preview"))
            .wrap(Wrap { trim: false });
        f.render_widget(preview, panes[1]);
    }

    // Status line
    let status = match &app.error {
        Some(e) => Line::from(Span::styled(
            format!("Save failed: {e}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw(app.session.status_label(Instant::now())),
            Span::styled(
                format!("  {} blocks", app.session.document().len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };
    f.render_widget(Paragraph::new(status), rows[1]);

    // Instructions
    if !focus {
        let help_text = Line::from(vec![
            Span::raw("Esc/^Q: Quit | "),
            Span::raw("^B: Bold | "),
            Span::raw("^I/Tab: Italic | "),
            Span::raw("^K: Commands | "),
            Span::raw("Shift+←/→: Select | "),
            Span::raw("F2: Focus"),
        ]);
        f.render_widget(Paragraph::new(help_text), rows[2]);
    }

    if let Some(state) = app.palette.as_mut() {
        let items: Vec<ListItem> = StyleCommand::ALL
            .iter()
            .map(|c| ListItem::new(c.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Commands"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
        let area = centered(f.area(), 24, StyleCommand::ALL.len() as u16 + 2);
        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, state);
    } else {
        let x = inner.x + app.buffer.cursor_char_col() as u16;
        let y = inner.y + (row - scroll) as u16;
        f.set_cursor_position((x.min(inner.right().saturating_sub(1)), y));
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
