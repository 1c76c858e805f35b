//! Main TUI application state and logic

use crate::codegen::CodegenOptions;
use crate::driver::{translate_file, Translation};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Rows moved by PageUp/PageDown before the first frame reports a real height.
const DEFAULT_PAGE_HEIGHT: usize = 20;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// File being viewed; re-read on reload
    pub path: PathBuf,

    pub options: CodegenOptions,

    /// Latest successful read of `path`
    pub translation: Translation,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Content rows of a pane in the last frame
    pub page_height: usize,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    /// Create a new app showing an already translated file
    pub fn new(path: PathBuf, options: CodegenOptions, translation: Translation) -> Self {
        let status_message = summarize(&translation);
        App {
            path,
            options,
            translation,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            page_height: DEFAULT_PAGE_HEIGHT,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.page_height = main_chunks[0].height.saturating_sub(2).max(1) as usize;

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.translation.source,
            self.translation.error_line(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.translation,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.file_name(),
            &self.status_message,
            self.translation.is_ok(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page_height),
            KeyCode::PageDown => self.scroll_down(self.page_height),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            _ => {}
        }
    }

    /// Re-read the file and translate it again. A read failure keeps the
    /// previous translation on screen.
    pub fn reload(&mut self) {
        match translate_file(&self.path, &self.options) {
            Ok(translation) => {
                self.translation = translation;
                self.status_message = format!("Reloaded: {}", summarize(&self.translation));
                tracing::info!(path = %self.path.display(), ok = self.translation.is_ok(), "reloaded");
            }
            Err(err) => {
                self.status_message = format!("Reload failed: {:#}", err);
                tracing::warn!(error = %format!("{:#}", err), "reload failed");
            }
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        let scroll = self.focused_scroll();
        *scroll = scroll.saturating_sub(rows);
    }

    /// Only stops at the last line here; rendering clamps to the last page.
    fn scroll_down(&mut self, rows: usize) {
        let last_line = self.focused_line_count().saturating_sub(1);
        let scroll = self.focused_scroll();
        *scroll = scroll.saturating_add(rows).min(last_line);
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    fn focused_line_count(&self) -> usize {
        match self.focused_pane {
            FocusedPane::Source => self.translation.source.lines().count(),
            FocusedPane::Output => super::panes::output_line_count(&self.translation),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn summarize(translation: &Translation) -> String {
    match &translation.result {
        Ok(python) => format!("translated to {} line(s) of Python", python.lines().count()),
        Err(err) => format!("translation stopped at {}", err.location()),
    }
}
