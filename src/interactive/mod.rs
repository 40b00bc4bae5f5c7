use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub mod constants;
pub mod ui;

use self::constants::*;
use self::ui::{
    app_state::{AppState, Mode},
    components::Component,
    events::Message,
    renderer::Renderer,
};
use crate::schemas::ChatMessage;

pub struct InteractiveViewer {
    state: AppState,
    renderer: Renderer,
    last_ctrl_c_press: Option<Instant>,
    status_timer: Option<Instant>,
}

impl InteractiveViewer {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            state: AppState::new(messages),
            renderer: Renderer::new(),
            last_ctrl_c_press: None,
            status_timer: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Clear the transient status line after its delay
            if let Some(timer) = self.status_timer {
                if timer.elapsed() >= Duration::from_millis(STATUS_CLEAR_DELAY_MS) {
                    self.status_timer = None;
                    self.state.ui.status = None;
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the application should quit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling: quit on a double press
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.status = Some("Press Ctrl+C again to exit".to_string());
            self.status_timer = Some(Instant::now());
            return false;
        }

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Transcript => self.handle_transcript_mode_input(key),
        };

        match message {
            Some(message) => self.state.handle_message(message),
            None => false,
        }
    }

    fn handle_transcript_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Expansion is owned by the result view; a preview without a
                // toggle ignores the key.
                self.renderer.get_tool_result_view_mut().handle_key(key)
            }
            _ => self.renderer.get_transcript_list_mut().handle_key(key),
        }
    }
}
