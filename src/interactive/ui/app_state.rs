use crate::interactive::constants::*;
use crate::interactive::ui::events::Message;
use crate::schemas::ChatMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Transcript,
    Help,
}

pub struct AppState {
    pub mode: Mode,
    pub transcript: TranscriptState,
    pub ui: UiState,
}

pub struct TranscriptState {
    pub messages: Vec<ChatMessage>,
    pub selected_index: usize,
}

pub struct UiState {
    pub status: Option<String>,
}

impl AppState {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            mode: Mode::Transcript,
            transcript: TranscriptState {
                messages,
                selected_index: 0,
            },
            ui: UiState { status: None },
        }
    }

    pub fn selected_message(&self) -> Option<&ChatMessage> {
        self.transcript.messages.get(self.transcript.selected_index)
    }

    /// Apply a component message. Returns true when the application should
    /// quit.
    pub fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::SelectUp => {
                self.transcript.select_up(1);
                false
            }
            Message::SelectDown => {
                self.transcript.select_down(1);
                false
            }
            Message::PageUp => {
                self.transcript.select_up(PAGE_SIZE);
                false
            }
            Message::PageDown => {
                self.transcript.select_down(PAGE_SIZE);
                false
            }
            Message::SelectFirst => {
                self.transcript.selected_index = 0;
                false
            }
            Message::SelectLast => {
                self.transcript.selected_index =
                    self.transcript.messages.len().saturating_sub(1);
                false
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                false
            }
            Message::CloseHelp => {
                self.mode = Mode::Transcript;
                false
            }
            Message::Quit => true,
        }
    }
}

impl TranscriptState {
    fn select_up(&mut self, step: usize) {
        self.selected_index = self.selected_index.saturating_sub(step);
    }

    fn select_down(&mut self, step: usize) {
        if self.messages.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + step).min(self.messages.len() - 1);
    }
}
