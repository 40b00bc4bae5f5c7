use crate::interactive::constants::*;
use crate::interactive::ui::components::{Component, view_layout::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::ChatMessage;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Selectable list of transcript messages, one row per message.
#[derive(Default)]
pub struct TranscriptList {
    messages: Vec<ChatMessage>,
    selected_index: usize,
    scroll_offset: usize,
}

impl TranscriptList {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    fn format_timestamp(timestamp: Option<&str>) -> String {
        match timestamp.and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok()) {
            Some(dt) => dt.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    /// One-line summary of a message for the list row.
    fn summary(message: &ChatMessage) -> String {
        match message {
            ChatMessage::User { content, .. } => {
                content.lines().next().unwrap_or("").to_string()
            }
            ChatMessage::Assistant {
                content,
                tool_calls,
                ..
            } => {
                let requested: Vec<&str> = tool_calls
                    .iter()
                    .filter(|tc| tc.id.is_some())
                    .map(|tc| tc.name.as_str())
                    .collect();
                if requested.is_empty() {
                    content.lines().next().unwrap_or("").to_string()
                } else {
                    format!("⏺ {}", requested.join(", "))
                }
            }
            ChatMessage::Tool { name, .. } => {
                format!("⎿ {}", name.as_deref().unwrap_or("result"))
            }
        }
    }

    fn row_line(&self, index: usize, message: &ChatMessage) -> Line<'static> {
        let timestamp = Self::format_timestamp(message.timestamp());
        let text = format!(
            "{:<TIMESTAMP_COLUMN_WIDTH$}{:<ROLE_COLUMN_WIDTH$}{}",
            timestamp,
            message.role(),
            Self::summary(message),
        );

        if index == self.selected_index {
            Line::from(Span::styled(text, Styles::selected()))
        } else {
            Line::from(Span::styled(text, Styles::normal()))
        }
    }
}

impl Component for TranscriptList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Transcript ({} messages)", self.messages.len()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.messages.is_empty() {
            let empty = Paragraph::new("No messages")
                .style(Styles::dimmed())
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        // Keep the selection inside the visible window.
        let visible_height = inner.height as usize;
        if visible_height > 0 {
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            } else if self.selected_index >= self.scroll_offset + visible_height {
                self.scroll_offset = self.selected_index + 1 - visible_height;
            }
        }

        let lines: Vec<Line> = self
            .messages
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_height)
            .map(|(index, message)| self.row_line(index, message))
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectDown),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Char('g') => Some(Message::SelectFirst),
            KeyCode::Char('G') => Some(Message::SelectLast),
            _ => None,
        }
    }
}
