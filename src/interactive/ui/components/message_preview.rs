use crate::interactive::ui::components::{Component, view_layout::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Preview pane for plain user/assistant messages (no tool artifacts).
#[derive(Default)]
pub struct MessagePreview {
    role: Option<String>,
    text: String,
}

impl MessagePreview {
    pub fn new() -> Self {
        Self {
            role: None,
            text: String::new(),
        }
    }

    pub fn set_message(&mut self, role: Option<String>, text: String) {
        self.role = role;
        self.text = text;
    }
}

impl Component for MessagePreview {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Message");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(role) = &self.role else {
            let empty = Paragraph::new("No message selected")
                .style(Styles::dimmed())
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(empty, inner);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Role: ", Styles::label()),
                Span::raw(role.clone()),
            ]),
            Line::from("─".repeat(inner.width as usize)),
        ];

        let visible_height = inner.height as usize;
        let body_height = visible_height.saturating_sub(lines.len() + 1);
        let total_lines = self.text.lines().count();

        for line in self.text.lines().take(body_height) {
            lines.push(Line::from(line.to_string()));
        }
        if total_lines > body_height {
            lines.push(Line::from(Span::styled("...", Styles::dimmed())));
        }

        let content = Paragraph::new(lines).wrap(Wrap { trim: false });
        f.render_widget(content, inner);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Preview is read-only
        None
    }
}
