use crate::formatters::{
    DisplayContent, can_toggle, display_slice, parse_result_content, table_rows,
};
use crate::interactive::ui::components::{Component, key_value_lines, view_layout::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::{ResultStatus, ToolResultMessage};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Detail view of one tool-result message with an expand/collapse toggle.
///
/// Every render recomputes classification, truncation, and table rows from
/// `(message, expanded)`, so redrawing with the same pair is idempotent.
pub struct ToolResultView {
    message: Option<ToolResultMessage>,
    expanded: bool,
}

impl Default for ToolResultView {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolResultView {
    pub fn new() -> Self {
        Self {
            message: None,
            expanded: false,
        }
    }

    /// Show a message. Moving to a different message collapses the view;
    /// re-setting the same message keeps the current toggle state.
    pub fn set_message(&mut self, message: Option<ToolResultMessage>) {
        if self.message != message {
            self.expanded = false;
        }
        self.message = message;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn header_line(message: &ToolResultMessage) -> Line<'static> {
        let (badge, badge_style) = match message.status {
            ResultStatus::Success => ("✓", Styles::success()),
            ResultStatus::Error => ("✗", Styles::error()),
        };

        let mut spans = vec![Span::styled(badge.to_string(), badge_style)];
        spans.push(Span::raw(" "));
        match &message.name {
            Some(name) => spans.push(Span::styled(name.clone(), Styles::title())),
            None => spans.push(Span::styled("(unnamed tool)".to_string(), Styles::dimmed())),
        }
        Line::from(spans)
    }

    fn content_lines(&self, content: &DisplayContent) -> Vec<Line<'static>> {
        match content {
            DisplayContent::Json(value) => {
                key_value_lines(&table_rows(value, self.expanded))
            }
            DisplayContent::Text(text) => display_slice(text, self.expanded)
                .split('\n')
                .map(|line| Line::from(line.to_string()))
                .collect(),
        }
    }

    fn toggle_line(&self) -> Line<'static> {
        let hint = if self.expanded {
            "▲ collapse (Enter)"
        } else {
            "▼ expand (Enter)"
        };
        Line::from(Span::styled(hint.to_string(), Styles::dimmed()))
    }
}

impl Component for ToolResultView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(message) = &self.message else {
            return;
        };

        let content = parse_result_content(&message.content);

        let mut lines = vec![Self::header_line(message), Line::from("")];
        lines.extend(self.content_lines(&content));
        if can_toggle(&content) {
            lines.push(Line::from(""));
            lines.push(self.toggle_line());
        }

        let block = Block::default().borders(Borders::ALL).title("Tool Result");
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(message) = &self.message {
                    let content = parse_result_content(&message.content);
                    if can_toggle(&content) {
                        self.expanded = !self.expanded;
                    }
                }
                None
            }
            _ => None,
        }
    }
}
