use crate::formatters::table_rows;
use crate::interactive::ui::components::{Component, key_value_lines, view_layout::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::ToolInvocation;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Summary list of the tool invocations requested by an assistant message.
/// Invocations without an id are skipped entirely.
#[derive(Default)]
pub struct ToolCallList {
    invocations: Vec<ToolInvocation>,
}

impl ToolCallList {
    pub fn new() -> Self {
        Self {
            invocations: Vec::new(),
        }
    }

    pub fn set_invocations(&mut self, invocations: Vec<ToolInvocation>) {
        self.invocations = invocations;
    }

    fn card_lines(invocation: &ToolInvocation) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("⏺ ", Styles::label()),
            Span::raw("Tool Call: "),
            Span::styled(invocation.name.clone(), Styles::title()),
        ])];

        // Argument tables ignore the collapse flag; arguments are small.
        let rows = table_rows(&invocation.arguments, true);
        for line in key_value_lines(&rows) {
            let mut indented = vec![Span::raw("  ")];
            indented.extend(line.spans);
            lines.push(Line::from(indented));
        }
        lines
    }
}

impl Component for ToolCallList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.invocations.is_empty() {
            return;
        }

        let mut lines = Vec::new();
        for invocation in &self.invocations {
            if invocation.id.is_none() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.extend(Self::card_lines(invocation));
        }

        let block = Block::default().borders(Borders::ALL).title("Tool Calls");
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // The list is read-only
        None
    }
}
