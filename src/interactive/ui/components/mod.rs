pub mod help_dialog;
pub mod message_preview;
pub mod tool_call_list;
pub mod tool_result_view;
pub mod transcript_list;
pub mod view_layout;

#[cfg(test)]
mod tool_call_list_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

use self::view_layout::Styles;

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Lay out key/value rows as a two-column block. Multi-line values (nested
/// JSON) continue under the value column.
pub fn key_value_lines(rows: &[(String, String)]) -> Vec<Line<'static>> {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (key, value) in rows {
        let mut value_lines = value.split('\n');
        let first = value_lines.next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("{key:<key_width$}"), Styles::label()),
            Span::raw("  "),
            Span::raw(first.to_string()),
        ]));
        for continuation in value_lines {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(key_width + 2)),
                Span::raw(continuation.to_string()),
            ]));
        }
    }
    lines
}
