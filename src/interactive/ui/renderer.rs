use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::interactive::constants::TRANSCRIPT_PANE_PERCENT;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, message_preview::MessagePreview,
    tool_call_list::ToolCallList, tool_result_view::ToolResultView,
    transcript_list::TranscriptList, view_layout::ViewLayout,
};
use crate::schemas::ChatMessage;

pub struct Renderer {
    transcript_list: TranscriptList,
    tool_call_list: ToolCallList,
    tool_result_view: ToolResultView,
    message_preview: MessagePreview,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            transcript_list: TranscriptList::new(),
            tool_call_list: ToolCallList::new(),
            tool_result_view: ToolResultView::new(),
            message_preview: MessagePreview::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Transcript => self.render_transcript_mode(f, state),
            Mode::Help => {
                self.render_transcript_mode(f, state);
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_transcript_mode(&mut self, f: &mut Frame, state: &AppState) {
        let mut layout = ViewLayout::new("Transcript Tool Viewer".to_string());
        if let Some(status) = &state.ui.status {
            layout = layout.with_status_text(status.clone());
        }

        layout.render(f, f.area(), |f, content_area| {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(TRANSCRIPT_PANE_PERCENT),
                    Constraint::Percentage(100 - TRANSCRIPT_PANE_PERCENT),
                ])
                .split(content_area);

            self.transcript_list
                .set_messages(state.transcript.messages.clone());
            self.transcript_list
                .set_selected_index(state.transcript.selected_index);
            self.transcript_list.render(f, panes[0]);

            match state.selected_message() {
                Some(ChatMessage::Tool { .. }) => {
                    let result = state.selected_message().and_then(|m| m.tool_result());
                    self.tool_result_view.set_message(result);
                    self.tool_result_view.render(f, panes[1]);
                }
                Some(ChatMessage::Assistant { tool_calls, .. })
                    if tool_calls.iter().any(|tc| tc.id.is_some()) =>
                {
                    self.tool_result_view.set_message(None);
                    self.tool_call_list.set_invocations(tool_calls.clone());
                    self.tool_call_list.render(f, panes[1]);
                }
                Some(message) => {
                    self.tool_result_view.set_message(None);
                    let text = match message {
                        ChatMessage::User { content, .. }
                        | ChatMessage::Assistant { content, .. } => content.clone(),
                        ChatMessage::Tool { .. } => unreachable!("handled above"),
                    };
                    self.message_preview
                        .set_message(Some(message.role().to_string()), text);
                    self.message_preview.render(f, panes[1]);
                }
                None => {
                    self.tool_result_view.set_message(None);
                    self.message_preview.set_message(None, String::new());
                    self.message_preview.render(f, panes[1]);
                }
            }
        });
    }

    pub fn get_transcript_list_mut(&mut self) -> &mut TranscriptList {
        &mut self.transcript_list
    }

    pub fn get_tool_result_view_mut(&mut self) -> &mut ToolResultView {
        &mut self.tool_result_view
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
