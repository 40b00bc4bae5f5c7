#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::tool_call_list::ToolCallList;
    use crate::schemas::ToolInvocation;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn buffer_to_string(buffer: &ratatui::prelude::Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                let cell = buffer.cell((x, y)).unwrap();
                line.push_str(cell.symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn render_to_string(list: &mut ToolCallList) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                list.render(f, f.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn invocation(id: Option<&str>, name: &str, arguments: serde_json::Value) -> ToolInvocation {
        ToolInvocation {
            id: id.map(|s| s.to_string()),
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let mut list = ToolCallList::new();
        let content = render_to_string(&mut list);
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_renders_one_card_per_acknowledged_invocation() {
        let mut list = ToolCallList::new();
        list.set_invocations(vec![
            invocation(Some("c1"), "search", json!({"query": "rust"})),
            invocation(Some("c2"), "fetch", json!({"url": "https://example.com"})),
        ]);

        let content = render_to_string(&mut list);
        assert!(content.contains("search"));
        assert!(content.contains("fetch"));
        assert!(content.contains("query"));
        assert!(content.contains("rust"));
    }

    #[test]
    fn test_invocation_without_id_is_skipped() {
        let mut list = ToolCallList::new();
        list.set_invocations(vec![
            invocation(Some("c1"), "search", json!({})),
            invocation(None, "phantom", json!({"x": 1})),
        ]);

        let content = render_to_string(&mut list);
        assert!(content.contains("search"));
        assert!(!content.contains("phantom"));
    }

    #[test]
    fn test_all_invocations_without_id_render_nothing_inside_frame() {
        let mut list = ToolCallList::new();
        list.set_invocations(vec![invocation(None, "phantom", json!({}))]);

        let content = render_to_string(&mut list);
        assert!(!content.contains("phantom"));
    }

    #[test]
    fn test_complex_argument_is_pretty_printed() {
        let mut list = ToolCallList::new();
        list.set_invocations(vec![invocation(
            Some("c1"),
            "query",
            json!({"filter": {"status": "open"}}),
        )]);

        let content = render_to_string(&mut list);
        assert!(content.contains("filter"));
        // Nested JSON block, not a flat single-line value
        assert!(content.contains("\"status\": \"open\""));
    }

    #[test]
    fn test_keys_are_not_handled() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        let mut list = ToolCallList::new();
        assert_eq!(
            list.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None
        );
    }
}
