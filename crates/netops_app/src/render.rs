use netops_core::{AppViewModel, BubbleView, PanelView, Role};

/// Renders the console view as printable lines: a status line, the panel
/// strip, then the transcript.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.bubbles.len() + 2);
    lines.push(status_line(view));
    if !view.panels.is_empty() {
        lines.push(format!("panels: {}", panel_summary(&view.panels)));
    }
    for bubble in &view.bubbles {
        lines.push(format_bubble(bubble));
    }
    lines
}

fn status_line(view: &AppViewModel) -> String {
    match view.in_flight {
        0 => "[ready]".to_string(),
        n => format!("[{n} awaiting reply]"),
    }
}

fn panel_summary(panels: &[PanelView]) -> String {
    panels
        .iter()
        .map(|panel| {
            let marker = if panel.open { '+' } else { '-' };
            format!("{marker}{}", panel.panel_id)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_bubble(bubble: &BubbleView) -> String {
    format!("{:>9} | {}", role_label(bubble.role), bubble.text)
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
        Role::System => "system",
    }
}

#[cfg(test)]
mod tests {
    use netops_core::{update, AppState, Msg, PLACEHOLDER_TEXT};

    use super::*;

    #[test]
    fn transcript_renders_in_order_with_role_labels() {
        let state = AppState::new();
        let (state, _) = update(state, Msg::DraftChanged("hello".to_string()));
        let (state, _) = update(state, Msg::DraftSubmitted);

        let lines = render(&state.view());

        assert_eq!(lines[0], "[1 awaiting reply]");
        assert_eq!(lines[1], format!("{:>9} | hello", "you"));
        assert_eq!(lines[2], format!("{:>9} | {}", "assistant", PLACEHOLDER_TEXT));
    }

    #[test]
    fn panel_strip_marks_open_panels() {
        let state = AppState::with_panels(
            ["history".to_string(), "uploads".to_string()],
            Some("uploads"),
        );

        let lines = render(&state.view());

        assert_eq!(lines[0], "[ready]");
        assert_eq!(lines[1], "panels: -history +uploads");
    }

    #[test]
    fn empty_view_is_just_the_status_line() {
        let state = AppState::new();
        assert_eq!(render(&state.view()), vec!["[ready]".to_string()]);
    }
}
