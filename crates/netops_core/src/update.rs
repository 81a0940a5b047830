use crate::{
    AppState, ChatOutcome, Effect, Msg, Role, UploadOutcome, GENERIC_ERROR_TEXT, NO_REPLY_TEXT,
    PLACEHOLDER_TEXT, UNREACHABLE_TEXT, UPLOAD_READY_TEXT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DraftChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::DraftSubmitted => {
            let text = state.take_draft().trim().to_owned();
            if text.is_empty() {
                return (state, Vec::new());
            }

            state.push_message(Role::User, text.clone(), false);
            let placeholder = state.push_message(Role::Assistant, PLACEHOLDER_TEXT.to_owned(), true);
            let request_id = state.begin_chat(placeholder);
            state.mark_dirty();
            vec![Effect::SendChat { request_id, text }]
        }
        Msg::ChatCompleted {
            request_id,
            outcome,
        } => {
            // A completion for an unknown or already-resolved request leaves
            // the transcript untouched; each placeholder resolves exactly once.
            if state.resolve_chat(request_id, outcome_text(outcome)) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UploadSubmitted { files } => {
            let request_id = state.allocate_request_id();
            vec![Effect::UploadFiles { request_id, files }]
        }
        Msg::UploadCompleted { outcome, .. } => {
            let text = match outcome {
                UploadOutcome::Done => UPLOAD_READY_TEXT.to_owned(),
                UploadOutcome::Failed { message } => format!("Upload failed: {message}"),
            };
            state.push_message(Role::System, text, false);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PanelToggled { panel_id } => {
            // Unknown targets are a no-op, matching a menu button whose
            // panel does not exist.
            if state.toggle_panel(&panel_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn outcome_text(outcome: ChatOutcome) -> String {
    match outcome {
        ChatOutcome::Reply(text) => text,
        ChatOutcome::ServerError { message } => {
            message.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_owned())
        }
        ChatOutcome::Malformed => NO_REPLY_TEXT.to_owned(),
        ChatOutcome::Unreachable => UNREACHABLE_TEXT.to_owned(),
    }
}
