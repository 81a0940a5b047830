use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, BubbleView, PanelView};

pub type MessageId = u64;
pub type RequestId = u64;

/// Text shown in an assistant bubble while its reply is pending.
pub const PLACEHOLDER_TEXT: &str = "Analyzing…";
/// Shown when a 2xx response carries no usable reply field.
pub const NO_REPLY_TEXT: &str = "No response";
/// Shown when the server reports an error without a message.
pub const GENERIC_ERROR_TEXT: &str = "Something went wrong";
/// Shown when the request never completed.
pub const UNREACHABLE_TEXT: &str = "Server not reachable";
/// System bubble appended after a successful upload.
pub const UPLOAD_READY_TEXT: &str = "Files uploaded. Ready for analysis.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    id: MessageId,
    role: Role,
    text: String,
    pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    messages: Vec<Message>,
    message_seq: MessageId,
    request_seq: RequestId,
    // Chat requests awaiting a reply, keyed to the placeholder they resolve.
    pending: BTreeMap<RequestId, MessageId>,
    panels: BTreeMap<String, bool>,
    draft: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with the given sidebar panels registered, optionally
    /// with one of them starting open.
    pub fn with_panels<I>(panel_ids: I, default_open: Option<&str>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut state = Self::default();
        for id in panel_ids {
            let open = default_open == Some(id.as_str());
            state.panels.insert(id, open);
        }
        state
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            bubbles: self
                .messages
                .iter()
                .map(|message| BubbleView {
                    id: message.id,
                    role: message.role,
                    text: message.text.clone(),
                    pending: message.pending,
                })
                .collect(),
            panels: self
                .panels
                .iter()
                .map(|(panel_id, open)| PanelView {
                    panel_id: panel_id.clone(),
                    open: *open,
                })
                .collect(),
            in_flight: self.pending.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub(crate) fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }

    pub(crate) fn push_message(&mut self, role: Role, text: String, pending: bool) -> MessageId {
        self.message_seq += 1;
        let id = self.message_seq;
        self.messages.push(Message {
            id,
            role,
            text,
            pending,
        });
        id
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.request_seq += 1;
        self.request_seq
    }

    /// Registers a chat request whose reply will overwrite `placeholder`.
    pub(crate) fn begin_chat(&mut self, placeholder: MessageId) -> RequestId {
        let request_id = self.allocate_request_id();
        self.pending.insert(request_id, placeholder);
        request_id
    }

    /// Overwrites the placeholder for `request_id` with `text`.
    ///
    /// Returns false when the request is unknown or already resolved; the
    /// transcript is untouched in that case.
    pub(crate) fn resolve_chat(&mut self, request_id: RequestId, text: String) -> bool {
        let Some(message_id) = self.pending.remove(&request_id) else {
            return false;
        };
        let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) else {
            return false;
        };
        message.text = text;
        message.pending = false;
        true
    }

    /// Flips a registered panel. Returns false for unknown ids.
    pub(crate) fn toggle_panel(&mut self, panel_id: &str) -> bool {
        match self.panels.get_mut(panel_id) {
            Some(open) => {
                *open = !*open;
                true
            }
            None => false,
        }
    }
}
