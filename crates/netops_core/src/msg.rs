#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input box.
    DraftChanged(String),
    /// User submitted the current draft.
    DraftSubmitted,
    /// Transport finished a chat request.
    ChatCompleted {
        request_id: crate::RequestId,
        outcome: ChatOutcome,
    },
    /// User submitted an upload selection (zero to three slots).
    UploadSubmitted { files: Vec<crate::UploadEntry> },
    /// Transport finished an upload request.
    UploadCompleted {
        request_id: crate::RequestId,
        outcome: UploadOutcome,
    },
    /// User clicked a sidebar menu button.
    PanelToggled { panel_id: String },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How a chat request ended, as seen by the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The server replied with text.
    Reply(String),
    /// Non-2xx status; the body's `error` field when it had one.
    ServerError { message: Option<String> },
    /// 2xx response without a usable reply field.
    Malformed,
    /// The request never completed (connect failure or timeout).
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Done,
    Failed { message: String },
}
