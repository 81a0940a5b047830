//! Console core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, UploadEntry, UploadSlot};
pub use msg::{ChatOutcome, Msg, UploadOutcome};
pub use state::{
    AppState, MessageId, RequestId, Role, GENERIC_ERROR_TEXT, NO_REPLY_TEXT, PLACEHOLDER_TEXT,
    UNREACHABLE_TEXT, UPLOAD_READY_TEXT,
};
pub use update::update;
pub use view_model::{AppViewModel, BubbleView, PanelView};
