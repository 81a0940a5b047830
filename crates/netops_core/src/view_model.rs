use crate::{MessageId, Role};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub bubbles: Vec<BubbleView>,
    pub panels: Vec<PanelView>,
    pub in_flight: usize,
    pub dirty: bool,
}

/// One rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleView {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub panel_id: String,
    pub open: bool,
}
