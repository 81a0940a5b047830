use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendChat {
        request_id: crate::RequestId,
        text: String,
    },
    UploadFiles {
        request_id: crate::RequestId,
        files: Vec<UploadEntry>,
    },
}

/// The fixed upload slots the server accepts, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    NetworkLog,
    AlarmLog,
    NetworkData,
}

impl UploadSlot {
    pub const ALL: [UploadSlot; 3] = [
        UploadSlot::NetworkLog,
        UploadSlot::AlarmLog,
        UploadSlot::NetworkData,
    ];

    /// The multipart field name this slot is posted under.
    pub fn field_name(self) -> &'static str {
        match self {
            UploadSlot::NetworkLog => "network_log",
            UploadSlot::AlarmLog => "alarm_log",
            UploadSlot::NetworkData => "network_data",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.field_name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    pub slot: UploadSlot,
    pub path: PathBuf,
}
