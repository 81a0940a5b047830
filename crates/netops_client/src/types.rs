use std::fmt;

use serde::Serialize;

pub type RequestId = u64;

/// JSON body posted to the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Completion events emitted by the background transport thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ChatCompleted {
        request_id: RequestId,
        result: Result<String, TransportError>,
    },
    UploadCompleted {
        request_id: RequestId,
        result: Result<(), TransportError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Non-2xx response; carries the body's `error` field when present.
    HttpStatus {
        status: u16,
        server_message: Option<String>,
    },
    Timeout,
    /// 2xx response whose body is not JSON or lacks a reply field.
    MalformedReply,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedReply => write!(f, "malformed reply"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
