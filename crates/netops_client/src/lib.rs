//! Console client: HTTP transport for the chat and upload endpoints.
mod client;
mod transport;
mod types;
mod upload;

pub use client::ClientHandle;
pub use transport::{ClientSettings, ReqwestTransport, Transport};
pub use types::{ChatRequest, ClientEvent, FailureKind, RequestId, TransportError};
pub use upload::{UploadBundle, UploadPart};
