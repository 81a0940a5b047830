use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use netops_logging::ops_debug;

use crate::transport::{ClientSettings, ReqwestTransport, Transport};
use crate::{ClientEvent, RequestId, TransportError, UploadBundle};

enum ClientCommand {
    SendChat {
        request_id: RequestId,
        text: String,
    },
    Upload {
        request_id: RequestId,
        bundle: UploadBundle,
    },
}

/// Handle to the background transport thread.
///
/// Commands are spawned as independent tasks, so several requests may be in
/// flight at once and complete in any order.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let transport = Arc::new(ReqwestTransport::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn send_chat(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::SendChat {
            request_id,
            text: text.into(),
        });
    }

    pub fn upload(&self, request_id: RequestId, bundle: UploadBundle) {
        let _ = self.cmd_tx.send(ClientCommand::Upload { request_id, bundle });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    transport: &dyn Transport,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::SendChat { request_id, text } => {
            ops_debug!("send_chat request_id={} chars={}", request_id, text.len());
            let result = transport.send_chat(&text).await;
            let _ = event_tx.send(ClientEvent::ChatCompleted { request_id, result });
        }
        ClientCommand::Upload { request_id, bundle } => {
            ops_debug!("upload request_id={} parts={}", request_id, bundle.len());
            let result = transport.send_upload(bundle).await;
            let _ = event_tx.send(ClientEvent::UploadCompleted { request_id, result });
        }
    }
}
