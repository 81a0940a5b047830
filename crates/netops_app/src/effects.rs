use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use netops_client::{
    ClientEvent, ClientHandle, ClientSettings, FailureKind, TransportError, UploadBundle,
};
use netops_core::{ChatOutcome, Effect, Msg, RequestId, UploadEntry, UploadOutcome};
use netops_logging::{ops_info, ops_warn};

/// Bridges core effects to the transport and transport events back to core
/// messages.
pub struct EffectRunner {
    client: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ClientSettings) -> Result<Self, TransportError> {
        let client = ClientHandle::new(settings)?;
        let runner = Self {
            client,
            msg_tx: msg_tx.clone(),
        };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendChat { request_id, text } => {
                    ops_info!("SendChat request_id={} chars={}", request_id, text.len());
                    self.client.send_chat(request_id, text);
                }
                Effect::UploadFiles { request_id, files } => match read_bundle(&files) {
                    Ok(bundle) => {
                        ops_info!("UploadFiles request_id={} parts={}", request_id, bundle.len());
                        self.client.upload(request_id, bundle);
                    }
                    Err(err) => {
                        // An unreadable file fails the whole action before
                        // anything is sent.
                        ops_warn!("upload request_id={} aborted: {}", request_id, err);
                        let _ = self.msg_tx.send(Msg::UploadCompleted {
                            request_id,
                            outcome: UploadOutcome::Failed {
                                message: err.to_string(),
                            },
                        });
                    }
                },
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::ChatCompleted { request_id, result } => Msg::ChatCompleted {
                        request_id,
                        outcome: map_chat_result(request_id, result),
                    },
                    ClientEvent::UploadCompleted { request_id, result } => Msg::UploadCompleted {
                        request_id,
                        outcome: match result {
                            Ok(()) => UploadOutcome::Done,
                            Err(err) => {
                                ops_warn!("upload request_id={} failed: {}", request_id, err);
                                UploadOutcome::Failed {
                                    message: err.kind.to_string(),
                                }
                            }
                        },
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_chat_result(request_id: RequestId, result: Result<String, TransportError>) -> ChatOutcome {
    match result {
        Ok(reply) => ChatOutcome::Reply(reply),
        Err(err) => {
            ops_warn!("chat request_id={} failed: {}", request_id, err);
            match err.kind {
                FailureKind::HttpStatus { server_message, .. } => ChatOutcome::ServerError {
                    message: server_message,
                },
                FailureKind::MalformedReply => ChatOutcome::Malformed,
                FailureKind::InvalidUrl | FailureKind::Timeout | FailureKind::Network => {
                    ChatOutcome::Unreachable
                }
            }
        }
    }
}

fn read_bundle(files: &[UploadEntry]) -> std::io::Result<UploadBundle> {
    let mut bundle = UploadBundle::new();
    for entry in files {
        let bytes = fs::read(&entry.path)?;
        bundle.push(entry.slot.field_name(), display_name(&entry.path), bytes);
    }
    Ok(bundle)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}
