use std::path::PathBuf;

use netops_core::{
    update, AppState, Effect, Msg, Role, UploadEntry, UploadOutcome, UploadSlot, UPLOAD_READY_TEXT,
};

fn selection() -> Vec<UploadEntry> {
    vec![
        UploadEntry {
            slot: UploadSlot::NetworkLog,
            path: PathBuf::from("/tmp/net.log"),
        },
        UploadEntry {
            slot: UploadSlot::AlarmLog,
            path: PathBuf::from("/tmp/alarms.log"),
        },
    ]
}

#[test]
fn upload_submission_emits_one_effect() {
    let state = AppState::new();

    let (mut next, effects) = update(
        state,
        Msg::UploadSubmitted {
            files: selection(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::UploadFiles {
            request_id: 1,
            files: selection(),
        }]
    );
    // Nothing appears in the transcript until the request completes.
    assert!(next.view().bubbles.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn empty_selection_still_uploads() {
    let state = AppState::new();

    let (_next, effects) = update(state, Msg::UploadSubmitted { files: Vec::new() });

    assert_eq!(
        effects,
        vec![Effect::UploadFiles {
            request_id: 1,
            files: Vec::new(),
        }]
    );
}

#[test]
fn upload_done_appends_ready_bubble() {
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadSubmitted {
            files: selection(),
        },
    );

    let (mut next, effects) = update(
        state,
        Msg::UploadCompleted {
            request_id: 1,
            outcome: UploadOutcome::Done,
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.bubbles.len(), 1);
    assert_eq!(view.bubbles[0].role, Role::System);
    assert_eq!(view.bubbles[0].text, UPLOAD_READY_TEXT);
    assert!(next.consume_dirty());
}

#[test]
fn upload_failure_is_surfaced_as_system_bubble() {
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::UploadSubmitted {
            files: selection(),
        },
    );

    let (next, _effects) = update(
        state,
        Msg::UploadCompleted {
            request_id: 1,
            outcome: UploadOutcome::Failed {
                message: "http status 500".to_string(),
            },
        },
    );
    let view = next.view();

    assert_eq!(view.bubbles[0].role, Role::System);
    assert_eq!(view.bubbles[0].text, "Upload failed: http status 500");
}

#[test]
fn chat_and_upload_requests_share_one_id_sequence() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::DraftChanged("hello".to_string()));
    let (state, chat_effects) = update(state, Msg::DraftSubmitted);
    let (_state, upload_effects) = update(state, Msg::UploadSubmitted { files: Vec::new() });

    assert_eq!(
        chat_effects,
        vec![Effect::SendChat {
            request_id: 1,
            text: "hello".to_string(),
        }]
    );
    assert_eq!(
        upload_effects,
        vec![Effect::UploadFiles {
            request_id: 2,
            files: Vec::new(),
        }]
    );
}
