use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use netops_client::ClientSettings;
use netops_core::{update, AppState, AppViewModel, Msg};
use netops_logging::ops_info;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::input::{parse_line, Command};
use crate::render;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let settings = ClientSettings {
        base_url: config.base_url.clone(),
        request_timeout: Duration::from_secs(config.request_timeout_secs),
        reply_keys: config.reply_keys.clone(),
        ..ClientSettings::default()
    };
    let runner = EffectRunner::new(msg_tx.clone(), settings)?;

    let mut state = AppState::with_panels(
        config.panels.clone(),
        config.default_open_panel.as_deref(),
    );

    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(msg_tx, quit.clone());

    ops_info!("console ready; talking to {}", config.base_url);
    print_view(&state.view());

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print_view(&state.view());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn spawn_input_thread(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Command::Chat(text) => {
                    if msg_tx.send(Msg::DraftChanged(text)).is_err() {
                        break;
                    }
                    if msg_tx.send(Msg::DraftSubmitted).is_err() {
                        break;
                    }
                }
                Command::Upload(files) => {
                    if msg_tx.send(Msg::UploadSubmitted { files }).is_err() {
                        break;
                    }
                }
                Command::Panel(panel_id) => {
                    if msg_tx.send(Msg::PanelToggled { panel_id }).is_err() {
                        break;
                    }
                }
                Command::Quit => break,
                Command::Empty => {}
                Command::Invalid(hint) => println!("{hint}"),
            }
        }
        // Quit command or stdin EOF both end the session.
        quit.store(true, Ordering::Relaxed);
    });
}

fn print_view(view: &AppViewModel) {
    let mut out = io::stdout().lock();
    for line in render::render(view) {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
