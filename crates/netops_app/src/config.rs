use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum LogOutput {
    /// Write to ./console.log in the current directory.
    File,
    /// Write to the terminal.
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the companion server, without a trailing path.
    pub base_url: String,
    /// Reply keys probed in order on a 2xx chat response.
    pub reply_keys: Vec<String>,
    pub request_timeout_secs: u64,
    /// Sidebar panel ids available to `:panel`.
    pub panels: Vec<String>,
    /// Panel that starts open, if any.
    pub default_open_panel: Option<String>,
    pub log: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            reply_keys: vec!["reply".to_string(), "answer".to_string()],
            request_timeout_secs: 30,
            panels: vec!["uploads".to_string(), "history".to_string()],
            default_open_panel: None,
            log: LogOutput::Terminal,
        }
    }
}

/// Loads the RON config file; a missing file yields the defaults.
pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    ron::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
}
