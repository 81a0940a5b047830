use std::path::PathBuf;

use netops_core::{UploadEntry, UploadSlot};

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text, submitted as a chat message.
    Chat(String),
    /// `:upload field=path ...` — zero to three slots.
    Upload(Vec<UploadEntry>),
    /// `:panel <id>` — toggle a sidebar panel.
    Panel(String),
    /// `:quit`
    Quit,
    /// Blank line; nothing to do.
    Empty,
    /// Unusable input, with a hint for the user.
    Invalid(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if !trimmed.starts_with(':') {
        return Command::Chat(trimmed.to_string());
    }

    let mut words = trimmed.split_whitespace();
    let command = words.next().unwrap_or_default();
    match command {
        ":quit" | ":q" => Command::Quit,
        ":panel" => match (words.next(), words.next()) {
            (Some(id), None) => Command::Panel(id.to_string()),
            _ => Command::Invalid("usage: :panel <id>".to_string()),
        },
        ":upload" => parse_upload(words),
        _ => Command::Invalid(format!("unknown command {command}")),
    }
}

fn parse_upload<'a>(words: impl Iterator<Item = &'a str>) -> Command {
    let mut entries: Vec<UploadEntry> = Vec::new();
    for word in words {
        let Some((field, path)) = word.split_once('=') else {
            return Command::Invalid("usage: :upload <field>=<path> ...".to_string());
        };
        let Some(slot) = UploadSlot::from_field_name(field) else {
            return Command::Invalid(format!(
                "unknown upload field {field}; expected network_log, alarm_log or network_data"
            ));
        };
        if entries.iter().any(|entry| entry.slot == slot) {
            return Command::Invalid(format!("duplicate upload field {field}"));
        }
        if path.is_empty() {
            return Command::Invalid(format!("missing path for {field}"));
        }
        entries.push(UploadEntry {
            slot,
            path: PathBuf::from(path),
        });
    }
    Command::Upload(entries)
}
