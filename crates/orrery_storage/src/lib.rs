use chrono::{Local, SecondsFormat};
use orrery_core::RunSample;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One finished sandbox run: its body-count samples and when it ended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Fixed-interval body-count samples from the run tracker
    pub body_points: Vec<RunSample>,
    /// Total simulated seconds the run lasted
    pub time_ended: f64,
    /// ISO-8601 local timestamp (with offset) of when the run ended
    pub date_done: String,
}

/// Local wall-clock time as ISO-8601 with timezone offset,
/// e.g. 2026-02-13T13:05:22-08:00
pub fn now_iso() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Load the run history (a JSON list of run records).
/// A missing, empty, or unparsable file reads as no history.
pub fn load_history(path: &Path) -> Vec<RunRecord> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Append one run record to the history file
pub fn append_run(path: &Path, record: RunRecord) -> Result<(), String> {
    let mut runs = load_history(path);
    runs.push(record);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
        }
    }
    let data = serde_json::to_string_pretty(&runs).map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}
