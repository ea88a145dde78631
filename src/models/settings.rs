use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the two files the journal core works against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSettings {
    pub trade_history_path: PathBuf,
    pub survey_path: PathBuf,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            trade_history_path: PathBuf::from("static/ct_trade_history.xlsx"),
            survey_path: PathBuf::from("static/trades_survey.json"),
        }
    }
}

impl JournalSettings {
    /// Load settings from a JSON file. A missing or invalid file falls back
    /// to the defaults so a fresh install needs no configuration step.
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };

        match serde_json::from_slice(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings file {:?}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }
}
