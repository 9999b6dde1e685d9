//! Runtime settings for FraudLens
//!
//! Loaded once at startup from an optional JSON file, with every field
//! defaulting independently so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::table::DEFAULT_PLACEHOLDER_ROWS;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the document-analysis backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Artificial delay between a fetch resolving and the data appearing,
    /// simulating processing latency. Zero disables it.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Skeleton rows shown in the signal table while data loads.
    #[serde(default = "default_placeholder_rows")]
    pub placeholder_rows: usize,
    /// Whether the table's free-text filter distinguishes case.
    #[serde(default)]
    pub case_sensitive_filter: bool,
    /// "light" or "dark".
    #[serde(default = "default_theme_mode")]
    pub theme_mode: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_settle_delay_ms() -> u64 {
    1500
}
fn default_placeholder_rows() -> usize {
    DEFAULT_PLACEHOLDER_ROWS
}
fn default_theme_mode() -> String {
    "light".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            settle_delay_ms: default_settle_delay_ms(),
            placeholder_rows: default_placeholder_rows(),
            case_sensitive_filter: false,
            theme_mode: default_theme_mode(),
        }
    }
}

impl Settings {
    /// Load settings from `fraudlens.json` next to the binary's working
    /// directory, or from `$FRAUDLENS_SETTINGS`. Missing or malformed files
    /// fall back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("FRAUDLENS_SETTINGS")
            .unwrap_or_else(|_| "fraudlens.json".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
