//! Clipboard configuration persistence
//!
//! Stores user preferences in `~/.config/gridclip/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::grid::{Column, Delimiter};

/// Clipboard configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridClipConfig {
    /// Delimiter between cells in clipboard text
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Window in which a second paste trigger is dropped
    #[serde(default = "default_paste_debounce_ms")]
    pub paste_debounce_ms: u64,

    /// Use the system clipboard (false keeps everything in-process)
    #[serde(default = "default_system_clipboard")]
    pub system_clipboard: bool,

    /// Column keys that never accept pasted values
    #[serde(default)]
    pub locked_columns: Vec<String>,
}

fn default_paste_debounce_ms() -> u64 {
    50
}

fn default_system_clipboard() -> bool {
    true
}

impl Default for GridClipConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            paste_debounce_ms: default_paste_debounce_ms(),
            system_clipboard: default_system_clipboard(),
            locked_columns: Vec::new(),
        }
    }
}

impl GridClipConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if unusable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.locked_columns.iter().any(|locked| locked == key)
    }

    /// Strip paste capabilities from every locked column
    pub fn apply_locks<R>(&self, columns: &mut [Column<R>]) {
        for column in columns.iter_mut().filter(|c| self.is_locked(&c.key)) {
            column.editable = false;
            column.editor = None;
        }
    }
}
