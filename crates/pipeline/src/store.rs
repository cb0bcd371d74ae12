//! Async persistence of calibration data and settings.
//!
//! Two named records live as JSON files under the store directory:
//! `settings` (the session configuration snapshot) and `training_data`
//! (the collected training points). Writes happen opportunistically
//! after click-sourced examples; the one read happens before the first
//! prediction. Everything is best-effort: the live loop never blocks on
//! or fails because of the store.

use std::path::{Path, PathBuf};

use gazekit_common::config::GazekitConfig;
use gazekit_common::error::{GazekitError, GazekitResult};
use gazekit_model::CalibrationRecord;

const SETTINGS_FILE: &str = "settings.json";
const TRAINING_FILE: &str = "training_data.json";

/// Key-value store rooted at a directory.
pub struct CalibrationStore {
    dir: PathBuf,
}

impl CalibrationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the training-data record, or `None` if absent/unreadable.
    /// Failures are logged, never raised.
    pub async fn load_training(&self) -> Option<CalibrationRecord> {
        let path = self.dir.join(TRAINING_FILE);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read training data");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse training data");
                None
            }
        }
    }

    /// Write the training-data record.
    pub async fn save_training(&self, record: &CalibrationRecord) -> GazekitResult<()> {
        self.write_json(TRAINING_FILE, record).await
    }

    /// Load the settings record, or `None` if absent/unreadable.
    pub async fn load_settings(&self) -> Option<GazekitConfig> {
        let path = self.dir.join(SETTINGS_FILE);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read settings");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse settings");
                None
            }
        }
    }

    /// Write the settings record.
    pub async fn save_settings(&self, config: &GazekitConfig) -> GazekitResult<()> {
        self.write_json(SETTINGS_FILE, config).await
    }

    /// Remove both records.
    pub async fn clear(&self) -> GazekitResult<()> {
        for file in [SETTINGS_FILE, TRAINING_FILE] {
            let path = self.dir.join(file);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(GazekitError::persistence(format!(
                        "failed to remove {}: {e}",
                        path.display()
                    )))
                }
            }
        }
        Ok(())
    }

    async fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> GazekitResult<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            GazekitError::persistence(format!(
                "failed to create store dir {}: {e}",
                self.dir.display()
            ))
        })?;
        let path = self.dir.join(file);
        let json = serde_json::to_string(value)
            .map_err(|e| GazekitError::persistence(format!("failed to serialize {file}: {e}")))?;
        tokio::fs::write(&path, json).await.map_err(|e| {
            GazekitError::persistence(format!("failed to write {}: {e}", path.display()))
        })
    }
}
