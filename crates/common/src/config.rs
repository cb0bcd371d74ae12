//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global GazeKit configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GazekitConfig {
    /// Directory where calibration data is stored.
    pub store_dir: PathBuf,

    /// Whether calibration data persists across sessions.
    pub save_data_across_sessions: bool,

    /// Camera acquisition constraints.
    pub camera: CameraDefaults,

    /// Pipeline loop settings.
    pub pipeline: PipelineDefaults,

    /// Regression settings.
    pub regression: RegressionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Camera constraints requested at session start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraDefaults {
    /// Requested capture width in pixels.
    pub width: u32,

    /// Requested capture height in pixels.
    pub height: u32,

    /// Camera facing mode ("user" or "environment").
    pub facing: String,
}

/// Per-frame loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineDefaults {
    /// Target iterations per second (display refresh analog).
    pub fps: u32,

    /// Smoothing window capacity in predictions.
    pub smoothing_window: usize,

    /// Prediction-history window capacity (diagnostics).
    pub history_window: usize,

    /// Minimum interval between recorded move events (ms).
    pub move_tick_ms: f64,

    /// Last-resort guard on frame acquisition (ms). A fired timeout is a
    /// performance regression to investigate, not normal completion.
    pub frame_timeout_ms: u64,

    /// Validation box size as a ratio of the smaller video dimension.
    pub validation_box_ratio: f64,

    /// Screen dimensions used to clamp smoothed predictions.
    pub screen_width: f64,
    pub screen_height: f64,
}

/// Regression model settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegressionDefaults {
    /// Ridge regularization parameter λ.
    pub ridge_lambda: f64,

    /// Maximum retained training points (FIFO eviction beyond this).
    pub training_capacity: usize,

    /// Recency half-life for the weighted variant (ms).
    pub weight_half_life_ms: f64,

    /// Event-type multiplier for click-sourced samples.
    pub click_weight: f64,

    /// Event-type multiplier for move-sourced samples.
    pub move_weight: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gazekit=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for GazekitConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            save_data_across_sessions: true,
            camera: CameraDefaults::default(),
            pipeline: PipelineDefaults::default(),
            regression: RegressionDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            facing: "user".to_string(),
        }
    }
}

impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            fps: 60,
            smoothing_window: 4,
            history_window: 50,
            move_tick_ms: 50.0,
            frame_timeout_ms: 500,
            validation_box_ratio: 0.66,
            screen_width: 1920.0,
            screen_height: 1080.0,
        }
    }
}

impl Default for RegressionDefaults {
    fn default() -> Self {
        Self {
            ridge_lambda: 1e-5,
            training_capacity: 700,
            weight_half_life_ms: 30_000.0,
            click_weight: 2.0,
            move_weight: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl GazekitConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gazekit").join("config.json")
}

/// Default calibration store directory.
fn default_store_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("gazekit").join("calibration")
}
