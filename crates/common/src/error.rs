//! Error types shared across GazeKit crates.

/// Top-level error type for GazeKit operations.
#[derive(Debug, thiserror::Error)]
pub enum GazekitError {
    /// Predict was requested while the session has zero active regressors.
    /// Non-fatal: callers log and continue with a null prediction.
    #[error("No regression configured: {message}")]
    NoRegressionConfigured { message: String },

    /// The face tracker failed on a frame. Non-fatal: that frame's
    /// features are treated as absent and the loop continues.
    #[error("Feature extraction error: {message}")]
    FeatureExtraction { message: String },

    /// The camera could not be acquired or the media API is unsupported.
    /// Fatal to pipeline start; the session never enters Running.
    #[error("Media access error: {message}")]
    MediaAccess { message: String },

    /// The background solver failed. Prior weights stay installed.
    #[error("Solver worker error: {message}")]
    Worker { message: String },

    /// Calibration store read/write failed. Best-effort: logged, never
    /// blocks the live loop.
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GazekitError.
pub type GazekitResult<T> = Result<T, GazekitError>;

impl GazekitError {
    pub fn no_regression(msg: impl Into<String>) -> Self {
        Self::NoRegressionConfigured {
            message: msg.into(),
        }
    }

    pub fn feature_extraction(msg: impl Into<String>) -> Self {
        Self::FeatureExtraction {
            message: msg.into(),
        }
    }

    pub fn media_access(msg: impl Into<String>) -> Self {
        Self::MediaAccess {
            message: msg.into(),
        }
    }

    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker {
            message: msg.into(),
        }
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence {
            message: msg.into(),
        }
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error may abort pipeline start-up. Everything else
    /// degrades to a continuing state inside the loop.
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(self, Self::MediaAccess { .. } | Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_fatality_split() {
        assert!(GazekitError::media_access("denied").is_fatal_at_startup());
        assert!(!GazekitError::feature_extraction("lost face").is_fatal_at_startup());
        assert!(!GazekitError::persistence("disk full").is_fatal_at_startup());
        assert!(!GazekitError::worker("solve failed").is_fatal_at_startup());
    }
}
