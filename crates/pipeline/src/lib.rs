//! GazeKit Pipeline
//!
//! Orchestrates the real-time gaze-estimation loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       GazeSession                        │
//! │  ┌────────┐  ┌─────────┐  ┌────────────┐  ┌───────────┐  │
//! │  │ Camera │─▶│ Tracker │─▶│ Regression │─▶│ Smoothing │──┼─▶ listener
//! │  └────────┘  └─────────┘  └─────▲──────┘  └───────────┘  │
//! │                                 │                        │
//! │  screen events ─▶ EventRecorder─┘─▶ CalibrationStore     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One iteration runs per display-refresh tick, strictly sequentially;
//! control commands are drained at iteration boundaries. The optional
//! threaded regression delegates its solves to a background task and
//! serves predictions from the last completed fit.

pub mod camera;
pub mod recorder;
pub mod session;
pub mod store;

pub use camera::{CameraSource, SyntheticCamera, SyntheticTarget};
pub use recorder::{EventRecorder, ScreenEvent};
pub use session::{
    CameraFactory, GazeListener, GazeSession, PipelineHandle, PipelineState, RegressionFactory,
    TrackerFactory,
};
pub use store::CalibrationStore;
