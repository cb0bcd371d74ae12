//! Session construction and the per-frame scheduler loop.
//!
//! A [`GazeSession`] holds the name-to-factory registries and the
//! configuration; [`GazeSession::begin`] acquires the camera, seeds the
//! regression ensemble from the calibration store, and spawns the loop
//! task. All further control flows through a [`PipelineHandle`] as
//! commands drained at iteration boundaries, so no two iterations ever
//! overlap and shared loop state needs no locking.
//!
//! Lifecycle: `Idle → Running ⇄ Paused → Ending`. Pausing is
//! cooperative — the flag is consulted once at the top of each
//! iteration and an in-flight iteration always completes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, oneshot, watch};

use gazekit_common::clock::PipelineClock;
use gazekit_common::config::{CameraDefaults, GazekitConfig, RegressionDefaults};
use gazekit_common::error::{GazekitError, GazekitResult};
use gazekit_model::{
    CalibrationRecord, DataWindow, EventSource, EyeFeatures, GazePrediction, Point2D,
};
use gazekit_regression::{
    GazeRegressor, RidgeRegressor, ThreadedRidgeRegressor, WeightConfig, WeightedRidgeRegressor,
};
use gazekit_tracker::{eyes_within_box, FaceTracker, SyntheticTracker, VideoFrame};

use crate::camera::{CameraSource, SyntheticCamera};
use crate::recorder::{EventRecorder, ScreenEvent};
use crate::store::CalibrationStore;

/// Callback invoked once per iteration with the smoothed prediction
/// (or `None`) and milliseconds elapsed since the session began.
pub type GazeListener = Box<dyn FnMut(Option<GazePrediction>, f64) + Send>;

/// Builds a tracker instance.
pub type TrackerFactory = Box<dyn Fn() -> Box<dyn FaceTracker> + Send>;

/// Builds a regressor instance from the session's regression settings.
pub type RegressionFactory = Box<dyn Fn(&RegressionDefaults) -> Box<dyn GazeRegressor> + Send>;

/// Opens the camera at session start.
pub type CameraFactory =
    Box<dyn FnOnce(&CameraDefaults) -> GazekitResult<Box<dyn CameraSource>> + Send>;

/// Pipeline lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Running,
    Paused,
    Ending,
}

enum Command {
    Pause,
    Resume,
    End,
    SetTracker(String),
    SetRegression(String),
    AddRegression(String),
    RegisterTracker(String, TrackerFactory),
    RegisterRegression(String, RegressionFactory),
    SetListener(GazeListener),
    ClearListener,
    RecordScreenPosition(ScreenEvent),
    ClearData,
    CurrentPrediction(oneshot::Sender<Option<GazePrediction>>),
    History(oneshot::Sender<Vec<Point2D>>),
    EyesValid(oneshot::Sender<Option<bool>>),
}

/// A gaze session before it starts: registries, configuration, and the
/// initial tracker/regression selection.
pub struct GazeSession {
    config: GazekitConfig,
    tracker_factories: HashMap<String, TrackerFactory>,
    regression_factories: HashMap<String, RegressionFactory>,
    camera_factory: CameraFactory,
    active_tracker: String,
    active_regression: String,
    listener: Option<GazeListener>,
}

impl GazeSession {
    /// Create a session with the built-in tracker and regression
    /// registries and a synthetic camera.
    pub fn new(config: GazekitConfig) -> Self {
        let mut tracker_factories: HashMap<String, TrackerFactory> = HashMap::new();
        tracker_factories.insert(
            "synthetic".to_string(),
            Box::new(|| Box::new(SyntheticTracker::new()) as Box<dyn FaceTracker>),
        );

        let mut regression_factories: HashMap<String, RegressionFactory> = HashMap::new();
        regression_factories.insert(
            "ridge".to_string(),
            Box::new(|cfg: &RegressionDefaults| {
                Box::new(RidgeRegressor::new(cfg.ridge_lambda, cfg.training_capacity))
                    as Box<dyn GazeRegressor>
            }),
        );
        regression_factories.insert(
            "weighted_ridge".to_string(),
            Box::new(|cfg: &RegressionDefaults| {
                Box::new(WeightedRidgeRegressor::new(
                    cfg.ridge_lambda,
                    cfg.training_capacity,
                    WeightConfig {
                        half_life_ms: cfg.weight_half_life_ms,
                        click_weight: cfg.click_weight,
                        move_weight: cfg.move_weight,
                    },
                )) as Box<dyn GazeRegressor>
            }),
        );
        regression_factories.insert(
            "threaded_ridge".to_string(),
            Box::new(|cfg: &RegressionDefaults| {
                Box::new(ThreadedRidgeRegressor::new(
                    cfg.ridge_lambda,
                    cfg.training_capacity,
                )) as Box<dyn GazeRegressor>
            }),
        );

        Self {
            config,
            tracker_factories,
            regression_factories,
            camera_factory: Box::new(|constraints| {
                SyntheticCamera::open(constraints).map(|c| Box::new(c) as Box<dyn CameraSource>)
            }),
            active_tracker: "synthetic".to_string(),
            active_regression: "ridge".to_string(),
            listener: None,
        }
    }

    /// Register a tracker factory under a name.
    pub fn register_tracker(&mut self, name: impl Into<String>, factory: TrackerFactory) {
        self.tracker_factories.insert(name.into(), factory);
    }

    /// Register a regression factory under a name.
    pub fn register_regression(&mut self, name: impl Into<String>, factory: RegressionFactory) {
        self.regression_factories.insert(name.into(), factory);
    }

    /// Replace the camera factory (e.g. with a real device source).
    pub fn with_camera_factory(&mut self, factory: CameraFactory) {
        self.camera_factory = factory;
    }

    /// Select the tracker to start with.
    pub fn set_tracker(&mut self, name: &str) -> GazekitResult<()> {
        if !self.tracker_factories.contains_key(name) {
            return Err(GazekitError::config(format!(
                "unknown tracker '{name}'; registered: {}",
                registered_names(self.tracker_factories.keys())
            )));
        }
        self.active_tracker = name.to_string();
        Ok(())
    }

    /// Select the regression to start with.
    pub fn set_regression(&mut self, name: &str) -> GazekitResult<()> {
        if !self.regression_factories.contains_key(name) {
            return Err(GazekitError::config(format!(
                "unknown regression '{name}'; registered: {}",
                registered_names(self.regression_factories.keys())
            )));
        }
        self.active_regression = name.to_string();
        Ok(())
    }

    /// Set the per-iteration gaze listener.
    pub fn set_gaze_listener(
        &mut self,
        listener: impl FnMut(Option<GazePrediction>, f64) + Send + 'static,
    ) {
        self.listener = Some(Box::new(listener));
    }

    /// Acquire the camera and start the loop.
    ///
    /// A camera acquisition failure is fatal: it propagates to the
    /// caller and the pipeline never enters Running.
    pub async fn begin(self) -> GazekitResult<PipelineHandle> {
        let tracker_factory = self.tracker_factories.get(&self.active_tracker).ok_or_else(|| {
            GazekitError::config(format!("unknown tracker '{}'", self.active_tracker))
        })?;
        let tracker = tracker_factory();

        let regression_factory =
            self.regression_factories
                .get(&self.active_regression)
                .ok_or_else(|| {
                    GazekitError::config(format!(
                        "unknown regression '{}'",
                        self.active_regression
                    ))
                })?;
        let mut regressions = vec![regression_factory(&self.config.regression)];

        let camera = (self.camera_factory)(&self.config.camera)?;

        let store = self
            .config
            .save_data_across_sessions
            .then(|| CalibrationStore::new(self.config.store_dir.clone()));

        // The single store read happens here, before the first
        // prediction.
        if let Some(store) = &store {
            if let Some(record) = store.load_training().await {
                tracing::info!(
                    points = record.training.len(),
                    saved_at = %record.saved_at,
                    "Loaded stored calibration data"
                );
                for regressor in &mut regressions {
                    regressor.import_data(record.training.clone());
                }
            }
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(PipelineState::Running);

        let move_tick_ms = self.config.pipeline.move_tick_ms;
        let context = PipelineContext {
            clock: PipelineClock::start(),
            camera,
            tracker,
            regressions,
            tracker_factories: self.tracker_factories,
            regression_factories: self.regression_factories,
            listener: self.listener,
            store,
            recorder: EventRecorder::new(move_tick_ms),
            smoothing: DataWindow::new(self.config.pipeline.smoothing_window),
            history: DataWindow::new(self.config.pipeline.history_window),
            latest_features: None,
            eyes_valid: None,
            state: PipelineState::Running,
            state_tx,
            warned_no_regression: false,
            config: self.config,
        };

        let task = tokio::spawn(context.run(command_rx));

        Ok(PipelineHandle {
            commands: command_tx,
            state: state_rx,
            task: Some(task),
        })
    }
}

fn registered_names<'a>(names: impl Iterator<Item = &'a String>) -> String {
    let mut list: Vec<&str> = names.map(String::as_str).collect();
    list.sort_unstable();
    list.join(", ")
}

/// Control surface of a running pipeline.
pub struct PipelineHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<PipelineState>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl PipelineHandle {
    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        *self.state.borrow()
    }

    /// A watch receiver over lifecycle state changes.
    pub fn state_receiver(&self) -> watch::Receiver<PipelineState> {
        self.state.clone()
    }

    /// Stop iterating after the in-flight iteration completes.
    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    /// Resume iterating after a pause.
    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    /// Swap the active tracker by registered name.
    pub fn set_tracker(&self, name: impl Into<String>) {
        self.send(Command::SetTracker(name.into()));
    }

    /// Atomically replace the regression ensemble with a single model
    /// of the named kind, seeded from the previous ensemble's data.
    pub fn set_regression(&self, name: impl Into<String>) {
        self.send(Command::SetRegression(name.into()));
    }

    /// Add a secondary regression running in parallel, seeded from the
    /// primary's exported data.
    pub fn add_regression(&self, name: impl Into<String>) {
        self.send(Command::AddRegression(name.into()));
    }

    /// Register a tracker factory on the running session.
    pub fn register_tracker(&self, name: impl Into<String>, factory: TrackerFactory) {
        self.send(Command::RegisterTracker(name.into(), factory));
    }

    /// Register a regression factory on the running session.
    pub fn register_regression(&self, name: impl Into<String>, factory: RegressionFactory) {
        self.send(Command::RegisterRegression(name.into(), factory));
    }

    /// Set the per-iteration gaze listener.
    pub fn set_gaze_listener(
        &self,
        listener: impl FnMut(Option<GazePrediction>, f64) + Send + 'static,
    ) {
        self.send(Command::SetListener(Box::new(listener)));
    }

    /// Remove the gaze listener.
    pub fn clear_gaze_listener(&self) {
        self.send(Command::ClearListener);
    }

    /// Record a screen position with the current eye features. With no
    /// source given the example gets click weight.
    pub fn record_screen_position(&self, x: f64, y: f64, source: Option<EventSource>) {
        self.send(Command::RecordScreenPosition(ScreenEvent {
            x,
            y,
            source: source.unwrap_or(EventSource::Click),
        }));
    }

    /// Wipe the calibration store and reset all active regressors to an
    /// untrained state.
    pub fn clear_data(&self) {
        self.send(Command::ClearData);
    }

    /// Request an immediate out-of-band prediction.
    pub async fn current_prediction(&self) -> Option<GazePrediction> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::CurrentPrediction(reply_tx));
        reply_rx.await.unwrap_or(None)
    }

    /// The most recent smoothed predictions, oldest first (diagnostics
    /// window, bounded by the configured history capacity).
    pub async fn recent_predictions(&self) -> Vec<Point2D> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::History(reply_tx));
        reply_rx.await.unwrap_or_default()
    }

    /// Whether both eyes sat inside the validation box on the last
    /// iteration. `None` before the first frame or when no face was
    /// found. UI feedback only.
    pub async fn eyes_in_validation_box(&self) -> Option<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::EyesValid(reply_tx));
        reply_rx.await.unwrap_or(None)
    }

    /// End the session: release the camera, discard collaborators, and
    /// wait for the loop task to finish.
    pub async fn end(mut self) -> GazekitResult<()> {
        self.send(Command::End);
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| GazekitError::pipeline(format!("pipeline task failed: {e}")))?;
        }
        Ok(())
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::debug!("Pipeline task is gone; command dropped");
        }
    }
}

/// All mutable loop state, owned by the scheduler task. Strictly
/// sequential iterations are the sole synchronization mechanism for the
/// smoothing window and the latest-features slot.
struct PipelineContext {
    config: GazekitConfig,
    clock: PipelineClock,
    camera: Box<dyn CameraSource>,
    tracker: Box<dyn FaceTracker>,
    regressions: Vec<Box<dyn GazeRegressor>>,
    tracker_factories: HashMap<String, TrackerFactory>,
    regression_factories: HashMap<String, RegressionFactory>,
    listener: Option<GazeListener>,
    store: Option<CalibrationStore>,
    recorder: EventRecorder,
    smoothing: DataWindow<Point2D>,
    history: DataWindow<Point2D>,
    latest_features: Option<EyeFeatures>,
    eyes_valid: Option<bool>,
    state: PipelineState,
    state_tx: watch::Sender<PipelineState>,
    warned_no_regression: bool,
}

impl PipelineContext {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        let fps = self.config.pipeline.fps.max(1);
        let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        tracing::info!(
            tracker = %self.tracker.name(),
            regressions = self.regressions.len(),
            fps,
            "Gaze pipeline started"
        );

        loop {
            // Drain pending control commands. The pause flag is only
            // consulted here, so an in-flight iteration always
            // completes before it takes effect.
            loop {
                match commands.try_recv() {
                    Ok(command) => self.apply(command).await,
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.set_state(PipelineState::Ending);
                        break;
                    }
                }
            }

            match self.state {
                PipelineState::Ending => break,
                PipelineState::Paused => {
                    // Nothing is scheduled while paused; wake only for
                    // the next command.
                    match commands.recv().await {
                        Some(command) => {
                            self.apply(command).await;
                            continue;
                        }
                        None => break,
                    }
                }
                PipelineState::Idle | PipelineState::Running => {}
            }

            self.iterate().await;
            ticker.tick().await;
        }

        self.teardown();
    }

    /// One pipeline iteration, strictly sequential.
    async fn iterate(&mut self) {
        // 1-2. Frame acquisition and feature extraction. A tracker
        // failure degrades to an absent-features frame.
        let frame = self.acquire_frame().await;
        self.latest_features = match frame {
            Some(frame) => match self.tracker.extract(&frame) {
                Ok(features) => features,
                Err(e) => {
                    tracing::warn!(error = %e, "Feature extraction failed; treating frame as faceless");
                    None
                }
            },
            None => None,
        };

        // 3. Predict. The threaded variant may answer with stale
        // weights; that is its contract.
        let raw = self.predict_current();

        // 4. Validation-box feedback. UI-only and independent: whatever
        // happens here cannot block the smoothing step.
        self.eyes_valid = self
            .latest_features
            .as_ref()
            .map(|f| eyes_within_box(f, self.config.pipeline.validation_box_ratio));

        // 5. Smooth over the most recent predictions.
        let smoothed = raw.map(|p| self.smooth(p));

        // 6. Listener callback, every iteration.
        let elapsed_ms = self.clock.elapsed_ms();
        if let Some(listener) = self.listener.as_mut() {
            listener(smoothed, elapsed_ms);
        }
    }

    /// Poll the camera until a frame arrives or the last-resort guard
    /// fires. The guard firing is a performance regression to
    /// investigate, never the primary completion path.
    async fn acquire_frame(&mut self) -> Option<VideoFrame> {
        let timeout_ms = self.config.pipeline.frame_timeout_ms;
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            match self.camera.next_frame() {
                Ok(Some(frame)) => return Some(frame),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        tracing::warn!(
                            timeout_ms,
                            camera = %self.camera.name(),
                            "Frame wait guard fired; camera did not deliver in time"
                        );
                        return None;
                    }
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Camera frame error");
                    return None;
                }
            }
        }
    }

    fn predict_current(&mut self) -> Option<GazePrediction> {
        let features = self.latest_features.clone()?;

        if self.regressions.is_empty() {
            if !self.warned_no_regression {
                let error = GazekitError::no_regression(
                    "no active regressors; select one with set_regression",
                );
                tracing::warn!(error = %error, "Prediction unavailable");
                self.warned_no_regression = true;
            }
            return None;
        }
        self.warned_no_regression = false;

        let all: Vec<Point2D> = self
            .regressions
            .iter()
            .filter_map(|r| r.predict(&features))
            .collect();
        // An untrained primary means no prediction this iteration, even
        // if a secondary already has a fit.
        let primary = self.regressions[0].predict(&features)?;

        Some(GazePrediction {
            x: primary.x,
            y: primary.y,
            features,
            all,
        })
    }

    fn smooth(&mut self, raw: GazePrediction) -> GazePrediction {
        self.smoothing.push(raw.point());
        let mean = mean_of(&self.smoothing).unwrap_or_else(|| raw.point());
        let bounded = mean.bound(
            self.config.pipeline.screen_width,
            self.config.pipeline.screen_height,
        );
        self.history.push(bounded);
        GazePrediction {
            x: bounded.x,
            y: bounded.y,
            features: raw.features,
            all: raw.all,
        }
    }

    async fn apply(&mut self, command: Command) {
        match command {
            Command::Pause => {
                if self.state == PipelineState::Running {
                    self.set_state(PipelineState::Paused);
                    tracing::info!("Pipeline paused");
                }
            }
            Command::Resume => {
                if self.state == PipelineState::Paused {
                    self.set_state(PipelineState::Running);
                    tracing::info!("Pipeline resumed");
                }
            }
            Command::End => self.set_state(PipelineState::Ending),
            Command::SetTracker(name) => match self.tracker_factories.get(&name) {
                Some(factory) => {
                    self.tracker = factory();
                    self.latest_features = None;
                    tracing::info!(tracker = %name, "Tracker selected");
                }
                None => {
                    tracing::warn!(
                        tracker = %name,
                        registered = %registered_names(self.tracker_factories.keys()),
                        "Unknown tracker; keeping current"
                    );
                }
            },
            Command::SetRegression(name) => {
                if let Some(mut regressor) = self.build_regression(&name) {
                    let seed = self
                        .regressions
                        .first()
                        .map(|r| r.export_data())
                        .unwrap_or_default();
                    if !seed.is_empty() {
                        regressor.import_data(seed);
                    }
                    // Atomic swap: the old ensemble drops here, which
                    // also shuts down any background workers it owned.
                    self.regressions = vec![regressor];
                    tracing::info!(regression = %name, "Regression selected");
                }
            }
            Command::AddRegression(name) => {
                if let Some(mut regressor) = self.build_regression(&name) {
                    let seed = self
                        .regressions
                        .first()
                        .map(|r| r.export_data())
                        .unwrap_or_default();
                    if !seed.is_empty() {
                        regressor.import_data(seed);
                    }
                    self.regressions.push(regressor);
                    tracing::info!(regression = %name, "Secondary regression added");
                }
            }
            Command::RegisterTracker(name, factory) => {
                self.tracker_factories.insert(name, factory);
            }
            Command::RegisterRegression(name, factory) => {
                self.regression_factories.insert(name, factory);
            }
            Command::SetListener(listener) => self.listener = Some(listener),
            Command::ClearListener => self.listener = None,
            Command::RecordScreenPosition(event) => self.record_screen_position(event).await,
            Command::ClearData => self.clear_data().await,
            Command::CurrentPrediction(reply) => {
                let prediction = self.out_of_band_prediction().await;
                let _ = reply.send(prediction);
            }
            Command::History(reply) => {
                let _ = reply.send(self.history.to_vec());
            }
            Command::EyesValid(reply) => {
                let _ = reply.send(self.eyes_valid);
            }
        }
    }

    fn build_regression(&self, name: &str) -> Option<Box<dyn GazeRegressor>> {
        match self.regression_factories.get(name) {
            Some(factory) => Some(factory(&self.config.regression)),
            None => {
                tracing::warn!(
                    regression = %name,
                    registered = %registered_names(self.regression_factories.keys()),
                    "Unknown regression; keeping current"
                );
                None
            }
        }
    }

    async fn record_screen_position(&mut self, event: ScreenEvent) {
        if self.state == PipelineState::Paused {
            return;
        }
        if self.regressions.is_empty() {
            if !self.warned_no_regression {
                tracing::warn!("Cannot record training data with no active regressors");
                self.warned_no_regression = true;
            }
            return;
        }

        let now_ms = self.clock.elapsed_ms();
        let Some(point) = self
            .recorder
            .observe(&event, self.latest_features.as_ref(), now_ms)
        else {
            return;
        };

        for regressor in &mut self.regressions {
            regressor.add_data(point.clone());
        }

        // Clicks are the durable calibration signal; persist after each
        // one when enabled.
        if point.source == EventSource::Click {
            self.persist().await;
        }
    }

    async fn persist(&mut self) {
        let Some(store) = &self.store else { return };
        let training = self
            .regressions
            .first()
            .map(|r| r.export_data())
            .unwrap_or_default();
        let record = CalibrationRecord::new(chrono::Utc::now().to_rfc3339(), training);
        if let Err(e) = store.save_training(&record).await {
            tracing::warn!(error = %e, "Failed to persist calibration data");
        }
        if let Err(e) = store.save_settings(&self.config).await {
            tracing::warn!(error = %e, "Failed to persist settings");
        }
    }

    async fn clear_data(&mut self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.clear().await {
                tracing::warn!(error = %e, "Failed to clear calibration store");
            }
        }
        for regressor in &mut self.regressions {
            regressor.reset();
        }
        self.recorder.reset();
        self.smoothing.clear();
        self.history.clear();
        tracing::info!("Calibration data cleared");
    }

    /// Fresh acquire + extract + predict, bypassing smoothing and the
    /// listener.
    async fn out_of_band_prediction(&mut self) -> Option<GazePrediction> {
        if let Some(frame) = self.acquire_frame().await {
            match self.tracker.extract(&frame) {
                Ok(features) => self.latest_features = features,
                Err(e) => {
                    tracing::warn!(error = %e, "Feature extraction failed on demand");
                    self.latest_features = None;
                }
            }
        }
        self.predict_current()
    }

    fn set_state(&mut self, state: PipelineState) {
        self.state = state;
        let _ = self.state_tx.send(state);
    }

    fn teardown(mut self) {
        self.set_state(PipelineState::Ending);
        // Deterministic camera release; the ensemble drop also stops
        // any background solver workers.
        self.camera.release();
        self.listener = None;
        self.regressions.clear();
        tracing::info!(
            history = self.history.len(),
            "Gaze pipeline ended"
        );
    }
}

/// Arithmetic mean over the retained points; `None` for an empty
/// window (a mean is never fabricated).
fn mean_of(window: &DataWindow<Point2D>) -> Option<Point2D> {
    if window.is_empty() {
        return None;
    }
    let len = window.len() as f64;
    let (sum_x, sum_y) = window
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2D::new(sum_x / len, sum_y / len))
}
