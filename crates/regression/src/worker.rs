//! Background solver actor.
//!
//! The threaded regressor delegates its matrix solves to a dedicated
//! task connected only by channels — no shared memory. Requests are
//! processed strictly in submission order, so an `Add` submitted before
//! a `Predict` is always applied before that `Predict` is serviced.
//! Completed fits are published on a watch channel; the real-time caller
//! reads whatever solve finished last and never blocks on one in flight.

use tokio::sync::{mpsc, oneshot, watch};

use gazekit_model::{DataPoint, DataWindow, EyeFeatures, Point2D, TrainingSet};

use crate::ridge::{fit, RidgeWeights};

/// Requests accepted by the solver task.
pub enum SolveRequest {
    /// Ingest a training point and refit.
    Add(DataPoint),

    /// Predict from the worker's current state, in submission order.
    Predict {
        features: EyeFeatures,
        reply: oneshot::Sender<Option<Point2D>>,
    },

    /// Replace all training data and refit.
    Import(TrainingSet),

    /// Drop all training data and fitted state.
    Reset,

    /// Stop the worker. Requests already queued behind this are dropped;
    /// missing replies at teardown are not errors.
    Shutdown,
}

/// Client half of the solver channel pair.
pub struct SolverHandle {
    requests: mpsc::UnboundedSender<SolveRequest>,
    weights: watch::Receiver<Option<RidgeWeights>>,
}

impl SolverHandle {
    /// Spawn a solver task. Must be called within a tokio runtime.
    pub fn spawn(lambda: f64, training_capacity: usize) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (weights_tx, weights_rx) = watch::channel(None);

        tokio::spawn(run_solver(request_rx, weights_tx, lambda, training_capacity));

        Self {
            requests: request_tx,
            weights: weights_rx,
        }
    }

    /// Queue a request. Returns false if the worker is gone; callers
    /// treat that as a degraded state, not a failure.
    pub fn submit(&self, request: SolveRequest) -> bool {
        if self.requests.send(request).is_err() {
            tracing::debug!("Solver worker is gone; request dropped");
            return false;
        }
        true
    }

    /// Weights of the most recently completed solve, if any. Never
    /// blocks; may be stale while newer adds are still being fitted.
    pub fn latest_weights(&self) -> Option<RidgeWeights> {
        self.weights.borrow().clone()
    }

    /// A watch receiver over published weights. Useful for callers that
    /// want to await the next completed solve.
    pub fn subscribe_weights(&self) -> watch::Receiver<Option<RidgeWeights>> {
        self.weights.clone()
    }

    /// Request worker teardown.
    pub fn shutdown(&self) {
        let _ = self.requests.send(SolveRequest::Shutdown);
    }
}

async fn run_solver(
    mut requests: mpsc::UnboundedReceiver<SolveRequest>,
    weights_tx: watch::Sender<Option<RidgeWeights>>,
    lambda: f64,
    training_capacity: usize,
) {
    let mut window: DataWindow<DataPoint> = DataWindow::new(training_capacity);
    // The worker's own view of the current fit. Publication and local
    // state move together so an in-order Predict sees exactly the adds
    // queued before it.
    let mut current: Option<RidgeWeights> = None;

    tracing::debug!(lambda, training_capacity, "Solver worker started");

    while let Some(request) = requests.recv().await {
        match request {
            SolveRequest::Add(point) => {
                window.push(point);
                refit(&window, lambda, &mut current, &weights_tx);
            }
            SolveRequest::Predict { features, reply } => {
                let prediction = current.as_ref().map(|w| w.predict(&features));
                // The requester may have given up waiting; that is fine.
                let _ = reply.send(prediction);
            }
            SolveRequest::Import(data) => {
                window.clear();
                for point in data.points {
                    window.push(point);
                }
                if window.is_empty() {
                    current = None;
                    let _ = weights_tx.send(None);
                } else {
                    refit(&window, lambda, &mut current, &weights_tx);
                }
            }
            SolveRequest::Reset => {
                window.clear();
                current = None;
                let _ = weights_tx.send(None);
            }
            SolveRequest::Shutdown => break,
        }
    }

    tracing::debug!("Solver worker stopped");
}

/// Refit over the retained window. A failed solve is logged and leaves
/// the previously published weights intact — partial state is never
/// installed.
fn refit(
    window: &DataWindow<DataPoint>,
    lambda: f64,
    current: &mut Option<RidgeWeights>,
    weights_tx: &watch::Sender<Option<RidgeWeights>>,
) {
    let points = window.to_vec();
    match fit(&points, lambda) {
        Ok(weights) => {
            *current = Some(weights.clone());
            let _ = weights_tx.send(Some(weights));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Background solve failed; prior weights retained");
        }
    }
}
