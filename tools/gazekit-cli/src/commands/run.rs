//! `gazekit run` — self-calibrating demo against the synthetic camera.
//!
//! The synthetic camera encodes a moving gaze target; the demo clicks
//! on that target periodically, so the model calibrates itself while
//! running and the printed predictions converge on the target path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gazekit_common::config::GazekitConfig;
use gazekit_common::error::GazekitResult;
use gazekit_pipeline::camera::{CameraSource, SyntheticCamera};
use gazekit_pipeline::session::GazeSession;

pub async fn execute(config: GazekitConfig, seconds: u64, regression: &str) -> GazekitResult<()> {
    let screen_w = config.pipeline.screen_width;
    let screen_h = config.pipeline.screen_height;

    let camera = SyntheticCamera::open(&config.camera)?;
    let target = camera.target_handle();

    let mut session = GazeSession::new(config);
    session.set_regression(regression)?;
    session.with_camera_factory(Box::new(move |_| {
        Ok(Box::new(camera) as Box<dyn CameraSource>)
    }));

    let iterations = Arc::new(AtomicUsize::new(0));
    let counter = iterations.clone();
    session.set_gaze_listener(move |prediction, elapsed_ms| {
        let n = counter.fetch_add(1, Ordering::Relaxed);
        // One line roughly every half second at 60 fps.
        if n % 30 != 0 {
            return;
        }
        match prediction {
            Some(p) => println!("[{elapsed_ms:8.0} ms] gaze ({:7.1}, {:7.1})", p.x, p.y),
            None => println!("[{elapsed_ms:8.0} ms] gaze unavailable"),
        }
    });

    let handle = session.begin().await?;
    println!("Demo session started ({regression}); running for {seconds}s");

    // Sweep the target along a slow figure-of-eight and click on it
    // every few steps so the model keeps learning.
    let steps = seconds * 10;
    for step in 0..steps {
        let t = step as f64 / 10.0;
        let x_norm = 0.5 + 0.4 * (0.7 * t).sin();
        let y_norm = 0.5 + 0.4 * (1.1 * t).cos();
        target.set(x_norm, y_norm);

        if step % 3 == 0 {
            handle.record_screen_position(x_norm * screen_w, y_norm * screen_h, None);
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let final_prediction = handle.current_prediction().await;
    handle.end().await?;

    println!(
        "Demo finished: {} listener invocations",
        iterations.load(Ordering::Relaxed)
    );
    if let Some(p) = final_prediction {
        println!("Final prediction: ({:.1}, {:.1})", p.x, p.y);
    }
    Ok(())
}
