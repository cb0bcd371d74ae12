//! `gazekit check` — configuration and store health probe.

use gazekit_common::config::GazekitConfig;
use gazekit_common::error::GazekitResult;

pub fn execute(config: GazekitConfig) -> GazekitResult<()> {
    println!("GazeKit capability check");
    println!("  store dir        : {}", config.store_dir.display());
    println!(
        "  store writable   : {}",
        match std::fs::create_dir_all(&config.store_dir) {
            Ok(()) => "yes",
            Err(_) => "NO",
        }
    );
    println!("  persistence      : {}", config.save_data_across_sessions);
    println!(
        "  camera request   : {}x{} ({})",
        config.camera.width, config.camera.height, config.camera.facing
    );
    println!("  pipeline fps     : {}", config.pipeline.fps);
    println!(
        "  smoothing window : {} predictions",
        config.pipeline.smoothing_window
    );
    println!("  move tick        : {} ms", config.pipeline.move_tick_ms);
    println!("  ridge lambda     : {}", config.regression.ridge_lambda);
    println!(
        "  training window  : {} points",
        config.regression.training_capacity
    );
    println!("  built-in trackers    : synthetic");
    println!("  built-in regressions : ridge, weighted_ridge, threaded_ridge");
    Ok(())
}
