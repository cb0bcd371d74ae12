//! `gazekit info` — inspect stored calibration data.

use gazekit_common::config::GazekitConfig;
use gazekit_common::error::GazekitResult;
use gazekit_model::EventSource;
use gazekit_pipeline::store::CalibrationStore;

pub async fn execute(config: GazekitConfig) -> GazekitResult<()> {
    let store = CalibrationStore::new(config.store_dir.clone());
    println!("Store: {}", store.dir().display());

    match store.load_training().await {
        Some(record) => {
            let clicks = record
                .training
                .points
                .iter()
                .filter(|p| p.source == EventSource::Click)
                .count();
            let moves = record.training.len() - clicks;
            println!("  training data : {} points ({clicks} clicks, {moves} moves)", record.training.len());
            println!("  saved at      : {}", record.saved_at);
            println!("  schema        : {}", record.schema_version);
        }
        None => println!("  training data : none"),
    }

    match store.load_settings().await {
        Some(settings) => println!(
            "  settings      : present (fps {}, λ {})",
            settings.pipeline.fps, settings.regression.ridge_lambda
        ),
        None => println!("  settings      : none"),
    }

    Ok(())
}
