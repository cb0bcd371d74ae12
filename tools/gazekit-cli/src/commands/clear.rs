//! `gazekit clear-data` — wipe stored calibration data.

use gazekit_common::config::GazekitConfig;
use gazekit_common::error::GazekitResult;
use gazekit_pipeline::store::CalibrationStore;

pub async fn execute(config: GazekitConfig) -> GazekitResult<()> {
    let store = CalibrationStore::new(config.store_dir.clone());
    store.clear().await?;
    println!("Cleared calibration data under {}", store.dir().display());
    Ok(())
}
