//! Turning a pair of sky positions into manual mount adjustments

pub use conversion::AdjustmentResult;
pub use delta::OffsetDelta;
pub use instructions::Instructions;

use crate::config::Config;
use crate::coordinates::SkyCoordinate;
use crate::errors::OffsetResult;
use crate::stellarium::{CoordinateSource, ObjectQuery};

mod conversion;
mod delta;
mod instructions;

/// Offsets from the current pointing to the desired target using the configured calibration
pub fn calculate_adjustment(
    current: &SkyCoordinate,
    desired: &SkyCoordinate,
    config: &Config,
) -> AdjustmentResult {
    let delta = OffsetDelta::between(current, desired);
    AdjustmentResult::from_delta(&delta, &config.calibration, config.observing.hemisphere())
}

/// Fetch both positions and work out what to do with the mount.
/// The selected object is where the scope is centered; the virtual telescope marks the target.
pub async fn plan_offset<S: CoordinateSource + Sync>(
    source: &S,
    config: &Config,
) -> OffsetResult<Instructions> {
    let current = source.fetch(&ObjectQuery::Selected).await?;
    let desired = source
        .fetch(&ObjectQuery::Named(config.stellarium.telescope_name.clone()))
        .await?;

    let result = calculate_adjustment(&current, &desired, config);
    Ok(Instructions::from(&result))
}
