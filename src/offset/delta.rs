use crate::astro_math::Degrees;
use crate::coordinates::SkyCoordinate;

/// Difference from the current pointing to the desired target.
/// RA is rounded to whole degrees and not wrapped across 0/360.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct OffsetDelta {
    pub ra: Degrees,
    pub dec: Degrees,
}

impl OffsetDelta {
    pub fn between(current: &SkyCoordinate, desired: &SkyCoordinate) -> Self {
        let ra = (desired.ra() - current.ra()).round();
        if 180. < ra.abs() {
            tracing::warn!(
                "RA offset of {} degrees crosses 0h, the instructions take the long way round",
                ra
            );
        }

        Self {
            ra,
            dec: desired.dec() - current.dec(),
        }
    }
}
