use super::delta::OffsetDelta;
use crate::astro_math::{round_to, Hms};
use crate::config::CalibrationConstants;
use crate::util::{Hemisphere, PoleDirection, RaButton, RaMotion};

/// The mechanical moves for one offset, as magnitudes plus directions
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct AdjustmentResult {
    pub ra_button: RaButton,
    pub ra_seconds: f64,
    pub dec_direction: PoleDirection,
    pub dec_turns: f64,
    pub pole: Hemisphere,
}

impl AdjustmentResult {
    pub fn from_delta(
        delta: &OffsetDelta,
        calibration: &CalibrationConstants,
        hemisphere: Hemisphere,
    ) -> Self {
        // Only the minutes of the RA offset are driven
        let hms = Hms::from_degrees(delta.ra);
        let motion = RaMotion::from_minutes(hms.minutes);
        let ra_seconds = match motion {
            RaMotion::DecreaseRa => hms.minutes.abs() * calibration.negative_minute_offset_seconds,
            RaMotion::IncreaseRa => hms.minutes.abs() * calibration.positive_minute_offset_seconds,
        };

        let turns = round_to(delta.dec / calibration.dec_degrees_per_full_turn, 1);

        tracing::debug!(
            "RA offset {:.3}h ({}h {}m {:.1}s), dec offset {} degrees ({} turns)",
            hms.to_hours(),
            hms.hours,
            hms.minutes,
            hms.seconds,
            delta.dec,
            turns
        );

        Self {
            ra_button: motion.using(hemisphere),
            ra_seconds,
            dec_direction: PoleDirection::from_turns(turns),
            dec_turns: turns.abs(),
            pole: hemisphere,
        }
    }
}
