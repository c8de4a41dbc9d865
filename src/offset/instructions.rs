use super::conversion::AdjustmentResult;
use std::fmt::{Display, Formatter};

/// The operator-facing text for an adjustment
#[derive(Debug, Clone, PartialEq)]
pub struct Instructions {
    pub ra: String,
    pub dec: String,
}

impl From<&AdjustmentResult> for Instructions {
    fn from(result: &AdjustmentResult) -> Self {
        Self {
            ra: format!(
                "Press {} for {} seconds",
                result.ra_button,
                result.ra_seconds.round() as u64
            ),
            dec: format!(
                "Rotate dec knob {:.1} turns {}",
                result.dec_turns,
                result.dec_direction.describe(result.pole)
            ),
        }
    }
}

impl Display for Instructions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.ra)?;
        write!(f, "{}", self.dec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{Hemisphere, PoleDirection, RaButton};

    #[test]
    fn test_render() {
        let result = AdjustmentResult {
            ra_button: RaButton::N,
            ra_seconds: 92.4,
            dec_direction: PoleDirection::Away,
            dec_turns: 2.0,
            pole: Hemisphere::South,
        };
        assert_eq!(
            Instructions::from(&result).to_string(),
            "Press N for 92 seconds\nRotate dec knob 2.0 turns away from S celestial pole"
        );
    }

    #[test]
    fn test_render_rounds_seconds() {
        let result = AdjustmentResult {
            ra_button: RaButton::S,
            ra_seconds: 109.5,
            dec_direction: PoleDirection::Towards,
            dec_turns: 0.,
            pole: Hemisphere::North,
        };
        let instructions = Instructions::from(&result);
        assert_eq!(instructions.ra, "Press S for 110 seconds");
        assert_eq!(instructions.dec, "Rotate dec knob 0.0 turns towards N celestial pole");
    }
}
