use super::hemisphere::Hemisphere;
use std::fmt::Formatter;

/// Hand controller buttons that drive the RA axis
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum RaButton {
    N,
    S,
}

impl core::fmt::Display for RaButton {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RaButton::N => write!(f, "N"),
            RaButton::S => write!(f, "S"),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum RaMotion {
    IncreaseRa,
    DecreaseRa,
}

impl RaMotion {
    pub fn from_minutes(minutes: f64) -> Self {
        if minutes < 0. {
            RaMotion::DecreaseRa
        } else {
            RaMotion::IncreaseRa
        }
    }

    /// The button labels are written from the southern hemisphere's point of view
    pub fn using(self, hemisphere: Hemisphere) -> RaButton {
        match (self, hemisphere) {
            (RaMotion::DecreaseRa, Hemisphere::South) => RaButton::S,
            (RaMotion::DecreaseRa, Hemisphere::North) => RaButton::N,
            (RaMotion::IncreaseRa, Hemisphere::South) => RaButton::N,
            (RaMotion::IncreaseRa, Hemisphere::North) => RaButton::S,
        }
    }
}
