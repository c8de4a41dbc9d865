use super::hemisphere::Hemisphere;
use std::fmt::Formatter;

/// Which way to turn the dec knob, relative to the aligned pole
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum PoleDirection {
    Towards,
    Away,
}

impl PoleDirection {
    pub fn from_turns(turns: f64) -> Self {
        if turns < 0. {
            PoleDirection::Away
        } else {
            PoleDirection::Towards
        }
    }

    pub fn describe(self, pole: Hemisphere) -> String {
        format!("{} {} celestial pole", self, pole)
    }
}

impl core::fmt::Display for PoleDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PoleDirection::Towards => write!(f, "towards"),
            PoleDirection::Away => write!(f, "away from"),
        }
    }
}
