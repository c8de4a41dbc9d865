use std::fmt::Formatter;

/// Which celestial pole the mount is aligned on
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_southern(southern_hemisphere: bool) -> Self {
        if southern_hemisphere {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }
}

impl core::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::North => write!(f, "N"),
            Hemisphere::South => write!(f, "S"),
        }
    }
}
