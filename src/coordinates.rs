use crate::astro_math::{modulo, Degrees};
use crate::errors::{OffsetError, OffsetResult};

/// An equatorial position, both axes in degrees.
/// Right ascension is kept in [0, 360), declination in [-90, 90].
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SkyCoordinate {
    right_ascension: Degrees,
    declination: Degrees,
}

impl SkyCoordinate {
    pub fn new(ra: Degrees, dec: Degrees) -> OffsetResult<Self> {
        if !ra.is_finite() || !dec.is_finite() {
            return Err(OffsetError::InvalidCoordinate {
                ra,
                dec,
                reason: "coordinates must be finite",
            });
        }

        if !(-90. ..=90.).contains(&dec) {
            return Err(OffsetError::InvalidCoordinate {
                ra,
                dec,
                reason: "declination outside -90..=90",
            });
        }

        Ok(Self {
            right_ascension: modulo(ra, 360.),
            declination: dec,
        })
    }

    pub fn ra(&self) -> Degrees {
        self.right_ascension
    }

    pub fn dec(&self) -> Degrees {
        self.declination
    }
}
