pub type Hours = f64;
pub type Degrees = f64;

const SECONDS_PER_DEGREE: f64 = 240.; // 15 degrees per hour of RA

/// Result in [0, base). Values already in range come back untouched.
pub fn modulo(val: f64, base: f64) -> f64 {
    let r = val % base;
    let r = if r < 0. { r + base } else { r };
    // A tiny negative remainder can round up to base itself
    if r < base {
        r
    } else {
        0.
    }
}

/// Rounds to `places` decimal places from the exact binary value, ties to even.
/// 0.15 is stored just below 0.15 and so rounds to 0.1.
pub fn round_to(val: f64, places: usize) -> f64 {
    format!("{:.*}", places, val).parse().unwrap_or(val)
}

/// A signed sexagesimal time angle. Every component carries the sign of the angle,
/// so -5 degrees is (-0h, -20m, -0s).
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Hms {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Hms {
    /// Convert an angle in degrees to hours/minutes/seconds of RA.
    /// Works from the total number of time seconds so whole-degree inputs give exact minutes.
    pub fn from_degrees(deg: Degrees) -> Self {
        let sign = if deg < 0. { -1. } else { 1. };
        let total_seconds = deg.abs() * SECONDS_PER_DEGREE;

        let h = (total_seconds / 3600.).trunc();
        let rem = total_seconds - h * 3600.;
        let m = (rem / 60.).trunc();
        let s = rem - m * 60.;

        Hms {
            hours: sign * h,
            minutes: sign * m,
            seconds: sign * s,
        }
    }

    pub fn to_hours(self) -> Hours {
        self.hours + self.minutes / 60. + self.seconds / 3600.
    }
}
