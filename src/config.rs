use crate::errors::{check_positive, OffsetError, OffsetResult};
use crate::util::Hemisphere;
use serde::{Deserialize, Serialize};

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub stellarium: StellariumSettings,
    pub calibration: CalibrationConstants,
    pub observing: ObservingSettings,
}

impl Config {
    pub fn validate(&self) -> OffsetResult<()> {
        self.calibration.validate()?;
        if self.stellarium.telescope_name.trim().is_empty() {
            return Err(OffsetError::InvalidConfig(
                "telescope_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/* Stellarium Remote Control Settings */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StellariumSettings {
    pub host: String,
    pub port: u16,
    /// Name of the virtual telescope in Stellarium's telescope control plugin
    pub telescope_name: String,
    pub timeout_millis: Option<u32>, // None waits forever
}

impl Default for StellariumSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8090,
            telescope_name: "Telescope1".to_string(),
            timeout_millis: None,
        }
    }
}

/* Device Calibration */
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CalibrationConstants {
    /// Seconds of 12x slew per RA minute when increasing RA
    pub positive_minute_offset_seconds: f64,
    /// Seconds of 12x slew per RA minute when decreasing RA
    pub negative_minute_offset_seconds: f64,
    /// Declination swept by one full turn of the dec knob
    pub dec_degrees_per_full_turn: f64,
}

impl CalibrationConstants {
    pub fn validate(&self) -> OffsetResult<()> {
        check_positive(
            "positive_minute_offset_seconds",
            self.positive_minute_offset_seconds,
        )?;
        check_positive(
            "negative_minute_offset_seconds",
            self.negative_minute_offset_seconds,
        )?;
        check_positive("dec_degrees_per_full_turn", self.dec_degrees_per_full_turn)
    }
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self {
            positive_minute_offset_seconds: 4.62,
            negative_minute_offset_seconds: 5.45,
            dec_degrees_per_full_turn: 2.95,
        }
    }
}

/* Location */
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct ObservingSettings {
    pub southern_hemisphere: bool,
}

impl ObservingSettings {
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_southern(self.southern_hemisphere)
    }
}

impl Default for ObservingSettings {
    fn default() -> Self {
        Self {
            southern_hemisphere: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.stellarium.port, 8090);
        assert_eq!(config.stellarium.telescope_name, "Telescope1");
        assert_eq!(config.observing.hemisphere(), Hemisphere::South);
    }

    #[test]
    fn test_rejects_bad_calibration() {
        let mut config = Config::default();
        config.calibration.dec_degrees_per_full_turn = 0.;
        assert!(matches!(
            config.validate(),
            Err(OffsetError::InvalidConfig(_))
        ));

        config.calibration = CalibrationConstants {
            negative_minute_offset_seconds: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OffsetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_empty_telescope_name() {
        let mut config = Config::default();
        config.stellarium.telescope_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("sa_offset_config_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[stellarium]
host = "127.0.0.1"
port = 8091
telescope_name = "Scope"
timeout_millis = 500

[calibration]
positive_minute_offset_seconds = 4.0
negative_minute_offset_seconds = 5.0
dec_degrees_per_full_turn = 3.0

[observing]
southern_hemisphere = false
"#,
        )
        .unwrap();

        let config: Config = confy::load_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.stellarium.port, 8091);
        assert_eq!(config.stellarium.timeout_millis, Some(500));
        assert_eq!(config.calibration.dec_degrees_per_full_turn, 3.0);
        assert_eq!(config.observing.hemisphere(), Hemisphere::North);
    }
}
