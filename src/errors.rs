use crate::astro_math::Degrees;
use std::result;

pub type OffsetResult<T> = result::Result<T, OffsetError>;

#[derive(Debug, thiserror::Error)]
pub enum OffsetError {
    /// Stellarium could not be reached or the transfer failed
    #[error("Network error talking to Stellarium: {0}")]
    Network(String),
    /// Stellarium answered with a non-success status
    #[error("Stellarium returned status {status}: {body}")]
    ServerStatus { status: u16, body: String },
    /// The object info payload was not usable
    #[error("Malformed object info response: {0}")]
    MalformedResponse(String),
    #[error("Invalid coordinate (ra {ra}, dec {dec}): {reason}")]
    InvalidCoordinate {
        ra: Degrees,
        dec: Degrees,
        reason: &'static str,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The HTTP client itself could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for OffsetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            OffsetError::Client(err.to_string())
        } else {
            OffsetError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OffsetError {
    fn from(err: serde_json::Error) -> Self {
        OffsetError::MalformedResponse(err.to_string())
    }
}

pub fn check_positive(name: &str, value: f64) -> OffsetResult<()> {
    if value.is_finite() && 0. < value {
        Ok(())
    } else {
        Err(OffsetError::InvalidConfig(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
