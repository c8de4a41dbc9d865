//! Access to the Stellarium Remote Control plugin's object info endpoint

pub use client::StellariumClient;

use crate::coordinates::SkyCoordinate;
use crate::errors::OffsetResult;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

mod client;

/// Which object to ask Stellarium about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectQuery {
    /// Whatever is currently selected in the UI
    Selected,
    /// A named object, e.g. a virtual telescope
    Named(String),
}

impl Display for ObjectQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectQuery::Selected => write!(f, "selected object"),
            ObjectQuery::Named(name) => write!(f, "object {:?}", name),
        }
    }
}

#[async_trait]
pub trait CoordinateSource {
    async fn fetch(&self, query: &ObjectQuery) -> OffsetResult<SkyCoordinate>;
}

/// The subset of `/api/objects/info?format=map` we read. Degrees, J2000.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectInfo {
    pub ra: f64,
    pub dec: f64,
}

impl ObjectInfo {
    pub(crate) fn parse(body: &str) -> OffsetResult<SkyCoordinate> {
        let info: ObjectInfo = serde_json::from_str(body)?;
        SkyCoordinate::new(info.ra, info.dec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OffsetError;

    #[test]
    fn test_parse_object_info() {
        let coord =
            ObjectInfo::parse(r#"{"name":"Rigel","ra":78.634,"dec":-8.2016,"vmag":0.13}"#)
                .unwrap();
        assert_eq!(coord.ra(), 78.634);
        assert_eq!(coord.dec(), -8.2016);
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            ObjectInfo::parse(r#"{"ra":78.634}"#),
            Err(OffsetError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            ObjectInfo::parse(r#"{"ra":"5h14m","dec":-8.2}"#),
            Err(OffsetError::MalformedResponse(_))
        ));
        assert!(matches!(
            ObjectInfo::parse("no object selected"),
            Err(OffsetError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            ObjectInfo::parse(r#"{"ra":10,"dec":95}"#),
            Err(OffsetError::InvalidCoordinate { .. })
        ));
    }
}
