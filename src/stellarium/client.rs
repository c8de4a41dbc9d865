use super::{CoordinateSource, ObjectInfo, ObjectQuery};
use crate::config::StellariumSettings;
use crate::coordinates::SkyCoordinate;
use crate::errors::{OffsetError, OffsetResult};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;

const OBJECT_INFO_PATH: &str = "/api/objects/info";

#[derive(Debug, Clone)]
pub struct StellariumClient {
    base_url: String,
    client: reqwest::Client,
}

impl StellariumClient {
    pub fn new(settings: &StellariumSettings) -> OffsetResult<Self> {
        // The remote control plugin is always reached directly
        let mut builder = reqwest::Client::builder().no_proxy();
        if let Some(millis) = settings.timeout_millis {
            builder = builder.timeout(Duration::from_millis(millis as u64));
        }

        Ok(Self {
            base_url: format!("http://{}:{}", settings.host, settings.port),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn object_info_url(&self, query: &ObjectQuery) -> OffsetResult<Url> {
        let url = format!("{}{}", self.base_url, OBJECT_INFO_PATH);
        let parsed = match query {
            ObjectQuery::Selected => Url::parse_with_params(&url, &[("format", "map")]),
            ObjectQuery::Named(name) => {
                Url::parse_with_params(&url, &[("format", "map"), ("name", name.as_str())])
            }
        };
        let mut parsed = parsed
            .map_err(|e| OffsetError::Client(format!("Bad Stellarium url {}: {}", url, e)))?;

        // Stellarium decodes queries with QUrlQuery, which keeps '+' literal.
        // Form encoding escapes real '+' as %2B, so any '+' left is a space.
        if let Some(query) = parsed.query().map(|q| q.replace('+', "%20")) {
            parsed.set_query(Some(&query));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl CoordinateSource for StellariumClient {
    async fn fetch(&self, query: &ObjectQuery) -> OffsetResult<SkyCoordinate> {
        let url = self.object_info_url(query)?;
        tracing::debug!("Requesting {} from {}", query, url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OffsetError::ServerStatus {
                status: status.as_u16(),
                body,
            });
        }

        let coord = ObjectInfo::parse(&body)?;
        tracing::debug!("{} is at ra {}, dec {}", query, coord.ra(), coord.dec());
        Ok(coord)
    }
}
