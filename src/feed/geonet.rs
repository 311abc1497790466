//! GeoNet feed implementation.
//!
//! Talks to the public GeoNet quake API, which serves the latest 100
//! events as GeoJSON at `/quake?MMI=<n>`. `MMI=-1` returns everything.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;

use crate::feed::{FeatureCollection, FeedError, FeedSource, MmiFilter, QuakeIndex, index_features};

pub const DEFAULT_FEED_URL: &str = "http://api.geonet.org.nz";

const GEOJSON_ACCEPT: &str = "application/vnd.geo+json;version=2";

/// GeoNet quake feed over HTTP.
pub struct GeoNetFeed {
    base_url: String,
    client: reqwest::Client,
}

impl GeoNetFeed {
    /// `timeout` of `None` leaves the client's default (no overall timeout).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("quakewatch/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FeedSource for GeoNetFeed {
    fn name(&self) -> &str {
        "geonet"
    }

    async fn fetch(&self, filter: MmiFilter) -> Result<QuakeIndex, FeedError> {
        let url = format!("{}/quake", self.base_url);
        debug!("GeoNet request: {} MMI={}", url, filter.query_value());

        let response = self
            .client
            .get(&url)
            .query(&[("MMI", filter.query_value())])
            .header(ACCEPT, GEOJSON_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        debug!("GeoNet response status: {}", status);

        if !status.is_success() {
            warn!("GeoNet API error: {}", status);
            return Err(FeedError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await?;
        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| FeedError::Decode(e.to_string()))?;

        let index = index_features(collection.features);
        info!("GeoNet returned {} quakes", index.len());
        Ok(index)
    }
}
