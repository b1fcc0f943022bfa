//! # neo-feed
//!
//! Near-Earth-object feed client for neowatch.
//!
//! Fetches today's close approaches from the NASA NeoWs `feed` endpoint and
//! turns them into [`NearEarthObject`]s at the ingestion boundary (see
//! [`wire`]). When the feed cannot be reached or parsed,
//! [`fetch_or_fallback`] substitutes the fixed synthetic batch from
//! [`fallback`], so a poll never fails.

pub mod fallback;

mod error;
mod http;
mod wire;

pub use error::FeedError;

use chrono::{DateTime, NaiveDate, Utc};
use neo_config::FeedConfig;
use neo_core::entities::{FeedBatch, NearEarthObject};
use neo_core::enums::FeedOrigin;

use crate::http::check_response;

/// Something that can supply the objects approaching on a given day.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    /// Fetch every object with a close approach on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the source is unavailable.
    async fn fetch(&self, date: NaiveDate) -> Result<Vec<NearEarthObject>, FeedError>;
}

/// HTTP client for the NeoWs feed endpoint.
pub struct NeoFeedClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl NeoFeedClient {
    /// Create a client from feed configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("neowatch/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn feed_url(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d");
        format!(
            "{}?start_date={date}&end_date={date}&api_key={}",
            self.api_url,
            urlencoding::encode(&self.api_key)
        )
    }
}

impl FeedSource for NeoFeedClient {
    async fn fetch(&self, date: NaiveDate) -> Result<Vec<NearEarthObject>, FeedError> {
        let url = self.feed_url(date);
        tracing::debug!(%date, api_url = %self.api_url, "fetching neo feed");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let objects = wire::parse_feed(&body).map_err(|e| FeedError::Parse(e.to_string()))?;

        tracing::debug!(count = objects.len(), "neo feed parsed");
        Ok(objects)
    }
}

/// Fetch today's batch, substituting the synthetic batch on any failure.
///
/// The failure is logged and otherwise swallowed; the returned batch records
/// its [`FeedOrigin`].
pub async fn fetch_or_fallback<S: FeedSource>(source: &S, now: DateTime<Utc>) -> FeedBatch {
    match source.fetch(now.date_naive()).await {
        Ok(objects) => FeedBatch::new(objects, FeedOrigin::Live, now),
        Err(error) => {
            tracing::warn!(%error, "neo feed unavailable, using sample asteroid data");
            fallback::sample_batch(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_uses_same_start_and_end_date() {
        let config = FeedConfig {
            api_key: "a key&more".into(),
            ..Default::default()
        };
        let client = NeoFeedClient::new(&config).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(
            client.feed_url(date),
            "https://api.nasa.gov/neo/rest/v1/feed?start_date=2026-10-18&end_date=2026-10-18&api_key=a%20key%26more"
        );
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_today() {
        let client = NeoFeedClient::new(&FeedConfig::default()).unwrap();
        let batch = fetch_or_fallback(&client, Utc::now()).await;
        println!(
            "\n── {} batch ── {} objects, {} hazardous",
            batch.origin,
            batch.len(),
            batch.hazardous().count()
        );
        for neo in batch.objects.iter().take(5) {
            println!(
                "  {} | risk {} | {:?} km",
                neo.name,
                neo_core::risk::score(neo),
                neo.miss_distance_km()
            );
        }
    }
}
