use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{data::fetch_json, domain::weather::Location, error::WeatherError};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const REVERSE_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";
const GEOCODE_TIMEOUT: Duration = Duration::from_secs(8);

/// Candidates offered while typing a search.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    reverse_url: String,
}

impl GeocodeClient {
    pub fn with_base_urls(
        client: Client,
        base_url: impl Into<String>,
        reverse_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            reverse_url: reverse_url.into(),
        }
    }

    /// First match for a free-text query.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Location, WeatherError> {
        let mut results = self.search(query, 1).await?;
        if results.is_empty() {
            return Err(WeatherError::LocationNotFound(query.trim().to_string()));
        }
        Ok(results.swap_remove(0))
    }

    /// Up to [`MAX_SUGGESTIONS`] ranked candidates; empty when nothing matches.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        self.search(query, MAX_SUGGESTIONS).await
    }

    /// Best human-readable name for coordinates, if the service knows one.
    #[instrument(skip(self))]
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, WeatherError> {
        let request = self
            .client
            .get(&self.reverse_url)
            .timeout(GEOCODE_TIMEOUT)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ]);
        let payload: ReverseResponse = fetch_json(request).await?;
        Ok(payload.best_name())
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<Location>, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let request = self
            .client
            .get(&self.base_url)
            .timeout(GEOCODE_TIMEOUT)
            .query(&[
                ("name", query.to_string()),
                ("count", count.to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ]);
        let payload: GeocodeResponse = fetch_json(request).await?;
        let results = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .take(count)
            .map(Location::from)
            .collect::<Vec<_>>();
        debug!(matches = results.len(), "geocoding finished");
        Ok(results)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
    timezone: Option<String>,
}

impl From<GeocodeResult> for Location {
    fn from(entry: GeocodeResult) -> Self {
        Self {
            name: entry.name,
            latitude: entry.latitude,
            longitude: entry.longitude,
            country: entry.country,
            admin1: entry.admin1,
            timezone: entry.timezone,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseResponse {
    city: Option<String>,
    locality: Option<String>,
}

impl ReverseResponse {
    fn best_name(self) -> Option<String> {
        [self.city, self.locality]
            .into_iter()
            .flatten()
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty())
    }
}
