use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::GeolocationError;

const GEOIP_URL: &str = "https://ipapi.co/json/";
const GEOIP_TIMEOUT: Duration = Duration::from_secs(8);

/// IP-based device location lookup.
#[derive(Debug, Clone)]
pub struct DeviceLocator {
    client: Client,
    url: String,
    timeout: Duration,
    enabled: bool,
}

impl DeviceLocator {
    pub fn new(client: Client) -> Self {
        Self::with_url(client, GEOIP_URL)
    }

    pub fn with_url(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            timeout: GEOIP_TIMEOUT,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Coordinates of the device, never cached.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> Result<(f64, f64), GeolocationError> {
        if !self.enabled {
            return Err(GeolocationError::PermissionDenied);
        }

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        ) {
            warn!(%status, "device location refused");
            return Err(GeolocationError::PermissionDenied);
        }
        if !status.is_success() {
            warn!(%status, "device location unavailable");
            return Err(GeolocationError::PositionUnavailable);
        }

        let payload: IpApiResponse = response.json().await.map_err(classify_transport)?;
        let coords = payload.coordinates().ok_or(GeolocationError::PositionUnavailable)?;
        debug!(lat = coords.0, lon = coords.1, "device located");
        Ok(coords)
    }
}

fn classify_transport(err: reqwest::Error) -> GeolocationError {
    if err.is_timeout() {
        GeolocationError::Timeout
    } else {
        GeolocationError::PositionUnavailable
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
}

impl IpApiResponse {
    fn coordinates(&self) -> Option<(f64, f64)> {
        if self.error {
            return None;
        }
        let (lat, lon) = (self.latitude?, self.longitude?);
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
    }
}
