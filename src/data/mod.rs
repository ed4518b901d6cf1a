pub mod air_quality;
pub mod forecast;
pub mod geocode;
pub mod geoip;
pub mod service;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::WeatherError;

/// Sends a request and decodes a JSON body, mapping each failure stage onto
/// the error taxonomy.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, WeatherError> {
    let response = request.send().await.map_err(WeatherError::Connectivity)?;
    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::DataUnavailable {
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(WeatherError::Connectivity)?;
    serde_json::from_slice(&body).map_err(|err| WeatherError::InvalidFormat(err.to_string()))
}
