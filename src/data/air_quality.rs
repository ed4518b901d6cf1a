//! Air-quality providers and their adapters onto [`AirQuality`].

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::{data::fetch_json, domain::air_quality::AirQuality, error::WeatherError};

const OPEN_METEO_AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const WEATHER_API_URL: &str = "https://api.weatherapi.com/v1/current.json";
const AIR_QUALITY_TIMEOUT: Duration = Duration::from_secs(10);
const OPEN_METEO_FIELDS: &str =
    "us_aqi,european_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone";

/// Upstream shape, chosen once when the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirQualityProvider {
    OpenMeteo,
    WeatherApi { api_key: String },
}

impl AirQualityProvider {
    #[must_use]
    pub fn default_url(&self) -> &'static str {
        match self {
            Self::OpenMeteo => OPEN_METEO_AIR_QUALITY_URL,
            Self::WeatherApi { .. } => WEATHER_API_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
    provider: AirQualityProvider,
}

impl AirQualityClient {
    pub fn new(client: Client, provider: AirQualityProvider) -> Self {
        let base_url = provider.default_url();
        Self::with_base_url(client, provider, base_url)
    }

    pub fn with_base_url(
        client: Client,
        provider: AirQualityProvider,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            provider,
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<AirQuality, WeatherError> {
        let request = self.client.get(&self.base_url).timeout(AIR_QUALITY_TIMEOUT);
        match &self.provider {
            AirQualityProvider::OpenMeteo => {
                let request = request.query(&[
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    ("current", OPEN_METEO_FIELDS.to_string()),
                ]);
                let payload: OpenMeteoResponse = fetch_json(request).await?;
                Ok(payload.into())
            }
            AirQualityProvider::WeatherApi { api_key } => {
                let request = request.query(&[
                    ("key", api_key.clone()),
                    ("q", format!("{latitude},{longitude}")),
                    ("aqi", "yes".to_string()),
                ]);
                let payload: WeatherApiResponse = fetch_json(request).await?;
                Ok(payload.into())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: Option<OpenMeteoCurrent>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    us_aqi: Option<f32>,
    european_aqi: Option<f32>,
    pm2_5: Option<f32>,
    pm10: Option<f32>,
    ozone: Option<f32>,
    nitrogen_dioxide: Option<f32>,
    sulphur_dioxide: Option<f32>,
    carbon_monoxide: Option<f32>,
}

impl From<OpenMeteoResponse> for AirQuality {
    fn from(response: OpenMeteoResponse) -> Self {
        let Some(current) = response.current else {
            return Self::default();
        };
        Self {
            pm2_5: current.pm2_5,
            pm10: current.pm10,
            ozone: current.ozone,
            nitrogen_dioxide: current.nitrogen_dioxide,
            sulphur_dioxide: current.sulphur_dioxide,
            carbon_monoxide: current.carbon_monoxide,
            us_aqi: current.us_aqi.and_then(index_value),
            european_aqi: current.european_aqi.and_then(index_value),
            us_epa_index: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: Option<WeatherApiCurrent>,
}

#[derive(Debug, Deserialize)]
struct WeatherApiCurrent {
    air_quality: Option<WeatherApiAirQuality>,
}

#[derive(Debug, Deserialize)]
struct WeatherApiAirQuality {
    co: Option<f32>,
    no2: Option<f32>,
    o3: Option<f32>,
    so2: Option<f32>,
    pm2_5: Option<f32>,
    pm10: Option<f32>,
    #[serde(rename = "us-epa-index")]
    us_epa_index: Option<u8>,
}

impl From<WeatherApiResponse> for AirQuality {
    fn from(response: WeatherApiResponse) -> Self {
        let Some(reading) = response.current.and_then(|c| c.air_quality) else {
            return Self::default();
        };
        Self {
            pm2_5: reading.pm2_5,
            pm10: reading.pm10,
            ozone: reading.o3,
            nitrogen_dioxide: reading.no2,
            sulphur_dioxide: reading.so2,
            carbon_monoxide: reading.co,
            us_aqi: None,
            european_aqi: None,
            us_epa_index: reading.us_epa_index,
        }
    }
}

fn index_value(raw: f32) -> Option<u16> {
    (raw.is_finite() && raw >= 0.0).then(|| raw.round().min(f32::from(u16::MAX)) as u16)
}
