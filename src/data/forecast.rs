use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    data::fetch_json,
    domain::weather::{
        DailyForecast, DailySeries, HourlyForecast, HourlySeries, Location, WeatherSnapshot,
        parse_date, parse_datetime,
    },
    error::WeatherError,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const FORECAST_TIMEOUT: Duration = Duration::from_secs(10);

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,wind_direction_10m,wind_gusts_10m,uv_index,visibility,is_day";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation,precipitation_probability,weather_code,wind_speed_10m,wind_direction_10m,wind_gusts_10m,uv_index,visibility";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,precipitation_sum";

/// Normalized forecast response; the air-quality half is merged by the service.
#[derive(Debug, Clone)]
pub struct ForecastPayload {
    pub current: WeatherSnapshot,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ForecastClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, FORECAST_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout: FORECAST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self, location), fields(lat = location.latitude, lon = location.longitude))]
    pub async fn fetch(&self, location: &Location) -> Result<ForecastPayload, WeatherError> {
        let request = self
            .client
            .get(&self.base_url)
            .timeout(self.timeout)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ]);

        let payload: ForecastResponse = fetch_json(request).await?;
        let payload = normalize(payload)?;
        debug!(
            hours = payload.hourly.len(),
            days = payload.daily.len(),
            "forecast normalized"
        );
        Ok(payload)
    }
}

fn normalize(payload: ForecastResponse) -> Result<ForecastPayload, WeatherError> {
    let current = payload
        .current
        .ok_or_else(|| WeatherError::InvalidFormat("response has no current block".to_string()))?;
    let hourly = payload
        .hourly
        .ok_or_else(|| WeatherError::InvalidFormat("response has no hourly block".to_string()))?;

    Ok(ForecastPayload {
        current: WeatherSnapshot {
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            precipitation_mm: current.precipitation.unwrap_or_default(),
            weather_code: current.weather_code,
            wind_speed_kmh: current.wind_speed_10m,
            wind_direction_deg: current.wind_direction_10m,
            wind_gusts_kmh: current.wind_gusts_10m,
            relative_humidity: current.relative_humidity_2m,
            uv_index: current.uv_index,
            visibility_m: current.visibility,
            is_day: current.is_day.is_none_or(|flag| flag == 1),
        },
        hourly: parse_hourly(&hourly),
        daily: payload
            .daily
            .as_ref()
            .map(parse_daily)
            .unwrap_or_default(),
        timezone: payload.timezone.filter(|tz| !tz.is_empty()),
    })
}

/// One record per parseable timestamp; short value arrays pad with `None`.
fn parse_hourly(hourly: &HourlyBlock) -> HourlySeries {
    let mut out = Vec::with_capacity(hourly.time.len());
    for (idx, raw_time) in hourly.time.iter().enumerate() {
        let Some(time) = parse_datetime(raw_time) else {
            continue;
        };

        out.push(HourlyForecast {
            time,
            temperature_c: value_at(&hourly.temperature_2m, idx),
            precipitation_mm: value_at(&hourly.precipitation, idx),
            precipitation_probability: value_at(&hourly.precipitation_probability, idx),
            weather_code: value_at(&hourly.weather_code, idx),
            wind_speed_kmh: value_at(&hourly.wind_speed_10m, idx),
            wind_direction_deg: value_at(&hourly.wind_direction_10m, idx),
            wind_gusts_kmh: value_at(&hourly.wind_gusts_10m, idx),
            uv_index: value_at(&hourly.uv_index, idx),
            visibility_m: value_at(&hourly.visibility, idx),
        });
    }
    HourlySeries::new(out)
}

fn parse_daily(daily: &DailyBlock) -> DailySeries {
    let mut out = Vec::with_capacity(daily.time.len());
    for (idx, raw_date) in daily.time.iter().enumerate() {
        let Some(date) = parse_date(raw_date) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: value_at(&daily.weather_code, idx),
            temperature_max_c: value_at(&daily.temperature_2m_max, idx),
            temperature_min_c: value_at(&daily.temperature_2m_min, idx),
            precipitation_probability_max: value_at(&daily.precipitation_probability_max, idx),
            precipitation_sum_mm: value_at(&daily.precipitation_sum, idx),
        });
    }
    DailySeries::new(out)
}

fn value_at<T: Copy>(values: &[Option<T>], idx: usize) -> Option<T> {
    values.get(idx).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
    hourly: Option<HourlyBlock>,
    daily: Option<DailyBlock>,
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f32,
    relative_humidity_2m: f32,
    apparent_temperature: f32,
    precipitation: Option<f32>,
    weather_code: u8,
    wind_speed_10m: f32,
    wind_direction_10m: f32,
    wind_gusts_10m: Option<f32>,
    uv_index: Option<f32>,
    visibility: Option<f32>,
    is_day: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f32>>,
    #[serde(default)]
    precipitation: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f32>>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f32>>,
    #[serde(default)]
    wind_direction_10m: Vec<Option<f32>>,
    #[serde(default)]
    wind_gusts_10m: Vec<Option<f32>>,
    #[serde(default)]
    uv_index: Vec<Option<f32>>,
    #[serde(default)]
    visibility: Vec<Option<f32>>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f32>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f32>>,
}
