mod conditions;
mod conversions;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use conditions::*;
pub use conversions::*;

use crate::domain::{air_quality::AirQuality, hour_cursor::WindowMode};

pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// Precipitation amount (mm/h) treated as full intensity by the rain canvas.
pub const PRECIPITATION_SATURATION_MM: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "km/h")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl SpeedUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::KilometersPerHour => Self::MilesPerHour,
            Self::MilesPerHour => Self::KilometersPerHour,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
}

impl Location {
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self::named(format!("{lat:.4}, {lon:.4}"), lat, lon)
    }

    /// Device position without a resolved place name.
    pub fn current(lat: f64, lon: f64) -> Self {
        Self::named(CURRENT_LOCATION_LABEL, lat, lon)
    }

    pub fn named(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            timezone: None,
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) if admin != &self.name => {
                format!("{}, {}, {}", self.name, admin, country)
            }
            (_, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Current conditions at fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f32,
    pub apparent_temperature_c: f32,
    pub precipitation_mm: f32,
    pub weather_code: u8,
    pub wind_speed_kmh: f32,
    pub wind_direction_deg: f32,
    pub wind_gusts_kmh: Option<f32>,
    pub relative_humidity: f32,
    pub uv_index: Option<f32>,
    pub visibility_m: Option<f32>,
    pub is_day: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature_c: Option<f32>,
    pub precipitation_mm: Option<f32>,
    pub precipitation_probability: Option<f32>,
    pub weather_code: Option<u8>,
    pub wind_speed_kmh: Option<f32>,
    pub wind_direction_deg: Option<f32>,
    pub wind_gusts_kmh: Option<f32>,
    pub uv_index: Option<f32>,
    pub visibility_m: Option<f32>,
}

/// Precipitation inputs for one hour or the max over a forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrecipitationSample {
    pub probability_pct: f32,
    pub amount_mm: f32,
}

impl PrecipitationSample {
    /// Normalized 0..=1 drive for the rain canvas.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        let by_probability = self.probability_pct / 100.0;
        let by_amount = self.amount_mm / PRECIPITATION_SATURATION_MM;
        by_probability.max(by_amount).clamp(0.0, 1.0)
    }
}

/// Hourly records indexed by the shared hour cursor.
///
/// Every field lives on the same per-hour record, so all series have the
/// same length by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    hours: Vec<HourlyForecast>,
}

impl HourlySeries {
    #[must_use]
    pub fn new(hours: Vec<HourlyForecast>) -> Self {
        Self { hours }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HourlyForecast> {
        self.hours.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourlyForecast> {
        self.hours.iter()
    }

    /// Up to `count` hours starting at `start`; empty when `start` is past the end.
    #[must_use]
    pub fn window(&self, start: usize, count: usize) -> &[HourlyForecast] {
        let start = start.min(self.hours.len());
        let end = start.saturating_add(count).min(self.hours.len());
        &self.hours[start..end]
    }

    #[must_use]
    pub fn precipitation_sample(&self, cursor: usize, mode: WindowMode) -> Option<PrecipitationSample> {
        let slice = self.window(cursor, mode.span());
        if slice.is_empty() {
            return None;
        }
        Some(slice.iter().fold(PrecipitationSample::default(), |acc, hour| {
            PrecipitationSample {
                probability_pct: acc
                    .probability_pct
                    .max(hour.precipitation_probability.unwrap_or_default()),
                amount_mm: acc.amount_mm.max(hour.precipitation_mm.unwrap_or_default()),
            }
        }))
    }

    /// Wind speed in km/h at the cursor, or the max across the window.
    #[must_use]
    pub fn wind_speed(&self, cursor: usize, mode: WindowMode) -> Option<f32> {
        self.window(cursor, mode.span())
            .iter()
            .filter_map(|hour| hour.wind_speed_kmh)
            .reduce(f32::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<u8>,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    days: Vec<DailyForecast>,
}

impl DailySeries {
    #[must_use]
    pub fn new(days: Vec<DailyForecast>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.days.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyForecast> {
        self.days.iter()
    }
}

/// Everything produced by one successful fetch. Replaced as a unit.
#[derive(Debug, Clone)]
pub struct WeatherBundle {
    pub location: Location,
    pub current: WeatherSnapshot,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub air_quality: AirQuality,
    pub timezone: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherBundle {
    #[must_use]
    pub fn current_temp(&self, unit: TemperatureUnit) -> i32 {
        round_temp(convert_temp(self.current.temperature_c, unit))
    }

    #[must_use]
    pub fn feels_like(&self, unit: TemperatureUnit) -> i32 {
        round_temp(convert_temp(self.current.apparent_temperature_c, unit))
    }

    #[must_use]
    pub fn high_low(&self, unit: TemperatureUnit) -> Option<(i32, i32)> {
        let today = self.daily.today()?;
        Some((
            round_temp(convert_temp(today.temperature_max_c?, unit)),
            round_temp(convert_temp(today.temperature_min_c?, unit)),
        ))
    }
}
