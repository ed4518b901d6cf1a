use chrono::{NaiveDate, NaiveDateTime};

use super::{SpeedUnit, TemperatureUnit};

pub const MPH_PER_KMH: f32 = 0.621_371;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

#[must_use]
pub fn convert_temp(celsius: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn temp_to_celsius(value: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
    }
}

#[must_use]
pub fn convert_speed(kmh: f32, unit: SpeedUnit) -> f32 {
    match unit {
        SpeedUnit::KilometersPerHour => kmh,
        SpeedUnit::MilesPerHour => kmh * MPH_PER_KMH,
    }
}

#[must_use]
pub fn speed_to_kmh(value: f32, unit: SpeedUnit) -> f32 {
    match unit {
        SpeedUnit::KilometersPerHour => value,
        SpeedUnit::MilesPerHour => value / MPH_PER_KMH,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn format_temp(celsius: f32, unit: TemperatureUnit) -> String {
    format!("{}°", round_temp(convert_temp(celsius, unit)))
}

#[must_use]
pub fn format_speed(kmh: f32, unit: SpeedUnit) -> String {
    format!("{} {}", convert_speed(kmh, unit).round() as i32, unit.label())
}

/// 16-point compass label for a bearing in degrees.
#[must_use]
pub fn compass_direction(degrees: f32) -> &'static str {
    let index = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[index]
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
