use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use clap::Parser;

use crate::{
    app::state::AppState,
    app::settings::Preferences,
    cli::Cli,
    domain::{
        air_quality::AirQuality,
        weather::{
            DailyForecast, DailySeries, HourlyForecast, HourlySeries, Location, WeatherBundle,
            WeatherSnapshot,
        },
    },
};

const UNREACHABLE: &str = "http://127.0.0.1:9/unreachable";

/// CLI that never reaches a real service and never animates.
pub(crate) fn state_test_cli() -> Cli {
    Cli::parse_from([
        "skycast",
        "--no-geolocation",
        "--no-animation",
        "--forecast-url",
        UNREACHABLE,
        "--air-quality-url",
        UNREACHABLE,
        "--geocode-url",
        UNREACHABLE,
        "--reverse-geocode-url",
        UNREACHABLE,
        "--geoip-url",
        UNREACHABLE,
    ])
}

pub(crate) fn animated_test_cli() -> Cli {
    let mut cli = state_test_cli();
    cli.no_animation = false;
    cli
}

pub(crate) fn test_state(cli: &Cli) -> AppState {
    AppState::with_preferences(cli, Preferences::default(), None)
}

pub(crate) fn stockholm_location() -> Location {
    Location {
        name: "Stockholm".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
        country: Some("Sweden".to_string()),
        admin1: Some("Stockholm".to_string()),
        timezone: Some("Europe/Stockholm".to_string()),
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-02-12T10:00", "%Y-%m-%dT%H:%M")
        .expect("valid time fixture")
}

pub(crate) fn sample_hours(count: usize) -> HourlySeries {
    HourlySeries::new(
        (0..count)
            .map(|idx| {
                let i = idx as f32;
                HourlyForecast {
                    time: base_time() + Duration::hours(idx as i64),
                    temperature_c: Some(2.0 + i * 0.5),
                    precipitation_mm: Some(if idx % 6 == 3 { 1.2 } else { 0.0 }),
                    precipitation_probability: Some((i * 7.0) % 100.0),
                    weather_code: Some(if idx % 6 == 3 { 61 } else { 2 }),
                    wind_speed_kmh: Some(8.0 + i),
                    wind_direction_deg: Some(200.0),
                    wind_gusts_kmh: Some(14.0 + i),
                    uv_index: Some(1.0),
                    visibility_m: Some(12_000.0),
                }
            })
            .collect(),
    )
}

pub(crate) fn sample_bundle() -> WeatherBundle {
    bundle_with_hours(24)
}

pub(crate) fn bundle_with_hours(count: usize) -> WeatherBundle {
    let first_day = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture");
    WeatherBundle {
        location: stockholm_location(),
        current: WeatherSnapshot {
            temperature_c: 3.4,
            apparent_temperature_c: 0.9,
            precipitation_mm: 0.0,
            weather_code: 2,
            wind_speed_kmh: 11.0,
            wind_direction_deg: 200.0,
            wind_gusts_kmh: Some(18.0),
            relative_humidity: 81.0,
            uv_index: Some(1.0),
            visibility_m: Some(12_000.0),
            is_day: true,
        },
        hourly: sample_hours(count),
        daily: DailySeries::new(
            (0..7)
                .map(|idx| DailyForecast {
                    date: first_day + Duration::days(idx),
                    weather_code: Some(if idx % 2 == 0 { 3 } else { 61 }),
                    temperature_max_c: Some(5.0 + idx as f32),
                    temperature_min_c: Some(-1.0 + idx as f32),
                    precipitation_probability_max: Some(40.0),
                    precipitation_sum_mm: Some(1.5),
                })
                .collect(),
        ),
        air_quality: AirQuality {
            pm2_5: Some(8.2),
            pm10: Some(14.0),
            ozone: Some(52.0),
            us_aqi: Some(34),
            european_aqi: Some(21),
            ..AirQuality::default()
        },
        timezone: Some("Europe/Stockholm".to_string()),
        fetched_at: Utc::now(),
    }
}
