#![allow(dead_code)]

use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};
use skycast::{
    app::{events::AppEvent, settings::Preferences, state::AppState},
    cli::Cli,
};
use tokio::sync::mpsc;
use wiremock::MockServer;

pub const FORECAST_PATH: &str = "/v1/forecast";
pub const AIR_QUALITY_PATH: &str = "/v1/air-quality";
pub const SEARCH_PATH: &str = "/v1/search";
pub const REVERSE_PATH: &str = "/data/reverse-geocode-client";
pub const GEOIP_PATH: &str = "/json/";

/// Arguments pointing every endpoint at `server`; extra flags are appended.
pub fn mock_cli(server: &MockServer, extra: &[&str]) -> Cli {
    let uri = server.uri();
    let forecast = format!("{uri}{FORECAST_PATH}");
    let air = format!("{uri}{AIR_QUALITY_PATH}");
    let search = format!("{uri}{SEARCH_PATH}");
    let reverse = format!("{uri}{REVERSE_PATH}");
    let geoip = format!("{uri}{GEOIP_PATH}");
    let mut args: Vec<&str> = vec![
        "skycast",
        "--forecast-url",
        forecast.as_str(),
        "--air-quality-url",
        air.as_str(),
        "--geocode-url",
        search.as_str(),
        "--reverse-geocode-url",
        reverse.as_str(),
        "--geoip-url",
        geoip.as_str(),
    ];
    args.extend_from_slice(extra);
    Cli::parse_from(args)
}

/// State that never reads or writes the user's preference file.
pub fn detached_state(cli: &Cli) -> AppState {
    AppState::with_preferences(cli, Preferences::default(), None)
}

pub fn forecast_body(hours: usize) -> Value {
    let time: Vec<String> = (0..hours)
        .map(|h| format!("2026-02-{:02}T{:02}:00", 12 + h / 24, h % 24))
        .collect();
    let series = |f: fn(usize) -> f64| (0..hours).map(f).collect::<Vec<_>>();
    json!({
        "timezone": "Europe/Stockholm",
        "current": {
            "temperature_2m": 3.4,
            "relative_humidity_2m": 81.0,
            "apparent_temperature": 0.9,
            "precipitation": 0.6,
            "weather_code": 61,
            "wind_speed_10m": 14.0,
            "wind_direction_10m": 200.0,
            "wind_gusts_10m": 25.0,
            "uv_index": 1.0,
            "visibility": 9000.0,
            "is_day": 1
        },
        "hourly": {
            "time": time,
            "temperature_2m": series(|h| 2.0 + h as f64 * 0.5),
            "precipitation": series(|h| if h % 4 == 0 { 1.5 } else { 0.2 }),
            "precipitation_probability": series(|h| (h * 9 % 100) as f64),
            "weather_code": (0..hours).map(|_| 61).collect::<Vec<_>>(),
            "wind_speed_10m": series(|h| 10.0 + h as f64),
            "wind_direction_10m": series(|_| 200.0),
            "wind_gusts_10m": series(|h| 18.0 + h as f64),
            "uv_index": series(|_| 1.0),
            "visibility": series(|_| 9000.0)
        },
        "daily": {
            "time": ["2026-02-12", "2026-02-13", "2026-02-14", "2026-02-15",
                     "2026-02-16", "2026-02-17", "2026-02-18"],
            "weather_code": [61, 3, 2, 61, 71, 0, 1],
            "temperature_2m_max": [5.0, 6.0, 4.5, 3.0, 1.0, 2.0, 4.0],
            "temperature_2m_min": [-1.0, 0.5, -2.0, -3.0, -6.0, -4.0, -1.5],
            "precipitation_probability_max": [80, 20, 10, 60, 90, 0, 5],
            "precipitation_sum": [4.2, 0.1, 0.0, 2.0, 6.5, 0.0, 0.0]
        }
    })
}

pub fn air_quality_body() -> Value {
    json!({
        "current": {
            "us_aqi": 42.0,
            "european_aqi": 18.0,
            "pm2_5": 6.1,
            "pm10": 11.4,
            "ozone": 58.0,
            "nitrogen_dioxide": 9.3,
            "sulphur_dioxide": 1.2,
            "carbon_monoxide": 180.0
        }
    })
}

pub fn geocode_body(names: &[(&str, f64, f64)]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|(name, lat, lon)| {
            json!({
                "name": name,
                "latitude": lat,
                "longitude": lon,
                "country": "Sweden",
                "admin1": "Stockholm",
                "timezone": "Europe/Stockholm"
            })
        })
        .collect();
    json!({ "results": results })
}

pub fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Feed queued events into `state` until `done` holds.
pub async fn pump_until<F>(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
    mut done: F,
) where
    F: FnMut(&AppState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        while !done(state) {
            let event = rx.recv().await.expect("event channel open");
            state.handle_event(event, tx).await.expect("event handled");
        }
    })
    .await
    .expect("condition reached before timeout");
}
