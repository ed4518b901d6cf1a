use std::fmt::Write as _;

use crate::{
    app::settings::Preferences,
    cli::IconMode,
    domain::weather::{
        WeatherBundle, compass_direction, format_speed, format_temp, weather_icon, weather_label,
    },
};

const SUMMARY_HOURS: usize = 6;

/// Plain-text summary printed by `--one-shot`.
pub fn summary(bundle: &WeatherBundle, prefs: Preferences, icons: IconMode) -> String {
    let unit = prefs.temperature_unit;
    let speed = prefs.speed_unit;
    let now = &bundle.current;
    let mut out = String::new();

    let _ = writeln!(out, "{}", bundle.location.display_name());
    let _ = write!(
        out,
        "{} {}  {}{} (feels {}{})",
        weather_icon(now.weather_code, icons),
        weather_label(now.weather_code),
        bundle.current_temp(unit),
        unit.symbol(),
        bundle.feels_like(unit),
        unit.symbol(),
    );
    if let Some((high, low)) = bundle.high_low(unit) {
        let _ = write!(out, "  H {high}° L {low}°");
    }
    out.push('\n');

    let _ = write!(
        out,
        "Wind {} {}",
        format_speed(now.wind_speed_kmh, speed),
        compass_direction(now.wind_direction_deg)
    );
    if let Some(gusts) = now.wind_gusts_kmh {
        let _ = write!(out, ", gusts {}", format_speed(gusts, speed));
    }
    let _ = writeln!(out, "  Humidity {:.0}%", now.relative_humidity);

    match bundle.air_quality.band() {
        Some(band) => {
            let index = bundle
                .air_quality
                .us_aqi
                .map(|aqi| format!("AQI {aqi} "))
                .unwrap_or_default();
            let _ = writeln!(out, "Air quality: {index}{}", band.label());
        }
        None => out.push_str("Air quality: no data\n"),
    }

    let hours: Vec<String> = bundle
        .hourly
        .window(0, SUMMARY_HOURS)
        .iter()
        .map(|hour| {
            let temp = hour
                .temperature_c
                .map_or_else(|| "--".to_string(), |t| format_temp(t, unit));
            let rain = hour
                .precipitation_probability
                .map_or_else(String::new, |p| format!(" {p:.0}%"));
            format!("{} {temp}{rain}", hour.time.format("%H:%M"))
        })
        .collect();
    if !hours.is_empty() {
        let _ = writeln!(out, "Next hours: {}", hours.join(" | "));
    }
    out
}
