#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    #[value(alias = "c")]
    Celsius,
    #[value(alias = "f")]
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SpeedUnitsArg {
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeArg {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum AirQualityProviderArg {
    #[default]
    OpenMeteo,
    WeatherApi,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Animated terminal weather dashboard"
)]
pub struct Cli {
    /// City to show on startup (default: device location)
    pub city: Option<String>,

    /// Temperature units (overrides saved preference)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Wind speed units (overrides saved preference)
    #[arg(long, value_enum)]
    pub speed_units: Option<SpeedUnitsArg>,

    /// Theme (overrides saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable rain and wind animation
    #[arg(long)]
    pub no_animation: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Never look up the device location
    #[arg(long)]
    pub no_geolocation: bool,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Air-quality data source
    #[arg(long, value_enum, default_value_t = AirQualityProviderArg::OpenMeteo)]
    pub air_quality_provider: AirQualityProviderArg,

    /// API key for the weather-api air-quality provider
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Air-quality endpoint override
    #[arg(long)]
    pub air_quality_url: Option<String>,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Reverse-geocoding endpoint override
    #[arg(long)]
    pub reverse_geocode_url: Option<String>,

    /// Device-location endpoint override
    #[arg(long)]
    pub geoip_url: Option<String>,

    /// Write logs to this file (filter with SKYCAST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print a weather summary to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if self.air_quality_provider == AirQualityProviderArg::WeatherApi
            && self.weather_api_key.is_none()
        {
            anyhow::bail!("--air-quality-provider weather-api requires --weather-api-key");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{AirQualityProviderArg, Cli, IconMode, ThemeArg, UnitsArg};

    #[test]
    fn defaults_leave_preferences_unset() {
        let cli = Cli::parse_from(["skycast"]);
        assert!(cli.units.is_none());
        assert!(cli.speed_units.is_none());
        assert!(cli.theme.is_none());
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.air_quality_provider, AirQualityProviderArg::OpenMeteo);
    }

    #[test]
    fn parses_unit_aliases_and_theme() {
        let cli = Cli::parse_from(["skycast", "--units", "f", "--theme", "light"]);
        assert_eq!(cli.units, Some(UnitsArg::Fahrenheit));
        assert_eq!(cli.theme, Some(ThemeArg::Light));
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::parse_from(["skycast", "--lat", "-33.86", "--lon", "151.2"]);
        assert_eq!(cli.lat, Some(-33.86));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn lat_without_lon_is_rejected() {
        let cli = Cli::parse_from(["skycast", "--lat", "10"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn weather_api_provider_requires_key() {
        let cli = Cli::parse_from(["skycast", "--air-quality-provider", "weather-api"]);
        if cli.weather_api_key.is_none() {
            assert!(cli.validate().is_err());
        }
    }

    #[test]
    fn rejects_conflicting_icon_flags() {
        let err = Cli::try_parse_from(["skycast", "--ascii-icons", "--emoji-icons"])
            .expect_err("expected conflict");
        assert!(err.to_string().contains("--ascii-icons"));
    }

    #[test]
    fn icon_mode_defaults_to_unicode() {
        assert_eq!(Cli::parse_from(["skycast"]).icon_mode(), IconMode::Unicode);
        assert_eq!(
            Cli::parse_from(["skycast", "--ascii-icons"]).icon_mode(),
            IconMode::Ascii
        );
    }

    #[test]
    fn rejects_out_of_range_fps() {
        assert!(Cli::try_parse_from(["skycast", "--fps", "5"]).is_err());
    }
}
