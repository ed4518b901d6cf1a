use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::{Cli, SpeedUnitsArg, ThemeArg, UnitsArg},
    domain::weather::{SpeedUnit, TemperatureUnit},
};

/// The only state persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Preferences {
    pub temperature_unit: TemperatureUnit,
    pub speed_unit: SpeedUnit,
    pub theme: ThemeArg,
}

impl Preferences {
    /// Command-line flags win over whatever was saved.
    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(units) = cli.units {
            self.temperature_unit = match units {
                UnitsArg::Celsius => TemperatureUnit::Celsius,
                UnitsArg::Fahrenheit => TemperatureUnit::Fahrenheit,
            };
        }
        if let Some(speed) = cli.speed_units {
            self.speed_unit = match speed {
                SpeedUnitsArg::Kmh => SpeedUnit::KilometersPerHour,
                SpeedUnitsArg::Mph => SpeedUnit::MilesPerHour,
            };
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        self
    }
}

/// Saved preferences, or defaults when the file is missing or unreadable.
pub fn load_preferences(path: &Path) -> Preferences {
    let Ok(content) = fs::read_to_string(path) else {
        return Preferences::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "ignoring malformed preferences");
        Preferences::default()
    })
}

pub fn save_preferences(path: &Path, preferences: Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating preferences directory failed")?;
    }
    let payload = serde_json::to_string_pretty(&preferences)
        .context("serializing preferences payload failed")?;
    fs::write(path, payload).context("writing preferences file failed")
}

pub fn preferences_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SKYCAST_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("preferences.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("skycast")
            .join("preferences.json"),
    )
}
