use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Icon tokens; glyphs depend on the terminal's icon mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    PartlyCloudy,
    Cloud,
    Fog,
    Rain,
    Snow,
    Thunder,
}

#[must_use]
pub fn weather_code_to_category(code: u8) -> WeatherCategory {
    match code {
        0 | 1 => WeatherCategory::Clear,
        2 | 3 => WeatherCategory::Cloudy,
        45 | 48 => WeatherCategory::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85..=86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunder,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn weather_label(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm + light hail",
        99 => "Thunderstorm + heavy hail",
        _ => "Unknown",
    }
}

#[must_use]
pub fn weather_icon_for_code(code: u8) -> WeatherIcon {
    match code {
        0 | 1 => WeatherIcon::Sun,
        2 => WeatherIcon::PartlyCloudy,
        45 | 48 => WeatherIcon::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherIcon::Rain,
        71..=77 | 85..=86 => WeatherIcon::Snow,
        95 | 96 | 99 => WeatherIcon::Thunder,
        _ => WeatherIcon::Cloud,
    }
}

#[must_use]
pub fn weather_icon(code: u8, mode: IconMode) -> &'static str {
    weather_icon_for_code(code).glyph(mode)
}

impl WeatherIcon {
    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        match mode {
            IconMode::Ascii => match self {
                Self::Sun => "SUN",
                Self::PartlyCloudy => "PCL",
                Self::Cloud => "CLD",
                Self::Fog => "FOG",
                Self::Rain => "RAN",
                Self::Snow => "SNW",
                Self::Thunder => "THN",
            },
            IconMode::Emoji => match self {
                Self::Sun => "☀️",
                Self::PartlyCloudy => "⛅",
                Self::Cloud => "☁️",
                Self::Fog => "🌫️",
                Self::Rain => "🌧️",
                Self::Snow => "🌨️",
                Self::Thunder => "⛈️",
            },
            IconMode::Unicode => match self {
                Self::Sun => "☀",
                Self::PartlyCloudy => "⛅",
                Self::Cloud => "☁",
                Self::Fog => "░",
                Self::Rain => "☂",
                Self::Snow => "❄",
                Self::Thunder => "⚡",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    #[must_use]
    pub fn from_index(uv: f32) -> Self {
        if uv <= 2.0 {
            Self::Low
        } else if uv <= 5.0 {
            Self::Moderate
        } else if uv <= 7.0 {
            Self::High
        } else if uv <= 10.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Self::Low => "No protection needed",
            Self::Moderate => "Wear sunscreen",
            Self::High => "Protection required",
            Self::VeryHigh => "Extra precautions needed",
            Self::Extreme => "Avoid sun exposure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityBand {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl VisibilityBand {
    #[must_use]
    pub fn from_km(km: f32) -> Self {
        if km >= 10.0 {
            Self::Excellent
        } else if km >= 5.0 {
            Self::Good
        } else if km >= 2.0 {
            Self::Moderate
        } else if km >= 1.0 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    #[must_use]
    pub fn from_meters(meters: f32) -> Self {
        Self::from_km(meters / 1000.0)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Clear visibility",
            Self::Good => "Good visibility",
            Self::Moderate => "Reduced visibility",
            Self::Poor => "Poor visibility",
            Self::VeryPoor => "Dangerous conditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationIntensity {
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
}

impl PrecipitationIntensity {
    /// Bands for an hourly amount in mm.
    #[must_use]
    pub fn from_mm(amount: f32) -> Self {
        if amount < 0.5 {
            Self::Light
        } else if amount < 2.0 {
            Self::Moderate
        } else if amount < 10.0 {
            Self::Heavy
        } else {
            Self::VeryHeavy
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
            Self::VeryHeavy => "Very Heavy",
        }
    }
}
