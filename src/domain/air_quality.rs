//! Canonical air-quality record and AQI banding.
//!
//! Upstream providers report different subsets of these fields; their
//! adapters live in `data::air_quality` and every field here is optional.

/// Pollutant concentrations (µg/m³) and composite indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirQuality {
    pub pm2_5: Option<f32>,
    pub pm10: Option<f32>,
    pub ozone: Option<f32>,
    pub nitrogen_dioxide: Option<f32>,
    pub sulphur_dioxide: Option<f32>,
    pub carbon_monoxide: Option<f32>,
    pub us_aqi: Option<u16>,
    pub european_aqi: Option<u16>,
    /// US EPA category index, 1 (good) through 6 (hazardous).
    pub us_epa_index: Option<u8>,
}

impl AirQuality {
    /// True when no provider data is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Band from the numeric US AQI, falling back to the EPA category index.
    #[must_use]
    pub fn band(&self) -> Option<AqiBand> {
        self.us_aqi
            .map(AqiBand::from_us_aqi)
            .or_else(|| self.us_epa_index.and_then(AqiBand::from_epa_index))
    }

    pub fn pollutants(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        [
            ("PM2.5", self.pm2_5),
            ("PM10", self.pm10),
            ("O₃", self.ozone),
            ("NO₂", self.nitrogen_dioxide),
            ("SO₂", self.sulphur_dioxide),
            ("CO", self.carbon_monoxide),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    /// Boundary values resolve to the lower band.
    #[must_use]
    pub fn from_us_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthySensitive,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    #[must_use]
    pub fn from_epa_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Good),
            2 => Some(Self::Moderate),
            3 => Some(Self::UnhealthySensitive),
            4 => Some(Self::Unhealthy),
            5 => Some(Self::VeryUnhealthy),
            6 => Some(Self::Hazardous),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    #[must_use]
    pub fn implication(self) -> &'static str {
        match self {
            Self::Good => "Air pollution poses little or no risk.",
            Self::Moderate => "Some pollutants may affect very sensitive individuals.",
            Self::UnhealthySensitive => "Sensitive groups should limit prolonged outdoor exertion.",
            Self::Unhealthy => "Everyone may begin to experience health effects.",
            Self::VeryUnhealthy => "Health warnings of emergency conditions.",
            Self::Hazardous => "Everyone should avoid outdoor activity.",
        }
    }

    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Moderate => "yellow",
            Self::UnhealthySensitive => "orange",
            Self::Unhealthy => "red",
            Self::VeryUnhealthy => "purple",
            Self::Hazardous => "maroon",
        }
    }

    /// EPA reference color.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Good => (0x00, 0xe4, 0x00),
            Self::Moderate => (0xff, 0xff, 0x00),
            Self::UnhealthySensitive => (0xff, 0x7e, 0x00),
            Self::Unhealthy => (0xff, 0x00, 0x00),
            Self::VeryUnhealthy => (0x8f, 0x3f, 0x97),
            Self::Hazardous => (0x7e, 0x00, 0x23),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EuropeanAqiBand {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    ExtremelyPoor,
}

impl EuropeanAqiBand {
    #[must_use]
    pub fn from_index(aqi: u16) -> Self {
        match aqi {
            0..=20 => Self::Good,
            21..=40 => Self::Fair,
            41..=60 => Self::Moderate,
            61..=80 => Self::Poor,
            81..=100 => Self::VeryPoor,
            _ => Self::ExtremelyPoor,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::ExtremelyPoor => "Extremely Poor",
        }
    }
}
