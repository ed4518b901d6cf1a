use thiserror::Error;

/// Failures surfaced by the weather data client.
///
/// Required-endpoint failures abort an update; optional endpoints (air
/// quality, reverse geocoding) never produce these and degrade instead.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure or timeout before any response arrived
    #[error("Unable to reach the weather service. Please check your internet connection.")]
    Connectivity(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Weather data is unavailable right now (HTTP {status})")]
    DataUnavailable { status: u16 },

    /// The payload was malformed or lacked required blocks
    #[error("Invalid weather data received: {0}")]
    InvalidFormat(String),

    /// Geocoding returned no candidates
    #[error("No location found for \"{0}\"")]
    LocationNotFound(String),

    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location access was denied. Use / to search for a city instead.")]
    PermissionDenied,

    #[error("Your location could not be determined. Use / to search for a city instead.")]
    PositionUnavailable,

    #[error("Timed out while detecting your location. Press l to retry or / to search.")]
    Timeout,
}

impl WeatherError {
    #[must_use]
    pub fn is_location_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_variants_have_distinct_messages() {
        let messages = [
            GeolocationError::PermissionDenied.to_string(),
            GeolocationError::PositionUnavailable.to_string(),
            GeolocationError::Timeout.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn data_unavailable_mentions_status() {
        let err = WeatherError::DataUnavailable { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn geolocation_error_converts_transparently() {
        let err: WeatherError = GeolocationError::Timeout.into();
        assert_eq!(err.to_string(), GeolocationError::Timeout.to_string());
    }
}
