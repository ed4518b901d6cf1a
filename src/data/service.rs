use chrono::Utc;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::{
    cli::{AirQualityProviderArg, Cli},
    data::{
        air_quality::{AirQualityClient, AirQualityProvider},
        forecast::ForecastClient,
        geocode::{GEOCODE_URL, GeocodeClient, REVERSE_GEOCODE_URL},
        geoip::DeviceLocator,
    },
    domain::weather::{CURRENT_LOCATION_LABEL, Location, WeatherBundle},
    error::WeatherError,
};

/// Base URLs for every upstream; `None` keeps the public default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub forecast: Option<String>,
    pub air_quality: Option<String>,
    pub geocode: Option<String>,
    pub reverse_geocode: Option<String>,
    pub geoip: Option<String>,
}

impl Endpoints {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            forecast: cli.forecast_url.clone(),
            air_quality: cli.air_quality_url.clone(),
            geocode: cli.geocode_url.clone(),
            reverse_geocode: cli.reverse_geocode_url.clone(),
            geoip: cli.geoip_url.clone(),
        }
    }
}

/// Every network operation the dashboard performs, behind one cloneable
/// handle that background tasks can own.
#[derive(Debug, Clone)]
pub struct WeatherService {
    forecast: ForecastClient,
    air_quality: AirQualityClient,
    geocode: GeocodeClient,
    locator: DeviceLocator,
}

impl WeatherService {
    pub fn new(endpoints: &Endpoints, provider: AirQualityProvider, geolocation: bool) -> Self {
        let client = Client::new();

        let forecast = match &endpoints.forecast {
            Some(url) => ForecastClient::with_base_url(client.clone(), url.clone()),
            None => ForecastClient::new(client.clone()),
        };
        let air_quality = match &endpoints.air_quality {
            Some(url) => AirQualityClient::with_base_url(client.clone(), provider, url.clone()),
            None => AirQualityClient::new(client.clone(), provider),
        };
        let geocode = GeocodeClient::with_base_urls(
            client.clone(),
            endpoints.geocode.as_deref().unwrap_or(GEOCODE_URL),
            endpoints
                .reverse_geocode
                .as_deref()
                .unwrap_or(REVERSE_GEOCODE_URL),
        );
        let locator = match &endpoints.geoip {
            Some(url) => DeviceLocator::with_url(client, url.clone()),
            None => DeviceLocator::new(client),
        };
        let locator = if geolocation { locator } else { locator.disabled() };

        Self {
            forecast,
            air_quality,
            geocode,
            locator,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let provider = match (cli.air_quality_provider, &cli.weather_api_key) {
            (AirQualityProviderArg::WeatherApi, Some(key)) => AirQualityProvider::WeatherApi {
                api_key: key.clone(),
            },
            _ => AirQualityProvider::OpenMeteo,
        };
        Self::new(&Endpoints::from_cli(cli), provider, !cli.no_geolocation)
    }

    /// Forecast and air quality for one place, fetched concurrently.
    ///
    /// Air-quality failures degrade to an empty record; forecast failures
    /// fail the whole call.
    #[instrument(skip(self, location), fields(name = %location.name))]
    pub async fn fetch_weather(&self, location: Location) -> Result<WeatherBundle, WeatherError> {
        if !location.has_valid_coordinates() {
            return Err(WeatherError::InvalidCoordinates);
        }
        let mut location = location;
        if location.name.trim().is_empty() {
            location.name = CURRENT_LOCATION_LABEL.to_string();
        }

        let (forecast, air_quality) = tokio::join!(
            self.forecast.fetch(&location),
            self.air_quality.fetch(location.latitude, location.longitude),
        );
        let forecast = forecast?;
        let air_quality = air_quality.unwrap_or_else(|err| {
            warn!(error = %err, "air quality unavailable");
            Default::default()
        });

        if location.timezone.is_none() {
            location.timezone.clone_from(&forecast.timezone);
        }
        info!(hours = forecast.hourly.len(), "weather updated");

        Ok(WeatherBundle {
            location,
            current: forecast.current,
            hourly: forecast.hourly,
            daily: forecast.daily,
            air_quality,
            timezone: forecast.timezone,
            fetched_at: Utc::now(),
        })
    }

    /// Resolve a place name, then fetch its weather. Nothing is fetched when
    /// the name does not resolve.
    pub async fn weather_for_query(&self, query: &str) -> Result<WeatherBundle, WeatherError> {
        let location = self.geocode.resolve(query).await?;
        self.fetch_weather(location).await
    }

    pub async fn suggest(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        self.geocode.suggest(query).await
    }

    /// Device position with the best available place name.
    #[instrument(skip(self))]
    pub async fn current_location(&self) -> Result<Location, WeatherError> {
        let (lat, lon) = self.locator.locate().await?;
        let name = match self.geocode.reverse(lat, lon).await {
            Ok(name) => name,
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed");
                None
            }
        };
        Ok(match name {
            Some(name) => Location::named(name, lat, lon),
            None => Location::current(lat, lon),
        })
    }

    pub async fn weather_for_current_location(&self) -> Result<WeatherBundle, WeatherError> {
        let location = self.current_location().await?;
        self.fetch_weather(location).await
    }
}
