use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval, sleep},
};
use tracing::debug;

use crate::{
    app::animation::VisualKind,
    data::service::WeatherService,
    domain::weather::{Location, WeatherBundle},
    error::WeatherError,
};

/// Quiet period before a typed query is sent for suggestions.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MIN_SUGGESTION_CHARS: usize = 2;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    ClockTick,
    AnimationFrame {
        kind: VisualKind,
        generation: u64,
    },
    SuggestionsReady {
        query: String,
        locations: Vec<Location>,
    },
    FetchSucceeded {
        request: u64,
        bundle: Box<WeatherBundle>,
    },
    FetchFailed {
        request: u64,
        error: WeatherError,
    },
    Quit,
}

/// What a fetch should look up.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchTarget {
    Query(String),
    Place(Location),
    Device,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_clock_task(tx: mpsc::Sender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::ClockTick).await.is_err() {
                break;
            }
        }
    })
}

pub async fn fetch_target(
    service: &WeatherService,
    target: FetchTarget,
) -> Result<WeatherBundle, WeatherError> {
    match target {
        FetchTarget::Query(query) => service.weather_for_query(&query).await,
        FetchTarget::Place(location) => service.fetch_weather(location).await,
        FetchTarget::Device => service.weather_for_current_location().await,
    }
}

pub fn spawn_fetch(
    service: WeatherService,
    target: FetchTarget,
    request: u64,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = fetch_target(&service, target).await;
        let event = match result {
            Ok(bundle) => AppEvent::FetchSucceeded {
                request,
                bundle: Box::new(bundle),
            },
            Err(error) => AppEvent::FetchFailed { request, error },
        };
        let _ = tx.send(event).await;
    })
}

/// Wait out the debounce window, then look up candidates. Aborting the
/// handle before the window closes cancels the lookup.
pub fn spawn_suggestions(
    service: WeatherService,
    query: String,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(SUGGESTION_DEBOUNCE).await;
        let locations = match service.suggest(&query).await {
            Ok(locations) => locations,
            Err(err) => {
                debug!(error = %err, "suggestion lookup failed");
                Vec::new()
            }
        };
        let _ = tx.send(AppEvent::SuggestionsReady { query, locations }).await;
    })
}

#[must_use]
pub fn wants_suggestions(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SUGGESTION_CHARS
}
