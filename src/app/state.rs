use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::Event;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{
    app::{
        animation::{LiveLoops, VisualKind, Visualization},
        events::{AppEvent, FetchTarget, start_clock_task},
        settings::{Preferences, load_preferences, preferences_path},
    },
    cli::{Cli, IconMode},
    data::service::WeatherService,
    domain::{
        hour_cursor::HourCursor,
        weather::{Location, WeatherBundle},
    },
    ui::particles::{RainField, WindField},
};

mod input;
mod methods_animation;
mod methods_fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Loading,
    Error,
}

/// One-line message under the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Loading,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

/// City search overlay.
#[derive(Debug, Default)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
    pub suggestions: Vec<Location>,
    pub selected: Option<usize>,
    pending: Option<JoinHandle<()>>,
}

impl SearchState {
    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    fn close(&mut self) {
        self.cancel_pending();
        self.active = false;
        self.query.clear();
        self.suggestions.clear();
        self.selected = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

/// The single owner of everything the dashboard shows.
#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub preferences: Preferences,
    preferences_path: Option<PathBuf>,
    pub icon_mode: IconMode,
    pub bundle: Option<WeatherBundle>,
    pub cursor: HourCursor,
    pub precipitation: Visualization<RainField>,
    pub wind: Visualization<WindField>,
    pub search: SearchState,
    pub status: Status,
    pub loading: bool,
    pub viewport: (u16, u16),
    pub now: DateTime<Local>,
    service: WeatherService,
    live_loops: LiveLoops,
    initial_target: Option<FetchTarget>,
    last_target: Option<FetchTarget>,
    request_seq: u64,
    clock_task: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let path = preferences_path();
        let saved = path.as_deref().map(load_preferences).unwrap_or_default();
        Self::with_preferences(cli, saved, path)
    }

    /// Build from already-loaded preferences; a `None` path never touches disk.
    pub fn with_preferences(
        cli: &Cli,
        saved: Preferences,
        preferences_path: Option<PathBuf>,
    ) -> Self {
        let live_loops = LiveLoops::default();
        let animate = !cli.no_animation;
        Self {
            running: true,
            preferences: saved.with_cli_overrides(cli),
            preferences_path,
            icon_mode: cli.icon_mode(),
            bundle: None,
            cursor: HourCursor::default(),
            precipitation: Visualization::new(
                VisualKind::Precipitation,
                cli.fps,
                animate,
                live_loops.clone(),
            ),
            wind: Visualization::new(VisualKind::Wind, cli.fps, animate, live_loops.clone()),
            search: SearchState::default(),
            status: Status::loading("Starting..."),
            loading: false,
            viewport: (0, 0),
            now: Local::now(),
            service: WeatherService::from_cli(cli),
            live_loops,
            initial_target: initial_target(cli),
            last_target: None,
            request_seq: 0,
            clock_task: None,
        }
    }

    /// Number of frame loops currently alive across both canvases.
    #[must_use]
    pub fn live_frame_loops(&self) -> usize {
        self.live_loops.count()
    }

    #[must_use]
    pub fn last_target(&self) -> Option<&FetchTarget> {
        self.last_target.as_ref()
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                if self.clock_task.is_none() {
                    self.clock_task = Some(start_clock_task(tx.clone()));
                }
                match self.initial_target.take() {
                    Some(target) => self.start_fetch(target, tx),
                    None => {
                        self.status = Status::info("Press / to search for a city");
                    }
                }
            }
            AppEvent::Input(Event::Resize(width, height)) => self.resize(width, height, tx),
            AppEvent::Input(event) => self.handle_input(event, tx)?,
            AppEvent::ClockTick => self.now = Local::now(),
            AppEvent::AnimationFrame { kind, generation } => {
                self.on_animation_frame(kind, generation);
            }
            AppEvent::SuggestionsReady { query, locations } => {
                if self.search.active && self.search.query.trim() == query {
                    debug!(count = locations.len(), "suggestions ready");
                    self.search.suggestions = locations;
                    self.search.selected = None;
                    self.search.pending = None;
                }
            }
            AppEvent::FetchSucceeded { request, bundle } => {
                if request == self.request_seq {
                    self.apply_bundle(*bundle, tx);
                } else {
                    debug!(request, current = self.request_seq, "discarding stale result");
                }
            }
            AppEvent::FetchFailed { request, error } => {
                if request == self.request_seq {
                    self.apply_failure(&error);
                }
            }
            AppEvent::Quit => self.quit(),
        }

        Ok(())
    }

    fn quit(&mut self) {
        self.running = false;
        self.search.cancel_pending();
        self.precipitation.stop();
        self.wind.stop();
        if let Some(task) = self.clock_task.take() {
            task.abort();
        }
    }
}

/// Startup lookup: explicit coordinates, then a city argument, then the device.
pub fn initial_target(cli: &Cli) -> Option<FetchTarget> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Some(FetchTarget::Place(Location::from_coords(lat, lon)));
    }
    if let Some(city) = cli.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        return Some(FetchTarget::Query(city.to_string()));
    }
    (!cli.no_geolocation).then_some(FetchTarget::Device)
}
