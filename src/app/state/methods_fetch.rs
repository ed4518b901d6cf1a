use tokio::sync::mpsc;
use tracing::{info, warn};

use super::{AppState, Status};
use crate::{
    app::{
        events::{AppEvent, FetchTarget, spawn_fetch},
        settings::save_preferences,
    },
    domain::weather::WeatherBundle,
    error::WeatherError,
};

impl AppState {
    /// Launch a fetch; any result from an earlier request is discarded
    /// when it lands.
    pub(crate) fn start_fetch(&mut self, target: FetchTarget, tx: &mpsc::Sender<AppEvent>) {
        self.request_seq = self.request_seq.wrapping_add(1);
        self.loading = true;
        self.status = Status::loading(match &target {
            FetchTarget::Query(query) => format!("Searching for {query}..."),
            FetchTarget::Place(location) => format!("Fetching weather for {}...", location.name),
            FetchTarget::Device => "Detecting your location...".to_string(),
        });
        self.last_target = Some(target.clone());
        spawn_fetch(self.service.clone(), target, self.request_seq, tx.clone());
    }

    pub(crate) fn refetch(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if let Some(target) = self.refetch_target() {
            self.start_fetch(target, tx);
        }
    }

    /// Refresh the place on screen rather than re-running its lookup.
    fn refetch_target(&self) -> Option<FetchTarget> {
        match (&self.bundle, &self.last_target) {
            (Some(bundle), Some(FetchTarget::Query(_) | FetchTarget::Place(_))) => {
                Some(FetchTarget::Place(bundle.location.clone()))
            }
            (_, target) => target.clone(),
        }
    }

    pub(crate) fn apply_bundle(&mut self, bundle: WeatherBundle, tx: &mpsc::Sender<AppEvent>) {
        info!(location = %bundle.location.name, "showing new weather");
        self.cursor.reset(bundle.hourly.len());
        self.status = Status::info(format!(
            "Updated {}",
            bundle.fetched_at.with_timezone(&chrono::Local).format("%H:%M")
        ));
        self.bundle = Some(bundle);
        self.loading = false;
        self.sync_lookahead();
        self.reload_visuals(tx);
    }

    /// The previous bundle stays on screen; only the status line changes.
    pub(crate) fn apply_failure(&mut self, error: &WeatherError) {
        warn!(error = %error, "weather update failed");
        self.loading = false;
        self.status = Status::error(error.to_string());
    }

    pub(crate) fn persist_preferences(&mut self) {
        let Some(path) = self.preferences_path.as_deref() else {
            return;
        };
        if let Err(err) = save_preferences(path, self.preferences) {
            warn!(error = %err, "saving preferences failed");
            self.status = Status::error("Could not save preferences");
        }
    }
}
