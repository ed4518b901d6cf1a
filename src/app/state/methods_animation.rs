use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::AppState;
use crate::{
    app::{animation::VisualKind, events::AppEvent},
    domain::hour_cursor::{FORECAST_WINDOW_HOURS, WindowMode},
    ui::layout::canvas_surfaces,
};

impl AppState {
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.bundle.as_ref().is_some_and(|b| !b.hourly.is_empty())
    }

    /// Rain drive (0..=1) for the hour or window under the cursor.
    #[must_use]
    pub fn precipitation_intensity(&self) -> f32 {
        self.bundle
            .as_ref()
            .and_then(|b| {
                b.hourly
                    .precipitation_sample(self.cursor.index(), self.precipitation.mode())
            })
            .map(|sample| sample.intensity())
            .unwrap_or_default()
    }

    /// Wind drive in km/h for the hour or window under the cursor.
    #[must_use]
    pub fn wind_drive(&self) -> f32 {
        self.bundle
            .as_ref()
            .and_then(|b| b.hourly.wind_speed(self.cursor.index(), self.wind.mode()))
            .unwrap_or_default()
    }

    /// Wind bearing for the cursor hour, else the current reading.
    #[must_use]
    pub fn wind_direction(&self) -> Option<f32> {
        let bundle = self.bundle.as_ref()?;
        bundle
            .hourly
            .get(self.cursor.index())
            .and_then(|hour| hour.wind_direction_deg)
            .or(Some(bundle.current.wind_direction_deg))
    }

    /// Terminal resized: each canvas adopts its new panel size.
    pub fn resize(&mut self, width: u16, height: u16, tx: &mpsc::Sender<AppEvent>) {
        self.viewport = (width, height);
        let (rain, wind) = canvas_surfaces(Rect::new(0, 0, width, height));
        let has_data = self.has_data();
        self.precipitation.resize(rain, has_data, tx);
        self.wind.resize(wind, has_data, tx);
    }

    pub(crate) fn toggle_mode(&mut self, kind: VisualKind, tx: &mpsc::Sender<AppEvent>) {
        let has_data = self.has_data();
        match kind {
            VisualKind::Precipitation => {
                let next = self.precipitation.mode().toggled();
                self.precipitation.set_mode(next, has_data, tx);
            }
            VisualKind::Wind => {
                let next = self.wind.mode().toggled();
                self.wind.set_mode(next, has_data, tx);
            }
        }
        self.sync_lookahead();
    }

    /// The cursor keeps a full window ahead while either canvas looks ahead.
    pub(crate) fn sync_lookahead(&mut self) {
        let windowed = [self.precipitation.mode(), self.wind.mode()].contains(&WindowMode::Forecast);
        self.cursor
            .set_lookahead(if windowed { FORECAST_WINDOW_HOURS } else { 1 });
    }

    pub(crate) fn reload_visuals(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let has_data = self.has_data();
        self.precipitation.reload(has_data, tx);
        self.wind.reload(has_data, tx);
    }

    pub(crate) fn on_animation_frame(&mut self, kind: VisualKind, generation: u64) -> bool {
        match kind {
            VisualKind::Precipitation => {
                let drive = self.precipitation_intensity();
                self.precipitation.on_frame(generation, drive)
            }
            VisualKind::Wind => {
                let drive = self.wind_drive();
                self.wind.on_frame(generation, drive)
            }
        }
    }
}
