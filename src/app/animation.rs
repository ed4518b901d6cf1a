//! Canvas lifecycles: one particle set and at most one frame loop per
//! visualization.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::debug;

use crate::{
    app::events::AppEvent,
    domain::hour_cursor::WindowMode,
    ui::particles::{ParticleField, Surface},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    Precipitation,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    Active,
}

/// Count of frame-loop tasks that are still alive.
#[derive(Debug, Clone, Default)]
pub struct LiveLoops(Arc<AtomicUsize>);

impl LiveLoops {
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn enter(&self) -> LiveGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        LiveGuard(self.0.clone())
    }
}

struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A ticking task that posts `AnimationFrame` events. Aborted on drop.
#[derive(Debug)]
pub struct FrameLoop {
    handle: JoinHandle<()>,
    generation: u64,
}

impl FrameLoop {
    pub fn spawn(
        kind: VisualKind,
        generation: u64,
        fps: u8,
        tx: mpsc::Sender<AppEvent>,
        live: &LiveLoops,
    ) -> Self {
        let guard = live.enter();
        let period = Duration::from_millis(1000 / u64::from(fps.max(1)));
        let handle = tokio::spawn(async move {
            let _guard = guard;
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                match tx.try_send(AppEvent::AnimationFrame { kind, generation }) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });
        Self { handle, generation }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One animated canvas.
///
/// `Idle` until data and a non-empty surface are both present. Resizing,
/// switching mode and reloading all stop the running loop before a new one
/// starts, so there is never more than one loop per visualization.
#[derive(Debug)]
pub struct Visualization<F> {
    kind: VisualKind,
    state: VisualState,
    mode: WindowMode,
    surface: Surface,
    field: Option<F>,
    generation: u64,
    frame_loop: Option<FrameLoop>,
    fps: u8,
    animate: bool,
    live: LiveLoops,
}

impl<F: ParticleField> Visualization<F> {
    pub fn new(kind: VisualKind, fps: u8, animate: bool, live: LiveLoops) -> Self {
        Self {
            kind,
            state: VisualState::Idle,
            mode: WindowMode::Current,
            surface: Surface::default(),
            field: None,
            generation: 0,
            frame_loop: None,
            fps,
            animate,
            live,
        }
    }

    pub fn kind(&self) -> VisualKind {
        self.kind
    }

    pub fn state(&self) -> VisualState {
        self.state
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn field(&self) -> Option<&F> {
        self.field.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_loop(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Bring the canvas up for the current surface, replacing any running
    /// loop. Stays `Idle` without data or without a surface.
    pub fn start(&mut self, has_data: bool, tx: &mpsc::Sender<AppEvent>) {
        self.stop();
        if !has_data || self.surface.is_empty() {
            self.field = None;
            return;
        }

        if self.field.as_ref().is_none_or(|f| f.surface() != self.surface) {
            self.field = Some(F::allocate(self.surface, &mut rand::rng()));
        }
        if !self.animate {
            return;
        }

        self.frame_loop = Some(FrameLoop::spawn(
            self.kind,
            self.generation,
            self.fps,
            tx.clone(),
            &self.live,
        ));
        self.state = VisualState::Active;
        debug!(kind = ?self.kind, generation = self.generation, "frame loop started");
    }

    /// Cancel the loop; frames already queued become stale.
    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            drop(frame_loop);
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = VisualState::Idle;
    }

    /// New data arrived: fresh particles, fresh loop.
    pub fn reload(&mut self, has_data: bool, tx: &mpsc::Sender<AppEvent>) {
        self.field = None;
        self.start(has_data, tx);
    }

    /// Returns whether anything changed; an unchanged surface is a no-op.
    pub fn resize(&mut self, surface: Surface, has_data: bool, tx: &mpsc::Sender<AppEvent>) -> bool {
        if surface == self.surface {
            return false;
        }
        self.surface = surface;
        self.field = None;
        self.start(has_data, tx);
        true
    }

    /// Switch window mode, keeping particle positions.
    pub fn set_mode(&mut self, mode: WindowMode, has_data: bool, tx: &mpsc::Sender<AppEvent>) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        if self.state == VisualState::Active {
            self.start(has_data, tx);
        }
    }

    /// Advance one frame if `generation` belongs to the running loop.
    pub fn on_frame(&mut self, generation: u64, drive: f32) -> bool {
        if self.state != VisualState::Active || generation != self.generation {
            return false;
        }
        let Some(field) = self.field.as_mut() else {
            return false;
        };
        field.step(drive, &mut rand::rng());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::particles::{RAIN_DROP_COUNT, RainField, WindField};

    fn rain(live: &LiveLoops) -> Visualization<RainField> {
        Visualization::new(VisualKind::Precipitation, 30, true, live.clone())
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn stays_idle_without_data_or_surface() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(16);
        let mut vis = rain(&live);

        vis.start(true, &tx);
        assert_eq!(vis.state(), VisualState::Idle);

        vis.resize(Surface::from_cells(20, 5), false, &tx);
        assert_eq!(vis.state(), VisualState::Idle);
        assert!(vis.field().is_none());
        assert_eq!(live.count(), 0);
    }

    #[tokio::test]
    async fn resize_leaves_exactly_one_loop() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis = rain(&live);
        vis.resize(Surface::from_cells(20, 5), true, &tx);
        assert_eq!(vis.state(), VisualState::Active);

        assert!(vis.resize(Surface::from_cells(30, 6), true, &tx));
        settle().await;

        assert_eq!(live.count(), 1);
        assert_eq!(vis.field().map(ParticleField::len), Some(RAIN_DROP_COUNT));
    }

    #[tokio::test]
    async fn unchanged_resize_is_a_no_op() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis = rain(&live);
        let surface = Surface::from_cells(20, 5);
        vis.resize(surface, true, &tx);
        vis.set_mode(WindowMode::Forecast, true, &tx);
        let generation = vis.generation();

        assert!(!vis.resize(surface, true, &tx));
        assert_eq!(vis.generation(), generation);
        assert_eq!(vis.mode(), WindowMode::Forecast);
        assert_eq!(vis.field().map(ParticleField::len), Some(RAIN_DROP_COUNT));
    }

    #[tokio::test]
    async fn rapid_mode_toggles_keep_one_loop_and_last_mode() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis: Visualization<WindField> =
            Visualization::new(VisualKind::Wind, 30, true, live.clone());
        vis.resize(Surface::from_cells(20, 5), true, &tx);
        let before = vis.field().map(|f| f.streaks().to_vec());

        for _ in 0..5 {
            let next = vis.mode().toggled();
            vis.set_mode(next, true, &tx);
        }
        settle().await;

        assert_eq!(vis.mode(), WindowMode::Forecast);
        assert_eq!(live.count(), 1);
        assert_eq!(vis.field().map(|f| f.streaks().to_vec()), before);
    }

    #[tokio::test]
    async fn stale_generations_are_ignored() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis = rain(&live);
        vis.resize(Surface::from_cells(20, 5), true, &tx);
        let old = vis.generation();
        vis.reload(true, &tx);

        assert!(!vis.on_frame(old, 1.0));
        assert!(vis.on_frame(vis.generation(), 1.0));
    }

    #[tokio::test]
    async fn stop_kills_the_loop() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis = rain(&live);
        vis.resize(Surface::from_cells(20, 5), true, &tx);
        vis.stop();
        settle().await;

        assert_eq!(vis.state(), VisualState::Idle);
        assert!(!vis.has_loop());
        assert_eq!(live.count(), 0);
    }

    #[tokio::test]
    async fn loop_posts_frames_for_its_generation() {
        let live = LiveLoops::default();
        let (tx, mut rx) = mpsc::channel(64);
        let mut vis = rain(&live);
        vis.resize(Surface::from_cells(20, 5), true, &tx);

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("frame arrives")
            .expect("channel open");
        assert!(matches!(
            event,
            AppEvent::AnimationFrame { kind: VisualKind::Precipitation, generation }
                if generation == vis.generation()
        ));
    }

    #[tokio::test]
    async fn disabled_animation_keeps_static_particles() {
        let live = LiveLoops::default();
        let (tx, _rx) = mpsc::channel(64);
        let mut vis: Visualization<RainField> =
            Visualization::new(VisualKind::Precipitation, 30, false, live.clone());
        vis.resize(Surface::from_cells(20, 5), true, &tx);

        assert_eq!(vis.state(), VisualState::Idle);
        assert!(vis.field().is_some());
        assert_eq!(live.count(), 0);
    }
}
