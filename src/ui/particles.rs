//! Particle sets for the rain and wind canvases.
//!
//! Coordinates are in braille sub-cells with `y` growing downward; the
//! painters flip to canvas space.

use rand::Rng;

pub const RAIN_DROP_COUNT: usize = 50;
pub const WIND_STREAK_COUNT: usize = 30;
/// Divisor turning km/h into sub-cells per frame.
pub const WIND_DAMPING: f32 = 10.0;

/// Canvas size in braille sub-cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Surface {
    pub width: u16,
    pub height: u16,
}

impl Surface {
    /// Braille markers pack 2×4 dots into every cell.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols.saturating_mul(2),
            height: rows.saturating_mul(4),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn w(self) -> f32 {
        f32::from(self.width)
    }

    fn h(self) -> f32 {
        f32::from(self.height)
    }
}

/// A fixed-size particle set bound to one surface.
pub trait ParticleField: Sized {
    const COUNT: usize;

    fn allocate<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self;

    /// Advance one frame. `drive` is rain intensity (0..=1) or wind km/h.
    fn step<R: Rng + ?Sized>(&mut self, drive: f32, rng: &mut R);

    fn len(&self) -> usize;

    fn surface(&self) -> Surface;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub length: f32,
}

#[derive(Debug, Clone)]
pub struct RainField {
    surface: Surface,
    drops: Vec<RainDrop>,
}

/// Light rain drifts, saturated rain pours.
#[must_use]
pub fn fall_factor(intensity: f32) -> f32 {
    0.4 + 1.6 * intensity.clamp(0.0, 1.0)
}

/// How many drops the painter shows for an intensity.
#[must_use]
pub fn visible_drops(intensity: f32, total: usize) -> usize {
    let share = (intensity.clamp(0.0, 1.0) * total as f32).ceil() as usize;
    share.min(total)
}

impl RainField {
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    fn respawn<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> RainDrop {
        let length = rng.random_range(2.0..6.0);
        RainDrop {
            x: rng.random_range(0.0..surface.w()),
            y: -rng.random_range(length..length + surface.h()),
            speed: rng.random_range(0.6..1.6),
            length,
        }
    }
}

impl ParticleField for RainField {
    const COUNT: usize = RAIN_DROP_COUNT;

    fn allocate<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self {
        let drops = if surface.is_empty() {
            Vec::new()
        } else {
            (0..Self::COUNT)
                .map(|_| RainDrop {
                    x: rng.random_range(0.0..surface.w()),
                    y: rng.random_range(0.0..surface.h()),
                    speed: rng.random_range(0.6..1.6),
                    length: rng.random_range(2.0..6.0),
                })
                .collect()
        };
        Self { surface, drops }
    }

    fn step<R: Rng + ?Sized>(&mut self, drive: f32, rng: &mut R) {
        let factor = fall_factor(drive);
        let bottom = self.surface.h();
        for drop in &mut self.drops {
            drop.y += drop.speed * factor;
            if drop.y - drop.length > bottom {
                *drop = Self::respawn(self.surface, rng);
            }
        }
    }

    fn len(&self) -> usize {
        self.drops.len()
    }

    fn surface(&self) -> Surface {
        self.surface
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindStreak {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct WindField {
    surface: Surface,
    streaks: Vec<WindStreak>,
}

impl WindField {
    pub fn streaks(&self) -> &[WindStreak] {
        &self.streaks
    }
}

impl ParticleField for WindField {
    const COUNT: usize = WIND_STREAK_COUNT;

    fn allocate<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self {
        let streaks = if surface.is_empty() {
            Vec::new()
        } else {
            (0..Self::COUNT)
                .map(|_| WindStreak {
                    x: rng.random_range(0.0..surface.w()),
                    y: rng.random_range(0.0..surface.h()),
                    radius: rng.random_range(1.0..3.0),
                })
                .collect()
        };
        Self { surface, streaks }
    }

    fn step<R: Rng + ?Sized>(&mut self, drive: f32, rng: &mut R) {
        let dx = drive.max(0.0) / WIND_DAMPING;
        let right = self.surface.w();
        for streak in &mut self.streaks {
            streak.x += dx;
            if streak.x - streak.radius > right {
                streak.x = -2.0 * streak.radius;
                streak.y = rng.random_range(0.0..self.surface.h());
            }
        }
    }

    fn len(&self) -> usize {
        self.streaks.len()
    }

    fn surface(&self) -> Surface {
        self.surface
    }
}
