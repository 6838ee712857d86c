use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomMode {
    Idle,
    /// A zoom/pan gesture is in progress.
    Zooming,
}

/// Horizontal zoom transform: `pixel' = pixel * k + tx`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub tx: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, tx: 0.0 };

    #[must_use]
    pub const fn new(k: f64, tx: f64) -> Self {
        Self { k, tx }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.k - 1.0).abs() <= f64::EPSILON && self.tx.abs() <= f64::EPSILON
    }

    /// Maps a transformed pixel back to the untransformed pixel space.
    #[must_use]
    pub fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.tx) / self.k
    }

    /// Scales by `factor` keeping `anchor_px` fixed on screen.
    #[must_use]
    pub fn scaled_around(self, factor: f64, anchor_px: f64) -> Self {
        let k = self.k * factor;
        let anchor_base = self.invert_x(anchor_px);
        Self {
            k,
            tx: anchor_px - anchor_base * k,
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64) -> Self {
        Self {
            k: self.k,
            tx: self.tx + dx,
        }
    }

    #[must_use]
    fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            k: self.k + (target.k - self.k) * t,
            tx: self.tx + (target.tx - self.tx) * t,
        }
    }
}

/// Timed interpolation between two transforms, stepped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransition {
    pub from: ZoomTransform,
    pub to: ZoomTransform,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl ZoomTransition {
    #[must_use]
    pub fn new(from: ZoomTransform, to: ZoomTransform, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances the transition and returns the transform to display.
    pub fn step(&mut self, delta: Duration) -> ZoomTransform {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.current()
    }

    #[must_use]
    pub fn current(self) -> ZoomTransform {
        if self.duration.is_zero() || self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(self.to, t)
    }
}
