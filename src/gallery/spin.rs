// SPDX-License-Identifier: MPL-2.0
//! Timed rotation transition played when stepping between images.

use super::Direction;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Interpolation curve applied to a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant angular speed.
    Linear,
    /// Accelerates over the first fifth, decelerates over the last fifth.
    #[default]
    EaseBoth,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseBoth => {
                if t < 0.2 {
                    3.125 * t * t
                } else if t > 0.8 {
                    -3.125 * t * t + 6.25 * t - 2.125
                } else {
                    1.25 * t - 0.125
                }
            }
        }
    }
}

/// A spin in flight.
///
/// The spin only describes the animation; the controller applies the
/// navigation it stands for once [`Spin::is_finished`] reports true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
    direction: Direction,
}

impl Spin {
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
        direction: Direction,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
            direction,
        }
    }

    /// Starting angle in degrees.
    #[must_use]
    pub fn start_angle(&self) -> f32 {
        self.from
    }

    /// Final angle in degrees.
    #[must_use]
    pub fn target_angle(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Navigation applied when the spin completes.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated angle in degrees at `now`.
    #[must_use]
    pub fn angle_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
