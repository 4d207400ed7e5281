// SPDX-License-Identifier: MPL-2.0
//! Accumulated spin rotation.

/// Degrees added by one navigation spin.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Running rotation angle of the detail image.
///
/// The accumulator is split into the number of completed full turns and the
/// resting angle inside `[0, 360)`. Every navigation step adds exactly one
/// full turn, so the total only grows while the displayed angle (the total
/// modulo 360) stays where it was. Keeping the turns as an integer keeps the
/// total exact no matter how many steps are taken.
///
/// # Example
///
/// ```
/// use iced_gallery::gallery::RotationAccumulator;
///
/// let mut rotation = RotationAccumulator::default();
/// rotation.add_full_turn();
/// assert_eq!(rotation.total_degrees(), 360.0);
/// assert_eq!(rotation.degrees(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationAccumulator {
    turns: u64,
    resting: f32,
}

impl RotationAccumulator {
    /// No rotation (0°).
    pub const ZERO: Self = Self {
        turns: 0,
        resting: 0.0,
    };

    /// Returns the displayed angle in degrees, always in `[0, 360)`.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.resting
    }

    /// Returns the accumulated angle in degrees, including completed turns.
    #[must_use]
    pub fn total_degrees(self) -> f64 {
        f64::from(self.resting) + f64::from(FULL_TURN_DEGREES) * self.turns as f64
    }

    /// Returns how many full spins have completed.
    #[must_use]
    pub fn turns(self) -> u64 {
        self.turns
    }

    /// Adds one full turn to the accumulator.
    pub fn add_full_turn(&mut self) {
        self.turns = self.turns.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(RotationAccumulator::default(), RotationAccumulator::ZERO);
        assert_eq!(RotationAccumulator::default().degrees(), 0.0);
        assert_eq!(RotationAccumulator::default().total_degrees(), 0.0);
    }

    #[test]
    fn full_turn_grows_total_but_keeps_display() {
        let mut rotation = RotationAccumulator::ZERO;
        rotation.add_full_turn();
        rotation.add_full_turn();
        assert_eq!(rotation.turns(), 2);
        assert_eq!(rotation.total_degrees(), 720.0);
        assert_eq!(rotation.degrees(), 0.0);
    }

    #[test]
    fn total_stays_exact_after_many_turns() {
        let mut rotation = RotationAccumulator::ZERO;
        for _ in 0..100_000 {
            rotation.add_full_turn();
        }
        assert_eq!(rotation.total_degrees(), 36_000_000.0);
        assert_eq!(rotation.degrees(), 0.0);
    }
}
