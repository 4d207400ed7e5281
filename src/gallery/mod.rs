// SPDX-License-Identifier: MPL-2.0
//! Gallery view-state controller.
//!
//! The controller owns the ordered image list and everything the view needs
//! to know about navigation: which mode is shown, which image is current and
//! how far the detail image has spun. It never touches pixels; each operation
//! returns an [`Effect`] describing what the presentation layer should do.
//!
//! Stepping to a neighbour plays a full 360° spin against the *current*
//! image. The index and the resting angle only change once the spin has
//! finished, so the next image appears already at rest.
//!
//! Time is passed in explicitly (`now`), which keeps the controller
//! independent from the event loop that drives it.

mod rotation;
mod spin;

pub use rotation::{RotationAccumulator, FULL_TURN_DEGREES};
pub use spin::{Easing, Spin};

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Which of the two gallery screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Thumbnail grid.
    #[default]
    Grid,
    /// Full-size single image with navigation controls.
    Detail,
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the previous image (-1).
    Previous,
    /// Navigate to the next image (+1).
    Next,
}

impl Direction {
    /// Index offset for this direction.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Render requests produced by controller operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Nothing changed on screen.
    None,
    /// Show the thumbnail grid.
    RenderGrid,
    /// Show the image at `index` resting at `rotation` degrees.
    RenderDetail { index: usize, rotation: f32 },
    /// Spin the displayed image from `from` to `to` degrees.
    AnimateRotation {
        from: f32,
        to: f32,
        duration: Duration,
    },
}

/// Timing parameters for navigation spins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSettings {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(crate::config::DEFAULT_SPIN_DURATION_MS),
            easing: Easing::default(),
        }
    }
}

/// View state of the gallery.
///
/// Only one spin runs at a time. Steps requested while a spin is in flight
/// are queued and bounds-checked when their turn comes, so a burst of
/// "next" clicks plays one spin per click and stops at the last image.
#[derive(Debug, Clone)]
pub struct Controller<T> {
    images: Vec<T>,
    mode: ViewMode,
    current_index: Option<usize>,
    rotation: RotationAccumulator,
    spin: Option<Spin>,
    queued: VecDeque<Direction>,
    settings: SpinSettings,
}

impl<T> Controller<T> {
    /// Creates a controller in grid mode over a fixed image list.
    #[must_use]
    pub fn new(images: Vec<T>, settings: SpinSettings) -> Self {
        let current_index = if images.is_empty() { None } else { Some(0) };
        Self {
            images,
            mode: ViewMode::Grid,
            current_index,
            rotation: RotationAccumulator::ZERO,
            spin: None,
            queued: VecDeque::new(),
            settings,
        }
    }

    /// Opens the detail view on the image at `index`.
    ///
    /// A spin still in flight is completed first, so its navigation is not
    /// lost. Opening never animates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index` is outside the image list.
    pub fn open_detail(&mut self, index: usize) -> Result<Effect> {
        if index >= self.images.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.images.len(),
            });
        }

        self.queued.clear();
        self.complete_spin();

        self.mode = ViewMode::Detail;
        self.current_index = Some(index);
        Ok(self.render_detail())
    }

    /// Requests navigation to the neighbouring image.
    ///
    /// Outside the detail view or past either end of the list this is a
    /// no-op. While a spin is in flight the step is queued.
    pub fn step(&mut self, direction: Direction, now: Instant) -> Effect {
        if self.mode != ViewMode::Detail {
            return Effect::None;
        }

        if self.spin.is_some() {
            self.queued.push_back(direction);
            return Effect::None;
        }

        self.start_spin(direction, now)
    }

    /// Advances the clock.
    ///
    /// Completes the spin in flight once its duration has elapsed and starts
    /// the next queued step, if any. Returns the render request for the
    /// completed navigation, or [`Effect::None`] when nothing completed.
    pub fn tick(&mut self, now: Instant) -> Effect {
        match self.spin {
            Some(spin) if spin.is_finished(now) => {
                let effect = self.complete_spin();
                self.start_queued(now);
                effect
            }
            _ => Effect::None,
        }
    }

    /// Completes the spin in flight immediately, ignoring its remaining time.
    pub fn finish_spin(&mut self) -> Effect {
        self.complete_spin()
    }

    /// Returns to the thumbnail grid.
    ///
    /// The current index and rotation are kept. Queued steps are dropped; a
    /// spin already in flight still completes on a later [`tick`](Self::tick).
    pub fn close_detail(&mut self) -> Effect {
        self.queued.clear();
        self.mode = ViewMode::Grid;
        Effect::RenderGrid
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the current image.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current_index.and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn images(&self) -> &[T] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the rotation accumulator.
    #[must_use]
    pub fn rotation(&self) -> RotationAccumulator {
        self.rotation
    }

    /// Angle to draw the detail image at, in degrees.
    ///
    /// While spinning this is the interpolated angle; otherwise it is the
    /// resting angle.
    #[must_use]
    pub fn displayed_rotation(&self, now: Instant) -> f32 {
        match &self.spin {
            Some(spin) => spin.angle_at(now).rem_euclid(FULL_TURN_DEGREES),
            None => self.rotation.degrees(),
        }
    }

    /// Returns true while a spin is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Number of steps waiting for the current spin to finish.
    #[must_use]
    pub fn queued_steps(&self) -> usize {
        self.queued.len()
    }

    /// Returns true if a step in `direction` from the current image stays
    /// inside the list.
    #[must_use]
    pub fn can_step(&self, direction: Direction) -> bool {
        self.target_index(direction).is_some()
    }

    fn target_index(&self, direction: Direction) -> Option<usize> {
        let current = self.current_index?;
        let target = current.checked_add_signed(direction.delta())?;
        (target < self.images.len()).then_some(target)
    }

    fn start_spin(&mut self, direction: Direction, now: Instant) -> Effect {
        if self.target_index(direction).is_none() {
            return Effect::None;
        }

        let from = self.rotation.degrees();
        let to = from + FULL_TURN_DEGREES;
        let spin = Spin::new(
            from,
            to,
            now,
            self.settings.duration,
            self.settings.easing,
            direction,
        );
        self.spin = Some(spin);

        Effect::AnimateRotation {
            from,
            to,
            duration: self.settings.duration,
        }
    }

    fn start_queued(&mut self, now: Instant) {
        while let Some(direction) = self.queued.pop_front() {
            if let Effect::AnimateRotation { .. } = self.start_spin(direction, now) {
                break;
            }
        }
    }

    fn complete_spin(&mut self) -> Effect {
        let Some(spin) = self.spin.take() else {
            return Effect::None;
        };

        self.rotation.add_full_turn();
        if let Some(target) = self.target_index(spin.direction()) {
            self.current_index = Some(target);
        }

        match self.mode {
            ViewMode::Detail => self.render_detail(),
            ViewMode::Grid => Effect::None,
        }
    }

    fn render_detail(&self) -> Effect {
        match self.current_index {
            Some(index) => Effect::RenderDetail {
                index,
                rotation: self.rotation.degrees(),
            },
            None => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPIN: Duration = Duration::from_millis(1000);

    fn gallery(count: usize) -> Controller<String> {
        let images = (0..count).map(|i| format!("image-{i}.jpg")).collect();
        Controller::new(
            images,
            SpinSettings {
                duration: SPIN,
                easing: Easing::Linear,
            },
        )
    }

    #[test]
    fn starts_in_grid_mode_at_first_image() {
        let controller = gallery(3);
        assert_eq!(controller.mode(), ViewMode::Grid);
        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.rotation().degrees(), 0.0);
        assert!(!controller.is_spinning());
    }

    #[test]
    fn empty_gallery_has_no_current_index() {
        let controller = gallery(0);
        assert!(controller.is_empty());
        assert_eq!(controller.current_index(), None);
        assert!(controller.current().is_none());
    }

    #[test]
    fn open_detail_sets_mode_and_index() {
        let mut controller = gallery(5);
        let effect = controller.open_detail(3).expect("index in range");
        assert_eq!(controller.mode(), ViewMode::Detail);
        assert_eq!(controller.current_index(), Some(3));
        assert_eq!(
            effect,
            Effect::RenderDetail {
                index: 3,
                rotation: 0.0
            }
        );
        assert_eq!(controller.current().map(String::as_str), Some("image-3.jpg"));
    }

    #[test]
    fn open_detail_rejects_out_of_range_index() {
        let mut controller = gallery(2);
        let err = controller.open_detail(2).expect_err("index out of range");
        assert_eq!(err, Error::InvalidIndex { index: 2, len: 2 });
        assert_eq!(controller.mode(), ViewMode::Grid);
    }

    #[test]
    fn open_detail_on_empty_gallery_fails() {
        let mut controller = gallery(0);
        assert!(controller.open_detail(0).is_err());
    }

    #[test]
    fn step_starts_spin_without_changing_image() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");

        let effect = controller.step(Direction::Next, now);
        assert_eq!(
            effect,
            Effect::AnimateRotation {
                from: 0.0,
                to: 360.0,
                duration: SPIN
            }
        );
        assert!(controller.is_spinning());
        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.rotation().turns(), 0);
    }

    #[test]
    fn spin_sweeps_against_old_image() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);

        let halfway = now + SPIN / 2;
        assert_eq!(controller.tick(halfway), Effect::None);
        assert!((controller.displayed_rotation(halfway) - 180.0).abs() < 0.5);
        assert_eq!(controller.current_index(), Some(0));
    }

    #[test]
    fn tick_after_duration_completes_navigation() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);

        let effect = controller.tick(now + SPIN);
        assert_eq!(
            effect,
            Effect::RenderDetail {
                index: 1,
                rotation: 0.0
            }
        );
        assert!(!controller.is_spinning());
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.rotation().total_degrees(), 360.0);
        assert_eq!(controller.displayed_rotation(now + SPIN), 0.0);
    }

    #[test]
    fn step_past_either_end_is_noop() {
        let mut controller = gallery(2);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        assert_eq!(controller.step(Direction::Previous, now), Effect::None);
        assert!(!controller.is_spinning());

        controller.open_detail(1).expect("index in range");
        assert_eq!(controller.step(Direction::Next, now), Effect::None);
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.rotation(), RotationAccumulator::ZERO);
    }

    #[test]
    fn step_in_grid_mode_is_noop() {
        let mut controller = gallery(3);
        assert_eq!(controller.step(Direction::Next, Instant::now()), Effect::None);
        assert_eq!(controller.current_index(), Some(0));
    }

    #[test]
    fn previous_step_also_adds_a_full_turn() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(2).expect("index in range");
        controller.step(Direction::Previous, now);
        controller.tick(now + SPIN);
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.rotation().turns(), 1);
    }

    #[test]
    fn steps_during_spin_are_queued() {
        let mut controller = gallery(5);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);
        assert_eq!(controller.step(Direction::Next, now), Effect::None);
        assert_eq!(controller.queued_steps(), 1);

        controller.tick(now + SPIN);
        assert_eq!(controller.current_index(), Some(1));
        assert!(controller.is_spinning());
        assert_eq!(controller.queued_steps(), 0);

        controller.tick(now + SPIN * 2);
        assert_eq!(controller.current_index(), Some(2));
        assert!(!controller.is_spinning());
        assert_eq!(controller.rotation().turns(), 2);
    }

    #[test]
    fn queued_steps_past_the_end_are_dropped() {
        let mut controller = gallery(2);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);
        controller.step(Direction::Next, now);
        controller.step(Direction::Next, now);

        controller.tick(now + SPIN);
        assert_eq!(controller.current_index(), Some(1));
        assert!(!controller.is_spinning());
        assert_eq!(controller.queued_steps(), 0);
    }

    #[test]
    fn close_detail_is_idempotent_and_keeps_state() {
        let mut controller = gallery(4);
        let now = Instant::now();
        controller.open_detail(2).expect("index in range");
        controller.step(Direction::Next, now);
        controller.tick(now + SPIN);

        assert_eq!(controller.close_detail(), Effect::RenderGrid);
        let once = (
            controller.mode(),
            controller.current_index(),
            controller.rotation(),
        );
        controller.close_detail();
        let twice = (
            controller.mode(),
            controller.current_index(),
            controller.rotation(),
        );
        assert_eq!(once, twice);
        assert_eq!(once, (ViewMode::Grid, Some(3), controller.rotation()));
        assert_eq!(controller.rotation().turns(), 1);
    }

    #[test]
    fn spin_in_flight_completes_after_closing() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);
        controller.close_detail();

        assert_eq!(controller.tick(now + SPIN), Effect::None);
        assert_eq!(controller.mode(), ViewMode::Grid);
        assert_eq!(controller.current_index(), Some(1));
    }

    #[test]
    fn open_detail_completes_pending_spin_first() {
        let mut controller = gallery(3);
        let now = Instant::now();
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, now);
        controller.close_detail();

        controller.open_detail(2).expect("index in range");
        assert!(!controller.is_spinning());
        assert_eq!(controller.current_index(), Some(2));
        assert_eq!(controller.rotation().turns(), 1);
    }

    #[test]
    fn reopening_keeps_accumulated_rotation() {
        let mut controller = gallery(3);
        controller.open_detail(0).expect("index in range");
        controller.step(Direction::Next, Instant::now());
        controller.finish_spin();
        controller.close_detail();

        let effect = controller.open_detail(0).expect("index in range");
        assert_eq!(
            effect,
            Effect::RenderDetail {
                index: 0,
                rotation: 0.0
            }
        );
        assert_eq!(controller.rotation().total_degrees(), 360.0);
    }

    #[test]
    fn can_step_reports_boundaries() {
        let mut controller = gallery(3);
        controller.open_detail(0).expect("index in range");
        assert!(!controller.can_step(Direction::Previous));
        assert!(controller.can_step(Direction::Next));
        controller.open_detail(2).expect("index in range");
        assert!(controller.can_step(Direction::Previous));
        assert!(!controller.can_step(Direction::Next));
    }

    #[test]
    fn finish_spin_without_spin_is_noop() {
        let mut controller = gallery(3);
        assert_eq!(controller.finish_spin(), Effect::None);
        assert_eq!(controller.rotation(), RotationAccumulator::ZERO);
    }
}
