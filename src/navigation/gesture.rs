// SPDX-License-Identifier: MPL-2.0
//! Swipe and key interpretation.
//!
//! A swipe is a press followed by a release of the same pointer. Only a
//! dominantly horizontal movement past the threshold counts: dragging right
//! goes back, dragging left goes forward. Anything else is ignored.

use super::Intent;
use crate::config::{
    DEFAULT_HORIZONTAL_THRESHOLD, DEFAULT_VERTICAL_TOLERANCE, MAX_HORIZONTAL_THRESHOLD,
    MAX_VERTICAL_TOLERANCE, MIN_HORIZONTAL_THRESHOLD, MIN_VERTICAL_TOLERANCE,
};
use iced::keyboard::{self, key::Named};
use iced::Point;

/// Thresholds for recognizing a swipe, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    horizontal_threshold: f32,
    vertical_tolerance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            horizontal_threshold: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical_tolerance: DEFAULT_VERTICAL_TOLERANCE,
        }
    }
}

impl GestureConfig {
    /// Builds a config, clamping both values into their supported ranges.
    #[must_use]
    pub fn new(horizontal_threshold: f32, vertical_tolerance: f32) -> Self {
        Self {
            horizontal_threshold: sanitize(
                horizontal_threshold,
                MIN_HORIZONTAL_THRESHOLD,
                MAX_HORIZONTAL_THRESHOLD,
                DEFAULT_HORIZONTAL_THRESHOLD,
            ),
            vertical_tolerance: sanitize(
                vertical_tolerance,
                MIN_VERTICAL_TOLERANCE,
                MAX_VERTICAL_TOLERANCE,
                DEFAULT_VERTICAL_TOLERANCE,
            ),
        }
    }

    #[must_use]
    pub fn horizontal_threshold(&self) -> f32 {
        self.horizontal_threshold
    }

    #[must_use]
    pub fn vertical_tolerance(&self) -> f32 {
        self.vertical_tolerance
    }

    /// Classifies the movement from `start` to `end`.
    #[must_use]
    pub fn interpret(&self, start: Point, end: Point) -> Option<Intent> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dy.abs() >= self.vertical_tolerance {
            return None;
        }

        if dx > self.horizontal_threshold {
            Some(Intent::Previous)
        } else if dx < -self.horizontal_threshold {
            Some(Intent::Next)
        } else {
            None
        }
    }
}

fn sanitize(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// Which pointer started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Finger(u64),
}

/// Tracks the press half of a swipe until the matching release arrives.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<(PointerSource, Point)>,
}

impl GestureTracker {
    /// Records where a gesture starts. A second press replaces the first.
    pub fn press(&mut self, source: PointerSource, position: Point) {
        self.start = Some((source, position));
    }

    /// Completes the gesture started by `source`.
    ///
    /// A completed gesture clears its start point, so it can never pair with
    /// a later release. A release from a different pointer is ignored.
    pub fn release(
        &mut self,
        source: PointerSource,
        position: Point,
        config: &GestureConfig,
    ) -> Option<Intent> {
        match self.start {
            Some((started_by, start)) if started_by == source => {
                self.start = None;
                config.interpret(start, position)
            }
            _ => None,
        }
    }

    /// Abandons the gesture in progress (pointer lost or left the window).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

/// Arrow keys map straight to intents, with no threshold.
#[must_use]
pub fn intent_for_key(key: &keyboard::Key) -> Option<Intent> {
    match key {
        keyboard::Key::Named(Named::ArrowRight) => Some(Intent::Next),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Intent::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GestureConfig {
        GestureConfig::new(40.0, 40.0)
    }

    #[test]
    fn left_swipe_goes_forward() {
        let intent = config().interpret(Point::new(200.0, 100.0), Point::new(130.0, 105.0));
        assert_eq!(intent, Some(Intent::Next));
    }

    #[test]
    fn right_swipe_goes_back() {
        let intent = config().interpret(Point::new(100.0, 100.0), Point::new(170.0, 95.0));
        assert_eq!(intent, Some(Intent::Previous));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let intent = config().interpret(Point::new(100.0, 100.0), Point::new(120.0, 100.0));
        assert_eq!(intent, None);
    }

    #[test]
    fn threshold_is_exclusive() {
        let intent = config().interpret(Point::new(100.0, 0.0), Point::new(140.0, 0.0));
        assert_eq!(intent, None);
    }

    #[test]
    fn vertical_scroll_is_rejected() {
        let intent = config().interpret(Point::new(100.0, 100.0), Point::new(20.0, 180.0));
        assert_eq!(intent, None);

        let at_tolerance = config().interpret(Point::new(100.0, 100.0), Point::new(20.0, 140.0));
        assert_eq!(at_tolerance, None);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        let cfg = GestureConfig::new(0.0, 10_000.0);
        assert_eq!(cfg.horizontal_threshold(), MIN_HORIZONTAL_THRESHOLD);
        assert_eq!(cfg.vertical_tolerance(), MAX_VERTICAL_TOLERANCE);

        let nan = GestureConfig::new(f32::NAN, f32::INFINITY);
        assert_eq!(nan, GestureConfig::default());
    }

    #[test]
    fn tracker_resets_after_each_gesture() {
        let cfg = config();
        let mut tracker = GestureTracker::default();

        tracker.press(PointerSource::Mouse, Point::new(300.0, 50.0));
        assert_eq!(
            tracker.release(PointerSource::Mouse, Point::new(200.0, 50.0), &cfg),
            Some(Intent::Next)
        );
        assert!(!tracker.is_tracking());

        // A stray release without a fresh press must not reuse the old start.
        assert_eq!(
            tracker.release(PointerSource::Mouse, Point::new(100.0, 50.0), &cfg),
            None
        );
    }

    #[test]
    fn tracker_resets_even_when_no_intent() {
        let cfg = config();
        let mut tracker = GestureTracker::default();
        tracker.press(PointerSource::Finger(1), Point::new(0.0, 0.0));
        assert_eq!(
            tracker.release(PointerSource::Finger(1), Point::new(5.0, 0.0), &cfg),
            None
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn release_from_other_pointer_is_ignored() {
        let cfg = config();
        let mut tracker = GestureTracker::default();
        tracker.press(PointerSource::Finger(1), Point::new(300.0, 0.0));

        assert_eq!(
            tracker.release(PointerSource::Finger(2), Point::new(0.0, 0.0), &cfg),
            None
        );
        assert!(tracker.is_tracking());
        assert_eq!(
            tracker.release(PointerSource::Finger(1), Point::new(0.0, 0.0), &cfg),
            Some(Intent::Next)
        );
    }

    #[test]
    fn cancel_drops_pending_start() {
        let mut tracker = GestureTracker::default();
        tracker.press(PointerSource::Mouse, Point::new(10.0, 10.0));
        tracker.cancel();
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn arrow_keys_map_to_intents() {
        assert_eq!(
            intent_for_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Intent::Next)
        );
        assert_eq!(
            intent_for_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Intent::Previous)
        );
        assert_eq!(intent_for_key(&keyboard::Key::Named(Named::ArrowUp)), None);
    }
}
