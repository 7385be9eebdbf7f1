//! Double-tap recognition from raw touch events
//!
//! Hosts with a native gesture recognizer report double taps directly. Hosts
//! that only deliver raw touches can run their stream through
//! [`DoubleTapDetector`] and forward whatever it recognizes to the knob.

use crate::app::state::TouchEvent;
use crate::domain::core::Point;

/// Longest press that still counts as a tap
pub const TAP_MAX_MS: u64 = 280;
/// Maximum time between the first release and the second press
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;
/// Movement allowed within one tap, in points
pub const TAP_SLOP: f32 = 8.0;
/// Maximum distance between the two taps, in points
pub const DOUBLE_TAP_SLOP: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    started_ms: u64,
    point: Point,
    moved_too_far: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    released_ms: u64,
    point: Point,
}

/// Recognizes two quick taps close to each other
#[derive(Debug, Clone, Default)]
pub struct DoubleTapDetector {
    press: Option<Press>,
    first_tap: Option<Tap>,
}

impl DoubleTapDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw event with its timestamp
    ///
    /// # Returns
    /// A `TouchEvent::DoubleTap` when the event completes a double tap
    pub fn observe(&mut self, now_ms: u64, event: TouchEvent) -> Option<TouchEvent> {
        match event {
            TouchEvent::Down(point) => {
                self.press(now_ms, point);
                None
            }
            TouchEvent::Moved(point) => {
                self.moved(point);
                None
            }
            TouchEvent::Up => self.release(now_ms).map(TouchEvent::DoubleTap),
            TouchEvent::Cancelled => {
                self.reset();
                None
            }
            TouchEvent::DoubleTap(_) => None,
        }
    }

    pub fn press(&mut self, now_ms: u64, point: Point) {
        if let Some(tap) = self.first_tap {
            let late = now_ms.saturating_sub(tap.released_ms) > DOUBLE_TAP_WINDOW_MS;
            let far = tap.point.distance_to(point) > DOUBLE_TAP_SLOP;
            if late || far {
                self.first_tap = None;
            }
        }

        self.press = Some(Press {
            started_ms: now_ms,
            point,
            moved_too_far: false,
        });
    }

    pub fn moved(&mut self, point: Point) {
        if let Some(press) = self.press.as_mut() {
            if press.point.distance_to(point) > TAP_SLOP {
                press.moved_too_far = true;
            }
        }
    }

    /// Ends the current press
    ///
    /// # Returns
    /// The location of the second tap if this release completes a double tap
    pub fn release(&mut self, now_ms: u64) -> Option<Point> {
        let press = self.press.take()?;

        let held_ms = now_ms.saturating_sub(press.started_ms);
        if press.moved_too_far || held_ms > TAP_MAX_MS {
            self.first_tap = None;
            return None;
        }

        match self.first_tap.take() {
            Some(_) => Some(press.point),
            None => {
                self.first_tap = Some(Tap {
                    released_ms: now_ms,
                    point: press.point,
                });
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.press = None;
        self.first_tap = None;
    }
}
