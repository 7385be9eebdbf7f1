//! Interaction styles and per-touch sessions
//!
//! An interaction style turns the motion between two touch points into an
//! angle change in degrees. Styles are a closed set dispatched with a plain
//! `match`; they hold no state. Everything that belongs to one drag lives in
//! an [`InteractionSession`] which is created on touch-down and dropped on
//! release.

use serde::{Deserialize, Serialize};

use crate::domain::core::Point;

/// How the user operates the knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStyle {
    /// Turn the knob by moving around its center
    #[default]
    Rotating,
    /// Drag left to decrease, right to increase
    SliderHorizontal,
    /// Drag down to decrease, up to increase
    SliderVertical,
}

impl InteractionStyle {
    /// Angle change in degrees for the motion `previous -> current`
    ///
    /// # Arguments
    /// * `previous` - Last point applied in this drag
    /// * `current` - Newly reported touch point
    /// * `scaling_factor` - Points of movement per degree (slider styles only)
    /// * `knob_center` - Rotation center (rotating style only)
    pub fn angle_delta(
        self,
        previous: Point,
        current: Point,
        scaling_factor: f32,
        knob_center: Point,
    ) -> f32 {
        match self {
            InteractionStyle::Rotating => rotation_delta(knob_center, previous, current),
            InteractionStyle::SliderHorizontal => (current.x - previous.x) / scaling_factor,
            InteractionStyle::SliderVertical => (previous.y - current.y) / scaling_factor,
        }
    }
}

/// Signed angle in degrees swept from `previous` to `current` around `center`
///
/// Positive is clockwise on screen (y axis pointing down). The result is
/// always in `(-180, 180]`, so accumulating these increments never jumps
/// when the touch crosses the seam behind the knob.
pub fn rotation_delta(center: Point, previous: Point, current: Point) -> f32 {
    let (ax, ay) = previous.offset_from(center);
    let (bx, by) = current.offset_from(center);
    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross.atan2(dot).to_degrees()
}

/// State of one touch-down..touch-up drag
///
/// Style, scaling factor and notification policy are captured when the touch
/// begins, so changing the configuration mid-drag only affects the next drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    origin: Point,
    origin_angle: f32,
    last_point: Point,
    style: InteractionStyle,
    scaling_factor: f32,
    continuous: bool,
}

impl InteractionSession {
    /// Starts a session at the admitted touch-down point
    pub fn begin(
        origin: Point,
        origin_angle: f32,
        style: InteractionStyle,
        scaling_factor: f32,
        continuous: bool,
    ) -> Self {
        Self {
            origin,
            origin_angle,
            last_point: origin,
            style,
            scaling_factor,
            continuous,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Knob angle at the moment the touch went down
    pub fn origin_angle(&self) -> f32 {
        self.origin_angle
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn style(&self) -> InteractionStyle {
        self.style
    }

    pub fn scaling_factor(&self) -> f32 {
        self.scaling_factor
    }

    /// Whether this drag notifies on every move or only on release
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Consumes a touch-move and returns the angle increment to apply
    ///
    /// In the rotating style, points closer than `dead_zone` to the knob
    /// center are skipped: the angle there is numerically meaningless.
    ///
    /// # Returns
    /// Some(delta) in degrees, or None if the move was skipped
    pub fn advance(&mut self, point: Point, knob_center: Point, dead_zone: f32) -> Option<f32> {
        if self.style == InteractionStyle::Rotating && point.distance_to(knob_center) < dead_zone {
            return None;
        }

        let delta = self
            .style
            .angle_delta(self.last_point, point, self.scaling_factor, knob_center);
        self.last_point = point;
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    const CENTER: Point = Point { x: 50.0, y: 50.0 };

    #[test]
    fn quarter_turn_clockwise_is_positive() {
        // Top of the knob to its right side
        let delta = rotation_delta(CENTER, Point::new(50.0, 10.0), Point::new(90.0, 50.0));
        assert!(approx_eq(delta, 90.0));
    }

    #[test]
    fn counter_clockwise_is_negative() {
        let delta = rotation_delta(CENTER, Point::new(90.0, 50.0), Point::new(50.0, 10.0));
        assert!(approx_eq(delta, -90.0));
    }

    #[test]
    fn crossing_the_seam_stays_small() {
        // Just left of straight down to just right of straight down, through the bottom
        let left = Point::new(49.0, 90.0);
        let right = Point::new(51.0, 90.0);
        let delta = rotation_delta(CENTER, left, right);
        assert!(delta.abs() < 5.0);
        assert!(delta < 0.0); // moving right along the bottom is counter-clockwise
    }

    #[test]
    fn horizontal_slider_scales_by_factor() {
        let delta = InteractionStyle::SliderHorizontal.angle_delta(
            Point::new(100.0, 0.0),
            Point::new(110.0, 0.0),
            2.0,
            CENTER,
        );
        assert_eq!(delta, 5.0);
    }

    #[test]
    fn vertical_slider_up_increases() {
        let up = InteractionStyle::SliderVertical.angle_delta(
            Point::new(0.0, 100.0),
            Point::new(0.0, 90.0),
            1.0,
            CENTER,
        );
        assert_eq!(up, 10.0);

        let down = InteractionStyle::SliderVertical.angle_delta(
            Point::new(0.0, 100.0),
            Point::new(0.0, 104.0),
            2.0,
            CENTER,
        );
        assert_eq!(down, -2.0);
    }

    #[test]
    fn session_deltas_are_incremental() {
        let mut session = InteractionSession::begin(
            Point::new(100.0, 0.0),
            12.0,
            InteractionStyle::SliderHorizontal,
            1.0,
            true,
        );
        assert_eq!(session.advance(Point::new(104.0, 0.0), CENTER, 4.0), Some(4.0));
        assert_eq!(session.advance(Point::new(106.0, 0.0), CENTER, 4.0), Some(2.0));
        assert_eq!(session.last_point(), Point::new(106.0, 0.0));
        assert_eq!(session.origin(), Point::new(100.0, 0.0));
        assert_eq!(session.origin_angle(), 12.0);
    }

    #[test]
    fn rotating_session_skips_dead_zone() {
        let mut session =
            InteractionSession::begin(Point::new(50.0, 10.0), 0.0, InteractionStyle::Rotating, 1.0, true);
        assert_eq!(session.advance(Point::new(51.0, 51.0), CENTER, 4.0), None);
        assert_eq!(session.last_point(), Point::new(50.0, 10.0));

        let delta = session.advance(Point::new(90.0, 50.0), CENTER, 4.0).unwrap();
        assert!(approx_eq(delta, 90.0));
    }

    #[test]
    fn default_style_is_rotating() {
        assert_eq!(InteractionStyle::default(), InteractionStyle::Rotating);
    }
}
