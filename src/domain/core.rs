//! Core geometry types
//!
//! This module defines pure geometry in the control's local coordinate space
//! (points, y axis pointing down). The host owns hit-testing and coordinate
//! transforms; everything here is already local to the knob view.

/// Point in local control coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Vector from `origin` to this point
    pub fn offset_from(&self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Rectangle in local control coordinates
///
/// This is the bounding box of the control as reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Returns the center of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Returns true if this rectangle contains the given point
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Geometry of the knob as supplied by the rendering layer
///
/// The knob center usually coincides with the center of the bounds, but a
/// knob image can be positioned elsewhere inside the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobLayout {
    bounds: Rect,
    center: Point,
    radius: f32,
}

impl KnobLayout {
    /// Creates a layout with the knob centered in `bounds`
    ///
    /// The radius is half of the shorter side, which is the largest circle
    /// that fits inside the bounds.
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            center: bounds.center(),
            radius: bounds.w.min(bounds.h).max(0.0) / 2.0,
        }
    }

    /// Moves the knob center without touching the bounds or radius
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Overrides the knob radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn knob_center(&self) -> Point {
        self.center
    }

    pub fn knob_radius(&self) -> f32 {
        self.radius
    }
}

impl Default for KnobLayout {
    fn default() -> Self {
        Self::from_bounds(Rect::new(0.0, 0.0, 120.0, 120.0))
    }
}
