//! Reference knob renderer
//!
//! Draws a knob at a given angle using tiny-skia. The interaction engine never
//! depends on this module; it is the "render at angle X" side of the contract
//! for hosts that want a ready-made rasterizer. Layout calculation is kept
//! separate from rasterization so it can be tested without pixels.

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::app::state::ControlState;
use crate::domain::core::KnobLayout;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Invalid knob dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

/// Colors used for one control state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobPalette {
    pub background: Color,
    pub knob: Color,
    pub indicator: Color,
}

impl KnobPalette {
    pub fn for_state(state: ControlState) -> Self {
        let background = Color::from_rgba8(30, 30, 30, 255);
        match state {
            ControlState::Normal => Self {
                background,
                knob: Color::from_rgba8(90, 90, 90, 255),
                indicator: Color::WHITE,
            },
            ControlState::Highlighted => Self {
                background,
                knob: Color::from_rgba8(110, 110, 150, 255),
                indicator: Color::WHITE,
            },
            ControlState::Disabled => Self {
                background,
                knob: Color::from_rgba8(60, 60, 60, 255),
                indicator: Color::from_rgba8(120, 120, 120, 255),
            },
        }
    }
}

/// Pre-calculated geometry for one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct KnobScene {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Knob center relative to the canvas origin
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    /// Knob angle in degrees, clockwise from straight up
    pub angle: f32,
    pub indicator_width: f32,
    pub palette: KnobPalette,
}

impl KnobScene {
    /// Fraction of the radius covered by the knob disc
    const KNOB_SCALE: f32 = 0.85;
    const INDICATOR_INNER: f32 = 0.3;
    const INDICATOR_OUTER: f32 = 0.75;

    pub fn new(layout: KnobLayout, angle: f32, state: ControlState) -> Self {
        let bounds = layout.bounds();
        let center = layout.knob_center();
        let radius = layout.knob_radius();

        Self {
            canvas_width: bounds.w,
            canvas_height: bounds.h,
            center_x: center.x - bounds.x,
            center_y: center.y - bounds.y,
            radius,
            angle,
            indicator_width: (radius * 0.08).max(2.0),
            palette: KnobPalette::for_state(state),
        }
    }

    /// Indicator segment before rotation, pointing straight up
    pub fn indicator_segment(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.center_x, self.center_y - self.radius * Self::INDICATOR_INNER),
            (self.center_x, self.center_y - self.radius * Self::INDICATOR_OUTER),
        )
    }

    fn knob_radius(&self) -> f32 {
        self.radius * Self::KNOB_SCALE
    }
}

/// Rasterizes knob scenes
#[derive(Debug, Default)]
pub struct KnobRenderer;

impl KnobRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a knob scene to a new pixmap
    pub fn render(&self, scene: &KnobScene) -> Result<Pixmap, RendererError> {
        if !(scene.canvas_width >= 1.0 && scene.canvas_height >= 1.0) {
            return Err(RendererError::InvalidDimensions {
                width: scene.canvas_width,
                height: scene.canvas_height,
            });
        }

        let mut pixmap = Pixmap::new(scene.canvas_width as u32, scene.canvas_height as u32)
            .ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(Color::TRANSPARENT);

        self.fill_disc(&mut pixmap, scene, scene.radius, scene.palette.background);
        self.fill_disc(&mut pixmap, scene, scene.knob_radius(), scene.palette.knob);
        self.stroke_indicator(&mut pixmap, scene);

        Ok(pixmap)
    }

    fn fill_disc(&self, pixmap: &mut Pixmap, scene: &KnobScene, radius: f32, color: Color) {
        let mut path_builder = PathBuilder::new();
        path_builder.push_circle(scene.center_x, scene.center_y, radius);

        if let Some(path) = path_builder.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke_indicator(&self, pixmap: &mut Pixmap, scene: &KnobScene) {
        let ((x1, y1), (x2, y2)) = scene.indicator_segment();
        let mut path_builder = PathBuilder::new();
        path_builder.move_to(x1, y1);
        path_builder.line_to(x2, y2);

        if let Some(path) = path_builder.finish() {
            let mut paint = Paint::default();
            paint.set_color(scene.palette.indicator);

            let stroke = Stroke {
                width: scene.indicator_width,
                ..Stroke::default()
            };

            // Positive angles rotate clockwise since the y axis points down
            let transform = Transform::from_rotate_at(scene.angle, scene.center_x, scene.center_y);
            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }
}
