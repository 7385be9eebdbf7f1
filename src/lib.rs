//! Interaction engine for a rotary knob control
//!
//! Converts touch input into a bounded scalar value shown as a rotating knob.
//! The host delivers touches and frame ticks in local control coordinates and
//! receives value-changed notifications back; drawing is left to the host
//! (a reference tiny-skia renderer lives in [`ui`]).

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::controller::RotaryKnob;
pub use app::state::{ControlState, TouchEvent, ValueChanged};
pub use config::{KnobConfig, KnobConfigError};
pub use domain::core::{KnobLayout, Point, Rect};
pub use domain::interaction::InteractionStyle;
pub use domain::value::{ValueError, ValueModel};
