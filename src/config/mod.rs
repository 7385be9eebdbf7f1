//! Configuration module for rotary-knob
//!
//! Holds the owner-facing settings of a knob (interaction style, notification
//! policy, touch zone, value range) and their validation.

pub mod knob;

pub use knob::{KnobConfig, KnobConfigError};
