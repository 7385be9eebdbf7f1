//! Knob orchestration layer
//!
//! This module ties touch input, the value model and the animator together
//! and raises value-changed notifications.

pub mod animator;
pub mod controller;
pub mod state;
