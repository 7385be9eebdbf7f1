//! Domain logic and core data structures
//!
//! This module contains the pure geometry and value mapping of the knob,
//! independent of any host toolkit.

pub mod core;
pub mod interaction;
pub mod value;
