//! Touch tracking state and the events that drive it
//!
//! The tracking state is either idle or holds exactly one live
//! [`InteractionSession`]. A second touch while tracking is ignored.

use crate::domain::core::Point;
use crate::domain::interaction::InteractionSession;

/// Touch lifecycle of the control
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackingState {
    /// No touch is being tracked
    #[default]
    Idle,
    /// An admitted touch is being tracked
    Tracking(InteractionSession),
}

impl TrackingState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingState::Tracking(_))
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        match self {
            TrackingState::Tracking(session) => Some(session),
            TrackingState::Idle => None,
        }
    }
}

/// Input primitives delivered by the host, in local control coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(Point),
    Moved(Point),
    Up,
    Cancelled,
    /// A double tap recognized by the host's gesture source
    DoubleTap(Point),
}

/// Appearance state the renderer picks knob visuals for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Normal,
    /// A touch session is live
    Highlighted,
    Disabled,
}

/// Notification raised whenever the value changes through interaction or animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    pub value: f32,
    pub angle: f32,
}

/// Why a touch-down was not admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchRejection {
    Disabled,
    AlreadyTracking,
    OutsideTouchZone,
    TooCloseToCenter,
}
