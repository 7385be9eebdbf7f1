//! Rotary knob controller
//!
//! The controller is the touch tracking state machine of the knob. It admits
//! or rejects touches, forwards moves to the active interaction session,
//! writes the resulting angle into the value model and raises value-changed
//! notifications according to the continuous/discrete policy. Programmatic
//! animated changes and the double-tap reset go through the value animator.
//!
//! All callbacks are expected on one thread, in delivery order. Out-of-order
//! input (a move or release without a preceding admitted touch-down) is
//! dropped without effect.

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};

use crate::app::animator::ValueAnimator;
use crate::app::state::{ControlState, TouchEvent, TouchRejection, TrackingState, ValueChanged};
use crate::config::{KnobConfig, KnobConfigError};
use crate::domain::core::{KnobLayout, Point};
use crate::domain::interaction::{InteractionSession, InteractionStyle};
use crate::domain::value::{ValueError, ValueModel};

type ValueChangedListener = Box<dyn FnMut(ValueChanged)>;

/// Interaction engine of one rotary knob control
pub struct RotaryKnob {
    model: ValueModel,
    config: KnobConfig,
    layout: KnobLayout,
    tracking: TrackingState,
    animator: ValueAnimator,
    enabled: bool,
    listeners: Vec<ValueChangedListener>,
}

impl RotaryKnob {
    /// Creates a knob from a validated configuration
    ///
    /// # Arguments
    /// * `config` - Knob settings; rejected eagerly if inconsistent
    ///
    /// # Returns
    /// The knob at its (clamped) default value, or KnobConfigError
    pub fn new(config: KnobConfig) -> Result<Self, KnobConfigError> {
        config.validate()?;

        let mut model = ValueModel::new(config.minimum_value, config.maximum_value, config.max_angle)?;
        model.set_default_value(config.default_value);
        model.set_value(model.reset_target());

        Ok(Self {
            model,
            config,
            layout: KnobLayout::default(),
            tracking: TrackingState::Idle,
            animator: ValueAnimator::new(),
            enabled: true,
            listeners: Vec::new(),
        })
    }

    /// Replaces the configuration
    ///
    /// The value is re-clamped into the new range without a notification.
    /// A drag in progress keeps the style, scaling and notification policy it
    /// started with.
    pub fn apply_config(&mut self, config: KnobConfig) -> Result<(), KnobConfigError> {
        config.validate()?;
        self.model.set_range(config.minimum_value, config.maximum_value)?;
        self.model.set_max_angle(config.max_angle)?;
        self.model.set_default_value(config.default_value);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    pub fn layout(&self) -> KnobLayout {
        self.layout
    }

    /// Updates the knob geometry after the host lays the control out
    pub fn set_layout(&mut self, layout: KnobLayout) {
        self.layout = layout;
    }

    pub fn value(&self) -> f32 {
        self.model.value()
    }

    pub fn angle(&self) -> f32 {
        self.model.angle()
    }

    pub fn minimum_value(&self) -> f32 {
        self.model.minimum_value()
    }

    pub fn maximum_value(&self) -> f32 {
        self.model.maximum_value()
    }

    pub fn default_value(&self) -> f32 {
        self.model.default_value()
    }

    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    pub fn set_range(&mut self, minimum: f32, maximum: f32) -> Result<(), ValueError> {
        self.model.set_range(minimum, maximum)?;
        self.config.minimum_value = minimum;
        self.config.maximum_value = maximum;
        Ok(())
    }

    pub fn set_max_angle(&mut self, max_angle: f32) -> Result<(), ValueError> {
        self.model.set_max_angle(max_angle)?;
        self.config.max_angle = max_angle;
        Ok(())
    }

    pub fn set_default_value(&mut self, default_value: f32) {
        self.model.set_default_value(default_value);
        self.config.default_value = self.model.default_value();
    }

    pub fn set_interaction_style(&mut self, style: InteractionStyle) {
        self.config.interaction_style = style;
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.config.continuous = continuous;
    }

    pub fn set_resets_to_default(&mut self, resets_to_default: bool) {
        self.config.resets_to_default = resets_to_default;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables user interaction
    ///
    /// Disabling during a drag ends the drag like a touch-cancel, which in
    /// discrete mode raises the release notification.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<ValueChanged> {
        self.enabled = enabled;
        if enabled {
            return None;
        }
        self.end_tracking()
    }

    pub fn control_state(&self) -> ControlState {
        if !self.enabled {
            ControlState::Disabled
        } else if self.tracking.is_tracking() {
            ControlState::Highlighted
        } else {
            ControlState::Normal
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_tracking()
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.tracking.session()
    }

    /// Whether a double tap would currently be honored as a reset
    pub fn can_reset(&self) -> bool {
        !self.tracking.is_tracking()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Registers a callback for value-changed notifications
    pub fn on_value_changed<F>(&mut self, listener: F)
    where
        F: FnMut(ValueChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Dispatches a host input event to the matching handler
    pub fn handle(&mut self, event: TouchEvent) -> Option<ValueChanged> {
        match event {
            TouchEvent::Down(point) => {
                self.touch_down(point);
                None
            }
            TouchEvent::Moved(point) => self.touch_moved(point),
            TouchEvent::Up => self.touch_up(),
            TouchEvent::Cancelled => self.touch_cancelled(),
            TouchEvent::DoubleTap(point) => self.double_tap(point),
        }
    }

    /// Starts tracking a touch if it lands in the touch zone
    ///
    /// # Returns
    /// true if the touch was admitted and a session started
    pub fn touch_down(&mut self, point: Point) -> bool {
        if let Err(reason) = self.admit(point) {
            debug!(?point, ?reason, "touch rejected");
            return false;
        }

        if self.animator.cancel() {
            debug!("animation superseded by touch");
        }

        let session = InteractionSession::begin(
            point,
            self.model.angle(),
            self.config.interaction_style,
            self.config.scaling_factor,
            self.config.continuous,
        );
        debug!(
            ?point,
            angle = session.origin_angle(),
            style = ?session.style(),
            "touch admitted"
        );
        self.tracking = TrackingState::Tracking(session);
        true
    }

    /// Admission test for a touch-down at `point`
    pub fn admit(&self, point: Point) -> Result<(), TouchRejection> {
        if !self.enabled {
            return Err(TouchRejection::Disabled);
        }
        if self.tracking.is_tracking() {
            return Err(TouchRejection::AlreadyTracking);
        }

        let distance = point.distance_to(self.layout.knob_center());
        let in_zone = if self.config.circular_touch_zone {
            distance <= self.layout.knob_radius()
        } else {
            self.layout.bounds().contains_point(point)
        };
        if !in_zone {
            return Err(TouchRejection::OutsideTouchZone);
        }
        if distance < self.config.min_required_distance_from_knob_center {
            return Err(TouchRejection::TooCloseToCenter);
        }

        Ok(())
    }

    /// Applies a touch-move to the active session
    ///
    /// # Returns
    /// The notification raised in continuous mode, None otherwise
    pub fn touch_moved(&mut self, point: Point) -> Option<ValueChanged> {
        let TrackingState::Tracking(session) = &mut self.tracking else {
            trace!(?point, "move without active touch dropped");
            return None;
        };

        let continuous = session.is_continuous();
        let delta = session.advance(
            point,
            self.layout.knob_center(),
            self.config.min_required_distance_from_knob_center,
        )?;
        let angle = self.model.set_angle(self.model.angle() + delta);
        trace!(delta, angle, value = self.model.value(), "touch moved");

        if continuous {
            self.emit()
        } else {
            None
        }
    }

    /// Ends the active touch
    ///
    /// # Returns
    /// The single release notification in discrete mode, None otherwise
    pub fn touch_up(&mut self) -> Option<ValueChanged> {
        self.end_tracking()
    }

    /// Ends the active touch on cancellation; same rules as a release
    pub fn touch_cancelled(&mut self) -> Option<ValueChanged> {
        self.end_tracking()
    }

    /// Handles a double tap reported by the host's gesture source
    ///
    /// Ignored while a touch is live, when disabled, or when resets are off.
    /// With an animated reset the notifications come from the animation
    /// frames; otherwise one notification is raised immediately.
    pub fn double_tap(&mut self, point: Point) -> Option<ValueChanged> {
        if !self.enabled || !self.config.resets_to_default || !self.can_reset() {
            debug!(?point, "double tap ignored");
            return None;
        }

        let target = self.model.reset_target();
        debug!(?point, target, "resetting to default");

        let duration = self.config.animation_duration();
        if self.config.animated_reset && !duration.is_zero() {
            self.start_animation(target, duration);
            None
        } else {
            self.animator.cancel();
            self.model.set_value(target);
            self.emit()
        }
    }

    /// Sets the value programmatically
    ///
    /// A direct set is silent. An animated set raises a notification for each
    /// animation frame the host drives through [`RotaryKnob::tick`] or
    /// [`RotaryKnob::advance`]. NaN is ignored and leaves any running
    /// animation untouched.
    pub fn set_value(&mut self, value: f32, animated: bool) {
        if value.is_nan() {
            debug!("NaN value ignored");
            return;
        }

        let duration = self.config.animation_duration();
        if animated && !duration.is_zero() {
            self.start_animation(value, duration);
        } else {
            self.animator.cancel();
            self.model.set_value(value);
        }
    }

    pub fn go_to_minimum(&mut self) {
        self.set_value(self.model.minimum_value(), true);
    }

    pub fn go_to_maximum(&mut self) {
        self.set_value(self.model.maximum_value(), true);
    }

    /// Samples the running animation at an elapsed fraction of its duration
    pub fn tick(&mut self, fraction: f32) -> Option<ValueChanged> {
        let frame = self.animator.tick(fraction)?;
        self.apply_frame(frame.value, frame.finished)
    }

    /// Advances the running animation by one frame delta
    pub fn advance(&mut self, dt: Duration) -> Option<ValueChanged> {
        let frame = self.animator.advance(dt)?;
        self.apply_frame(frame.value, frame.finished)
    }

    fn start_animation(&mut self, target: f32, duration: Duration) {
        let target = target.clamp(self.model.minimum_value(), self.model.maximum_value());
        if self.animator.animate_to(self.model.value(), target, duration) {
            debug!("animation superseded by new target");
        }
        debug!(from = self.model.value(), target, ?duration, "animation started");
    }

    fn apply_frame(&mut self, value: f32, finished: bool) -> Option<ValueChanged> {
        self.model.set_value(value);
        if finished {
            debug!(value = self.model.value(), "animation finished");
        }
        self.emit()
    }

    fn end_tracking(&mut self) -> Option<ValueChanged> {
        let TrackingState::Tracking(session) = std::mem::take(&mut self.tracking) else {
            trace!("release without active touch dropped");
            return None;
        };

        debug!(
            start_angle = session.origin_angle(),
            angle = self.model.angle(),
            "touch ended"
        );

        if session.is_continuous() {
            None
        } else {
            self.emit()
        }
    }

    fn emit(&mut self) -> Option<ValueChanged> {
        let event = ValueChanged {
            value: self.model.value(),
            angle: self.model.angle(),
        };
        for listener in &mut self.listeners {
            listener(event);
        }
        Some(event)
    }
}

impl fmt::Debug for RotaryKnob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotaryKnob")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("tracking", &self.tracking)
            .field("animator", &self.animator)
            .field("enabled", &self.enabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
