//! Time-based interpolation of programmatic value changes
//!
//! The animator never touches a clock itself. The host forwards its frame
//! callbacks either as an elapsed fraction ([`ValueAnimator::tick`]) or as a
//! frame delta ([`ValueAnimator::advance`]), and applies the returned frame
//! to the value model.

use std::time::Duration;

/// One sampled step of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub value: f32,
    /// True for the last frame; the animator is idle afterwards
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    start: f32,
    target: f32,
    duration: Duration,
    elapsed: Duration,
}

/// Linear interpolation in value space
pub fn lerp(start: f32, target: f32, fraction: f32) -> f32 {
    start + (target - start) * fraction
}

/// Drives at most one value animation at a time
#[derive(Debug, Clone, Default)]
pub struct ValueAnimator {
    active: Option<Animation>,
}

impl ValueAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating from `start` to `target`, discarding any running animation
    ///
    /// # Returns
    /// true if an in-flight animation was superseded
    pub fn animate_to(&mut self, start: f32, target: f32, duration: Duration) -> bool {
        let superseded = self.active.is_some();
        self.active = Some(Animation {
            start,
            target,
            duration,
            elapsed: Duration::ZERO,
        });
        superseded
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Value the running animation is heading to
    pub fn target(&self) -> Option<f32> {
        self.active.map(|animation| animation.target)
    }

    /// Abandons the running animation without producing a frame
    ///
    /// # Returns
    /// true if an animation was running
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Samples the animation at `fraction` of its duration
    ///
    /// Fractions are clamped to `[0, 1]`; reaching 1 finishes the animation.
    pub fn tick(&mut self, fraction: f32) -> Option<AnimationFrame> {
        let animation = self.active.as_mut()?;
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        animation.elapsed = animation.duration.mul_f32(fraction);
        Some(self.sample(fraction))
    }

    /// Moves the animation forward by one frame delta
    pub fn advance(&mut self, dt: Duration) -> Option<AnimationFrame> {
        let animation = self.active.as_mut()?;
        animation.elapsed = animation.elapsed.saturating_add(dt);
        let fraction = if animation.duration.is_zero() {
            1.0
        } else {
            (animation.elapsed.as_secs_f32() / animation.duration.as_secs_f32()).min(1.0)
        };
        Some(self.sample(fraction))
    }

    fn sample(&mut self, fraction: f32) -> AnimationFrame {
        let Some(animation) = self.active else {
            return AnimationFrame {
                value: 0.0,
                finished: true,
            };
        };

        let finished = fraction >= 1.0;
        if finished {
            self.active = None;
            AnimationFrame {
                value: animation.target,
                finished,
            }
        } else {
            AnimationFrame {
                value: lerp(animation.start, animation.target, fraction),
                finished,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn idle_animator_produces_nothing() {
        let mut animator = ValueAnimator::new();
        assert!(!animator.is_running());
        assert_eq!(animator.tick(0.5), None);
        assert_eq!(animator.advance(Duration::from_millis(16)), None);
        assert!(!animator.cancel());
    }

    #[test]
    fn tick_interpolates_linearly() {
        let mut animator = ValueAnimator::new();
        animator.animate_to(0.9, 0.5, Duration::from_millis(200));

        let frame = animator.tick(0.5).unwrap();
        assert!(approx_eq(frame.value, 0.7));
        assert!(!frame.finished);

        let frame = animator.tick(1.0).unwrap();
        assert_eq!(frame.value, 0.5);
        assert!(frame.finished);
        assert!(!animator.is_running());
    }

    #[test]
    fn advance_accumulates_frame_deltas() {
        let mut animator = ValueAnimator::new();
        animator.animate_to(0.0, 1.0, Duration::from_millis(100));

        let frame = animator.advance(Duration::from_millis(25)).unwrap();
        assert!(approx_eq(frame.value, 0.25));
        let frame = animator.advance(Duration::from_millis(25)).unwrap();
        assert!(approx_eq(frame.value, 0.5));

        // Overshooting the duration lands exactly on the target
        let frame = animator.advance(Duration::from_millis(80)).unwrap();
        assert_eq!(frame, AnimationFrame { value: 1.0, finished: true });
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut animator = ValueAnimator::new();
        animator.animate_to(0.0, 1.0, Duration::ZERO);
        let frame = animator.advance(Duration::ZERO).unwrap();
        assert!(frame.finished);
        assert_eq!(frame.value, 1.0);
    }

    #[test]
    fn new_animation_supersedes_old() {
        let mut animator = ValueAnimator::new();
        assert!(!animator.animate_to(0.0, 1.0, Duration::from_millis(100)));
        animator.tick(0.5);

        assert!(animator.animate_to(0.5, 0.0, Duration::from_millis(100)));
        assert_eq!(animator.target(), Some(0.0));

        let frame = animator.tick(0.5).unwrap();
        assert!(approx_eq(frame.value, 0.25));
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        let mut animator = ValueAnimator::new();
        animator.animate_to(1.0, 3.0, Duration::from_millis(100));
        assert_eq!(animator.tick(-2.0).unwrap().value, 1.0);
        assert_eq!(animator.tick(7.0).unwrap().value, 3.0);
    }
}
