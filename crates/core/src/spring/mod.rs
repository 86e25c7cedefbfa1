//! Damped-spring interpolation of the strip offset.
//!
//! The interpolator converts the controller's discrete target offset into a
//! continuously animated scalar. Integration is semi-implicit Euler with
//! unit mass: acceleration from the spring law, velocity first, position
//! second. Once position and velocity fall inside the rest thresholds the
//! position snaps exactly to the target and the animation self-cancels.

use crate::config::SpringConfig;

/// Continuously evolving position/velocity pair tracking a discrete target.
///
/// Retargeting never resets position or velocity, so consecutive navigation
/// commands blend into one smooth motion instead of restarting.
#[derive(Debug, Clone)]
pub struct SpringInterpolator {
    position: f32,
    velocity: f32,
    target: f32,
    settled: bool,
    config: SpringConfig,
}

impl SpringInterpolator {
    /// Creates an interpolator at rest on the given position.
    pub fn new(config: SpringConfig, position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            settled: true,
            config,
        }
    }

    /// Points the spring at a new target, continuing from the current
    /// position and velocity without discontinuity.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.settled = self.at_rest();
        if self.settled {
            self.position = target;
            self.velocity = 0.0;
        }
    }

    /// Advances the simulation by `dt` seconds. Returns the new position.
    /// Calling this while settled is a cheap no-op.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.settled || dt <= 0.0 {
            return self.position;
        }

        let displacement = self.target - self.position;
        let acceleration =
            self.config.stiffness * displacement - self.config.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        if self.at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }

        self.position
    }

    /// Current interpolated position, the value a renderer reads.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once the spring has snapped to the target and stopped. The
    /// frame loop stops scheduling ticks while this holds.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    fn at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn spring_at(position: f32) -> SpringInterpolator {
        SpringInterpolator::new(SpringConfig::default(), position)
    }

    #[test]
    fn starts_settled_on_its_initial_position() {
        let spring = spring_at(-1024.0);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), -1024.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn settles_on_target_in_bounded_time() {
        let mut spring = spring_at(0.0);
        spring.retarget(-1024.0);
        assert!(!spring.is_settled());

        let mut ticks = 0;
        while !spring.is_settled() && ticks < 120 {
            spring.step(DT);
            ticks += 1;
        }

        assert!(spring.is_settled(), "spring never settled");
        assert!(ticks <= 90, "settled in {ticks} ticks, expected under 90");
        assert_eq!(spring.position(), -1024.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn settle_is_idempotent() {
        let mut spring = spring_at(0.0);
        spring.retarget(-500.0);
        for _ in 0..120 {
            spring.step(DT);
        }

        let at_rest = spring.position();
        for _ in 0..10 {
            assert_eq!(spring.step(DT), at_rest);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn overdamped_motion_does_not_overshoot_visibly() {
        let mut spring = spring_at(0.0);
        spring.retarget(-1000.0);

        let mut min_position = 0.0_f32;
        for _ in 0..120 {
            min_position = min_position.min(spring.step(DT));
        }

        // A slight springy undershoot past the target is acceptable, a
        // visible oscillation is not.
        assert!(min_position >= -1005.0, "overshoot to {min_position}");
    }

    #[test]
    fn retarget_mid_flight_continues_from_current_motion() {
        let mut spring = spring_at(0.0);
        spring.retarget(-1000.0);
        for _ in 0..5 {
            spring.step(DT);
        }

        let position = spring.position();
        let velocity = spring.velocity();
        spring.retarget(-2000.0);

        assert_eq!(spring.position(), position);
        assert_eq!(spring.velocity(), velocity);
        assert!(!spring.is_settled());
    }

    #[test]
    fn retarget_inside_rest_window_snaps_immediately() {
        let mut spring = spring_at(-100.0);
        spring.retarget(-100.3);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), -100.3);
    }
}
