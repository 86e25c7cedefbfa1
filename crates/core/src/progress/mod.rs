//! Frame-coalesced consumption of the hero section's scroll progress.
//!
//! The hero publishes a continuous value in [0, 1] as the page scrolls.
//! Scroll events arrive far more often than frames render, so deliveries
//! are coalesced: any number of pushes within a tick collapse to the latest
//! value, and a value is only delivered when it moved more than an epsilon
//! from the last delivered one. The carousel reads the result purely to
//! gate panel entrance transitions; it never feeds back into navigation.

use crate::config::ProgressConfig;

/// At-most-once-per-tick coalescing throttle for a scalar signal.
#[derive(Debug, Clone)]
pub struct ProgressThrottle {
    pending: Option<f32>,
    delivered: Option<f32>,
    config: ProgressConfig,
}

impl ProgressThrottle {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            pending: None,
            delivered: None,
            config,
        }
    }

    /// Records a new raw value. Multiple pushes between ticks overwrite
    /// each other; only the latest survives.
    pub fn push(&mut self, value: f32) {
        self.pending = Some(value.clamp(0.0, 1.0));
    }

    /// Called once per rendered frame. Delivers the pending value if it
    /// moved more than epsilon since the last delivery.
    pub fn tick(&mut self) -> Option<f32> {
        let value = self.pending.take()?;
        let moved = self
            .delivered
            .map(|last| (value - last).abs() > self.config.epsilon)
            .unwrap_or(true);
        if !moved {
            return None;
        }

        self.delivered = Some(value);
        Some(value)
    }

    /// Most recently delivered value, zero before the first delivery.
    pub fn latest(&self) -> f32 {
        self.delivered.unwrap_or(0.0)
    }

    /// Whether panels should run their entrance transition "in".
    pub fn entered(&self) -> bool {
        self.latest() > self.config.entrance_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle() -> ProgressThrottle {
        ProgressThrottle::new(ProgressConfig::default())
    }

    #[test]
    fn first_push_is_delivered() {
        let mut t = throttle();
        t.push(0.2);
        assert_eq!(t.tick(), Some(0.2));
        assert_eq!(t.latest(), 0.2);
    }

    #[test]
    fn intra_tick_pushes_coalesce_to_the_latest() {
        let mut t = throttle();
        t.push(0.1);
        t.push(0.4);
        t.push(0.35);
        assert_eq!(t.tick(), Some(0.35));
        assert_eq!(t.tick(), None);
    }

    #[test]
    fn sub_epsilon_changes_are_suppressed() {
        let mut t = throttle();
        t.push(0.5);
        t.tick();

        t.push(0.5005);
        assert_eq!(t.tick(), None);
        // Suppression does not shift the reference value.
        assert_eq!(t.latest(), 0.5);

        t.push(0.502);
        assert_eq!(t.tick(), Some(0.502));
    }

    #[test]
    fn values_are_clamped_to_unit_range() {
        let mut t = throttle();
        t.push(1.7);
        assert_eq!(t.tick(), Some(1.0));
        t.push(-0.3);
        assert_eq!(t.tick(), Some(0.0));
    }

    #[test]
    fn entrance_gate_flips_past_the_threshold() {
        let mut t = throttle();
        assert!(!t.entered());

        t.push(0.5);
        t.tick();
        assert!(!t.entered());

        t.push(0.51);
        t.tick();
        assert!(t.entered());
    }
}
