use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the showcase engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Viewport width below which the carousel runs in compact mode.
    pub breakpoint_px: f32,
    pub spring: SpringConfig,
    pub gesture: GestureConfig,
    pub keyboard: KeyboardConfig,
    pub progress: ProgressConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            spring: SpringConfig::default(),
            gesture: GestureConfig::default(),
            keyboard: KeyboardConfig::default(),
            progress: ProgressConfig::default(),
        }
    }
}

/// Tuning constants for the damped-spring position interpolator.
///
/// The defaults settle a panel transition in roughly half a second without
/// visible oscillation. They are cosmetic, not contractual.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    /// Distance from the target below which the position snaps exactly.
    pub rest_delta: f32,
    /// Speed below which velocity counts as settled.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 50.0,
            stiffness: 400.0,
            rest_delta: 0.5,
            rest_speed: 1.0,
        }
    }
}

/// Thresholds for the touch gesture recognizer, all in pixels or px/ms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Horizontal distance that triggers a swipe on its own.
    pub swipe_distance: f32,
    /// Smaller distance that still triggers when paired with velocity.
    pub flick_distance: f32,
    /// Velocity (px/ms) qualifying the flick path.
    pub flick_velocity: f32,
    /// Distance at which a move claims the sequence as horizontal.
    pub claim_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_distance: 50.0,
            flick_distance: 30.0,
            flick_velocity: 0.5,
            claim_distance: 20.0,
        }
    }
}

/// Configuration for keyboard navigation gating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Fraction of the section that must be visible for keys to act.
    pub visibility_threshold: f32,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
        }
    }
}

/// Configuration for the externally published scroll-progress signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Minimum change from the last delivered value worth publishing.
    pub epsilon: f32,
    /// Progress beyond which panel entrance transitions switch "in".
    pub entrance_threshold: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.001,
            entrance_threshold: 0.5,
        }
    }
}
