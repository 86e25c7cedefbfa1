//! Touch gesture recognition for the carousel surface.
//!
//! A single-finger sequence runs Idle → Tracking → Idle. Touch-start opens a
//! session, touch-move decides whether the sequence is horizontal enough to
//! claim (suppressing default vertical scrolling), and touch-end collapses
//! the session into at most one navigation command. Swipes trigger on raw
//! distance or on a shorter, faster flick.

use crate::{carousel::NavCommand, config::GestureConfig};

/// Transient state for one in-flight touch sequence.
#[derive(Debug, Clone, Copy)]
struct GestureSession {
    start_x: f32,
    start_y: f32,
    start_ms: u64,
    claimed: bool,
}

/// Interprets single-finger touch sequences into advance/retreat commands.
///
/// The recognizer is only wired up in compact mode; the stage drops touch
/// events entirely on desktop viewports.
#[derive(Debug)]
pub struct GestureRecognizer {
    session: Option<GestureSession>,
    config: GestureConfig,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            session: None,
            config,
        }
    }

    /// Opens a tracking session. A start while one is already open replaces
    /// it; multi-finger input is out of scope.
    pub fn touch_start(&mut self, x: f32, y: f32, timestamp_ms: u64) {
        self.session = Some(GestureSession {
            start_x: x,
            start_y: y,
            start_ms: timestamp_ms,
            claimed: false,
        });
    }

    /// Feeds a move sample. Returns true when the sequence is claimed as
    /// horizontal, i.e. the caller should suppress default vertical
    /// scrolling for the rest of the sequence. The claim is sticky.
    pub fn touch_move(&mut self, x: f32, y: f32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        if !session.claimed {
            let dx = (x - session.start_x).abs();
            let dy = (y - session.start_y).abs();
            if dx > dy && dx > self.config.claim_distance {
                session.claimed = true;
            }
        }

        session.claimed
    }

    /// Closes the session, producing at most one command.
    ///
    /// `delta_x` is measured start-to-end so a leftward swipe (finger moving
    /// left, content should advance) comes out positive. Below-threshold
    /// sequences are discarded without feedback.
    pub fn touch_end(&mut self, x: f32, timestamp_ms: u64) -> Option<NavCommand> {
        let session = self.session.take()?;

        let delta_x = session.start_x - x;
        let delta_ms = timestamp_ms.saturating_sub(session.start_ms).max(1);
        let velocity = delta_x.abs() / delta_ms as f32;

        let triggered = delta_x.abs() > self.config.swipe_distance
            || (velocity > self.config.flick_velocity
                && delta_x.abs() > self.config.flick_distance);
        if !triggered {
            return None;
        }

        if delta_x > 0.0 {
            Some(NavCommand::Advance)
        } else {
            Some(NavCommand::Retreat)
        }
    }

    /// Discards any in-flight session, used when leaving compact mode or
    /// tearing the carousel down mid-gesture.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }
}
