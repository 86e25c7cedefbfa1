use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Direction of a single-step navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Advance,
    Retreat,
}

/// Command produced by any of the input sources (gesture, keyboard,
/// indicator taps). All of them funnel through [`CarouselController::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
    Jump(usize),
}

/// Snapshot of the discrete carousel state. Derived flags are recomputed on
/// every index or viewport change, never stored stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub current_index: usize,
    pub panel_count: usize,
    pub viewport_width: f32,
    /// Horizontal displacement the panel strip should end up at.
    pub target_offset: f32,
    pub can_advance: bool,
    pub can_retreat: bool,
}

impl CarouselState {
    fn new(panel_count: usize, viewport_width: f32) -> Self {
        let mut state = Self {
            current_index: 0,
            panel_count,
            viewport_width,
            target_offset: 0.0,
            can_advance: false,
            can_retreat: false,
        };
        state.recompute();
        state
    }

    fn recompute(&mut self) {
        self.target_offset = -(self.current_index as f32) * self.viewport_width;
        self.can_retreat = self.current_index > 0;
        self.can_advance = self.current_index + 1 < self.panel_count;
    }
}

type Observer = Box<dyn FnMut(&CarouselState)>;

/// Owns the discrete index state and exposes the navigate/jump operations.
///
/// Out-of-range requests degrade to no-ops rather than errors, matching a UI
/// where the corresponding affordances are simply rendered disabled.
pub struct CarouselController {
    state: CarouselState,
    observers: Vec<Observer>,
}

impl CarouselController {
    /// Creates a controller at index 0. The panel count is fixed for the
    /// controller's lifetime and must be at least one.
    pub fn new(panel_count: usize, viewport_width: f32) -> Result<Self> {
        if panel_count == 0 {
            return Err(ShowcaseError::InvalidInput(
                "carousel requires at least one panel",
            ));
        }

        Ok(Self {
            state: CarouselState::new(panel_count, viewport_width),
            observers: Vec::new(),
        })
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Registers a callback fired after every state change. Renderers use
    /// this instead of polling; callbacks are dropped with the controller.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&CarouselState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Steps the index by one in the given direction. A request past the
    /// first or last panel is silently ignored. Returns whether the state
    /// changed so the caller can retarget the spring.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Advance if self.state.can_advance => self.state.current_index + 1,
            Direction::Retreat if self.state.can_retreat => self.state.current_index - 1,
            _ => return false,
        };

        self.set_index(next);
        true
    }

    /// Jumps directly to the requested panel, used by indicator selection.
    /// Out-of-range indices are a no-op.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.state.panel_count || index == self.state.current_index {
            return false;
        }

        self.set_index(index);
        true
    }

    /// Applies a command from any input source.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Advance => self.navigate(Direction::Advance),
            NavCommand::Retreat => self.navigate(Direction::Retreat),
            NavCommand::Jump(index) => self.jump_to(index),
        }
    }

    /// Updates the viewport width used to derive the target offset. The
    /// index is untouched; only the offset moves.
    pub fn set_viewport_width(&mut self, width: f32) {
        if (self.state.viewport_width - width).abs() <= f32::EPSILON {
            return;
        }

        self.state.viewport_width = width;
        self.state.recompute();
        self.notify();
    }

    fn set_index(&mut self, index: usize) {
        self.state.current_index = index;
        self.state.recompute();
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
