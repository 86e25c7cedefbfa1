use serde::{Deserialize, Serialize};

use crate::carousel::CarouselState;

/// Per-panel output read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFrame {
    pub index: usize,
    /// Laid-out x position: panel slot plus the interpolated strip offset.
    pub x: f32,
    /// Exactly one panel is active, `index == current_index`.
    pub active: bool,
    /// Whether the entrance transition is "in", gated on hero progress.
    pub entered: bool,
}

/// Complete pure-data description of one rendered frame of the carousel.
///
/// The renderer and indicator UI read these fields; nothing here is
/// invocable, so a consumer cannot mutate carousel state by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripFrame {
    /// Interpolated horizontal displacement of the whole strip.
    pub offset: f32,
    pub panels: Vec<PanelFrame>,
    pub current_index: usize,
    pub can_advance: bool,
    pub can_retreat: bool,
    /// Compact-mode affordances: side arrows and swipe, no indicator bar.
    pub compact: bool,
    pub in_view: bool,
    /// Zero-padded position readout, e.g. "02 / 04".
    pub counter: String,
    /// Fill fraction for the bottom progress bar.
    pub progress_fraction: f32,
}

impl StripFrame {
    /// Assembles a frame from the controller state and the live inputs.
    pub fn compose(
        state: &CarouselState,
        offset: f32,
        entered: bool,
        compact: bool,
        in_view: bool,
    ) -> Self {
        let panels = (0..state.panel_count)
            .map(|index| PanelFrame {
                index,
                x: index as f32 * state.viewport_width + offset,
                active: index == state.current_index,
                entered,
            })
            .collect();

        Self {
            offset,
            panels,
            current_index: state.current_index,
            can_advance: state.can_advance,
            can_retreat: state.can_retreat,
            compact,
            in_view,
            counter: counter_label(state.current_index, state.panel_count),
            progress_fraction: (state.current_index + 1) as f32 / state.panel_count as f32,
        }
    }
}

/// Formats the "current / total" readout with two-digit padding.
fn counter_label(index: usize, count: usize) -> String {
    format!("{:02} / {:02}", index + 1, count)
}
