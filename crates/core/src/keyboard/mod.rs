use crate::{carousel::NavCommand, config::KeyboardConfig};

/// Keys the navigator understands. Everything else never reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// Interprets arrow keys into navigation commands, but only while the
/// carousel section is substantially visible. Keys pressed while the user
/// is elsewhere on the page must not hijack navigation.
#[derive(Debug)]
pub struct KeyboardNavigator {
    in_view: bool,
    config: KeyboardConfig,
}

impl KeyboardNavigator {
    /// Creates a navigator that starts out of view.
    pub fn new(config: KeyboardConfig) -> Self {
        Self {
            in_view: false,
            config,
        }
    }

    /// Feeds the latest visibility ratio of the carousel section, in
    /// [0, 1]. Evaluated continuously as the page scrolls, not once.
    pub fn set_visibility(&mut self, ratio: f32) {
        self.in_view = ratio >= self.config.visibility_threshold;
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    /// Maps a key press to a command, or to nothing when out of view.
    pub fn key_down(&self, key: NavKey) -> Option<NavCommand> {
        if !self.in_view {
            return None;
        }

        match key {
            NavKey::ArrowLeft => Some(NavCommand::Retreat),
            NavKey::ArrowRight => Some(NavCommand::Advance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> KeyboardNavigator {
        KeyboardNavigator::new(KeyboardConfig::default())
    }

    #[test]
    fn keys_do_nothing_while_out_of_view() {
        let n = navigator();
        assert_eq!(n.key_down(NavKey::ArrowRight), None);
        assert_eq!(n.key_down(NavKey::ArrowLeft), None);
    }

    #[test]
    fn keys_map_to_commands_while_in_view() {
        let mut n = navigator();
        n.set_visibility(0.8);
        assert_eq!(n.key_down(NavKey::ArrowRight), Some(NavCommand::Advance));
        assert_eq!(n.key_down(NavKey::ArrowLeft), Some(NavCommand::Retreat));
    }

    #[test]
    fn visibility_threshold_is_continuous() {
        let mut n = navigator();
        n.set_visibility(0.29);
        assert!(!n.is_in_view());
        n.set_visibility(0.3);
        assert!(n.is_in_view());
        n.set_visibility(0.1);
        assert!(!n.is_in_view());
    }
}
