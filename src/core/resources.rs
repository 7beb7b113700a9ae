//! Core domain: shared resources for pausing gameplay.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Flip a single source on or off.
    pub fn toggle(&mut self, source: impl Into<String>) {
        let source = source.into();
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_while_any_source_active() {
        let mut paused = GameplayPaused::default();
        assert!(!paused.is_paused());

        paused.toggle("menu");
        paused.toggle("console");
        paused.toggle("menu");
        assert!(paused.is_paused());

        paused.toggle("console");
        assert!(!paused.is_paused());
    }

    #[test]
    fn test_toggle_flips_one_source() {
        let mut paused = GameplayPaused::default();
        paused.toggle("manual");
        assert!(paused.is_paused());
        paused.toggle("manual");
        assert!(!paused.is_paused());
    }
}
