//! Movement domain: latched per-tick input intent.

/// Directional and jump intent for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// -1 (left), 0 (none) or 1 (right).
    pub direction: i8,
    /// Jump requested this tick.
    pub jump_pressed: bool,
    /// Jump button currently held.
    pub jump_held: bool,
}

impl InputFrame {
    pub fn latch_direction(&mut self, direction: i8) {
        self.direction = direction.signum();
    }

    pub fn latch_jump(&mut self, pressed: bool, held: bool) {
        self.jump_pressed = pressed;
        self.jump_held = held;
    }

    /// Consume the press edge so a stale press never fires twice.
    pub(crate) fn take_press(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_clamped_to_unit() {
        let mut frame = InputFrame::default();
        frame.latch_direction(5);
        assert_eq!(frame.direction, 1);
        frame.latch_direction(-3);
        assert_eq!(frame.direction, -1);
        frame.latch_direction(0);
        assert_eq!(frame.direction, 0);
    }

    #[test]
    fn test_press_is_consumed_but_hold_persists() {
        let mut frame = InputFrame::default();
        frame.latch_jump(true, true);
        assert!(frame.take_press());
        assert!(!frame.take_press());
        assert!(frame.jump_held);
    }
}
