//! Show/Hide Transitions
//!
//! The menu runs in one of two modes. Restoration at startup uses `Instant`
//! so a long list of remembered sections does not play as a cascade of
//! animations; afterwards every toggle is `Animated`.

/// Transition applied to a node's child list when it is shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    duration_ms: u32,
}

impl Transition {
    pub const INSTANT: Transition = Transition { duration_ms: 0 };

    pub fn animated(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    pub fn duration_ms(self) -> u32 {
        self.duration_ms
    }

    pub fn is_instant(self) -> bool {
        self.duration_ms == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    #[default]
    Instant,
    Animated,
}

impl TransitionMode {
    pub fn transition(self, animation_ms: u32) -> Transition {
        match self {
            TransitionMode::Instant => Transition::INSTANT,
            TransitionMode::Animated => Transition::animated(animation_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_durations() {
        assert!(TransitionMode::Instant.transition(400).is_instant());
        assert_eq!(TransitionMode::Animated.transition(400).duration_ms(), 400);
        assert_eq!(TransitionMode::default(), TransitionMode::Instant);
    }
}
