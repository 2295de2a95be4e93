use super::sequencer::SequencerState;

const HIDDEN_CLASS: &str = "opacity-0 pointer-events-none";
const VISIBLE_CLASS: &str = "opacity-100";

/// Keeps the main content mounted while the intro plays; only its classes
/// change so sections keep their internal state and scroll anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentGate {
    visible: bool,
}

impl ContentGate {
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_interactive(&self) -> bool {
        self.visible
    }

    pub fn class(&self) -> &'static str {
        if self.visible {
            VISIBLE_CLASS
        } else {
            HIDDEN_CLASS
        }
    }
}

impl From<SequencerState> for ContentGate {
    fn from(state: SequencerState) -> Self {
        Self {
            visible: state == SequencerState::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_completed() {
        for state in [
            SequencerState::Idle,
            SequencerState::Looping,
            SequencerState::Exiting,
        ] {
            let gate = ContentGate::from(state);
            assert!(!gate.is_visible());
            assert!(gate.class().contains("pointer-events-none"));
        }
        let gate = ContentGate::from(SequencerState::Completed);
        assert!(gate.is_interactive());
        assert_eq!(gate.class(), "opacity-100");
    }

    #[test]
    fn test_toggle() {
        let mut gate = ContentGate::default();
        gate.set_visible(true);
        assert!(gate.is_visible());
        gate.set_visible(false);
        assert_eq!(gate.class(), "opacity-0 pointer-events-none");
    }
}
