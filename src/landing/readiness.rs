/// Named landing nodes the intro can't start without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Nebula,
    Title,
    CallToAction,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Nebula, Slot::Title, Slot::CallToAction];
}

/// Resolves once, when every required slot has been mounted.
#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    ready: Vec<Slot>,
    resolved: bool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once: on the call that completes the set.
    pub fn mark_ready(&mut self, slot: Slot) -> bool {
        if !self.ready.contains(&slot) {
            self.ready.push(slot);
        }
        if self.resolved || Slot::ALL.iter().any(|s| !self.ready.contains(s)) {
            return false;
        }
        self.resolved = true;
        true
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn missing(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|s| !self.ready.contains(s))
            .collect()
    }
}
