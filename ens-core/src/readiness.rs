//! Readiness latch gating locale-dependent rendering.

/// One-way readiness latch for locale-dependent rendering.
///
/// A page is ready once the route locale has been resolved and the first
/// synchronization pass has completed. It never becomes un-ready again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadinessGate {
    resolved: bool,
    synchronized: bool,
}

impl ReadinessGate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolved: false,
            synchronized: false,
        }
    }

    pub const fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    pub const fn mark_synchronized(&mut self) {
        self.synchronized = true;
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.resolved && self.synchronized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_steps() {
        let mut gate = ReadinessGate::new();
        assert!(!gate.is_ready());
        gate.mark_synchronized();
        assert!(!gate.is_ready());
        gate.mark_resolved();
        assert!(gate.is_ready());
    }

    #[test]
    fn stays_ready_once_ready() {
        let mut gate = ReadinessGate::default();
        gate.mark_resolved();
        gate.mark_synchronized();
        gate.mark_resolved();
        assert!(gate.is_ready());
    }
}
