use super::source::InputSource;
use super::DEBOUNCE_WINDOW_MS;

/// Which timestamp an edge is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
    /// One timestamp for all sources. An accepted edge on any button blocks
    /// every button for the window.
    #[default]
    Shared,
    /// One timestamp per source. Buttons never block each other.
    PerSource,
}

/// Time gate for edge events.
///
/// Timestamps are milliseconds on the monotonic clock. All slots start at
/// `0`, so edges in the first window after boot are rejected as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    window_ms: u64,
    policy: DebouncePolicy,
    last_accepted_ms: [u64; InputSource::COUNT],
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_MS, DebouncePolicy::Shared)
    }
}

impl DebounceGate {
    pub const fn new(window_ms: u64, policy: DebouncePolicy) -> Self {
        Self {
            window_ms,
            policy,
            last_accepted_ms: [0; InputSource::COUNT],
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Timestamp of the last edge accepted for `source` (or for any source
    /// under [`DebouncePolicy::Shared`]).
    pub fn last_accepted_ms(&self, source: InputSource) -> u64 {
        self.last_accepted_ms[self.slot(source)]
    }

    /// Accept or reject an edge seen at `now_ms`.
    ///
    /// Accepted when at least `window_ms` has elapsed since the last accepted
    /// edge in the same slot; the slot then records `now_ms`. A rejected edge
    /// leaves the gate untouched, so a burst of bounces cannot extend the
    /// window. A clock reading older than the slot is treated as elapsed 0.
    pub fn admit(&mut self, source: InputSource, now_ms: u64) -> bool {
        let slot = self.slot(source);
        let elapsed = now_ms.saturating_sub(self.last_accepted_ms[slot]);
        if elapsed < self.window_ms {
            return false;
        }
        self.last_accepted_ms[slot] = now_ms;
        true
    }

    fn slot(&self, source: InputSource) -> usize {
        match self.policy {
            DebouncePolicy::Shared => 0,
            DebouncePolicy::PerSource => source.index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use InputSource::*;

    #[test]
    fn rejects_edges_inside_first_window_after_boot() {
        let mut gate = DebounceGate::default();
        assert!(!gate.admit(ModeButton, 0));
        assert!(!gate.admit(ModeButton, 299));
        assert!(gate.admit(ModeButton, 300));
    }

    #[test]
    fn window_boundary_is_accepted() {
        let mut gate = DebounceGate::default();
        assert!(gate.admit(ModeButton, 1_000));
        assert!(!gate.admit(ModeButton, 1_299));
        assert!(gate.admit(ModeButton, 1_300));
    }

    #[test]
    fn rejected_edges_do_not_extend_the_window() {
        let mut gate = DebounceGate::default();
        assert!(gate.admit(ModeButton, 1_000));
        for t in (1_010..1_300).step_by(10) {
            assert!(!gate.admit(ModeButton, t));
        }
        assert_eq!(gate.last_accepted_ms(ModeButton), 1_000);
        assert!(gate.admit(ModeButton, 1_300));
    }

    #[test]
    fn shared_policy_blocks_other_sources() {
        let mut gate = DebounceGate::new(300, DebouncePolicy::Shared);
        assert!(gate.admit(BrightnessButton, 1_000));
        assert!(!gate.admit(ReflashButton, 1_100));
        assert!(!gate.admit(ModeButton, 1_200));
        assert_eq!(gate.last_accepted_ms(ModeButton), 1_000);
    }

    #[test]
    fn per_source_policy_keeps_sources_independent() {
        let mut gate = DebounceGate::new(300, DebouncePolicy::PerSource);
        assert!(gate.admit(BrightnessButton, 1_000));
        assert!(gate.admit(ModeButton, 1_050));
        assert!(gate.admit(ReflashButton, 1_100));
        assert!(!gate.admit(ModeButton, 1_200));
        assert!(gate.admit(BrightnessButton, 1_300));
        assert_eq!(gate.last_accepted_ms(ModeButton), 1_050);
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut gate = DebounceGate::default();
        assert!(gate.admit(ModeButton, 5_000));
        assert!(!gate.admit(ModeButton, 10));
    }
}
