//! Tunable constants for the control loop.

use crate::brightness::DEFAULT_PWM_TOP;
use crate::mode::{DebounceGate, DebouncePolicy, ModeState, DEBOUNCE_WINDOW_MS};

/// Configuration for the control loop and input router.
///
/// [`ControlConfig::default()`] matches the shipped board: 30-count dead
/// zone, 300 ms shared debounce, 50 ms tick, diagnostics once a second and a
/// PWM wrap of 4096.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    /// Absolute deviations below this are treated as centred. Default: 30.
    pub dead_zone: u32,
    /// Minimum spacing of accepted button edges. Default: 300 ms.
    pub debounce_window_ms: u64,
    /// Which timestamp button edges are measured against. Default: shared.
    pub debounce_policy: DebouncePolicy,
    /// Sleep between loop iterations. Default: 50 ms.
    pub tick_period_ms: u64,
    /// Minimum spacing of diagnostic snapshots. Default: 1000 ms.
    pub diagnostics_period_ms: u64,
    /// PWM counter top for the red/blue LEDs. Default: 4096.
    pub pwm_top: u16,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            dead_zone: 30,
            debounce_window_ms: DEBOUNCE_WINDOW_MS,
            debounce_policy: DebouncePolicy::Shared,
            tick_period_ms: 50,
            diagnostics_period_ms: 1000,
            pwm_top: DEFAULT_PWM_TOP,
        }
    }
}

impl ControlConfig {
    /// Power-on mode state using this configuration's debounce settings.
    pub fn initial_mode(&self) -> ModeState {
        ModeState::with_debounce(DebounceGate::new(
            self.debounce_window_ms,
            self.debounce_policy,
        ))
    }
}
