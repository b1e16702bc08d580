use super::border::BorderStyle;
use super::debounce::DebounceGate;
use super::source::InputSource;

/// Result of routing one edge through [`ModeState::apply_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Inside the debounce window; nothing changed.
    Debounced,
    /// The brightness output was switched to `enabled`.
    BrightnessToggled { enabled: bool },
    /// The border advanced and the indicator flipped. `indicator` is the
    /// level the green LED must be driven to right away.
    ModeAdvanced { border: BorderStyle, indicator: bool },
    /// Reboot into the USB bootloader. The caller must not resume normal
    /// operation after seeing this.
    Reflash,
}

/// Mode flags shared between the input router and the control loop.
///
/// `Copy` on purpose: the control loop takes a whole-struct copy once per
/// tick and never holds a reference into the shared cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeState {
    /// Current border style, advanced by the mode button.
    pub border: BorderStyle,
    /// Whether the red/blue LEDs follow the joystick.
    pub brightness_enabled: bool,
    /// Level of the green indicator LED.
    pub indicator_enabled: bool,
    /// Edge timing.
    pub debounce: DebounceGate,
}

impl ModeState {
    /// Power-on state with a custom debounce gate.
    pub const fn with_debounce(debounce: DebounceGate) -> Self {
        Self {
            border: BorderStyle::Single,
            brightness_enabled: false,
            indicator_enabled: false,
            debounce,
        }
    }

    /// Route one falling edge from `source` observed at `now_ms`.
    ///
    /// The debounce check and the state update happen together; a rejected
    /// edge leaves every field, timestamps included, unchanged.
    pub fn apply_edge(&mut self, source: InputSource, now_ms: u64) -> EdgeOutcome {
        if !self.debounce.admit(source, now_ms) {
            return EdgeOutcome::Debounced;
        }

        match source {
            InputSource::BrightnessButton => {
                self.brightness_enabled = !self.brightness_enabled;
                EdgeOutcome::BrightnessToggled {
                    enabled: self.brightness_enabled,
                }
            }
            InputSource::ModeButton => {
                self.indicator_enabled = !self.indicator_enabled;
                self.border = self.border.next();
                EdgeOutcome::ModeAdvanced {
                    border: self.border,
                    indicator: self.indicator_enabled,
                }
            }
            InputSource::ReflashButton => EdgeOutcome::Reflash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DebouncePolicy;

    use InputSource::*;

    #[test]
    fn power_on_state() {
        let state = ModeState::default();
        assert_eq!(state.border, BorderStyle::Single);
        assert!(!state.brightness_enabled);
        assert!(!state.indicator_enabled);
        assert_eq!(state.debounce.last_accepted_ms(ModeButton), 0);
    }

    #[test]
    fn mode_event_advances_border_and_flips_indicator() {
        let mut state = ModeState::default();
        let outcome = state.apply_edge(ModeButton, 1_000);
        assert_eq!(
            outcome,
            EdgeOutcome::ModeAdvanced {
                border: BorderStyle::Double,
                indicator: true
            }
        );
        assert_eq!(state.border, BorderStyle::Double);
        assert!(state.indicator_enabled);
        assert!(!state.brightness_enabled);
    }

    #[test]
    fn brightness_event_only_touches_brightness() {
        let mut state = ModeState::default();
        assert_eq!(
            state.apply_edge(BrightnessButton, 1_000),
            EdgeOutcome::BrightnessToggled { enabled: true }
        );
        assert_eq!(
            state.apply_edge(BrightnessButton, 2_000),
            EdgeOutcome::BrightnessToggled { enabled: false }
        );
        assert_eq!(state.border, BorderStyle::Single);
        assert!(!state.indicator_enabled);
    }

    #[test]
    fn reflash_is_reported_and_changes_no_flags() {
        let mut state = ModeState::default();
        assert_eq!(state.apply_edge(ReflashButton, 1_000), EdgeOutcome::Reflash);
        assert_eq!(state.border, BorderStyle::Single);
        assert!(!state.brightness_enabled);
        assert!(!state.indicator_enabled);
    }

    #[test]
    fn four_spaced_mode_events_return_to_start() {
        let mut state = ModeState::default();
        let mut seen = [BorderStyle::Single; 4];
        for (i, slot) in seen.iter_mut().enumerate() {
            state.apply_edge(ModeButton, 1_000 + 400 * i as u64);
            *slot = state.border;
        }
        assert_eq!(
            seen,
            [
                BorderStyle::Double,
                BorderStyle::Triple,
                BorderStyle::None,
                BorderStyle::Single
            ]
        );
        assert!(!state.indicator_enabled);
    }

    #[test]
    fn rapid_mode_events_advance_once() {
        let mut state = ModeState::default();
        assert!(matches!(
            state.apply_edge(ModeButton, 1_000),
            EdgeOutcome::ModeAdvanced { .. }
        ));
        assert_eq!(state.apply_edge(ModeButton, 1_100), EdgeOutcome::Debounced);
        assert_eq!(state.apply_edge(ModeButton, 1_250), EdgeOutcome::Debounced);
        assert_eq!(state.border, BorderStyle::Double);
        assert!(state.indicator_enabled);
    }

    #[test]
    fn two_events_inside_window_make_one_transition() {
        let mut state = ModeState::default();
        state.apply_edge(ModeButton, 5_000);
        let after_first = state;
        assert_eq!(state.apply_edge(ModeButton, 5_299), EdgeOutcome::Debounced);
        assert_eq!(state, after_first);
    }

    #[test]
    fn border_stays_in_range_under_any_event_rate() {
        let mut state = ModeState::default();
        let mut accepted = 0usize;
        for t in (0..20_000u64).step_by(37) {
            if let EdgeOutcome::ModeAdvanced { border, .. } = state.apply_edge(ModeButton, t) {
                accepted += 1;
                assert_eq!(border.index(), accepted % 4);
            }
            assert!(state.border.index() < 4);
        }
        assert!(accepted > 0);
    }

    #[test]
    fn shared_window_swallows_cross_source_edge() {
        let mut state = ModeState::default();
        state.apply_edge(BrightnessButton, 1_000);
        assert_eq!(state.apply_edge(ModeButton, 1_100), EdgeOutcome::Debounced);
        assert_eq!(state.border, BorderStyle::Single);
    }

    #[test]
    fn per_source_window_lets_cross_source_edge_through() {
        let mut state =
            ModeState::with_debounce(DebounceGate::new(300, DebouncePolicy::PerSource));
        state.apply_edge(BrightnessButton, 1_000);
        assert!(matches!(
            state.apply_edge(ModeButton, 1_100),
            EdgeOutcome::ModeAdvanced {
                border: BorderStyle::Double,
                ..
            }
        ));
        assert!(state.brightness_enabled);
    }

    #[test]
    fn accepted_reflash_edge_still_arms_shared_window() {
        let mut state = ModeState::default();
        state.apply_edge(ReflashButton, 1_000);
        assert_eq!(state.apply_edge(BrightnessButton, 1_200), EdgeOutcome::Debounced);
    }
}
