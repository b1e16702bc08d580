//! Per-tick orchestration of the sensor → state → output pipeline.
//!
//! [`ControlLoop`] owns the pieces that persist across ticks (calibration,
//! brightness mapping, diagnostics throttle) and turns one pair of ADC
//! samples plus one [`ModeState`] snapshot into a [`Tick`]. The firmware
//! does the I/O around it:
//!
//! ```text
//! loop {
//!     raw   = adc.read(x), adc.read(y)
//!     mode  = shared_mode.snapshot()        // once per tick
//!     tick  = control.step(raw, mode, now)
//!     pwm   ← tick.duty
//!     oled  ← renderer.render(mode.border, tick.frame.deviation); flush
//!     if tick.diagnostics_due { log snapshot }
//!     sleep(tick_period)
//! }
//! ```

use crate::axis::AxisPair;
use crate::brightness::BrightnessMapper;
use crate::calibration::{Calibration, JoystickFrame};
use crate::config::ControlConfig;
use crate::diagnostics::{DiagnosticSnapshot, DiagnosticsThrottle};
use crate::mode::ModeState;

/// Output of one [`ControlLoop::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Raw, calibrated and mapped joystick values.
    pub frame: JoystickFrame,
    /// PWM compare values: `x` for the red LED, `y` for the blue LED.
    pub duty: AxisPair<u16>,
    /// Mode snapshot this tick was computed from.
    pub mode: ModeState,
    /// Whether a diagnostic snapshot should be emitted this tick.
    pub diagnostics_due: bool,
}

/// State carried between ticks of the main loop.
pub struct ControlLoop {
    calibration: Calibration,
    brightness: BrightnessMapper,
    throttle: DiagnosticsThrottle,
}

impl ControlLoop {
    /// Build the loop around a baseline captured at startup.
    pub fn new(baseline: AxisPair<u16>, config: &ControlConfig) -> Self {
        Self {
            calibration: Calibration::new(baseline, config.dead_zone),
            brightness: BrightnessMapper::new(config.pwm_top),
            throttle: DiagnosticsThrottle::new(config.diagnostics_period_ms),
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn brightness(&self) -> &BrightnessMapper {
        &self.brightness
    }

    /// Process one pair of samples against a mode snapshot taken at `now_ms`.
    pub fn step(&mut self, raw: AxisPair<u16>, mode: ModeState, now_ms: u64) -> Tick {
        let frame = self.calibration.process(raw);
        let duty = self
            .brightness
            .duties(frame.magnitude, mode.brightness_enabled);

        Tick {
            frame,
            duty,
            mode,
            diagnostics_due: self.throttle.due(now_ms),
        }
    }

    /// Assemble the diagnostic snapshot for `tick` with the cursor the
    /// renderer placed.
    pub fn snapshot(&self, tick: &Tick, cursor: (i32, i32)) -> DiagnosticSnapshot {
        DiagnosticSnapshot {
            frame: tick.frame,
            cursor,
            duty_percent: tick.duty.map(|d| self.brightness.percent(d)),
            border: tick.mode.border,
            brightness_enabled: tick.mode.brightness_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{BorderStyle, InputSource, SharedMode};

    const CENTRE: AxisPair<u16> = AxisPair::new(2048, 2048);

    fn enabled_mode() -> ModeState {
        ModeState {
            brightness_enabled: true,
            ..ModeState::default()
        }
    }

    #[test]
    fn centred_stick_gives_zero_duty_either_way() {
        let mut control = ControlLoop::new(CENTRE, &ControlConfig::default());

        let off = control.step(CENTRE, ModeState::default(), 0);
        assert_eq!(off.frame.deviation, AxisPair::new(0, 0));
        assert_eq!(off.frame.magnitude, AxisPair::new(0, 0));
        assert_eq!(off.duty, AxisPair::new(0, 0));

        let on = control.step(CENTRE, enabled_mode(), 50);
        assert_eq!(on.duty, AxisPair::new(0, 0));
    }

    #[test]
    fn deflection_drives_duty_only_when_enabled() {
        let mut control = ControlLoop::new(CENTRE, &ControlConfig::default());
        let raw = AxisPair::new(2078, 2048);

        let off = control.step(raw, ModeState::default(), 0);
        assert_eq!(off.frame.magnitude, AxisPair::new(30, 0));
        assert_eq!(off.duty, AxisPair::new(0, 0));

        let on = control.step(raw, enabled_mode(), 50);
        assert_eq!(on.duty, AxisPair::new(60, 0));
    }

    #[test]
    fn diagnostics_due_once_per_second_of_ticks() {
        let mut control = ControlLoop::new(CENTRE, &ControlConfig::default());
        let due = (0..=60u64)
            .map(|i| control.step(CENTRE, ModeState::default(), i * 50))
            .filter(|t| t.diagnostics_due)
            .count();
        assert_eq!(due, 3);
    }

    #[test]
    fn snapshot_reports_percent_and_mode() {
        let mut control = ControlLoop::new(CENTRE, &ControlConfig::default());
        let mode = ModeState {
            border: BorderStyle::Triple,
            ..enabled_mode()
        };
        let tick = control.step(AxisPair::new(3072, 2048), mode, 1_000);
        let snap = control.snapshot(&tick, (75, 28));

        assert_eq!(snap.frame.magnitude, AxisPair::new(1024, 0));
        assert_eq!(snap.duty_percent, AxisPair::new(50, 0));
        assert_eq!(snap.cursor, (75, 28));
        assert_eq!(snap.border, BorderStyle::Triple);
        assert!(snap.brightness_enabled);
    }

    #[test]
    fn router_toggle_reaches_next_tick() {
        let mode = SharedMode::new(ControlConfig::default().initial_mode());
        let mut control = ControlLoop::new(CENTRE, &ControlConfig::default());
        let raw = AxisPair::new(2048, 1048);

        assert_eq!(control.step(raw, mode.snapshot(), 500).duty, AxisPair::new(0, 0));
        mode.handle_edge(InputSource::BrightnessButton, 600);
        assert_eq!(
            control.step(raw, mode.snapshot(), 650).duty,
            AxisPair::new(0, 2000)
        );
    }

    #[test]
    fn loop_is_built_from_config() {
        let config = ControlConfig {
            dead_zone: 12,
            pwm_top: 2048,
            ..ControlConfig::default()
        };
        let control = ControlLoop::new(AxisPair::new(2000, 2100), &config);

        assert_eq!(control.calibration().baseline(), AxisPair::new(2000, 2100));
        assert_eq!(control.calibration().dead_zone(), 12);
        assert_eq!(control.brightness().top(), 2048);
    }
}
