//! Periodic diagnostic snapshot.

use crate::axis::AxisPair;
use crate::calibration::JoystickFrame;
use crate::mode::BorderStyle;

/// Every quantity the control loop derives in one tick.
///
/// Emitted over the diagnostic channel at most once per
/// [`DiagnosticsThrottle`] period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticSnapshot {
    /// Raw, calibrated and mapped joystick values.
    pub frame: JoystickFrame,
    /// Top-left corner of the cursor square, in pixels.
    pub cursor: (i32, i32),
    /// Red (`x`) and blue (`y`) duty as a percentage of the PWM top.
    pub duty_percent: AxisPair<u32>,
    /// Border style in effect this tick.
    pub border: BorderStyle,
    /// Whether the red/blue LEDs are following the joystick.
    pub brightness_enabled: bool,
}

/// Wall-clock gate for diagnostic output.
///
/// Measured on the monotonic clock rather than by counting loop iterations,
/// so a slow display flush does not stretch the reporting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticsThrottle {
    period_ms: u64,
    last_emit_ms: u64,
}

impl DiagnosticsThrottle {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_emit_ms: 0,
        }
    }

    /// Returns `true` when at least `period_ms` has passed since the last
    /// `true`, and restarts the period from `now_ms`.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_emit_ms) >= self.period_ms {
            self.last_emit_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_report_waits_one_period_after_boot() {
        let mut throttle = DiagnosticsThrottle::new(1000);
        assert!(!throttle.due(0));
        assert!(!throttle.due(999));
        assert!(throttle.due(1000));
    }

    #[test]
    fn reports_at_most_once_per_period() {
        let mut throttle = DiagnosticsThrottle::new(1000);
        let reports = (0..=5_000u64)
            .step_by(50)
            .filter(|&t| throttle.due(t))
            .count();
        assert_eq!(reports, 5);
    }

    #[test]
    fn slow_ticks_report_on_every_late_tick() {
        let mut throttle = DiagnosticsThrottle::new(1000);
        assert!(throttle.due(1_700));
        assert!(!throttle.due(2_600));
        assert!(throttle.due(2_700));
        assert!(throttle.due(4_100));
    }
}
