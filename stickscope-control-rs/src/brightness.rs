//! Joystick magnitude → LED duty mapping.

use crate::axis::AxisPair;

/// Default PWM counter top (wrap) for the red/blue LED slice.
pub const DEFAULT_PWM_TOP: u16 = 4096;

/// Maps mapped joystick magnitudes to PWM compare values.
///
/// The red LED follows the X axis and the blue LED follows the Y axis. Each
/// duty is `magnitude * 2`, saturated at `top`, or `0` while the output is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessMapper {
    top: u16,
}

impl Default for BrightnessMapper {
    fn default() -> Self {
        Self::new(DEFAULT_PWM_TOP)
    }
}

impl BrightnessMapper {
    /// Scale applied to the magnitude before saturation.
    pub const GAIN: u32 = 2;

    pub const fn new(top: u16) -> Self {
        Self { top }
    }

    /// Highest compare value this mapper will emit.
    pub fn top(&self) -> u16 {
        self.top
    }

    /// Compare value for one channel.
    pub fn duty(&self, magnitude: u32, enabled: bool) -> u16 {
        if !enabled {
            return 0;
        }
        let scaled = magnitude.saturating_mul(Self::GAIN);
        // Saturate at the wrap value rather than letting the counter wrap.
        scaled.min(u32::from(self.top)) as u16
    }

    /// Compare values for both channels: `x` drives red, `y` drives blue.
    pub fn duties(&self, magnitude: AxisPair<u32>, enabled: bool) -> AxisPair<u16> {
        magnitude.map(|m| self.duty(m, enabled))
    }

    /// `duty` as a whole percentage of `top`, for diagnostics.
    pub fn percent(&self, duty: u16) -> u32 {
        if self.top == 0 {
            return 0;
        }
        u32::from(duty) * 100 / u32::from(self.top)
    }
}
