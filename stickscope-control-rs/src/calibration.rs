//! Joystick calibration and dead-zone mapping.
//!
//! The baseline is a single sample pair taken at power-on with the stick at
//! rest. Every later sample is expressed as a signed deviation from it, and
//! the absolute deviation is zeroed while it stays inside the dead zone so
//! that ADC jitter around the centre never reaches the LEDs.

use crate::axis::AxisPair;

/// Signed deviation of `sample` from `baseline`.
pub fn calibrate(baseline: u16, sample: u16) -> i32 {
    i32::from(sample) - i32::from(baseline)
}

/// Absolute deviation with the dead zone applied.
///
/// Magnitudes strictly between `0` and `dead_zone` become `0`; a magnitude
/// equal to `dead_zone` passes through unchanged.
///
/// ```
/// use stickscope::calibration::map;
///
/// assert_eq!(map(-12, 30), 0);
/// assert_eq!(map(30, 30), 30);
/// assert_eq!(map(-400, 30), 400);
/// ```
pub fn map(deviation: i32, dead_zone: u32) -> u32 {
    let magnitude = deviation.unsigned_abs();
    if magnitude > 0 && magnitude < dead_zone {
        0
    } else {
        magnitude
    }
}

/// Everything derived from one pair of ADC samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickFrame {
    /// Samples as read from the converter.
    pub raw: AxisPair<u16>,
    /// `raw - baseline`, per axis.
    pub deviation: AxisPair<i32>,
    /// Dead-zone-clamped `|deviation|`, per axis.
    pub magnitude: AxisPair<u32>,
}

/// Calibration baseline plus the dead-zone threshold.
///
/// Immutable after construction; the firmware builds exactly one at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    baseline: AxisPair<u16>,
    dead_zone: u32,
}

impl Calibration {
    /// Capture `baseline` as the joystick's physical centre.
    pub const fn new(baseline: AxisPair<u16>, dead_zone: u32) -> Self {
        Self {
            baseline,
            dead_zone,
        }
    }

    pub fn baseline(&self) -> AxisPair<u16> {
        self.baseline
    }

    pub fn dead_zone(&self) -> u32 {
        self.dead_zone
    }

    /// Derive deviation and magnitude for a fresh sample pair.
    pub fn process(&self, raw: AxisPair<u16>) -> JoystickFrame {
        let deviation = self.baseline.zip_with(raw, calibrate);
        let magnitude = deviation.map(|d| map(d, self.dead_zone));
        JoystickFrame {
            raw,
            deviation,
            magnitude,
        }
    }
}
