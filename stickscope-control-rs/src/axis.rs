/// A value per joystick axis.
///
/// Used for raw samples (`u16`), calibrated deviations (`i32`), mapped
/// magnitudes (`u32`) and LED duty values (`u16`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPair<T> {
    /// Horizontal axis (VRX).
    pub x: T,
    /// Vertical axis (VRY).
    pub y: T,
}

impl<T> AxisPair<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Apply `f` to both axes.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> AxisPair<U> {
        AxisPair {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Combine two pairs axis by axis.
    pub fn zip_with<U, V>(self, other: AxisPair<U>, mut f: impl FnMut(T, U) -> V) -> AxisPair<V> {
        AxisPair {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }
}
