/// The three push-buttons that raise edge events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// Button A: toggles the red/blue LED brightness output.
    BrightnessButton,
    /// Joystick push switch: advances the border and toggles the green LED.
    ModeButton,
    /// Button B: reboots into the USB bootloader.
    ReflashButton,
}

impl InputSource {
    /// Number of distinct sources.
    pub const COUNT: usize = 3;

    /// Every source, in index order.
    pub const ALL: [InputSource; Self::COUNT] = [
        InputSource::BrightnessButton,
        InputSource::ModeButton,
        InputSource::ReflashButton,
    ];

    /// Stable index for per-source bookkeeping, `0..COUNT`.
    pub fn index(self) -> usize {
        match self {
            InputSource::BrightnessButton => 0,
            InputSource::ModeButton => 1,
            InputSource::ReflashButton => 2,
        }
    }
}
