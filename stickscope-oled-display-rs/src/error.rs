//! Error types for the OLED display.

use display_interface::DisplayError;

/// Failures reported by [`OledDriver`](crate::OledDriver).
///
/// Everything below the `ssd1306` crate (I2C NACKs, bus errors) arrives
/// wrapped in [`DisplayError`], so the enum stays non-generic.
#[derive(Debug)]
pub enum OledError {
    /// The init command sequence or the initial blank frame was not accepted.
    InitializationFailed(DisplayError),
    /// A frame transfer failed part-way.
    Transfer(DisplayError),
    /// Drawing or sending was attempted before a successful
    /// [`OledDriver::init()`](crate::OledDriver::init).
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Transfer(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::InitializationFailed(e) => {
                defmt::write!(f, "Initialization failed: {}", defmt::Debug2Format(e))
            }
            OledError::Transfer(e) => defmt::write!(f, "Transfer failed: {}", defmt::Debug2Format(e)),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
