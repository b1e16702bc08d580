//! SSD1306 wrapper in async buffered-graphics mode.
//!
//! The frame buffer lives in RAM and is never cleared between ticks: the
//! renderer paints only what changed and [`OledDriver::send()`] pushes the
//! accumulated dirty region to the panel in one transfer.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;

/// Default 7-bit I2C address of the SSD1306 module.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Concrete display type behind [`OledDriver`].
pub type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for the 128×64 SSD1306 panel over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] builds the driver without touching the bus.
/// 2. [`OledDriver::init()`] configures the panel and blanks it.
/// 3. Draw through [`OledDriver::canvas()`]; nothing reaches the panel yet.
/// 4. [`OledDriver::send()`] transfers the changed part of the buffer.
///
/// ```no_run
/// use stickscope_oled_display_rs::{OledDriver, DEFAULT_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, DEFAULT_ADDRESS);
/// oled.init().await.unwrap();
/// oled.send().await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    ready: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Wrap `i2c` for the panel at `address`. No bus traffic.
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            ready: false,
        }
    }

    /// Send the SSD1306 init sequence, then a blank frame.
    ///
    /// # Errors
    ///
    /// [`OledError::InitializationFailed`] if either step is rejected; the
    /// driver stays unusable until a later call succeeds.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(OledError::InitializationFailed)?;
        self.display.clear_buffer();
        self.display
            .flush()
            .await
            .map_err(OledError::InitializationFailed)?;
        self.ready = true;
        Ok(())
    }

    /// Draw target for `embedded-graphics`, or `None` before init.
    ///
    /// Drawing only edits the RAM buffer.
    pub fn canvas(&mut self) -> Option<&mut Display<I2C>> {
        self.ready.then_some(&mut self.display)
    }

    /// Transfer the pixels changed since the previous send.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before init, [`OledError::Transfer`]
    /// on a bus failure.
    pub async fn send(&mut self) -> Result<(), OledError> {
        if !self.ready {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }
}
