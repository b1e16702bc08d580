//! Joystick cursor and border display for the SSD1306 (128×64).
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in async buffered-graphics mode, and [`Renderer`], which paints the
//! border and the joystick cursor incrementally so each tick only moves the
//! pixels that changed.
//!
//! # Quick Start
//!
//! ```ignore
//! use stickscope_oled_display_rs::{DisplayConfig, OledDriver, Renderer, DEFAULT_ADDRESS};
//!
//! let mut oled = OledDriver::new(i2c, DEFAULT_ADDRESS);
//! oled.init().await?;
//! let mut renderer = Renderer::new(DisplayConfig::default());
//!
//! loop {
//!     if let Some(canvas) = oled.canvas() {
//!         renderer.render(canvas, mode.border, tick.frame.deviation)?;
//!     }
//!     oled.send().await?;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].

#![no_std]

pub mod driver;
pub mod error;
pub mod layout;
pub mod renderer;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::{OledDriver, DEFAULT_ADDRESS};
pub use error::OledError;
pub use layout::{border_overlaps, border_plan, cursor_position, DisplayConfig, BORDER_RECTS};
pub use renderer::{stroke_rect, Renderer};
