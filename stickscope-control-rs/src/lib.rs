//! Control logic for the stickscope joystick board.
//!
//! Everything in this crate is hardware-independent and runs on the host:
//!
//! - [`calibration`] — baseline subtraction and the dead-zone mapping.
//! - [`mode`] — the shared mode state and the debounced input router.
//! - [`brightness`] — magnitude → PWM compare value for the red/blue LEDs.
//! - [`control`] — the per-tick orchestration used by the firmware loop.
//! - [`diagnostics`] — the periodic snapshot and its wall-clock throttle.
//!
//! ```text
//! ADC ──► Calibration ──► JoystickFrame ──┬──► BrightnessMapper ──► PWM
//!                                         └──► (renderer, cursor)
//! GPIO edge ──► SharedMode::handle_edge ──► ModeState ──► snapshot per tick
//! ```
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. The optional `defmt` feature derives
//! `defmt::Format` on the public types and enables debug logging.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod axis;
pub mod brightness;
pub mod calibration;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod mode;

pub use axis::AxisPair;
pub use brightness::BrightnessMapper;
pub use calibration::{calibrate, map, Calibration, JoystickFrame};
pub use config::ControlConfig;
pub use control::{ControlLoop, Tick};
pub use diagnostics::{DiagnosticSnapshot, DiagnosticsThrottle};
pub use mode::{
    BorderStyle, DebounceGate, DebouncePolicy, EdgeOutcome, InputSource, ModeState, SharedMode,
};
