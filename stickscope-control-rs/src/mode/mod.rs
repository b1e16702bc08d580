//! Shared mode state and the debounced input router.
//!
//! Three push-buttons feed the router. Each accepted falling edge performs
//! one read-modify-write of [`ModeState`]:
//!
//! ```text
//! BrightnessButton (A) ──► brightness_enabled = !brightness_enabled
//! ModeButton (stick)   ──► border = border.next(), indicator_enabled = !indicator_enabled
//! ReflashButton (B)    ──► EdgeOutcome::Reflash (caller never returns)
//! ```
//!
//! Edges closer than the debounce window to the previous accepted edge are
//! dropped without touching the state. With [`DebouncePolicy::Shared`] one
//! timestamp gates all three buttons, so a press of A swallows a press of B
//! that follows within the window.
//!
//! [`SharedMode`] wraps the state in a critical-section mutex so the router
//! can run in interrupt or task context while the control loop takes one
//! consistent [`snapshot`](SharedMode::snapshot) per tick.

mod border;
mod debounce;
mod shared;
mod source;
mod state;

pub use border::BorderStyle;
pub use debounce::{DebounceGate, DebouncePolicy};
pub use shared::SharedMode;
pub use source::InputSource;
pub use state::{EdgeOutcome, ModeState};

/// Minimum spacing between accepted edges, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 300;
