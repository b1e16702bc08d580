use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::source::InputSource;
use super::state::{EdgeOutcome, ModeState};

/// [`ModeState`] behind a critical-section mutex.
///
/// Created once at startup and shared by `&'static` reference between the
/// input router and the control loop. Every access is a single short
/// critical section with no I/O inside, so it is safe to call from an
/// interrupt handler as well as from a task.
///
/// # Example
///
/// ```
/// use stickscope::{EdgeOutcome, InputSource, ModeState, SharedMode};
///
/// let mode = SharedMode::new(ModeState::default());
/// assert_eq!(
///     mode.handle_edge(InputSource::BrightnessButton, 1_000),
///     EdgeOutcome::BrightnessToggled { enabled: true },
/// );
/// assert!(mode.snapshot().brightness_enabled);
/// ```
pub struct SharedMode {
    inner: Mutex<CriticalSectionRawMutex, Cell<ModeState>>,
}

impl SharedMode {
    pub const fn new(initial: ModeState) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Debounce and apply one edge atomically.
    ///
    /// The debounce decision and the resulting update are made inside the
    /// same critical section, so two contexts racing on edges can never both
    /// pass the gate.
    pub fn handle_edge(&self, source: InputSource, now_ms: u64) -> EdgeOutcome {
        let outcome = self.inner.lock(|cell| {
            let mut state = cell.get();
            let outcome = state.apply_edge(source, now_ms);
            cell.set(state);
            outcome
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("edge {} at {} ms -> {}", source, now_ms, outcome);

        outcome
    }

    /// Consistent copy of the whole state.
    ///
    /// The control loop calls this exactly once per tick and reads every
    /// field from the returned copy.
    pub fn snapshot(&self) -> ModeState {
        self.inner.lock(Cell::get)
    }
}
