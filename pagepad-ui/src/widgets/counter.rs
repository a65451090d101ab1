//! Counter widget.

use log::debug;
use pagepad_store::{Store, StoreError};

use crate::surface::Surface;

/// Store key for the persisted count.
pub const COUNT_KEY: &str = "count";

/// Element id of the count display.
pub const COUNT_ID: &str = "count";

/// Element id of the increment control.
pub const INC_ID: &str = "count-inc";

/// Element id of the decrement control.
pub const DEC_ID: &str = "count-dec";

/// Element id of the reset control.
pub const RESET_ID: &str = "count-reset";

/// Widget owning the persisted count and its three controls.
///
/// The count is non-negative by construction; the decrement control is
/// disabled at the floor and decrementing there is a no-op.
pub struct CounterWidget {
    store: Store,
}

impl CounterWidget {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the stored count and render it.
    ///
    /// Absent or non-numeric stored values coerce to 0.
    pub fn init(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let saved = self.value()?;
        self.set(surface, saved)
    }

    /// Set the count: render the text, persist the decimal string, and
    /// disable the decrement control at zero.
    pub fn set(&self, surface: &mut dyn Surface, n: u64) -> Result<(), StoreError> {
        surface.set_text(COUNT_ID, &n.to_string());
        self.store.set_raw(COUNT_KEY, &n.to_string())?;
        surface.set_disabled(DEC_ID, n == 0);
        Ok(())
    }

    /// Increment click.
    pub fn increment(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let current = self.value()?;
        self.set(surface, current + 1)
    }

    /// Decrement click. A no-op at the floor rather than an error.
    pub fn decrement(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let current = self.value()?;
        self.set(surface, current.saturating_sub(1))
    }

    /// Reset click.
    pub fn reset(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        self.set(surface, 0)
    }

    /// The current count, read fresh from the store.
    ///
    /// The rendered text is a projection of this value, never the other
    /// way around.
    fn value(&self) -> Result<u64, StoreError> {
        let raw = self.store.get_raw(COUNT_KEY)?;
        Ok(raw
            .and_then(|value| {
                let parsed = value.parse::<u64>().ok();
                if parsed.is_none() {
                    debug!("stored count {value:?} is not a non-negative integer, using 0");
                }
                parsed
            })
            .unwrap_or(0))
    }
}
