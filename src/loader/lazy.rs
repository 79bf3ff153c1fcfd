use std::sync::{Mutex, OnceLock, PoisonError};

/// One-time, fallible initialization of a shared value.
///
/// Concurrent first callers serialize on an internal mutex, so the
/// initializer runs at most once successfully and every caller sees the same
/// fully built value. A failed initializer caches nothing: its error goes
/// back to that caller and the next caller runs initialization again.
pub struct LazyLoader<T> {
    cell: OnceLock<T>,
    init: Mutex<()>,
}

impl<T> Default for LazyLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LazyLoader<T> {
    pub const fn new() -> Self {
        LazyLoader {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The value, if initialization has already succeeded.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        // The mutex guards no data; a panic in an earlier initializer leaves
        // nothing half-built behind it.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let value = init()?;
        Ok(self.cell.get_or_init(|| value))
    }
}
