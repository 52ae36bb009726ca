//! Process-wide settings.
//!
//! [`Settings`] holds the **evaluation date**: the reference date used when a
//! relative date expression is resolved without an explicit reference.  It is
//! a singleton accessed via a `std::sync::OnceLock`.
//!
//! The evaluation date is stored behind a `Mutex` so that it can be changed
//! from any thread.  Tests that change it should use [`ScopedEvaluationDate`]
//! so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the date kernel.
pub struct Settings {
    /// The current evaluation date as a serial number (days since
    /// 30 December 1899).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<i32>> {
        // A poisoned lock still holds a plain integer; recover it.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the evaluation date serial, or `None` if it has not been set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.slot()
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.slot() = Some(serial);
    }

    /// Clear the evaluation date.
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// Sets the evaluation date for the lifetime of the guard and restores the
/// previous value on drop.
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Install `serial` as the evaluation date.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
