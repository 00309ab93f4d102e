// src/infrastructure/clock.rs
//
// Date source for validation and timestamping.
// Injected into the catalog so tests can pin "today".

use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, NaiveDate, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;

    /// Upper bound for publication years
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Wall clock, UTC calendar date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock that stays on one date until moved
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Convenience constructor; `None` for an impossible date
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner) = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
