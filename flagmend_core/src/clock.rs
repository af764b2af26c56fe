use chrono::{Local, NaiveDate};

use crate::pipeline::FlagError;
use crate::prelude::Clock;

/// A [`Clock`] pinned to a single date.
///
/// ### Example
/// ```
/// # use flagmend_core as flagmend;
/// use flagmend::FixedClock;
/// use flagmend::prelude::*;
///
/// let clock = FixedClock::parse("14/03/2022", "%d/%m/%Y").unwrap();
/// assert_eq!(clock.today().to_string(), "2022-03-14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Pin the clock to `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Pin the clock to the date `now`, written in the `chrono` strftime `layout`.
    pub fn parse(now: &str, layout: &str) -> Result<Self, FlagError> {
        NaiveDate::parse_from_str(now, layout)
            .map(Self)
            .map_err(|error| {
                FlagError::Initialization(format!(
                    "cannot read reference date '{now}' as '{layout}': {error}"
                ))
            })
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A [`Clock`] reading the local date of the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
