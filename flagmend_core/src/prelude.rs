//! Traits which, typically, may be imported without concern: `use flagmend::prelude::*`.

use chrono::NaiveDate;

/// Behaviour to supply the reference date that relative date shorthand is resolved against.
// Needs to be imported in order to implement a custom `Clock`.
pub trait Clock {
    /// The date considered to be "now".
    fn today(&self) -> NaiveDate;
}
