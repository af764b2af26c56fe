//! Core module for `flagmend`.
//! See [documentation root](https://docs.rs/flagmend/latest/flagmend/index.html) for full details.
#![deny(missing_docs)]
mod catalog;
mod clock;
mod constant;
mod model;
mod pipeline;
#[allow(missing_docs)]
pub mod prelude;

pub use catalog::*;
pub use clock::*;
pub use model::*;
pub use pipeline::{FlagError, FlagParser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
