//! `flagmend` mends a loosely structured command line into canonical `flag, value` pairs.
//!
//! Shell users rarely quote their input, often forget the most common flag, and scatter switches anywhere.
//! Rather than asking every program to cope with that, `flagmend` reconstructs the token stream into a shape that any simple, positional flag binder can consume.
//! Specifically, `flagmend` attempts to prioritize the following design concerns:
//! * *Forgiving input*:
//! Free text needn't be quoted; `-b this is a body` is equivalent to `-b "this is a body"`.
//! * *Implicit flag*:
//! The first flag of the catalog is assumed for any text supplied without a flag.
//! * *Strict output*:
//! A successful parse always produces `[flag, value]*` followed by the standalone flags.
//! Every value fits the maximum length configured for its flag.
//! * *Typed errors*:
//! Every failure is a [`FlagError`] variant, whose message is suitable to show the user verbatim.
//!
//! # Usage
//! Configure a [`FlagCatalog`] via the [`CatalogBuilder`], then run a [`FlagParser`] over the user's tokens.
//!
//! ```
//! use flagmend::{CatalogBuilder, FixedClock, FlagParser, Limits};
//!
//! let catalog = CatalogBuilder::new(Limits::default())
//!     // The first flag is the implicit flag.
//!     .text("-b")
//!     .tag("-t")
//!     .integer("-c")
//!     .date("-d")
//!     .switch("--append")
//!     .build()
//!     .unwrap();
//! let clock = FixedClock::parse("2022-03-14", "%Y-%m-%d").unwrap();
//!
//! let tokens = vec!["buy", "milk", "--append", "-c", "2", "-d", "-1m", "2d"];
//! let mended = FlagParser::new(&catalog, tokens, clock).parse().unwrap();
//!
//! assert_eq!(
//!     mended,
//!     vec!["-c", "2", "-d", "2022-02-16", "-b", "buy milk", "--append"],
//! );
//! ```
//!
//! A runnable program is outlined in [the demos](https://github.com/sawatzkylindsey/flagmend/tree/main/demos).
//!
//! # Semantics
//! `flagmend` reconstructs the tokens according to the following set of rules.
//!
//! * A token is a flag only if it is amongst the canonical flags.
//! Any other token starting with `-` is an unknown flag, unless its second character is a digit (ex: `-2m`).
//! * The text between two flags is joined with single spaces into the value of the first.
//! * Text before the first flag belongs to the implicit flag, and is moved to the end.
//! * An integer value keeps only its leading digits; the rest is claimed by the implicit flag.
//! * Standalone flags (switches) take no value, and are moved to the end in their original relative order.
//! * A value longer than its flag's maximum length is truncated.
//! The overflow is given to the implicit flag, unless the implicit flag is already in use.
//! * A date value is either a literal (passed through as is), or shorthand relative to the [`Clock`](prelude::Clock).
//! Shorthand is a series of signed integers, each followed by `y`, `m` or `d` (ex: `1y2m3d`, `-4d`).
//! * A date flag configured with [`CatalogBuilder::date_range`] also takes a colon delimited range (ex: `-2m:-1m`).
//!
//! ### Output
//! ```console
//! Input                                    | Output
//! -----------------------------------------------------------------------------------------------
//! -b this is a body                        | -b "this is a body"
//! this is a body -m p                      | -m p -b "this is a body"
//! -c 7 remainder                           | -c 7 -b remainder
//! -d -4d                                   | -d 2022-03-10
//! --append -b body --replace               | -b body --append --replace
//! -d -2m:-1m                               | -d 2022-01-14:2022-02-14
//! ```
//!
//! # Features
//! * `tracing_debug`: Emits a `tracing` debug event for every pass of the pipeline.
pub use flagmend_core::*;
