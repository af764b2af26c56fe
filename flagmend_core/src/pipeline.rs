mod balance;
mod base;
mod date;
mod length;
mod reassemble;
mod standalone;

pub use base::FlagError;

use crate::catalog::{FlagCatalog, Origin};
use crate::model::is_flag_shaped;
use crate::prelude::Clock;
use base::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Mends a loosely structured token stream into canonical `flag, value` pairs.
///
/// ### Example
/// ```
/// # use flagmend_core as flagmend;
/// use flagmend::{CatalogBuilder, FixedClock, FlagParser, Limits};
///
/// let catalog = CatalogBuilder::new(Limits::default())
///     .text("-b")
///     .date("-d")
///     .build()
///     .unwrap();
/// let clock = FixedClock::parse("2022-03-14", "%Y-%m-%d").unwrap();
/// let parser = FlagParser::new(
///     &catalog,
///     vec!["this is a spaceful body", "-d", "1y", "1m", "2d"],
///     clock,
/// );
///
/// assert_eq!(
///     parser.parse().unwrap(),
///     vec!["-d", "2023-04-16", "-b", "this is a spaceful body"],
/// );
/// ```
pub struct FlagParser<'c, C: Clock> {
    catalog: &'c FlagCatalog,
    history: PassHistory,
    unknown_flag: Option<String>,
    clock: C,
}

impl<'c, C: Clock> std::fmt::Debug for FlagParser<'c, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagParser{..}").finish()
    }
}

impl<'c, C: Clock> FlagParser<'c, C> {
    /// Set up a parser over the user's `tokens` (excluding the program name).
    ///
    /// Unknown flags amongst the `tokens` do not fail here; they are reported by [`FlagParser::parse`].
    pub fn new(
        catalog: &'c FlagCatalog,
        tokens: impl IntoIterator<Item = impl Into<String>>,
        clock: C,
    ) -> Self {
        let tokens: ParsePass = tokens.into_iter().map(Into::into).collect();
        // A prefixed token whose second character is a digit is negative shorthand, not a flag.
        let unknown_flag = tokens
            .iter()
            .find(|token| is_flag_shaped(token) && !catalog.is_flag(token))
            .cloned();

        Self {
            catalog,
            history: PassHistory::new(tokens),
            unknown_flag,
            clock,
        }
    }

    /// Whether the user's tokens contain a flag-shaped token that is not amongst the canonical flags.
    pub fn has_unknown_flags(&self) -> bool {
        self.unknown_flag.is_some()
    }

    /// The token at `index` in the canonical flags, or in the latest pass over the user's tokens.
    pub fn lookup_by_index(&self, origin: Origin, index: usize) -> Option<&str> {
        match origin {
            Origin::System => self.catalog.name_at(index),
            Origin::User => self.history.index().token_at(index),
        }
    }

    /// The index of `name` in the canonical flags, or in the latest pass over the user's tokens.
    pub fn lookup_by_name(&self, origin: Origin, name: &str) -> Option<usize> {
        match origin {
            Origin::System => self.catalog.index_of(name),
            Origin::User => self.history.index().index_of(name),
        }
    }

    /// Run the reconstruction pipeline, producing `[flag, value]*` followed by any standalone flags.
    ///
    /// The pipeline proceeds in stages, recomputing flag positions after every stage that changes them:
    /// 1. Free text between flags is condensed into single values; text before the first flag is moved to the end.
    /// 2. Integer values are split from any trailing text.
    /// 3. Standalone flags are set aside.
    /// 4. The implicit flag is inserted before any ownerless value.
    /// 5. Values are trimmed to their maximum lengths, with the overflow given to the implicit flag.
    /// 6. Relative dates are resolved against the clock.
    /// 7. The standalone flags are appended, in their original relative order.
    ///
    /// Input of at most one token is returned as is.
    pub fn parse(mut self) -> Result<Vec<String>, FlagError> {
        if let Some(token) = self.unknown_flag.take() {
            return Err(FlagError::UnknownFlag(token));
        }

        if self.history.initial().len() <= 1 {
            return Ok(self.history.initial().to_vec());
        }

        let catalog = self.catalog;

        let pass = reassemble::reassemble_tokens(catalog, self.history.latest());
        self.record("reassembled", &pass);
        let positions = catalog.flag_positions(&pass);

        let pass = reassemble::split_numeric(catalog, pass, &positions);
        self.record("split numerics", &pass);

        let (pass, standalones) = standalone::extract_standalones(catalog, pass, &positions);

        if !standalones.is_empty() {
            self.record("extracted standalones", &pass);
        }

        let pass = balance::balance(catalog, pass, |corrected| {
            self.record("balanced", corrected);
        })?;
        let positions = catalog.flag_positions(&pass);

        let pass = length::enforce_lengths(
            catalog,
            &pass,
            &positions,
            self.implicit_flag_required(),
        )?;
        self.record("enforced lengths", &pass);
        let positions = catalog.flag_positions(&pass);

        let pass = date::resolve_dates(catalog, pass, &positions, self.clock.today())?;
        self.record("resolved dates", &pass);

        let pass = standalone::reinsert_standalones(pass, standalones);
        self.record("reinserted standalones", &pass);
        Ok(pass)
    }

    /// Whether overflow may be routed to the implicit flag; not so if the latest pass already uses it.
    fn implicit_flag_required(&self) -> bool {
        self.lookup_by_name(Origin::User, self.catalog.implicit_flag().name())
            .is_none()
    }

    fn record(&mut self, _stage: &str, pass: &[String]) {
        let _iteration = self.history.push(pass);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Pass {_iteration} ({_stage}): {pass:?}.");
        }
    }
}
