/// Every flag begins with this character.
pub(crate) const FLAG_PREFIX: char = '-';

/// Layout of the dates emitted by the date resolver.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) const RANGE_DELIMITER: char = ':';

/// Years representable in `DATE_FORMAT` with exactly four digits.
pub(crate) const MIN_YEAR: i32 = 0;
pub(crate) const MAX_YEAR: i32 = 9999;

pub(crate) const YEAR_MARKER: char = 'y';
pub(crate) const MONTH_MARKER: char = 'm';
pub(crate) const DAY_MARKER: char = 'd';

pub(crate) const DEFAULT_MAX_LENGTH: usize = 2000;
pub(crate) const DEFAULT_MAX_TAG_LENGTH: usize = 10;
pub(crate) const DEFAULT_MAX_INT_DIGITS: usize = 4;
// Checked against the raw input, before any date is resolved.
pub(crate) const DEFAULT_MAX_DATE_LENGTH: usize = 20;
