use crate::constant::*;

/// The type of value a flag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagType {
    /// Free text.
    Str,
    /// A leading run of decimal digits; trailing text is split off.
    Integer,
    /// A boolean, either standalone (a switch) or taking an explicit value.
    Boolean,
    /// A literal date, or relative shorthand such as `-2m` or `1y2m3d`.
    DateTime,
}

impl std::fmt::Display for FlagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The canonical definition of a single flag.
///
/// ### Example
/// ```
/// # use flagmend_core as flagmend;
/// use flagmend::{FlagDefinition, FlagType};
///
/// let body = FlagDefinition::new("-b", FlagType::Str, 2000);
/// let append = FlagDefinition::switch("--append");
///
/// assert_eq!(body.name(), "-b");
/// assert!(!body.standalone());
/// assert!(append.standalone());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDefinition {
    name: String,
    flag_type: FlagType,
    max_length: usize,
    standalone: bool,
    ranged: bool,
}

impl FlagDefinition {
    /// Define a flag which takes a value of at most `max_length` characters.
    pub fn new(name: impl Into<String>, flag_type: FlagType, max_length: usize) -> Self {
        Self {
            name: name.into(),
            flag_type,
            max_length,
            standalone: false,
            ranged: false,
        }
    }

    /// Define a standalone boolean flag, which never takes a value.
    pub fn switch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag_type: FlagType::Boolean,
            max_length: 0,
            standalone: true,
            ranged: false,
        }
    }

    /// Allow a `DateTime` flag to take a colon delimited range, such as `-2m:-1m`.
    /// The maximum length then covers both operands and the delimiter.
    /// Has no effect on other flag types.
    pub fn ranged(mut self) -> Self {
        if self.flag_type == FlagType::DateTime && !self.ranged {
            self.ranged = true;
            self.max_length = self.max_length.saturating_mul(2).saturating_add(1);
        }

        self
    }

    /// The literal command line token of this flag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type of value this flag carries.
    pub fn flag_type(&self) -> FlagType {
        self.flag_type
    }

    /// The maximum number of characters in this flag's value.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether this flag is standalone (takes no value).
    pub fn standalone(&self) -> bool {
        self.standalone
    }

    /// Whether this flag accepts a date range.
    pub fn is_ranged(&self) -> bool {
        self.ranged
    }
}

/// The value length limits applied by [`CatalogBuilder`](crate::CatalogBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Cap for free text flags.
    pub max_length: usize,
    /// Cap for tag-like text flags.
    pub max_tag_length: usize,
    /// Cap for the digits of integer flags.
    pub max_int_digits: usize,
    /// Cap for the raw (unresolved) value of date flags.
    pub max_date_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_tag_length: DEFAULT_MAX_TAG_LENGTH,
            max_int_digits: DEFAULT_MAX_INT_DIGITS,
            max_date_length: DEFAULT_MAX_DATE_LENGTH,
        }
    }
}

/// Whether `token` has the shape of a flag: the flag prefix followed by at least one character, the first of which is not a digit.
///
/// A prefixed token whose second character is a digit is reserved for negative shorthand (ex: `-2m`).
pub(crate) fn is_flag_shaped(token: &str) -> bool {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(FLAG_PREFIX), Some(second)) => !second.is_ascii_digit(),
        _ => false,
    }
}
