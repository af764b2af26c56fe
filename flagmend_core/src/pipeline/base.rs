use std::collections::HashMap;
use thiserror::Error;

/// An ordered version of the user's tokens at a pipeline stage boundary.
pub(crate) type ParsePass = Vec<String>;

/// The reasons a token stream cannot be mended.
///
/// The `Display` of each variant is suitable to present to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// A flag-shaped token that is not amongst the canonical flags.
    #[error("Unknown flag '{0}' in the provided arguments.")]
    UnknownFlag(String),

    /// A flag that requires a value was given none.
    #[error("Flag '{0}' is missing its argument.")]
    MissingArgument(String),

    /// A value was truncated, but the overflow could not be given to the implicit flag.
    #[error("Argument of flag '{flag}' exceeds the maximum length of {max_length}.")]
    ExceedMaxLength {
        /// The flag whose value overflowed.
        flag: String,
        /// That flag's maximum value length.
        max_length: usize,
    },

    /// A date value that is neither a literal date nor valid shorthand.
    #[error("Unknown elements in date argument '{0}'.")]
    UnknownDateInput(String),

    /// A date range missing an operand or a time unit indicator.
    #[error("Malformed date range '{0}'.")]
    MalformedDateRange(String),

    /// A date range given to a flag which only takes a single date.
    #[error("Flag '{0}' does not accept a date range.")]
    DateRangeNotAllowed(String),

    /// The catalog or reference clock could not be set up.
    #[error("Initialisation error: {0}.")]
    Initialization(String),
}

impl FlagError {
    /// The process exit code to report this error with.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Index-to-token and token-to-index lookups over a single pass.
///
/// When a token repeats, the token-to-index lookup holds its final position.
#[derive(Debug, Default)]
pub(crate) struct UserIndex {
    by_index: HashMap<usize, String>,
    by_token: HashMap<String, usize>,
}

impl UserIndex {
    pub(crate) fn new(pass: &[String]) -> Self {
        let mut index = Self::default();

        for (i, token) in pass.iter().enumerate() {
            index.by_index.insert(i, token.clone());
            index.by_token.insert(token.clone(), i);
        }

        index
    }

    pub(crate) fn token_at(&self, index: usize) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    pub(crate) fn index_of(&self, token: &str) -> Option<usize> {
        self.by_token.get(token).copied()
    }
}

/// The append-only history of passes, where lookups always refer to the latest.
#[derive(Debug)]
pub(crate) struct PassHistory {
    passes: Vec<ParsePass>,
    latest: UserIndex,
}

impl PassHistory {
    pub(crate) fn new(initial: ParsePass) -> Self {
        let latest = UserIndex::new(&initial);
        Self {
            passes: vec![initial],
            latest,
        }
    }

    /// Record `pass` as the latest, returning its iteration number.
    pub(crate) fn push(&mut self, pass: &[String]) -> usize {
        self.latest = UserIndex::new(pass);
        self.passes.push(pass.to_vec());
        self.passes.len() - 1
    }

    pub(crate) fn initial(&self) -> &[String] {
        &self.passes[0]
    }

    pub(crate) fn latest(&self) -> &[String] {
        // `new` always records an initial pass.
        &self.passes[self.passes.len() - 1]
    }

    pub(crate) fn index(&self) -> &UserIndex {
        &self.latest
    }
}

/// Join `tokens` with single spaces, trimming the surrounding whitespace.
pub(crate) fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ").trim_matches(' ').to_string()
}
