use std::collections::HashMap;

use crate::model::*;
use crate::pipeline::FlagError;

/// Which token list a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The canonical flag definitions.
    System,
    /// The latest pass over the user's tokens.
    User,
}

/// The canonical flags, indexed both by position and by name.
///
/// The first definition is the *implicit flag*: the flag assumed for any value supplied without a preceding flag.
///
/// ### Example
/// ```
/// # use flagmend_core as flagmend;
/// use flagmend::{FlagCatalog, FlagDefinition, FlagType};
///
/// let catalog = FlagCatalog::new(vec![
///     FlagDefinition::new("-b", FlagType::Str, 2000),
///     FlagDefinition::switch("-a"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.implicit_flag().name(), "-b");
/// assert_eq!(catalog.name_at(1), Some("-a"));
/// assert_eq!(catalog.index_of("-a"), Some(1));
/// assert!(!catalog.is_flag("-z"));
/// ```
#[derive(Debug, Clone)]
pub struct FlagCatalog {
    by_index: HashMap<usize, FlagDefinition>,
    by_name: HashMap<String, usize>,
}

impl FlagCatalog {
    /// Index the canonical `definitions`; the first is taken as the implicit flag.
    ///
    /// Fails when there are no definitions, when a name is repeated, or when a name is not shaped like a flag.
    pub fn new(definitions: Vec<FlagDefinition>) -> Result<Self, FlagError> {
        if definitions.is_empty() {
            return Err(FlagError::Initialization(
                "no canonical flags were defined".to_string(),
            ));
        }

        let mut by_index = HashMap::default();
        let mut by_name = HashMap::default();

        for (index, definition) in definitions.into_iter().enumerate() {
            if !is_flag_shaped(definition.name()) {
                return Err(FlagError::Initialization(format!(
                    "'{}' is not a valid flag name",
                    definition.name()
                )));
            }

            if by_name
                .insert(definition.name().to_string(), index)
                .is_some()
            {
                return Err(FlagError::Initialization(format!(
                    "cannot duplicate the flag '{}'",
                    definition.name()
                )));
            }

            by_index.insert(index, definition);
        }

        Ok(Self { by_index, by_name })
    }

    /// The flag assumed when a value has no preceding flag.
    pub fn implicit_flag(&self) -> &FlagDefinition {
        // Construction guarantees index 0 exists.
        &self.by_index[&0]
    }

    /// The canonical flag name at `index`.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.by_index.get(&index).map(FlagDefinition::name)
    }

    /// The canonical index of the flag `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// The definition of the flag `name`.
    pub fn definition(&self, name: &str) -> Option<&FlagDefinition> {
        self.index_of(name)
            .and_then(|index| self.by_index.get(&index))
    }

    /// Whether `token` is a canonical flag.
    pub fn is_flag(&self, token: &str) -> bool {
        self.by_name.contains_key(token)
    }

    /// The number of canonical flags.
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    /// Always `false`; a catalog cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// The positions of canonical flags amongst `tokens`.
    pub(crate) fn flag_positions(&self, tokens: &[String]) -> Vec<usize> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| self.is_flag(token))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Builds a [`FlagCatalog`] with value caps taken from a [`Limits`] configuration.
///
/// The first flag added is the implicit flag.
///
/// ### Example
/// ```
/// # use flagmend_core as flagmend;
/// use flagmend::{CatalogBuilder, Limits};
///
/// let catalog = CatalogBuilder::new(Limits::default())
///     .text("-b")
///     .tag("-t")
///     .integer("-c")
///     .date("-d")
///     .switch("--append")
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.implicit_flag().name(), "-b");
/// assert_eq!(catalog.definition("-t").unwrap().max_length(), 10);
/// ```
#[derive(Debug)]
pub struct CatalogBuilder {
    limits: Limits,
    definitions: Vec<FlagDefinition>,
}

impl CatalogBuilder {
    /// Start a catalog using the caps of `limits`.
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            definitions: Vec::default(),
        }
    }

    /// Add a free text flag, capped at `Limits::max_length`.
    pub fn text(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_length;
        self.flag(FlagDefinition::new(name, FlagType::Str, max_length))
    }

    /// Add a tag-like text flag, capped at `Limits::max_tag_length`.
    pub fn tag(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_tag_length;
        self.flag(FlagDefinition::new(name, FlagType::Str, max_length))
    }

    /// Add an integer flag, capped at `Limits::max_int_digits`.
    pub fn integer(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_int_digits;
        self.flag(FlagDefinition::new(name, FlagType::Integer, max_length))
    }

    /// Add a date flag, capped at `Limits::max_date_length`.
    pub fn date(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_date_length;
        self.flag(FlagDefinition::new(name, FlagType::DateTime, max_length))
    }

    /// Add a date flag which also accepts ranges, capped at `Limits::max_date_length` per operand.
    pub fn date_range(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_date_length;
        self.flag(FlagDefinition::new(name, FlagType::DateTime, max_length).ranged())
    }

    /// Add a boolean flag which takes an explicit value (ex: `-n true`).
    pub fn boolean(self, name: impl Into<String>) -> Self {
        let max_length = self.limits.max_length;
        self.flag(FlagDefinition::new(name, FlagType::Boolean, max_length))
    }

    /// Add a standalone boolean flag (ex: `--append`).
    pub fn switch(self, name: impl Into<String>) -> Self {
        self.flag(FlagDefinition::switch(name))
    }

    /// Add an explicitly configured flag.
    pub fn flag(mut self, definition: FlagDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Build the catalog.
    pub fn build(self) -> Result<FlagCatalog, FlagError> {
        FlagCatalog::new(self.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::tokens;
    use rstest::rstest;

    #[test]
    fn empty_catalog() {
        assert_matches!(
            FlagCatalog::new(Vec::default()),
            Err(FlagError::Initialization(_))
        );
        assert_matches!(
            CatalogBuilder::new(Limits::default()).build(),
            Err(FlagError::Initialization(_))
        );
    }

    #[test]
    fn duplicate_flag() {
        let result = CatalogBuilder::new(Limits::default())
            .text("-b")
            .tag("-t")
            .switch("-b")
            .build();

        assert_eq!(
            result.unwrap_err(),
            FlagError::Initialization("cannot duplicate the flag '-b'".to_string())
        );
    }

    #[rstest]
    #[case("b")]
    #[case("-")]
    #[case("-1")]
    #[case("")]
    fn malformed_flag_name(#[case] name: &str) {
        let result = CatalogBuilder::new(Limits::default())
            .text("-b")
            .text(name)
            .build();

        assert_matches!(result, Err(FlagError::Initialization(_)));
    }

    #[test]
    fn lookups() {
        let catalog = CatalogBuilder::new(Limits::default())
            .text("-b")
            .integer("-c")
            .switch("--append")
            .build()
            .unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.implicit_flag().name(), "-b");
        assert_eq!(catalog.name_at(0), Some("-b"));
        assert_eq!(catalog.name_at(2), Some("--append"));
        assert_eq!(catalog.name_at(3), None);
        assert_eq!(catalog.index_of("-c"), Some(1));
        assert_eq!(catalog.index_of("-x"), None);
        assert_eq!(
            catalog.definition("-c").unwrap().flag_type(),
            FlagType::Integer
        );
        assert!(catalog.definition("--append").unwrap().standalone());
    }

    #[rstest]
    #[case(Limits::default(), 2000, 10, 4, 20, 41)]
    #[case(Limits { max_length: 50, max_tag_length: 5, max_int_digits: 2, max_date_length: 12 }, 50, 5, 2, 12, 25)]
    fn builder_limits(
        #[case] limits: Limits,
        #[case] text: usize,
        #[case] tag: usize,
        #[case] integer: usize,
        #[case] date: usize,
        #[case] date_range: usize,
    ) {
        let catalog = CatalogBuilder::new(limits)
            .text("-b")
            .tag("-t")
            .integer("-c")
            .date("-d")
            .date_range("-e")
            .build()
            .unwrap();

        assert_eq!(catalog.definition("-b").unwrap().max_length(), text);
        assert_eq!(catalog.definition("-t").unwrap().max_length(), tag);
        assert_eq!(catalog.definition("-c").unwrap().max_length(), integer);
        assert_eq!(catalog.definition("-d").unwrap().max_length(), date);
        assert!(!catalog.definition("-d").unwrap().is_ranged());
        assert_eq!(catalog.definition("-e").unwrap().max_length(), date_range);
        assert!(catalog.definition("-e").unwrap().is_ranged());
    }

    #[rstest]
    #[case(vec!["-b", "body", "-c", "9"], vec![0, 2])]
    #[case(vec!["body", "-x", "-c"], vec![2])]
    #[case(vec!["-", "-2m", "free text"], vec![])]
    #[case(vec![], vec![])]
    fn flag_positions(#[case] input: Vec<&str>, #[case] expected: Vec<usize>) {
        let catalog = CatalogBuilder::new(Limits::default())
            .text("-b")
            .integer("-c")
            .build()
            .unwrap();

        assert_eq!(catalog.flag_positions(&tokens(&input)), expected);
    }
}
