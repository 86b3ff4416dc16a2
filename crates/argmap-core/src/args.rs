//! The parsed argument table
//!
//! `ArgTable` is the primary interface: build it once from the raw argument
//! vector, then answer typed queries against it. The table is immutable
//! after construction; re-parsing produces a fresh table value.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::token::{self, Token};

/// An immutable mapping from canonical option name (`-name`) to its value
///
/// Built by [`ArgTable::parse`]. Keys are case-sensitive and always carry
/// exactly one leading dash, regardless of whether the input used one or
/// two. The table owns all of its strings, so it is `Send + Sync` and
/// concurrent reads need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgTable {
    entries: IndexMap<String, String>,
}

impl ArgTable {
    /// Parse an argument vector (program name already removed).
    ///
    /// Direct tokens land in the table immediately, last occurrence
    /// winning. Negation tokens accumulate in a side map and are only
    /// reconciled after the scan, so a direct assignment beats a negation
    /// for the same base name no matter which came first.
    ///
    /// Parsing never fails: tokens that are not well-formed options are
    /// dropped.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        let mut negated: IndexMap<String, String> = IndexMap::new();

        for raw in tokens {
            match token::classify(raw.as_ref()) {
                Some(Token::Direct { name, value }) => {
                    entries.insert(name, value);
                }
                Some(Token::Negation { base, value }) => {
                    negated.insert(base, value);
                }
                None => {}
            }
        }

        // A negation only lands for base names that never saw a direct
        // token. -noX forces -X to "0"; -noX=0 cancels itself into an
        // explicit "1".
        for (base, value) in negated {
            if entries.contains_key(&base) {
                log::trace!("direct assignment overrides negation of {}", base);
                continue;
            }
            let encoded = if value == "0" { "1" } else { "0" };
            entries.insert(base, encoded.to_string());
        }

        ArgTable { entries }
    }

    /// Parse a whitespace-separated argument string.
    ///
    /// Convenience for tests and tooling; splits on ASCII whitespace and
    /// feeds [`ArgTable::parse`].
    pub fn parse_str(input: &str) -> Self {
        Self::parse(input.split_ascii_whitespace())
    }

    /// Get an option's value as a string, or `default` if absent.
    ///
    /// A present option with an empty value (`-X` or `-X=`) returns the
    /// empty string, not the default.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.entries.get(name) {
            Some(value) => value,
            None => default,
        }
    }

    /// Get an option's value as a base-10 integer, or `default` if absent.
    ///
    /// A present value that does not parse as an integer (non-numeric,
    /// partially numeric, or empty) yields `0`, not the default. Callers
    /// must not assume the default covers malformed input.
    pub fn get_i64(&self, name: &str, default: i64) -> i64 {
        match self.entries.get(name) {
            Some(value) => value.parse().unwrap_or(0),
            None => default,
        }
    }

    /// Get an option's value as a boolean, or `default` if absent.
    ///
    /// A bare flag (empty value) is `true`, the value `"0"` is `false`,
    /// and any other value is `true`.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.entries.get(name) {
            Some(value) if value.is_empty() => true,
            Some(value) => value != "0",
            None => default,
        }
    }

    /// Get an option's value as a string, erroring if absent
    pub fn require_str(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_option(name))
    }

    /// Get an option's value as a base-10 integer, erroring if absent or
    /// unparsable
    pub fn require_i64(&self, name: &str) -> Result<i64> {
        let value = self.require_str(name)?;
        value
            .parse()
            .map_err(|_| Error::invalid_integer(name, value))
    }

    /// Check whether an option is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of options in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bool_bare_flag() {
        let args = ArgTable::parse_str("-CHR");
        assert!(args.get_bool("-CHR", false));
        assert!(args.get_bool("-CHR", true));

        // Absent options fall back to the default
        assert!(!args.get_bool("-fo", false));
        assert!(args.get_bool("-fo", true));

        // Prefix of a present name is still absent
        assert!(!args.get_bool("-CHRo", false));
        assert!(args.get_bool("-CHRo", true));
    }

    #[test]
    fn test_bool_explicit_off() {
        let args = ArgTable::parse_str("-CHR=0");
        assert!(!args.get_bool("-CHR", false));
        assert!(!args.get_bool("-CHR", true));
    }

    #[test]
    fn test_bool_explicit_on() {
        let args = ArgTable::parse_str("-CHR=1");
        assert!(args.get_bool("-CHR", false));
        assert!(args.get_bool("-CHR", true));
    }

    #[test]
    fn test_bool_non_numeric_value_is_true() {
        let args = ArgTable::parse_str("-CHR=banana");
        assert!(args.get_bool("-CHR", false));
    }

    #[test]
    fn test_negation() {
        let args = ArgTable::parse_str("-noCHR");
        assert!(!args.get_bool("-CHR", false));
        assert!(!args.get_bool("-CHR", true));
        // The negation token itself is not an option
        assert!(!args.contains("-noCHR"));

        let args = ArgTable::parse_str("-noCHR=1");
        assert!(!args.get_bool("-CHR", false));
        assert!(!args.get_bool("-CHR", true));

        // -noCHR=0 cancels the negation into an explicit true
        let args = ArgTable::parse_str("-noCHR=0");
        assert!(args.get_bool("-CHR", false));
        assert!(args.get_bool("-CHR", true));
    }

    #[test]
    fn test_negation_with_junk_value_applies() {
        let args = ArgTable::parse_str("-noCHR=banana");
        assert!(!args.get_bool("-CHR", true));
    }

    #[test]
    fn test_direct_wins_over_negation_in_either_order() {
        for input in ["-CHR -noCHR", "-noCHR -CHR", "-CHR --noCHR"] {
            let args = ArgTable::parse_str(input);
            assert!(args.get_bool("-CHR", false), "input: {}", input);
            assert!(args.get_bool("-CHR", true), "input: {}", input);
        }

        let args = ArgTable::parse_str("-CHR=1 -noCHR=1");
        assert!(args.get_bool("-CHR", false));

        // Direct wins even when it agrees with the negation
        let args = ArgTable::parse_str("-CHR=0 -noCHR=0");
        assert!(!args.get_bool("-CHR", true));
    }

    #[test]
    fn test_last_direct_occurrence_wins() {
        let args = ArgTable::parse_str("-CHR=1 -CHR=0");
        assert!(!args.get_bool("-CHR", true));
        assert_eq!(args.get_str("-CHR", ""), "0");
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_double_dash_equivalence() {
        assert_eq!(
            ArgTable::parse_str("--CHR=v"),
            ArgTable::parse_str("-CHR=v")
        );

        let args = ArgTable::parse_str("--CHR=verbose --bar=1");
        assert_eq!(args.get_str("-CHR", ""), "verbose");
        assert_eq!(args.get_i64("-bar", 0), 1);

        let args = ArgTable::parse_str("--noCHR=1");
        assert!(!args.get_bool("-CHR", true));
    }

    #[test]
    fn test_string_lookup() {
        let args = ArgTable::parse_str("");
        assert_eq!(args.get_str("-CHR", ""), "");
        assert_eq!(args.get_str("-CHR", "eleven"), "eleven");

        let args = ArgTable::parse_str("-CHR -bar");
        assert_eq!(args.get_str("-CHR", "eleven"), "");

        // Present with empty value overrides the default
        let args = ArgTable::parse_str("-CHR=");
        assert_eq!(args.get_str("-CHR", "eleven"), "");

        let args = ArgTable::parse_str("-CHR=11");
        assert_eq!(args.get_str("-CHR", ""), "11");
        assert_eq!(args.get_str("-CHR", "eleven"), "11");

        let args = ArgTable::parse_str("-CHR=eleven");
        assert_eq!(args.get_str("-CHR", ""), "eleven");
    }

    #[test]
    fn test_int_lookup() {
        let args = ArgTable::parse_str("");
        assert_eq!(args.get_i64("-CHR", 11), 11);
        assert_eq!(args.get_i64("-CHR", 0), 0);

        // Bare flags have an empty value, which is not an integer
        let args = ArgTable::parse_str("-CHR -bar");
        assert_eq!(args.get_i64("-CHR", 11), 0);
        assert_eq!(args.get_i64("-bar", 11), 0);

        let args = ArgTable::parse_str("-CHR=11 -bar=12");
        assert_eq!(args.get_i64("-CHR", 0), 11);
        assert_eq!(args.get_i64("-bar", 11), 12);

        let args = ArgTable::parse_str("-CHR=-7");
        assert_eq!(args.get_i64("-CHR", 0), -7);
    }

    #[test]
    fn test_int_malformed_yields_zero_not_default() {
        let args = ArgTable::parse_str("-CHR=NaN -bar=NotANumber -baz=12monkeys");
        assert_eq!(args.get_i64("-CHR", 1), 0);
        assert_eq!(args.get_i64("-bar", 11), 0);
        assert_eq!(args.get_i64("-baz", 11), 0);
    }

    #[test]
    fn test_non_option_tokens_ignored() {
        let args = ArgTable::parse_str("positional -CHR=1 another");
        assert_eq!(args.len(), 1);
        assert!(args.get_bool("-CHR", false));
    }

    #[test]
    fn test_reparse_replaces_state() {
        let args = ArgTable::parse_str("-CHR=1 -bar=2");
        assert!(args.contains("-bar"));

        let args = ArgTable::parse_str("-baz=3");
        assert!(!args.contains("-CHR"));
        assert!(!args.contains("-bar"));
        assert_eq!(args.get_i64("-baz", 0), 3);
    }

    #[test]
    fn test_require_str() {
        let args = ArgTable::parse_str("-CHR=eleven");
        assert_eq!(args.require_str("-CHR").unwrap(), "eleven");
        assert_eq!(
            args.require_str("-bar"),
            Err(Error::missing_option("-bar"))
        );
    }

    #[test]
    fn test_require_i64() {
        let args = ArgTable::parse_str("-CHR=11 -bar=NaN");
        assert_eq!(args.require_i64("-CHR").unwrap(), 11);
        assert_eq!(
            args.require_i64("-bar"),
            Err(Error::invalid_integer("-bar", "NaN"))
        );
        assert_eq!(
            args.require_i64("-baz"),
            Err(Error::missing_option("-baz"))
        );
    }

    #[test]
    fn test_iter_pairs() {
        let args = ArgTable::parse_str("-a=1 -b");
        let pairs: Vec<_> = args.iter().collect();
        assert_eq!(pairs, vec![("-a", "1"), ("-b", "")]);
    }
}
