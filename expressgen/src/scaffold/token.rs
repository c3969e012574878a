//! Placeholder tokens and whole-file substitution
//!
//! Templates carry literal markers of the form `$$$ <description> $$$`.
//! Substitution is plain text replacement with no syntactic awareness of
//! the file being edited.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

/// A literal marker identifying one substitution point in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderToken(&'static str);

impl PlaceholderToken {
    /// Request type augmentation in the types template
    pub const REQUEST_AUTHORIZATION: Self = Self("$$$ request authorization $$$");
    /// Access-level enum in the enums template
    pub const AUTHORIZATION_TYPES: Self = Self("$$$ authorization types $$$");
    /// Controller identifier list in the routes template
    pub const IMPORT_CONTROLLERS: Self = Self("$$$ import controllers $$$");
    /// Route module imports in the routes template
    pub const IMPORT_ROUTES: Self = Self("$$$ import routes $$$");
    /// Router registrations in the routes template
    pub const USE_ROUTES: Self = Self("$$$ use routes $$$");
    /// Auth schema import in the routes template
    pub const IMPORT_AUTHENTICATION_SCHEMA: Self = Self("$$$ import authentication schema $$$");
    /// Register/authenticate routes in the routes template
    pub const AUTHENTICATION_ROUTES: Self = Self("$$$ authentication routes $$$");

    /// The literal marker text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Number of literal occurrences in `content`
    #[must_use]
    pub fn occurrences(self, content: &str) -> usize {
        content.matches(self.0).count()
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Token to fragment table applied in one pass
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    entries: Vec<(PlaceholderToken, String)>,
}

impl Substitutions {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `token` to `fragment`; a repeated token keeps the last fragment
    #[must_use]
    pub fn with(mut self, token: PlaceholderToken, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == token) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((token, fragment)),
        }
        self
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> impl Iterator<Item = PlaceholderToken> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    /// Replace every occurrence of every token in a single left-to-right scan
    ///
    /// Inserted fragments are not rescanned.
    ///
    /// # Errors
    ///
    /// Returns an error if the token alternation fails to compile.
    pub fn apply(&self, content: &str) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(content.to_string());
        }

        let alternation = self
            .entries
            .iter()
            .map(|(token, _)| regex::escape(token.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)?;

        let fragments: HashMap<&str, &str> = self
            .entries
            .iter()
            .map(|(token, fragment)| (token.as_str(), fragment.as_str()))
            .collect();

        let replaced = pattern.replace_all(content, |caps: &Captures<'_>| {
            fragments.get(&caps[0]).copied().unwrap_or_default()
        });

        Ok(replaced.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let content = "a $$$ import routes $$$ b $$$ import routes $$$ c";
        let out = Substitutions::new()
            .with(PlaceholderToken::IMPORT_ROUTES, "X")
            .apply(content)
            .unwrap();
        assert_eq!(out, "a X b X c");
    }

    #[test]
    fn test_absent_token_leaves_content_alone() {
        let content = "const router = Router();";
        let out = Substitutions::new()
            .with(PlaceholderToken::USE_ROUTES, "router.use(x);")
            .apply(content)
            .unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn test_fragments_are_not_rescanned() {
        let content = "$$$ import routes $$$";
        let out = Substitutions::new()
            .with(PlaceholderToken::IMPORT_ROUTES, "$$$ use routes $$$")
            .with(PlaceholderToken::USE_ROUTES, "router.use(x);")
            .apply(content)
            .unwrap();
        assert_eq!(out, "$$$ use routes $$$");
    }

    #[test]
    fn test_dollar_signs_in_fragment_are_literal() {
        let out = Substitutions::new()
            .with(PlaceholderToken::IMPORT_CONTROLLERS, "$1 ${name}")
            .apply("[$$$ import controllers $$$]")
            .unwrap();
        assert_eq!(out, "[$1 ${name}]");
    }

    #[test]
    fn test_repeated_token_keeps_last_fragment() {
        let subs = Substitutions::new()
            .with(PlaceholderToken::USE_ROUTES, "first")
            .with(PlaceholderToken::USE_ROUTES, "second");
        assert_eq!(subs.tokens().count(), 1);
        assert_eq!(subs.apply("$$$ use routes $$$").unwrap(), "second");
    }

    #[test]
    fn test_occurrences() {
        let content = "$$$ use routes $$$\n$$$ use routes $$$";
        assert_eq!(PlaceholderToken::USE_ROUTES.occurrences(content), 2);
        assert_eq!(PlaceholderToken::IMPORT_ROUTES.occurrences(content), 0);
    }

    proptest! {
        #[test]
        fn prop_substitution_is_deterministic_and_complete(
            chunks in proptest::collection::vec("[a-z \\n;]{0,12}", 1..6),
            fragment in "[A-Za-z(); ]{0,16}",
        ) {
            let content = chunks.join(PlaceholderToken::IMPORT_ROUTES.as_str());
            let subs = Substitutions::new().with(PlaceholderToken::IMPORT_ROUTES, fragment.clone());

            let first = subs.apply(&content).unwrap();
            let second = subs.apply(&content).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(PlaceholderToken::IMPORT_ROUTES.occurrences(&first), 0);
            prop_assert_eq!(first, chunks.join(fragment.as_str()));
        }
    }
}
