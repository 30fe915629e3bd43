//! Case selection from the `TEST_ONLY` include/exclude grammar

use serde::Serialize;
use std::collections::BTreeSet;

/// Environment variable limiting which cases run.
pub const TEST_ONLY_VAR: &str = "TEST_ONLY";

/// Include/exclude sets deciding which case names are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

impl FilterSpec {
    /// Parse whitespace-separated tokens: `-name` excludes, anything else includes.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut spec = Self::default();
        for token in raw.split_whitespace() {
            match token.strip_prefix('-') {
                Some(name) => {
                    spec.exclude.insert(name.to_string());
                }
                None => {
                    spec.include.insert(token.to_string());
                }
            }
        }
        spec
    }

    /// Read `TEST_ONLY` once. An unset or blank variable selects everything.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(TEST_ONLY_VAR) {
            Ok(raw) if !raw.trim().is_empty() => {
                log::warn!("Note: Limiting tests by ${TEST_ONLY_VAR}: '{raw}'");
                Self::parse(&raw)
            }
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        (self.include.is_empty() || self.include.contains(name)) && !self.exclude.contains(name)
    }
}
