//! Rule line syntax.
//!
//! A rule line is `<space-separated premises> SEP <conclusion>`. This is the
//! only textual format the crate accepts.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rule::Rule;

/// Default separator between premises and conclusion (full-width comma).
pub const DEFAULT_SEPARATOR: char = '，';

/// Default joiner used when rendering premises.
pub const DEFAULT_JOINER: &str = " ∧ ";

/// Parsing and rendering configuration for rule lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSyntax {
    /// Separator between the premise part and the conclusion.
    pub separator: char,
    /// Joiner placed between premises when rendering.
    pub joiner: String,
}

impl Default for RuleSyntax {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            joiner: DEFAULT_JOINER.to_string(),
        }
    }
}

/// Raw tokens of a parsed rule line, not yet checked against a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    /// Whitespace-separated premise tokens, trimmed, empties dropped.
    pub premises: Vec<String>,
    /// Trimmed conclusion text.
    pub conclusion: String,
}

impl RuleSyntax {
    /// Creates a syntax with a custom separator and the default joiner.
    #[must_use]
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            ..Self::default()
        }
    }

    /// Splits a rule line into premise tokens and a conclusion.
    ///
    /// # Errors
    /// - `EmptyRule` if the line is blank.
    /// - `MalformedRule` if the separator is missing or appears more than once.
    pub fn parse(&self, line: &str) -> Result<RuleLine, ValidationError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ValidationError::EmptyRule);
        }

        let mut parts = line.split(self.separator);
        let (Some(premises), Some(conclusion), None) = (parts.next(), parts.next(), parts.next())
        else {
            let count = line.matches(self.separator).count();
            let reason = if count == 0 {
                format!("expected '{}' between premises and conclusion", self.separator)
            } else {
                format!("expected exactly one '{}', found {count}", self.separator)
            };
            return Err(ValidationError::MalformedRule { reason });
        };

        Ok(RuleLine {
            premises: premises.split_whitespace().map(str::to_string).collect(),
            conclusion: conclusion.trim().to_string(),
        })
    }

    /// Renders a rule using this syntax's joiner.
    #[must_use]
    pub fn render(&self, rule: &Rule) -> String {
        rule.render(&self.joiner)
    }
}
