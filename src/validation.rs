//! Premise validation.
//!
//! New rules may only use premises from the valid-token universe: the base
//! features plus the intermediate categories of the vocabulary. The
//! universe is built once and is not extended when a rule introduces a new
//! conclusion; callers widen it explicitly with [`Validator::allow`].

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::fact::Fact;
use crate::vocabulary::Vocabulary;

/// Checks rule premises against the valid-token universe.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    universe: HashSet<Fact>,
}

impl Validator {
    /// Builds the universe from a vocabulary's base features and categories.
    #[must_use]
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let universe = vocabulary
            .base_facts()
            .chain(vocabulary.categories())
            .cloned()
            .collect();
        Self { universe }
    }

    /// Returns true if `token` may be used as a premise.
    #[must_use]
    pub fn is_valid_premise(&self, token: &str) -> bool {
        self.universe.contains(token)
    }

    /// Adds a fact to the universe. Returns true if it was new.
    pub fn allow(&mut self, fact: impl Into<Fact>) -> bool {
        self.universe.insert(fact.into())
    }

    /// Validates premises, reporting the first unknown token.
    ///
    /// # Errors
    /// `UnknownFeature` naming the first premise outside the universe.
    pub fn validate_premises<'a>(
        &self,
        premises: impl IntoIterator<Item = &'a Fact>,
    ) -> Result<(), ValidationError> {
        match premises.into_iter().find(|p| !self.is_valid_premise(p.as_str())) {
            Some(unknown) => Err(ValidationError::UnknownFeature {
                token: unknown.to_string(),
            }),
            None => Ok(()),
        }
    }
}
