//! Implication rules.
//!
//! A rule maps a non-empty ordered set of premise facts to one conclusion.
//! Rules are immutable; editing a rule means removing it and adding a new one.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::fact::{Fact, FactSet};

/// Content fingerprint of a rule.
///
/// Two rules with the same premises (in the same order) and the same
/// conclusion share a fingerprint, regardless of where they sit in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleFingerprint(blake3::Hash);

impl fmt::Display for RuleFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// An implication rule `premises → conclusion`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    premises: Vec<Fact>,
    conclusion: Fact,
}

impl Rule {
    /// Creates a rule.
    ///
    /// Repeated premises collapse to their first occurrence.
    ///
    /// # Errors
    /// - `EmptyPremises` if no premise is given.
    /// - `EmptyConclusion` if the conclusion label is empty.
    pub fn new<P: Into<Fact>>(
        premises: impl IntoIterator<Item = P>,
        conclusion: impl Into<Fact>,
    ) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        let premises: Vec<Fact> = premises
            .into_iter()
            .map(Into::into)
            .filter(|p: &Fact| seen.insert(p.clone()))
            .collect();
        if premises.is_empty() {
            return Err(ValidationError::EmptyPremises);
        }

        let conclusion = conclusion.into();
        if conclusion.is_empty() {
            return Err(ValidationError::EmptyConclusion);
        }

        Ok(Self {
            premises,
            conclusion,
        })
    }

    /// Premises in declaration order.
    #[must_use]
    pub fn premises(&self) -> &[Fact] {
        &self.premises
    }

    /// The concluded fact.
    #[must_use]
    pub fn conclusion(&self) -> &Fact {
        &self.conclusion
    }

    /// Returns true if every premise is in `facts`.
    #[must_use]
    pub fn is_satisfied_by(&self, facts: &FactSet) -> bool {
        facts.contains_all(&self.premises)
    }

    /// Returns true if this rule concludes `fact`.
    #[must_use]
    pub fn concludes(&self, fact: &str) -> bool {
        self.conclusion.as_str() == fact
    }

    /// Content fingerprint over a length-prefixed encoding of premises and conclusion.
    #[must_use]
    pub fn fingerprint(&self) -> RuleFingerprint {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.premises.len() as u64).to_le_bytes());
        for premise in &self.premises {
            update_field(&mut hasher, premise);
        }
        update_field(&mut hasher, &self.conclusion);
        RuleFingerprint(hasher.finalize())
    }

    /// Renders the rule with a custom premise joiner.
    #[must_use]
    pub fn render(&self, joiner: &str) -> String {
        let premises: Vec<&str> = self.premises.iter().map(Fact::as_str).collect();
        format!("{} → {}", premises.join(joiner), self.conclusion)
    }
}

fn update_field(hasher: &mut blake3::Hasher, fact: &Fact) {
    let bytes = fact.as_str().as_bytes();
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" ∧ "))
    }
}
