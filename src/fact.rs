//! Facts and fact sets.
//!
//! A fact is an opaque, case-sensitive label. Its role in the rule graph
//! (base, intermediate, terminal) is not stored on the fact itself; it is
//! derived from a [`Vocabulary`](crate::vocabulary::Vocabulary) on demand.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fact(String);

impl Fact {
    /// Creates a fact from a label. The label is used verbatim.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the label is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fact {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Fact {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Fact {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Role of a fact within a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    /// Observable feature supplied by the operator.
    Base,
    /// Category fact, both premise and conclusion.
    Intermediate,
    /// Final classification outcome.
    Terminal,
    /// Not part of the vocabulary (e.g. a conclusion introduced by a user rule).
    Unrecognized,
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Terminal => write!(f, "terminal"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// De-duplicated working memory of facts.
///
/// Membership is exact. Iteration follows insertion order, which lets the
/// forward engine read back the order in which facts were established.
/// Facts are never removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FactSet {
    order: Vec<Fact>,
    #[serde(skip)]
    index: HashSet<Fact>,
}

impl FactSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fact. Returns true if it was not already present.
    pub fn insert(&mut self, fact: impl Into<Fact>) -> bool {
        let fact = fact.into();
        if self.index.contains(&fact) {
            return false;
        }
        self.index.insert(fact.clone());
        self.order.push(fact);
        true
    }

    /// Returns true if the set holds a fact with this label.
    #[must_use]
    pub fn contains(&self, fact: &str) -> bool {
        self.index.contains(fact)
    }

    /// Returns true if every fact in `facts` is present.
    #[must_use]
    pub fn contains_all<'a>(&self, facts: impl IntoIterator<Item = &'a Fact>) -> bool {
        facts.into_iter().all(|f| self.index.contains(f))
    }

    /// Number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates facts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.order.iter()
    }

    /// Facts in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Fact] {
        &self.order
    }
}

impl PartialEq for FactSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for FactSet {}

impl<F: Into<Fact>> FromIterator<F> for FactSet {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<F: Into<Fact>> Extend<F> for FactSet {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for fact in iter {
            self.insert(fact);
        }
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
