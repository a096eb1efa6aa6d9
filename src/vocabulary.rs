//! Fact vocabulary.
//!
//! The vocabulary names which facts are observable base features, which are
//! intermediate categories, and which are terminal outcomes. It is fixed at
//! startup and never grows as a side effect of adding rules.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ValidationError;
use crate::fact::{Fact, FactKind};
use crate::seed;

/// An observable feature and the key hosts use to select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Selection key (e.g. "6").
    pub key: String,
    /// Feature fact.
    pub label: Fact,
}

/// Fixed fact vocabulary of a knowledge base.
#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    features: Vec<Feature>,
    categories: Vec<Fact>,
    terminals: Vec<Fact>,
    #[serde(skip)]
    base: HashSet<Fact>,
}

impl Vocabulary {
    /// Builds a vocabulary from `(key, label)` features, categories and terminals.
    #[must_use]
    pub fn new<K, L, C, T>(
        features: impl IntoIterator<Item = (K, L)>,
        categories: impl IntoIterator<Item = C>,
        terminals: impl IntoIterator<Item = T>,
    ) -> Self
    where
        K: Into<String>,
        L: Into<Fact>,
        C: Into<Fact>,
        T: Into<Fact>,
    {
        let features: Vec<Feature> = features
            .into_iter()
            .map(|(key, label)| Feature {
                key: key.into(),
                label: label.into(),
            })
            .collect();
        let base = features.iter().map(|f| f.label.clone()).collect();

        Self {
            features,
            categories: dedup(categories),
            terminals: dedup(terminals),
            base,
        }
    }

    /// The reference animal-identification vocabulary.
    #[must_use]
    pub fn animals() -> Self {
        Self::new(
            seed::ANIMAL_FEATURES.iter().copied(),
            seed::ANIMAL_CATEGORIES.iter().copied(),
            seed::ANIMAL_TERMINALS.iter().copied(),
        )
    }

    /// Numbered features in declaration order (labels may repeat).
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Intermediate category facts.
    #[must_use]
    pub fn categories(&self) -> &[Fact] {
        &self.categories
    }

    /// Terminal outcome facts.
    #[must_use]
    pub fn terminals(&self) -> &[Fact] {
        &self.terminals
    }

    /// Distinct base feature facts.
    pub fn base_facts(&self) -> impl Iterator<Item = &Fact> {
        self.base.iter()
    }

    /// Returns true if `fact` is an observable base feature.
    #[must_use]
    pub fn is_base(&self, fact: &str) -> bool {
        self.base.contains(fact)
    }

    /// Returns true if `fact` is an intermediate category.
    #[must_use]
    pub fn is_category(&self, fact: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == fact)
    }

    /// Returns true if `fact` is a terminal outcome.
    #[must_use]
    pub fn is_terminal(&self, fact: &str) -> bool {
        self.terminals.iter().any(|t| t.as_str() == fact)
    }

    /// Classifies a fact. Base wins over intermediate, which wins over terminal.
    #[must_use]
    pub fn kind(&self, fact: &str) -> FactKind {
        if self.is_base(fact) {
            FactKind::Base
        } else if self.is_category(fact) {
            FactKind::Intermediate
        } else if self.is_terminal(fact) {
            FactKind::Terminal
        } else {
            FactKind::Unrecognized
        }
    }

    /// Looks up a feature by its selection key.
    #[must_use]
    pub fn feature(&self, key: &str) -> Option<&Fact> {
        self.features
            .iter()
            .find(|f| f.key == key)
            .map(|f| &f.label)
    }

    /// Resolves host input to a fact: a feature key maps to its label,
    /// anything else is taken as a label verbatim.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Fact {
        let token = token.trim();
        self.feature(token)
            .cloned()
            .unwrap_or_else(|| Fact::from(token))
    }

    /// Resolves host input to an observable base feature.
    ///
    /// # Errors
    /// `UnknownFeature` if the token resolves to anything but a base feature,
    /// including categories and terminal outcomes.
    pub fn observe(&self, token: &str) -> Result<Fact, ValidationError> {
        let fact = self.resolve(token);
        if self.kind(fact.as_str()) == FactKind::Base {
            Ok(fact)
        } else {
            Err(ValidationError::UnknownFeature {
                token: fact.to_string(),
            })
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::animals()
    }
}

fn dedup<F: Into<Fact>>(facts: impl IntoIterator<Item = F>) -> Vec<Fact> {
    let mut seen = HashSet::new();
    facts
        .into_iter()
        .map(Into::into)
        .filter(|f: &Fact| seen.insert(f.clone()))
        .collect()
}
