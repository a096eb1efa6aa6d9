//! Ordered rule store.
//!
//! The store owns its rules, the vocabulary they are written against, and
//! the premise validator. Store order is priority: the forward engine scans
//! rules in this order and the backward engine explores only the first rule
//! concluding a goal.
//!
//! Engines hold a shared borrow of the store for the duration of a run, so
//! the store cannot be mutated while reasoning is in progress.

use tracing::{debug, info, warn};

use crate::error::{IndexError, ValidationError};
use crate::fact::Fact;
use crate::rule::Rule;
use crate::seed;
use crate::syntax::RuleSyntax;
use crate::validation::Validator;
use crate::vocabulary::Vocabulary;

/// An ordered, mutable sequence of rules.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: Vec<Rule>,
    vocabulary: Vocabulary,
    validator: Validator,
    syntax: RuleSyntax,
}

impl RuleStore {
    /// Creates an empty store over a vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        let validator = Validator::from_vocabulary(&vocabulary);
        Self {
            rules: Vec::new(),
            vocabulary,
            validator,
            syntax: RuleSyntax::default(),
        }
    }

    /// Creates a store holding the reference animal knowledge base.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new(Vocabulary::animals());
        for (premises, conclusion) in seed::ANIMAL_RULES {
            match Rule::new(premises.iter().copied(), *conclusion) {
                Ok(rule) => store.rules.push(rule),
                Err(e) => {
                    warn!(conclusion, error = %e, "invalid seed rule skipped");
                    debug_assert!(false, "invalid seed rule for {conclusion}: {e}");
                }
            }
        }
        store
    }

    /// Creates a store with the given rules, in order, without premise validation.
    ///
    /// Intended for hosts that load a trusted knowledge base.
    #[must_use]
    pub fn with_rules(vocabulary: Vocabulary, rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut store = Self::new(vocabulary);
        store.rules.extend(rules);
        store
    }

    /// Replaces the rule line syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: RuleSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// The vocabulary rules are written against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The rule line syntax.
    #[must_use]
    pub fn syntax(&self) -> &RuleSyntax {
        &self.syntax
    }

    /// The premise validator.
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Adds a rule from premise tokens and a conclusion.
    ///
    /// Tokens are trimmed and empty tokens dropped. The rule is appended at
    /// the end of the store. On error the store is unchanged.
    ///
    /// # Errors
    /// - `EmptyPremises` if no premise remains after trimming.
    /// - `EmptyConclusion` if the conclusion is blank.
    /// - `UnknownFeature` for the first premise outside the valid universe.
    pub fn add<S: AsRef<str>>(
        &mut self,
        premises: impl IntoIterator<Item = S>,
        conclusion: &str,
    ) -> Result<(), ValidationError> {
        let premises: Vec<Fact> = premises
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .map(Fact::from)
            .collect();

        let rule = Rule::new(premises, conclusion.trim())?;
        if let Err(e) = self.validator.validate_premises(rule.premises()) {
            debug!(rule = %rule, error = %e, "rule rejected");
            return Err(e);
        }

        info!(rule = %rule, position = self.rules.len(), "rule added");
        self.rules.push(rule);
        Ok(())
    }

    /// Parses a rule line with the store's syntax and adds it.
    ///
    /// # Errors
    /// `EmptyRule` or `MalformedRule` from parsing, then any error of [`RuleStore::add`].
    pub fn add_line(&mut self, line: &str) -> Result<(), ValidationError> {
        let parsed = self.syntax.parse(line).map_err(|e| {
            debug!(line, error = %e, "rule line rejected");
            e
        })?;
        self.add(&parsed.premises, &parsed.conclusion)
    }

    /// Removes and returns the rule at a 0-based position.
    ///
    /// # Errors
    /// - `EmptyStore` if the store has no rules.
    /// - `OutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Rule, IndexError> {
        if self.rules.is_empty() {
            return Err(IndexError::EmptyStore);
        }
        if index >= self.rules.len() {
            return Err(IndexError::OutOfRange {
                index,
                len: self.rules.len(),
            });
        }

        let rule = self.rules.remove(index);
        info!(rule = %rule, position = index, "rule removed");
        Ok(rule)
    }

    /// Widens the valid premise universe with a fact, e.g. a conclusion
    /// introduced by a user rule. Returns true if the fact was new.
    pub fn allow_premise(&mut self, fact: impl Into<Fact>) -> bool {
        let fact = fact.into();
        let added = self.validator.allow(fact.clone());
        if added {
            info!(fact = %fact, "premise universe widened");
        }
        added
    }

    /// Iterates rules in store order. Each call starts from the beginning.
    pub fn list(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Rules in store order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the store has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule, in store order, concluding `fact`, with its position.
    #[must_use]
    pub fn first_concluding(&self, fact: &str) -> Option<(usize, &Rule)> {
        self.rules.iter().enumerate().find(|(_, r)| r.concludes(fact))
    }

    /// Renders every rule as `N. premises → conclusion`, numbered from 1.
    #[must_use]
    pub fn render_listing(&self) -> Vec<String> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, self.syntax.render(r)))
            .collect()
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a RuleStore {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = RuleStore::seeded();
        assert_eq!(store.len(), 15);
        assert_eq!(store.get(0).unwrap().to_string(), "有毛发 → 哺乳类");
        assert_eq!(store.get(14).unwrap().to_string(), "鸟类 ∧ 善飞 → 信天翁");
    }

    #[test]
    fn test_every_seed_rule_is_loaded_and_valid() {
        let store = RuleStore::seeded();
        assert_eq!(store.len(), seed::ANIMAL_RULES.len());
        for (rule, (premises, conclusion)) in store.list().zip(seed::ANIMAL_RULES) {
            assert!(rule.concludes(conclusion));
            assert_eq!(rule.premises().len(), premises.len());
            assert!(store.validator().validate_premises(rule.premises()).is_ok());
        }
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut store = RuleStore::seeded();
        store.add(["有羽毛", " 会游泳 "], "水鸟").unwrap();
        assert_eq!(store.len(), 16);
        assert_eq!(store.rules().last().unwrap().to_string(), "有羽毛 ∧ 会游泳 → 水鸟");
    }

    #[test]
    fn test_add_unknown_feature_leaves_store_unchanged() {
        let mut store = RuleStore::seeded();
        let before: Vec<Rule> = store.list().cloned().collect();
        let err = store.add(["有毛发", "会说话"], "鹦鹉").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownFeature {
                token: "会说话".to_string()
            }
        );
        assert_eq!(store.rules(), before.as_slice());
    }

    #[test]
    fn test_add_blank_premises() {
        let mut store = RuleStore::seeded();
        let err = store.add(["  ", ""], "哺乳类").unwrap_err();
        assert_eq!(err, ValidationError::EmptyPremises);
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn test_add_line() {
        let mut store = RuleStore::seeded();
        store.add_line("哺乳类 有爪，猫科").unwrap();
        assert!(store.get(15).unwrap().concludes("猫科"));

        let err = store.add_line("哺乳类 有爪 猫科").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRule { .. }));
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn test_added_conclusion_is_not_a_premise_until_allowed() {
        let mut store = RuleStore::seeded();
        store.add_line("哺乳类 有爪，猫科").unwrap();

        let err = store.add_line("猫科 黄褐色，狮").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownFeature { ref token } if token == "猫科"));

        assert!(store.allow_premise("猫科"));
        store.add_line("猫科 黄褐色，狮").unwrap();
        assert_eq!(store.len(), 17);
    }

    #[test]
    fn test_remove_at() {
        let mut store = RuleStore::seeded();
        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.to_string(), "有毛发 → 哺乳类");
        assert_eq!(store.len(), 14);
        assert_eq!(store.get(0).unwrap().to_string(), "产奶 → 哺乳类");
    }

    #[test]
    fn test_remove_out_of_range_leaves_store_unchanged() {
        let mut store = RuleStore::seeded();
        let err = store.remove_at(15).unwrap_err();
        assert_eq!(err, IndexError::OutOfRange { index: 15, len: 15 });
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = RuleStore::new(Vocabulary::animals());
        assert_eq!(store.remove_at(0).unwrap_err(), IndexError::EmptyStore);
    }

    #[test]
    fn test_first_concluding_uses_store_order() {
        let store = RuleStore::seeded();
        let (index, rule) = store.first_concluding("哺乳类").unwrap();
        assert_eq!(index, 0);
        assert_eq!(rule.premises()[0].as_str(), "有毛发");
        assert!(store.first_concluding("未知结论").is_none());
    }

    #[test]
    fn test_list_is_restartable() {
        let store = RuleStore::seeded();
        assert_eq!(store.list().count(), store.list().count());
        assert_eq!(store.list().next(), store.get(0));
    }

    #[test]
    fn test_render_listing_is_one_based() {
        let store = RuleStore::seeded();
        let listing = store.render_listing();
        assert_eq!(listing[0], "1. 有毛发 → 哺乳类");
        assert_eq!(listing.len(), 15);
    }

    #[test]
    fn test_custom_syntax() {
        let mut store = RuleStore::seeded().with_syntax(RuleSyntax::with_separator('>'));
        store.add_line("有毛发 有爪 > 猫科").unwrap();
        assert_eq!(store.len(), 16);
    }
}
