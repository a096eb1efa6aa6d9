//! Forward (data-driven) chaining.
//!
//! Starting from the asserted facts, every rule in the store is re-examined
//! pass after pass until a full pass derives nothing new. Facts are only
//! ever added, so the run always reaches a fixpoint.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ReasoningError;
use crate::fact::{Fact, FactKind, FactSet};
use crate::store::RuleStore;

/// A rule application recorded during a forward run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiredRule {
    /// Pass in which the rule fired, starting at 1.
    pub pass: usize,
    /// Position of the rule in the store at the time of the run.
    pub rule_index: usize,
    /// Premises of the rule.
    pub premises: Vec<Fact>,
    /// Newly derived fact.
    pub conclusion: Fact,
}

impl fmt::Display for FiredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let premises: Vec<&str> = self.premises.iter().map(Fact::as_str).collect();
        write!(f, "{} → {}", premises.join(" ∧ "), self.conclusion)
    }
}

/// Outcome of a forward run.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardResult {
    /// Facts the run started from.
    pub initial: FactSet,
    /// Rule firings in the order they happened.
    pub trace: Vec<FiredRule>,
    /// Working set at fixpoint: initial facts followed by derived facts.
    pub facts: FactSet,
    /// First terminal outcome in the working set, if any.
    pub classification: Option<Fact>,
    /// Number of passes, including the final pass that derived nothing.
    pub passes: usize,
    #[serde(skip)]
    intermediates: Vec<Fact>,
}

impl ForwardResult {
    /// Facts derived by the run, in derivation order.
    pub fn derived(&self) -> impl Iterator<Item = &Fact> {
        self.trace.iter().map(|step| &step.conclusion)
    }

    /// Derived facts that are intermediate categories, in derivation order.
    ///
    /// Hosts show these when no terminal outcome was reached.
    #[must_use]
    pub fn intermediates(&self) -> &[Fact] {
        &self.intermediates
    }

    /// Returns true if a terminal outcome was derived or asserted.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.classification.is_some()
    }
}

/// Forward chaining over a borrowed rule store.
#[derive(Debug, Clone, Copy)]
pub struct ForwardEngine<'a> {
    store: &'a RuleStore,
}

impl<'a> ForwardEngine<'a> {
    /// Creates an engine over `store`.
    #[must_use]
    pub fn new(store: &'a RuleStore) -> Self {
        Self { store }
    }

    /// Computes the closure of `initial` under the store's rules.
    ///
    /// # Errors
    /// `NoInitialFacts` if `initial` is empty.
    pub fn run(&self, initial: &FactSet) -> Result<ForwardResult, ReasoningError> {
        if initial.is_empty() {
            return Err(ReasoningError::NoInitialFacts);
        }

        let mut facts = initial.clone();
        let mut trace = Vec::new();
        let mut passes = 0;

        loop {
            passes += 1;
            let mut changed = false;

            for (rule_index, rule) in self.store.list().enumerate() {
                if facts.contains(rule.conclusion().as_str()) || !rule.is_satisfied_by(&facts) {
                    continue;
                }

                facts.insert(rule.conclusion().clone());
                let fired = FiredRule {
                    pass: passes,
                    rule_index,
                    premises: rule.premises().to_vec(),
                    conclusion: rule.conclusion().clone(),
                };
                debug!(pass = passes, rule_index, step = %fired, "rule fired");
                trace.push(fired);
                changed = true;
            }

            if !changed {
                break;
            }
        }

        let vocabulary = self.store.vocabulary();
        let classification = facts
            .iter()
            .find(|f| vocabulary.is_terminal(f.as_str()))
            .cloned();
        let intermediates = trace
            .iter()
            .map(|step| &step.conclusion)
            .filter(|f| vocabulary.kind(f.as_str()) == FactKind::Intermediate)
            .cloned()
            .collect();

        info!(
            initial = initial.len(),
            derived = trace.len(),
            passes,
            classification = classification.as_ref().map_or("-", Fact::as_str),
            "forward chaining reached fixpoint"
        );

        Ok(ForwardResult {
            initial: initial.clone(),
            trace,
            facts,
            classification,
            passes,
            intermediates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use crate::vocabulary::Vocabulary;

    fn facts(labels: &[&str]) -> FactSet {
        labels.iter().copied().collect()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let store = RuleStore::seeded();
        let err = ForwardEngine::new(&store).run(&FactSet::new()).unwrap_err();
        assert_eq!(err, ReasoningError::NoInitialFacts);
    }

    #[test]
    fn test_leopard_trace() {
        let store = RuleStore::seeded();
        let result = ForwardEngine::new(&store)
            .run(&facts(&["有毛发", "吃肉", "黄褐色", "有斑点"]))
            .unwrap();

        let fired: Vec<usize> = result.trace.iter().map(|s| s.rule_index).collect();
        assert_eq!(fired, vec![0, 4, 8]);
        assert_eq!(result.trace[2].to_string(), "食肉类 ∧ 黄褐色 ∧ 哺乳类 ∧ 有斑点 → 金钱豹");
        assert_eq!(result.passes, 2);
        assert_eq!(result.classification.as_ref().map(Fact::as_str), Some("金钱豹"));
    }

    #[test]
    fn test_later_pass_picks_up_earlier_rules() {
        // "b → c" sits before "a → b", so c needs a second pass.
        let vocab = Vocabulary::new([("1", "a")], ["b"], ["c"]);
        let store = RuleStore::with_rules(
            vocab,
            [Rule::new(["b"], "c").unwrap(), Rule::new(["a"], "b").unwrap()],
        );
        let result = ForwardEngine::new(&store).run(&facts(&["a"])).unwrap();
        assert_eq!(result.trace[0].pass, 1);
        assert_eq!(result.trace[1].pass, 2);
        assert_eq!(result.passes, 3);
        assert_eq!(result.classification.as_ref().map(Fact::as_str), Some("c"));
    }

    #[test]
    fn test_unclassified_run_surfaces_intermediates() {
        let store = RuleStore::seeded();
        let result = ForwardEngine::new(&store).run(&facts(&["有毛发", "吃肉"])).unwrap();
        assert!(!result.is_classified());
        let names: Vec<&str> = result.intermediates().iter().map(Fact::as_str).collect();
        assert_eq!(names, vec!["哺乳类", "食肉类"]);
    }

    #[test]
    fn test_no_rule_applies() {
        let store = RuleStore::seeded();
        let result = ForwardEngine::new(&store).run(&facts(&["长脖"])).unwrap();
        assert!(result.trace.is_empty());
        assert_eq!(result.passes, 1);
        assert_eq!(result.facts, result.initial);
    }

    #[test]
    fn test_asserted_conclusion_does_not_refire() {
        let store = RuleStore::seeded();
        let result = ForwardEngine::new(&store).run(&facts(&["有毛发", "哺乳类"])).unwrap();
        assert!(result.trace.iter().all(|s| s.conclusion.as_str() != "哺乳类"));
    }

    #[test]
    fn test_derived_matches_trace() {
        let store = RuleStore::seeded();
        let result = ForwardEngine::new(&store).run(&facts(&["有羽毛", "善飞"])).unwrap();
        let derived: Vec<&str> = result.derived().map(Fact::as_str).collect();
        assert_eq!(derived, vec!["鸟类", "信天翁"]);
    }
}
