//! Backward (goal-driven) chaining.
//!
//! Goals are expanded breadth-first. For each non-base goal only the first
//! rule in store order that concludes it is explored; alternatives are never
//! tried. A rule whose content was already expanded is not expanded again,
//! even when reached through a different sub-goal. Goals that no rule
//! concludes are recorded as unresolved and the search carries on.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::fact::Fact;
use crate::rule::RuleFingerprint;
use crate::store::RuleStore;

/// A rule expansion recorded during a backward run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    /// Breadth-first level of the goal; the top-level goal is 0.
    pub depth: usize,
    /// Position of the expanded rule in the store.
    pub rule_index: usize,
    /// Premises that must hold.
    pub premises: Vec<Fact>,
    /// The goal being proved.
    pub conclusion: Fact,
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let premises: Vec<&str> = self.premises.iter().map(Fact::as_str).collect();
        write!(f, "{} → {}", premises.join(" ∧ "), self.conclusion)
    }
}

/// Outcome of a backward run.
#[derive(Debug, Clone, Serialize)]
pub struct BackwardResult {
    /// Goal the run started from.
    pub goal: Fact,
    /// Rule expansions in breadth-first order.
    pub trace: Vec<ProofStep>,
    /// Base facts that would have to hold, sorted.
    pub required: BTreeSet<Fact>,
    /// Goals no rule concludes, in discovery order.
    pub unresolved: Vec<Fact>,
}

impl BackwardResult {
    /// Returns true if no sub-goal was left unresolved and the search
    /// reached at least one base fact. Expansions that only cycle between
    /// derived facts never ground the goal, so they do not count.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && !self.required.is_empty()
    }

    /// Required base facts in sorted order.
    pub fn required_facts(&self) -> impl Iterator<Item = &Fact> {
        self.required.iter()
    }
}

/// Backward chaining over a borrowed rule store.
#[derive(Debug, Clone, Copy)]
pub struct BackwardEngine<'a> {
    store: &'a RuleStore,
}

impl<'a> BackwardEngine<'a> {
    /// Creates an engine over `store`.
    #[must_use]
    pub fn new(store: &'a RuleStore) -> Self {
        Self { store }
    }

    /// Finds the base facts sufficient to prove `goal`.
    pub fn prove(&self, goal: impl Into<Fact>) -> BackwardResult {
        let goal = goal.into();
        let vocabulary = self.store.vocabulary();

        let mut queue: VecDeque<(Fact, usize)> = VecDeque::from([(goal.clone(), 0)]);
        let mut visited: HashSet<RuleFingerprint> = HashSet::new();
        let mut required = BTreeSet::new();
        let mut unresolved = Vec::new();
        let mut trace = Vec::new();

        while let Some((current, depth)) = queue.pop_front() {
            if vocabulary.is_base(current.as_str()) {
                required.insert(current);
                continue;
            }

            let Some((rule_index, rule)) = self.store.first_concluding(current.as_str()) else {
                warn!(goal = %current, "no rule concludes goal");
                unresolved.push(current);
                continue;
            };

            if !visited.insert(rule.fingerprint()) {
                debug!(goal = %current, rule_index, "rule already expanded");
                continue;
            }

            let step = ProofStep {
                depth,
                rule_index,
                premises: rule.premises().to_vec(),
                conclusion: current,
            };
            debug!(depth, rule_index, step = %step, "goal expanded");

            for premise in rule.premises() {
                if !required.contains(premise) {
                    queue.push_back((premise.clone(), depth + 1));
                }
            }
            trace.push(step);
        }

        info!(
            goal = %goal,
            steps = trace.len(),
            required = required.len(),
            unresolved = unresolved.len(),
            "backward chaining finished"
        );

        BackwardResult {
            goal,
            trace,
            required,
            unresolved,
        }
    }
}
