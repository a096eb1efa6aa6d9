//! # chainrule - A propositional production-rule reasoner
//!
//! chainrule evaluates a fixed knowledge base of implication rules over named
//! facts. It answers two questions:
//!
//! - **Forward chaining**: given observed facts, which conclusions follow?
//! - **Backward chaining**: given a goal, which base facts would prove it?
//!
//! ## Core Concepts
//!
//! - **Fact**: an opaque, case-sensitive label
//! - **Rule**: a non-empty ordered set of premises implying one conclusion
//! - **RuleStore**: an ordered rule list; order is priority
//! - **Vocabulary**: base features, intermediate categories and terminal outcomes
//!
//! ## Usage
//!
//! ```rust
//! use chainrule::{BackwardEngine, FactSet, ForwardEngine, RuleStore};
//!
//! let mut store = RuleStore::seeded();
//! store.add_line("哺乳类 有爪，猫科").unwrap();
//!
//! let observed: FactSet = ["有毛发", "吃肉", "黄褐色", "有斑点"].into_iter().collect();
//! let forward = ForwardEngine::new(&store).run(&observed).unwrap();
//! assert_eq!(forward.classification.unwrap().as_str(), "金钱豹");
//!
//! let backward = BackwardEngine::new(&store).prove("斑马");
//! assert!(backward.unresolved.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backward;
pub mod error;
pub mod fact;
pub mod forward;
pub mod rule;
pub mod seed;
pub mod store;
pub mod syntax;
pub mod validation;
pub mod vocabulary;

// Re-export primary types at crate root for convenience
pub use backward::{BackwardEngine, BackwardResult, ProofStep};
pub use error::{ChainError, ChainResult, IndexError, ReasoningError, ValidationError};
pub use fact::{Fact, FactKind, FactSet};
pub use forward::{FiredRule, ForwardEngine, ForwardResult};
pub use rule::{Rule, RuleFingerprint};
pub use store::RuleStore;
pub use syntax::{RuleLine, RuleSyntax};
pub use validation::Validator;
pub use vocabulary::{Feature, Vocabulary};
