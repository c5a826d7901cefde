//! Archetype rules and classification.
//!
//! - `Rule`: one named variant with core / at-least-one / banned clauses
//! - `RuleSet`: ordered rules, first match wins, implicit fallback last
//! - `ArchetypeClassifier`: the seam aggregation uses to classify decks

pub mod engine;
pub mod rule;
pub mod set;

pub use engine::{ArchetypeClassifier, Classification, FALLBACK_CATEGORY, FALLBACK_VARIANT};
pub use rule::Rule;
pub use set::{RuleSet, RulesData};
