//! Ordered rule sets.
//!
//! A `RuleSet` is loaded once and then only read. Order is part of the
//! contract: the first rule that matches a deck wins, so more specific
//! rules must be declared before more general ones.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::error::RuleSetError;

use super::rule::Rule;

const EMBEDDED_RULES: &str = include_str!("../../assets/rules.json");

/// On-disk shape of a rule file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RulesData {
    pub definitions: Vec<Rule>,
}

/// Immutable, ordered list of classification rules.
///
/// ## Example
///
/// ```
/// use archetype_stats::rules::{ArchetypeClassifier, RuleSet};
/// use archetype_stats::cards::Deck;
///
/// let rules = RuleSet::from_json(r#"{
///     "definitions": [
///         { "name": "Thors", "core_cards": ["Thor", "Beta Ray Bill"] }
///     ]
/// }"#).unwrap();
///
/// let deck: Deck = ["Thor", "Beta Ray Bill", "Odin"].into_iter().collect();
/// assert_eq!(rules.classify(&deck).variant, "Thors");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// A rule set with no explicit rules; everything falls back.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rules in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails validation.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        for (index, rule) in rules.iter().enumerate() {
            rule.validate(index)?;
        }
        let set = Self { rules };
        debug!(
            "loaded {} rules; supported archetypes: {:?}",
            set.len(),
            set.categories()
        );
        Ok(set)
    }

    /// Parse a `{ "definitions": [...] }` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a rule is invalid.
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        let data: RulesData = serde_json::from_str(json)?;
        Self::new(data.definitions)
    }

    /// Load the rule file bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn embedded() -> Result<Self, RuleSetError> {
        Self::from_json(EMBEDDED_RULES)
    }

    /// First rule matching the deck, with its position.
    #[must_use]
    pub fn find_match(&self, deck: &Deck) -> Option<(usize, &Rule)> {
        self.rules.iter().enumerate().find(|(_, rule)| rule.matches(deck))
    }

    /// Get a rule by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of explicit rules (the fallback is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no explicit rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct categories in first-declaration order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for rule in &self.rules {
            let category = rule.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Serialize back to the rule file format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&RulesData {
            definitions: self.rules.clone(),
        })
    }
}
