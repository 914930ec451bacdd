/*
 * File: /src/rules.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Confidence-filtered association rules
 */
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::validate_min_confidence;
use crate::error::MiningError;
use crate::itemset::{FrequentItemset, Itemset};

/// `antecedent ⇒ consequent` with `confidence = σ(A ∪ B) / σ(A)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (conf: {:.2})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// Derives rules from a finished frequent-itemset collection, whichever
/// engine produced it.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    min_confidence: f64,
}

impl RuleGenerator {
    pub fn new(min_confidence: f64) -> Result<Self, MiningError> {
        validate_min_confidence(min_confidence)?;
        Ok(Self { min_confidence })
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Every split `A ⇒ B` of every frequent itemset with confidence at or
    /// above the threshold.
    ///
    /// Antecedent supports come only from `frequent`; an antecedent that was
    /// never recorded counts as support 0 and its rules are skipped.
    /// Enumerates all `2^k − 2` splits per k-itemset.
    pub fn generate(&self, frequent: &[FrequentItemset]) -> Vec<AssociationRule> {
        let supports: HashMap<&Itemset, usize> = frequent
            .iter()
            .map(|f| (&f.itemset, f.support))
            .collect();

        let mut rules = Vec::new();
        for fi in frequent.iter().filter(|f| f.itemset.len() >= 2) {
            for size in 1..fi.itemset.len() {
                for antecedent in fi.itemset.iter().cloned().combinations(size) {
                    let Ok(antecedent) = Itemset::new(antecedent) else {
                        continue;
                    };
                    let antecedent_support = supports.get(&antecedent).copied().unwrap_or(0);
                    if antecedent_support == 0 {
                        continue;
                    }
                    let confidence = fi.support as f64 / antecedent_support as f64;
                    if confidence < self.min_confidence {
                        continue;
                    }
                    if let Some(consequent) = fi.itemset.difference(&antecedent) {
                        rules.push(AssociationRule {
                            antecedent,
                            consequent,
                            confidence,
                        });
                    }
                }
            }
        }

        debug!(
            "Generated {} rules from {} itemsets at min confidence {}",
            rules.len(),
            frequent.len(),
            self.min_confidence
        );
        rules
    }
}

impl Default for RuleGenerator {
    fn default() -> Self {
        Self {
            min_confidence: crate::config::DEFAULT_MIN_CONFIDENCE,
        }
    }
}
