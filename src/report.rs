/*
 * File: /src/report.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Mining report, run statistics and text output
 */
use std::fmt;
use std::io::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Algorithm;
use crate::error::MiningError;
use crate::itemset::FrequentItemset;
use crate::rules::AssociationRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Seconds,
    Megabytes,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Seconds => f.write_str("seconds"),
            Unit::Megabytes => f.write_str("MB"),
        }
    }
}

/// A labelled numeric statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub label: &'static str,
    pub value: f64,
    pub unit: Unit,
}

/// 运行统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub transactions: usize,
    /// Absolute threshold actually used
    pub min_support: usize,
    /// Set when `min_support` was resolved from a fraction
    #[serde(default)]
    pub support_fraction: Option<f64>,
    /// Absent when the store was handed over already loaded
    pub load_time: Option<Duration>,
    pub mining_time: Duration,
    pub rule_gen_time: Option<Duration>,
    /// Heap high-water mark of the mining phase only
    pub peak_memory_mb: f64,
}

impl RunStats {
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::new();
        if let Some(load) = self.load_time {
            out.push(Measurement {
                label: "Load Time",
                value: load.as_secs_f64(),
                unit: Unit::Seconds,
            });
        }
        out.push(Measurement {
            label: "Mining Time",
            value: self.mining_time.as_secs_f64(),
            unit: Unit::Seconds,
        });
        if let Some(rules) = self.rule_gen_time {
            out.push(Measurement {
                label: "Rule Gen Time",
                value: rules.as_secs_f64(),
                unit: Unit::Seconds,
            });
        }
        out.push(Measurement {
            label: "Peak Memory",
            value: self.peak_memory_mb,
            unit: Unit::Megabytes,
        });
        out
    }
}

/// Output of one mining run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningReport {
    /// Invocation that produced the report, echoed at the top of the text output
    #[serde(default)]
    pub command: Option<String>,
    pub algorithm: Algorithm,
    /// Discovery order of the engine
    pub itemsets: Vec<FrequentItemset>,
    /// `None` when rule generation was not requested
    pub rules: Option<Vec<AssociationRule>>,
    pub stats: RunStats,
}

impl MiningReport {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "[{}] {} frequent itemsets over {} transactions (min support {})",
            self.algorithm,
            self.itemsets.len(),
            self.stats.transactions,
            self.stats.min_support
        );
        if let Some(rules) = &self.rules {
            summary.push_str(&format!(", {} rules", rules.len()));
        }
        if let Some(longest) = self.itemsets.iter().map(|f| f.itemset.len()).max() {
            summary.push_str(&format!(", longest itemset {}", longest));
        }
        summary
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Writes the plain-text result layout: the command (if known),
    /// itemsets, rules (if generated), then execution statistics.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MiningError> {
        if let Some(command) = &self.command {
            writeln!(writer, "== Command ==\n{}\n", command)?;
        }
        writeln!(writer, "== Frequent Itemsets ==")?;
        for fi in &self.itemsets {
            writeln!(writer, "{}", fi)?;
        }

        if let Some(rules) = &self.rules {
            writeln!(writer, "\n== Confident Association Rules ==")?;
            for rule in rules {
                writeln!(writer, "{}", rule)?;
            }
        }

        writeln!(writer, "\n== Execution Statistics ==")?;
        writeln!(writer, "Algorithm: {}", self.algorithm)?;
        writeln!(writer, "Transactions: {}", self.stats.transactions)?;
        match self.stats.support_fraction {
            Some(fraction) => writeln!(
                writer,
                "Min Support: {} (minsup fraction {} applied)",
                self.stats.min_support, fraction
            )?,
            None => writeln!(writer, "Min Support: {}", self.stats.min_support)?,
        }
        for m in self.stats.measurements() {
            match m.unit {
                Unit::Seconds => writeln!(writer, "{}: {:.4} {}", m.label, m.value, m.unit)?,
                Unit::Megabytes => writeln!(writer, "{}: {:.2} {}", m.label, m.value, m.unit)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemset::Itemset;

    fn report(rules: Option<Vec<AssociationRule>>) -> MiningReport {
        MiningReport {
            command: None,
            algorithm: Algorithm::Eclat,
            itemsets: vec![
                FrequentItemset::new(Itemset::new(["a"]).unwrap(), 3),
                FrequentItemset::new(Itemset::new(["b", "a"]).unwrap(), 2),
            ],
            rules,
            stats: RunStats {
                transactions: 4,
                min_support: 2,
                support_fraction: None,
                load_time: Some(Duration::from_millis(1500)),
                mining_time: Duration::from_millis(250),
                rule_gen_time: None,
                peak_memory_mb: 1.5,
            },
        }
    }

    #[test]
    fn test_write_without_rules() {
        let mut out = Vec::new();
        report(None).write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "== Frequent Itemsets ==\n\
             a (3)\n\
             a b (2)\n\
             \n== Execution Statistics ==\n\
             Algorithm: eclat\n\
             Transactions: 4\n\
             Min Support: 2\n\
             Load Time: 1.5000 seconds\n\
             Mining Time: 0.2500 seconds\n\
             Peak Memory: 1.50 MB\n"
        );
    }

    #[test]
    fn test_write_with_rules() {
        let rule = AssociationRule {
            antecedent: Itemset::new(["a"]).unwrap(),
            consequent: Itemset::new(["b"]).unwrap(),
            confidence: 2.0 / 3.0,
        };
        let mut out = Vec::new();
        report(Some(vec![rule])).write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Confident Association Rules ==\na => b (conf: 0.67)\n"));
    }

    #[test]
    fn test_measurements_units() {
        let mut stats = report(None).stats;
        stats.rule_gen_time = Some(Duration::from_secs(2));
        let labels: Vec<_> = stats.measurements().iter().map(|m| (m.label, m.unit)).collect();
        assert_eq!(
            labels,
            vec![
                ("Load Time", Unit::Seconds),
                ("Mining Time", Unit::Seconds),
                ("Rule Gen Time", Unit::Seconds),
                ("Peak Memory", Unit::Megabytes),
            ]
        );
    }

    #[test]
    fn test_summary() {
        let summary = report(Some(Vec::new())).summary();
        assert_eq!(
            summary,
            "[eclat] 2 frequent itemsets over 4 transactions (min support 2), 0 rules, longest itemset 2"
        );
    }

    #[test]
    fn test_command_and_fraction_lines() {
        let mut report = report(None).with_command("fast_itemset eclat data/chess.dat 0.5");
        report.stats.support_fraction = Some(0.5);
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "== Command ==\nfast_itemset eclat data/chess.dat 0.5\n\n== Frequent Itemsets ==\n"
        ));
        assert!(text.contains("Min Support: 2 (minsup fraction 0.5 applied)\n"));
    }
}
