/*
 * File: /src/pipeline.rs
 * Created Date: Monday, May 26th 2025
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Load → mine → rules pipeline with per-phase statistics
 */
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::config::{Algorithm, InputFormat, MinSupport, MiningConfig};
use crate::dataset::TransactionStore;
use crate::engine::SearchEngine;
use crate::error::MiningError;
use crate::memory::MemoryProbe;
use crate::report::{MiningReport, RunStats};
use crate::rules::RuleGenerator;
use crate::timestamp;

/// 挖掘Pipeline
///
/// Holds only configuration; every run builds its own search state and
/// returns a fresh [`MiningReport`], so one pipeline can serve many stores.
pub struct MiningPipeline {
    engine: Box<dyn SearchEngine>,
    rule_generator: Option<RuleGenerator>,
    config: MiningConfig,
}

impl MiningPipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Loads `path` in the configured format, then mines it.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<MiningReport, MiningError> {
        let path = path.as_ref();
        let format = self.config.input_format();
        info!(
            "[method: {}] [{}] Dataset: {} ({:?})",
            self.engine.name(),
            timestamp(),
            path.display(),
            format
        );

        let load_start = Instant::now();
        let store = TransactionStore::load(path, format)?;
        let load_time = load_start.elapsed();
        info!(
            "[method: {}] [{}] Dataloaded in {}ms",
            self.engine.name(),
            timestamp(),
            load_time.as_millis()
        );

        let mut report = self.run(&store)?;
        report.stats.load_time = Some(load_time);
        Ok(report)
    }

    /// Mines an already loaded store.
    pub fn run(&self, store: &TransactionStore) -> Result<MiningReport, MiningError> {
        let transactions = store.transaction_count();
        let min_support = self.config.min_support.resolve(transactions);
        debug!(
            "Resolved min support {} to {} over {} transactions",
            self.config.min_support, min_support, transactions
        );

        // Step 1: 挖掘频繁项集
        let probe = MemoryProbe::start();
        let mining_start = Instant::now();
        let itemsets = self.engine.search(store, min_support);
        let mining_time = mining_start.elapsed();
        let peak_memory_mb = probe.peak_megabytes();
        info!(
            "[method: {}] [{}] Mining done in {:.3}s, {} frequent itemsets (min support {})",
            self.engine.name(),
            timestamp(),
            mining_time.as_secs_f64(),
            itemsets.len(),
            min_support
        );

        // Step 2: 生成关联规则
        let (rules, rule_gen_time) = match &self.rule_generator {
            Some(generator) => {
                let rules_start = Instant::now();
                let rules = generator.generate(&itemsets);
                let elapsed = rules_start.elapsed();
                info!(
                    "[method: {}] [{}] Generated {} rules in {:.3}s (min confidence {})",
                    self.engine.name(),
                    timestamp(),
                    rules.len(),
                    elapsed.as_secs_f64(),
                    generator.min_confidence()
                );
                (Some(rules), Some(elapsed))
            }
            None => (None, None),
        };

        let support_fraction = match self.config.min_support {
            MinSupport::Fraction(fraction) => Some(fraction),
            MinSupport::Absolute(_) => None,
        };

        Ok(MiningReport {
            command: None,
            algorithm: self.config.algorithm,
            itemsets,
            rules,
            stats: RunStats {
                transactions,
                min_support,
                support_fraction,
                load_time: None,
                mining_time,
                rule_gen_time,
                peak_memory_mb,
            },
        })
    }
}

/// Pipeline构建器
pub struct PipelineBuilder {
    config: MiningConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: MiningConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MiningConfig) -> Self {
        self.config = config;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    pub fn min_support(mut self, min_support: MinSupport) -> Self {
        self.config.min_support = min_support;
        self
    }

    /// Sets the confidence threshold and turns rule generation on
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.config.min_confidence = min_confidence;
        self.config.generate_rules = true;
        self
    }

    pub fn generate_rules(mut self, generate: bool) -> Self {
        self.config.generate_rules = generate;
        self
    }

    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.config.input_format = Some(format);
        self
    }

    /// Validates the configuration; nothing runs if it is rejected.
    pub fn build(self) -> Result<MiningPipeline, MiningError> {
        self.config.validate()?;
        let rule_generator = if self.config.generate_rules {
            Some(RuleGenerator::new(self.config.min_confidence)?)
        } else {
            None
        };

        Ok(MiningPipeline {
            engine: self.config.algorithm.engine(),
            rule_generator,
            config: self.config,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
