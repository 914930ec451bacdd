/*
 * File: /src/config.rs
 * Created Date: Friday, January 26th 2024
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Mining thresholds, algorithm selection and argument parsing
 */
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::MiningError;

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Support threshold, either a transaction count or a fraction of all transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MinSupport {
    Absolute(usize),
    Fraction(f64),
}

impl MinSupport {
    pub fn validate(&self) -> Result<(), MiningError> {
        match *self {
            MinSupport::Absolute(0) => Err(MiningError::InvalidMinSupport(
                "absolute support must be at least 1".to_string(),
            )),
            MinSupport::Absolute(_) => Ok(()),
            MinSupport::Fraction(f) if !(0.0..=1.0).contains(&f) => Err(
                MiningError::InvalidMinSupport(format!("fraction {} is outside [0, 1]", f)),
            ),
            MinSupport::Fraction(_) => Ok(()),
        }
    }

    /// Absolute threshold for a run over `transaction_count` transactions.
    ///
    /// A fraction is truncated (`floor(f × n)`); a result of 0 is raised to 1.
    pub fn resolve(&self, transaction_count: usize) -> usize {
        match *self {
            MinSupport::Absolute(count) => count,
            MinSupport::Fraction(f) => {
                let count = (f * transaction_count as f64).floor() as usize;
                if count == 0 {
                    warn!(
                        "Support fraction {} of {} transactions truncates to 0, using 1",
                        f, transaction_count
                    );
                    1
                } else {
                    count
                }
            }
        }
    }
}

impl FromStr for MinSupport {
    type Err = MiningError;

    /// `"3"` is an absolute count, anything with a decimal point or exponent a fraction
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let support = if s.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            let f = s
                .parse::<f64>()
                .map_err(|_| MiningError::InvalidMinSupport(format!("'{}' is not a number", s)))?;
            MinSupport::Fraction(f)
        } else {
            let count = s.parse::<usize>().map_err(|_| {
                MiningError::InvalidMinSupport(format!("'{}' is not a non-negative integer", s))
            })?;
            MinSupport::Absolute(count)
        };
        support.validate()?;
        Ok(support)
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinSupport::Absolute(count) => write!(f, "{}", count),
            MinSupport::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}

pub fn validate_min_confidence(min_confidence: f64) -> Result<(), MiningError> {
    if (0.0..=1.0).contains(&min_confidence) {
        Ok(())
    } else {
        Err(MiningError::InvalidMinConfidence(min_confidence))
    }
}

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Breadth-first candidate generation
    Apriori,
    /// Depth-first tid-list intersection
    Eclat,
    /// Depth-first diffsets
    DEclat,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Apriori, Algorithm::Eclat, Algorithm::DEclat];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Apriori => "apriori",
            Algorithm::Eclat => "eclat",
            Algorithm::DEclat => "declat",
        }
    }

    /// The input layout each strategy reads natively
    pub fn preferred_format(&self) -> InputFormat {
        match self {
            Algorithm::Apriori => InputFormat::Horizontal,
            Algorithm::Eclat | Algorithm::DEclat => InputFormat::Vertical,
        }
    }
}

impl FromStr for Algorithm {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "eclat" => Ok(Algorithm::Eclat),
            "declat" => Ok(Algorithm::DEclat),
            other => Err(MiningError::InvalidArguments(format!(
                "unknown algorithm '{}' (expected apriori, eclat or declat)",
                other
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputFormat {
    /// One transaction per line
    Horizontal,
    /// One `item: tid,tid,...` line per item
    Vertical,
}

/// Parameters of a single mining run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    pub algorithm: Algorithm,
    pub min_support: MinSupport,
    /// Only used when `generate_rules` is set
    pub min_confidence: f64,
    pub generate_rules: bool,
    /// Falls back to the algorithm's preferred format
    pub input_format: Option<InputFormat>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Apriori,
            min_support: MinSupport::Absolute(1),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            generate_rules: false,
            input_format: None,
        }
    }
}

impl MiningConfig {
    pub fn validate(&self) -> Result<(), MiningError> {
        self.min_support.validate()?;
        validate_min_confidence(self.min_confidence)
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| self.algorithm.preferred_format())
    }
}

/// Command line configuration of the `fast_itemset` binary
pub struct Config {
    data_path: PathBuf,
    mining: MiningConfig,
    output: Option<PathBuf>,
    command: String,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- eclat data/chess_vertical.dat 0.8 0.9 --output Results/chess.txt
    /// ```
    pub fn new(args: impl Iterator<Item = String>) -> Result<Config, MiningError> {
        // args:
        // 0: program name
        // 1: algorithm
        // 2: data path
        // 3: minsup (count or fraction)
        // 4: minconf (optional, enables rule generation)
        // --output <path> anywhere after the program name
        let args: Vec<String> = args.collect();
        let command = args.join(" ");
        let mut args = args.into_iter().skip(1);
        let mut positional = Vec::new();
        let mut output = None;
        while let Some(arg) = args.next() {
            if arg == "--output" || arg == "-o" {
                let path = args.next().ok_or_else(|| {
                    MiningError::InvalidArguments("--output needs a path".to_string())
                })?;
                output = Some(PathBuf::from(path));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() < 3 || positional.len() > 4 {
            return Err(MiningError::InvalidArguments(
                "usage: fast_itemset <apriori|eclat|declat> <data_file> <minsup> [<minconf>] [--output <file>]"
                    .to_string(),
            ));
        }

        let algorithm = positional[0].parse::<Algorithm>()?;
        let data_path = PathBuf::from(&positional[1]);
        let min_support = positional[2].parse::<MinSupport>()?;
        let (min_confidence, generate_rules) = match positional.get(3) {
            Some(raw) => {
                let c = raw.trim().parse::<f64>().map_err(|_| {
                    MiningError::InvalidArguments(format!("'{}' is not a confidence", raw))
                })?;
                (c, true)
            }
            None => (DEFAULT_MIN_CONFIDENCE, false),
        };

        let mining = MiningConfig {
            algorithm,
            min_support,
            min_confidence,
            generate_rules,
            input_format: None,
        };
        mining.validate()?;

        Ok(Config {
            data_path,
            mining,
            output,
            command,
        })
    }

    pub fn get_data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn get_mining(&self) -> &MiningConfig {
        &self.mining
    }

    pub fn get_output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// The full invocation, program name included
    pub fn get_command(&self) -> &str {
        &self.command
    }
}
