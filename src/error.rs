/*
 * File: /src/error.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Error taxonomy for loading, configuration and mining
 */
use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised at the boundary between input data, configuration and the engines.
///
/// Empty results are never errors: a dataset where nothing reaches the
/// support threshold yields an empty itemset collection.
#[derive(Debug)]
pub enum MiningError {
    /// Malformed input line (1-based line number)
    DataFormat { line: usize, reason: String },
    InvalidMinSupport(String),
    InvalidMinConfidence(f64),
    EmptyItemset,
    InvalidArguments(String),
    Io(io::Error),
}

impl MiningError {
    pub(crate) fn data_format(line: usize, reason: impl Into<String>) -> Self {
        MiningError::DataFormat {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MiningError::DataFormat { line, reason } => {
                write!(f, "Malformed input at line {}: {}", line, reason)
            }
            MiningError::InvalidMinSupport(msg) => write!(f, "Invalid minimum support: {}", msg),
            MiningError::InvalidMinConfidence(c) => {
                write!(f, "Invalid minimum confidence {} (must be within [0, 1])", c)
            }
            MiningError::EmptyItemset => write!(f, "An itemset must contain at least one item"),
            MiningError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            MiningError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for MiningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MiningError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MiningError {
    fn from(e: io::Error) -> Self {
        MiningError::Io(e)
    }
}
