//! Error types for team tables.
//!
//! Only load time can fail: a table is either fully valid or never built.
//! Lookup misses are `None`, not errors.

use crate::{Season, ValidationReport};
use thiserror::Error;

/// Result type for team table operations.
pub type Result<T> = std::result::Result<T, TeamError>;

/// Main error type for team table operations.
#[derive(Error, Debug)]
pub enum TeamError {
    /// The records violate one or more table invariants
    #[error("Team table for season {season} failed validation: {}", .report.summary())]
    InvalidTable {
        /// Season the table was tagged with
        season: Season,
        /// Every violation found
        report: ValidationReport,
    },

    /// Serialization/deserialization error (malformed JSON, missing or unknown fields)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lookup pattern could not be compiled
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TeamError {
    /// Returns the validation report if this is an invariant failure.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::InvalidTable { report, .. } => Some(report),
            _ => None,
        }
    }
}
