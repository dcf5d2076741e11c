//! Graph computations over the fetched dataset.
//!
//! ## Files
//! - `mutual.rs` — pairs of users who follow each other.
//! - `reachability.rs` — users exactly `n` hops away from a start user.
//!
//! Which one runs is fixed by the registration number, not by the dataset.

pub mod mutual;
pub mod reachability;

use crate::domain::models::Outcome;
use crate::error::SelectorError;
use crate::payload::Object;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    MutualFollowers,
    NthLevelFollowers,
}

impl SolverKind {
    /// Odd last-two-digit registration numbers get the mutual-follow solver,
    /// even ones get reachability.
    pub fn for_registration(reg_no: &str) -> Result<Self, SelectorError> {
        let invalid = || SelectorError::InvalidRegistration(reg_no.to_string());
        let tail = reg_no
            .len()
            .checked_sub(2)
            .and_then(|start| reg_no.get(start..))
            .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(invalid)?;
        let last_two: u8 = tail.parse().map_err(|_| invalid())?;

        Ok(if last_two % 2 == 1 {
            SolverKind::MutualFollowers
        } else {
            SolverKind::NthLevelFollowers
        })
    }

    /// Runs the selected solver. Unusable input degrades to an empty outcome
    /// of the matching variant.
    pub fn solve(self, data: &Object) -> Outcome {
        debug!(solver = %self, data = %serde_json::Value::Object(data.clone()), "solving");
        match self {
            SolverKind::MutualFollowers => {
                Outcome::MutualPairs(mutual::solve(data).unwrap_or_else(|e| {
                    warn!(solver = %self, error = %e, "dataset unusable, reporting empty outcome");
                    Vec::new()
                }))
            }
            SolverKind::NthLevelFollowers => {
                Outcome::Reachable(reachability::solve(data).unwrap_or_else(|e| {
                    warn!(solver = %self, error = %e, "dataset unusable, reporting empty outcome");
                    Vec::new()
                }))
            }
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::MutualFollowers => write!(f, "mutual_followers"),
            SolverKind::NthLevelFollowers => write!(f, "nth_level_followers"),
        }
    }
}
