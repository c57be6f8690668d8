#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use anyhow::Context;
use serde::Serialize;

/// Highest score an evaluation may hold.
pub const MAX_SCORE: f64 = 20.0;
/// Highest weight percentage an evaluation may hold.
pub const MAX_WEIGHT: f64 = 100.0;

/// An enum to represent possible errors when constructing an evaluation.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    /// The score is outside the accepted range.
    #[error("Score must be between 0 and 20, got {0}")]
    ScoreOutOfRange(f64),
    /// The weight is outside the accepted range.
    #[error("Weight must be greater than 0 and at most 100, got {0}")]
    WeightOutOfRange(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// A struct representing one graded item: a score and its percentage weight.
///
/// Both fields are validated at construction and immutable afterwards.
pub struct Evaluation {
    /// The score received, within `[0, 20]`.
    score:  f64,
    /// The weight as a percentage, within `(0, 100]`.
    weight: f64,
}

impl Evaluation {
    /// Creates a new evaluation -
    /// * `score` - The score received, must be between 0 and 20 inclusive
    /// * `weight` - The weight percentage, must be greater than 0 and at most
    ///   100
    pub fn new(score: f64, weight: f64) -> Result<Self, ValidationError> {
        if score < 0.0 || score > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange(score));
        }
        if weight <= 0.0 || weight > MAX_WEIGHT {
            return Err(ValidationError::WeightOutOfRange(weight));
        }
        Ok(Self { score, weight })
    }

    /// Returns the score received.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the weight percentage.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the score scaled by the weight percentage.
    pub fn weighted_score(&self) -> f64 {
        self.score * (self.weight / 100.0)
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} @ {:.2}%", self.score, self.weight)
    }
}

impl FromStr for Evaluation {
    type Err = anyhow::Error;

    /// Parses an evaluation from a string in the format `score/weight`, eg.
    /// `15/50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (score, weight) = s
            .split_once('/')
            .with_context(|| format!("Expected SCORE/WEIGHT, got `{s}`"))?;
        let score = score.trim().parse::<f64>().context("Failed to parse score")?;
        let weight = weight.trim().parse::<f64>().context("Failed to parse weight")?;
        Ok(Evaluation::new(score, weight)?)
    }
}
