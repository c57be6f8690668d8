#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::Serialize;

use crate::{
    evaluation::Evaluation,
    policies::{attendance, consensus},
};

/// An error raised when more evaluations are submitted than the calculator
/// accepts in one batch.
#[derive(thiserror::Error, Debug)]
#[error("Maximum number of evaluations is {max}, got {count}")]
pub struct CapacityExceeded {
    /// The number of evaluations that were submitted.
    pub count: usize,
    /// The maximum the calculator accepts.
    pub max:   usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Reporting details carried alongside the rounded figures of a calculation.
pub struct CalculationDetails {
    /// How many evaluations went into the weighted average.
    pub evaluations_count:  usize,
    /// Whether minimum attendance was met, as given by the caller.
    pub attendance_met:     bool,
    /// Whether a non-empty vote set was unanimously affirmative.
    pub teachers_consensus: bool,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
/// A struct holding the outcome of one grade calculation.
///
/// All four figures are rounded to 2 decimal places for reporting; the
/// unrounded intermediates are not retained.
pub struct CalculationResult {
    /// Sum of each evaluation's weighted score.
    #[builder(getter)]
    pub weighted_average: f64,
    /// Points deducted for missing minimum attendance.
    #[builder(getter)]
    pub penalty:          f64,
    /// Points granted by unanimous teacher consensus.
    #[builder(getter)]
    pub extra_points:     f64,
    /// The reported final grade, clamped to `[0, 20]`.
    #[builder(getter)]
    pub final_score:      f64,
    /// Reporting details for this calculation.
    pub details:          CalculationDetails,
}

impl Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/20.00", self.final_score)
    }
}

/// A struct owning the end-to-end grade calculation algorithm.
///
/// Holds no state; every call to [`GradeCalculator::calculate`] is independent
/// and returns identical results for identical inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct GradeCalculator;

impl GradeCalculator {
    /// Most evaluations accepted in a single calculation.
    pub const MAX_EVALUATIONS: usize = 10;

    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Calculates the final grade from evaluations, the attendance flag, and
    /// teacher votes.
    ///
    /// Sums the weighted scores in slice order, applies the attendance
    /// penalty and the consensus bonus to the unrounded average, clamps the
    /// result to `[0, 20]`, and rounds the reported figures to 2 decimal
    /// places. Fails with [`CapacityExceeded`] when more than
    /// [`Self::MAX_EVALUATIONS`] evaluations are submitted; exactly that many
    /// is accepted.
    pub fn calculate(
        &self,
        evaluations: &[Evaluation],
        attendance_met: bool,
        votes: &[bool],
    ) -> Result<CalculationResult, CapacityExceeded> {
        if evaluations.len() > Self::MAX_EVALUATIONS {
            return Err(CapacityExceeded {
                count: evaluations.len(),
                max:   Self::MAX_EVALUATIONS,
            });
        }

        let weighted_average: f64 = evaluations.iter().map(Evaluation::weighted_score).sum();

        let penalty = attendance::calculate_penalty(weighted_average, attendance_met);
        let extra_points = consensus::calculate_extra_points(votes);

        let final_score = (weighted_average - penalty + extra_points).clamp(0.0, 20.0);

        tracing::debug!(
            weighted_average,
            penalty,
            extra_points,
            final_score,
            "calculated grade for {} evaluation(s)",
            evaluations.len()
        );

        Ok(CalculationResult::builder()
            .weighted_average(round2(weighted_average))
            .penalty(round2(penalty))
            .extra_points(round2(extra_points))
            .final_score(round2(final_score))
            .details(CalculationDetails {
                evaluations_count:  evaluations.len(),
                attendance_met,
                teachers_consensus: !votes.is_empty() && votes.iter().all(|&v| v),
            })
            .build())
    }
}

/// Rounds a value to 2 decimal places for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(15.799999999999999), 15.8);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(6.0), 6.0);
    }
}
