#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Stateless grading policies.
//!
//! Each policy is a pure function over its arguments; none holds state or
//! performs I/O, so calls are safe from any thread without coordination.

/// Penalty rule applied when minimum attendance was not met.
pub mod attendance {
    /// Fraction of the score deducted when attendance falls short.
    pub const PENALTY_RATE: f64 = 0.30;

    /// Calculates the penalty for not meeting minimum attendance.
    ///
    /// Returns 0 when attendance was met, otherwise 30% of the score as
    /// computed before penalties. Total over all reals; the score is not
    /// bounds-checked here.
    pub fn calculate_penalty(score: f64, attendance_met: bool) -> f64 {
        if attendance_met {
            return 0.0;
        }
        score * PENALTY_RATE
    }
}

/// Extra-point rule driven by teacher consensus.
pub mod consensus {
    /// Bonus granted when every cast vote is affirmative.
    pub const EXTRA_POINT_VALUE: f64 = 1.0;

    /// Calculates extra points from teacher agreement votes.
    ///
    /// An empty vote set grants nothing. Unanimity requires at least one
    /// vote, not at least two: a single affirmative vote earns the bonus.
    pub fn calculate_extra_points(votes: &[bool]) -> f64 {
        if votes.is_empty() {
            return 0.0;
        }
        if votes.iter().all(|&v| v) {
            EXTRA_POINT_VALUE
        } else {
            0.0
        }
    }
}
