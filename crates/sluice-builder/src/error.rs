//! Builder-specific error types.

use std::error::Error;
use std::fmt;

/// Errors raised when a verification queue is drained past its end.
///
/// One variant per queue kind, so telemetry can name the queue that ran
/// dry while the calling layer treats every variant identically: the
/// proof is invalid and the whole verification fails. There is no
/// recovery path — a builder that has produced one of these must be
/// abandoned, never resumed.
///
/// Variant discriminants are not a stable encoding; external consumers
/// should match on identity or rely on [`fmt::Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationError {
    /// The challenge queue had no element left.
    TooFewChallenges,
    /// The first-round MLE evaluation queue had no element left.
    TooFewFirstRoundMles,
    /// The final-round MLE evaluation queue had no element left.
    TooFewFinalRoundMles,
    /// The chi evaluation queue had no element left.
    TooFewChiEvaluations,
    /// The rho evaluation queue had no element left.
    TooFewRhoEvaluations,
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewChallenges => write!(f, "too few challenges"),
            Self::TooFewFirstRoundMles => {
                write!(f, "too few first round MLE evaluations")
            }
            Self::TooFewFinalRoundMles => {
                write!(f, "too few final round MLE evaluations")
            }
            Self::TooFewChiEvaluations => write!(f, "too few chi evaluations"),
            Self::TooFewRhoEvaluations => write!(f, "too few rho evaluations"),
        }
    }
}

impl Error for VerificationError {}
