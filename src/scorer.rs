//! External strength-scoring delegate.
//!
//! The scoring algorithm itself is opaque to this crate (zxcvbn or
//! similar); the evaluator only consumes an integer score, and only
//! asks for one when the password already passes the local rules.

use thiserror::Error;

/// Error type for scorer failures.
///
/// A failing delegate never takes the keystroke path down with it; the
/// evaluator catches this, logs it, and falls back to an unknown score.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("strength scorer failed: {0}")]
pub struct ScorerError(pub String);

/// Strength-scoring delegate. Higher scores mean stronger passwords.
pub trait Scorer {
    fn score(&self, password: &str) -> Result<i64, ScorerError>;
}

/// Plain closures work as scorers, so hosts can wire an existing
/// scoring function directly: `|pwd| Ok(zxcvbn_score(pwd))`.
impl<F> Scorer for F
where
    F: Fn(&str) -> Result<i64, ScorerError>,
{
    fn score(&self, password: &str) -> Result<i64, ScorerError> {
        self(password)
    }
}
