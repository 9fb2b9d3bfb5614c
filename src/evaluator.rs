//! Password evaluation - main classification logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{has_digit, has_lower, has_min_length, has_upper};
use crate::scorer::Scorer;
use crate::types::{Evaluation, StrengthClass, ValidityReport};

/// Minimum delegate score classified as [`StrengthClass::Strong`].
pub const STRONG_SCORE: i64 = 3;

/// Evaluates a password against the local rules and, when they all
/// pass, the external scoring delegate.
///
/// Classification ladder, in order:
/// 1. empty password -> `Empty`
/// 2. any rule failing -> `Invalid`
/// 3. otherwise delegate once: score >= [`STRONG_SCORE`] -> `Strong`,
///    else -> `Acceptable`
///
/// The delegate is never called for empty or rule-failing passwords,
/// and is called exactly once otherwise. A failing delegate is
/// reported on the log channel and treated as an unknown score, which
/// maps to `Acceptable`; this path never panics.
pub fn evaluate<S: Scorer>(password: &SecretString, min_length: usize, scorer: &S) -> Evaluation {
    let validity = ValidityReport {
        has_digit: has_digit(password),
        has_lower: has_lower(password),
        has_upper: has_upper(password),
        has_min_length: has_min_length(password, min_length),
    };

    let pwd = password.expose_secret();

    let class = if pwd.is_empty() {
        StrengthClass::Empty
    } else if !validity.is_valid() {
        StrengthClass::Invalid
    } else {
        match scorer.score(pwd) {
            Ok(score) if score >= STRONG_SCORE => StrengthClass::Strong,
            Ok(_) => StrengthClass::Acceptable,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Strength scorer failed, treating score as unknown: {}", _err);
                StrengthClass::Acceptable
            }
        }
    };

    Evaluation { validity, class }
}
