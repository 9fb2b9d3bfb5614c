//! Local password rules
//!
//! Each rule checks one aspect of the password; the evaluator combines
//! them into a [`crate::types::ValidityReport`].

mod case;
mod digit;
mod length;

pub use case::{has_lower, has_upper};
pub use digit::has_digit;
pub use length::has_min_length;
