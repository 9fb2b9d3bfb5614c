//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// True iff the password has at least `min_length` characters.
///
/// Counts characters, not bytes, so multi-byte input is not
/// over-counted.
pub fn has_min_length(password: &SecretString, min_length: usize) -> bool {
    password.expose_secret().chars().count() >= min_length
}
