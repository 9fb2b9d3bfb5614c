//! Digit rule - checks for at least one decimal digit.

use secrecy::{ExposeSecret, SecretString};

/// True iff the password contains at least one decimal digit (0-9).
pub fn has_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}
