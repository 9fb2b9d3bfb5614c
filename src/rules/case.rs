//! Case rules - check for uppercase and lowercase letters.
//!
//! A character only counts if it is cased at all: caseless scripts
//! report neither lowercase nor uppercase.

use secrecy::{ExposeSecret, SecretString};

/// True iff the password contains at least one lowercase letter.
pub fn has_lower(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// True iff the password contains at least one uppercase letter.
pub fn has_upper(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}
