//! Password field widget core
//!
//! This library provides the decision logic behind a password-input
//! widget pair: a visibility toggle that flips the field between
//! masked and plain-text rendering, and a strength indicator that
//! classifies the password against local rules plus an external
//! scoring delegate on every keystroke.
//!
//! Rendering stays on the host side: widgets talk to the page through
//! the host-UI traits ([`TextField`], [`IndicatorPanel`],
//! [`ToggleControl`]), so the same logic runs against a real UI layer
//! or against mock handles in tests.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,ignore
//! use pwd_field::{
//!     EvaluatorSettings, IdSequence, StrengthIndicator, ToggleSettings, VisibilityToggle,
//! };
//!
//! let mut ids = IdSequence::new();
//!
//! // `field`, `panel` and `control` are host-side handles
//! // implementing the `host` traits.
//! let mut toggle =
//!     VisibilityToggle::attach(field.clone(), control, ToggleSettings::default(), &mut ids)?;
//! let mut indicator = StrengthIndicator::attach(
//!     field,
//!     panel,
//!     EvaluatorSettings::default(),
//!     |pwd: &str| Ok(zxcvbn_score(pwd)),
//! )?;
//!
//! // Wire host events to the widget handlers:
//! // input/keyup -> indicator.handle_input()
//! // focus/blur  -> indicator.handle_focus() / indicator.handle_blur()
//! // toggle click -> toggle.activate()
//! ```

// Internal modules
mod attach;
mod evaluator;
mod host;
mod indicator;
mod rules;
mod scorer;
mod settings;
mod toggle;
mod types;

#[cfg(test)]
pub(crate) mod testutil;

// Public API
pub use attach::{PasswordField, StrengthAttachment, ToggleAttachment, attach_password_field};
pub use evaluator::{STRONG_SCORE, evaluate};
pub use host::{AttachError, IndicatorPanel, TextField, ToggleControl};
pub use indicator::{INDICATOR_MARKER_CLASS, StrengthIndicator};
pub use scorer::{Scorer, ScorerError};
pub use settings::{
    DEFAULT_MIN_LENGTH, EvaluatorSettings, StrengthText, ToggleSettings, ValidityText,
};
pub use toggle::{IdSequence, TOGGLE_MARKER_CLASS, VisibilityToggle};
pub use types::{Evaluation, InputMode, Rule, RuleState, StrengthClass, ValidityReport};
