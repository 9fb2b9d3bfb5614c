//! Combined attachment entry point.
//!
//! Mirrors the single-call host API: pass whichever widget options
//! are wanted and get back a handle holding the attached widgets.

use crate::host::{AttachError, IndicatorPanel, TextField, ToggleControl};
use crate::indicator::{INDICATOR_MARKER_CLASS, StrengthIndicator};
use crate::scorer::Scorer;
use crate::settings::{EvaluatorSettings, ToggleSettings};
use crate::toggle::{IdSequence, TOGGLE_MARKER_CLASS, VisibilityToggle};

/// Visibility-toggle half of a combined attachment.
pub struct ToggleAttachment<C> {
    pub control: C,
    pub settings: ToggleSettings,
}

/// Strength-indicator half of a combined attachment.
pub struct StrengthAttachment<P, S> {
    pub panel: P,
    pub settings: EvaluatorSettings,
    pub scorer: S,
}

/// The widgets attached to one password field.
pub struct PasswordField<F, C, P, S> {
    pub toggle: Option<VisibilityToggle<F, C>>,
    pub strength: Option<StrengthIndicator<F, P, S>>,
}

/// Attaches the strength indicator and/or the visibility toggle to a
/// password field, based on which options are present.
///
/// The field handle is cloned per widget; host handles are cheap
/// references to the same element. All preconditions are checked
/// before either widget attaches, so a failure never leaves a partial
/// setup behind.
pub fn attach_password_field<F, C, P, S>(
    field: F,
    ids: &mut IdSequence,
    toggle: Option<ToggleAttachment<C>>,
    strength: Option<StrengthAttachment<P, S>>,
) -> Result<PasswordField<F, C, P, S>, AttachError>
where
    F: TextField + Clone,
    C: ToggleControl,
    P: IndicatorPanel,
    S: Scorer,
{
    if !field.is_text_entry() {
        return Err(AttachError::NotTextEntry);
    }
    if strength.is_some() && field.has_class(INDICATOR_MARKER_CLASS) {
        return Err(AttachError::AlreadyAttached(INDICATOR_MARKER_CLASS));
    }
    if toggle.is_some() && field.has_class(TOGGLE_MARKER_CLASS) {
        return Err(AttachError::AlreadyAttached(TOGGLE_MARKER_CLASS));
    }

    let strength = match strength {
        Some(options) => Some(StrengthIndicator::attach(
            field.clone(),
            options.panel,
            options.settings,
            options.scorer,
        )?),
        None => None,
    };
    let toggle = match toggle {
        Some(options) => Some(VisibilityToggle::attach(
            field,
            options.control,
            options.settings,
            ids,
        )?),
        None => None,
    };

    Ok(PasswordField { toggle, strength })
}
