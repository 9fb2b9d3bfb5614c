//! Host-UI collaborator traits.
//!
//! The crate never touches a live DOM. Everything it needs from the
//! page — field value, input mode, focus, indicator styling — goes
//! through these traits, so widgets can be driven by a real rendering
//! layer or by mock handles in tests.
//!
//! Implementors are handles: a host will typically wrap a shared
//! reference to its element and make the handle `Clone`, the way DOM
//! node references behave.

use secrecy::SecretString;
use thiserror::Error;

use crate::types::{InputMode, Rule, RuleState, StrengthClass};

/// Error type for widget attachment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    /// The target element does not accept text entry.
    #[error("target element is not a text-entry field")]
    NotTextEntry,

    /// The field already carries this widget.
    ///
    /// Each attachment adds listeners and a control, so attaching
    /// twice would double them up; the marker class check makes that
    /// an explicit error instead of a silent duplicate.
    #[error("widget already attached to this field (marker class {0:?})")]
    AlreadyAttached(&'static str),
}

/// Handle to the primary text-entry field.
pub trait TextField {
    /// Whether the underlying element accepts text entry at all.
    fn is_text_entry(&self) -> bool;

    /// Current field content.
    fn value(&self) -> SecretString;

    /// Replaces the field content.
    ///
    /// Writing the value fires the host's change notifications, so
    /// the widgets never call this for presentation changes such as
    /// visibility toggling.
    fn set_value(&mut self, value: SecretString);

    fn input_mode(&self) -> InputMode;

    fn set_input_mode(&mut self, mode: InputMode);

    /// Gives the field input focus.
    fn focus(&mut self);

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str);
}

/// Handle to the strength/validity display fragment.
pub trait IndicatorPanel {
    /// Sets the detail panel header text. Called once at attachment.
    fn set_detail_header(&mut self, text: &str);

    /// Sets one detail row's descriptive text. Called once at
    /// attachment.
    fn set_rule_text(&mut self, rule: Rule, text: &str);

    /// Sets one detail row to pass, fail, or neutral.
    fn set_rule_state(&mut self, rule: Rule, state: RuleState);

    /// Sets the single current-class attribute on the strength element.
    fn set_strength_class(&mut self, class: StrengthClass);

    /// Sets the summary display string.
    fn set_strength_text(&mut self, text: &str);

    /// Shows or hides the validity detail panel.
    fn set_detail_visible(&mut self, visible: bool);
}

/// Handle to the auxiliary toggle control the host created.
pub trait ToggleControl {
    /// Replaces the label's class list.
    fn set_label_classes(&mut self, classes: &str);

    /// Sets the tooltip text on the label.
    fn set_tooltip(&mut self, text: &str);
}
