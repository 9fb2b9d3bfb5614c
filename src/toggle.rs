//! Visibility toggle widget - flips the field between masked and
//! plain-text rendering.

use crate::host::{AttachError, TextField, ToggleControl};
use crate::settings::ToggleSettings;
use crate::types::InputMode;

/// Marker class guarding against double attachment.
pub const TOGGLE_MARKER_CLASS: &str = "visibility-toggle";

/// Generator for per-attachment control identifiers.
///
/// Owned by the attachment call site instead of living in process
/// globals; ids only need to be unique within one page/session, so a
/// plain counter is enough.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next control id, e.g. `password-toggle-id-0`.
    pub fn next_id(&mut self) -> String {
        let id = format!("password-toggle-id-{}", self.next);
        self.next += 1;
        id
    }
}

/// Visibility toggle attached to a password field.
///
/// Switches the field's own input mode rather than mirroring the
/// value into a second field, so the displayed value can never drift
/// from the real one. Toggling is purely a presentation change: the
/// field's value is never written, so no change notification can
/// reach the host application.
pub struct VisibilityToggle<F, C> {
    field: F,
    control: C,
    control_id: String,
    settings: ToggleSettings,
    revealed: bool,
}

impl<F, C> VisibilityToggle<F, C>
where
    F: TextField,
    C: ToggleControl,
{
    /// Attaches a visibility toggle to `field`, wiring the auxiliary
    /// `control` the host created.
    ///
    /// Assigns the control a unique id from `ids`, starts in the
    /// masked state, and sets the control's initial label classes (and
    /// tooltip, when enabled).
    ///
    /// # Errors
    /// - [`AttachError::NotTextEntry`] if the field does not accept text
    /// - [`AttachError::AlreadyAttached`] if a toggle is already
    ///   attached to this field
    pub fn attach(
        mut field: F,
        mut control: C,
        settings: ToggleSettings,
        ids: &mut IdSequence,
    ) -> Result<Self, AttachError> {
        if !field.is_text_entry() {
            return Err(AttachError::NotTextEntry);
        }
        if field.has_class(TOGGLE_MARKER_CLASS) {
            return Err(AttachError::AlreadyAttached(TOGGLE_MARKER_CLASS));
        }
        field.add_class(TOGGLE_MARKER_CLASS);

        let control_id = ids.next_id();

        #[cfg(feature = "tracing")]
        tracing::debug!("Visibility toggle attached (control id {})", control_id);

        field.set_input_mode(InputMode::Masked);
        control.set_label_classes(&settings.show_classes());
        if settings.tooltip_enabled() {
            control.set_tooltip(settings.tooltip_text());
        }

        Ok(Self {
            field,
            control,
            control_id,
            settings,
            revealed: false,
        })
    }

    /// Handles an activation (click) of the toggle control.
    ///
    /// Flips the revealed state, switches the field's input mode,
    /// returns focus to the field so the user can keep typing, and
    /// swaps the control's label classes.
    pub fn activate(&mut self) {
        self.revealed = !self.revealed;

        let mode = if self.revealed {
            InputMode::Plain
        } else {
            InputMode::Masked
        };
        self.field.set_input_mode(mode);
        self.field.focus();

        let classes = if self.revealed {
            self.settings.hide_classes()
        } else {
            self.settings.show_classes()
        };
        self.control.set_label_classes(&classes);
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Unique id assigned to the auxiliary control at attachment.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }
}
