//! Strength indicator widget - keeps the status display in sync with
//! the field.

use crate::evaluator::evaluate;
use crate::host::{AttachError, IndicatorPanel, TextField};
use crate::scorer::Scorer;
use crate::settings::EvaluatorSettings;
use crate::types::{Evaluation, Rule, RuleState, StrengthClass};

/// Marker class guarding against double attachment.
pub const INDICATOR_MARKER_CLASS: &str = "strength-indicator";

/// Strength indicator attached to a password field.
///
/// Owns the field and panel handles plus the per-widget display state:
/// the detail panel is visible while the field is focused or while the
/// user has latched it open by tapping the summary. The latch resets
/// on blur. Panel content only changes on value changes, never on
/// focus transitions.
pub struct StrengthIndicator<F, P, S> {
    field: F,
    panel: P,
    settings: EvaluatorSettings,
    scorer: S,
    last: Evaluation,
    focused: bool,
    latched: bool,
}

impl<F, P, S> StrengthIndicator<F, P, S>
where
    F: TextField,
    P: IndicatorPanel,
    S: Scorer,
{
    /// Attaches a strength indicator to `field`, reporting through
    /// `panel`.
    ///
    /// Seeds the panel from the field's current value, so a
    /// pre-filled field shows its real state before the first
    /// keystroke.
    ///
    /// # Errors
    /// - [`AttachError::NotTextEntry`] if the field does not accept text
    /// - [`AttachError::AlreadyAttached`] if an indicator is already
    ///   attached to this field
    pub fn attach(
        mut field: F,
        mut panel: P,
        settings: EvaluatorSettings,
        scorer: S,
    ) -> Result<Self, AttachError> {
        if !field.is_text_entry() {
            return Err(AttachError::NotTextEntry);
        }
        if field.has_class(INDICATOR_MARKER_CLASS) {
            return Err(AttachError::AlreadyAttached(INDICATOR_MARKER_CLASS));
        }
        field.add_class(INDICATOR_MARKER_CLASS);

        #[cfg(feature = "tracing")]
        tracing::debug!("Strength indicator attached (min_length={})", settings.min_length);

        let text = &settings.validity_text;
        panel.set_detail_header(&text.header);
        panel.set_rule_text(Rule::Length, &text.length);
        panel.set_rule_text(Rule::UpperAndLower, &text.upper_and_lower);
        panel.set_rule_text(Rule::Digit, &text.digit);
        panel.set_detail_visible(false);

        let mut indicator = Self {
            field,
            panel,
            settings,
            scorer,
            last: Evaluation {
                validity: Default::default(),
                class: StrengthClass::Empty,
            },
            focused: false,
            latched: false,
        };
        indicator.refresh();
        Ok(indicator)
    }

    /// Handles a value-changing event on the field (input/keyup).
    pub fn handle_input(&mut self) {
        self.refresh();
    }

    /// Handles the field gaining input focus.
    pub fn handle_focus(&mut self) {
        self.focused = true;
        self.sync_detail_visibility();
    }

    /// Handles the field losing input focus. Also clears the
    /// summary-tap latch, so the panel does not stay open after the
    /// user moves on.
    pub fn handle_blur(&mut self) {
        self.focused = false;
        self.latched = false;
        self.sync_detail_visibility();
    }

    /// Handles a tap/click on the summary element, which latches the
    /// detail panel open (or closed again) independent of focus.
    pub fn handle_summary_click(&mut self) {
        self.latched = !self.latched;
        self.sync_detail_visibility();
    }

    /// Result of the most recent evaluation.
    pub fn evaluation(&self) -> Evaluation {
        self.last
    }

    pub fn detail_visible(&self) -> bool {
        self.focused || self.latched
    }

    /// Re-evaluates the current field value and pushes the result to
    /// the panel.
    fn refresh(&mut self) {
        let evaluation = evaluate(&self.field.value(), self.settings.min_length, &self.scorer);
        let validity = evaluation.validity;

        // Empty input shows neutral rows, neither pass nor fail.
        let any_input = evaluation.class != StrengthClass::Empty;
        self.panel.set_rule_state(
            Rule::Length,
            RuleState::from_flag(validity.has_min_length, any_input),
        );
        self.panel.set_rule_state(
            Rule::UpperAndLower,
            RuleState::from_flag(validity.has_lower && validity.has_upper, any_input),
        );
        self.panel.set_rule_state(
            Rule::Digit,
            RuleState::from_flag(validity.has_digit, any_input),
        );

        self.panel.set_strength_class(evaluation.class);
        self.panel
            .set_strength_text(self.settings.strength_text.for_class(evaluation.class));

        self.last = evaluation;
    }

    fn sync_detail_visibility(&mut self) {
        let visible = self.focused || self.latched;
        self.panel.set_detail_visible(visible);
    }
}
