//! Widget settings captured at attachment time.
//!
//! Both settings structs deserialize with full defaults: missing keys
//! fall back to the documented default value and unknown keys are
//! ignored, so host-side option objects can be passed through as-is.

use serde::{Deserialize, Serialize};

use crate::types::StrengthClass;

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

const DEFAULT_TOOLTIP: &str = "Toggle password visibility";

/// Display strings for the strength summary, one per [`StrengthClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthText {
    pub empty: String,
    pub invalid: String,
    pub acceptable: String,
    pub strong: String,
}

impl StrengthText {
    /// Looks up the display string for a strength class.
    pub fn for_class(&self, class: StrengthClass) -> &str {
        match class {
            StrengthClass::Empty => &self.empty,
            StrengthClass::Invalid => &self.invalid,
            StrengthClass::Acceptable => &self.acceptable,
            StrengthClass::Strong => &self.strong,
        }
    }
}

impl Default for StrengthText {
    fn default() -> Self {
        Self {
            empty: String::new(),
            invalid: "Invalid".to_string(),
            acceptable: "Acceptable".to_string(),
            strong: "Strong".to_string(),
        }
    }
}

/// Descriptive text for the validity detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityText {
    pub header: String,
    pub length: String,
    pub upper_and_lower: String,
    pub digit: String,
}

impl Default for ValidityText {
    fn default() -> Self {
        Self {
            header: "Your password must have".to_string(),
            length: "8 or more characters".to_string(),
            upper_and_lower: "Upper & lowercase letters".to_string(),
            digit: "At least one number".to_string(),
        }
    }
}

/// Strength indicator configuration, immutable after attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorSettings {
    pub min_length: usize,
    pub strength_text: StrengthText,
    pub validity_text: ValidityText,
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            strength_text: StrengthText::default(),
            validity_text: ValidityText::default(),
        }
    }
}

/// Visibility toggle configuration, immutable after attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleSettings {
    /// Classes always present on the toggle label.
    pub label_classes: String,
    /// Classes added while the password is masked.
    pub show_label_classes: String,
    /// Classes added while the password is revealed.
    pub hide_label_classes: String,
    /// Explicit tooltip switch; `None` means "enabled iff `tooltip` is set".
    pub enable_tooltip: Option<bool>,
    pub tooltip: Option<String>,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            label_classes: "fa".to_string(),
            show_label_classes: "fa-eye".to_string(),
            hide_label_classes: "fa-eye-slash".to_string(),
            enable_tooltip: None,
            tooltip: None,
        }
    }
}

impl ToggleSettings {
    pub fn tooltip_enabled(&self) -> bool {
        self.enable_tooltip.unwrap_or(self.tooltip.is_some())
    }

    pub fn tooltip_text(&self) -> &str {
        self.tooltip.as_deref().unwrap_or(DEFAULT_TOOLTIP)
    }

    /// Label classes for the masked state.
    pub fn show_classes(&self) -> String {
        format!("{} {}", self.label_classes, self.show_label_classes)
    }

    /// Label classes for the revealed state.
    pub fn hide_classes(&self) -> String {
        format!("{} {}", self.label_classes, self.hide_label_classes)
    }
}
