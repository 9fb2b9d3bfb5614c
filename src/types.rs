//! Core domain types shared by the evaluator and the widgets.

/// Rendering mode of the primary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Characters are hidden (password rendering).
    Masked,
    /// Characters are shown as typed (plain-text rendering).
    Plain,
}

/// Per-rule outcome of the local validity check.
///
/// Fully recomputed from the current password on every evaluation,
/// never carried over from a previous keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityReport {
    pub has_digit: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_min_length: bool,
}

impl ValidityReport {
    /// True iff every rule passed.
    pub fn is_valid(&self) -> bool {
        self.has_digit && self.has_lower && self.has_upper && self.has_min_length
    }
}

/// Discrete display category for the current password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthClass {
    /// No input yet.
    Empty,
    /// Non-empty but failing at least one local rule.
    Invalid,
    /// Passes all rules, scored below the strong threshold.
    Acceptable,
    /// Passes all rules, scored at or above the strong threshold.
    Strong,
}

impl StrengthClass {
    /// Attribute value the host sets on the indicator element
    /// (e.g. `data-strength="acceptable"`).
    pub fn as_attr(&self) -> &'static str {
        match self {
            StrengthClass::Empty => "empty",
            StrengthClass::Invalid => "invalid",
            StrengthClass::Acceptable => "acceptable",
            StrengthClass::Strong => "strong",
        }
    }
}

impl std::fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// The indicator rows shown under the field.
///
/// `UpperAndLower` is a single row covering both case rules, as the
/// original widget displays them combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Length,
    UpperAndLower,
    Digit,
}

/// Display state of one indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleState {
    /// Nothing entered yet; the row shows neither pass nor fail.
    Neutral,
    Pass,
    Fail,
}

impl RuleState {
    /// Collapses a pass/fail flag into a row state, keeping empty
    /// input neutral.
    pub fn from_flag(passed: bool, any_input: bool) -> Self {
        if !any_input {
            RuleState::Neutral
        } else if passed {
            RuleState::Pass
        } else {
            RuleState::Fail
        }
    }
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub validity: ValidityReport,
    pub class: StrengthClass,
}
