//! Mock host handles shared by the widget tests.
//!
//! Each mock is a cloneable handle over shared state, the way real
//! host field/element references behave; tests keep a clone to
//! inspect what the widget did.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use secrecy::{ExposeSecret, SecretString};

use crate::host::{IndicatorPanel, TextField, ToggleControl};
use crate::scorer::{Scorer, ScorerError};
use crate::types::{InputMode, Rule, RuleState, StrengthClass};

#[derive(Debug)]
struct FieldState {
    value: String,
    mode: InputMode,
    text_entry: bool,
    focus_count: usize,
    value_writes: usize,
    classes: Vec<String>,
}

/// Mock text-entry field handle.
#[derive(Clone)]
pub struct MockField(Rc<RefCell<FieldState>>);

impl MockField {
    pub fn new() -> Self {
        Self::with_value("")
    }

    pub fn with_value(value: &str) -> Self {
        Self(Rc::new(RefCell::new(FieldState {
            value: value.to_string(),
            mode: InputMode::Masked,
            text_entry: true,
            focus_count: 0,
            value_writes: 0,
            classes: Vec::new(),
        })))
    }

    /// A handle to an element that is not a text-entry field.
    pub fn non_text_entry() -> Self {
        let field = Self::new();
        field.0.borrow_mut().text_entry = false;
        field
    }

    /// Simulates the user typing: updates the value without counting
    /// as a programmatic write.
    pub fn type_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn focus_count(&self) -> usize {
        self.0.borrow().focus_count
    }

    /// Number of programmatic value writes through the field handle.
    pub fn value_writes(&self) -> usize {
        self.0.borrow().value_writes
    }
}

impl TextField for MockField {
    fn is_text_entry(&self) -> bool {
        self.0.borrow().text_entry
    }

    fn value(&self) -> SecretString {
        SecretString::new(self.0.borrow().value.clone().into())
    }

    fn set_value(&mut self, value: SecretString) {
        let mut state = self.0.borrow_mut();
        state.value = value.expose_secret().to_string();
        state.value_writes += 1;
    }

    fn input_mode(&self) -> InputMode {
        self.0.borrow().mode
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        self.0.borrow_mut().mode = mode;
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focus_count += 1;
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().classes.push(class.to_string());
    }
}

#[derive(Debug)]
struct PanelState {
    detail_header: String,
    rule_texts: Vec<(Rule, String)>,
    length: RuleState,
    upper_and_lower: RuleState,
    digit: RuleState,
    strength_class: StrengthClass,
    strength_text: String,
    detail_visible: bool,
    content_updates: usize,
}

/// Mock indicator panel handle.
#[derive(Clone)]
pub struct MockPanel(Rc<RefCell<PanelState>>);

impl MockPanel {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(PanelState {
            detail_header: String::new(),
            rule_texts: Vec::new(),
            length: RuleState::Neutral,
            upper_and_lower: RuleState::Neutral,
            digit: RuleState::Neutral,
            strength_class: StrengthClass::Empty,
            strength_text: String::new(),
            detail_visible: false,
            content_updates: 0,
        })))
    }

    pub fn detail_header(&self) -> String {
        self.0.borrow().detail_header.clone()
    }

    pub fn rule_text(&self, rule: Rule) -> Option<String> {
        self.0
            .borrow()
            .rule_texts
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, text)| text.clone())
    }

    pub fn rule_state(&self, rule: Rule) -> RuleState {
        let state = self.0.borrow();
        match rule {
            Rule::Length => state.length,
            Rule::UpperAndLower => state.upper_and_lower,
            Rule::Digit => state.digit,
        }
    }

    pub fn strength_class(&self) -> StrengthClass {
        self.0.borrow().strength_class
    }

    pub fn strength_text(&self) -> String {
        self.0.borrow().strength_text.clone()
    }

    pub fn detail_visible(&self) -> bool {
        self.0.borrow().detail_visible
    }

    /// Number of content mutations (rule rows, class, text), not
    /// counting visibility changes.
    pub fn content_updates(&self) -> usize {
        self.0.borrow().content_updates
    }
}

impl IndicatorPanel for MockPanel {
    fn set_detail_header(&mut self, text: &str) {
        self.0.borrow_mut().detail_header = text.to_string();
    }

    fn set_rule_text(&mut self, rule: Rule, text: &str) {
        self.0.borrow_mut().rule_texts.push((rule, text.to_string()));
    }

    fn set_rule_state(&mut self, rule: Rule, state: RuleState) {
        let mut panel = self.0.borrow_mut();
        match rule {
            Rule::Length => panel.length = state,
            Rule::UpperAndLower => panel.upper_and_lower = state,
            Rule::Digit => panel.digit = state,
        }
        panel.content_updates += 1;
    }

    fn set_strength_class(&mut self, class: StrengthClass) {
        let mut panel = self.0.borrow_mut();
        panel.strength_class = class;
        panel.content_updates += 1;
    }

    fn set_strength_text(&mut self, text: &str) {
        let mut panel = self.0.borrow_mut();
        panel.strength_text = text.to_string();
        panel.content_updates += 1;
    }

    fn set_detail_visible(&mut self, visible: bool) {
        self.0.borrow_mut().detail_visible = visible;
    }
}

#[derive(Debug)]
struct ControlState {
    label_classes: String,
    tooltip: Option<String>,
}

/// Mock toggle control handle.
#[derive(Clone)]
pub struct MockControl(Rc<RefCell<ControlState>>);

impl MockControl {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ControlState {
            label_classes: String::new(),
            tooltip: None,
        })))
    }

    pub fn label_classes(&self) -> String {
        self.0.borrow().label_classes.clone()
    }

    pub fn tooltip(&self) -> Option<String> {
        self.0.borrow().tooltip.clone()
    }
}

impl ToggleControl for MockControl {
    fn set_label_classes(&mut self, classes: &str) {
        self.0.borrow_mut().label_classes = classes.to_string();
    }

    fn set_tooltip(&mut self, text: &str) {
        self.0.borrow_mut().tooltip = Some(text.to_string());
    }
}

/// Scorer returning a fixed score and counting invocations.
#[derive(Clone)]
pub struct CountingScorer {
    score: Result<i64, String>,
    calls: Rc<Cell<usize>>,
}

impl CountingScorer {
    pub fn returning(score: i64) -> Self {
        Self {
            score: Ok(score),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            score: Err(message.to_string()),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Scorer for CountingScorer {
    fn score(&self, _password: &str) -> Result<i64, ScorerError> {
        self.calls.set(self.calls.get() + 1);
        self.score.clone().map_err(ScorerError)
    }
}
