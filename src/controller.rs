//! Live numeric field controller
//!
//! Owns the text a field displays and routes every raw edit from the input
//! surface through [`apply_edit`]. The surface must not apply its own edit;
//! it renders whatever the controller holds afterwards.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::formatter::format;
use crate::parser::parse_clamped;
use crate::transaction::apply_edit;
use crate::types::{EditRange, EditResult, NumberFormatSpec};
use crate::validator::Validator;

/// Whether a keystroke is currently being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing,
}

/// A formatting-aware numeric text field
#[derive(Debug, Clone)]
pub struct InputController {
    spec: NumberFormatSpec,
    validator: Validator,
    text: String,
    cursor: usize,
    selection: Option<EditRange>,
    state: EditState,
    focused: bool,
    focus_requested: bool,
}

impl InputController {
    /// Create a field showing `value`, clamped into the validator's bounds
    pub fn new(spec: NumberFormatSpec, validator: Validator, value: Decimal) -> Self {
        let text = format(validator.clamp(value), &spec);
        let cursor = text.chars().count();
        Self {
            spec,
            validator,
            text,
            cursor,
            selection: None,
            state: EditState::Idle,
            focused: false,
            focus_requested: false,
        }
    }

    /// Ask the surface to focus this field once it is mounted
    pub fn with_focus_request(mut self) -> Self {
        self.focus_requested = true;
        self
    }

    /// One-shot: returns `true` the first time after a focus request
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub fn spec(&self) -> &NumberFormatSpec {
        &self.spec
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor offset in `char`s
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<EditRange> {
        self.selection
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current value of the field
    pub fn value(&self) -> Decimal {
        parse_clamped(&self.text, &self.spec, &self.validator)
    }

    /// Focus gained: the whole text gets selected so typing replaces it
    pub fn begin_editing(&mut self) {
        self.focused = true;
        self.select_all();
        debug!(text = %self.text, "Began editing");
    }

    /// Handle a raw edit from the input surface
    ///
    /// Deleting when nothing can be deleted, such as backspace on the
    /// placeholder, selects the whole text instead.
    pub fn handle_edit(&mut self, range: EditRange, replacement: &str) -> EditResult {
        self.state = EditState::Editing;
        let result = apply_edit(&self.text, range, replacement, &self.spec, &self.validator);

        let unchanged_deletion = replacement.is_empty() && result.text == self.text;
        self.text = result.text.clone();
        self.cursor = result.cursor_position;
        if unchanged_deletion {
            self.select_all();
        } else {
            self.selection = None;
        }

        self.state = EditState::Idle;
        trace!(text = %self.text, cursor = self.cursor, "Edit applied to field");
        result
    }

    /// Same as [`handle_edit`](Self::handle_edit) with a range in UTF-16 code units
    pub fn handle_utf16_edit(
        &mut self,
        location: usize,
        length: usize,
        replacement: &str,
    ) -> EditResult {
        let range = EditRange::from_utf16(&self.text, location, length);
        self.handle_edit(range, replacement)
    }

    /// Move the cursor, e.g. after a tap; kept within the text
    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.text.chars().count());
        self.selection = None;
    }

    pub fn select_all(&mut self) {
        let len = self.text.chars().count();
        self.selection = Some(EditRange::new(0, len));
        self.cursor = len;
    }

    /// Replace the value from outside, e.g. a stepper
    pub fn set_value(&mut self, value: Decimal) {
        self.text = format(self.validator.clamp(value), &self.spec);
        self.cursor = self.cursor.min(self.text.chars().count());
        self.selection = None;
    }

    /// Focus lost. The text is already canonical, nothing is reformatted.
    pub fn end_editing(&mut self) -> Decimal {
        self.focused = false;
        self.selection = None;
        self.state = EditState::Idle;
        self.value()
    }

    /// Return key; same as losing focus
    pub fn submit(&mut self) -> Decimal {
        self.end_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn bill_field() -> InputController {
        InputController::new(
            NumberFormatSpec::currency(""),
            Validator::new(Decimal::ZERO, Some(Decimal::from_str("999999999.99").unwrap())).unwrap(),
            Decimal::from(100),
        )
    }

    #[test]
    fn test_initial_text() {
        let field = bill_field();
        assert_eq!(field.text(), "100.00");
        assert_eq!(field.cursor(), 6);
        assert_eq!(field.state(), EditState::Idle);
    }

    #[test]
    fn test_begin_editing_selects_all() {
        let mut field = bill_field();
        field.begin_editing();
        assert!(field.is_focused());
        assert_eq!(field.selection(), Some(EditRange::new(0, 6)));

        let result = field.handle_edit(field.selection().unwrap(), "4");
        assert_eq!(result.text, "4.00");
        assert_eq!(field.cursor(), 1);
        assert_eq!(field.selection(), None);
        assert_eq!(field.value(), Decimal::from(4));
    }

    #[test]
    fn test_typing_sequence() {
        let mut field = bill_field();
        field.handle_edit(EditRange::new(0, 6), "1");
        for digit in ["2", "3", "4"] {
            let cursor = field.cursor();
            field.handle_edit(EditRange::caret(cursor), digit);
        }
        assert_eq!(field.text(), "1,234.00");
        assert_eq!(field.cursor(), 5);
        assert_eq!(field.state(), EditState::Idle);
    }

    #[test]
    fn test_deleting_placeholder_selects_all() {
        let mut field = InputController::new(
            NumberFormatSpec::integer(),
            Validator::default(),
            Decimal::ZERO,
        );
        field.handle_edit(EditRange::new(0, 1), "");
        assert_eq!(field.text(), "0");
        assert_eq!(field.selection(), Some(EditRange::new(0, 1)));
    }

    #[test]
    fn test_utf16_edit() {
        let mut field = InputController::new(
            NumberFormatSpec::currency("€"),
            Validator::default(),
            Decimal::from(12),
        );
        assert_eq!(field.text(), "€12.00");
        // '€' is a single UTF-16 unit, so the '2' sits at offset 2
        field.handle_utf16_edit(2, 1, "");
        assert_eq!(field.text(), "€1.00");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut field = InputController::new(
            NumberFormatSpec::integer(),
            Validator::new(Decimal::ONE, Some(Decimal::from(999_999))).unwrap(),
            Decimal::ZERO,
        );
        assert_eq!(field.text(), "1");
        field.set_value(Decimal::from(2_000_000));
        assert_eq!(field.text(), "999999");
    }

    #[test]
    fn test_focus_request_is_one_shot() {
        let mut field = bill_field().with_focus_request();
        assert!(field.take_focus_request());
        assert!(!field.take_focus_request());
    }

    #[test]
    fn test_end_editing_keeps_text() {
        let mut field = bill_field();
        field.begin_editing();
        field.handle_edit(EditRange::caret(3), "5");
        let text = field.text().to_string();
        let value = field.submit();
        assert_eq!(field.text(), text);
        assert_eq!(value, Decimal::from_str("1005").unwrap());
        assert!(!field.is_focused());
    }
}
