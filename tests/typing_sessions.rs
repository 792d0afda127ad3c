use rust_decimal::Decimal;
use std::str::FromStr;
use tip_input::config::CalculatorConfig;
use tip_input::controller::EditState;
use tip_input::form::{Field, Step, TipForm};
use tip_input::{EditRange, InputController, NumberFormatSpec, Validator};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Type `key` where the user would: over the selection, or at the cursor
fn press(field: &mut InputController, key: char) -> (String, usize) {
    let range = field
        .selection()
        .unwrap_or_else(|| EditRange::caret(field.cursor()));
    let result = field.handle_edit(range, &key.to_string());
    (result.text, result.cursor_position)
}

fn backspace(field: &mut InputController) -> (String, usize) {
    let range = field
        .selection()
        .unwrap_or_else(|| EditRange::new(field.cursor().saturating_sub(1), 1));
    let result = field.handle_edit(range, "");
    (result.text, result.cursor_position)
}

#[test]
fn test_type_bill_with_cents() {
    let mut bill = InputController::new(
        NumberFormatSpec::currency(""),
        Validator::new(Decimal::ZERO, Some(dec("999999999.99"))).unwrap(),
        Decimal::ONE_HUNDRED,
    );
    bill.begin_editing();

    assert_eq!(press(&mut bill, '4'), ("4.00".to_string(), 1));
    assert_eq!(press(&mut bill, '2'), ("42.00".to_string(), 2));
    assert_eq!(press(&mut bill, '.'), ("42.00".to_string(), 3));
    assert_eq!(press(&mut bill, '7'), ("42.70".to_string(), 4));
    assert_eq!(press(&mut bill, '5'), ("42.75".to_string(), 5));

    assert_eq!(bill.end_editing(), dec("42.75"));
    assert_eq!(bill.state(), EditState::Idle);
}

#[test]
fn test_type_decimal_value_from_placeholder() {
    let mut field = InputController::new(NumberFormatSpec::decimal(), Validator::default(), Decimal::ZERO);
    field.set_cursor(1);

    assert_eq!(press(&mut field, '.'), ("0.".to_string(), 2));
    assert_eq!(press(&mut field, '2'), ("0.2".to_string(), 3));
    assert_eq!(press(&mut field, '5'), ("0.25".to_string(), 4));
    assert_eq!(field.value(), dec("0.25"));
}

#[test]
fn test_take_back_decimal_separator() {
    let mut field = InputController::new(NumberFormatSpec::decimal(), Validator::default(), Decimal::ZERO);
    field.set_cursor(1);

    assert_eq!(press(&mut field, '1'), ("1".to_string(), 1));
    assert_eq!(press(&mut field, '2'), ("12".to_string(), 2));
    assert_eq!(press(&mut field, '.'), ("12.".to_string(), 3));
    assert_eq!(backspace(&mut field), ("12".to_string(), 2));
    assert_eq!(press(&mut field, '3'), ("123".to_string(), 3));
    assert_eq!(field.value(), dec("123"));
}

#[test]
fn test_type_over_placeholder_behind_symbol() {
    let mut bill = InputController::new(
        NumberFormatSpec::currency("$"),
        Validator::new(Decimal::ZERO, Some(dec("999999999.99"))).unwrap(),
        Decimal::ZERO,
    );
    bill.set_cursor(1);

    assert_eq!(press(&mut bill, '7'), ("$7.00".to_string(), 2));
    assert_eq!(press(&mut bill, '5'), ("$75.00".to_string(), 3));
}

#[test]
fn test_backspace_people_to_minimum() {
    let mut people = InputController::new(
        NumberFormatSpec::integer(),
        Validator::new(Decimal::ONE, Some(dec("999999"))).unwrap(),
        dec("123"),
    );

    assert_eq!(backspace(&mut people), ("12".to_string(), 2));
    assert_eq!(backspace(&mut people), ("1".to_string(), 1));
    assert_eq!(backspace(&mut people), ("1".to_string(), 0));
    // Nothing left to delete: the whole text is selected for overtyping
    assert_eq!(people.selection(), Some(EditRange::new(0, 1)));
    assert_eq!(press(&mut people, '6'), ("6".to_string(), 1));
}

#[test]
fn test_form_with_german_locale() {
    let config = CalculatorConfig::from_toml_str(
        r#"
        locale = "de_DE"
        currency_symbol = "€"
        "#,
    )
    .unwrap();
    let mut form = TipForm::new(&config).unwrap();
    assert_eq!(form.field(Field::Bill).text(), "€100,00");

    let result = form.edit(Field::Bill, EditRange::new(2, 1), "");
    assert_eq!(result.text, "€10,00");
    assert_eq!(result.cursor_position, 2);

    let summary = form.summary();
    assert_eq!(summary.tip, "€1,00");
    assert_eq!(summary.total, "€11,00");
}

#[test]
fn test_form_split_with_steppers() {
    let mut form = TipForm::new(&CalculatorConfig::default()).unwrap();
    let len = form.field(Field::Bill).text().chars().count();
    form.edit(Field::Bill, EditRange::new(0, len), "8");
    for _ in 0..2 {
        form.step(Field::People, Step::Increment);
    }
    for _ in 0..5 {
        form.step(Field::TipPercent, Step::Increment);
    }

    assert_eq!(form.field(Field::Bill).text(), "8.00");
    assert_eq!(form.field(Field::People).text(), "3");
    assert_eq!(form.field(Field::TipPercent).text(), "15%");

    let summary = form.summary();
    assert_eq!(summary.tip_title, "Tip (per person)");
    assert_eq!(summary.tip, "0.40");
    assert_eq!(summary.total_title, "Total (per person)");
    assert_eq!(summary.total, "3.07");
}
