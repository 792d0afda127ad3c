//! The calculator screen model
//!
//! Three numeric fields feed one [`TipCalculator`]. Every edit is committed
//! straight into the calculator; stepper presses update the calculator and
//! re-render the field they belong to.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::calculator::{Stepper, TipCalculator, TipSummary};
use crate::config::CalculatorConfig;
use crate::controller::InputController;
use crate::error::ConfigError;
use crate::types::{EditRange, EditResult, NumberFormatSpec};

/// Editable fields on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bill,
    TipPercent,
    People,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

#[derive(Debug, Clone)]
pub struct TipForm {
    calculator: TipCalculator,
    bill: InputController,
    tip: InputController,
    people: InputController,
    tip_stepper: Stepper,
    people_stepper: Stepper,
    result_spec: NumberFormatSpec,
}

impl TipForm {
    /// Build the screen; the bill field asks for focus on mount
    pub fn new(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        let calculator = config.initial_calculator();
        let bill_spec = config.bill_spec()?;

        let bill = InputController::new(bill_spec.clone(), config.bill_validator()?, calculator.bill)
            .with_focus_request();
        let tip = InputController::new(
            config.tip_spec()?,
            config.tip.validator(),
            Decimal::from(calculator.tip_percent),
        );
        let people = InputController::new(
            config.people_spec()?,
            config.people.validator(),
            Decimal::from(calculator.people),
        );

        let mut form = Self {
            calculator,
            bill,
            tip,
            people,
            tip_stepper: config.tip.stepper(),
            people_stepper: config.people.stepper(),
            result_spec: bill_spec,
        };
        form.commit(Field::Bill);
        form.commit(Field::TipPercent);
        form.commit(Field::People);
        Ok(form)
    }

    pub fn calculator(&self) -> &TipCalculator {
        &self.calculator
    }

    pub fn field(&self, field: Field) -> &InputController {
        match field {
            Field::Bill => &self.bill,
            Field::TipPercent => &self.tip,
            Field::People => &self.people,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut InputController {
        match field {
            Field::Bill => &mut self.bill,
            Field::TipPercent => &mut self.tip,
            Field::People => &mut self.people,
        }
    }

    /// Route a raw edit to a field and update the results
    pub fn edit(&mut self, field: Field, range: EditRange, replacement: &str) -> EditResult {
        let result = self.field_mut(field).handle_edit(range, replacement);
        self.commit(field);
        result
    }

    /// Press a stepper next to the tip or people field
    ///
    /// The bill has no stepper; stepping it does nothing.
    pub fn step(&mut self, field: Field, step: Step) {
        let (stepper, current) = match field {
            Field::Bill => return,
            Field::TipPercent => (self.tip_stepper, self.calculator.tip_percent),
            Field::People => (self.people_stepper, self.calculator.people),
        };
        let next = match step {
            Step::Increment => stepper.increment(current),
            Step::Decrement => stepper.decrement(current),
        };
        self.field_mut(field).set_value(Decimal::from(next));
        self.commit(field);
    }

    pub fn summary(&self) -> TipSummary {
        self.calculator.summary(&self.result_spec)
    }

    fn commit(&mut self, field: Field) {
        let value = self.field(field).value();
        match field {
            Field::Bill => self.calculator.bill = value,
            Field::TipPercent => self.calculator.tip_percent = whole(value),
            Field::People => self.calculator.people = whole(value),
        }
        debug!(?field, %value, "Field committed");
    }
}

fn whole(value: Decimal) -> u32 {
    value.trunc().to_u32().unwrap_or(u32::MAX)
}
