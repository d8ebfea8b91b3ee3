use log::debug;

use crate::{ast::BinaryOperator, evaluate_expression};

/// A button on the desktop keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit button. The keypad has buttons `1` to `9`; values above `9`
    /// are ignored.
    Digit(u8),
    /// One of `+ - * /`.
    Operator(BinaryOperator),
    /// `=`
    Equals,
}

/// The state behind a keypad window: the expression typed so far and the
/// text on the display.
///
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     frontend::keypad::{Key, Keypad},
/// };
///
/// let mut keypad = Keypad::default();
/// for key in [Key::Digit(7), Key::Operator(BinaryOperator::Div), Key::Digit(2), Key::Equals] {
///     keypad.press(key);
/// }
/// assert_eq!(keypad.display(), "3.5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    expression: String,
    display:    String,
}

impl Keypad {
    /// Handles one button press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) if d <= 9 => self.append(&d.to_string()),
            Key::Digit(_) => {},
            Key::Operator(op) => self.append(op.symbol()),
            Key::Equals => self.evaluate(),
        }
    }

    /// The text currently shown.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    fn append(&mut self, text: &str) {
        self.expression.push_str(text);
        self.display.clone_from(&self.expression);
    }

    fn evaluate(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match evaluate_expression(&self.expression) {
            Ok(value) => {
                self.expression = value.to_string();
                self.display.clone_from(&self.expression);
            },
            Err(e) => {
                debug!("keypad expression {:?} failed: {e}", self.expression);
                self.display = if e.is_division_by_zero() {
                    "Error: div/zero".to_string()
                } else {
                    "Invalid expression".to_string()
                };
                self.expression.clear();
            },
        }
    }
}
