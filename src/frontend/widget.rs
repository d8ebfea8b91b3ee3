use log::debug;

use crate::{apply_operator, ast::BinaryOperator, interpreter::value::core::Number};

/// Maximum number of digits the display holds. `.` and `-` do not count.
pub const MAX_DISPLAY_LENGTH: usize = 12;

/// Formats a value so it fits the display.
///
/// Values whose plain rendering is too long are rounded to as many decimals
/// as fit, and fall back to scientific notation when even the integer part
/// does not fit.
///
/// # Example
/// ```
/// use safecalc::{frontend::widget::format_for_display, interpreter::value::core::Number};
///
/// assert_eq!(format_for_display(Number::Integer(42)), "42");
/// assert_eq!(format_for_display(Number::Real(1.0 / 3.0)), "0.3333333333");
/// assert_eq!(format_for_display(Number::Real(f64::NEG_INFINITY)), "-Infinity");
/// assert_eq!(format_for_display(Number::Integer(1 << 50)), "1.125900e15");
/// ```
#[must_use]
pub fn format_for_display(value: Number) -> String {
    let r = value.as_f64();
    if r.is_nan() {
        return "Error".to_string();
    }
    if r.is_infinite() {
        let text = if r > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let plain = value.to_string();
    if plain.len() <= MAX_DISPLAY_LENGTH {
        return plain;
    }

    if let Number::Real(_) = value
       && !plain.contains(['e', 'E'])
       && let Some((integer_part, decimal_part)) = plain.split_once('.')
    {
        let available = MAX_DISPLAY_LENGTH.saturating_sub(integer_part.len() + 1);
        if available > 0 {
            return format!("{r:.prec$}", prec = available.min(decimal_part.len()));
        }
    }

    format!("{r:.6e}")
}

fn significant_len(display: &str) -> usize {
    display.chars().filter(|c| *c != '.' && *c != '-').count()
}

/// One session of the web calculator widget.
///
/// Mirrors a pocket calculator: the display holds the operand being typed,
/// `previous_value` and `operation` hold the pending left operand and
/// operator, and `waiting_for_operand` is set right after an operator or `=`,
/// so the next digit starts a fresh number.
///
/// Each browser session owns one `WidgetState`; handlers take it by `&mut`.
///
/// ## Usage
/// ```
/// use safecalc::{ast::BinaryOperator, frontend::widget::WidgetState};
///
/// let mut state = WidgetState::default();
/// state.input_digit(1);
/// state.input_digit(2);
/// state.input_operation(BinaryOperator::Mul);
/// state.input_digit(3);
/// state.perform_calculation();
///
/// assert_eq!(state.display, "36");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// The text on the display.
    pub display:             String,
    /// The left operand of the pending operation.
    pub previous_value:      Option<Number>,
    /// The pending operation.
    pub operation:           Option<BinaryOperator>,
    /// `true` right after an operator or `=`.
    pub waiting_for_operand: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self { display:             "0".to_string(),
               previous_value:      None,
               operation:           None,
               waiting_for_operand: false, }
    }
}

impl WidgetState {
    /// Types a digit. Ignored once the display is full.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }

        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
            return;
        }

        let candidate = if self.display == "0" {
            digit.to_string()
        } else {
            format!("{}{digit}", self.display)
        };

        if significant_len(&candidate) <= MAX_DISPLAY_LENGTH {
            self.display = candidate;
        }
    }

    /// Types a decimal point, unless the display already has one.
    pub fn input_decimal_point(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Selects the next operation.
    ///
    /// With an operation already pending and a new operand typed, the pending
    /// operation is computed first, so `2 + 3 *` shows `5`. Pressing another
    /// operator before typing an operand only replaces the pending one.
    pub fn input_operation(&mut self, next: BinaryOperator) {
        let input = self.current_value();

        match (self.previous_value, self.operation) {
            (None, _) => self.previous_value = Some(input),
            (Some(previous), Some(op)) if !self.waiting_for_operand => {
                let Some(value) = self.calculate(previous, input, op) else {
                    return;
                };
                self.display = format_for_display(value);
                self.previous_value = Some(value);
            },
            _ => {},
        }

        self.waiting_for_operand = true;
        self.operation = Some(next);
    }

    /// Handles `=`: computes the pending operation, if any.
    pub fn perform_calculation(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_value, self.operation) else {
            return;
        };

        let input = self.current_value();
        let Some(value) = self.calculate(previous, input, op) else {
            return;
        };

        self.display = format_for_display(value);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
    }

    /// Handles `C`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Handles `←`: drops the last character, leaving `0` rather than an
    /// empty display or a lone sign.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// The secondary display line, e.g. `12 *`, while an operation is pending.
    #[must_use]
    pub fn pending(&self) -> Option<String> {
        match (self.previous_value, self.operation) {
            (Some(value), Some(op)) => Some(format!("{} {op}", format_for_display(value))),
            _ => None,
        }
    }

    /// The display parsed as a number; anything unparsable counts as zero.
    fn current_value(&self) -> Number {
        self.display
            .parse::<i64>()
            .map(Number::Integer)
            .or_else(|_| self.display.parse::<f64>().map(Number::Real))
            .unwrap_or(Number::Integer(0))
    }

    /// Computes `left op right`. On failure the session is reset with
    /// `Error` on the display and `None` is returned.
    fn calculate(&mut self, left: Number, right: Number, op: BinaryOperator) -> Option<Number> {
        match apply_operator(op, left, right) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("widget calculation {left} {op} {right} failed: {e}");
                *self = Self { display: "Error".to_string(),
                               waiting_for_operand: true,
                               ..Self::default() };
                None
            },
        }
    }
}

/// A user action on the widget, as sent by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit button.
    Digit(u8),
    /// The decimal separator button.
    DecimalPoint,
    /// An operator button.
    Operation(BinaryOperator),
    /// `=`
    Calculate,
    /// `C`
    Clear,
    /// `←`
    Backspace,
}

impl Action {
    /// Dispatches the action to the matching handler.
    pub fn apply(self, state: &mut WidgetState) {
        match self {
            Self::Digit(d) => state.input_digit(d),
            Self::DecimalPoint => state.input_decimal_point(),
            Self::Operation(op) => state.input_operation(op),
            Self::Calculate => state.perform_calculation(),
            Self::Clear => state.clear(),
            Self::Backspace => state.backspace(),
        }
    }
}
