use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{
    apply_operator,
    ast::BinaryOperator,
    clipboard::Clipboard,
    error::CalcError,
    evaluate_with,
    interpreter::{evaluator::core::Limits, value::core::Number},
};

/// Number of history entries the `h` command prints.
pub const HISTORY_SHOWN: usize = 20;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `0`, `sair`, `exit` or `quit`.
    Exit,
    /// `m`: print the menu again.
    ShowMenu,
    /// `h`: print the history.
    ShowHistory,
    /// `c`: copy the last result.
    CopyLast,
    /// `1` to `7`: apply an operator to two operands.
    Binary(BinaryOperator),
    /// `8`: evaluate a free-form expression.
    Expression,
    /// Anything else.
    Unknown,
}

impl MenuCommand {
    /// Interprets a selection line. Surrounding whitespace and letter case
    /// are ignored.
    ///
    /// ```
    /// use safecalc::{ast::BinaryOperator, frontend::menu::MenuCommand};
    ///
    /// assert_eq!(MenuCommand::parse(" 4 "), MenuCommand::Binary(BinaryOperator::Div));
    /// assert_eq!(MenuCommand::parse("QUIT"), MenuCommand::Exit);
    /// assert_eq!(MenuCommand::parse("9"), MenuCommand::Unknown);
    /// ```
    #[must_use]
    pub fn parse(selection: &str) -> Self {
        let selection = selection.trim().to_lowercase();
        match selection.as_str() {
            "0" | "sair" | "exit" | "quit" => Self::Exit,
            "m" => Self::ShowMenu,
            "h" => Self::ShowHistory,
            "c" => Self::CopyLast,
            "8" => Self::Expression,
            other => other.parse::<usize>()
                          .ok()
                          .and_then(|n| n.checked_sub(1))
                          .and_then(|i| BinaryOperator::ALL.get(i).copied())
                          .map_or(Self::Unknown, Self::Binary),
        }
    }
}

const fn operator_name(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "Addition",
        BinaryOperator::Sub => "Subtraction",
        BinaryOperator::Mul => "Multiplication",
        BinaryOperator::Div => "Division",
        BinaryOperator::FloorDiv => "Floor division",
        BinaryOperator::Mod => "Modulo",
        BinaryOperator::Pow => "Power",
    }
}

/// Parses a typed operand. A comma is accepted as the decimal separator.
///
/// Whole numbers stay integers; anything else must be a finite real.
///
/// ```
/// use safecalc::{frontend::menu::parse_operand, interpreter::value::core::Number};
///
/// assert_eq!(parse_operand(" 12 "), Some(Number::Integer(12)));
/// assert_eq!(parse_operand("2,5"), Some(Number::Real(2.5)));
/// assert_eq!(parse_operand("abc"), None);
/// ```
#[must_use]
pub fn parse_operand(text: &str) -> Option<Number> {
    let text = text.trim().replace(',', ".");
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::Integer(n));
    }

    text.parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .map(Number::Real)
}

/// An interactive terminal calculator session.
///
/// The session owns its input, output and clipboard, along with the history
/// and the last result. It ends on an exit command or at end of input.
///
/// ## Usage
/// ```
/// use std::io::Cursor;
///
/// use safecalc::{clipboard::MemoryClipboard, frontend::menu::MenuSession};
///
/// let input = Cursor::new("8\n2 ** 10\nh\n0\n");
/// let mut output = Vec::new();
///
/// let mut session = MenuSession::new(input, &mut output, MemoryClipboard::default());
/// session.run().unwrap();
///
/// assert_eq!(session.history(), ["2 ** 10 = 1024"]);
/// drop(session);
/// assert!(String::from_utf8(output).unwrap().contains("Result: 1024"));
/// ```
pub struct MenuSession<R, W, C> {
    input:       R,
    output:      W,
    clipboard:   C,
    limits:      Limits,
    history:     Vec<String>,
    last_result: Option<Number>,
}

impl<R: BufRead, W: Write, C: Clipboard> MenuSession<R, W, C> {
    /// Creates a session with the default evaluation limits.
    pub fn new(input: R, output: W, clipboard: C) -> Self {
        Self { input,
               output,
               clipboard,
               limits: Limits::default(),
               history: Vec::new(),
               last_result: None }
    }

    /// Replaces the limits used for free-form expressions.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Every calculation of the session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent successful result.
    #[must_use]
    pub const fn last_result(&self) -> Option<Number> {
        self.last_result
    }

    /// Runs the session until the user exits or input ends.
    ///
    /// # Errors
    /// Only I/O errors on the underlying reader or writer are returned;
    /// calculation errors are printed and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_menu()?;

        loop {
            let Some(line) = self.prompt("Selection (0-8, 'm', 'h', 'c'): ")? else {
                break;
            };

            let command = MenuCommand::parse(&line);
            debug!("menu selection {line:?} -> {command:?}");

            match command {
                MenuCommand::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                },
                MenuCommand::ShowMenu => self.print_menu()?,
                MenuCommand::ShowHistory => self.print_history()?,
                MenuCommand::CopyLast => self.copy_last()?,
                MenuCommand::Binary(op) => {
                    if !self.binary(op)? {
                        break;
                    }
                },
                MenuCommand::Expression => {
                    if !self.expression()? {
                        break;
                    }
                },
                MenuCommand::Unknown => writeln!(self.output, "Invalid option. Type 0-8 or 'm'.")?,
            }
        }

        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Calculator - choose an option:")?;
        for (i, op) in BinaryOperator::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {} ({op})", i + 1, operator_name(*op))?;
        }
        writeln!(self.output, "  8) Evaluate an expression")?;
        writeln!(self.output, "  0) Exit")?;
        writeln!(self.output, "(Hints: 'm' menu, 'h' history, 'c' copy last result)")
    }

    fn print_history(&mut self) -> io::Result<()> {
        if self.history.is_empty() {
            return writeln!(self.output, "History is empty.");
        }

        writeln!(self.output, "History (most recent last):")?;
        let start = self.history.len().saturating_sub(HISTORY_SHOWN);
        for entry in &self.history[start..] {
            writeln!(self.output, "   {entry}")?;
        }

        Ok(())
    }

    fn copy_last(&mut self) -> io::Result<()> {
        let Some(value) = self.last_result else {
            return writeln!(self.output, "No result to copy.");
        };

        if self.clipboard.copy(&value.to_string()) {
            info!("copied {value} to the clipboard");
            writeln!(self.output, "Copied to clipboard.")
        } else {
            writeln!(self.output, "Could not copy automatically on this system.")
        }
    }

    /// Returns `Ok(false)` when input ended before both operands were read.
    fn binary(&mut self, op: BinaryOperator) -> io::Result<bool> {
        let Some(a) = self.read_operand("A: ")? else {
            return Ok(false);
        };
        let Some(b) = self.read_operand("B: ")? else {
            return Ok(false);
        };

        self.report(&format!("{a} {op} {b}"), apply_operator(op, a, b))?;
        Ok(true)
    }

    /// Returns `Ok(false)` when input ended before an expression was read.
    fn expression(&mut self) -> io::Result<bool> {
        let Some(line) = self.prompt("Expression: ")? else {
            return Ok(false);
        };

        let expr = line.trim();
        if !expr.is_empty() {
            let result = evaluate_with(expr, self.limits);
            self.report(expr, result)?;
        }

        Ok(true)
    }

    fn report(&mut self, entry: &str, result: Result<Number, CalcError>) -> io::Result<()> {
        match result {
            Ok(value) => {
                writeln!(self.output, "Result: {value}")?;
                self.last_result = Some(value);
                self.history.push(format!("{entry} = {value}"));
                Ok(())
            },
            Err(e) if e.is_division_by_zero() => {
                writeln!(self.output, "Error: division by zero is not allowed")
            },
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn read_operand(&mut self, label: &str) -> io::Result<Option<Number>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };

            if let Some(value) = parse_operand(&line) {
                return Ok(Some(value));
            }

            writeln!(self.output,
                     "Invalid input. Enter a valid number (use . or , for decimals).")?;
        }
    }

    /// Writes `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn run(script: &str) -> (Vec<String>, Option<Number>, String) {
        let mut output = Vec::new();
        let mut session = MenuSession::new(Cursor::new(script.to_string()),
                                           &mut output,
                                           MemoryClipboard::default());
        session.run().unwrap();
        let history = session.history().to_vec();
        let last = session.last_result();
        drop(session);
        (history, last, String::from_utf8(output).unwrap())
    }

    #[test]
    fn every_digit_maps_to_its_operator() {
        for (i, op) in BinaryOperator::ALL.iter().enumerate() {
            assert_eq!(MenuCommand::parse(&(i + 1).to_string()), MenuCommand::Binary(*op));
        }
        assert_eq!(MenuCommand::parse("Sair"), MenuCommand::Exit);
        assert_eq!(MenuCommand::parse(""), MenuCommand::Unknown);
    }

    #[test]
    fn operands_are_asked_again_until_valid() {
        let (history, last, out) = run("1\nx\n2\n3,5\n0\n");
        assert_eq!(history, ["2 + 3.5 = 5.5"]);
        assert_eq!(last, Some(Number::Real(5.5)));
        assert!(out.contains("Invalid input. Enter a valid number"));
    }

    #[test]
    fn division_by_zero_does_not_end_the_session() {
        let (history, last, out) = run("4\n1\n0\n8\n7 % -2\nexit\n");
        assert!(out.contains("Error: division by zero is not allowed"));
        assert_eq!(history, ["7 % -2 = -1"]);
        assert_eq!(last, Some(Number::Integer(-1)));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn empty_expression_returns_to_the_prompt() {
        let (history, _, out) = run("8\n   \nh\n");
        assert!(history.is_empty());
        assert!(out.contains("History is empty."));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn history_shows_only_the_most_recent_entries() {
        let script: String = (1..=25).map(|n| format!("8\n{n}\n")).collect::<String>() + "h\n";
        let (history, _, out) = run(&script);
        assert_eq!(history.len(), 25);
        assert!(!out.contains("   5 = 5\n"));
        assert!(out.contains("   6 = 6\n"));
        assert!(out.contains("   25 = 25\n"));
    }

    #[test]
    fn copy_uses_the_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        let mut output = Vec::new();
        let mut session = MenuSession::new(Cursor::new("c\n8\n1/4\nc\n"), &mut output, &mut clipboard);
        session.run().unwrap();
        drop(session);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("No result to copy."));
        assert!(out.contains("Copied to clipboard."));
        assert_eq!(clipboard.contents(), Some("0.25"));
    }

    #[test]
    fn unknown_selection_is_reported() {
        let (_, _, out) = run("9\n");
        assert!(out.contains("Invalid option. Type 0-8 or 'm'."));
    }
}
