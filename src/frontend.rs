/// The interactive terminal menu.
///
/// Reads selections line by line from any `BufRead`, writes prompts and
/// results to any `Write`, and keeps an in-memory history of calculations.
pub mod menu;

/// The desktop keypad model.
///
/// Buttons append to a pending expression; `=` evaluates it.
pub mod keypad;

/// The web widget state machine.
///
/// A classic pocket-calculator flow: operand, operator, operand, `=`, driven
/// by handler functions over an explicit per-session `WidgetState`.
pub mod widget;
