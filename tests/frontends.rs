use std::io::Cursor;

use safecalc::{
    ast::BinaryOperator,
    clipboard::MemoryClipboard,
    frontend::{
        keypad::{Key, Keypad},
        menu::MenuSession,
        widget::{Action, WidgetState},
    },
    interpreter::{evaluator::core::Limits, value::core::Number},
};

fn run_menu(script: &str, limits: Limits) -> (Vec<String>, Option<Number>, String, MemoryClipboard) {
    let mut clipboard = MemoryClipboard::default();
    let mut output = Vec::new();
    let mut session =
        MenuSession::new(Cursor::new(script.to_string()), &mut output, &mut clipboard).with_limits(limits);
    session.run().unwrap();
    let history = session.history().to_vec();
    let last = session.last_result();
    drop(session);
    (history, last, String::from_utf8(output).unwrap(), clipboard)
}

#[test]
fn menu_session_end_to_end() {
    let script = "\
m
1
2
3
5
-7
2
7
2
-1
8
(1 + 2) * 3
c
h
quit
";
    let (history, last, out, clipboard) = run_menu(script, Limits::default());

    assert_eq!(history, ["2 + 3 = 5", "-7 // 2 = -4", "2 ** -1 = 0.5", "(1 + 2) * 3 = 9"]);
    assert_eq!(last, Some(Number::Integer(9)));
    assert_eq!(clipboard.contents(), Some("9"));
    assert!(out.contains("Result: 0.5"));
    assert!(out.contains("History (most recent last):\n   2 + 3 = 5\n"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(out.matches("Calculator - choose an option:").count(), 2);
}

#[test]
fn menu_reports_invalid_expressions_and_keeps_going() {
    let (history, last, out, _) = run_menu("8\nimport os\n8\n2+2\n", Limits::default());
    assert!(out.contains("Error: Error at position 0: Unexpected token"));
    assert_eq!(history, ["2+2 = 4"]);
    assert_eq!(last, Some(Number::Integer(4)));
}

#[test]
fn menu_uses_the_configured_limits() {
    let tight = Limits { max_nesting: 1,
                         max_depth:   100, };
    let (history, _, out, _) = run_menu("8\n((1))\n", tight);
    assert!(history.is_empty());
    assert!(out.contains("nested deeper than 1 levels"));
}

#[test]
fn menu_stops_quietly_at_end_of_input_mid_prompt() {
    let (history, _, out, _) = run_menu("6\n5\n", Limits::default());
    assert!(history.is_empty());
    assert!(out.ends_with("B: "));
}

#[test]
fn keypad_and_widget_agree_with_the_evaluator() {
    let mut keypad = Keypad::default();
    for key in [Key::Digit(8), Key::Operator(BinaryOperator::Div), Key::Digit(5), Key::Equals] {
        keypad.press(key);
    }
    assert_eq!(keypad.display(), "1.6");

    let mut state = WidgetState::default();
    for action in [Action::Digit(8),
                   Action::Operation(BinaryOperator::Div),
                   Action::Digit(5),
                   Action::Calculate]
    {
        action.apply(&mut state);
    }
    assert_eq!(state.display, keypad.display());
}

#[test]
fn each_widget_session_is_independent() {
    let mut first = WidgetState::default();
    let mut second = WidgetState::default();

    Action::Digit(7).apply(&mut first);
    Action::Operation(BinaryOperator::Mul).apply(&mut first);

    Action::Digit(3).apply(&mut second);

    assert_eq!(first.pending().as_deref(), Some("7 *"));
    assert_eq!(second.pending(), None);
    assert_eq!(second.display, "3");
}
