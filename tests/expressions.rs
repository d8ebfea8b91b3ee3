use safecalc::{
    error::{CalcError, ErrorKind, ParseError},
    evaluate_expression, evaluate_with,
    interpreter::{
        evaluator::core::{Limits, MAX_DEPTH},
        value::core::Number,
    },
    parse_expression, parse_with,
};

fn eval(src: &str) -> Number {
    evaluate_expression(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

fn assert_value(src: &str, expected: Number) {
    assert_eq!(eval(src), expected, "evaluating {src:?}");
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Number::Integer(expected));
}

fn assert_real(src: &str, expected: f64) {
    assert_value(src, Number::Real(expected));
}

fn failure(src: &str) -> CalcError {
    match evaluate_expression(src) {
        Ok(v) => panic!("{src:?} succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_division_by_zero(src: &str) {
    assert_eq!(failure(src).kind(), ErrorKind::DivisionByZero, "evaluating {src:?}");
}

fn assert_invalid(src: &str) {
    assert_eq!(failure(src).kind(), ErrorKind::InvalidExpression, "evaluating {src:?}");
}

#[test]
fn basic_arithmetic() {
    assert_int("2+2", 4);
    assert_int("8 - 5", 3);
    assert_int("7 * 9", 63);
    assert_real("10 / 2", 5.0);
    assert_real("7 / 2", 3.5);
    assert_int("2**10", 1024);
    assert_real("2**-1", 0.5);
}

#[test]
fn floor_division_and_modulo_round_toward_negative_infinity() {
    assert_int("7//2", 3);
    assert_int("-7//2", -4);
    assert_int("7//-2", -4);
    assert_int("7%-2", -1);
    assert_int("-7%2", 1);
    assert_int("6%3", 0);
    assert_int("(-9223372036854775807 - 1) % -1", 0);
    assert_real("7.5 // 2", 3.0);
    assert_real("-7.5 % 2", 0.5);
}

#[test]
fn precedence_and_associativity() {
    assert_int("2 + 3 * 4", 14);
    assert_int("(2 + 3) * 4", 20);
    assert_int("10 - 4 - 3", 3);
    assert_int("2 ** 3 ** 2", 512);
    assert_int("-2 ** 2", -4);
    assert_int("(-2) ** 2", 4);
    assert_int("2 * -3", -6);
    assert_int("--3", 3);
    assert_int("+-+3", -3);
    assert_int("100 // 7 % 3", 2);
}

#[test]
fn literals() {
    assert_real(".5 + 5.", 5.5);
    assert_real("1e3", 1000.0);
    assert_real("2.5E-1", 0.25);
    assert_int("  \t42\n", 42);
    assert_int("007", 7);
}

#[test]
fn mixed_operands_promote_to_reals() {
    assert_real("1 + 0.5", 1.5);
    assert_real("3 * 1.0", 3.0);
    assert_real("4.0 ** 0.5", 2.0);
}

#[test]
fn integer_overflow_promotes_instead_of_failing() {
    assert_real("9223372036854775807 + 1", 9_223_372_036_854_775_808.0);
    assert_real("10 ** 20", 1e20);
    assert_real("-(-9223372036854775807 - 1)", 9_223_372_036_854_775_808.0);
}

#[test]
fn oversized_integer_literals_become_reals() {
    assert_real("99999999999999999999 + 1", 1e20);
    assert_real("9223372036854775808", 9_223_372_036_854_775_808.0);
    assert!(matches!(eval("-99999999999999999999 // 7"), Number::Real(r) if r < -1.4e19));
    assert_int("9223372036854775807", i64::MAX);
}

#[test]
fn zero_divisors_are_division_by_zero() {
    assert_division_by_zero("5/0");
    assert_division_by_zero("5//0");
    assert_division_by_zero("5%0");
    assert_division_by_zero("5 / 0.0");
    assert_division_by_zero("5 / -0.0");
    assert_division_by_zero("1 / (3 - 3)");
    assert_division_by_zero("(1 / 0) + 1");
}

#[test]
fn anything_outside_the_grammar_is_invalid() {
    for src in ["import os",
                "1+",
                "a+1",
                "",
                "   ",
                "__import__('os')",
                "2 ^ 3",
                "1 == 1",
                "x = 1",
                "(1 + 2",
                "1 + 2)",
                "()",
                "1 2",
                "1,5",
                "*3",
                "2 *** 3",
                "9".repeat(400).as_str()]
    {
        assert_invalid(src);
    }
}

#[test]
fn math_domain_errors_are_invalid_expressions() {
    assert_invalid("0 ** -1");
    assert_invalid("(-8) ** 0.5");
    assert_invalid("10.0 ** 400");
}

#[test]
fn errors_carry_positions() {
    let message = failure("1 + a").to_string();
    assert!(message.contains("position 4"), "{message}");

    let message = failure("2 * (3 / 0)").to_string();
    assert!(message.contains("position 7"), "{message}");
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["1 / 3", "-7 // 2", "2 ** 0.5", "5 % 0", "bad"] {
        let first = evaluate_expression(src);
        let second = evaluate_expression(src);
        assert_eq!(first, second, "evaluating {src:?}");
    }
}

#[test]
fn moderate_nesting_is_fine() {
    let src = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_int(&src, 1);

    let src = vec!["1"; 500].join(" + ");
    assert_int(&src, 500);

    let src = format!("{}5", "-".repeat(100));
    assert_int(&src, 5);
}

#[test]
fn pathological_nesting_fails_gracefully() {
    let src = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_invalid(&src);

    let src = "-".repeat(10_000) + "1";
    assert_invalid(&src);

    let src = vec!["2"; 10_000].join(" ** ");
    assert_invalid(&src);

    let src = vec!["1"; 5_000].join(" + ");
    assert_invalid(&src);
}

#[test]
fn huge_flat_chains_are_refused_while_parsing() {
    for op in ["+", "*"] {
        let src = vec!["1"; 1_000_000].join(op);
        match failure(&src) {
            CalcError::Parse(ParseError::TreeTooDeep { limit, .. }) => assert_eq!(limit, MAX_DEPTH),
            other => panic!("a million-term chain of {op:?} gave {other:?}"),
        }
    }
}

#[test]
fn parsed_trees_never_exceed_the_depth_limit() {
    let limits = Limits { max_nesting: 200,
                          max_depth:   50, };

    let fifty = vec!["1"; 50].join(" + ");
    let expr = parse_with(&fifty, limits).unwrap();
    assert_eq!(expr.depth(), 50);

    let fifty_one = vec!["1"; 51].join(" + ");
    assert!(matches!(parse_with(&fifty_one, limits),
                     Err(CalcError::Parse(ParseError::TreeTooDeep { limit: 50, .. }))));

    let signed = format!("-({fifty})");
    assert!(parse_with(&signed, limits).is_err());

    let power = format!("2 ** ({fifty})");
    assert!(parse_with(&power, limits).is_err());
}

#[test]
fn limits_are_configurable() {
    let tight = Limits { max_nesting: 3,
                         max_depth:   10, };
    assert!(evaluate_with("((1))", tight).is_ok());
    assert!(evaluate_with("((((1))))", tight).is_err());
    assert!(evaluate_with(&vec!["1"; 20].join("+"), tight).is_err());

    let loose = Limits { max_nesting: 200,
                         max_depth:   10_000, };
    let src = vec!["1"; 2_000].join(" + ");
    assert_eq!(evaluate_with(&src, loose), Ok(Number::Integer(2_000)));
}

#[test]
fn parse_shows_the_tree_shape() {
    let expr = parse_expression("2 + 3 * 4").unwrap();
    assert_eq!(expr.to_string(), "(2 + (3 * 4))");

    let expr = parse_expression("2 ** 3 ** 2").unwrap();
    assert_eq!(expr.to_string(), "(2 ** (3 ** 2))");

    let expr = parse_expression("-(1.5)").unwrap();
    assert_eq!(expr.to_string(), "(-1.5)");

    assert_eq!(parse_expression("1+2").unwrap(), parse_expression("1+2").unwrap());
}
