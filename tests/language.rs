use mixcalc::{error::ParseError, evaluate, evaluate_lines};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &ParseError) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
    }
}

#[test]
fn infix_precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("8 - 3 - 2", 3.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_value("1 - 2 * 3", -5.0);
    assert_value("((1))", 1.0);
}

#[test]
fn rpn_runs() {
    assert_value("2 3 4 * +", 14.0);
    assert_value("5 1 2 + 4 * + 3 -", 14.0);
    assert_value("2 3 + 4 5 + *", 45.0);
    assert_value("10 2 /", 5.0);
}

#[test]
fn rpn_stack_grows_past_a_hundred_operands() {
    let src = format!("{}{}", "1 ".repeat(1000), "+ ".repeat(999));
    assert_eq!(evaluate(&src), Ok(1000.0));
}

#[test]
fn infix_and_rpn_mixed() {
    assert_value("1 + 2 3 4 * + 5 -", 10.0);
    assert_value("(1 + 2) 3 *", 9.0);
    assert_value("2 (3 4 +) *", 14.0);
    assert_value("(2 3 +) * 2", 10.0);
    assert_value("1 + 2 3 + * 4", 24.0);
}

#[test]
fn literals() {
    assert_value("1e3 + 1", 1001.0);
    assert_value("2.5e2 / 10", 25.0);
    assert_value("2.5+.5", 3.0);
    assert_value("1. * 4", 4.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("1 0 /", f64::INFINITY);
    assert_value("1 - 2 / 0", f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
}

#[test]
fn whitespace_is_only_spaces() {
    assert_value("2+3", 5.0);
    assert_value("2 + 3", 5.0);
    assert_value("2  +   3", 5.0);
    assert_value("   7   ", 7.0);
    assert_failure("2\t+ 3",
                   &ParseError::UnexpectedCharacter { found:  '\t',
                                                      offset: 1, });
}

#[test]
fn line_terminators_end_the_statement() {
    assert_value("2 + 3\n", 5.0);
    assert_value("2 + 3\r\n", 5.0);
    assert_value("2 3 +\n", 5.0);
    assert_value("2 + 3\0ignored", 5.0);
    assert_failure("2\n3", &ParseError::UnexpectedTrailingToken { offset: 2 });
}

#[test]
fn missing_parenthesis_points_at_end_of_input() {
    assert_failure("(2 + 3", &ParseError::MissingParenthesis { offset: 6 });
    assert_failure("(1 2 + *)", &ParseError::MissingParenthesis { offset: 7 });
}

#[test]
fn unmatched_parenthesis_points_at_the_paren() {
    assert_failure(")", &ParseError::UnmatchedParenthesis { offset: 0 });
    assert_failure("2 + 3)", &ParseError::UnmatchedParenthesis { offset: 5 });
    assert_failure("(2 + 3 *)", &ParseError::UnmatchedParenthesis { offset: 8 });
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(256), 1.0);
    assert_failure(&nested(257), &ParseError::NestingTooDeep { offset: 256 });
    assert_failure(&nested(100_000), &ParseError::NestingTooDeep { offset: 256 });
    assert_failure(&format!("2 {}", nested(300)),
                   &ParseError::NestingTooDeep { offset: 258 });
}

#[test]
fn sibling_groups_do_not_accumulate_nesting() {
    let src = vec!["(1)"; 400].join(" + ");
    assert_value(&src, 400.0);
}

#[test]
fn expressions_must_start_with_an_operand() {
    assert_failure("", &ParseError::ExpectedOperand { offset: 0 });
    assert_failure("+ 2", &ParseError::ExpectedOperand { offset: 0 });
    assert_failure("2 +", &ParseError::ExpectedOperand { offset: 3 });
    assert_failure("2 * * 3", &ParseError::ExpectedOperand { offset: 4 });
}

#[test]
fn dangling_rpn_operands_are_an_error() {
    assert_failure("2 3", &ParseError::UnbalancedRpn { depth:  2,
                                                       offset: 3, });
    assert_failure("2 3 4 +", &ParseError::UnbalancedRpn { depth:  2,
                                                           offset: 7, });
    assert_failure("1.2.3", &ParseError::UnbalancedRpn { depth:  2,
                                                         offset: 5, });
}

#[test]
fn rpn_run_only_continues_on_a_number() {
    // A group after a completed run does not restart RPN.
    assert_failure("2 3 + (4)", &ParseError::UnexpectedTrailingToken { offset: 6 });
    // Inside an unfinished run a group is an ordinary operand.
    assert_failure("2 3 (4)", &ParseError::UnbalancedRpn { depth:  3,
                                                           offset: 7, });
    assert_failure("2 3 + * 4", &ParseError::UnexpectedTrailingToken { offset: 6 });
}

#[test]
fn unknown_characters_are_reported() {
    assert_failure("2 $ 3",
                   &ParseError::UnexpectedCharacter { found:  '$',
                                                      offset: 2, });
    assert_failure("x", &ParseError::UnexpectedCharacter { found:  'x',
                                                           offset: 0, });
    assert_failure("2 3 + $",
                   &ParseError::UnexpectedCharacter { found:  '$',
                                                      offset: 6, });
    assert_failure(".", &ParseError::UnexpectedCharacter { found:  '.',
                                                           offset: 0, });
    assert!(evaluate("2 ^ 3").unwrap_err().is_lexical());
    assert!(!evaluate("(2").unwrap_err().is_lexical());
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["1 + 2 3 4 * + 5 -", "2 3", "(2 + 3"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn evaluate_lines_skips_blank_lines() {
    let source = "2 + 3\n\n   \n2 3 *\r\n)\n";
    let results: Vec<_> = evaluate_lines(source).collect();

    assert_eq!(results.len(), 3);
    assert_eq!((results[0].line_number, results[0].line), (1, "2 + 3"));
    assert_eq!(results[0].result, Ok(5.0));
    assert_eq!((results[1].line_number, results[1].line), (4, "2 3 *"));
    assert_eq!(results[1].result, Ok(6.0));
    assert_eq!(results[2].line_number, 5);
    assert_eq!(results[2].result,
               Err(ParseError::UnmatchedParenthesis { offset: 0 }));
}

#[test]
fn rpn_folding_can_be_driven_directly() {
    use mixcalc::interpreter::{lexer::Context, parser::rpn::parse_rpn};

    let mut context = Context::new("1 + 3 -");
    assert_eq!(parse_rpn(&mut context, 10.0), Ok(8.0));

    let mut context = Context::new("+");
    assert_eq!(parse_rpn(&mut context, 10.0),
               Err(ParseError::ExpectedOperand { offset: 0 }));
}
