use mixcalc::{
    error::{Diagnostic, ParseError},
    evaluate,
};

fn render(src: &str) -> String {
    let error = evaluate(src).expect_err("expression should fail");
    Diagnostic::new(src, &error).to_string()
}

#[test]
fn caret_points_at_end_of_input() {
    assert_eq!(render("(2 + 3"),
               "error: Missing parenthesis\n  | (2 + 3\n  |       ^ expected ')' here");
}

#[test]
fn caret_points_at_unmatched_paren() {
    assert_eq!(render("2 + 3)"),
               "error: Unmatched parenthesis\n  | 2 + 3)\n  |      ^ this ')' has no matching '('");
}

#[test]
fn line_terminator_is_not_rendered() {
    let rendered = render("2 3\n");
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[0], "error: RPN stack must be emptied");
    assert_eq!(lines[1], "  | 2 3");
    assert_eq!(lines[2], "  |    ^ operands are left over, add an operator");
}

#[test]
fn caret_column_counts_characters() {
    let src = "π + 1";
    let error = evaluate(src).unwrap_err();
    assert_eq!(error,
               ParseError::UnexpectedCharacter { found:  'π',
                                                 offset: 0, });
    assert_eq!(Diagnostic::new(src, &error).caret_column(), 0);

    let src = "1 + π";
    let error = evaluate(src).unwrap_err();
    assert_eq!(error.offset(), 4);
    assert_eq!(Diagnostic::new(src, &error).caret_column(), 4);
    assert_eq!(error.message(), "Unexpected character π");
}

#[test]
fn error_display_includes_offset() {
    assert_eq!(ParseError::MissingParenthesis { offset: 6 }.to_string(),
               "Error at offset 6: Missing parenthesis.");
    assert_eq!(ParseError::UnbalancedRpn { depth:  2,
                                           offset: 3, }.to_string(),
               "Error at offset 3: RPN stack must be emptied (2 operands left).");
}

#[test]
fn operators_display_as_their_symbols() {
    use mixcalc::interpreter::operator::BinaryOperator;

    let symbols: Vec<_> = [BinaryOperator::Add,
                           BinaryOperator::Sub,
                           BinaryOperator::Mul,
                           BinaryOperator::Div].iter()
                                               .map(ToString::to_string)
                                               .collect();
    assert_eq!(symbols, ["+", "-", "*", "/"]);
}
