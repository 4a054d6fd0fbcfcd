use std::fs::{self};

use clips::{
    ParseError, RuntimeError, Value,
    ast::Operator,
    eval, get_result,
    interpreter::parser::core::MAX_DEPTH,
    parse,
    repl::{Repl, run_line},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (inputs, expected)) in extract_transcripts(&content).into_iter().enumerate() {
            count += 1;
            let actual = inputs.iter().map(|line| run_line(line)).collect::<Vec<_>>();
            assert_eq!(actual,
                       expected,
                       "Transcript {} in {:?} diverged for inputs {:?}",
                       i + 1,
                       path,
                       inputs);
        }
    }

    assert!(count > 0, "No clips transcripts found in book/src");
}

/// Splits each ```clips block into the lines typed after the prompt and the
/// lines printed in response.
fn extract_transcripts(content: &str) -> Vec<(Vec<String>, Vec<String>)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```clips") {
            inside = true;
            inputs.clear();
            outputs.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push((inputs.clone(), outputs.clone()));
            continue;
        }
        if inside {
            if let Some(input) = line.strip_prefix("clips> ") {
                inputs.push(input.to_string());
            } else if line == "clips>" {
                inputs.push(String::new());
            } else {
                outputs.push(line.to_string());
            }
        }
    }

    blocks
}

fn assert_value(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "Unexpected result for {src:?}"),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

fn assert_runtime_error(src: &str, expected: &RuntimeError) {
    match get_result(src) {
        Ok(Value::Error(e)) => assert_eq!(&e, expected, "Unexpected error for {src:?}"),
        Ok(v) => panic!("Line {src:?} evaluated to {v} but was expected to fail"),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(tree) => panic!("Line {src:?} parsed to {tree} but was expected to fail"),
        Err(e) => e,
    }
}

fn sexpr(children: Vec<Value>) -> Value {
    Value::SExpr(children)
}

#[test]
fn empty_input_is_an_empty_sexpr() {
    assert_eq!(parse("").unwrap(), Value::sexpr());
    assert_eq!(parse(" \t ").unwrap(), Value::sexpr());
    assert_eq!(parse("()").unwrap(), sexpr(vec![Value::sexpr()]));

    assert_eq!(get_result("").unwrap(), Value::sexpr());
    assert_eq!(get_result("()").unwrap(), Value::sexpr());
    assert_value("", "()");
    assert_value("()", "()");
    assert_value("(())", "()");
}

#[test]
fn single_value_unwraps() {
    assert_value("(5)", "5");
    assert_value("5", "5");
    assert_value("((((7))))", "7");
    assert_eq!(get_result("(5)").unwrap(), Value::Number(5));
}

#[test]
fn parser_builds_owned_tree() {
    let tree = parse("(+ 1 (* 2 3))").unwrap();
    let expected = sexpr(vec![sexpr(vec![Operator::Add.into(),
                                         Value::Number(1),
                                         sexpr(vec![Operator::Mul.into(),
                                                    Value::Number(2),
                                                    Value::Number(3)])])]);
    assert_eq!(tree, expected);
}

#[test]
fn symbols_keep_their_spelling() {
    let tree = parse("sub").unwrap();
    assert_eq!(tree.to_string(), "(sub)");

    let Value::SExpr(children) = tree else {
        panic!("root is not an s-expression");
    };
    let Value::Symbol(symbol) = &children[0] else {
        panic!("child is not a symbol");
    };
    assert_eq!(symbol.name, "sub");
    assert_eq!(symbol.operator, Some(Operator::Sub));
}

#[test]
fn bare_symbol_evaluates_to_itself() {
    assert_value("+", "+");
    assert_value("(mul)", "mul");
    assert_value("(+)", "+");
}

#[test]
fn arithmetic_reduces_left_to_right() {
    assert_value("(+ 1 2)", "3");
    assert_value("(- 10 2 3)", "5");
    assert_value("(* 2 3 4)", "24");
    assert_value("(/ 100 5 2)", "10");
    assert_value("(% 17 5)", "2");
    assert_value("(+ 1 (* 2 3) (- 10 4))", "13");
    assert_value("+ 1 2", "3");
}

#[test]
fn word_spellings_match_symbols() {
    assert_value("(add 1 2)", "3");
    assert_value("(sub 10 4)", "6");
    assert_value("(mul 6 7)", "42");
    assert_value("(div 7 2)", "3");
}

#[test]
fn unary_negation_needs_exactly_one_operand() {
    assert_value("(- 5)", "-5");
    assert_value("(sub 5)", "-5");
    assert_value("(- -5)", "5");
    assert_value("(- 5 0)", "5");
    assert_value("(+ 5)", "5");
    assert_value("(* 5)", "5");
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("(/ 7 2)", "3");
    assert_value("(/ -7 2)", "-3");
    assert_value("(% -7 2)", "-1");
    assert_value("(% 7 -2)", "1");
}

#[test]
fn negative_literals() {
    assert_value("-5", "-5");
    assert_value("(-5)", "-5");
    assert_value("(+ -1 -2)", "-3");
    assert_value("(--5)", "5");
}

#[test]
fn fractional_literals_are_truncated() {
    assert_value("(+ 1.9 1.9)", "2");
    assert_value("3.99", "3");
    assert_value("-0.5", "0");
    assert_value("(* 2.5 4)", "8");
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  ( +\t1   2 )  ", "3");
    assert_value("(+ 1(* 2 3))", "7");
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error("(/ 10 0)", &RuntimeError::DivisionByZero);
    assert_runtime_error("(div 10 0)", &RuntimeError::DivisionByZero);
    assert_runtime_error("(/ 10 0 5)", &RuntimeError::DivisionByZero);
    assert_runtime_error("(% 10 0)", &RuntimeError::DivisionByZero);
    assert_value("(/ 10 0)", "Error: Division by zero!");
}

#[test]
fn errors_propagate_to_the_root() {
    assert_runtime_error("(+ 1 (/ 10 0) 2)", &RuntimeError::DivisionByZero);
    assert_runtime_error("(* 2 (+ 1 (- 3 (/ 1 0))))", &RuntimeError::DivisionByZero);
    assert_value("(+ 1 (/ 10 0) 2)", "Error: Division by zero!");
}

#[test]
fn first_error_wins() {
    assert_runtime_error("(+ (/ 1 0) (1 2))", &RuntimeError::DivisionByZero);
    assert_runtime_error("(+ (1 2) (/ 1 0))", &RuntimeError::NotASymbol);
}

#[test]
fn operating_on_non_number_is_error() {
    let tree = sexpr(vec![Operator::Add.into(), Value::Number(1), Value::symbol("foo")]);
    assert_eq!(eval(tree), Value::Error(RuntimeError::NonNumber));

    assert_runtime_error("(+ 1 +)", &RuntimeError::NonNumber);
    assert_runtime_error("(+ 1 ())", &RuntimeError::NonNumber);
    assert_value("(+ 1 -)", "Error: Cannot operate on non-number!");
}

#[test]
fn sexpr_must_start_with_symbol() {
    assert_runtime_error("(1 2)", &RuntimeError::NotASymbol);
    assert_runtime_error("((+ 1 2) 3)", &RuntimeError::NotASymbol);
    assert_runtime_error("(+ 1 2) (+ 3 4)", &RuntimeError::NotASymbol);
    assert_value("(1 2)", "Error: S-expression does not start with symbol!");
}

#[test]
fn unknown_operator_is_error() {
    let tree = sexpr(vec![Value::symbol("pow"), Value::Number(2), Value::Number(3)]);
    assert_eq!(eval(tree),
               Value::Error(RuntimeError::UnknownOperator { name: "pow".to_string() }));

    let tree = sexpr(vec![Value::symbol("pow"), Value::Number(2)]);
    assert_eq!(eval(tree).to_string(), "Error: Unknown operator 'pow'!");

    let tree = sexpr(vec![Value::symbol("pow"), Value::Number(2), Value::symbol("x")]);
    assert_eq!(eval(tree), Value::Error(RuntimeError::NonNumber));
}

#[test]
fn errors_are_returned_verbatim() {
    let error = Value::Error(RuntimeError::DivisionByZero);
    assert_eq!(eval(error.clone()), error);

    let tree = sexpr(vec![Operator::Add.into(),
                          Value::Number(1),
                          sexpr(vec![Value::Error(RuntimeError::InvalidNumber)])]);
    assert_eq!(eval(tree), Value::Error(RuntimeError::InvalidNumber));
}

#[test]
fn out_of_range_literal_is_in_band_error() {
    assert_runtime_error("99999999999999999999", &RuntimeError::InvalidNumber);
    assert_runtime_error("(+ 1 99999999999999999999)", &RuntimeError::InvalidNumber);
    assert_value("(+ 1 99999999999999999999)", "Error: Invalid number");
    assert_value("-9223372036854775808", "-9223372036854775808");
}

#[test]
fn overflow_is_error() {
    assert_runtime_error("(+ 9223372036854775807 1)", &RuntimeError::Overflow);
    assert_runtime_error("(* 4611686018427387904 2)", &RuntimeError::Overflow);
    assert_runtime_error("(- -9223372036854775808)", &RuntimeError::Overflow);
    assert_runtime_error("(/ -9223372036854775808 -1)", &RuntimeError::Overflow);
    assert_value("(% -9223372036854775808 -1)", "0");
}

#[test]
fn unbalanced_parens_fail_to_parse() {
    assert_eq!(assert_parse_failure("(+ 1 2"),
               ParseError::ExpectedClosingParen { column: 1 });
    assert_eq!(assert_parse_failure("(+ 1 (* 2 3)"),
               ParseError::ExpectedClosingParen { column: 1 });
    assert_eq!(assert_parse_failure("(+ 1 (* 2 3"),
               ParseError::ExpectedClosingParen { column: 6 });
    assert_eq!(assert_parse_failure(")"),
               ParseError::UnexpectedClosingParen { column: 1 });
    assert_eq!(assert_parse_failure("(+ 1 2))"),
               ParseError::UnexpectedClosingParen { column: 8 });
}

#[test]
fn unknown_tokens_fail_to_parse() {
    assert_eq!(assert_parse_failure("(+ 1 foo)"),
               ParseError::UnexpectedToken { token:  "foo".to_string(),
                                             column: 6, });
    assert_eq!(assert_parse_failure("(+ 1 & 2)"),
               ParseError::UnexpectedToken { token:  "&".to_string(),
                                             column: 6, });
    assert_eq!(assert_parse_failure("(addx 1 2)"),
               ParseError::UnexpectedToken { token:  "addx".to_string(),
                                             column: 2, });
    assert_eq!(assert_parse_failure("(+ 1 2) trailing").column(), 9);
    assert_eq!(assert_parse_failure("1.2.3"),
               ParseError::UnexpectedToken { token:  ".".to_string(),
                                             column: 4, });
    assert_eq!(assert_parse_failure("(+ 3. 1)"),
               ParseError::UnexpectedToken { token:  ".".to_string(),
                                             column: 5, });
    assert_eq!(run_line("3."), "Parse error at column 2: Unexpected token: '.'.");
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_depth_is_bounded() {
    assert_value(&nested(MAX_DEPTH), "1");

    assert_eq!(assert_parse_failure(&nested(MAX_DEPTH + 1)),
               ParseError::TooDeeplyNested { column: MAX_DEPTH + 1 });
    assert_eq!(assert_parse_failure(&nested(30_000)),
               ParseError::TooDeeplyNested { column: MAX_DEPTH + 1 });
    assert_eq!(run_line(&nested(MAX_DEPTH + 1)),
               format!("Parse error at column {}: Expressions are nested too deeply.",
                       MAX_DEPTH + 1));
}

#[test]
fn parse_errors_render_a_diagnostic() {
    assert_eq!(run_line("(+ 1 2"),
               "Parse error at column 1: Expected closing parenthesis ')' for this '(' but none found.");
    assert_eq!(run_line("(+ 1 foo)"),
               "Parse error at column 6: Unexpected token: 'foo'.");
}

#[test]
fn rendering_round_trips_numbers_only() {
    let rendered = run_line("(* 6 7)");
    assert_eq!(rendered, "42");
    assert_eq!(get_result(&rendered).unwrap(), Value::Number(42));

    let rendered = run_line("(- 3 10)");
    assert_eq!(get_result(&rendered).unwrap(), Value::Number(-7));

    let rendered = run_line("(/ 1 0)");
    assert_eq!(rendered, "Error: Division by zero!");
    assert!(parse(&rendered).is_err());
}

#[test]
fn repl_continues_after_failures() {
    let input = "(+ 1 2\n(/ 1 0)\n\n(+ 1 2)\n";
    let mut output = Vec::new();

    let mut repl = Repl::new(input.as_bytes(), &mut output).quiet(true);
    let count = repl.run().unwrap();
    assert_eq!(count, 4);
    assert_eq!(repl.history().entries(),
               ["(+ 1 2", "(/ 1 0)", "", "(+ 1 2)"]);
    drop(repl);

    let output = String::from_utf8(output).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines,
               ["Parse error at column 1: Expected closing parenthesis ')' for this '(' but none found.",
                "Error: Division by zero!",
                "()",
                "3"]);
}

#[test]
fn repl_continues_after_invalid_utf8() {
    let input: &[u8] = b"(+ 1 1)\n\xff\n(+ 1 2)\n";
    let mut output = Vec::new();

    let mut repl = Repl::new(input, &mut output).quiet(true);
    assert_eq!(repl.run().unwrap(), 3);
    assert_eq!(repl.history().entries()[1], "\u{FFFD}");
    drop(repl);

    let output = String::from_utf8(output).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "2");
    assert!(lines[1].starts_with("Parse error at column 1: Unexpected token"),
            "unexpected diagnostic: {}",
            lines[1]);
    assert_eq!(lines[2], "3");
}

#[test]
fn repl_continues_after_deep_nesting() {
    let input = format!("{}\n(+ 1 2)\n", nested(30_000));
    let mut output = Vec::new();

    Repl::new(input.as_bytes(), &mut output).quiet(true)
                                            .run()
                                            .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output,
               format!("Parse error at column {}: Expressions are nested too deeply.\n3\n",
                       MAX_DEPTH + 1));
}

#[test]
fn repl_prints_banner_and_prompt() {
    let mut output = Vec::new();

    let mut repl = Repl::new("(+ 2 2)\r\n".as_bytes(), &mut output).with_prompt("> ");
    repl.run().unwrap();
    assert_eq!(repl.history().last(), Some("(+ 2 2)"));
    drop(repl);

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Clips v"));
    assert!(output.contains("Press Ctrl+C to Exit\n\n> 4\n> \n"));
}

#[test]
fn history_keeps_duplicates() {
    let mut output = Vec::new();

    let mut repl = Repl::new("5\n5\n5\n".as_bytes(), &mut output).quiet(true);
    repl.run().unwrap();
    assert_eq!(repl.history().len(), 3);
    assert!(repl.history().entries().iter().all(|line| line == "5"));
}

#[test]
fn example_works() {
    let script = fs::read_to_string("tests/example.clips").expect("missing file");
    let expected = fs::read_to_string("tests/example.out").expect("missing file");

    let mut output = Vec::new();
    Repl::new(script.as_bytes(), &mut output).quiet(true)
                                             .run()
                                             .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), expected);
}
