use binops::{
    Session,
    error::{Error, ErrorKind, LexError, ParseError, RuntimeError},
    get_result,
    interpreter::{
        environment::Environment,
        lexer::tokenize,
        parser::{core::MAX_NESTING_DEPTH, statement::parse_line},
    },
};

fn assert_result(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, Some(expected), "Script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected error: {e}");
            e
        },
    }
}

#[test]
fn single_constant_assignment() {
    assert_result("a=0", 0);
    assert_result("a = 42", 42);
    assert_result("\tvalue\t=\t7  ", 7);
}

#[test]
fn and_binds_tighter_than_or() {
    assert_result("a=1|2&3", 3);
    assert_result("a=2&3|1", 3);
    assert_result("a=4&1|2", 2);
}

#[test]
fn xor_sits_between_and_and_or() {
    assert_result("a=1|2^3&4", 3);
    assert_result("a=6^3&5", 7);
    assert_result("a=1^3|4", 6);
    assert_result("a=5|1^1", 5);
}

#[test]
fn not_nests_without_limit() {
    assert_result("a=~~5", 5);
    assert_result("a=~5", -6);
    assert_result("a=~~~0", -1);
    assert_result("a=~ ~ ~ ~ 9", 9);
    assert_result("a=~0&7", 7);
}

#[test]
fn parentheses_override_precedence() {
    assert_result("a=(1|2)&3", 3);
    assert_result("a=(1|2)&2", 2);
    assert_result("a=((((6))))", 6);
    assert_result("a=~(5^(3&1))", -5);
}

#[test]
fn variables_persist_across_lines() {
    assert_result("a=5\nb=a&3", 1);
    assert_result("x=12\ny=10\nz=x^y\nw=z|x&y", 14);
    assert_result("a=1\na=a|2\na=a|4", 7);
}

#[test]
fn result_is_the_last_assignment() {
    assert_result("b=6\na=5", 5);
    assert_result("a=5\nb=6\na=b^3", 5);
}

#[test]
fn signed_64_bit_boundaries() {
    assert_result("a=9223372036854775807", i64::MAX);
    assert_result("a=~9223372036854775807", i64::MIN);
    assert_result("a=0001", 1);
}

#[test]
fn blank_lines_are_skipped() {
    assert_result("\na=3\n\n   \nb=a^1\n", 2);
    assert_eq!(get_result("").unwrap(), None);
    assert_eq!(get_result("\n \t\n").unwrap(), None);
}

#[test]
fn undefined_variable_is_reported() {
    let err = assert_failure("a=b|1", ErrorKind::UndefinedVariable);
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 1 }) if name == "b"));

    let err = assert_failure("a=1\nb=c", ErrorKind::UndefinedVariable);
    assert_eq!(err.line(), 2);
}

#[test]
fn self_reference_before_assignment_fails() {
    assert_failure("a=a", ErrorKind::UndefinedVariable);
}

#[test]
fn invalid_character_is_reported() {
    let err = assert_failure("a=1$2", ErrorKind::Lex);
    assert!(matches!(err, Error::Lex(LexError { character: '$', line: 1 })));

    assert_failure("a_b=1", ErrorKind::Lex);
    assert_failure("a=1+2", ErrorKind::Lex);
    assert_failure("a=1\nb=a!", ErrorKind::Lex);
}

#[test]
fn overflowing_constant_is_reported() {
    let err = assert_failure("a=9223372036854775808", ErrorKind::NumericParse);
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::InvalidLiteral { ref literal, .. })
                     if literal == "9223372036854775808"));

    assert_failure("a=1|99999999999999999999999", ErrorKind::NumericParse);
}

#[test]
fn syntax_errors_are_reported() {
    let err = assert_failure("=1", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedVariable { .. })));

    let err = assert_failure("1=1", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedVariable { .. })));

    let err = assert_failure("a 1", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedEquals { .. })));

    let err = assert_failure("a", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedEquals { found: None, .. })));

    let err = assert_failure("a=(1|2", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedClosingParen { found: None, .. })));

    let err = assert_failure("a=", ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedOperand { found: None, .. })));

    let err = assert_failure("a=1|&2", ErrorKind::Syntax);
    assert!(matches!(err,
                     Error::Parse(ParseError::ExpectedOperand { found: Some(ref tok), .. })
                     if tok == "&"));

    assert_failure("a=()", ErrorKind::Syntax);
    assert_failure("a=~", ErrorKind::Syntax);
}

#[test]
fn leftover_tokens_on_a_line_are_rejected() {
    let err = assert_failure("a=1 b=2", ErrorKind::Syntax);
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedTrailingTokens { ref token, .. })
                     if token == "b"));

    assert_failure("a=1)", ErrorKind::Syntax);
    assert_failure("a=1 2", ErrorKind::Syntax);
}

#[test]
fn first_failure_in_reading_order_wins() {
    assert_failure("a=b|", ErrorKind::UndefinedVariable);
    assert_failure("a=x 2", ErrorKind::UndefinedVariable);
    assert_failure("a=99999999999999999999 )", ErrorKind::NumericParse);
    assert_failure("a=1|b&(", ErrorKind::UndefinedVariable);
    assert_failure("a=1|(", ErrorKind::Syntax);
}

#[test]
fn long_runs_of_not_do_not_recurse() {
    assert_result(&format!("a={}5", "~".repeat(100_000)), 5);
    assert_result(&format!("a={}5", "~".repeat(100_001)), -6);
    assert_result(&format!("a=1|{}0&3", "~ ".repeat(70_001)), 3);
}

#[test]
fn parentheses_nest_up_to_the_limit() {
    let depth = MAX_NESTING_DEPTH;
    assert_result(&format!("a={}~6{}", "(".repeat(depth), ")".repeat(depth)), -7);
    assert_result(&format!("a={}1|2{}&2", "(".repeat(depth), ")".repeat(depth)), 2);

    let depth = MAX_NESTING_DEPTH + 1;
    let err = assert_failure(&format!("a={}1{}", "(".repeat(depth), ")".repeat(depth)),
                             ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { line: 1, .. })));

    assert_failure(&format!("a={}", "(".repeat(50_000)), ErrorKind::Syntax);
    assert_failure(&format!("a={}", "~(".repeat(50_000)), ErrorKind::Syntax);
}

#[test]
fn first_error_aborts_the_session() {
    let mut session = Session::new();
    assert_eq!(session.run_line("a=1").unwrap(), Some(1));
    assert!(session.run_line("b=nope").is_err());
    assert_eq!(session.variable("b"), None);
    assert_eq!(session.result(), Some(1));

    let err = assert_failure("a=1\nb=$\nc=2", ErrorKind::Lex);
    assert_eq!(err.line(), 2);
}

#[test]
fn sessions_are_deterministic() {
    let src = "a=170\nb=~a&255\nc=a^b|(a&b)\nd=~c";
    let first = get_result(src).unwrap();
    for _ in 0..5 {
        assert_eq!(get_result(src).unwrap(), first);
    }

    let run = || {
        let mut session = Session::new();
        for line in src.lines() {
            session.run_line(line).unwrap();
        }
        session.environment().clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn session_tracks_lines_and_variables() {
    let mut session = Session::new();
    session.run_line("x = 3").unwrap();
    session.run_line("").unwrap();
    session.run_line("y = x ^ 1").unwrap();

    assert_eq!(session.lines_run(), 3);
    assert_eq!(session.variable("x"), Some(3));
    assert_eq!(session.variable("y"), Some(2));
    assert_eq!(session.environment().len(), 2);

    let mut variables: Vec<(&str, i64)> = session.environment().iter().collect();
    variables.sort_unstable();
    assert_eq!(variables, vec![("x", 3), ("y", 2)]);

    let err = session.run_line("z = (").unwrap_err();
    assert_eq!(err.line(), 4);
}

#[test]
fn environment_survives_failed_statements() {
    let mut env = Environment::new();

    let tokens = tokenize("a = 1 | missing", 1).unwrap();
    assert!(parse_line(&tokens, &mut env, 1).is_err());
    assert!(env.is_empty());

    let tokens = tokenize("a = 1 a", 2).unwrap();
    assert!(parse_line(&tokens, &mut env, 2).is_err());
    assert!(!env.contains("a"));

    let tokens = tokenize("a = 1 | 4", 3).unwrap();
    assert_eq!(parse_line(&tokens, &mut env, 3).unwrap(), "a");
    assert_eq!(env.get("a"), Some(5));
}

#[test]
fn error_messages_name_the_line_and_input() {
    let err = get_result("a=1\nb=c").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: Unknown variable 'c'.");

    let err = get_result("a=#").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Invalid character '#'.");

    let err = get_result("a=(1").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1: Expected closing parenthesis ')', found end of line.");
}
