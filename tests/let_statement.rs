use strcomb::ascii::{Number, digit, float, identifier, number};
use strcomb::{
    Cursor, MapExt, Parser, alt, keyword, literal, many, run, seq, token, until_whitespace,
};

fn let_x<'code>() -> impl Parser<'code, Output = (&'code str, &'code str, &'code str, f64)> {
    seq((
        token(literal("let")),
        token(literal("x")),
        token(literal("=")),
        token(float()),
    ))
}

#[test]
fn test_let_integer_value() {
    let (value, cursor) = run(&let_x(), "let x = 1").unwrap();
    assert_eq!(value, ("let", "x", "=", 1.0));
    assert_eq!(cursor.position(), 9);
}

#[test]
fn test_let_decimal_value() {
    let input = "let x = 23.34";
    let ((_, _, _, value), cursor) = run(&let_x(), input).unwrap();
    assert_eq!(value, 23.34);
    assert_eq!(cursor.position(), input.len());
}

#[test]
fn test_let_short_decimal() {
    let ((_, _, _, value), cursor) = run(&let_x(), "let x = 1.1").unwrap();
    assert_eq!(value, 1.1);
    assert!(cursor.eos());
}

#[test]
fn test_let_with_irregular_spacing() {
    let ((_, _, _, value), cursor) = run(&let_x(), "let\tx\n=   7  ").unwrap();
    assert_eq!(value, 7.0);
    assert!(cursor.eos());
}

#[test]
fn test_let_wrong_name() {
    let failure = run(&let_x(), "let y = 1").unwrap_err();
    assert_eq!(failure.expected(), "x");
    assert_eq!(failure.position(), 4);
}

#[test]
fn test_let_missing_value() {
    let failure = run(&let_x(), "let x = ").unwrap_err();
    assert_eq!(failure.position(), 8);
    assert!(failure.to_string().contains("line 1, byte offset 8"));
}

#[test]
fn test_alt_reports_last_alternative() {
    let parser = alt((literal("a"), literal("b"), literal("c")));

    let failure = run(&parser, "d").unwrap_err();
    assert_eq!(failure.expected(), "c");
    assert_eq!(failure.position(), 0);
}

#[test]
fn test_many_digits_on_letters() {
    let (digits, cursor) = run(&many(digit()), "abc").unwrap();
    assert!(digits.is_empty());
    assert_eq!(cursor.position(), 0);
}

/// `let <identifier> = <number>` with whole-word keywords
fn statement<'code>() -> impl Parser<'code, Output = (&'code str, Number)> {
    seq((
        keyword("let"),
        token(identifier()),
        keyword("="),
        token(number()),
    ))
    .map(|(_, name, _, value)| (name, value))
}

#[test]
fn test_statement_with_identifier() {
    let ((name, value), cursor) = run(&statement(), "let total = 42").unwrap();
    assert_eq!(name, "total");
    assert_eq!(value, Number::Integer(42));
    assert!(cursor.eos());
}

#[test]
fn test_statement_keyword_needs_whole_word() {
    let failure = run(&statement(), "letter = 1").unwrap_err();
    assert_eq!(failure.expected(), "let");
    assert_eq!(failure.position(), 0);
}

#[test]
fn test_statements_in_sequence() {
    let input = "let a = 1\nlet b = 2.5\n";
    let (statements, cursor) = run(&many(statement()), input).unwrap();

    assert_eq!(
        statements,
        vec![("a", Number::Integer(1)), ("b", Number::Float(2.5))]
    );
    assert!(cursor.eos());
}

#[test]
fn test_words_from_the_middle() {
    let input = "let x = 1";
    let (words, cursor) = many(until_whitespace())
        .parse(Cursor::at(input, 4))
        .unwrap();
    assert_eq!(words, vec!["x", "=", "1"]);
    assert!(cursor.eos());
}
